//! Default landing route after login.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::pages::add_volunteer_post::ADD_VOLUNTEER_POST_PATH;
use crate::state::auth::AuthSession;
use crate::util::auth::LOGIN_PATH;

#[component]
pub fn HomePage(auth: AuthSession) -> impl IntoView {
    let state = auth.state;
    let greeting = move || {
        state.with(|s| match &s.user {
            Some(user) => format!("Welcome, {}", user.organizer_name()),
            None if s.loading => "Checking your session...".to_owned(),
            None => "Welcome to VolunteerHub".to_owned(),
        })
    };
    let signed_in = move || state.with(|s| s.user.is_some());

    view! {
        <Title text="VolunteerHub"/>
        <div class="home-page">
            <h1>{greeting}</h1>
            <Show
                when=signed_in
                fallback=|| view! { <a class="login-button" href=LOGIN_PATH>"Login"</a> }
            >
                <a class="login-button" href=ADD_VOLUNTEER_POST_PATH>"Add Volunteer Post"</a>
            </Show>
        </div>
    }
}
