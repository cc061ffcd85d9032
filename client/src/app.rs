//! Root application component with routing.
//!
//! Collaborators (auth session, volunteer API, toaster) are built once here
//! and passed to each page as props.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::config::ClientConfig;
use crate::net::api::{HttpVolunteerApi, SharedVolunteerApi};
use crate::net::identity::RemoteAuthProvider;
use crate::pages::{add_volunteer_post::AddVolunteerPostPage, home::HomePage, login::LoginPage};
use crate::state::auth::AuthSession;
use crate::state::toast::Toaster;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = AuthSession::new(Arc::new(RemoteAuthProvider::new(config.identity_base.clone())));
    let api: SharedVolunteerApi = Arc::new(HttpVolunteerApi::new(config.api_base.clone()));
    let toaster = Toaster::new();

    #[cfg(feature = "hydrate")]
    {
        let auth = auth.clone();
        leptos::task::spawn_local(async move { auth.refresh().await });
    }

    let home_view = {
        let auth = auth.clone();
        move || view! { <HomePage auth=auth.clone()/> }
    };
    let login_view = {
        let auth = auth.clone();
        let api = api.clone();
        move || view! { <LoginPage auth=auth.clone() api=api.clone() toaster=toaster/> }
    };
    let add_post_view = move || view! { <AddVolunteerPostPage auth=auth.clone() api=api.clone() toaster=toaster/> };

    view! {
        <Stylesheet id="leptos" href="/pkg/volunteerhub.css"/>
        <Title text="VolunteerHub"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=home_view/>
                    <Route path=StaticSegment("login") view=login_view/>
                    <Route path=StaticSegment("add_volunteer_post") view=add_post_view/>
                </Routes>
            </main>
        </Router>
        <ToastStack toaster=toaster/>
    }
}
