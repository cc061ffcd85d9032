//! Add-volunteer-post page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requires a signed-in user: signed-out visitors are redirected to `/login`
//! with this route recorded as the return target. Organizer fields mirror the
//! session identity and cannot be edited.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
use crate::net::api::SharedVolunteerApi;
use crate::net::types::Category;
use crate::state::auth::AuthSession;
use crate::state::post_form::{PostField, PostForm};
use crate::state::toast::Toaster;
use crate::util::auth::install_unauth_redirect;

pub const ADD_VOLUNTEER_POST_PATH: &str = "/add_volunteer_post";

#[component]
pub fn AddVolunteerPostPage(auth: AuthSession, api: SharedVolunteerApi, toaster: Toaster) -> impl IntoView {
    let auth_state = auth.state;
    install_unauth_redirect(auth_state, ADD_VOLUNTEER_POST_PATH, use_navigate());

    let form = RwSignal::new(PostForm::for_user(auth.user().as_ref()));

    // The session may resolve after mount; keep the read-only identity in step.
    Effect::new(move || {
        let user = auth_state.with(|s| s.user.clone());
        form.update(|f| f.sync_identity(user.as_ref()));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = auth.user();
        let mut prepared = None;
        form.update(|f| {
            prepared = crate::pages::add_volunteer_post_submit::prepare_post(f, user.as_ref(), &toaster);
        });
        let Some(post) = prepared else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let outcome =
                    crate::pages::add_volunteer_post_submit::submit_post(api.as_ref(), &toaster, &post).await;
                form.update(|f| crate::pages::add_volunteer_post_submit::apply_outcome(f, outcome, user.as_ref()));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, post);
            form.update(PostForm::finish_submit);
        }
    };

    let field_value = move |field: PostField| Signal::derive(move || form.with(|f| f.value(field).to_owned()));
    let field_error = move |field: PostField| Signal::derive(move || form.with(|f| f.error(field)));
    let field_input = move |field: PostField| Callback::new(move |raw: String| form.update(|f| f.set(field, raw)));

    let text_field = move |field: PostField, input_type: &'static str, multiline: bool| {
        view! {
            <TextField
                label=field.label()
                name=field.name()
                value=field_value(field)
                error=field_error(field)
                on_input=field_input(field)
                input_type=Signal::derive(move || input_type.to_owned())
                required=field.required_message().is_some()
                multiline=multiline
            />
        }
    };
    let identity_field = move |field: PostField| {
        view! {
            <TextField
                label=field.label()
                name=field.name()
                value=field_value(field)
                error=field_error(field)
                read_only=true
            />
        }
    };

    let category_error = field_error(PostField::Category);
    let category_value = field_value(PostField::Category);
    let on_category = field_input(PostField::Category);
    let category_class =
        move || if category_error.get().is_some() { "text-field text-field--error" } else { "text-field" };

    view! {
        <Title text="VolunteerHub | Add Volunteer Post"/>
        <div class="add-post-page">
            <h2 class="add-post-page__title">"Add Volunteer Post"</h2>
            <form class="add-post-form" on:submit=on_submit>
                {text_field(PostField::Thumbnail, "url", false)}
                {text_field(PostField::PostTitle, "text", false)}
                {text_field(PostField::Description, "text", true)}
                <label class=category_class>
                    <span class="text-field__label">{PostField::Category.label()}</span>
                    <select
                        class="text-field__input"
                        name=PostField::Category.name()
                        required=true
                        prop:value=move || category_value.get()
                        on:change=move |ev| on_category.run(event_target_value(&ev))
                    >
                        <option value="" disabled=true>"Select a category"</option>
                        {Category::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                            .collect_view()}
                    </select>
                    <Show when=move || category_error.get().is_some()>
                        <span class="text-field__helper">{move || category_error.get().unwrap_or_default()}</span>
                    </Show>
                </label>
                {text_field(PostField::Location, "text", false)}
                {text_field(PostField::VolunteersNeeded, "number", false)}
                {text_field(PostField::Deadline, "date", false)}
                {identity_field(PostField::OrganizerName)}
                {identity_field(PostField::OrganizerEmail)}
                <button class="add-post-form__submit" type="submit" disabled=move || form.with(|f| f.submitting)>
                    "Add Post"
                </button>
            </form>
        </div>
    }
}
