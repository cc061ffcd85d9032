//! Login page supporting email + password, GitHub and Google sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only password login is followed by the backend session exchange; the two
//! federated buttons stop once the identity provider accepts the user. The
//! inputs are cleared right after a password submit is dispatched, whatever
//! its eventual outcome.

use leptos::prelude::*;
use leptos_meta::Title;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api::SharedVolunteerApi;
use crate::net::identity::OAuthProvider;
use crate::state::auth::AuthSession;
use crate::state::login_form::{LoginBlocked, LoginForm, MISSING_CREDENTIALS_MESSAGE};
use crate::state::toast::Toaster;
use crate::util::auth::{REDIRECT_PARAM, post_login_target};

#[component]
pub fn LoginPage(auth: AuthSession, api: SharedVolunteerApi, toaster: Toaster) -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let info = RwSignal::new(String::new());
    let oauth_busy = RwSignal::new(false);
    let navigate = use_navigate();
    let query = use_query_map();

    let on_submit = {
        let auth = auth.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let mut claimed = None;
            form.update(|f| claimed = Some(f.begin_submit()));
            let credentials = match claimed {
                Some(Ok(credentials)) => credentials,
                Some(Err(LoginBlocked::MissingField)) => {
                    info.set(MISSING_CREDENTIALS_MESSAGE.to_owned());
                    return;
                }
                Some(Err(LoginBlocked::InFlight)) | None => return,
            };
            info.set(String::new());
            let target = post_login_target(query.with_untracked(|q| q.get(REDIRECT_PARAM)).as_deref());

            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                let api = api.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let outcome = crate::pages::login_submit::submit_credentials(
                        &auth,
                        api.as_ref(),
                        &toaster,
                        credentials,
                        &target,
                    )
                    .await;
                    if let crate::pages::login_submit::LoginOutcome::Navigate(path) = outcome {
                        navigate(&path, NavigateOptions::default());
                    }
                    form.update(LoginForm::finish_submit);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&auth, &api, &navigate, credentials, target);
                form.update(LoginForm::finish_submit);
            }

            form.update(LoginForm::clear_fields);
        }
    };

    let federated = move |provider: OAuthProvider| {
        if oauth_busy.get_untracked() {
            return;
        }
        oauth_busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                let _ = crate::pages::login_submit::submit_federated(&auth, &toaster, provider).await;
                oauth_busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, provider);
            oauth_busy.set(false);
        }
    };
    let on_github = {
        let federated = federated.clone();
        move |_| federated(OAuthProvider::GitHub)
    };
    let on_google = move |_| federated(OAuthProvider::Google);

    let password_type = move || form.with(|f| f.password_input_type());
    let reveal_label = move || if form.with(|f| f.show_password) { "Hide password" } else { "Show password" };
    let reveal_text = move || if form.with(|f| f.show_password) { "Hide" } else { "Show" };

    view! {
        <Title text="VolunteerHub | Login"/>
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <label class="text-field">
                        <span class="text-field__label">"Email"</span>
                        <input
                            class="text-field__input"
                            type="email"
                            name="email"
                            required=true
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="text-field login-form__password">
                        <span class="text-field__label">"Password"</span>
                        <input
                            class="text-field__input"
                            type=password_type
                            name="password"
                            required=true
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <button
                            class="login-form__reveal"
                            type="button"
                            aria-label=reveal_label
                            on:click=move |_| form.update(LoginForm::toggle_password_visibility)
                        >
                            {reveal_text}
                        </button>
                    </label>
                    <div class="login-form__extras">
                        <label class="login-form__remember">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.remember_me)
                                on:change=move |ev| form.update(|f| f.remember_me = event_target_checked(&ev))
                            />
                            "Remember Me"
                        </label>
                        <a class="login-form__forgot">"Forgot Password"</a>
                    </div>
                    <button class="login-button" type="submit" disabled=move || form.with(|f| f.submitting)>
                        "Login"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Do not have an account? "
                    <a href="/create_account">"Create an account"</a>
                </p>
            </div>
            <p class="login-divider">"Or"</p>
            <div class="login-federated">
                <button class="login-button login-button--outline" type="button" disabled=move || oauth_busy.get() on:click=on_github>
                    "Continue with GitHub"
                </button>
                <button class="login-button login-button--outline" type="button" disabled=move || oauth_busy.get() on:click=on_google>
                    "Continue with Google"
                </button>
            </div>
        </div>
    }
}
