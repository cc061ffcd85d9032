//! Labelled form input with inline helper text.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

/// Input (or textarea) bound to a string value with an optional error line.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: Signal<String>,
    #[prop(optional)] error: Option<Signal<Option<&'static str>>>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] input_type: Option<Signal<String>>,
    #[prop(optional)] read_only: bool,
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let error = error.unwrap_or_else(|| Signal::derive(|| None));
    let input_type = input_type.unwrap_or_else(|| Signal::derive(|| "text".to_owned()));
    let emit = move |raw: String| {
        if let Some(cb) = on_input {
            cb.run(raw);
        }
    };
    let field_class = move || {
        if error.get().is_some() { "text-field text-field--error" } else { "text-field" }
    };

    let control = if multiline {
        view! {
            <textarea
                class="text-field__input"
                name=name.clone()
                rows="4"
                readonly=read_only
                required=required
                prop:value=move || value.get()
                on:input=move |ev| emit(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="text-field__input"
                name=name.clone()
                type=move || input_type.get()
                readonly=read_only
                required=required
                prop:value=move || value.get()
                on:input=move |ev| emit(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class=field_class>
            <span class="text-field__label">{label}</span>
            {control}
            <Show when=move || error.get().is_some()>
                <span class="text-field__helper">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
