//! Terminal input component with suggestions and history recall.

use leptos::prelude::CollectView;
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Terminal input field.
///
/// The buffer itself lives in the interpreter; `value` and `suggestions`
/// mirror it and every edit is reported through `on_change`.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    value: RwSignal<String>,
    #[prop(into)] suggestions: Signal<Vec<&'static str>>,
    on_submit: Callback<String>,
    on_change: Callback<String>,
    on_recall: Callback<i32>,
    on_complete: Callback<()>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            on_submit.run(value.get_untracked());
        }
        "Tab" => {
            ev.prevent_default();
            on_complete.run(());
            move_cursor_to_end();
        }
        "ArrowUp" => {
            ev.prevent_default();
            on_recall.run(-1);
            move_cursor_to_end();
        }
        "ArrowDown" => {
            ev.prevent_default();
            on_recall.run(1);
        }
        "c" if ev.ctrl_key() => {
            on_change.run(String::new());
        }
        "l" if ev.ctrl_key() => {
            ev.prevent_default();
            on_submit.run("clear".to_string());
        }
        _ => {}
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        on_change.run(input.value());
    };

    let suggestions_view = move || {
        let matches = suggestions.get();
        if matches.is_empty() {
            None
        } else {
            Some(view! {
                <div class=css::suggestions>
                    {matches.into_iter().enumerate().map(|(i, s)| {
                        // Tab completes the first one
                        let class_name = if i == 0 {
                            format!("{} {}", css::suggestion, css::suggestionActive)
                        } else {
                            css::suggestion.to_string()
                        };
                        view! { <span class=class_name>{s}</span> }
                    }).collect_view()}
                </div>
            })
        }
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=css::prompt>{prompt}</span>
                <span class=css::separator>"$ "</span>
                <input
                    node_ref=input_ref
                    type="text"
                    class=css::input
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=value
                    on:input=handle_input
                    on:keydown=handle_keydown
                />
            </div>
            {suggestions_view}
        </div>
    }
}
