//! Inline command bar shown above every page.
//!
//! Wraps the core [`CommandBar`](vaultsh_core::CommandBar): one line in, one
//! transient feedback entry out. Deletes are confirmed with
//! `window.confirm`, and the timer that clears the feedback bumps `tick` so
//! the view re-reads it.

use std::rc::Rc;

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use vaultsh_core::{Collaborators, EntryKind, Page};

use crate::app::AppContext;
use crate::platform::{self, TimerScheduler};
use crate::store::BrowserStore;

stylance::import_crate_style!(css, "src/components/command_bar.module.css");

type Bar = vaultsh_core::CommandBar<Rc<BrowserStore>>;

#[component]
pub fn CommandBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let tick = RwSignal::new(0u64);
    let (value, set_value) = signal(String::new());

    let ports = Collaborators::new()
        .with_navigator(move |page: Page| ctx.navigate(page))
        .with_clipboard(|text: &str| platform::write_clipboard(text))
        .with_scheduler(TimerScheduler::new(move || tick.update(|t| *t += 1)));
    let bar = StoredValue::new_local(Rc::new(Bar::new(
        ctx.store(),
        ports,
        |question: &str| platform::confirm(question),
    )));

    let feedback = Signal::derive(move || {
        tick.track();
        bar.with_value(|bar| bar.feedback())
    });

    let submit = move |line: String| {
        let bar = bar.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            bar.submit(&line).await;
            tick.update(|t| *t += 1);
        });
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            submit(value.get_untracked());
            set_value.set(String::new());
        }
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_value.set(input.value());
    };

    let feedback_view = move || {
        feedback.get().map(|entry| {
            let class_name = match entry.kind {
                EntryKind::Success => css::success,
                EntryKind::Error => css::error,
                EntryKind::Info | EntryKind::Prompt => css::info,
            };
            view! { <div class=format!("{} {}", css::feedback, class_name)>{entry.message}</div> }
        })
    };

    view! {
        <div class=css::bar>
            <span class=css::prompt>"> "</span>
            <input
                type="text"
                class=css::input
                placeholder="Quick command (try \"help\")"
                autocomplete="off"
                spellcheck="false"
                prop:value=value
                on:input=handle_input
                on:keydown=handle_keydown
            />
            {feedback_view}
        </div>
    }
}
