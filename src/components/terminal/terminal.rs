//! Terminal overlay component.
//!
//! Owns one [`Interpreter`] for as long as the overlay is open. Submitted
//! lines go through a FIFO queue drained by a single local task, so a line
//! typed while a store call is in flight runs after it, never alongside.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use leptos::prelude::*;

use vaultsh_core::{Collaborators, Interpreter, Page, ResultEntry};

use super::{Input, Output};
use crate::app::AppContext;
use crate::platform::{self, TimerScheduler};
use crate::store::BrowserStore;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

type Term = Interpreter<Rc<BrowserStore>>;

// ============================================================================
// Session
// ============================================================================

/// Interpreter plus its submission queue.
///
/// The interpreter is taken out of its slot while a line runs; buffer
/// operations that arrive meanwhile find the slot empty and are skipped.
struct Session {
    term: RefCell<Option<Term>>,
    queue: RefCell<VecDeque<String>>,
    draining: Cell<bool>,
}

impl Session {
    fn new(term: Term) -> Self {
        Self {
            term: RefCell::new(Some(term)),
            queue: RefCell::new(VecDeque::new()),
            draining: Cell::new(false),
        }
    }

    fn with_term<R>(&self, f: impl FnOnce(&mut Term) -> R) -> Option<R> {
        self.term.borrow_mut().as_mut().map(f)
    }
}

/// Reactive mirror of the interpreter state the view needs.
#[derive(Clone, Copy)]
struct TerminalState {
    entries: RwSignal<Vec<ResultEntry>>,
    awaiting: RwSignal<bool>,
    input: RwSignal<String>,
    suggestions: RwSignal<Vec<&'static str>>,
}

impl TerminalState {
    fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            awaiting: RwSignal::new(false),
            input: RwSignal::new(String::new()),
            suggestions: RwSignal::new(Vec::new()),
        }
    }

    fn sync_log(&self, term: &Term) {
        self.entries.set(term.log().entries().to_vec());
        self.awaiting.set(term.is_awaiting_confirmation());
    }

    fn sync_buffer(&self, term: &Term) {
        self.input.set(term.input().to_string());
        self.suggestions.set(term.suggestions().to_vec());
    }
}

fn enqueue(session: Rc<Session>, state: TerminalState, line: String) {
    session.queue.borrow_mut().push_back(line);
    if session.draining.replace(true) {
        return;
    }
    wasm_bindgen_futures::spawn_local(drain(session, state));
}

async fn drain(session: Rc<Session>, state: TerminalState) {
    loop {
        let Some(line) = session.queue.borrow_mut().pop_front() else {
            break;
        };
        let Some(mut term) = session.term.borrow_mut().take() else {
            break;
        };
        term.submit(&line).await;
        state.sync_log(&term);
        *session.term.borrow_mut() = Some(term);
    }
    session.draining.set(false);
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let ports = Collaborators::new()
        .with_navigator(move |page: Page| ctx.navigate(page))
        .with_exit(move || ctx.terminal_open.set(false))
        .with_clipboard(|text: &str| platform::write_clipboard(text))
        .with_scheduler(TimerScheduler::new(|| ()));
    let session = StoredValue::new_local(Rc::new(Session::new(Interpreter::with_collaborators(
        ctx.store(),
        ports,
    ))));
    let state = TerminalState::new();

    let prompt = Signal::derive(move || {
        if state.awaiting.get() {
            "confirm".to_string()
        } else {
            ctx.prompt()
        }
    });

    let on_submit = Callback::new(move |line: String| {
        let session = session.get_value();
        session.with_term(|term| term.set_input(""));
        state.input.set(String::new());
        state.suggestions.set(Vec::new());
        enqueue(session, state, line);
    });

    let on_change = Callback::new(move |text: String| {
        session.with_value(|s| {
            s.with_term(|term| {
                term.set_input(text);
                state.sync_buffer(term);
            })
        });
    });

    let on_recall = Callback::new(move |direction: i32| {
        session.with_value(|s| {
            s.with_term(|term| {
                if direction < 0 {
                    term.recall_previous();
                } else {
                    term.recall_next();
                }
                state.sync_buffer(term);
            })
        });
    });

    let on_complete = Callback::new(move |_: ()| {
        session.with_value(|s| {
            s.with_term(|term| {
                if term.complete() {
                    state.sync_buffer(term);
                }
            })
        });
    });

    let close = move |_| ctx.terminal_open.set(false);

    view! {
        <div class=css::overlay>
            <div class=css::container>
                <div class=css::titleBar>
                    <span>"vaultsh - terminal"</span>
                    <button class=css::close on:click=close>"[x]"</button>
                </div>
                <div class=css::output>
                    <div class=css::hint>"Type \"help\" for available commands. Esc closes."</div>
                    <For
                        each=move || state.entries.get()
                        key=|entry| entry.id
                        children=|entry| view! { <Output entry=entry /> }
                    />
                </div>
                <div class=css::inputArea>
                    <Input
                        prompt=prompt
                        value=state.input
                        suggestions=state.suggestions
                        on_submit=on_submit
                        on_change=on_change
                        on_recall=on_recall
                        on_complete=on_complete
                    />
                </div>
            </div>
        </div>
    }
}
