//! Root application module.
//!
//! Contains the main App component and the AppContext shared by the pages,
//! the terminal overlay and the command bar.

use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;

use vaultsh_core::{Page, Snapshot};

use crate::components::{CommandBar, Navigation, PageView, Terminal};
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::platform::BrowserStorage;
use crate::store::{BrowserStore, Profile};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`. The store itself is not `Send`, so it is
/// kept in a local [`StoredValue`]; `revision` is bumped after every
/// persisted mutation so views that read the store re-render.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page shown behind the terminal.
    pub page: RwSignal<Page>,
    /// Whether the full terminal overlay is open.
    pub terminal_open: RwSignal<bool>,
    /// Bumped on every store change.
    pub revision: RwSignal<u64>,
    pub profile: RwSignal<Profile>,
    store: StoredValue<Rc<BrowserStore>, LocalStorage>,
}

impl AppContext {
    pub fn new() -> Self {
        let revision = RwSignal::new(0);
        let store = BrowserStore::load(BrowserStorage)
            .on_change(move || revision.update(|r| *r += 1));
        Self {
            page: RwSignal::new(Page::default()),
            terminal_open: RwSignal::new(false),
            revision,
            profile: RwSignal::new(Profile::load(&BrowserStorage)),
            store: StoredValue::new_local(Rc::new(store)),
        }
    }

    pub fn store(&self) -> Rc<BrowserStore> {
        self.store.get_value()
    }

    /// Store contents, tracked by `revision`.
    pub fn snapshot(&self) -> Snapshot {
        self.revision.track();
        self.store.with_value(|store| store.snapshot())
    }

    /// Switch page and close the terminal overlay.
    pub fn navigate(&self, page: Page) {
        self.page.set(page);
        self.terminal_open.set(false);
    }

    pub fn prompt(&self) -> String {
        let user = self.profile.with(|p| p.username.clone());
        format!("{}@{}", user, APP_NAME)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Escape closes the terminal overlay
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && ctx.terminal_open.get_untracked() {
            ctx.terminal_open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fatal>
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <div class=css::app>
                <header class=css::header>
                    <div class=css::title>"SECURE VAULT"</div>
                    <div class=css::tagline>{APP_TAGLINE}</div>
                </header>
                <Navigation />
                <CommandBar />
                <main class=css::main>
                    <PageView />
                </main>
                <Show when=move || ctx.terminal_open.get()>
                    <Terminal />
                </Show>
            </div>
        </ErrorBoundary>
    }
}
