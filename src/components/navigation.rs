//! Page tabs.

use leptos::prelude::*;

use vaultsh_core::Page;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/navigation.module.css");

#[component]
pub fn Navigation() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <nav class=css::nav>
            {Page::all()
                .iter()
                .map(|&page| {
                    let class_name = move || {
                        if ctx.page.get() == page {
                            format!("{} {}", css::tab, css::active)
                        } else {
                            css::tab.to_string()
                        }
                    };
                    view! {
                        <button class=class_name on:click=move |_| ctx.navigate(page)>
                            {page.as_str().to_uppercase()}
                        </button>
                    }
                })
                .collect_view()}
            <button class=css::tab on:click=move |_| ctx.terminal_open.set(true)>
                "TERMINAL"
            </button>
        </nav>
    }
}
