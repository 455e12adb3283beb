//! Read-only page views over the store.
//!
//! Editing happens through the terminal and the command bar; these views
//! re-render whenever the store's revision changes.

use leptos::prelude::*;

use vaultsh_core::config::RECENT_ACTIVITY_LIMIT;
use vaultsh_core::{Account, Page, Snapshot};

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/pages.module.css");

const MASK: &str = "••••••••";

fn vault_name<'a>(snapshot: &'a Snapshot, account: &Account) -> &'a str {
    snapshot
        .vaults
        .iter()
        .find(|v| v.id == account.vault_id)
        .map_or("-", |v| v.name.as_str())
}

/// Page currently selected in the context.
#[component]
pub fn PageView() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    move || match ctx.page.get() {
        Page::Overview => view! { <Overview /> }.into_any(),
        Page::Vaults => view! { <Vaults /> }.into_any(),
        Page::Accounts => view! { <Accounts /> }.into_any(),
        Page::Profile => view! { <ProfileView /> }.into_any(),
    }
}

// ============================================================================
// Overview
// ============================================================================

#[component]
fn Overview() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let body = move || {
        let snapshot = ctx.snapshot();
        let mut recent: Vec<&Account> = snapshot.accounts.iter().collect();
        recent.sort_by_key(|a| std::cmp::Reverse(a.modified_at));
        let rows = recent
            .into_iter()
            .take(RECENT_ACTIVITY_LIMIT)
            .map(|account| {
                view! {
                    <tr>
                        <td>{account.name.clone()}</td>
                        <td>{vault_name(&snapshot, account).to_string()}</td>
                        <td>{account.modified_at.format("%Y-%m-%d %H:%M").to_string()}</td>
                    </tr>
                }
            })
            .collect_view();

        view! {
            <div class=css::cards>
                <div class=css::card>
                    <div class=css::cardValue>{snapshot.vaults.len()}</div>
                    <div class=css::cardLabel>"Vaults"</div>
                </div>
                <div class=css::card>
                    <div class=css::cardValue>{snapshot.accounts.len()}</div>
                    <div class=css::cardLabel>"Accounts"</div>
                </div>
            </div>
            <h2 class=css::heading>"Recent activity"</h2>
            <table class=css::table>
                <tbody>{rows}</tbody>
            </table>
        }
    };

    view! {
        <section class=css::page>
            {body}
            <button class=css::action on:click=move |_| ctx.terminal_open.set(true)>
                "Open terminal"
            </button>
        </section>
    }
}

// ============================================================================
// Vaults & Accounts
// ============================================================================

#[component]
fn Vaults() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let rows = move || {
        let snapshot = ctx.snapshot();
        snapshot
            .vaults
            .iter()
            .map(|vault| {
                let count = snapshot
                    .accounts
                    .iter()
                    .filter(|a| a.vault_id == vault.id)
                    .count();
                view! {
                    <tr>
                        <td>{vault.name.clone()}</td>
                        <td>{vault.description.clone()}</td>
                        <td>{count}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class=css::page>
            <h2 class=css::heading>"Vaults"</h2>
            <table class=css::table>
                <thead>
                    <tr><th>"Name"</th><th>"Description"</th><th>"Accounts"</th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}

#[component]
fn Accounts() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let rows = move || {
        let snapshot = ctx.snapshot();
        snapshot
            .accounts
            .iter()
            .map(|account| {
                view! {
                    <tr>
                        <td>{account.name.clone()}</td>
                        <td>{account.username.clone()}</td>
                        <td>{MASK}</td>
                        <td>{vault_name(&snapshot, account).to_string()}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class=css::page>
            <h2 class=css::heading>"Accounts"</h2>
            <table class=css::table>
                <thead>
                    <tr><th>"Name"</th><th>"Username"</th><th>"Password"</th><th>"Vault"</th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}

// ============================================================================
// Profile
// ============================================================================

#[component]
fn ProfileView() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <section class=css::page>
            <h2 class=css::heading>"Profile"</h2>
            <div class=css::field>
                <span>"Username"</span>
                <span>{move || ctx.profile.with(|p| p.username.clone())}</span>
            </div>
            <div class=css::status>{move || ctx.prompt()}</div>
        </section>
    }
}
