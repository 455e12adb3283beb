use chrono::{DateTime, Utc};
use leptos::prelude::*;

use vaultsh_core::{Account, AccountRow, EntryKind, Payload, ResultEntry, Vault};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

const MASK: &str = "••••••••";

/// Get CSS class for an entry kind
fn kind_class(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Success => css::textGreen,
        EntryKind::Error => css::textRed,
        EntryKind::Info => css::textYellow,
        EntryKind::Prompt => css::textCyan,
    }
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

#[component]
pub fn Output(entry: ResultEntry) -> impl IntoView {
    let class_name = format!("{} {}", css::line, kind_class(entry.kind));
    view! {
        <div class=css::entry>
            <div class=class_name>{entry.message}</div>
            {entry.payload.map(payload_view)}
        </div>
    }
}

fn payload_view(payload: Payload) -> AnyView {
    match payload {
        Payload::VaultList { vaults } => vault_table(vaults).into_any(),
        Payload::AccountList { accounts } => account_table(accounts).into_any(),
        Payload::VaultDetail { vault, accounts } => view! {
            <div class=css::detail>
                {field("Name", vault.name)}
                {field("Description", vault.description)}
                {field("Created", timestamp(&vault.created_at))}
                {field("Modified", timestamp(&vault.modified_at))}
                {field("Accounts", accounts.len().to_string())}
            </div>
            {account_table(accounts)}
        }
        .into_any(),
        Payload::AccountDetail {
            account,
            vault_name,
            reveal,
        } => account_detail(account, vault_name, reveal).into_any(),
        Payload::SearchResults { vaults, accounts } => {
            let vault_heading =
                (!vaults.is_empty()).then(|| view! { <div class=css::heading>"Vaults"</div> });
            let account_heading =
                (!accounts.is_empty()).then(|| view! { <div class=css::heading>"Accounts"</div> });
            view! {
                {vault_heading}
                {vault_table(vaults)}
                {account_heading}
                {account_table(accounts)}
            }
            .into_any()
        }
        Payload::Stats {
            total_vaults,
            total_accounts,
            recent_accounts,
        } => view! {
            <div class=css::detail>
                {field("Vaults", total_vaults.to_string())}
                {field("Accounts", total_accounts.to_string())}
            </div>
            <div class=css::heading>"Recently modified"</div>
            <div class=css::table>
                {recent_accounts
                    .into_iter()
                    .map(|row| view! {
                        <div class=css::row>
                            <span class=css::textFg>{row.name}</span>
                            <span class=css::textDim>{timestamp(&row.modified_at)}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

fn field(label: &'static str, value: String) -> impl IntoView {
    let value = if value.is_empty() { "-".to_string() } else { value };
    view! {
        <div class=css::row>
            <span class=css::label>{label}</span>
            <span class=css::textFg>{value}</span>
        </div>
    }
}

fn vault_table(vaults: Vec<Vault>) -> impl IntoView {
    view! {
        <div class=css::table>
            {vaults
                .into_iter()
                .map(|vault| view! {
                    <div class=css::row>
                        <span class=format!("{} {}", css::textCyan, css::fontBold)>{vault.name}</span>
                        <span class=css::textDim>{vault.description}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

fn account_table(accounts: Vec<AccountRow>) -> impl IntoView {
    view! {
        <div class=css::table>
            {accounts
                .into_iter()
                .map(|row| view! {
                    <div class=css::row>
                        <span class=css::textFg>{row.name}</span>
                        <span class=css::textDim>{row.username}</span>
                        <span class=css::textDim>{row.vault_name.unwrap_or_default()}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

fn account_detail(account: Account, vault_name: Option<String>, reveal: bool) -> impl IntoView {
    let password = if reveal {
        account.password
    } else {
        MASK.to_string()
    };
    view! {
        <div class=css::detail>
            {field("Name", account.name)}
            {field("Vault", vault_name.unwrap_or_default())}
            {field("Username", account.username)}
            {field("Password", password)}
            {field("URL", account.url)}
            {field("Notes", account.notes)}
            {field("Modified", timestamp(&account.modified_at))}
        </div>
    }
}
