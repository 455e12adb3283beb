//! vaultsh-cli - line-oriented vault terminal.

mod render;

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vaultsh_core::{
    Collaborators, ImmediateScheduler, Interpreter, MemoryStore, Page, ResultEntry, Snapshot,
    SystemClock,
};

const APP_NAME: &str = "vaultsh";

#[derive(Parser)]
#[command(name = "vaultsh-cli")]
#[command(version, about = "Interactive vault and account terminal", long_about = None)]
struct Cli {
    /// JSON snapshot ({"vaults": [...], "accounts": [...]}) to start from
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Name shown in the prompt
    #[arg(short, long, default_value = "user")]
    user: String,

    /// Print each result as a JSON line instead of text
    #[arg(long)]
    json: bool,

    /// Log filter, e.g. "debug" or "vaultsh_core=info" (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn load_store(seed: Option<&PathBuf>) -> Result<MemoryStore> {
    let Some(path) = seed else {
        return Ok(MemoryStore::new());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let snapshot = Snapshot::from_json(&json)
        .with_context(|| format!("invalid seed file {}", path.display()))?;
    info!(
        vaults = snapshot.vaults.len(),
        accounts = snapshot.accounts.len(),
        "seeded store"
    );
    Ok(MemoryStore::from_snapshot(snapshot, SystemClock))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let store = load_store(cli.seed.as_ref())?;

    let page = Rc::new(Cell::new(Page::Overview));
    let exiting = Rc::new(Cell::new(false));
    let ports = {
        let page = Rc::clone(&page);
        let exiting = Rc::clone(&exiting);
        Collaborators::new()
            .with_navigator(move |target: Page| page.set(target))
            .with_exit(move || exiting.set(true))
            .with_scheduler(ImmediateScheduler)
    };
    let mut term = Interpreter::with_collaborators(store, ports);

    println!("Type \"help\" for available commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut shown = 0;

    while !exiting.get() {
        print!("{}@{}:{}$ ", cli.user, APP_NAME, page.get());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;

        term.submit(&line).await;
        debug!(entries = term.log().len(), "line processed");

        // `clear` empties the log
        if term.log().len() < shown {
            shown = 0;
        }
        let echo = ResultEntry::echo(line.trim());
        for entry in &term.log().entries()[shown..] {
            if *entry == echo {
                continue;
            }
            if cli.json {
                println!("{}", serde_json::to_string(entry)?);
            } else {
                println!("{}", render::entry(entry));
            }
        }
        shown = term.log().len();
    }

    Ok(())
}
