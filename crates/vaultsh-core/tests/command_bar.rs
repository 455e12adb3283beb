//! End-to-end behavior of the inline command bar.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{ManualScheduler, Recorder, clock, store};
use vaultsh_core::config::FEEDBACK_TIMEOUT;
use vaultsh_core::{
    Collaborators, CommandBar, EntryKind, MemoryStore, Page, ResultEntry, VaultStore,
};

/// Answers every question with `answer` and remembers what was asked.
#[derive(Clone)]
struct ScriptedConfirm {
    answer: bool,
    asked: Rc<RefCell<Vec<String>>>,
}

impl ScriptedConfirm {
    fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Rc::default(),
        }
    }
}

impl vaultsh_core::ConfirmPrompt for ScriptedConfirm {
    fn confirm(&self, question: &str) -> bool {
        self.asked.borrow_mut().push(question.to_string());
        self.answer
    }
}

struct Fixture {
    bar: CommandBar<Rc<MemoryStore>>,
    store: Rc<MemoryStore>,
    recorder: Recorder,
    scheduler: ManualScheduler,
    confirm: ScriptedConfirm,
}

fn fixture(answer: bool) -> Fixture {
    let store = store(&clock());
    let recorder = Recorder::default();
    let scheduler = ManualScheduler::default();
    let confirm = ScriptedConfirm::new(answer);
    let bar = CommandBar::new(
        Rc::clone(&store),
        recorder.collaborators(&scheduler),
        confirm.clone(),
    );
    Fixture {
        bar,
        store,
        recorder,
        scheduler,
        confirm,
    }
}

fn feedback(bar: &CommandBar<Rc<MemoryStore>>) -> ResultEntry {
    bar.feedback().expect("feedback should be visible")
}

#[tokio::test]
async fn test_exit_returns_to_overview_immediately() {
    let f = fixture(true);
    f.bar.submit("quit").await;

    assert_eq!(f.recorder.pages(), [Page::Overview]);
    assert_eq!(feedback(&f.bar), ResultEntry::info("Returning to overview..."));
}

#[tokio::test]
async fn test_open_navigates_immediately() {
    let f = fixture(true);
    f.bar.submit("open profile").await;
    assert_eq!(f.recorder.pages(), [Page::Profile]);
    assert_eq!(feedback(&f.bar).message, "Opening profile page...");

    f.bar.submit("open attic").await;
    assert_eq!(feedback(&f.bar).kind, EntryKind::Error);
    assert_eq!(f.recorder.pages(), [Page::Profile]);
}

#[tokio::test]
async fn test_help_is_one_line() {
    let f = fixture(true);
    f.bar.submit("help").await;
    assert_eq!(
        feedback(&f.bar).message,
        "Available commands: exit, open [page], vault [action], account [action]"
    );
}

#[tokio::test]
async fn test_subset_only() {
    let f = fixture(true);
    f.bar.submit("vault list").await;
    assert_eq!(
        feedback(&f.bar).message,
        "Unknown vault command. Use: create, delete"
    );

    f.bar.submit("account show --name x").await;
    assert_eq!(
        feedback(&f.bar).message,
        "Unknown account command. Use: create, delete, password"
    );

    f.bar.submit("stats").await;
    assert_eq!(
        feedback(&f.bar).message,
        "Unknown command: \"stats\". Type \"help\" for available commands."
    );
}

#[tokio::test]
async fn test_approved_delete_executes_without_gate() {
    let f = fixture(true);
    f.bar.submit("vault create --name Old").await;
    f.bar.submit("vault delete --name old").await;

    assert_eq!(
        *f.confirm.asked.borrow(),
        ["Delete vault \"Old\"? This action cannot be undone."]
    );
    assert_eq!(feedback(&f.bar).message, "Vault \"Old\" deleted successfully.");
    assert!(f.store.list_vaults().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_declined_delete_changes_nothing() {
    let f = fixture(false);
    f.bar.submit("vault create --name Keep").await;
    let before = feedback(&f.bar);

    f.bar.submit("vault delete --name Keep").await;
    assert_eq!(f.confirm.asked.borrow().len(), 1);
    assert_eq!(feedback(&f.bar), before);
    assert_eq!(f.store.list_vaults().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_password_copied_without_showing_secret() {
    let f = fixture(true);
    f.bar.submit("vault create --name V").await;
    f.bar
        .submit("account create --vault V --name Bank --username me --password hunter2")
        .await;
    f.bar.submit("account password --name bank").await;

    let entry = feedback(&f.bar);
    assert_eq!(entry.message, "Password for \"Bank\" copied to clipboard.");
    assert!(!entry.message.contains("hunter2"));
    assert_eq!(f.recorder.copied(), ["hunter2"]);
}

#[tokio::test]
async fn test_password_without_clipboard() {
    let store = store(&clock());
    let scheduler = ManualScheduler::default();
    let ports = Collaborators::new().with_scheduler(scheduler.clone());
    let bar = CommandBar::new(Rc::clone(&store), ports, |_: &str| true);
    bar.submit("vault create --name V").await;
    bar.submit("account create --vault V --name Bank --username me --password pw")
        .await;
    bar.submit("account password --name Bank").await;
    assert_eq!(
        bar.feedback().map(|e| e.message),
        Some("Clipboard not available in this context.".to_string())
    );

    scheduler.flush();
    assert!(bar.feedback().is_none());
}

#[tokio::test]
async fn test_immediate_scheduler_keeps_feedback_until_replaced() {
    let store = store(&clock());
    let bar = CommandBar::new(Rc::clone(&store), Collaborators::new(), |_: &str| true);

    bar.submit("help").await;
    assert_eq!(bar.feedback().map(|e| e.kind), Some(EntryKind::Info));

    bar.submit("vault create --name V").await;
    assert_eq!(
        bar.feedback().map(|e| e.message),
        Some("Vault \"V\" created successfully.".to_string())
    );
}

#[tokio::test]
async fn test_feedback_clears_after_timeout() {
    let f = fixture(true);
    f.bar.submit("help").await;
    assert_eq!(f.scheduler.delays(), [FEEDBACK_TIMEOUT]);

    f.scheduler.flush();
    assert!(f.bar.feedback().is_none());
}

#[tokio::test]
async fn test_stale_timer_does_not_clear_newer_feedback() {
    let f = fixture(true);
    f.bar.submit("help").await;
    f.bar.submit("open vaults").await;
    assert_eq!(f.scheduler.pending(), 2);

    // first timer belongs to the help entry
    f.scheduler.run_next();
    assert_eq!(feedback(&f.bar).message, "Opening vaults page...");

    f.scheduler.run_next();
    assert!(f.bar.feedback().is_none());
}

#[tokio::test]
async fn test_blank_input_is_ignored() {
    let f = fixture(true);
    f.bar.submit("   ").await;
    assert!(f.bar.feedback().is_none());
    assert_eq!(f.scheduler.pending(), 0);
}
