//! UI components built with Leptos.
//!
//! - [`Terminal`] - Full terminal overlay
//! - [`CommandBar`] - Inline quick-command bar
//! - [`Navigation`] - Page tabs
//! - [`PageView`] - Read-only overview, vault, account and profile pages

mod command_bar;
mod navigation;
mod pages;
pub mod terminal;

pub use command_bar::CommandBar;
pub use navigation::Navigation;
pub use pages::PageView;
pub use terminal::Terminal;
