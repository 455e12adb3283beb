use crate::config::{HELP_ACCOUNT, HELP_SEARCH, HELP_TEXT, HELP_VAULT};
use crate::error::CommandError;
use crate::models::ResultEntry;

/// `help [topic]`. Topics are expected lowercased.
pub fn help(topic: Option<&str>) -> Result<ResultEntry, CommandError> {
    let text = match topic {
        None => HELP_TEXT,
        Some("vault") => HELP_VAULT,
        Some("account") => HELP_ACCOUNT,
        Some("search") => HELP_SEARCH,
        Some(other) => return Err(CommandError::UnknownTopic(other.to_string())),
    };
    Ok(ResultEntry::info(text.trim_end()))
}
