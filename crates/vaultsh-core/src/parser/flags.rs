//! `--name value` flag extraction.

use std::collections::{BTreeMap, BTreeSet};

use super::lexer::Token;

/// Flags of a single command line.
///
/// A later occurrence of the same flag replaces the earlier one. A flag with
/// no value is kept as a switch: [`Flags::has`] sees it, [`Flags::get`] does not.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flags {
    values: BTreeMap<String, String>,
    switches: BTreeSet<String>,
}

impl Flags {
    /// Collect flags from lexer tokens.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut flags = Self::default();
        let mut iter = tokens.iter().peekable();

        while let Some(token) = iter.next() {
            let Some(name) = flag_name(token) else {
                continue;
            };

            let value = match iter.peek() {
                Some(Token::Quoted(v)) => Some(v.clone()),
                Some(Token::Word(v)) if !v.starts_with("--") => Some(v.clone()),
                _ => None,
            };

            match value {
                Some(v) => {
                    iter.next();
                    flags.set(name, v);
                }
                None => flags.set_switch(name),
            }
        }

        flags
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.switches.remove(name);
        self.values.insert(name.to_string(), value.into());
    }

    pub fn set_switch(&mut self, name: &str) {
        self.values.remove(name);
        self.switches.insert(name.to_string());
    }

    /// Value of a flag. Empty values count as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Whether the flag appeared at all, with or without a value.
    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name) || self.switches.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.switches.is_empty()
    }
}

/// Name of a `--flag` token, if it is one.
fn flag_name(token: &Token) -> Option<&str> {
    let Token::Word(word) = token else {
        return None;
    };
    let name = word.strip_prefix("--")?;
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    valid.then_some(name)
}
