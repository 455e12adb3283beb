use std::fmt;

use serde::{Deserialize, Serialize};

/// Application views reachable with `open`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Overview,
    Vaults,
    Accounts,
    Profile,
}

impl Page {
    /// Parse a page name, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|page| page.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Vaults => "vaults",
            Self::Accounts => "accounts",
            Self::Profile => "profile",
        }
    }

    pub fn all() -> &'static [Page] {
        &[Self::Vaults, Self::Accounts, Self::Profile, Self::Overview]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
