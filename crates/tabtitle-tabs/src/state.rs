//! Tab activity state
//!
//! ```text
//! selection == index  ->  Active
//! selection != index  ->  Inactive
//! ```
//!
//! Out-of-range selections leave every item inactive. Duplicate indices
//! make every item sharing the selected index active; callers are expected
//! to keep indices unique within one bar.

use serde::{Deserialize, Serialize};

use crate::tab::TabIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabState {
    /// Item index equals the shared selection
    Active,
    /// Any other item
    Inactive,
}

impl TabState {
    /// Activity of the item at `index` under the given selection
    pub fn for_selection(index: TabIndex, selection: TabIndex) -> Self {
        if index == selection {
            TabState::Active
        } else {
            TabState::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TabState::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabState::Active => "active",
            TabState::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for TabState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(TabState::Active),
            "inactive" => Ok(TabState::Inactive),
            _ => Err(format!("Unknown tab state: {}", s)),
        }
    }
}
