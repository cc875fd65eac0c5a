//! Tab item data structure
//!
//! A tab item pairs a label with an optional symbol and the index it is
//! selected by. Items are immutable once built; a new set of items means a
//! new render pass.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Position of an item among its siblings, compared against the shared selection.
pub type TabIndex = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabItem {
    /// Rendering identity, never used for selection
    id: String,
    /// Text to display
    label: String,
    /// Optional icon name shown next to the label
    symbol: Option<String>,
    /// Value compared against the shared selection
    index: TabIndex,
}

/// How the label and symbol of an item are put together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition<'a> {
    LabelOnly { label: &'a str },
    LabelWithIcon { label: &'a str, symbol: &'a str },
}

impl TabItem {
    pub fn new(label: impl Into<String>, index: TabIndex) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            label: label.into(),
            symbol: None,
            index,
        }
    }

    /// Use a caller-supplied identity instead of a generated one
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn index(&self) -> TabIndex {
        self.index
    }

    pub fn composition(&self) -> Composition<'_> {
        match self.symbol.as_deref() {
            Some(symbol) => Composition::LabelWithIcon {
                label: &self.label,
                symbol,
            },
            None => Composition::LabelOnly { label: &self.label },
        }
    }
}
