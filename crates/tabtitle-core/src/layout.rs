//! Layouts produced by the tab title bar
//!
//! The bar is either an inline row of every item, or a collapsed menu whose
//! label shows the active item next to a change-tab affordance.

use serde::Serialize;

use tabtitle_tabs::{DerivedStyle, TabIndex};

/// Symbol drawn next to the selected entry of a collapsed menu
pub const SELECTION_INDICATOR: &str = "checkmark";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "layout", rename_all = "lowercase")]
pub enum Layout {
    Row(Vec<ItemView>),
    Menu(CollapsedMenu),
}

impl Layout {
    pub fn is_row(&self) -> bool {
        matches!(self, Layout::Row(_))
    }

    pub fn is_menu(&self) -> bool {
        matches!(self, Layout::Menu(_))
    }

    /// Items in display order, regardless of layout
    pub fn items(&self) -> &[ItemView] {
        match self {
            Layout::Row(items) => items,
            Layout::Menu(menu) => &menu.entries,
        }
    }
}

/// One styled tab item ready to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub id: String,
    pub index: TabIndex,
    pub label: String,
    pub symbol: Option<String>,
    pub active: bool,
    /// Style for the current animation frame
    pub style: DerivedStyle,
    /// Only set inside a menu, on the selected entry
    pub indicator: Option<&'static str>,
}

/// The active item shown on its own as the menu label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub label: String,
    pub symbol: Option<String>,
    pub style: DerivedStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollapsedMenu {
    /// Absent when the selection matches no item
    pub summary: Option<Summary>,
    pub change_tab_label: String,
    pub change_tab_symbol: String,
    pub entries: Vec<ItemView>,
}
