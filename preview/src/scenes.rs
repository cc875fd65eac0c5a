//! Preview scenes

use tabtitle_core::{TabIndex, TabItem};

pub struct Scene {
    pub name: &'static str,
    pub items: Vec<TabItem>,
    /// Collapsed menu affordance, when overridden
    pub change_tab: Option<(&'static str, &'static str)>,
}

/// Three numbered tabs with circle symbols
pub fn small() -> Scene {
    Scene {
        name: "Small",
        items: (0..3)
            .map(|i| TabItem::new(format!("Item {}", i), i).with_symbol(format!("{}.circle", i)))
            .collect(),
        change_tab: None,
    }
}

/// Seven plain tabs, too many for a phone-width row
pub fn large() -> Scene {
    let labels = [
        "Shoes",
        "Workouts",
        "Recents",
        "Equipment",
        "Routing",
        "Replacements",
        "Settings",
    ];

    Scene {
        name: "Large",
        items: labels
            .iter()
            .enumerate()
            .map(|(i, label)| TabItem::new(*label, i as TabIndex))
            .collect(),
        change_tab: None,
    }
}

/// Long titles with symbols and a custom change-tab affordance
pub fn very_large() -> Scene {
    Scene {
        name: "VeryLarge",
        items: vec![
            TabItem::new("Long Text Here", 0).with_symbol("circle.dashed"),
            TabItem::new("More Long Text Here", 1).with_symbol("circle.hexagonpath"),
            TabItem::new("This is supposed to break to a new line", 2)
                .with_symbol("circle.hexagongrid"),
        ],
        change_tab: Some(("Switch Tab", "arrow.triangle.branch")),
    }
}

pub fn all() -> Vec<Scene> {
    vec![small(), large(), very_large()]
}
