//! Tab title bar
//!
//! Owns the items of one bar and a styler per item. The bar never styles
//! anything itself: it writes the shared selection on interaction and reads
//! each styler back when laying out.

use std::rc::Rc;
use std::time::Duration;

use tabtitle_tabs::{Animation, Selection, SelectionStyler, StylePolicy, TabIndex, TabItem};

use crate::config::Config;
use crate::layout::{CollapsedMenu, ItemView, Layout, Summary, SELECTION_INDICATOR};
use crate::measure::TextMeasure;
use crate::Result;

pub struct TabTitleBar {
    /// Shared with the host, outlives the stylers
    selection: Selection,
    items: Vec<TabItem>,
    /// One per item, same order
    stylers: Vec<SelectionStyler>,
    policy: Rc<dyn StylePolicy>,
    animation: Animation,
    item_spacing: f32,
    change_tab_label: String,
    change_tab_symbol: String,
}

impl TabTitleBar {
    pub fn new(selection: Selection, items: Vec<TabItem>, config: &Config) -> Result<Self> {
        let policy = config.policy()?;
        let stylers = Self::build_stylers(&selection, &items, &policy, config.animation);

        tracing::info!(
            items = items.len(),
            selection = selection.get(),
            policy = policy.name(),
            "Created tab title bar"
        );

        Ok(Self {
            selection,
            items,
            stylers,
            policy,
            animation: config.animation,
            item_spacing: config.item_spacing,
            change_tab_label: config.change_tab_label.clone(),
            change_tab_symbol: config.change_tab_symbol.clone(),
        })
    }

    /// Override the label and symbol of the collapsed menu affordance
    pub fn with_change_tab(mut self, label: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.change_tab_label = label.into();
        self.change_tab_symbol = symbol.into();
        self
    }

    fn build_stylers(
        selection: &Selection,
        items: &[TabItem],
        policy: &Rc<dyn StylePolicy>,
        animation: Animation,
    ) -> Vec<SelectionStyler> {
        items
            .iter()
            .map(|item| SelectionStyler::new(selection, item.index(), Rc::clone(policy), animation))
            .collect()
    }

    pub fn current_selection(&self) -> TabIndex {
        self.selection.get()
    }

    /// Handle a tap on an item: write the shared selection and let every styler follow
    pub fn select_tab(&self, index: TabIndex) {
        tracing::debug!(from = self.selection.get(), to = index, "Select tab");
        self.selection.set(index);
    }

    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    /// Replace the items. Existing stylers are dropped and rebuilt against
    /// the current selection.
    pub fn set_items(&mut self, items: Vec<TabItem>) {
        // Unsubscribe the old stylers before the new ones subscribe
        self.stylers.clear();
        self.stylers = Self::build_stylers(&self.selection, &items, &self.policy, self.animation);
        self.items = items;

        tracing::info!(items = self.items.len(), "Replaced tab items");
    }

    /// Styler of the first item with the given index
    pub fn styler(&self, index: TabIndex) -> Option<&SelectionStyler> {
        self.stylers.iter().find(|s| s.watched_index() == index)
    }

    pub fn active_item(&self) -> Option<&TabItem> {
        let selection = self.selection.get();
        self.items.iter().find(|item| item.index() == selection)
    }

    pub fn is_animating(&self) -> bool {
        self.stylers.iter().any(SelectionStyler::is_animating)
    }

    /// Advance every running transition by one frame
    pub fn advance(&self, dt: Duration) {
        for styler in &self.stylers {
            styler.advance(dt);
        }
    }

    /// Width the inline row needs, measured at each item's target style
    pub fn row_width(&self, measure: &dyn TextMeasure) -> f32 {
        let content: f32 = self
            .items
            .iter()
            .zip(&self.stylers)
            .map(|(item, styler)| {
                let size = styler.style().rendered_size();
                let mut width = measure.label_width(item.label(), size);
                if item.symbol().is_some() {
                    width += measure.icon_width(size) + measure.icon_gap(size);
                }
                width
            })
            .sum();

        let gaps = self.items.len().saturating_sub(1) as f32 * self.item_spacing;
        content + gaps
    }

    /// Pick the first layout that fits: the inline row, else the collapsed menu
    pub fn layout(&self, available_width: f32, measure: &dyn TextMeasure) -> Layout {
        let needed = self.row_width(measure);
        if needed <= available_width {
            return Layout::Row(self.item_views(false));
        }

        tracing::debug!(needed, available_width, "Collapsing tab title bar into menu");

        let summary = self.active_item().map(|item| Summary {
            label: item.label().to_string(),
            symbol: item.symbol().map(str::to_string),
            style: self.policy.summary_style(),
        });

        Layout::Menu(CollapsedMenu {
            summary,
            change_tab_label: self.change_tab_label.clone(),
            change_tab_symbol: self.change_tab_symbol.clone(),
            entries: self.item_views(true),
        })
    }

    fn item_views(&self, with_indicator: bool) -> Vec<ItemView> {
        self.items
            .iter()
            .zip(&self.stylers)
            .map(|(item, styler)| {
                let active = styler.is_active();
                ItemView {
                    id: item.id().to_string(),
                    index: item.index(),
                    label: item.label().to_string(),
                    symbol: item.symbol().map(str::to_string),
                    active,
                    style: styler.presented(),
                    indicator: (with_indicator && active).then_some(SELECTION_INDICATOR),
                }
            })
            .collect()
    }
}

impl std::fmt::Debug for TabTitleBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabTitleBar")
            .field("selection", &self.selection.get())
            .field("items", &self.items.len())
            .field("policy", &self.policy.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_CHANGE_TAB_LABEL, DEFAULT_CHANGE_TAB_SYMBOL};
    use crate::measure::MonospaceMeasure;
    use tabtitle_tabs::{StyleVariant, Tone};

    fn small_items() -> Vec<TabItem> {
        (0..3)
            .map(|i| TabItem::new(format!("Item {}", i), i).with_symbol(format!("{}.circle", i)))
            .collect()
    }

    fn large_items() -> Vec<TabItem> {
        [
            "Shoes",
            "Workouts",
            "Recents",
            "Equipment",
            "Routing",
            "Replacements",
            "Settings",
        ]
        .iter()
        .enumerate()
        .map(|(i, label)| TabItem::new(*label, i as TabIndex))
        .collect()
    }

    fn bar(selection: &Selection, items: Vec<TabItem>) -> TabTitleBar {
        TabTitleBar::new(selection.clone(), items, &Config::default()).unwrap()
    }

    #[test]
    fn test_select_tab_restyles_items() {
        let selection = Selection::new(1);
        let bar = bar(&selection, small_items());

        bar.select_tab(2);

        assert_eq!(bar.current_selection(), 2);
        assert_eq!(selection.get(), 2);
        assert!(!bar.styler(1).unwrap().is_active());
        assert!(bar.styler(2).unwrap().is_active());
        assert!(!bar.styler(0).unwrap().is_active());
        assert!(bar.is_animating());

        bar.advance(Duration::from_secs(1));
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_external_write_reaches_bar() {
        let selection = Selection::new(0);
        let bar = bar(&selection, small_items());

        selection.set(1);
        assert_eq!(bar.active_item().unwrap().label(), "Item 1");
        assert!(bar.styler(1).unwrap().is_active());
    }

    #[test]
    fn test_row_when_it_fits() {
        let selection = Selection::new(0);
        let bar = bar(&selection, small_items());
        let measure = MonospaceMeasure::default();

        let layout = bar.layout(320.0, &measure);
        assert!(layout.is_row());
        assert_eq!(layout.items().len(), 3);
        assert!(layout.items().iter().all(|item| item.indicator.is_none()));
        assert_eq!(layout.items().iter().filter(|item| item.active).count(), 1);
    }

    #[test]
    fn test_menu_when_row_does_not_fit() {
        let selection = Selection::new(3);
        let bar = bar(&selection, large_items());
        let measure = MonospaceMeasure::default();

        assert!(bar.layout(800.0, &measure).is_row());

        let Layout::Menu(menu) = bar.layout(320.0, &measure) else {
            panic!("expected collapsed menu");
        };
        let summary = menu.summary.unwrap();
        assert_eq!(summary.label, "Equipment");
        assert_eq!(summary.style.emphasis_size, 24.0);
        assert_eq!(summary.style.tone, Tone::Primary);
        assert_eq!(menu.change_tab_label, DEFAULT_CHANGE_TAB_LABEL);
        assert_eq!(menu.change_tab_symbol, DEFAULT_CHANGE_TAB_SYMBOL);
        assert_eq!(menu.entries.len(), 7);

        let marked: Vec<_> = menu
            .entries
            .iter()
            .filter(|e| e.indicator == Some(SELECTION_INDICATOR))
            .map(|e| e.index)
            .collect();
        assert_eq!(marked, vec![3]);
    }

    #[test]
    fn test_change_tab_override() {
        let selection = Selection::new(0);
        let bar = bar(&selection, large_items()).with_change_tab("Switch Tab", "arrow.triangle.branch");

        let Layout::Menu(menu) = bar.layout(10.0, &MonospaceMeasure::default()) else {
            panic!("expected collapsed menu");
        };
        assert_eq!(menu.change_tab_label, "Switch Tab");
        assert_eq!(menu.change_tab_symbol, "arrow.triangle.branch");
    }

    #[test]
    fn test_out_of_range_selection_has_no_summary() {
        let selection = Selection::new(99);
        let bar = bar(&selection, small_items());

        let Layout::Menu(menu) = bar.layout(10.0, &MonospaceMeasure::default()) else {
            panic!("expected collapsed menu");
        };
        assert!(menu.summary.is_none());
        assert!(menu.entries.iter().all(|e| !e.active && e.indicator.is_none()));
    }

    #[test]
    fn test_duplicate_indices_are_all_active() {
        let selection = Selection::new(1);
        let items = vec![
            TabItem::new("A", 0),
            TabItem::new("B", 1),
            TabItem::new("C", 1),
        ];
        let bar = bar(&selection, items);

        let layout = bar.layout(1000.0, &MonospaceMeasure::default());
        let active: Vec<_> = layout.items().iter().filter(|i| i.active).map(|i| i.label.as_str()).collect();
        assert_eq!(active, vec!["B", "C"]);
    }

    #[test]
    fn test_set_items_rebuilds_stylers() {
        let selection = Selection::new(1);
        let mut bar = bar(&selection, small_items());
        assert_eq!(selection.subscriber_count(), 3);

        bar.set_items(large_items());
        assert_eq!(selection.subscriber_count(), 7);
        assert_eq!(bar.items().len(), 7);
        assert!(bar.styler(1).unwrap().is_active());
        assert!(!bar.is_animating());

        bar.set_items(Vec::new());
        assert_eq!(selection.subscriber_count(), 0);
        assert!(bar.layout(0.0, &MonospaceMeasure::default()).is_row());
    }

    #[test]
    fn test_row_width_follows_active_item() {
        let selection = Selection::new(0);
        let bar = bar(&selection, large_items());
        let measure = MonospaceMeasure::default();

        let before = bar.row_width(&measure);
        // "Replacements" is the longest label, so activating it widens the row
        bar.select_tab(5);
        assert!(bar.row_width(&measure) > before);
    }

    #[test]
    fn test_scale_shift_bar() {
        let config = Config {
            variant: StyleVariant::ScaleShift,
            ..Config::default()
        };
        let selection = Selection::new(0);
        let bar = TabTitleBar::new(selection, small_items(), &config).unwrap();

        let active = bar.styler(0).unwrap().style();
        let inactive = bar.styler(1).unwrap().style();
        assert_eq!(active.emphasis_size, inactive.emphasis_size);
        assert_eq!(active.scale, 1.0);
        assert_eq!(inactive.scale, 0.7);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.size_shift.active_scale = 0.0;
        assert!(TabTitleBar::new(Selection::new(0), small_items(), &config).is_err());
    }
}
