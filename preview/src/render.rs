//! Plain-text rendering of a layout

use tabtitle_core::{DerivedStyle, ItemView, Layout, Tone};

fn style_tag(style: &DerivedStyle) -> String {
    let tone = match style.tone {
        Tone::Primary => "primary",
        Tone::Secondary => "secondary",
    };
    format!("{:.1}pt x{:.2} {}", style.emphasis_size, style.scale, tone)
}

fn item_text(label: &str, symbol: Option<&str>) -> String {
    match symbol {
        Some(symbol) => format!("[{}] {}", symbol, label),
        None => label.to_string(),
    }
}

fn item_line(item: &ItemView) -> String {
    let marker = item.indicator.unwrap_or("");
    format!(
        "{:>9} {} ({})",
        marker,
        item_text(&item.label, item.symbol.as_deref()),
        style_tag(&item.style)
    )
}

pub fn render(layout: &Layout) -> String {
    let mut out = String::new();

    match layout {
        Layout::Row(items) => {
            out.push_str("row:\n");
            let titles: Vec<String> = items
                .iter()
                .map(|item| {
                    let text = item_text(&item.label, item.symbol.as_deref());
                    if item.active {
                        format!("*{}*", text.to_uppercase())
                    } else {
                        text
                    }
                })
                .collect();
            out.push_str(&format!("  {}\n", titles.join(" | ")));
            for item in items {
                out.push_str(&format!("  {}\n", item_line(item)));
            }
        }
        Layout::Menu(menu) => {
            let summary = menu
                .summary
                .as_ref()
                .map(|s| {
                    format!(
                        "{} ({})",
                        item_text(&s.label, s.symbol.as_deref()),
                        style_tag(&s.style)
                    )
                })
                .unwrap_or_else(|| "<no active tab>".to_string());
            out.push_str(&format!(
                "menu: {}    [{}] {}\n",
                summary, menu.change_tab_symbol, menu.change_tab_label
            ));
            for entry in &menu.entries {
                out.push_str(&format!("  {}\n", item_line(entry)));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabtitle_core::{Config, MonospaceMeasure, Selection, TabItem, TabTitleBar};

    #[test]
    fn test_render_row_marks_active() {
        let items = vec![TabItem::new("Shoes", 0), TabItem::new("Recents", 1)];
        let bar = TabTitleBar::new(Selection::new(1), items, &Config::default()).unwrap();

        let text = render(&bar.layout(500.0, &MonospaceMeasure::default()));
        assert!(text.starts_with("row:"));
        assert!(text.contains("Shoes | *RECENTS*"));
    }

    #[test]
    fn test_render_menu_summary() {
        let items = vec![TabItem::new("Shoes", 0).with_symbol("shoe")];
        let bar = TabTitleBar::new(Selection::new(0), items, &Config::default()).unwrap();

        let text = render(&bar.layout(1.0, &MonospaceMeasure::default()));
        assert!(text.starts_with("menu: [shoe] Shoes (24.0pt x1.00 primary)"));
        assert!(text.contains("Change Tab"));
        assert!(text.contains("checkmark [shoe] Shoes"));
    }
}
