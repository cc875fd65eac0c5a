//! Text measurement used to decide whether the inline row fits

/// Measures rendered widths in the same unit as the available width.
pub trait TextMeasure {
    fn label_width(&self, label: &str, font_size: f32) -> f32;

    /// Width of an icon drawn next to a label at `font_size`
    fn icon_width(&self, font_size: f32) -> f32 {
        font_size
    }

    /// Gap between an icon and its label
    fn icon_gap(&self, font_size: f32) -> f32 {
        font_size * 0.25
    }
}

/// Every character advances by the same fraction of the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance_ratio: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn label_width(&self, label: &str, font_size: f32) -> f32 {
        label.chars().count() as f32 * font_size * self.advance_ratio
    }
}
