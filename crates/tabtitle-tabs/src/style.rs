//! Derived styles and the policies that map activity onto them
//!
//! Two variants ship:
//! - [`SizeShift`]: active and inactive titles differ by font size and scale
//! - [`ScaleShift`]: font size is held constant, only scale differs
//!
//! Both keep the weight bold and use the primary tone only for the active item.

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::state::TabState;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Bold,
}

/// Visual attributes of one tab title
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedStyle {
    /// Font size in points
    pub emphasis_size: f32,
    pub weight: Weight,
    pub tone: Tone,
    /// Scale factor applied on top of the font size
    pub scale: f32,
}

impl DerivedStyle {
    /// Interpolate towards `target` at progress `t` in `[0, 1]`.
    ///
    /// Numeric fields are blended linearly; tone and weight switch at the midpoint.
    pub fn interpolate(&self, target: &DerivedStyle, t: f32) -> DerivedStyle {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: f32, b: f32| a + (b - a) * t;
        let past_midpoint = t >= 0.5;

        DerivedStyle {
            emphasis_size: lerp(self.emphasis_size, target.emphasis_size),
            weight: if past_midpoint { target.weight } else { self.weight },
            tone: if past_midpoint { target.tone } else { self.tone },
            scale: lerp(self.scale, target.scale),
        }
    }

    /// Effective rendered font size
    pub fn rendered_size(&self) -> f32 {
        self.emphasis_size * self.scale
    }
}

/// Maps an item's activity onto its style.
///
/// Policies are chosen at construction time and shared by every styler of a bar.
pub trait StylePolicy {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn style_for(&self, state: TabState) -> DerivedStyle;

    /// Style of the active item shown on its own as the collapsed menu label
    fn summary_style(&self) -> DerivedStyle {
        DerivedStyle {
            tone: Tone::Primary,
            scale: 1.0,
            ..self.style_for(TabState::Active)
        }
    }
}

fn check_positive(field: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TabError::InvalidPolicy(format!(
            "{} must be a positive number, got {}",
            field, value
        )))
    }
}

/// Active and inactive titles differ by font size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeShift {
    pub active_size: f32,
    pub inactive_size: f32,
    pub active_scale: f32,
    pub inactive_scale: f32,
}

impl SizeShift {
    pub fn validate(&self) -> Result<()> {
        check_positive("active_size", self.active_size)?;
        check_positive("inactive_size", self.inactive_size)?;
        check_positive("active_scale", self.active_scale)?;
        check_positive("inactive_scale", self.inactive_scale)
    }
}

impl Default for SizeShift {
    fn default() -> Self {
        Self {
            active_size: 24.0,
            inactive_size: 12.0,
            active_scale: 1.0,
            inactive_scale: 0.7,
        }
    }
}

impl StylePolicy for SizeShift {
    fn name(&self) -> &'static str {
        "size_shift"
    }

    fn style_for(&self, state: TabState) -> DerivedStyle {
        match state {
            TabState::Active => DerivedStyle {
                emphasis_size: self.active_size,
                weight: Weight::Bold,
                tone: Tone::Primary,
                scale: self.active_scale,
            },
            TabState::Inactive => DerivedStyle {
                emphasis_size: self.inactive_size,
                weight: Weight::Bold,
                tone: Tone::Secondary,
                scale: self.inactive_scale,
            },
        }
    }
}

/// Font size held constant, active and inactive titles differ by scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleShift {
    pub size: f32,
    pub active_scale: f32,
    pub inactive_scale: f32,
}

impl ScaleShift {
    pub fn validate(&self) -> Result<()> {
        check_positive("size", self.size)?;
        check_positive("active_scale", self.active_scale)?;
        check_positive("inactive_scale", self.inactive_scale)
    }
}

impl Default for ScaleShift {
    fn default() -> Self {
        Self {
            size: 24.0,
            active_scale: 1.0,
            inactive_scale: 0.7,
        }
    }
}

impl StylePolicy for ScaleShift {
    fn name(&self) -> &'static str {
        "scale_shift"
    }

    fn style_for(&self, state: TabState) -> DerivedStyle {
        let (tone, scale) = match state {
            TabState::Active => (Tone::Primary, self.active_scale),
            TabState::Inactive => (Tone::Secondary, self.inactive_scale),
        };

        DerivedStyle {
            emphasis_size: self.size,
            weight: Weight::Bold,
            tone,
            scale,
        }
    }
}

/// Which policy a bar is configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleVariant {
    #[default]
    SizeShift,
    ScaleShift,
}

impl StyleVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleVariant::SizeShift => "size_shift",
            StyleVariant::ScaleShift => "scale_shift",
        }
    }
}

impl std::fmt::Display for StyleVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
