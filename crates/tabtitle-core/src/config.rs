//! Tab title bar configuration
//!
//! Every field has a default, so a partial JSON document (or none) is enough.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::rc::Rc;

use tabtitle_tabs::{Animation, ScaleShift, SizeShift, StylePolicy, StyleVariant};

use crate::error::CoreError;
use crate::Result;

pub const DEFAULT_CHANGE_TAB_LABEL: &str = "Change Tab";
pub const DEFAULT_CHANGE_TAB_SYMBOL: &str = "arrow.left.arrow.right.square";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which style policy the bar uses
    pub variant: StyleVariant,
    /// Constants for the size-shift policy
    pub size_shift: SizeShift,
    /// Constants for the scale-shift policy
    pub scale_shift: ScaleShift,
    /// Transition between active and inactive styles
    pub animation: Animation,
    /// Horizontal gap between inline items
    pub item_spacing: f32,
    /// Label of the collapsed menu affordance
    pub change_tab_label: String,
    /// Symbol of the collapsed menu affordance
    pub change_tab_symbol: String,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), variant = %config.variant, "Loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.item_spacing.is_finite() || self.item_spacing < 0.0 {
            return Err(CoreError::Config(format!(
                "item_spacing must be a non-negative number, got {}",
                self.item_spacing
            )));
        }
        self.animation.validate()?;
        match self.variant {
            StyleVariant::SizeShift => self.size_shift.validate()?,
            StyleVariant::ScaleShift => self.scale_shift.validate()?,
        }
        Ok(())
    }

    /// Build the configured style policy
    pub fn policy(&self) -> Result<Rc<dyn StylePolicy>> {
        self.validate()?;
        let policy: Rc<dyn StylePolicy> = match self.variant {
            StyleVariant::SizeShift => Rc::new(self.size_shift),
            StyleVariant::ScaleShift => Rc::new(self.scale_shift),
        };
        Ok(policy)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: StyleVariant::default(),
            size_shift: SizeShift::default(),
            scale_shift: ScaleShift::default(),
            animation: Animation::default(),
            item_spacing: 8.0,
            change_tab_label: DEFAULT_CHANGE_TAB_LABEL.to_string(),
            change_tab_symbol: DEFAULT_CHANGE_TAB_SYMBOL.to_string(),
        }
    }
}
