//! Style transitions
//!
//! A transition is scheduled and never awaited: the host advances it from its
//! frame clock. A newer target interrupts an in-flight transition and restarts
//! it from the style currently on screen.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::style::DerivedStyle;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress onto the curve
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            // Smoothstep
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Animation {
    /// Zero snaps straight to the target
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Animation {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            // Saturate so oversized durations fail validation instead of wrapping
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            easing,
        }
    }

    /// No animation at all
    pub fn immediate() -> Self {
        Self {
            duration_ms: 0,
            easing: Easing::Linear,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn validate(&self) -> Result<()> {
        // Ten seconds is far beyond any sensible title transition
        if self.duration_ms > 10_000 {
            return Err(TabError::InvalidAnimation(format!(
                "duration_ms must be at most 10000, got {}",
                self.duration_ms
            )));
        }
        Ok(())
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            duration_ms: 350,
            easing: Easing::EaseInOut,
        }
    }
}

/// An in-flight interpolation between two styles
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: DerivedStyle,
    to: DerivedStyle,
    elapsed: Duration,
    animation: Animation,
}

impl Transition {
    pub fn new(from: DerivedStyle, to: DerivedStyle, animation: Animation) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            animation,
        }
    }

    pub fn target(&self) -> DerivedStyle {
        self.to
    }

    /// Linear progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        let total = self.animation.duration();
        if total.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / total.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.animation.duration()
    }

    /// Style for the current frame
    pub fn current(&self) -> DerivedStyle {
        if self.is_finished() {
            return self.to;
        }
        let eased = self.animation.easing.apply(self.progress());
        self.from.interpolate(&self.to, eased)
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Redirect towards a new target, starting from what is on screen now
    pub fn retarget(&mut self, to: DerivedStyle) {
        self.from = self.current();
        self.to = to;
        self.elapsed = Duration::ZERO;
    }
}
