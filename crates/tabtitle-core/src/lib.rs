//! TabTitle Core
//!
//! A row of tab titles that emphasizes the selected one and collapses into
//! a menu when the titles do not fit. The selection state machine lives in
//! `tabtitle-tabs`; this crate adds configuration, layout and the bar that
//! ties them together.

mod bar;
mod config;
mod error;
mod layout;
mod measure;

pub use bar::TabTitleBar;
pub use config::{Config, DEFAULT_CHANGE_TAB_LABEL, DEFAULT_CHANGE_TAB_SYMBOL};
pub use error::CoreError;
pub use layout::{CollapsedMenu, ItemView, Layout, Summary, SELECTION_INDICATOR};
pub use measure::{MonospaceMeasure, TextMeasure};

// Re-export the state machine
pub use tabtitle_tabs::{
    Animation, Composition, DerivedStyle, Easing, ScaleShift, Selection, SelectionObserver,
    SelectionStyler, SizeShift, StylePolicy, StyleVariant, Subscription, TabError, TabIndex,
    TabItem, TabState, Tone, Transition, Weight,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
