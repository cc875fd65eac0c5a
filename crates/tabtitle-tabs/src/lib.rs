//! TabTitle Tabs
//!
//! The active/inactive state machine behind a tab title bar.
//! One shared [`Selection`] is written by the bar; every item owns a
//! [`SelectionStyler`] that subscribes to it and re-derives its style,
//! with an animated [`Transition`], whenever the selection is written.

mod error;
mod selection;
mod state;
mod style;
mod styler;
mod tab;
mod transition;

pub use error::TabError;
pub use selection::{Selection, SelectionObserver, Subscription};
pub use state::TabState;
pub use style::{DerivedStyle, ScaleShift, SizeShift, StylePolicy, StyleVariant, Tone, Weight};
pub use styler::SelectionStyler;
pub use tab::{Composition, TabIndex, TabItem};
pub use transition::{Animation, Easing, Transition};

pub type Result<T> = std::result::Result<T, TabError>;
