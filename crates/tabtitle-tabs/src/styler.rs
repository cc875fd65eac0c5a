//! Selection styler
//!
//! Keeps the style of one tab item in sync with the shared selection.
//! The style is derived on construction, so the first frame is already
//! correct, and re-derived on every selection write. A change of target
//! schedules a [`Transition`]; a write that leaves the target unchanged
//! leaves the styler untouched.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::selection::{Selection, SelectionObserver, Subscription};
use crate::state::TabState;
use crate::style::{DerivedStyle, StylePolicy};
use crate::tab::TabIndex;
use crate::transition::{Animation, Transition};

struct StylerState {
    watched_index: TabIndex,
    policy: Rc<dyn StylePolicy>,
    animation: Animation,
    state: TabState,
    /// Style the item is at or heading towards
    style: DerivedStyle,
    transition: Option<Transition>,
    update_count: u64,
}

impl StylerState {
    fn presented(&self) -> DerivedStyle {
        self.transition
            .as_ref()
            .map(Transition::current)
            .unwrap_or(self.style)
    }

    fn apply(&mut self, selection: TabIndex) {
        self.update_count += 1;

        let previous = self.state;
        let state = TabState::for_selection(self.watched_index, selection);
        let target = self.policy.style_for(state);
        self.state = state;

        if target == self.style {
            return;
        }

        tracing::debug!(
            index = self.watched_index,
            policy = self.policy.name(),
            from = %previous,
            to = %state,
            "Tab style transition"
        );

        let on_screen = self.presented();
        if let Some(transition) = self.transition.as_mut().filter(|t| !t.is_finished()) {
            transition.retarget(target);
        } else {
            self.transition = Some(Transition::new(on_screen, target, self.animation));
        }
        self.style = target;
    }
}

impl SelectionObserver for StylerState {
    fn selection_changed(&mut self, selection: TabIndex) {
        self.apply(selection);
    }
}

/// Derived style of one tab item, bound to a shared [`Selection`].
///
/// Dropping the styler unsubscribes it.
pub struct SelectionStyler {
    inner: Rc<RefCell<StylerState>>,
    _subscription: Subscription,
}

impl SelectionStyler {
    pub fn new(
        selection: &Selection,
        watched_index: TabIndex,
        policy: Rc<dyn StylePolicy>,
        animation: Animation,
    ) -> Self {
        let state = TabState::for_selection(watched_index, selection.get());
        let style = policy.style_for(state);

        let inner = Rc::new(RefCell::new(StylerState {
            watched_index,
            policy,
            animation,
            state,
            style,
            transition: None,
            update_count: 0,
        }));
        let observer: Rc<RefCell<dyn SelectionObserver>> = inner.clone();
        let subscription = selection.subscribe(&observer);

        Self {
            inner,
            _subscription: subscription,
        }
    }

    pub fn watched_index(&self) -> TabIndex {
        self.inner.borrow().watched_index
    }

    pub fn state(&self) -> TabState {
        self.inner.borrow().state
    }

    pub fn is_active(&self) -> bool {
        self.state().is_active()
    }

    /// Style the item is at or transitioning towards
    pub fn style(&self) -> DerivedStyle {
        self.inner.borrow().style
    }

    /// Style for the current animation frame
    pub fn presented(&self) -> DerivedStyle {
        self.inner.borrow().presented()
    }

    pub fn is_animating(&self) -> bool {
        self.inner
            .borrow()
            .transition
            .as_ref()
            .is_some_and(|t| !t.is_finished())
    }

    /// Advance the running transition, if any, by `dt`
    pub fn advance(&self, dt: Duration) {
        let mut inner = self.inner.borrow_mut();
        if let Some(transition) = inner.transition.as_mut() {
            transition.advance(dt);
            if transition.is_finished() {
                inner.transition = None;
            }
        }
    }

    /// Number of selection writes this styler has handled
    pub fn update_count(&self) -> u64 {
        self.inner.borrow().update_count
    }
}

impl std::fmt::Debug for SelectionStyler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SelectionStyler")
            .field("watched_index", &inner.watched_index)
            .field("policy", &inner.policy.name())
            .field("state", &inner.state)
            .field("style", &inner.style)
            .finish()
    }
}
