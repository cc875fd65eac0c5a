//! Shared selection
//!
//! A single-value topic: the bar writes it, every styler subscribes to it.
//! Every write is published, including writes of the value already held,
//! and is delivered synchronously to each live subscriber in subscription
//! order before [`Selection::set`] returns.
//!
//! Subscribers are held weakly. Dropping a [`Subscription`] removes its
//! entry; entries whose observer has been dropped are pruned on the next
//! publish.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::tab::TabIndex;

/// Receives every write to a [`Selection`].
///
/// Observers are readers: the selection has a single writer. An observer
/// that writes the selection from inside `selection_changed` is not called
/// back for that nested write, and the remaining observers of the outer
/// write receive the latest value.
pub trait SelectionObserver {
    fn selection_changed(&mut self, selection: TabIndex);
}

type ObserverRef = Weak<RefCell<dyn SelectionObserver>>;

struct Topic {
    value: Cell<TabIndex>,
    /// Number of writes published so far
    version: Cell<u64>,
    next_id: Cell<u64>,
    observers: RefCell<Vec<(u64, ObserverRef)>>,
}

/// Handle to a shared selection index. Clones share the same value.
#[derive(Clone)]
pub struct Selection {
    topic: Rc<Topic>,
}

impl Selection {
    pub fn new(initial: TabIndex) -> Self {
        Self {
            topic: Rc::new(Topic {
                value: Cell::new(initial),
                version: Cell::new(0),
                next_id: Cell::new(0),
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn get(&self) -> TabIndex {
        self.topic.value.get()
    }

    pub fn version(&self) -> u64 {
        self.topic.version.get()
    }

    /// Write a new value and notify every live subscriber
    pub fn set(&self, value: TabIndex) {
        self.topic.value.set(value);
        self.topic.version.set(self.topic.version.get() + 1);

        // Upgrade first so observers run without the list borrowed
        let live: Vec<Rc<RefCell<dyn SelectionObserver>>> = {
            let mut observers = self.topic.observers.borrow_mut();
            observers.retain(|(_, observer)| observer.strong_count() > 0);
            observers
                .iter()
                .filter_map(|(_, observer)| observer.upgrade())
                .collect()
        };

        tracing::trace!(value, subscribers = live.len(), "Selection published");

        for observer in live {
            // Busy means this observer is the one writing from its own callback
            let Ok(mut observer) = observer.try_borrow_mut() else {
                tracing::warn!(value, "Selection written from inside an observer");
                continue;
            };
            observer.selection_changed(self.get());
        }
    }

    /// Register an observer. It stays subscribed while the returned guard lives.
    pub fn subscribe(&self, observer: &Rc<RefCell<dyn SelectionObserver>>) -> Subscription {
        let id = self.topic.next_id.get();
        self.topic.next_id.set(id + 1);
        self.topic
            .observers
            .borrow_mut()
            .push((id, Rc::downgrade(observer)));

        Subscription {
            id,
            topic: Rc::downgrade(&self.topic),
        }
    }

    /// Number of subscribers whose observer is still alive
    pub fn subscriber_count(&self) -> usize {
        self.topic
            .observers
            .borrow()
            .iter()
            .filter(|(_, observer)| observer.strong_count() > 0)
            .count()
    }
}

impl std::fmt::Debug for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("value", &self.get())
            .field("version", &self.version())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Unsubscribes on drop
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    topic: Weak<Topic>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(topic) = self.topic.upgrade() {
            topic.observers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        seen: Vec<TabIndex>,
    }

    impl SelectionObserver for Recorder {
        fn selection_changed(&mut self, selection: TabIndex) {
            self.seen.push(selection);
        }
    }

    fn recorder() -> (Rc<RefCell<Recorder>>, Rc<RefCell<dyn SelectionObserver>>) {
        let concrete = Rc::new(RefCell::new(Recorder { seen: Vec::new() }));
        let observer: Rc<RefCell<dyn SelectionObserver>> = concrete.clone();
        (concrete, observer)
    }

    #[test]
    fn test_fan_out() {
        let selection = Selection::new(0);
        let (a, a_obs) = recorder();
        let (b, b_obs) = recorder();
        let _sa = selection.subscribe(&a_obs);
        let _sb = selection.subscribe(&b_obs);

        selection.set(2);
        selection.set(1);

        assert_eq!(selection.get(), 1);
        assert_eq!(a.borrow().seen, vec![2, 1]);
        assert_eq!(b.borrow().seen, vec![2, 1]);
    }

    #[test]
    fn test_same_value_is_published() {
        let selection = Selection::new(1);
        let (a, a_obs) = recorder();
        let _sub = selection.subscribe(&a_obs);

        selection.set(1);
        selection.set(1);

        assert_eq!(a.borrow().seen, vec![1, 1]);
        assert_eq!(selection.version(), 2);
    }

    #[test]
    fn test_drop_subscription_unsubscribes() {
        let selection = Selection::new(0);
        let (a, a_obs) = recorder();
        let sub = selection.subscribe(&a_obs);
        assert_eq!(selection.subscriber_count(), 1);

        drop(sub);
        assert_eq!(selection.subscriber_count(), 0);

        selection.set(3);
        assert!(a.borrow().seen.is_empty());
    }

    #[test]
    fn test_dropped_observer_is_pruned() {
        let selection = Selection::new(0);
        let (a, a_obs) = recorder();
        let _sub = selection.subscribe(&a_obs);

        drop(a);
        drop(a_obs);
        assert_eq!(selection.subscriber_count(), 0);

        // Must not panic on a dead entry
        selection.set(1);
        assert_eq!(selection.get(), 1);
    }

    struct Clamp {
        selection: Selection,
        max: TabIndex,
        seen: Vec<TabIndex>,
    }

    impl SelectionObserver for Clamp {
        fn selection_changed(&mut self, selection: TabIndex) {
            self.seen.push(selection);
            if selection > self.max {
                self.selection.set(self.max);
            }
        }
    }

    #[test]
    fn test_write_from_observer_does_not_panic() {
        let selection = Selection::new(0);
        let clamp = Rc::new(RefCell::new(Clamp {
            selection: selection.clone(),
            max: 2,
            seen: Vec::new(),
        }));
        let clamp_obs: Rc<RefCell<dyn SelectionObserver>> = clamp.clone();
        let (after, after_obs) = recorder();
        let _sc = selection.subscribe(&clamp_obs);
        let _sa = selection.subscribe(&after_obs);

        selection.set(5);

        assert_eq!(selection.get(), 2);
        assert_eq!(clamp.borrow().seen, vec![5]);
        // Later observers converge on the clamped value
        assert_eq!(after.borrow().seen, vec![2, 2]);
        assert_eq!(selection.version(), 2);
    }

    #[test]
    fn test_clones_share_value() {
        let selection = Selection::new(0);
        let handle = selection.clone();
        let (a, a_obs) = recorder();
        let _sub = selection.subscribe(&a_obs);

        handle.set(4);
        assert_eq!(selection.get(), 4);
        assert_eq!(a.borrow().seen, vec![4]);
    }
}
