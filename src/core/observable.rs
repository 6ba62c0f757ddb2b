//! Observable snapshot holder
//!
//! A single-writer container for the latest value of some state plus a list
//! of callbacks notified whenever a different value is published.

use std::fmt;

/// Handle returned by [`Observable::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// Latest value of `T` with push notification on change
///
/// Publishing a value equal to the current one does not notify anyone.
pub struct Observable<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: usize,
}

impl<T: PartialEq> Observable<T> {
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value
    #[inline]
    #[must_use]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Replace the current value and notify subscribers if it changed
    ///
    /// Returns whether the value changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.value);
        }
        true
    }

    /// Derive the next value from the current one and publish it
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(&self.value);
        self.set(next)
    }

    /// Register a callback
    ///
    /// The callback runs once immediately with the current value, then after
    /// every change.
    pub fn subscribe(&mut self, mut subscriber: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        subscriber(&self.value);
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a callback; returns false if the id was unknown
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    #[cfg(test)]
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
