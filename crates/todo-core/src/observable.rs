//! Observable Values
//!
//! A single-threaded "current value + change notification" cell.
//!
//! - `get`/`with` read the current value at any time.
//! - `subscribe` invokes the callback immediately with the current value and
//!   again after every publish.
//! - `map` builds a derived observable recomputed on every publish.
//!
//! Only this crate can publish; consumers hold a read-only handle.
//!
//! Callbacks are invoked with no borrow held, so they may read the
//! observable or trigger further publishes.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`Observable::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<Rc<T>>,
    subscribers: RefCell<Vec<(SubscriptionId, Callback<T>)>>,
    next_id: Cell<u64>,
}

/// Shared observable cell, cheap to clone
pub struct Observable<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.inner.value.borrow())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

impl<T: 'static> Observable<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(Rc::new(value)),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Current value
    pub fn get(&self) -> Rc<T> {
        Rc::clone(&self.inner.value.borrow())
    }

    /// Run `f` against the current value
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let current = self.get();
        f(&current)
    }

    /// Register `callback`; it runs right away with the current value, then
    /// after every change.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);

        let callback: Callback<T> = Rc::new(callback);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::clone(&callback)));

        let current = self.get();
        callback(&current);
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Derived observable holding `f(value)`, refreshed on every publish of
    /// `self`.
    pub fn map<U: 'static>(&self, f: impl Fn(&T) -> U + 'static) -> Observable<U> {
        let derived = Observable::new(self.with(&f));
        let target = derived.clone();
        let replayed = Cell::new(false);
        // subscribe() replays the current value, which `derived` already holds
        self.subscribe(move |value| {
            if !replayed.replace(true) {
                return;
            }
            target.publish(f(value));
        });
        derived
    }

    /// Replace the current value and notify every subscriber in
    /// registration order.
    pub(crate) fn publish(&self, value: T) {
        let value = Rc::new(value);
        *self.inner.value.borrow_mut() = Rc::clone(&value);

        let subscribers: Vec<Callback<T>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in subscribers {
            // A callback published a newer value, which already reached everyone
            if !Rc::ptr_eq(&self.inner.value.borrow(), &value) {
                break;
            }
            callback(&value);
        }
    }
}
