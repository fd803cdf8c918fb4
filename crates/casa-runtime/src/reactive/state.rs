#![forbid(unsafe_code)]

//! Owner/reader split over `Rc<RefCell<..>>`.
//!
//! # Failure Modes
//!
//! - **Re-entrant write**: calling [`Setter::set`] from inside a subscriber
//!   panics (RefCell borrow rules). Subscribers must only read.
//! - **Dead subscribers**: dropped [`Subscription`] guards leave `Weak`
//!   entries that are pruned on the next notification.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    version: u64,
    subscribers: Vec<CallbackWeak<T>>,
}

/// Read-only handle. Clones share the same value.
pub struct State<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

/// The only write handle for a [`State`].
pub struct Setter<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

/// Create a value and its single setter.
pub fn state<T: Clone + PartialEq + 'static>(initial: T) -> (State<T>, Setter<T>) {
    let inner = Rc::new(RefCell::new(Inner {
        value: initial,
        version: 0,
        subscribers: Vec::new(),
    }));
    (
        State {
            inner: Rc::clone(&inner),
        },
        Setter { inner },
    )
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("State")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Setter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setter")
            .field("value", &self.inner.borrow().value)
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> State<T> {
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Run `callback` with the new value after every change.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&strong));
        Subscription {
            _guard: Box::new(strong),
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl<T: Clone + PartialEq + 'static> Setter<T> {
    /// Write a value. Returns whether it changed.
    pub fn set(&self, value: T) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return false;
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
        true
    }

    /// Modify in place. Returns whether the value changed.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let old = inner.value.clone();
            f(&mut inner.value);
            if inner.value == old {
                false
            } else {
                inner.version += 1;
                true
            }
        };
        if changed {
            self.notify();
        }
        changed
    }

    /// A read handle onto the same value.
    #[must_use]
    pub fn reader(&self) -> State<T> {
        State {
            inner: Rc::clone(&self.inner),
        }
    }

    fn notify(&self) {
        let callbacks: Vec<CallbackRc<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            inner.subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        let value = self.inner.borrow().value.clone();
        for cb in &callbacks {
            cb(&value);
        }
    }
}

/// Keeps a subscriber alive; dropping it unsubscribes.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
