use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = Box<dyn FnMut(&T)>;

struct Inner<T> {
    latest: T,
    subscribers: Vec<(u64, Callback<T>)>,
    /// Ids unsubscribed while their callbacks were checked out by an emit.
    dropped: Vec<u64>,
    next_id: u64,
}

/// Single-threaded broadcast source for an ambient read-only signal.
///
/// One source is instantiated per page lifetime for scroll/viewport state and
/// fanned out to every component; subscribers never mutate the signal. The
/// engine is event-loop scoped, so interior mutability is `Rc<RefCell<..>>`.
pub struct Source<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Clone> Source<T> {
    /// New source holding `initial` as the current value.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                latest: initial,
                subscribers: Vec::new(),
                dropped: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// The most recently emitted (or initial) value.
    pub fn latest(&self) -> T {
        self.inner.borrow().latest.clone()
    }

    /// Store `value` and invoke every live subscriber with it.
    pub fn emit(&self, value: T) {
        // Callbacks run outside the registry borrow so a callback may read
        // `latest()` or drop a Subscription without re-entrancy panics.
        let mut cbs = {
            let mut inner = self.inner.borrow_mut();
            inner.latest = value.clone();
            std::mem::take(&mut inner.subscribers)
        };

        for (id, cb) in &mut cbs {
            let unsubscribed = self.inner.borrow().dropped.contains(id);
            if !unsubscribed {
                cb(&value);
            }
        }

        let mut inner = self.inner.borrow_mut();
        let added = std::mem::take(&mut inner.subscribers);
        inner.subscribers = cbs;
        inner.subscribers.extend(added);
        if !inner.dropped.is_empty() {
            let dropped = std::mem::take(&mut inner.dropped);
            inner.subscribers.retain(|(id, _)| !dropped.contains(id));
        }
    }

    /// Register `callback` and return its RAII guard.
    ///
    /// The callback fires immediately with the current value (a region
    /// already in view at mount must observe it without waiting for a scroll
    /// event), then on every subsequent emit. Dropping the returned
    /// [`Subscription`] detaches the callback; it is never invoked again.
    pub fn subscribe(&self, mut callback: impl FnMut(&T) + 'static) -> Subscription<T> {
        let current = self.latest();
        callback(&current);

        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Box::new(callback)));
            id
        };
        Subscription {
            source: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of live subscriptions (for diagnostics and tests).
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

/// RAII handle for one subscription; dropping it unsubscribes on every exit
/// path, including early destruction of the owning component.
pub struct Subscription<T> {
    source: Weak<RefCell<Inner<T>>>,
    id: u64,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        let Some(inner) = self.source.upgrade() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(id, _)| *id != self.id);
        if inner.subscribers.len() == before {
            // The callback is checked out by an emit in progress; the source
            // removes it when the emit completes and skips it meanwhile.
            inner.dropped.push(self.id);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/observe/signal.rs"]
mod tests;
