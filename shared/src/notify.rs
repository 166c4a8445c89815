use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener<E> = Rc<dyn Fn(&E)>;

struct Listeners<E> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Listener<E>)>>,
}

/// Single-threaded publish/subscribe channel between mounted views.
pub struct Notifier<E: 'static> {
    inner: Rc<Listeners<E>>,
}

impl<E: 'static> Clone for Notifier<E> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<E: 'static> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> Notifier<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Listeners {
                next_id: Cell::new(0),
                entries: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Registers `listener` until the returned subscription is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&E) + 'static) -> Subscription<E> {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.entries.borrow_mut().push((id, Rc::new(listener)));
        Subscription { id, listeners: Rc::downgrade(&self.inner) }
    }

    pub fn publish(&self, event: &E) {
        // Snapshot first so listeners may subscribe or unsubscribe while running.
        let listeners: Vec<Listener<E>> = self.inner.entries.borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.entries.borrow().len()
    }
}

pub struct Subscription<E: 'static> {
    id: u64,
    listeners: Weak<Listeners<E>>,
}

impl<E: 'static> Drop for Subscription<E> {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.entries.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_until_dropped() {
        let notifier = Notifier::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sub = {
            let seen = seen.clone();
            notifier.subscribe(move |n| seen.borrow_mut().push(*n))
        };
        notifier.publish(&1);
        assert_eq!(notifier.listener_count(), 1);

        drop(sub);
        notifier.publish(&2);
        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(notifier.listener_count(), 0);
    }

    #[test]
    fn every_subscriber_sees_each_event() {
        let notifier = Notifier::<&'static str>::new();
        let count = Rc::new(Cell::new(0));
        let subs: Vec<_> = (0..3)
            .map(|_| {
                let count = count.clone();
                notifier.subscribe(move |_| count.set(count.get() + 1))
            })
            .collect();

        notifier.clone().publish(&"updated");
        assert_eq!(count.get(), 3);
        drop(subs);
    }

    #[test]
    fn subscription_outliving_notifier_is_harmless() {
        let notifier = Notifier::<()>::new();
        let sub = notifier.subscribe(|_| {});
        drop(notifier);
        drop(sub);
    }
}
