use std::cell::RefCell;

use gloo_timers::callback::Timeout;

/// Holds at most one handle; storing a new one drops the previous.
pub struct Latest<T> {
    slot: RefCell<Option<T>>,
}

impl<T> Default for Latest<T> {
    fn default() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }
}

impl<T> Latest<T> {
    pub fn replace(&self, value: T) {
        // The old value is dropped after the borrow ends.
        let previous = self.slot.borrow_mut().replace(value);
        drop(previous);
    }

    pub fn is_set(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

/// Runs the last scheduled action once `delay_ms` passes without a new one.
pub struct Debouncer {
    delay_ms: u32,
    pending: Latest<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Latest::default(),
        }
    }

    pub fn schedule(&self, action: impl FnOnce() + 'static) {
        // Dropping the previous handle clears its timeout.
        self.pending.replace(Timeout::new(self.delay_ms, action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Handle(Rc<Cell<usize>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn starts_empty() {
        let latest: Latest<Handle> = Latest::default();
        assert!(!latest.is_set());
    }

    #[test]
    fn repeated_scheduling_keeps_one_handle_alive() {
        let dropped = Rc::new(Cell::new(0));
        let latest = Latest::default();
        for _ in 0..100 {
            latest.replace(Handle(dropped.clone()));
        }
        assert!(latest.is_set());
        assert_eq!(dropped.get(), 99);

        drop(latest);
        assert_eq!(dropped.get(), 100);
    }
}
