//! Debounce helper
//!
//! Delays a call until `wait` has passed without another call. Each new call
//! cancels the pending one, so a burst of calls results in a single
//! invocation carrying the last arguments.
//!
//! The timer is abstracted behind [`TimerScheduler`] so the same helper runs
//! on browser timers and on a manual clock in tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Schedules one-shot callbacks.
///
/// Dropping the returned handle must cancel the callback if it has not run
/// yet, the way `gloo_timers::callback::Timeout` behaves.
pub trait TimerScheduler {
    type Handle;

    fn schedule(&self, wait: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Rate-limits calls to a wrapped function
pub struct Debouncer<S: TimerScheduler, A> {
    scheduler: S,
    wait: Duration,
    func: Rc<dyn Fn(A)>,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: TimerScheduler, A: 'static> Debouncer<S, A> {
    pub fn new(scheduler: S, wait: Duration, func: impl Fn(A) + 'static) -> Self {
        Self {
            scheduler,
            wait,
            func: Rc::new(func),
            pending: RefCell::new(None),
        }
    }

    /// Schedule `func(args)` after the quiet period, replacing any pending call
    pub fn call(&self, args: A) {
        // Dropping the previous handle cancels it
        self.pending.borrow_mut().take();

        let func = Rc::clone(&self.func);
        let handle = self
            .scheduler
            .schedule(self.wait, Box::new(move || func(args)));
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending call, if any
    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type Slot = Rc<RefCell<Option<(u64, Box<dyn FnOnce()>)>>>;

    /// Manual clock: callbacks run when `advance` moves past their due time
    #[derive(Clone, Default)]
    struct ManualTimers {
        now: Rc<Cell<u64>>,
        slots: Rc<RefCell<Vec<Slot>>>,
    }

    struct ManualHandle(Slot);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.borrow_mut().take();
        }
    }

    impl TimerScheduler for ManualTimers {
        type Handle = ManualHandle;

        fn schedule(&self, wait: Duration, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let due = self.now.get() + wait.as_millis() as u64;
            let slot: Slot = Rc::new(RefCell::new(Some((due, callback))));
            self.slots.borrow_mut().push(Rc::clone(&slot));
            ManualHandle(slot)
        }
    }

    impl ManualTimers {
        fn advance(&self, ms: u64) {
            let now = self.now.get() + ms;
            self.now.set(now);
            let slots: Vec<Slot> = self.slots.borrow().clone();
            for slot in slots {
                let due = slot.borrow().as_ref().map(|(due, _)| *due);
                if due.is_some_and(|due| due <= now) {
                    let fired = slot.borrow_mut().take();
                    if let Some((_, callback)) = fired {
                        callback();
                    }
                }
            }
        }
    }

    fn recording_debouncer(
        timers: &ManualTimers,
        wait_ms: u64,
    ) -> (Debouncer<ManualTimers, u32>, Rc<RefCell<Vec<u32>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let debouncer = Debouncer::new(
            timers.clone(),
            Duration::from_millis(wait_ms),
            move |value| sink.borrow_mut().push(value),
        );
        (debouncer, calls)
    }

    #[test]
    fn test_fires_after_wait() {
        let timers = ManualTimers::default();
        let (debouncer, calls) = recording_debouncer(&timers, 100);

        debouncer.call(1);
        timers.advance(99);
        assert!(calls.borrow().is_empty());

        timers.advance(1);
        assert_eq!(*calls.borrow(), vec![1]);
    }

    #[test]
    fn test_burst_collapses_to_last_call() {
        let timers = ManualTimers::default();
        let (debouncer, calls) = recording_debouncer(&timers, 100);

        debouncer.call(1);
        timers.advance(50);
        debouncer.call(2);
        timers.advance(50);
        debouncer.call(3);
        timers.advance(99);
        assert!(calls.borrow().is_empty());

        timers.advance(1);
        assert_eq!(*calls.borrow(), vec![3]);

        timers.advance(1000);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_cancel_drops_pending_call() {
        let timers = ManualTimers::default();
        let (debouncer, calls) = recording_debouncer(&timers, 10);

        debouncer.call(7);
        debouncer.cancel();
        timers.advance(100);
        assert!(calls.borrow().is_empty());
        assert_eq!(debouncer.wait(), Duration::from_millis(10));
    }

    #[test]
    fn test_calls_separated_by_wait_both_fire() {
        let timers = ManualTimers::default();
        let (debouncer, calls) = recording_debouncer(&timers, 10);

        debouncer.call(1);
        timers.advance(10);
        debouncer.call(2);
        timers.advance(10);
        assert_eq!(*calls.borrow(), vec![1, 2]);
    }
}
