use std::cell::{ Cell, RefCell };
use std::rc::Rc;
use crate::dom::Scheduler;

pub const DEFAULT_THROTTLE_MS: u32 = 100;

/// Leading-edge throttle: the first call in a window runs immediately,
/// every other call in that window is dropped.
pub struct Throttle<A> {
    scheduler: Rc<dyn Scheduler>,
    window_ms: u32,
    active: Rc<Cell<bool>>,
    func: RefCell<Box<dyn FnMut(A)>>,
}

impl<A> Throttle<A> {
    pub fn new(scheduler: Rc<dyn Scheduler>, window_ms: u32, func: impl FnMut(A) + 'static) -> Self {
        Self {
            scheduler,
            window_ms,
            active: Rc::new(Cell::new(false)),
            func: RefCell::new(Box::new(func)),
        }
    }

    pub fn with_default_window(scheduler: Rc<dyn Scheduler>, func: impl FnMut(A) + 'static) -> Self {
        Self::new(scheduler, DEFAULT_THROTTLE_MS, func)
    }

    /// Returns whether the wrapped function ran.
    pub fn call(&self, args: A) -> bool {
        if self.active.get() {
            return false;
        }

        // Raised before the call: a re-entrant call lands in the same window.
        self.active.set(true);
        let active = Rc::clone(&self.active);
        self.scheduler.defer(self.window_ms, Box::new(move || active.set(false)));

        (self.func.borrow_mut())(args);
        true
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }
}
