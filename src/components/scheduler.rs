use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::timeline::{Timeline, Timer};

/// A one-shot callback that is cancelled when its handle is dropped.
trait TimerHandle: 'static {
    fn start<F: FnOnce() + 'static>(delay_ms: u32, callback: F) -> Self;
}

impl TimerHandle for Timeout {
    fn start<F: FnOnce() + 'static>(delay_ms: u32, callback: F) -> Self {
        Timeout::new(delay_ms, callback)
    }
}

struct Driver<M: Timeline, H> {
    machine: M,
    pending: HashMap<u64, H>,
    // A handle can't be dropped from inside its own callback, so ids of timers
    // that already ran wait here until the next schedule pass. The last timer
    // of a chain stays parked until teardown.
    finished: Vec<u64>,
    next_id: u64,
    live: bool,
    redraw: Option<Rc<dyn Fn()>>,
}

impl<M: Timeline, H> Driver<M, H> {
    fn new(machine: M) -> Self {
        Self {
            machine,
            pending: HashMap::new(),
            finished: Vec::new(),
            next_id: 0,
            live: true,
            redraw: None,
        }
    }

    fn prune(&mut self) {
        for id in self.finished.drain(..) {
            self.pending.remove(&id);
        }
    }

    /// Cancels every pending timer and refuses new work. Returns how many
    /// timers were still waiting to fire.
    fn teardown(&mut self) -> usize {
        self.prune();
        let cancelled = self.pending.len();
        self.live = false;
        self.redraw = None;
        self.pending.clear();
        cancelled
    }
}

fn dispatch<M, H, F>(driver: &Rc<RefCell<Driver<M, H>>>, action: F)
where
    M: Timeline + 'static,
    H: TimerHandle,
    F: FnOnce(&mut M) -> Vec<Timer<M::Event>>,
{
    let (timers, redraw) = {
        let mut inner = driver.borrow_mut();
        if !inner.live {
            return;
        }
        let timers = action(&mut inner.machine);
        (timers, inner.redraw.clone())
    };
    schedule(driver, timers);
    if let Some(redraw) = redraw {
        redraw();
    }
}

fn schedule<M, H>(driver: &Rc<RefCell<Driver<M, H>>>, timers: Vec<Timer<M::Event>>)
where
    M: Timeline + 'static,
    H: TimerHandle,
{
    let mut inner = driver.borrow_mut();
    if !inner.live {
        return;
    }
    inner.prune();

    for Timer { delay_ms, event } in timers {
        let id = inner.next_id;
        inner.next_id += 1;
        let weak: Weak<RefCell<Driver<M, H>>> = Rc::downgrade(driver);
        let handle = H::start(delay_ms, move || {
            // a dropped driver means the component is gone
            if let Some(driver) = weak.upgrade() {
                deliver(&driver, id, event);
            }
        });
        inner.pending.insert(id, handle);
    }
}

fn deliver<M, H>(driver: &Rc<RefCell<Driver<M, H>>>, id: u64, event: M::Event)
where
    M: Timeline + 'static,
    H: TimerHandle,
{
    let (timers, redraw) = {
        let mut inner = driver.borrow_mut();
        if !inner.live {
            return;
        }
        let timers = inner.machine.fire(event);
        (timers, inner.redraw.clone())
    };
    schedule(driver, timers);
    driver.borrow_mut().finished.push(id);
    if let Some(redraw) = redraw {
        redraw();
    }
}

/// Handle to a `Timeline` running on real browser timers.
pub struct TimelineHandle<M: Timeline> {
    driver: Rc<RefCell<Driver<M, Timeout>>>,
}

impl<M: Timeline> Clone for TimelineHandle<M> {
    fn clone(&self) -> Self {
        Self {
            driver: self.driver.clone(),
        }
    }
}

impl<M: Timeline + 'static> TimelineHandle<M> {
    /// Runs a user action against the machine and schedules what it asks for.
    pub fn dispatch<F>(&self, action: F)
    where
        F: FnOnce(&mut M) -> Vec<Timer<M::Event>>,
    {
        dispatch(&self.driver, action);
    }

    pub fn read<R, F>(&self, view: F) -> R
    where
        F: FnOnce(&M) -> R,
    {
        view(&self.driver.borrow().machine)
    }
}

/// Owns a `Timeline` for the lifetime of a component.
///
/// Every timer the machine requests becomes a `gloo_timers` `Timeout`. When
/// the component unmounts all pending timeouts are dropped, which cancels
/// them, so nothing touches the machine after teardown.
#[hook]
pub fn use_timeline<M, F>(init: F) -> TimelineHandle<M>
where
    M: Timeline + 'static,
    F: FnOnce() -> M,
{
    let redraw = use_force_update();
    let driver = use_mut_ref(move || Driver::<M, Timeout>::new(init()));
    {
        let mut inner = driver.borrow_mut();
        if inner.live {
            inner.redraw = Some(Rc::new(move || redraw.force_update()));
        }
    }

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    let cancelled = driver.borrow_mut().teardown();
                    if cancelled > 0 {
                        log::debug!("cancelled {} pending timers on unmount", cancelled);
                    }
                }
            },
            (),
        );
    }

    TimelineHandle { driver }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::devotional::carousel::{Carousel, TransitionPhase, EXIT_MS, SETTLE_MS};

    type Queued = (u32, Box<dyn FnOnce()>);

    thread_local! {
        static STARTED: RefCell<Vec<Queued>> = RefCell::new(Vec::new());
        static DROPPED: Cell<usize> = Cell::new(0);
    }

    /// Parks callbacks so a test decides when (and whether) they run.
    struct ManualTimer;

    impl TimerHandle for ManualTimer {
        fn start<F: FnOnce() + 'static>(delay_ms: u32, callback: F) -> Self {
            STARTED.with(|s| s.borrow_mut().push((delay_ms, Box::new(callback))));
            ManualTimer
        }
    }

    impl Drop for ManualTimer {
        fn drop(&mut self) {
            DROPPED.with(|d| d.set(d.get() + 1));
        }
    }

    fn take_started() -> Vec<Queued> {
        STARTED.with(|s| std::mem::take(&mut *s.borrow_mut()))
    }

    fn dropped() -> usize {
        DROPPED.with(Cell::get)
    }

    fn carousel_driver() -> Rc<RefCell<Driver<Carousel, ManualTimer>>> {
        take_started();
        DROPPED.with(|d| d.set(0));
        Rc::new(RefCell::new(Driver::new(Carousel::new(3))))
    }

    #[test]
    fn teardown_cancels_every_pending_timer() {
        let driver = carousel_driver();
        dispatch(&driver, |c| c.mount());
        dispatch(&driver, |c| c.navigate_to(1));
        let queued = take_started();
        assert_eq!(queued.len(), 2);
        assert_eq!(driver.borrow().pending.len(), 2);

        assert_eq!(driver.borrow_mut().teardown(), 2);
        assert_eq!(dropped(), 2);
        assert!(driver.borrow().pending.is_empty());

        // callbacks that were already on their way land on a dead driver
        let before = driver.borrow().machine.clone();
        for (_, callback) in queued {
            callback();
        }
        assert_eq!(driver.borrow().machine, before);
        assert_eq!(driver.borrow().machine.phase(), TransitionPhase::Exiting);
        assert!(take_started().is_empty());
    }

    #[test]
    fn actions_after_teardown_are_ignored() {
        let driver = carousel_driver();
        driver.borrow_mut().teardown();

        dispatch(&driver, |c| c.navigate_to(2));
        assert_eq!(driver.borrow().machine.active_index(), 0);
        assert_eq!(driver.borrow().machine.phase(), TransitionPhase::Idle);
        assert!(take_started().is_empty());
    }

    #[test]
    fn ran_timers_are_released_on_the_next_pass() {
        let driver = carousel_driver();
        dispatch(&driver, |c| c.navigate_to(1));

        let (delay, exit) = take_started().remove(0);
        assert_eq!(delay, EXIT_MS);
        exit();
        assert_eq!(driver.borrow().machine.active_index(), 1);
        // settle is queued; the exit handle is parked, not yet dropped
        assert_eq!(driver.borrow().pending.len(), 2);
        assert_eq!(driver.borrow().finished, vec![0]);
        assert_eq!(dropped(), 0);

        let (delay, settle) = take_started().remove(0);
        assert_eq!(delay, SETTLE_MS);
        settle();
        assert_eq!(driver.borrow().machine.phase(), TransitionPhase::Entering);
        assert_eq!(dropped(), 1);
        // parked settle handle plus enter and the first field reveal
        assert_eq!(driver.borrow().pending.len(), 3);

        // the parked handle does not count as cancelled work
        assert_eq!(driver.borrow_mut().teardown(), 2);
    }
}
