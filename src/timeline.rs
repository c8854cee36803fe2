/// A request to deliver `event` back to its machine after `delay_ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer<E> {
    pub delay_ms: u32,
    pub event: E,
}

impl<E> Timer<E> {
    pub fn after(delay_ms: u32, event: E) -> Self {
        Self { delay_ms, event }
    }

    pub fn map<F, T>(self, f: F) -> Timer<T>
    where
        F: FnOnce(E) -> T,
    {
        Timer {
            delay_ms: self.delay_ms,
            event: f(self.event),
        }
    }
}

/// A state machine that only advances through timer events.
///
/// Every operation, whether it comes from the user or from a fired timer,
/// hands back the timers it wants scheduled next. Whoever owns the clock
/// (the browser driver in `components::scheduler`, or `VirtualClock` in tests)
/// is responsible for delivering them.
pub trait Timeline {
    type Event: Clone + 'static;

    /// Applies a delivered event. Events the machine no longer expects must be
    /// ignored and yield no timers.
    fn fire(&mut self, event: Self::Event) -> Vec<Timer<Self::Event>>;
}

#[cfg(test)]
pub use self::testing::VirtualClock;

#[cfg(test)]
mod testing {
    use super::{Timeline, Timer};

    const MAX_EVENTS: usize = 100_000;

    #[derive(Debug)]
    struct Scheduled<E> {
        due: u64,
        seq: u64,
        event: E,
    }

    /// Deterministic clock for driving a `Timeline` without waiting on real time.
    #[derive(Debug)]
    pub struct VirtualClock<E> {
        now: u64,
        seq: u64,
        queue: Vec<Scheduled<E>>,
    }

    impl<E> Default for VirtualClock<E> {
        fn default() -> Self {
            Self {
                now: 0,
                seq: 0,
                queue: Vec::new(),
            }
        }
    }

    impl<E> VirtualClock<E> {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.now
        }

        pub fn pending(&self) -> usize {
            self.queue.len()
        }

        pub fn schedule(&mut self, timers: Vec<Timer<E>>) {
            for timer in timers {
                self.queue.push(Scheduled {
                    due: self.now + u64::from(timer.delay_ms),
                    seq: self.seq,
                    event: timer.event,
                });
                self.seq += 1;
            }
        }

        pub fn cancel_all(&mut self) {
            self.queue.clear();
        }

        fn pop_due(&mut self, until: u64) -> Option<Scheduled<E>> {
            let next = self
                .queue
                .iter()
                .enumerate()
                .filter(|(_, s)| s.due <= until)
                .min_by_key(|(_, s)| (s.due, s.seq))
                .map(|(i, _)| i)?;
            Some(self.queue.remove(next))
        }

        /// Moves time forward by `ms`, firing everything that falls due on the way
        /// (including timers scheduled by those firings). Returns how many fired.
        pub fn advance<M>(&mut self, ms: u64, machine: &mut M) -> usize
        where
            M: Timeline<Event = E>,
        {
            let until = self.now + ms;
            let mut fired = 0;
            while let Some(next) = self.pop_due(until) {
                self.now = next.due;
                let timers = machine.fire(next.event);
                self.schedule(timers);
                fired += 1;
                assert!(fired < MAX_EVENTS, "timeline never settled");
            }
            self.now = until;
            fired
        }

        /// Fires timers until none remain and returns the elapsed virtual time.
        pub fn run_until_idle<M>(&mut self, machine: &mut M) -> u64
        where
            M: Timeline<Event = E>,
        {
            let start = self.now;
            let mut fired = 0;
            while let Some(next) = self.pop_due(u64::MAX) {
                self.now = next.due;
                let timers = machine.fire(next.event);
                self.schedule(timers);
                fired += 1;
                assert!(fired < MAX_EVENTS, "timeline never settled");
            }
            self.now - start
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Echo {
        seen: Vec<(u8, u32)>,
        repeats: u32,
    }

    impl Timeline for Echo {
        type Event = u8;

        fn fire(&mut self, event: u8) -> Vec<Timer<u8>> {
            self.seen.push((event, self.repeats));
            if event == 0 && self.repeats < 2 {
                self.repeats += 1;
                vec![Timer::after(10, 0)]
            } else {
                Vec::new()
            }
        }
    }

    #[test]
    fn fires_in_due_order_then_scheduling_order() {
        let mut clock = VirtualClock::new();
        let mut echo = Echo::default();
        clock.schedule(vec![
            Timer::after(20, 2),
            Timer::after(5, 1),
            Timer::after(20, 3),
        ]);

        assert_eq!(clock.advance(20, &mut echo), 3);
        let order: Vec<u8> = echo.seen.iter().map(|(e, _)| *e).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(clock.now(), 20);
    }

    #[test]
    fn advance_stops_at_the_horizon() {
        let mut clock = VirtualClock::new();
        let mut echo = Echo::default();
        clock.schedule(vec![Timer::after(0, 0)]);

        clock.advance(15, &mut echo);
        // 0 fires at t=0 and t=10; the third firing is due at t=20
        assert_eq!(echo.seen.len(), 2);
        assert_eq!(clock.pending(), 1);

        assert_eq!(clock.run_until_idle(&mut echo), 5);
        assert_eq!(echo.seen.len(), 3);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn cancel_all_drops_everything() {
        let mut clock = VirtualClock::new();
        let mut echo = Echo::default();
        clock.schedule(vec![Timer::after(1, 1), Timer::after(2, 2)]);
        clock.cancel_all();
        assert_eq!(clock.advance(100, &mut echo), 0);
        assert!(echo.seen.is_empty());
    }

    #[test]
    fn map_keeps_the_delay() {
        let timer = Timer::after(42, 7u8).map(u32::from);
        assert_eq!(timer, Timer::after(42, 7u32));
    }
}
