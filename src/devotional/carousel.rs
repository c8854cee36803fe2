use log::debug;

use super::stagger::{RevealEvent, Stagger};
use crate::timeline::{Timeline, Timer};

/// Slide-out of the outgoing page.
pub const EXIT_MS: u32 = 350;
/// Pause between swapping the month and sliding the new page in.
pub const SETTLE_MS: u32 = 50;
/// Slide-in of the incoming page.
pub const ENTER_MS: u32 = 350;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    Exiting,
    Entering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    ExitElapsed { target: usize },
    Settled,
    EnterElapsed,
    Reveal(RevealEvent),
}

/// Month preview carousel: one page at a time, exit → settle → enter.
///
/// Only one transition runs at a time. Requests made while a transition is in
/// flight are dropped rather than queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active_index: usize,
    phase: TransitionPhase,
    direction: Direction,
    stagger: Stagger,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active_index: 0,
            phase: TransitionPhase::Idle,
            direction: Direction::Forward,
            stagger: Stagger::new(),
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn stagger(&self) -> &Stagger {
        &self.stagger
    }

    pub fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    pub fn can_step_prev(&self) -> bool {
        self.active_index > 0
    }

    pub fn can_step_next(&self) -> bool {
        self.active_index < self.last_index()
    }

    /// Reveals the first month's content when the preview first renders.
    pub fn mount(&mut self) -> Vec<Timer<CarouselEvent>> {
        vec![self.stagger.restart().map(CarouselEvent::Reveal)]
    }

    pub fn navigate_to(&mut self, target: usize) -> Vec<Timer<CarouselEvent>> {
        if target >= self.len {
            debug!("ignoring navigation to missing month {}", target);
            return Vec::new();
        }
        if target == self.active_index || self.phase != TransitionPhase::Idle {
            return Vec::new();
        }

        self.direction = if target > self.active_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.phase = TransitionPhase::Exiting;
        self.stagger.cancel();
        debug!(
            "carousel {} -> {} ({:?})",
            self.active_index, target, self.direction
        );
        vec![Timer::after(EXIT_MS, CarouselEvent::ExitElapsed { target })]
    }

    pub fn step_prev(&mut self) -> Vec<Timer<CarouselEvent>> {
        if !self.can_step_prev() {
            return Vec::new();
        }
        self.navigate_to(self.active_index - 1)
    }

    pub fn step_next(&mut self) -> Vec<Timer<CarouselEvent>> {
        if !self.can_step_next() {
            return Vec::new();
        }
        self.navigate_to(self.active_index + 1)
    }
}

impl Timeline for Carousel {
    type Event = CarouselEvent;

    fn fire(&mut self, event: CarouselEvent) -> Vec<Timer<CarouselEvent>> {
        match event {
            CarouselEvent::ExitElapsed { target } if self.phase == TransitionPhase::Exiting => {
                self.active_index = target;
                self.stagger.reset();
                vec![Timer::after(SETTLE_MS, CarouselEvent::Settled)]
            }
            CarouselEvent::Settled if self.phase == TransitionPhase::Exiting => {
                self.phase = TransitionPhase::Entering;
                vec![
                    Timer::after(ENTER_MS, CarouselEvent::EnterElapsed),
                    self.stagger.restart().map(CarouselEvent::Reveal),
                ]
            }
            CarouselEvent::EnterElapsed if self.phase == TransitionPhase::Entering => {
                self.phase = TransitionPhase::Idle;
                Vec::new()
            }
            CarouselEvent::Reveal(reveal) => self
                .stagger
                .reveal(reveal)
                .map(|next| next.map(CarouselEvent::Reveal))
                .into_iter()
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devotional::months::MONTHS;
    use crate::timeline::VirtualClock;
    use proptest::prelude::*;

    fn mounted() -> (Carousel, VirtualClock<CarouselEvent>) {
        let mut carousel = Carousel::new(MONTHS.len());
        let mut clock = VirtualClock::new();
        clock.schedule(carousel.mount());
        clock.run_until_idle(&mut carousel);
        (carousel, clock)
    }

    #[test]
    fn mount_reveals_the_first_month() {
        let (carousel, _) = mounted();
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.phase(), TransitionPhase::Idle);
        assert_eq!(carousel.stagger().revealed(), 4);
    }

    #[test]
    fn navigation_walks_through_exit_settle_enter() {
        let (mut carousel, mut clock) = mounted();
        clock.schedule(carousel.navigate_to(1));
        assert_eq!(carousel.phase(), TransitionPhase::Exiting);
        assert_eq!(carousel.direction(), Direction::Forward);
        // outgoing content stays on the page while it slides away
        assert_eq!(carousel.stagger().revealed(), 4);

        clock.advance(u64::from(EXIT_MS), &mut carousel);
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(carousel.phase(), TransitionPhase::Exiting);
        assert_eq!(carousel.stagger().revealed(), 0);

        clock.advance(u64::from(SETTLE_MS), &mut carousel);
        assert_eq!(carousel.phase(), TransitionPhase::Entering);

        clock.advance(100, &mut carousel);
        assert_eq!(carousel.stagger().revealed(), 1);

        clock.advance(u64::from(ENTER_MS) - 100, &mut carousel);
        assert_eq!(carousel.phase(), TransitionPhase::Idle);
        assert_eq!(carousel.stagger().revealed(), 3);

        clock.run_until_idle(&mut carousel);
        assert_eq!(carousel.stagger().revealed(), 4);
    }

    #[test]
    fn backward_navigation_sets_direction() {
        let (mut carousel, mut clock) = mounted();
        clock.schedule(carousel.navigate_to(2));
        clock.run_until_idle(&mut carousel);
        clock.schedule(carousel.step_prev());
        assert_eq!(carousel.direction(), Direction::Backward);
        clock.run_until_idle(&mut carousel);
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn same_index_and_out_of_range_are_ignored() {
        let (mut carousel, _) = mounted();
        let before = carousel.clone();
        assert!(carousel.navigate_to(0).is_empty());
        assert!(carousel.navigate_to(MONTHS.len()).is_empty());
        assert_eq!(carousel, before);
    }

    #[test]
    fn boundaries_block_stepping() {
        let (mut carousel, mut clock) = mounted();
        assert!(!carousel.can_step_prev());
        assert!(carousel.step_prev().is_empty());

        clock.schedule(carousel.navigate_to(2));
        clock.run_until_idle(&mut carousel);
        assert!(!carousel.can_step_next());
        let before = carousel.clone();
        assert!(carousel.step_next().is_empty());
        assert_eq!(carousel, before);
    }

    #[test]
    fn stepping_next_twice_lands_on_april() {
        let (mut carousel, mut clock) = mounted();
        clock.schedule(carousel.step_next());
        clock.run_until_idle(&mut carousel);
        clock.schedule(carousel.step_next());
        clock.run_until_idle(&mut carousel);

        assert_eq!(carousel.active_index(), 2);
        assert_eq!(MONTHS[carousel.active_index()].name, "Abril");
        assert_eq!(carousel.phase(), TransitionPhase::Idle);
        assert!(carousel.step_next().is_empty());
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn navigation_during_a_transition_is_dropped() {
        let (mut carousel, mut clock) = mounted();
        clock.schedule(carousel.navigate_to(1));
        assert!(carousel.navigate_to(2).is_empty());

        clock.advance(u64::from(EXIT_MS + SETTLE_MS), &mut carousel);
        assert_eq!(carousel.phase(), TransitionPhase::Entering);
        assert!(carousel.navigate_to(2).is_empty());

        clock.run_until_idle(&mut carousel);
        assert_eq!(carousel.active_index(), 1);

        clock.schedule(carousel.navigate_to(2));
        clock.run_until_idle(&mut carousel);
        assert_eq!(carousel.active_index(), 2);
        assert_eq!(carousel.phase(), TransitionPhase::Idle);
    }

    #[test]
    fn leaving_mid_stagger_cancels_the_outgoing_reveals() {
        let (mut carousel, mut clock) = mounted();
        clock.schedule(carousel.navigate_to(1));
        clock.run_until_idle(&mut carousel);

        // leave as soon as the new page is idle, before its last field shows
        clock.schedule(carousel.navigate_to(2));
        clock.advance(u64::from(EXIT_MS + SETTLE_MS + ENTER_MS), &mut carousel);
        assert_eq!(carousel.phase(), TransitionPhase::Idle);
        let shown = carousel.stagger().revealed();
        assert!(shown < 4);

        clock.schedule(carousel.navigate_to(0));
        clock.advance(u64::from(EXIT_MS) - 1, &mut carousel);
        assert_eq!(carousel.stagger().revealed(), shown);

        clock.run_until_idle(&mut carousel);
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.stagger().revealed(), 4);
    }

    #[test]
    fn cancelled_timers_leave_the_page_alone() {
        let (mut carousel, mut clock) = mounted();
        clock.schedule(carousel.navigate_to(1));
        clock.cancel_all();
        let before = carousel.clone();
        clock.advance(10_000, &mut carousel);
        assert_eq!(carousel, before);
        assert!(carousel.fire(CarouselEvent::EnterElapsed).is_empty());
        assert_eq!(carousel, before);
    }

    #[derive(Debug, Clone, Copy)]
    enum Action {
        Prev,
        Next,
        Jump(usize),
        Wait(u16),
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            Just(Action::Prev),
            Just(Action::Next),
            (0usize..5).prop_map(Action::Jump),
            (0u16..900).prop_map(Action::Wait),
        ]
    }

    proptest! {
        #[test]
        fn index_never_leaves_bounds(actions in prop::collection::vec(action(), 0..60)) {
            let (mut carousel, mut clock) = mounted();
            for action in actions {
                let phase = carousel.phase();
                let index = carousel.active_index();
                let timers = match action {
                    Action::Prev => carousel.step_prev(),
                    Action::Next => carousel.step_next(),
                    Action::Jump(i) => carousel.navigate_to(i),
                    Action::Wait(ms) => {
                        clock.advance(u64::from(ms), &mut carousel);
                        Vec::new()
                    }
                };
                if phase != TransitionPhase::Idle && !matches!(action, Action::Wait(_)) {
                    prop_assert!(timers.is_empty());
                    prop_assert_eq!(carousel.active_index(), index);
                }
                clock.schedule(timers);
                prop_assert!(carousel.active_index() <= carousel.last_index());
            }
            clock.run_until_idle(&mut carousel);
            prop_assert_eq!(carousel.phase(), TransitionPhase::Idle);
        }

        #[test]
        fn navigation_from_idle_settles_on_target(target in 0usize..3) {
            let (mut carousel, mut clock) = mounted();
            clock.schedule(carousel.navigate_to(target));
            clock.run_until_idle(&mut carousel);
            prop_assert_eq!(carousel.active_index(), target);
            prop_assert_eq!(carousel.phase(), TransitionPhase::Idle);
        }
    }
}
