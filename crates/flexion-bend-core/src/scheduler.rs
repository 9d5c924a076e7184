//! Iteration-delay scheduler.
//!
//! Decimates the host tick rate: with a delay of `N`, one out of every
//! `N + 1` ticks is [`SchedulerState::Due`]. Trades accuracy for cost when
//! many joints are limited every frame.

/// Outcome of a single scheduler tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    /// Tick skipped, the limiter must not run.
    Waiting,
    /// The limiter runs on this tick.
    Due,
}

impl SchedulerState {
    /// Whether the limiter should run.
    pub const fn is_due(self) -> bool {
        matches!(self, Self::Due)
    }
}

/// Counter of ticks elapsed since the last limiter invocation.
///
/// The counter stays within `[0, iteration_delay]` for the delay it is
/// ticked with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateScheduler {
    counter: u32,
}

impl UpdateScheduler {
    /// Scheduler with the counter at zero.
    pub const fn new() -> Self {
        Self { counter: 0 }
    }

    /// Ticks counted since the last [`SchedulerState::Due`].
    pub const fn counter(&self) -> u32 {
        self.counter
    }

    /// Advance by one tick.
    ///
    /// Counts up while the counter is below `iteration_delay`, otherwise
    /// resets to zero and reports [`SchedulerState::Due`]. Lowering the delay
    /// below the current count makes the next tick due.
    pub fn tick(&mut self, iteration_delay: u32) -> SchedulerState {
        if self.counter < iteration_delay {
            self.counter += 1;
            SchedulerState::Waiting
        } else {
            self.counter = 0;
            SchedulerState::Due
        }
    }

    /// Put the counter back to zero.
    pub const fn reset(&mut self) {
        self.counter = 0;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn due_ticks(delay: u32, ticks: u32) -> Vec<u32> {
        let mut scheduler = UpdateScheduler::new();
        (1..=ticks)
            .filter(|_| scheduler.tick(delay).is_due())
            .collect()
    }

    #[test]
    fn zero_delay_runs_every_tick() {
        assert_eq!(due_ticks(0, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn delay_of_three_runs_on_every_fourth_tick() {
        assert_eq!(due_ticks(3, 10), vec![4, 8]);
    }

    #[test]
    fn one_invocation_per_delay_plus_one_ticks() {
        for delay in 0..8 {
            let period = delay + 1;
            let ticks = period * 12;
            assert_eq!(due_ticks(delay, ticks).len(), 12, "delay {delay}");
        }
    }

    #[test]
    fn counter_stays_within_delay() {
        let mut scheduler = UpdateScheduler::new();
        for _ in 0..50 {
            scheduler.tick(4);
            assert!(scheduler.counter() <= 4);
        }
    }

    #[test]
    fn counter_resets_after_due() {
        let mut scheduler = UpdateScheduler::new();
        assert_eq!(scheduler.tick(1), SchedulerState::Waiting);
        assert_eq!(scheduler.counter(), 1);
        assert_eq!(scheduler.tick(1), SchedulerState::Due);
        assert_eq!(scheduler.counter(), 0);
    }

    #[test]
    fn lowering_delay_makes_next_tick_due() {
        let mut scheduler = UpdateScheduler::new();
        for _ in 0..5 {
            scheduler.tick(10);
        }
        assert_eq!(scheduler.counter(), 5);
        assert_eq!(scheduler.tick(2), SchedulerState::Due);
        assert_eq!(scheduler.counter(), 0);
    }

    #[test]
    fn reset_clears_counter() {
        let mut scheduler = UpdateScheduler::new();
        scheduler.tick(3);
        scheduler.tick(3);
        scheduler.reset();
        assert_eq!(scheduler, UpdateScheduler::default());
    }
}
