//! Epoch wall-clock timing callback

use super::context::EpochContext;
use super::traits::Callback;
use crate::params::Configurable;
use std::time::{Duration, Instant};

/// Records the wall-clock duration of each epoch.
///
/// Takes a timestamp at epoch begin and stores the elapsed time at epoch
/// end. All state is runtime state; the callback has no configuration.
#[derive(Clone, Debug, Default)]
pub struct EpochTimer {
    state: TimerState,
}

#[derive(Clone, Debug, Default)]
struct TimerState {
    epoch_start: Option<Instant>,
    durations: Vec<Duration>,
}

impl EpochTimer {
    /// Create a new epoch timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations of completed epochs since the last reset
    pub fn durations(&self) -> &[Duration] {
        &self.state.durations
    }

    /// Duration of the most recently completed epoch
    pub fn last(&self) -> Option<Duration> {
        self.state.durations.last().copied()
    }
}

impl Configurable for EpochTimer {}

impl Callback for EpochTimer {
    fn reset(&mut self) {
        self.state = TimerState::default();
    }

    fn on_epoch_begin(&mut self, _ctx: &EpochContext) {
        self.state.epoch_start = Some(Instant::now());
    }

    fn on_epoch_end(&mut self, _ctx: &EpochContext) {
        if let Some(start) = self.state.epoch_start.take() {
            self.state.durations.push(start.elapsed());
        }
    }

    fn name(&self) -> &'static str {
        "EpochTimer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_one_duration_per_epoch() {
        let mut timer = EpochTimer::new();
        let ctx = EpochContext::default();

        for _ in 0..3 {
            timer.on_epoch_begin(&ctx);
            timer.on_epoch_end(&ctx);
        }
        assert_eq!(timer.durations().len(), 3);
        assert!(timer.last().is_some());
    }

    #[test]
    fn test_epoch_end_without_begin_records_nothing() {
        let mut timer = EpochTimer::new();
        timer.on_epoch_end(&EpochContext::default());
        assert!(timer.durations().is_empty());
        assert!(timer.last().is_none());
    }

    #[test]
    fn test_reset_clears_durations() {
        let mut timer = EpochTimer::new();
        let ctx = EpochContext::default();
        timer.on_epoch_begin(&ctx);
        timer.on_epoch_end(&ctx);
        assert_eq!(timer.durations().len(), 1);

        timer.reset();
        assert!(timer.durations().is_empty());
    }

    #[test]
    fn test_timer_exposes_no_parameters() {
        let timer = EpochTimer::new();
        assert!(timer.get_params(true).is_empty());
    }
}
