//! Wall-clock comparison of ordering strategies on identical input.
//!
//! Each round sorts a fresh clone of the caller's sessions. Cloning happens
//! before the timer starts, and only the `sort` call is bracketed.

use std::time::{Duration, Instant};

use chrono::Utc;
use stride_core::entities::Session;
use stride_core::responses::{StrategyTiming, TimingReport};

use crate::{InsertionSort, MergeSort, OrderingStrategy};

#[derive(Debug, Clone, Copy)]
pub struct PerformanceHarness {
    rounds: u32,
}

impl Default for PerformanceHarness {
    fn default() -> Self {
        Self { rounds: 1 }
    }
}

impl PerformanceHarness {
    /// A harness that repeats each measurement `rounds` times (minimum 1).
    #[must_use]
    pub fn new(rounds: u32) -> Self {
        Self {
            rounds: rounds.max(1),
        }
    }

    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Time the insertion and merge strategies on `sessions`.
    #[must_use]
    pub fn compare(&self, sessions: &[Session]) -> TimingReport {
        let strategies: [&dyn OrderingStrategy; 2] = [&InsertionSort, &MergeSort];
        self.compare_with(&strategies, sessions)
    }

    /// Time each of `strategies` on `sessions`, in the order given.
    #[must_use]
    pub fn compare_with(
        &self,
        strategies: &[&dyn OrderingStrategy],
        sessions: &[Session],
    ) -> TimingReport {
        let timings = strategies
            .iter()
            .map(|strategy| self.measure(*strategy, sessions))
            .collect();

        TimingReport {
            measured_at: Utc::now(),
            input_len: sessions.len(),
            rounds: self.rounds,
            timings,
        }
    }

    fn measure(&self, strategy: &dyn OrderingStrategy, sessions: &[Session]) -> StrategyTiming {
        let mut best = Duration::MAX;
        let mut total = Duration::ZERO;

        for _ in 0..self.rounds {
            let copy = sessions.to_vec();

            let start = Instant::now();
            let sorted = strategy.sort(&copy);
            let elapsed = start.elapsed();

            debug_assert_eq!(sorted.len(), copy.len());
            best = best.min(elapsed);
            total += elapsed;
        }

        let mean = total / self.rounds;
        tracing::debug!(
            strategy = strategy.name(),
            rounds = self.rounds,
            best_secs = best.as_secs_f64(),
            mean_secs = mean.as_secs_f64(),
            "strategy timed"
        );

        StrategyTiming {
            label: strategy.name().to_string(),
            best_secs: best.as_secs_f64(),
            mean_secs: mean.as_secs_f64(),
        }
    }
}
