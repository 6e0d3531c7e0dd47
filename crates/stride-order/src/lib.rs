//! # stride-order
//!
//! Ordering, filtering and timing over in-memory [`Session`] collections.
//!
//! Both strategies share one comparison contract ([`compare_sessions`]):
//! duration ascending, then sessions whose predicate holds before those whose
//! predicate does not. Strategies reorder references; sessions are never
//! mutated.

mod harness;
mod insertion;
mod merge;
mod search;

use std::cmp::Ordering;

use stride_core::entities::Session;
use stride_core::enums::SortStrategy;

pub use harness::PerformanceHarness;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use search::filter_sessions;

/// An algorithm that orders sessions under [`compare_sessions`].
pub trait OrderingStrategy {
    /// Label used in timing reports.
    fn name(&self) -> &'static str;

    /// Return `sessions` reordered. The output is a permutation of the input.
    fn sort<'a>(&self, sessions: &'a [Session]) -> Vec<&'a Session>;
}

/// Shared comparison contract for every strategy.
///
/// The predicate is evaluated live on both sides, only when durations tie.
/// Malformed predicates count as false here without logging, so timed sorts
/// do no I/O.
#[must_use]
pub fn compare_sessions(a: &Session, b: &Session) -> Ordering {
    a.duration_minutes()
        .cmp(&b.duration_minutes())
        .then_with(|| b.predicate_truth().cmp(&a.predicate_truth()))
}

/// Whether every adjacent pair satisfies [`compare_sessions`].
#[must_use]
pub fn is_ordered(sessions: &[&Session]) -> bool {
    sessions
        .windows(2)
        .all(|pair| compare_sessions(pair[0], pair[1]) != Ordering::Greater)
}

/// Strategy implementation for a [`SortStrategy`] selection.
#[must_use]
pub fn strategy_for(strategy: SortStrategy) -> Box<dyn OrderingStrategy> {
    match strategy {
        SortStrategy::Insertion => Box::new(InsertionSort),
        SortStrategy::Merge => Box::new(MergeSort),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io;
    use std::sync::{Arc, Mutex};

    use stride_core::entities::Session;
    use tracing_subscriber::fmt::MakeWriter;

    /// Session whose predicate is a literal, so truth does not depend on flags.
    pub fn session(owner: &str, duration: i64, truth: bool) -> Session {
        Session::new(
            owner,
            duration,
            100.0,
            false,
            false,
            if truth { "true" } else { "false" },
        )
    }

    pub fn owners(sorted: &[&Session]) -> Vec<String> {
        sorted.iter().map(|s| s.owner().to_string()).collect()
    }

    /// In-memory log sink for a scoped fmt subscriber.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run `f` under a WARN-level subscriber and return what it logged.
    pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();
        let value = tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.0.lock().expect("log buffer").clone();
        let lines = String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect();
        (value, lines)
    }
}
