use std::cmp::Ordering;

use stride_core::entities::Session;
use stride_core::enums::SortStrategy;

use crate::{OrderingStrategy, compare_sessions};

/// Stable insertion sort, O(n²) worst case.
///
/// Each element shifts left only past strictly greater elements, so fully
/// tied sessions keep their input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl OrderingStrategy for InsertionSort {
    fn name(&self) -> &'static str {
        SortStrategy::Insertion.label()
    }

    fn sort<'a>(&self, sessions: &'a [Session]) -> Vec<&'a Session> {
        let mut work: Vec<&Session> = sessions.iter().collect();

        for i in 1..work.len() {
            let key = work[i];
            let mut j = i;
            while j > 0 && compare_sessions(work[j - 1], key) == Ordering::Greater {
                work[j] = work[j - 1];
                j -= 1;
            }
            work[j] = key;
        }

        work
    }
}
