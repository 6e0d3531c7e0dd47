use std::cmp::Ordering;

use stride_core::entities::Session;
use stride_core::enums::SortStrategy;

use crate::{OrderingStrategy, compare_sessions};

/// Top-down merge sort, O(n log n).
///
/// Halves are merged with two cursors over borrowed slices; on an exact tie
/// the left head is taken first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl OrderingStrategy for MergeSort {
    fn name(&self) -> &'static str {
        SortStrategy::Merge.label()
    }

    fn sort<'a>(&self, sessions: &'a [Session]) -> Vec<&'a Session> {
        let refs: Vec<&Session> = sessions.iter().collect();
        sort_refs(&refs)
    }
}

fn sort_refs<'a>(items: &[&'a Session]) -> Vec<&'a Session> {
    if items.len() <= 1 {
        return items.to_vec();
    }

    let (left, right) = items.split_at(items.len() / 2);
    merge(&sort_refs(left), &sort_refs(right))
}

fn merge<'a>(left: &[&'a Session], right: &[&'a Session]) -> Vec<&'a Session> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if compare_sessions(left[i], right[j]) == Ordering::Greater {
            out.push(right[j]);
            j += 1;
        } else {
            out.push(left[i]);
            i += 1;
        }
    }

    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}
