pub mod files;
pub mod parse;

use stride_core::entities::Session;
use stride_core::enums::SortStrategy;
use stride_core::responses::{SearchResponse, SortResponse};

pub fn sort_response(strategy: SortStrategy, sorted: &[&Session], skipped_rows: usize) -> SortResponse {
    SortResponse {
        strategy,
        sessions: sorted.iter().map(|session| session.to_row()).collect(),
        skipped_rows,
    }
}

pub fn search_response(min_energy: f64, searched: usize, matches: &[&Session]) -> SearchResponse {
    SearchResponse {
        min_energy,
        searched,
        matches: matches.iter().map(|session| session.to_row()).collect(),
    }
}
