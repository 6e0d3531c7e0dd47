//! # stride-core
//!
//! Core types shared across all stride crates:
//! - The [`Session`](entities::Session) record and its live predicate evaluation
//! - Raw input records and field coercion rules
//! - The closed set of sort strategies
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod record;
pub mod responses;
