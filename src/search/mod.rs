//! Word search
//!
//! Query validation, the backtracking engine and its counters.

mod engine;
pub mod query;
mod stats;

pub use engine::WordSearch;
pub use query::{Adjustment, Query, QueryBuilder, QueryError};
pub use stats::SearchStats;
