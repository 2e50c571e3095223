//! Command implementations

pub mod benchmark;
pub mod check;
pub mod find;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, random_racks, run_benchmark};
pub use check::{CheckResult, Violation, check_word};
pub use find::{FindConfig, FindSummary, find_words};
