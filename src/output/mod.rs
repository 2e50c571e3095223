//! Terminal output formatting
//!
//! Display utilities for CLI results and diagnostics.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_check_result, print_error, print_find_summary,
    print_query_header, print_warning,
};
