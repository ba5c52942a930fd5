//! Mentor list filtering
//!
//! Pure evaluation of filter criteria against mentor records. All active
//! constraints are AND-combined; filtering preserves the original order of
//! the mentor list so the UI shell can rely on a stable view.

mod criteria;
mod evaluator;

#[cfg(test)]
mod evaluator_tests;

pub use criteria::FilterCriteria;
pub use evaluator::{apply, matches, select};
