//! Mentor directory data models
//!
//! This module defines the core data structures shared between the API
//! layer, the filter evaluator and the session.

pub mod mentor;

pub use mentor::*;
