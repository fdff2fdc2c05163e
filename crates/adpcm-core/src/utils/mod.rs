//! Shared helpers for the codec implementations

pub mod validation;

pub use validation::*;
