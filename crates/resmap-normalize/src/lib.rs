//! Category normalization for consolidated resource directories.

pub mod classifier;
pub mod rules;
pub mod runner;

pub use classifier::{Classification, Rule, classify};
pub use runner::{BatchOutcome, run};
