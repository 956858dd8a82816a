//! CLI library components for the resource-directory migration tool.

pub mod logging;
pub mod pipeline;
