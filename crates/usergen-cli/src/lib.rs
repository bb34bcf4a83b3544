//! CLI library components for the username candidate generator.

pub mod logging;
pub mod pipeline;
