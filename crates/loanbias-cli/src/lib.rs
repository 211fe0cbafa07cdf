//! CLI library components for the loan bias tool.

pub mod config;
pub mod logging;
