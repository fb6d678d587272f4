//! Durascope: Winger Durability Analysis Library
//!
//! Loads a table of before/after-22 match and injury counts, derives growth
//! factors, and renders charts and console summaries.

pub mod charts;
pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
