//! CLI library components for paxname.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
