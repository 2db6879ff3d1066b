//! CLI command implementations

pub mod completions;
pub mod config;
pub mod grow;
pub mod map;
pub mod paths;
pub mod trim;
