//! Command implementations for the bundlehost CLI

pub mod completions;
pub mod helpers;
pub mod list;
pub mod serve;
pub mod version;
