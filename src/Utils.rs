//! different utility modules used throughout the project
/// startup settings read from RustedFxFinder.toml
pub mod config;
/// terminal and file logging
pub mod logger;
/// chart of a sampled function rendered with plotters
pub mod plots;
