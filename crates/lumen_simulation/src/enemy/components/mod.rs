//! Enemy components

pub mod body;
pub mod config;
pub mod perception;
pub mod state;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod config_tests;

// Re-export all components
pub use body::*;
pub use config::*;
pub use perception::*;
pub use state::*;
