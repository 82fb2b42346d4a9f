//! Hudkit Player crate.
//!
//! Owns the debug readout and the surfaces it is shown on. Platform
//! support is provided via compile-time `cfg` selection.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod logging;
pub mod ports;

// Re-export commonly used entrypoints
pub use config::{ConfigError, ReadoutConfig, RunnerConfig};
pub use infrastructure::platform::{create_display_target, MemoryTarget};
pub use infrastructure::readout::DebugReadout;
pub use ports::outbound::DisplayTarget;
