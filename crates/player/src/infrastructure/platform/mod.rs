//! Platform-specific display targets
//!
//! The correct target is selected at compile time based on the target architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

mod memory;

#[cfg(target_arch = "wasm32")]
pub use wasm::{ElementTarget, TargetError};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::TerminalTarget;

pub use memory::MemoryTarget;

use crate::config::ReadoutConfig;
use crate::ports::outbound::DisplayTarget;

/// Id of the DOM element the browser build writes into
pub const READOUT_ELEMENT_ID: &str = "readout";

/// Creates the display target for the current platform.
#[cfg(target_arch = "wasm32")]
pub fn create_display_target(_config: &ReadoutConfig) -> anyhow::Result<Box<dyn DisplayTarget>> {
    Ok(Box::new(ElementTarget::by_id(READOUT_ELEMENT_ID)?))
}

/// Creates the display target for the current platform.
#[cfg(not(target_arch = "wasm32"))]
pub fn create_display_target(config: &ReadoutConfig) -> anyhow::Result<Box<dyn DisplayTarget>> {
    Ok(Box::new(TerminalTarget::stdout(config.line_break.clone())))
}
