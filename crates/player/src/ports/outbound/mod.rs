//! Outbound ports - Interfaces for the surfaces the player draws on
//!
//! Infrastructure adapters implement these so the readout never depends on
//! a concrete platform.

pub mod display_port;

pub use display_port::DisplayTarget;

#[cfg(test)]
pub use display_port::MockDisplayTarget;
