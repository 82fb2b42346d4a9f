//! Infrastructure layer - the readout buffer and the platform targets it flushes to.

pub mod platform;
pub mod readout;
