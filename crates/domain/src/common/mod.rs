//! Common utility functions shared across the Hudkit crates.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **WASM compatible** - all code must work in both native and WASM targets

pub mod number;
pub mod string;

// Re-export commonly used functions at crate root for convenience
pub use number::format_fixed3;
pub use string::{capitalize_first_letter, StrExt};
