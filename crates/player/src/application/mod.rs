//! Application layer - what the player shows each frame.

pub mod hud;
