//! Hudkit Domain - pure helpers behind the game HUD.
//!
//! Everything here is a plain function or value object: no I/O, no global
//! state, and it builds for both native and WASM targets.

pub mod common;
pub mod error;
pub mod value_objects;

pub use error::DomainError;

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    azimuth_from_quaternion, colour_hex_to_string, colour_hex_to_triplet, colour_triplet_to_hex,
    component_to_hex, generate_name, generate_name_with, hex_to_rgb, normalize_colour,
    parse_hex_colour, random_colour_hex, random_colour_hex_with, rgb_to_hex, vector_to_string,
    ColourParseError, Quat, QuaternionComponents, Rgb, Vec3, VectorComponents, ADJECTIVES,
    MAX_RGB, NOUNS,
};
