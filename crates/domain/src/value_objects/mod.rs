//! Value objects for the HUD layer
//!
//! Stateless conversions between the shapes the renderer, the login form
//! and the debug readout use for vectors, colours, rotations and names.

mod colour;
mod names;
mod quaternion;
mod vector;

pub use colour::{
    colour_hex_to_string, colour_hex_to_triplet, colour_triplet_to_hex, component_to_hex,
    hex_to_rgb, normalize_colour, parse_hex_colour, random_colour_hex, random_colour_hex_with,
    rgb_to_hex, ColourParseError, Rgb, MAX_RGB,
};
pub use names::{generate_name, generate_name_with, ADJECTIVES, NOUNS};
pub use quaternion::{azimuth_from_quaternion, Quat, QuaternionComponents};
pub use vector::{vector_to_string, Vec3, VectorComponents};
