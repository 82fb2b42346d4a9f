//! Colour value objects and conversions
//!
//! Colours travel in four shapes:
//! - hex strings like "#03f" or "0033FF"
//! - packed integers, 24-bit RGB or 32-bit RGBA, leading channel in the high byte
//! - byte triplets with channels in 0-255
//! - normalized triplets with channels in 0-1
//!
//! Triplets are untagged, so which range a slice holds is up to the caller.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest packed 24-bit RGB value
pub const MAX_RGB: u32 = 0xFF_FFFF;

/// Error when parsing a hex colour string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourParseError {
    /// Nothing left after the optional '#'
    #[error("Empty colour string")]
    Empty,
    /// Only 3 or 6 hex digits are accepted
    #[error("Expected 3 or 6 hex digits, found {0}")]
    InvalidLength(usize),
    /// A character outside 0-9, a-f, A-F
    #[error("Invalid hex digit '{0}' in colour")]
    InvalidDigit(char),
}

/// Returns a random packed RGB colour using the thread-local RNG.
pub fn random_colour_hex() -> u32 {
    random_colour_hex_with(&mut rand::thread_rng())
}

/// Returns a random packed RGB colour in `0..MAX_RGB`.
///
/// The draw is `floor(u * MAX_RGB)` for a uniform `u` in [0, 1), so
/// `MAX_RGB` itself (pure white) is never produced.
pub fn random_colour_hex_with<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    let draw: f64 = rng.gen();
    (draw * f64::from(MAX_RGB)).floor() as u32
}

/// Converts one byte to two lowercase hex digits.
pub fn component_to_hex(component: u8) -> String {
    format!("{:02x}", component)
}

/// Builds a "#rrggbb" string from a byte triplet.
///
/// # Examples
///
/// ```
/// use hudkit_domain::value_objects::rgb_to_hex;
///
/// assert_eq!(rgb_to_hex([0, 51, 255]), "#0033ff");
/// ```
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!(
        "#{}{}{}",
        component_to_hex(rgb[0]),
        component_to_hex(rgb[1]),
        component_to_hex(rgb[2])
    )
}

/// Parses "#RGB", "RGB", "#RRGGBB" or "RRGGBB" (any case) into a byte triplet.
///
/// Shorthand digits are doubled, so "03F" reads as "0033FF". Returns `None`
/// for anything else; use [`parse_hex_colour`] to learn why.
///
/// # Examples
///
/// ```
/// use hudkit_domain::value_objects::hex_to_rgb;
///
/// assert_eq!(hex_to_rgb("03F"), Some([0, 51, 255]));
/// assert_eq!(hex_to_rgb("zzz"), None);
/// ```
pub fn hex_to_rgb(hex: &str) -> Option<[u8; 3]> {
    parse_hex_colour(hex).ok()
}

/// Parses a hex colour string, reporting why it was rejected.
pub fn parse_hex_colour(input: &str) -> Result<[u8; 3], ColourParseError> {
    // Parsed by hand to keep regex out of the domain layer
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.is_empty() {
        return Err(ColourParseError::Empty);
    }

    let nibbles = digits
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(ColourParseError::InvalidDigit(c))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    match nibbles.as_slice() {
        [r, g, b] => Ok([(r << 4) | r, (g << 4) | g, (b << 4) | b]),
        [r1, r2, g1, g2, b1, b2] => Ok([(r1 << 4) | r2, (g1 << 4) | g2, (b1 << 4) | b2]),
        other => Err(ColourParseError::InvalidLength(other.len())),
    }
}

/// Lowercase hex of a packed colour, without '#' or zero padding.
///
/// Unlike [`rgb_to_hex`], leading zero bytes are dropped: `0x00FF00` gives
/// "ff00".
pub fn colour_hex_to_string(colour: u32) -> String {
    format!("{:x}", colour)
}

/// Unpacks a 24-bit RGB or 32-bit RGBA colour into channels in 0-1.
///
/// Values above [`MAX_RGB`] produce four channels, everything else three.
/// Bytes fill the output from the last slot backwards, so slots above the
/// highest non-zero byte stay 0.
///
/// # Examples
///
/// ```
/// use hudkit_domain::value_objects::colour_hex_to_triplet;
///
/// assert_eq!(colour_hex_to_triplet(0xFF0000), vec![1.0, 0.0, 0.0]);
/// assert_eq!(colour_hex_to_triplet(0).len(), 3);
/// ```
pub fn colour_hex_to_triplet(colour: u32) -> Vec<f64> {
    let width = if colour > MAX_RGB { 4 } else { 3 };
    let mut output = vec![0.0; width];

    let mut remaining = colour;
    for slot in output.iter_mut().rev() {
        if remaining == 0 {
            break;
        }
        *slot = f64::from(remaining & 0xFF) / 255.0;
        remaining >>= 8;
    }
    output
}

/// Packs the first three channels (0-1) of a triplet into a 24-bit colour.
///
/// Channels are scaled by 255 and floored, so this only approximately
/// inverts [`colour_hex_to_triplet`]. A fourth (alpha) element is ignored and
/// missing elements count as 0.
pub fn colour_triplet_to_hex(triplet: &[f64]) -> u32 {
    (0..3).fold(0u32, |packed, i| {
        let channel = triplet.get(i).copied().unwrap_or(0.0);
        let byte = (channel * 255.0).floor() as u32;
        packed.wrapping_add(byte << (8 * (2 - i)))
    })
}

/// Scales the first three channels from 0-255 to 0-1, in place.
///
/// The same slice is returned; the caller's 0-255 values are gone after
/// the call. Anything past the third element is left untouched.
///
/// # Examples
///
/// ```
/// use hudkit_domain::value_objects::normalize_colour;
///
/// let mut colour = [255.0, 0.0, 51.0];
/// normalize_colour(&mut colour);
/// assert_eq!(colour, [1.0, 0.0, 0.2]);
/// ```
pub fn normalize_colour(triplet: &mut [f64]) -> &mut [f64] {
    for channel in triplet.iter_mut().take(3) {
        *channel /= 255.0;
    }
    triplet
}

/// An opaque RGB colour, stored as bytes and written as "#rrggbb"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb([u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// A random colour from the given RNG.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_packed(random_colour_hex_with(rng))
    }

    /// Takes the low 24 bits of a packed colour.
    pub fn from_packed(colour: u32) -> Self {
        let [_, r, g, b] = colour.to_be_bytes();
        Self([r, g, b])
    }

    pub fn to_packed(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0, r, g, b])
    }

    pub fn channels(self) -> [u8; 3] {
        self.0
    }

    /// Channels scaled to 0-1.
    pub fn normalized(self) -> [f64; 3] {
        let [r, g, b] = self.0;
        let mut channels = [f64::from(r), f64::from(g), f64::from(b)];
        normalize_colour(&mut channels);
        channels
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(channels: [u8; 3]) -> Self {
        Self(channels)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&rgb_to_hex(self.0))
    }
}

impl FromStr for Rgb {
    type Err = ColourParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_colour(s).map(Self)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColourParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(colour: Rgb) -> String {
        colour.to_string()
    }
}
