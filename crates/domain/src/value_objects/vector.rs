//! Three-component vectors and their debug formatting

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::format_fixed3;

/// Anything that exposes three numeric components.
///
/// Implemented for [`Vec3`], `[f64; 3]` and `(f64, f64, f64)` so callers can
/// hand over whatever their math library produces.
pub trait VectorComponents {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
}

/// A plain 3D vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl VectorComponents for Vec3 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> f64 {
        self.z
    }
}

impl VectorComponents for [f64; 3] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }

    fn z(&self) -> f64 {
        self[2]
    }
}

impl VectorComponents for (f64, f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }

    fn z(&self) -> f64 {
        self.2
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&vector_to_string(self))
    }
}

/// Formats a vector as `(x, y, z)` with three decimals per component.
///
/// # Examples
///
/// ```
/// use hudkit_domain::value_objects::{vector_to_string, Vec3};
///
/// assert_eq!(vector_to_string(&Vec3::new(1.0, -0.5, 2.25)), "(1.000, -0.500, 2.250)");
/// assert_eq!(vector_to_string(&[0.0, 0.0, 0.0]), "(0.000, 0.000, 0.000)");
/// ```
pub fn vector_to_string<V: VectorComponents + ?Sized>(v: &V) -> String {
    format!(
        "({}, {}, {})",
        format_fixed3(v.x()),
        format_fixed3(v.y()),
        format_fixed3(v.z())
    )
}
