//! Quaternions and heading extraction
//!
//! The axis layout is right-handed with +Y up, matching the renderer.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Anything that exposes the four components of a quaternion.
pub trait QuaternionComponents {
    fn w(&self) -> f64;
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
}

/// A rotation quaternion with components (w, x, y, z)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quat {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Rotation of `radians` about the vertical (+Y) axis.
    pub fn from_yaw(radians: f64) -> Self {
        let (sin, cos) = (radians / 2.0).sin_cos();
        Self::new(cos, 0.0, sin, 0.0)
    }

    pub fn length(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns this quaternion scaled to unit length.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the length is zero or not finite.
    pub fn try_normalized(&self) -> Result<Self, DomainError> {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            return Err(DomainError::validation(format!(
                "Cannot normalize quaternion with length {}",
                length
            )));
        }
        Ok(Self::new(
            self.w / length,
            self.x / length,
            self.y / length,
            self.z / length,
        ))
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl QuaternionComponents for Quat {
    fn w(&self) -> f64 {
        self.w
    }

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

/// Heading of a rotation about the vertical axis, in radians within (-π, π].
///
/// Expects a unit quaternion. Nothing is normalized or validated here: a
/// non-unit input gives a wrong angle rather than an error. Use
/// [`Quat::try_normalized`] first when the input may have drifted.
///
/// # Examples
///
/// ```
/// use hudkit_domain::value_objects::{azimuth_from_quaternion, Quat};
///
/// assert_eq!(azimuth_from_quaternion(&Quat::IDENTITY), 0.0);
/// ```
pub fn azimuth_from_quaternion<Q: QuaternionComponents + ?Sized>(q: &Q) -> f64 {
    let s = 2.0 * (q.w() * q.y() + q.z() * q.x());
    let c = 1.0 - 2.0 * (q.x() * q.x() + q.y() * q.y());
    s.atan2(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_identity_has_zero_azimuth() {
        assert_eq!(azimuth_from_quaternion(&Quat::IDENTITY), 0.0);
    }

    #[test]
    fn test_quarter_turn_yaw() {
        let q = Quat::from_yaw(FRAC_PI_2);
        assert!((azimuth_from_quaternion(&q) - FRAC_PI_2).abs() < EPSILON);

        let q = Quat::from_yaw(-FRAC_PI_2);
        assert!((azimuth_from_quaternion(&q) + FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_yaw_roundtrip_inside_range() {
        for angle in [-3.0, -FRAC_PI_4, 0.3, 1.0, 2.5, 3.1] {
            let q = Quat::from_yaw(angle);
            assert!(
                (azimuth_from_quaternion(&q) - angle).abs() < EPSILON,
                "angle {angle}"
            );
        }
    }

    #[test]
    fn test_half_turn_is_pi() {
        let q = Quat::new(0.0, 0.0, 1.0, 0.0);
        assert!((azimuth_from_quaternion(&q) - PI).abs() < EPSILON);
    }

    #[test]
    fn test_pitch_only_rotation_has_zero_azimuth() {
        // Rotation about +X leaves the heading untouched
        let half = FRAC_PI_4 / 2.0;
        let q = Quat::new(half.cos(), half.sin(), 0.0, 0.0);
        assert!(azimuth_from_quaternion(&q).abs() < EPSILON);
    }

    #[test]
    fn test_non_unit_input_does_not_panic() {
        let q = Quat::new(3.0, 0.0, 4.0, 0.0);
        assert!(azimuth_from_quaternion(&q).is_finite());
    }

    #[test]
    fn test_try_normalized_scales_to_unit_length() {
        let q = Quat::new(2.0, 0.0, 0.0, 0.0)
            .try_normalized()
            .expect("non-zero quaternion");
        assert_eq!(q, Quat::IDENTITY);

        let q = Quat::new(1.0, 2.0, 3.0, 4.0)
            .try_normalized()
            .expect("non-zero quaternion");
        assert!((q.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_try_normalized_rejects_zero() {
        let err = Quat::new(0.0, 0.0, 0.0, 0.0)
            .try_normalized()
            .expect_err("zero-length quaternion");
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Quat::default(), Quat::IDENTITY);
    }
}
