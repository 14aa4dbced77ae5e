//! Three-component vector type and the angle helpers the flock needs.
//!
//! All operations are pure and return new values; nothing is mutated through
//! output parameters.  `f32` throughout: the simulation runs at flock sizes
//! of tens of agents inside a ten-unit enclosure, where single precision is
//! ample.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Convert degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Convert radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians.to_degrees()
}

/// A point or direction in 3-D space.  Y is the vertical axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X:    Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y:    Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z:    Vec3 = Vec3::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared Euclidean distance.  Every neighbor ranking in the workspace
    /// goes through this function so that all index implementations agree
    /// bit-for-bit.
    #[inline]
    pub fn distance_squared(self, other: Vec3) -> f32 {
        (other - self).length_squared()
    }

    #[inline]
    pub fn distance(self, other: Vec3) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Exact comparison against zero on every component.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Unit vector in the same direction, or `None` if the magnitude is at
    /// or below `min_length` (or not finite).
    #[inline]
    pub fn try_normalize(self, min_length: f32) -> Option<Vec3> {
        let len = self.length();
        if !len.is_finite() || len <= min_length {
            return None;
        }
        Some(self / len)
    }

    /// Unit vector in the same direction, or `fallback` when degenerate.
    #[inline]
    pub fn normalize_or(self, min_length: f32, fallback: Vec3) -> Vec3 {
        self.try_normalize(min_length).unwrap_or(fallback)
    }

    /// Elevation above the XZ plane in degrees (`asin(y)`).
    ///
    /// Expects a unit vector; `y` is clamped so rounding drift cannot
    /// produce `NaN`.
    pub fn pitch_degrees(self) -> f32 {
        radians_to_degrees(self.y.clamp(-1.0, 1.0).asin())
    }

    /// Heading around the Y axis in degrees (`atan2(x, z)`), 0° along +Z.
    pub fn yaw_degrees(self) -> f32 {
        radians_to_degrees(self.x.atan2(self.z))
    }

    /// Unit vector with the given pitch and yaw (degrees).
    ///
    /// Inverse of [`pitch_degrees`](Self::pitch_degrees) /
    /// [`yaw_degrees`](Self::yaw_degrees) for pitch in `[-90, 90]`.
    pub fn from_pitch_yaw(pitch_degrees: f32, yaw_degrees: f32) -> Vec3 {
        let pitch = degrees_to_radians(pitch_degrees);
        let yaw = degrees_to_radians(yaw_degrees);
        Vec3::new(pitch.cos() * yaw.sin(), pitch.sin(), pitch.cos() * yaw.cos())
    }

    /// Unit normal of the triangle `p1, p2, p3` (counter-clockwise winding),
    /// or `None` for a degenerate triangle.
    pub fn triangle_normal(p1: Vec3, p2: Vec3, p3: Vec3) -> Option<Vec3> {
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        e1.cross(e2).try_normalize(0.0)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vec3::new(x, y, z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}
