// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 3-component homogeneous point/direction.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::GeometryError;

/// A 3-component point or direction with an implicit homogeneous weight of 1.
///
/// `Vec3` is the unit of currency for the whole pipeline: shape geometry,
/// window corners, and clip results are all lists of `Vec3`. 2D geometry
/// simply leaves `z` at zero.
///
/// Values are plain `Copy` data; transformations produce new vectors rather
/// than mutating shared instances.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component (depth; zero for 2D geometry).
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// The canonical depth axis (+z), which the view-plane normal is aligned
    /// to before projection.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// The canonical vertical axis (+y), which the window's local "up" is
    /// aligned to by canonicalization.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to `v`.
    #[must_use]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f64 {
        libm::sqrt(self.dot(self))
    }

    /// Returns the unit vector in this direction.
    ///
    /// A near-zero-magnitude vector has no direction and yields
    /// [`GeometryError::DegenerateAxis`].
    pub fn normalize(self) -> Result<Self, GeometryError> {
        let len = self.length();
        if len < 1e-12 || !len.is_finite() {
            return Err(GeometryError::DegenerateAxis);
        }
        Ok(self / len)
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Componentwise approximate equality.
    #[must_use]
    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        libm::fabs(self.x - other.x) <= eps
            && libm::fabs(self.y - other.y) <= eps
            && libm::fabs(self.z - other.z) <= eps
    }

    /// `true` when every component is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Lexicographic total order over `(x, y, z)` using `f64::total_cmp`.
    ///
    /// Used for deterministic, order-independent vertex deduplication when
    /// building persisted-geometry documents.
    #[must_use]
    pub fn cmp_total(self, other: Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then(self.y.total_cmp(&other.y))
            .then(self.z.total_cmp(&other.z))
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul for Vec3 {
    type Output = Self;

    /// Componentwise product.
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}
