// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamped tessellation resolution.

/// Points generated per curve segment (or steps per surface direction).
///
/// Construction clamps into the legal range, so a `Resolution` is always
/// usable as-is and output size stays bounded no matter what the intake
/// form supplied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution(usize);

impl Resolution {
    /// Minimum points per curve segment.
    pub const CURVE_MIN: usize = 10;
    /// Maximum points per curve segment.
    pub const CURVE_MAX: usize = 1000;
    /// Minimum steps per surface parametric direction.
    pub const SURFACE_MIN: usize = 2;
    /// Maximum steps per surface parametric direction.
    pub const SURFACE_MAX: usize = 10;

    /// Resolution for a curve, clamped to `[CURVE_MIN, CURVE_MAX]`.
    #[must_use]
    pub fn for_curve(points_per_segment: usize) -> Self {
        Self(points_per_segment.clamp(Self::CURVE_MIN, Self::CURVE_MAX))
    }

    /// Resolution for a surface, clamped to `[SURFACE_MIN, SURFACE_MAX]`.
    #[must_use]
    pub fn for_surface(steps: usize) -> Self {
        Self(steps.clamp(Self::SURFACE_MIN, Self::SURFACE_MAX))
    }

    /// The clamped step count.
    #[must_use]
    pub const fn steps(self) -> usize {
        self.0
    }
}
