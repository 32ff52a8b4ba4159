// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batch transform composers.
//!
//! A composer accumulates elementary operations into one pending matrix and
//! applies it to a whole point buffer in a single pass. Center-relative
//! operations compose `translate(-c) · op · translate(+c)` inside the same
//! pending matrix, so a caller can chain several operations and pay the
//! rounding cost of one matrix application only.

use crate::{GeometryError, Mat3, Mat4, Vec3};

/// Arithmetic mean of a point set.
///
/// The centroid is the pivot for shape-relative scaling and rotation and the
/// window's view-reference-point.
pub fn centroid(points: &[Vec3]) -> Result<Vec3, GeometryError> {
    if points.is_empty() {
        return Err(GeometryError::EmptyPointSet);
    }
    let sum = points.iter().fold(Vec3::ZERO, |acc, p| acc + *p);
    Ok(sum / points.len() as f64)
}

/// Composer for 2D affine transforms.
///
/// Operations accumulate in call order: the first operation queued is the
/// first applied to each point. [`Transform2::apply`] consumes the pending
/// matrix and resets the composer to identity.
#[derive(Copy, Clone, Debug)]
pub struct Transform2 {
    pending: Mat3,
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform2 {
    /// Creates a composer with an identity pending matrix.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Mat3::IDENTITY,
        }
    }

    /// Queues a translation by `(d.x, d.y)`.
    pub fn translate(&mut self, d: Vec3) -> &mut Self {
        self.compose(Mat3::translation(d.x, d.y));
        self
    }

    /// Queues a counterclockwise rotation about the origin.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.compose(Mat3::rotation(angle));
        self
    }

    /// Queues a counterclockwise rotation about `center`.
    pub fn rotate_about(&mut self, angle: f64, center: Vec3) -> &mut Self {
        self.compose(
            Mat3::translation(center.x, center.y)
                * Mat3::rotation(angle)
                * Mat3::translation(-center.x, -center.y),
        );
        self
    }

    /// Queues a uniform scale about `center`.
    ///
    /// A factor of zero is allowed; it collapses the geometry onto `center`
    /// and is lossy.
    pub fn scale_about(&mut self, factor: f64, center: Vec3) -> &mut Self {
        self.compose(
            Mat3::translation(center.x, center.y)
                * Mat3::scale(factor)
                * Mat3::translation(-center.x, -center.y),
        );
        self
    }

    /// Applies the accumulated matrix to every point, then resets to identity.
    pub fn apply(&mut self, points: &mut [Vec3]) {
        let m = self.pending;
        self.pending = Mat3::IDENTITY;
        for p in points {
            *p = m.apply(*p);
        }
    }

    /// The currently pending matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat3 {
        self.pending
    }

    fn compose(&mut self, op: Mat3) {
        self.pending = op * self.pending;
    }
}

/// Composer for 3D affine transforms.
///
/// Same contract as [`Transform2`] with the 4×4 homogeneous form. Rotation
/// takes an arbitrary axis; it is normalized here and a near-zero axis is
/// rejected before anything is queued.
#[derive(Copy, Clone, Debug)]
pub struct Transform3 {
    pending: Mat4,
}

impl Default for Transform3 {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform3 {
    /// Creates a composer with an identity pending matrix.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Mat4::IDENTITY,
        }
    }

    /// Queues a translation by `d`.
    pub fn translate(&mut self, d: Vec3) -> &mut Self {
        self.compose(Mat4::translation(d));
        self
    }

    /// Queues a rotation about an axis through the origin.
    pub fn rotate(&mut self, angle: f64, axis: Vec3) -> Result<&mut Self, GeometryError> {
        let axis = axis.normalize()?;
        self.compose(Mat4::rotation(angle, axis));
        Ok(self)
    }

    /// Queues a rotation about an axis through `center`.
    pub fn rotate_about(
        &mut self,
        angle: f64,
        axis: Vec3,
        center: Vec3,
    ) -> Result<&mut Self, GeometryError> {
        let axis = axis.normalize()?;
        self.compose(
            Mat4::translation(center) * Mat4::rotation(angle, axis) * Mat4::translation(-center),
        );
        Ok(self)
    }

    /// Queues a uniform scale about `center`.
    ///
    /// A factor of zero is allowed; it collapses the geometry onto `center`
    /// and is lossy.
    pub fn scale_about(&mut self, factor: f64, center: Vec3) -> &mut Self {
        self.compose(Mat4::translation(center) * Mat4::scale(factor) * Mat4::translation(-center));
        self
    }

    /// Applies the accumulated matrix to every point, then resets to identity.
    pub fn apply(&mut self, points: &mut [Vec3]) {
        let m = self.pending;
        self.pending = Mat4::IDENTITY;
        for p in points {
            *p = m.apply(*p);
        }
    }

    /// Applies the accumulated matrix to several buffers in one pass, then
    /// resets to identity.
    ///
    /// Canonicalization and projection transform the window corners and every
    /// dirty shape's working copy with the *same* composed matrix so relative
    /// geometry is preserved exactly; this entry point keeps that a single
    /// `apply`.
    pub fn apply_all(&mut self, buffers: &mut [&mut [Vec3]]) {
        let m = self.pending;
        self.pending = Mat4::IDENTITY;
        for buffer in buffers {
            for p in buffer.iter_mut() {
                *p = m.apply(*p);
            }
        }
    }

    /// The currently pending matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        self.pending
    }

    fn compose(&mut self, op: Mat4) {
        self.pending = op * self.pending;
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use super::{Transform2, Transform3, centroid};
    use crate::{GeometryError, Vec3};

    #[test]
    fn centroid_of_square() {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        ];
        assert_eq!(centroid(&points).unwrap(), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(centroid(&[]), Err(GeometryError::EmptyPointSet));
    }

    #[test]
    fn operations_apply_in_call_order() {
        // Translate to (1, 0), then rotate a quarter turn about the origin.
        let mut t = Transform2::new();
        t.translate(Vec3::new(1.0, 0.0, 0.0)).rotate(FRAC_PI_2);
        let mut points = [Vec3::ZERO];
        t.apply(&mut points);
        assert!(points[0].approx_eq(Vec3::new(0.0, 1.0, 0.0), 1e-12));
    }

    #[test]
    fn apply_resets_to_identity() {
        let mut t = Transform2::new();
        t.translate(Vec3::new(5.0, 5.0, 0.0));
        let mut points = [Vec3::ZERO];
        t.apply(&mut points);
        t.apply(&mut points);
        assert_eq!(points[0], Vec3::new(5.0, 5.0, 0.0));
    }

    #[test]
    fn scale_about_center_keeps_center_fixed() {
        let center = Vec3::new(1.0, 1.0, 0.0);
        let mut points = [center, Vec3::new(2.0, 1.0, 0.0)];
        let mut t = Transform2::new();
        t.scale_about(3.0, center);
        t.apply(&mut points);
        assert!(points[0].approx_eq(center, 1e-12));
        assert!(points[1].approx_eq(Vec3::new(4.0, 1.0, 0.0), 1e-12));
    }

    #[test]
    fn rotate_about_arbitrary_axis_round_trip() {
        let axis = Vec3::new(1.0, 2.0, 3.0);
        let center = Vec3::new(4.0, 5.0, 6.0);
        let original = [Vec3::new(7.0, -1.0, 0.5)];
        let mut points = original;

        let mut t = Transform3::new();
        t.rotate_about(PI, axis, center)
            .unwrap()
            .rotate_about(PI, axis, center)
            .unwrap();
        t.apply(&mut points);
        assert!(points[0].approx_eq(original[0], 1e-9));
    }

    #[test]
    fn degenerate_axis_is_rejected_before_queueing() {
        let mut t = Transform3::new();
        assert_eq!(
            t.rotate(1.0, Vec3::ZERO).err(),
            Some(GeometryError::DegenerateAxis)
        );
        // Nothing was queued: applying is a no-op.
        let mut points = [Vec3::new(1.0, 2.0, 3.0)];
        t.apply(&mut points);
        assert_eq!(points[0], Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn apply_all_shares_one_matrix() {
        let mut a = [Vec3::new(1.0, 0.0, 0.0)];
        let mut b = [Vec3::new(0.0, 1.0, 0.0)];
        let mut t = Transform3::new();
        t.translate(Vec3::new(0.0, 0.0, 2.0));
        t.apply_all(&mut [&mut a, &mut b]);
        assert_eq!(a[0], Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(b[0], Vec3::new(0.0, 1.0, 2.0));
    }
}
