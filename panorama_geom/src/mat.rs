// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D and 3D homogeneous matrices.
//!
//! Both matrix types use the column-vector convention: `m * p` transforms
//! point `p`, and `(b * a).apply(p)` applies `a` first, then `b`. Rotation
//! matrices are always derived from the axis-angle (quaternion) form; the
//! 2D rotation is the specialization about the depth axis.

use core::ops::Mul;

use crate::Vec3;

/// A 3×3 homogeneous matrix for 2D affine transforms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat3 {
    rows: [[f64; 3]; 3],
}

impl Mat3 {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Translation by `(dx, dy)`.
    #[must_use]
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self {
            rows: [[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]],
        }
    }

    /// Uniform scale about the origin.
    ///
    /// A factor of zero is permitted and collapses geometry onto the origin;
    /// the operation is lossy and cannot be inverted.
    #[must_use]
    pub const fn scale(factor: f64) -> Self {
        Self {
            rows: [[factor, 0.0, 0.0], [0.0, factor, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Counterclockwise rotation about the origin by `angle` radians.
    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        let (s, c) = (libm::sin(angle), libm::cos(angle));
        Self {
            rows: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Transforms a point's `x`/`y` components, leaving `z` untouched.
    #[must_use]
    pub fn apply(&self, p: Vec3) -> Vec3 {
        let r = &self.rows;
        Vec3::new(
            r[0][0] * p.x + r[0][1] * p.y + r[0][2],
            r[1][0] * p.x + r[1][1] * p.y + r[1][2],
            p.z,
        )
    }
}

impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[i][k] * rhs.rows[k][j]).sum();
            }
        }
        Self { rows }
    }
}

/// A 4×4 homogeneous matrix for 3D affine transforms.
///
/// The bottom row is always `[0, 0, 0, 1]`; the perspective divide is not a
/// matrix operation in this pipeline (see the projection module of
/// `panorama_window`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat4 {
    rows: [[f64; 4]; 4],
}

impl Mat4 {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Translation by `d`.
    #[must_use]
    pub const fn translation(d: Vec3) -> Self {
        Self {
            rows: [
                [1.0, 0.0, 0.0, d.x],
                [0.0, 1.0, 0.0, d.y],
                [0.0, 0.0, 1.0, d.z],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Uniform scale about the origin.
    ///
    /// A factor of zero collapses geometry onto the origin (lossy).
    #[must_use]
    pub const fn scale(factor: f64) -> Self {
        Self {
            rows: [
                [factor, 0.0, 0.0, 0.0],
                [0.0, factor, 0.0, 0.0],
                [0.0, 0.0, factor, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Rotation by `angle` radians about the given axis.
    ///
    /// `axis` must be unit length; callers that accept arbitrary axes go
    /// through [`Vec3::normalize`] first (see [`crate::Transform3::rotate`]).
    /// Built from the quaternion components
    /// `q0 = cos(θ/2)`, `(q1, q2, q3) = sin(θ/2) · axis`.
    #[must_use]
    pub fn rotation(angle: f64, axis: Vec3) -> Self {
        let q0 = libm::cos(angle / 2.0);
        let s = libm::sin(angle / 2.0);
        let (q1, q2, q3) = (s * axis.x, s * axis.y, s * axis.z);

        let r00 = q0 * q0 + q1 * q1 - q2 * q2 - q3 * q3;
        let r01 = 2.0 * (q1 * q2 - q0 * q3);
        let r02 = 2.0 * (q1 * q3 + q0 * q2);
        let r10 = 2.0 * (q1 * q2 + q0 * q3);
        let r11 = q0 * q0 - q1 * q1 + q2 * q2 - q3 * q3;
        let r12 = 2.0 * (q2 * q3 - q0 * q1);
        let r20 = 2.0 * (q1 * q3 - q0 * q2);
        let r21 = 2.0 * (q2 * q3 + q0 * q1);
        let r22 = q0 * q0 - q1 * q1 - q2 * q2 + q3 * q3;

        Self {
            rows: [
                [r00, r01, r02, 0.0],
                [r10, r11, r12, 0.0],
                [r20, r21, r22, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Transforms a point (homogeneous weight 1).
    #[must_use]
    pub fn apply(&self, p: Vec3) -> Vec3 {
        let r = &self.rows;
        Vec3::new(
            r[0][0] * p.x + r[0][1] * p.y + r[0][2] * p.z + r[0][3],
            r[1][0] * p.x + r[1][1] * p.y + r[1][2] * p.z + r[1][3],
            r[2][0] * p.x + r[2][1] * p.y + r[2][2] * p.z + r[2][3],
        )
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut rows = [[0.0; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.rows[i][k] * rhs.rows[k][j]).sum();
            }
        }
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use super::{Mat3, Mat4};
    use crate::Vec3;

    #[test]
    fn mat3_rotation_quarter_turn() {
        let m = Mat3::rotation(FRAC_PI_2);
        let p = m.apply(Vec3::new(1.0, 0.0, 0.0));
        assert!(p.approx_eq(Vec3::new(0.0, 1.0, 0.0), 1e-12));
    }

    #[test]
    fn mat3_composition_order_is_right_to_left() {
        // Translate then rotate: rotation matrix on the left.
        let m = Mat3::rotation(FRAC_PI_2) * Mat3::translation(1.0, 0.0);
        let p = m.apply(Vec3::ZERO);
        assert!(p.approx_eq(Vec3::new(0.0, 1.0, 0.0), 1e-12));
    }

    #[test]
    fn mat4_axis_angle_matches_planar_rotation() {
        let about_z = Mat4::rotation(1.25, Vec3::Z);
        let planar = Mat3::rotation(1.25);
        let p = Vec3::new(3.0, -2.0, 7.0);
        assert!(about_z.apply(p).approx_eq(planar.apply(p), 1e-12));
    }

    #[test]
    fn mat4_full_turn_is_identity() {
        let axis = Vec3::new(1.0, 1.0, 1.0).normalize().unwrap();
        let m = Mat4::rotation(2.0 * PI, axis);
        let p = Vec3::new(0.5, -1.5, 2.0);
        assert!(m.apply(p).approx_eq(p, 1e-9));
    }

    #[test]
    fn scale_zero_collapses_to_origin() {
        let m = Mat4::scale(0.0);
        assert_eq!(m.apply(Vec3::new(9.0, 9.0, 9.0)), Vec3::ZERO);
    }
}
