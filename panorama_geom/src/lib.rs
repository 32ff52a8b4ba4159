// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panorama Geom: homogeneous vectors, matrices, and transform composers.
//!
//! This crate is the leaf of the Panorama viewing pipeline. It provides:
//! - [`Vec3`]: a 3-component point/direction with componentwise arithmetic
//!   and an implicit homogeneous weight of 1.
//! - [`Mat3`] / [`Mat4`]: 2D and 3D homogeneous matrices with translation,
//!   scale, and rotation constructors. Rotation is always built from the
//!   axis-angle (quaternion) form; there are no axis-aligned special cases.
//! - [`Transform2`] / [`Transform3`]: composers that accumulate elementary
//!   operations into a single pending matrix and apply it to a batch of
//!   points in one pass.
//!
//! Transformed points are always freshly computed values written back into
//! the caller's buffer; no `Vec3` is ever shared between two consumers.
//!
//! ## Example
//!
//! ```rust
//! use panorama_geom::{Transform3, Vec3};
//!
//! let axis = Vec3::new(0.0, 0.0, 1.0);
//! let mut points = [Vec3::new(1.0, 0.0, 0.0)];
//!
//! let mut t = Transform3::new();
//! t.rotate(core::f64::consts::FRAC_PI_2, axis).unwrap();
//! t.apply(&mut points);
//!
//! assert!(points[0].approx_eq(Vec3::new(0.0, 1.0, 0.0), 1e-12));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod mat;
mod transform;
mod vec3;

pub use error::GeometryError;
pub use mat::{Mat3, Mat4};
pub use transform::{Transform2, Transform3, centroid};
pub use vec3::Vec3;
