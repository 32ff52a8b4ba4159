// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panorama Curve: parametric curve and surface tessellation.
//!
//! This crate expands small control-point sets into dense polylines and
//! wireframe meshes:
//!
//! - [`tessellate_bezier`]: cubic Bézier chains (4-point groups sharing an
//!   endpoint at each join) sampled with the Bernstein blend.
//! - [`tessellate_bspline`]: uniform cubic B-splines sampled with the
//!   forward-difference recurrence, two vector additions per sample.
//! - [`tessellate_bspline_surface`]: bicubic B-spline patches over a control
//!   grid, forward-differenced in both parametric directions and emitted as
//!   the two iso-parameter polyline families of a wireframe mesh.
//!
//! Tessellation is deterministic: identical inputs produce byte-identical
//! output. [`Resolution`] clamps points-per-segment to a sane range so a
//! hostile resolution cannot blow up output size.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bezier;
mod bspline;
mod error;
mod resolution;
mod surface;

pub use bezier::tessellate_bezier;
pub use bspline::tessellate_bspline;
pub use error::TessellationError;
pub use resolution::Resolution;
pub use surface::tessellate_bspline_surface;

/// The 4×4 uniform cubic B-spline basis matrix (already divided by 6).
///
/// Multiplying a 4-point geometry vector by this matrix yields the cubic
/// coefficients `[a, b, c, d]` of the segment polynomial
/// `a·t³ + b·t² + c·t + d`.
pub(crate) const BSPLINE_BASIS: [[f64; 4]; 4] = [
    [-1.0 / 6.0, 3.0 / 6.0, -3.0 / 6.0, 1.0 / 6.0],
    [3.0 / 6.0, -6.0 / 6.0, 3.0 / 6.0, 0.0],
    [-3.0 / 6.0, 0.0, 3.0 / 6.0, 0.0],
    [1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0, 0.0],
];

/// The forward-difference initialization matrix for step size `delta`.
///
/// Applied to cubic coefficients it yields `[f(0), Δ, Δ², Δ³]`: the first
/// sample and the three difference increments that advance it.
pub(crate) fn delta_matrix(delta: f64) -> [[f64; 4]; 4] {
    let d2 = delta * delta;
    let d3 = d2 * delta;
    [
        [0.0, 0.0, 0.0, 1.0],
        [d3, d2, delta, 0.0],
        [6.0 * d3, 2.0 * d2, 0.0, 0.0],
        [6.0 * d3, 0.0, 0.0, 0.0],
    ]
}
