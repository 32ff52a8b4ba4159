// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parallel and perspective projection into the canonical frame.
//!
//! Both projections start from the same alignment step: translate by the
//! negated view-reference-point, then rotate the view-plane normal onto the
//! canonical depth axis. The composed transform is applied jointly to the
//! window's ppc corners and the supplied point buffers, so clipping and
//! canonicalization downstream see a consistent frame.

use panorama_geom::{GeometryError, Transform3, Vec3};

use crate::Window;

/// How points reach the view plane, chosen at redraw time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ProjectionMode {
    /// Orthographic: depth is dropped unchanged.
    Parallel,
    /// Pinhole divide through a center of projection.
    Perspective {
        /// Center of projection, in world coordinates.
        cop: Vec3,
        /// Near-plane depth; points closer than this are clamped to it.
        near: f64,
    },
}

impl Default for ProjectionMode {
    fn default() -> Self {
        Self::Parallel
    }
}

impl ProjectionMode {
    /// Projects `buffers` (and the window's ppc corners) per this mode.
    pub fn project(
        self,
        window: &mut Window,
        buffers: &mut [&mut [Vec3]],
    ) -> Result<(), GeometryError> {
        match self {
            Self::Parallel => project_parallel(window, buffers),
            Self::Perspective { cop, near } => project_perspective(window, buffers, cop, near),
        }
    }
}

/// Parallel projection: view alignment only.
///
/// When the normal already points along +z and the window is centered at the
/// origin this is the identity.
pub fn project_parallel(
    window: &mut Window,
    buffers: &mut [&mut [Vec3]],
) -> Result<(), GeometryError> {
    window.begin_ppc();
    let t = alignment(window)?;
    let m = t.matrix();
    for corner in window.ppc_mut() {
        *corner = m.apply(*corner);
    }
    for buffer in buffers.iter_mut() {
        for p in buffer.iter_mut() {
            *p = m.apply(*p);
        }
    }
    window.set_ppc_vpn(Vec3::Z);
    Ok(())
}

/// Perspective projection: view alignment, then a pinhole divide through
/// `cop` with depth clamped to `near`.
///
/// Fails with [`GeometryError::NonFinite`] before any mutation when `near`
/// is not a positive finite depth or a buffer point is non-finite, so the
/// caller's buffers are never left half-projected.
pub fn project_perspective(
    window: &mut Window,
    buffers: &mut [&mut [Vec3]],
    cop: Vec3,
    near: f64,
) -> Result<(), GeometryError> {
    if !(near > 0.0 && near.is_finite()) || !cop.is_finite() {
        return Err(GeometryError::NonFinite);
    }
    if buffers.iter().flat_map(|b| b.iter()).any(|p| !p.is_finite()) {
        return Err(GeometryError::NonFinite);
    }

    window.begin_ppc();
    let mut t = alignment(window)?;
    t.translate(-cop);
    let m = t.matrix();
    for corner in window.ppc_mut() {
        *corner = m.apply(*corner);
    }
    for buffer in buffers.iter_mut() {
        for p in buffer.iter_mut() {
            let aligned = m.apply(*p);
            let depth = aligned.z.max(near);
            let w = depth / near;
            *p = Vec3::new(aligned.x / w, aligned.y / w, depth);
        }
    }
    window.set_ppc_vpn(Vec3::Z);
    Ok(())
}

/// The shared alignment step: translate by `-vrp`, rotate vpn onto +z.
fn alignment(window: &Window) -> Result<Transform3, GeometryError> {
    let mut t = Transform3::new();
    t.translate(-window.vrp());
    let vpn = window.vpn();
    let axis = vpn.cross(Vec3::Z);
    let angle = libm::atan2(axis.length(), vpn.dot(Vec3::Z));
    if axis.length() > 1e-12 {
        t.rotate(angle, axis)?;
    } else if vpn.dot(Vec3::Z) < 0.0 {
        // Looking straight backward: flip about the vertical axis.
        t.rotate(core::f64::consts::PI, Vec3::Y)?;
    }
    Ok(t)
}
