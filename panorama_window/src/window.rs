// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The oriented view volume.

use panorama_geom::{GeometryError, Transform3, Vec3, centroid};

/// Minimum width/height of the view volume. Zoom requests that would shrink
/// either extent below this are rejected as no-ops, which also keeps the
/// corner rectangle non-degenerate for axis derivation.
pub const MIN_EXTENT: f64 = 10.0;

/// Pan direction, relative to the window's own orientation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PanDirection {
    /// Along the negative local horizontal axis.
    Left,
    /// Along the positive local horizontal axis.
    Right,
    /// Along the positive local vertical axis.
    Up,
    /// Along the negative local vertical axis.
    Down,
    /// Along the view-plane normal.
    Forward,
    /// Against the view-plane normal.
    Back,
}

/// Zoom direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Shrink the window (magnify the scene).
    In,
    /// Grow the window (shrink the scene).
    Out,
}

/// Rotation axis selector for [`Window::rotate`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WindowAxis {
    /// The window's local horizontal axis.
    Horizontal,
    /// The window's local vertical axis.
    Vertical,
    /// The view-plane normal.
    Normal,
    /// A caller-supplied axis; normalized before use.
    Arbitrary(Vec3),
}

/// The observer-defined view volume.
///
/// Four corners in fixed winding order (min, min + dx, max, min + dy) form a
/// rectangle in the window's local frame regardless of world orientation.
/// The view-reference-point (`vrp`) is the corner centroid and the
/// view-plane normal (`vpn`) is the unit normal of the corner plane,
/// oriented toward positive depth at construction.
///
/// Alongside the owner-edited corners the window keeps a working ("ppc")
/// copy. Projection rebuilds the ppc corners from the originals each frame
/// and [`Window::canonicalize`] refines them in place together with every
/// dirty shape's working buffer. The ppc extents feed the clip rectangle.
#[derive(Clone, Debug)]
pub struct Window {
    corners: [Vec3; 4],
    og_corners: [Vec3; 4],
    ppc: [Vec3; 4],
    vrp: Vec3,
    vpn: Vec3,
    ppc_vpn: Vec3,
    zoom_offset: f64,
}

impl Window {
    /// Creates an axis-aligned window spanning `min`..`max` in the plane of
    /// those two points.
    ///
    /// Fails with [`GeometryError::NonFinite`] on non-finite input and
    /// [`GeometryError::DegenerateAxis`] when either extent is below
    /// [`MIN_EXTENT`].
    pub fn new(min: Vec3, max: Vec3) -> Result<Self, GeometryError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        if max.x - min.x < MIN_EXTENT || max.y - min.y < MIN_EXTENT {
            return Err(GeometryError::DegenerateAxis);
        }
        let corners = [
            min,
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(min.x, max.y, max.z),
        ];
        let vrp = centroid(&corners)?;
        let vpn = Self::normal_of(&corners)?;
        Ok(Self {
            corners,
            og_corners: corners,
            ppc: corners,
            vrp,
            vpn,
            ppc_vpn: vpn,
            zoom_offset: 0.0,
        })
    }

    /// The owner-edited corners, in winding order.
    #[must_use]
    pub fn corners(&self) -> &[Vec3; 4] {
        &self.corners
    }

    /// The view-reference-point (corner centroid).
    #[must_use]
    pub fn vrp(&self) -> Vec3 {
        self.vrp
    }

    /// The view-plane normal (unit).
    #[must_use]
    pub fn vpn(&self) -> Vec3 {
        self.vpn
    }

    /// Accumulated zoom travel, fed to the viewport margin compensation.
    #[must_use]
    pub fn zoom_offset(&self) -> f64 {
        self.zoom_offset
    }

    /// Componentwise minimum of the ppc corners.
    #[must_use]
    pub fn ppc_min(&self) -> Vec3 {
        self.ppc.iter().skip(1).fold(self.ppc[0], |acc, c| {
            Vec3::new(acc.x.min(c.x), acc.y.min(c.y), acc.z.min(c.z))
        })
    }

    /// Componentwise maximum of the ppc corners.
    #[must_use]
    pub fn ppc_max(&self) -> Vec3 {
        self.ppc.iter().skip(1).fold(self.ppc[0], |acc, c| {
            Vec3::new(acc.x.max(c.x), acc.y.max(c.y), acc.z.max(c.z))
        })
    }

    /// Translates the whole window along one of its own axes.
    ///
    /// Directions are relative to the window's current orientation, so after
    /// a rotation "left" still moves along the (rotated) horizontal edge.
    pub fn pan(&mut self, direction: PanDirection, step: f64) {
        let (right, up) = self.local_axes();
        let offset = match direction {
            PanDirection::Left => -right * step,
            PanDirection::Right => right * step,
            PanDirection::Up => up * step,
            PanDirection::Down => -up * step,
            PanDirection::Forward => self.vpn * step,
            PanDirection::Back => -self.vpn * step,
        };
        for corner in &mut self.corners {
            *corner += offset;
        }
        self.vrp += offset;
    }

    /// Shrinks or grows the window symmetrically about its center.
    ///
    /// Each extent changes by `step` in total (every corner moves `step / 2`
    /// along both local axes). Returns `false` and leaves the window
    /// untouched when a shrink would push either extent below
    /// [`MIN_EXTENT`].
    pub fn zoom(&mut self, direction: ZoomDirection, step: f64) -> bool {
        let (right, up) = self.local_axes();
        let width = (self.corners[1] - self.corners[0]).length();
        let height = (self.corners[3] - self.corners[0]).length();
        let signed = match direction {
            ZoomDirection::In => step,
            ZoomDirection::Out => -step,
        };
        if width - signed < MIN_EXTENT || height - signed < MIN_EXTENT {
            return false;
        }

        let half = signed / 2.0;
        self.corners[0] += (right + up) * half;
        self.corners[1] += (-right + up) * half;
        self.corners[2] += (-right - up) * half;
        self.corners[3] += (right - up) * half;
        self.zoom_offset += signed;
        true
    }

    /// Rotates the window about its centroid.
    ///
    /// Corners, vrp, and vpn turn together, so the rectangle invariant and
    /// the normal's orientation relative to the corners are preserved.
    pub fn rotate(&mut self, angle: f64, axis: WindowAxis) -> Result<(), GeometryError> {
        let (right, up) = self.local_axes();
        let axis = match axis {
            WindowAxis::Horizontal => right,
            WindowAxis::Vertical => up,
            WindowAxis::Normal => self.vpn,
            WindowAxis::Arbitrary(v) => v.normalize()?,
        };

        let mut t = Transform3::new();
        t.rotate_about(angle, axis, self.vrp)?;
        t.apply(&mut self.corners);

        let mut r = Transform3::new();
        r.rotate(angle, axis)?;
        let mut normal = [self.vpn];
        r.apply(&mut normal);
        self.vpn = normal[0].normalize()?;
        Ok(())
    }

    /// Restores the construction-time corners and clears the zoom offset.
    pub fn reset(&mut self) -> Result<(), GeometryError> {
        self.corners = self.og_corners;
        self.ppc = self.og_corners;
        self.vrp = centroid(&self.corners)?;
        self.vpn = Self::normal_of(&self.corners)?;
        self.ppc_vpn = self.vpn;
        self.zoom_offset = 0.0;
        Ok(())
    }

    /// Moves the ppc frame so the window centroid sits at the origin and the
    /// local vertical edge points along +y.
    ///
    /// One composed translate-then-rotate is applied jointly to the ppc
    /// corners and every supplied buffer, preserving relative geometry
    /// exactly. The rotation is about the ppc view normal, so depth is
    /// untouched. Canonicalizing an already-canonical frame is a no-op up to
    /// floating-point tolerance.
    pub fn canonicalize(&mut self, buffers: &mut [&mut [Vec3]]) -> Result<(), GeometryError> {
        if self.ppc.iter().any(|c| !c.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        let center = centroid(&self.ppc)?;
        let up = (self.ppc[3] - self.ppc[0]).normalize()?;
        let normal = self.ppc_vpn;
        // Signed angle from `up` to +y about the view normal.
        let angle = libm::atan2(up.cross(Vec3::Y).dot(normal), up.dot(Vec3::Y));

        let mut t = Transform3::new();
        t.translate(-center);
        t.rotate(angle, normal)?;
        // One composed matrix over window corners and shape buffers alike.
        let m = t.matrix();
        for corner in &mut self.ppc {
            *corner = m.apply(*corner);
        }
        for buffer in buffers {
            for p in buffer.iter_mut() {
                *p = m.apply(*p);
            }
        }
        Ok(())
    }

    /// Resets the ppc corners from the owner-edited corners for a new frame.
    pub(crate) fn begin_ppc(&mut self) {
        self.ppc = self.corners;
        self.ppc_vpn = self.vpn;
    }

    pub(crate) fn ppc_mut(&mut self) -> &mut [Vec3; 4] {
        &mut self.ppc
    }

    pub(crate) fn set_ppc_vpn(&mut self, vpn: Vec3) {
        self.ppc_vpn = vpn;
    }

    /// Snapshot of the window state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> WindowDebugInfo {
        WindowDebugInfo {
            corners: self.corners,
            ppc_corners: self.ppc,
            vrp: self.vrp,
            vpn: self.vpn,
            zoom_offset: self.zoom_offset,
        }
    }

    /// Unit horizontal and vertical axes from the corner geometry.
    ///
    /// Edge lengths are at least [`MIN_EXTENT`] (enforced by construction
    /// and zoom), so the divisions are safe.
    fn local_axes(&self) -> (Vec3, Vec3) {
        let dx = self.corners[1] - self.corners[0];
        let dy = self.corners[3] - self.corners[0];
        (dx / dx.length(), dy / dy.length())
    }

    fn normal_of(corners: &[Vec3; 4]) -> Result<Vec3, GeometryError> {
        let normal = (corners[1] - corners[0]).cross(corners[3] - corners[0]);
        let normal = normal.normalize()?;
        // Orient toward positive depth.
        if normal.z < 0.0 { Ok(-normal) } else { Ok(normal) }
    }
}

/// Debug snapshot of a [`Window`] state.
#[derive(Copy, Clone, Debug)]
pub struct WindowDebugInfo {
    /// Owner-edited corners, in winding order.
    pub corners: [Vec3; 4],
    /// Current canonical working corners.
    pub ppc_corners: [Vec3; 4],
    /// View-reference-point.
    pub vrp: Vec3,
    /// View-plane normal.
    pub vpn: Vec3,
    /// Accumulated zoom travel.
    pub zoom_offset: f64,
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use super::{PanDirection, Window, WindowAxis, ZoomDirection};
    use panorama_geom::{GeometryError, Vec3};

    fn window() -> Window {
        Window::new(Vec3::new(10.0, 10.0, 0.0), Vec3::new(590.0, 590.0, 0.0)).unwrap()
    }

    #[test]
    fn construction_derives_vrp_and_vpn() {
        let w = window();
        assert!(w.vrp().approx_eq(Vec3::new(300.0, 300.0, 0.0), 1e-12));
        assert!(w.vpn().approx_eq(Vec3::Z, 1e-12));
    }

    #[test]
    fn degenerate_extent_is_rejected() {
        assert_eq!(
            Window::new(Vec3::ZERO, Vec3::new(5.0, 100.0, 0.0)).err(),
            Some(GeometryError::DegenerateAxis)
        );
    }

    #[test]
    fn shrink_zoom_honors_the_minimum_extent() {
        let mut w = window();
        assert!(w.zoom(ZoomDirection::In, 300.0));
        let width = (w.corners()[1] - w.corners()[0]).length();
        assert!((width - 280.0).abs() < 1e-9);

        // A second shrink of the same size would go below the floor.
        let before = *w.corners();
        assert!(!w.zoom(ZoomDirection::In, 300.0));
        assert_eq!(*w.corners(), before);
        assert!((w.zoom_offset() - 300.0).abs() < 1e-12);
    }

    #[test]
    fn grow_zoom_is_unbounded_and_symmetric() {
        let mut w = window();
        assert!(w.zoom(ZoomDirection::Out, 100.0));
        assert!(w.corners()[0].approx_eq(Vec3::new(-40.0, -40.0, 0.0), 1e-9));
        assert!(w.corners()[2].approx_eq(Vec3::new(640.0, 640.0, 0.0), 1e-9));
        assert!(w.vrp().approx_eq(Vec3::new(300.0, 300.0, 0.0), 1e-12));
    }

    #[test]
    fn full_turn_restores_the_corners() {
        let mut w = window();
        let before = *w.corners();
        for _ in 0..4 {
            w.rotate(FRAC_PI_2, WindowAxis::Normal).unwrap();
        }
        for (a, b) in w.corners().iter().zip(&before) {
            assert!(a.approx_eq(*b, 1e-4));
        }
    }

    #[test]
    fn pan_follows_the_rotated_frame() {
        let mut w = window();
        // Quarter turn about the normal: local "right" becomes world +y.
        w.rotate(FRAC_PI_2, WindowAxis::Normal).unwrap();
        let before_vrp = w.vrp();
        w.pan(PanDirection::Right, 50.0);
        assert!(w.vrp().approx_eq(before_vrp + Vec3::new(0.0, 50.0, 0.0), 1e-9));
    }

    #[test]
    fn rotation_about_vertical_axis_moves_the_normal() {
        let mut w = window();
        w.rotate(PI, WindowAxis::Vertical).unwrap();
        assert!(w.vpn().approx_eq(-Vec3::Z, 1e-9));
    }

    #[test]
    fn reset_restores_construction_state() {
        let mut w = window();
        w.pan(PanDirection::Up, 100.0);
        w.rotate(1.0, WindowAxis::Normal).unwrap();
        w.zoom(ZoomDirection::In, 40.0);
        w.reset().unwrap();
        assert_eq!(*w.corners(), *window().corners());
        assert_eq!(w.zoom_offset(), 0.0);
        assert!(w.vpn().approx_eq(Vec3::Z, 1e-12));
    }

    #[test]
    fn canonicalize_centers_the_window_and_aligns_up() {
        let mut w = window();
        w.rotate(0.7, WindowAxis::Normal).unwrap();
        w.begin_ppc();
        w.canonicalize(&mut []).unwrap();

        let min = w.ppc_min();
        let max = w.ppc_max();
        assert!((min.x + max.x).abs() < 1e-9);
        assert!((min.y + max.y).abs() < 1e-9);
        // Up realigned: the rectangle is axis-aligned again.
        assert!((max.x - min.x - 580.0).abs() < 1e-9);
        assert!((max.y - min.y - 580.0).abs() < 1e-9);
    }

    #[test]
    fn canonicalize_is_idempotent() {
        let mut w = window();
        w.rotate(0.3, WindowAxis::Normal).unwrap();
        w.begin_ppc();
        w.canonicalize(&mut []).unwrap();
        let first = w.debug_info().ppc_corners;
        w.canonicalize(&mut []).unwrap();
        for (a, b) in w.debug_info().ppc_corners.iter().zip(&first) {
            assert!(a.approx_eq(*b, 1e-6));
        }
    }

    #[test]
    fn canonicalize_moves_shapes_with_the_window() {
        let mut w = window();
        let mut shape = [w.vrp() + Vec3::new(5.0, 7.0, 0.0)];
        w.begin_ppc();
        w.canonicalize(&mut [&mut shape]).unwrap();
        // A point at a fixed offset from the centroid keeps that offset.
        assert!(shape[0].approx_eq(Vec3::new(5.0, 7.0, 0.0), 1e-9));
    }
}
