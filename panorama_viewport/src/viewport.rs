// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical-to-device coordinate mapping.

use kurbo::{Point, Rect};
use panorama_geom::Vec3;

/// Maps canonical-frame points onto a device pixel rectangle.
///
/// The vertical axis flips: canonical "up" is increasing y, device "down"
/// is increasing y. The effective window bounds are inflated by
/// [`Viewport::margin`] plus the window's accumulated shrink-zoom travel,
/// which compensates the magnification drift the projections introduce and
/// keeps geometry near the border from touching the device edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Target pixel rectangle.
    pub device_rect: Rect,
    /// Base inflation of the effective window bounds, in window units.
    pub margin: f64,
}

impl Viewport {
    /// Default margin, matching a device border of a few pixels.
    pub const DEFAULT_MARGIN: f64 = 10.0;

    /// Creates a viewport over `device_rect` with the default margin.
    #[must_use]
    pub fn new(device_rect: Rect) -> Self {
        Self {
            device_rect,
            margin: Self::DEFAULT_MARGIN,
        }
    }

    /// Remaps `p` from the window bounds to device pixels.
    ///
    /// `zoom_offset` is the window's accumulated shrink travel; growth zooms
    /// contribute nothing, so the inflation never collapses the effective
    /// bounds.
    #[must_use]
    pub fn map_to_device(&self, win_min: Vec3, win_max: Vec3, zoom_offset: f64, p: Vec3) -> Point {
        let inflate = self.margin + zoom_offset.max(0.0);
        let min_x = win_min.x - inflate;
        let min_y = win_min.y - inflate;
        let max_x = win_max.x + inflate;
        let max_y = win_max.y + inflate;

        let u = (p.x - min_x) / (max_x - min_x);
        let v = (p.y - min_y) / (max_y - min_y);
        Point::new(
            self.device_rect.x0 + u * self.device_rect.width(),
            self.device_rect.y0 + (1.0 - v) * self.device_rect.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Viewport;
    use kurbo::Rect;
    use panorama_geom::Vec3;

    fn viewport() -> Viewport {
        let mut v = Viewport::new(Rect::new(0.0, 0.0, 600.0, 600.0));
        v.margin = 0.0;
        v
    }

    #[test]
    fn maps_window_corners_to_device_corners() {
        let v = viewport();
        let min = Vec3::new(-100.0, -100.0, 0.0);
        let max = Vec3::new(100.0, 100.0, 0.0);

        let p = v.map_to_device(min, max, 0.0, min);
        assert!((p.x - 0.0).abs() < 1e-9);
        // y flips: the window's bottom edge is the device's bottom row.
        assert!((p.y - 600.0).abs() < 1e-9);

        let p = v.map_to_device(min, max, 0.0, max);
        assert!((p.x - 600.0).abs() < 1e-9);
        assert!((p.y - 0.0).abs() < 1e-9);

        let p = v.map_to_device(min, max, 0.0, Vec3::ZERO);
        assert!((p.x - 300.0).abs() < 1e-9);
        assert!((p.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn margin_inflates_the_effective_bounds() {
        let mut v = viewport();
        v.margin = 100.0;
        let min = Vec3::new(-100.0, -100.0, 0.0);
        let max = Vec3::new(100.0, 100.0, 0.0);
        // The window's own min corner is now a quarter of the way in.
        let p = v.map_to_device(min, max, 0.0, min);
        assert!((p.x - 150.0).abs() < 1e-9);
        assert!((p.y - 450.0).abs() < 1e-9);
    }

    #[test]
    fn growth_zoom_contributes_no_inflation() {
        let mut v = viewport();
        v.margin = 10.0;
        let min = Vec3::new(0.0, 0.0, 0.0);
        let max = Vec3::new(100.0, 100.0, 0.0);
        let grown = v.map_to_device(min, max, -500.0, Vec3::new(50.0, 50.0, 0.0));
        let flat = v.map_to_device(min, max, 0.0, Vec3::new(50.0, 50.0, 0.0));
        assert_eq!(grown, flat);
    }
}
