// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon clipping (Sutherland–Hodgman, rectangle variant).

use alloc::vec::Vec;

use panorama_geom::Vec3;

use crate::{ClipRect, LineClipper};

/// Clips a polygon's vertex ring against `rect`.
///
/// Walks edges in order (the ring closes from the last vertex back to the
/// first) and emits, per edge:
/// - the far endpoint, when both endpoints are inside;
/// - the boundary intersection(s), when the edge crosses the boundary;
/// - synthetic window-corner vertices, when both endpoints are outside in
///   different outside regions that straddle a corner without the edge
///   entering the window.
///
/// The corner reinsertion rule keeps the clipped boundary closed when a
/// polygon wraps around a window corner. It is a heuristic over the four
/// corner regions rather than an exhaustive geometric construction; a
/// polygon that winds tightly around several corners in one edge may still
/// produce a degenerate ring. An output consisting solely of synthetic
/// corners degenerates to empty.
#[must_use]
pub fn clip_polygon(points: &[Vec3], rect: &ClipRect) -> Vec<Vec3> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut synthetic = 0_usize;

    for (i, &p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        let p_inside = rect.contains(p);
        let q_inside = rect.contains(q);

        if p_inside && q_inside {
            out.push(q);
        } else if p_inside {
            // Exiting: keep the boundary crossing.
            if let Some([_, exit]) = LineClipper::LiangBarsky.clip_line(p, q, rect) {
                out.push(exit);
            }
        } else if q_inside {
            // Entering: keep the crossing, then the inside endpoint.
            if let Some([entry, _]) = LineClipper::LiangBarsky.clip_line(p, q, rect) {
                out.push(entry);
            }
            out.push(q);
        } else if let Some([entry, exit]) = LineClipper::LiangBarsky.clip_line(p, q, rect) {
            // Both outside but the edge cuts across the window.
            out.push(entry);
            out.push(exit);
        } else {
            synthetic += push_corners(p, q, rect, &mut out);
        }
    }

    if synthetic == out.len() {
        out.clear();
    }
    out
}

/// Emits the window corner(s) spanned by an edge whose endpoints sit in two
/// different outside regions. Returns how many corners were emitted.
fn push_corners(p: Vec3, q: Vec3, rect: &ClipRect, out: &mut Vec<Vec3>) -> usize {
    let (min, max) = (rect.min, rect.max);
    let mut emitted = 0;

    if (p.x < min.x && q.y < min.y) || (q.x < min.x && p.y < min.y) {
        out.push(Vec3::new(min.x, min.y, 0.0));
        emitted += 1;
    }
    if (p.x < min.x && q.y > max.y) || (q.x < min.x && p.y > max.y) {
        out.push(Vec3::new(min.x, max.y, 0.0));
        emitted += 1;
    }
    if (p.x > max.x && q.y > max.y) || (q.x > max.x && p.y > max.y) {
        out.push(Vec3::new(max.x, max.y, 0.0));
        emitted += 1;
    }
    if (p.x > max.x && q.y < min.y) || (q.x > max.x && p.y < min.y) {
        out.push(Vec3::new(max.x, min.y, 0.0));
        emitted += 1;
    }
    emitted
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::clip_polygon;
    use crate::ClipRect;
    use panorama_geom::Vec3;

    fn window() -> ClipRect {
        ClipRect::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(100.0, 100.0, 0.0))
    }

    fn v(x: f64, y: f64) -> Vec3 {
        Vec3::new(x, y, 0.0)
    }

    #[test]
    fn fully_inside_polygon_is_unchanged_up_to_rotation() {
        let poly = vec![v(10.0, 10.0), v(50.0, 10.0), v(30.0, 40.0)];
        let clipped = clip_polygon(&poly, &window());
        assert_eq!(clipped.len(), 3);
        for p in &poly {
            assert!(clipped.iter().any(|c| c.approx_eq(*p, 1e-9)));
        }
    }

    #[test]
    fn fully_outside_polygon_clips_to_empty() {
        // Entirely right of the window, y within range: no corner conditions
        // fire and every edge is invisible.
        let poly = vec![v(200.0, 10.0), v(300.0, 10.0), v(250.0, 90.0)];
        assert!(clip_polygon(&poly, &window()).is_empty());
    }

    #[test]
    fn crossing_polygon_gains_boundary_vertices() {
        // Square straddling the right boundary.
        let poly = vec![v(80.0, 20.0), v(120.0, 20.0), v(120.0, 60.0), v(80.0, 60.0)];
        let clipped = clip_polygon(&poly, &window());
        assert!(!clipped.is_empty());
        for p in &clipped {
            assert!(window().contains(*p));
        }
        assert!(clipped.iter().any(|p| (p.x - 100.0).abs() < 1e-9));
    }

    #[test]
    fn edge_wrapping_lower_left_corner_reinserts_it() {
        // Triangle around the lower-left corner; the edge from below-left
        // passes outside the corner without entering the window.
        let poly = vec![v(-30.0, 10.0), v(10.0, -30.0), v(60.0, 60.0)];
        let clipped = clip_polygon(&poly, &window());
        assert!(
            clipped.iter().any(|p| p.approx_eq(v(0.0, 0.0), 1e-9)),
            "expected the lower-left window corner to be reinserted"
        );
    }

    #[test]
    fn corner_reinsertion_covers_all_four_corners() {
        // One spike past each corner; each spike edge pair stays outside.
        let cases: [(Vec3, Vec3, Vec3); 4] = [
            (v(-20.0, 10.0), v(10.0, -20.0), v(0.0, 0.0)),
            (v(-20.0, 90.0), v(10.0, 120.0), v(0.0, 100.0)),
            (v(120.0, 90.0), v(90.0, 120.0), v(100.0, 100.0)),
            (v(120.0, 10.0), v(90.0, -20.0), v(100.0, 0.0)),
        ];
        for (a, b, corner) in cases {
            let poly = vec![a, b, v(50.0, 50.0)];
            let clipped = clip_polygon(&poly, &window());
            assert!(
                clipped.iter().any(|p| p.approx_eq(corner, 1e-9)),
                "corner {corner} missing from {clipped:?}"
            );
        }
    }

    #[test]
    fn all_synthetic_output_degenerates_to_empty() {
        // Diamond far outside that only triggers corner conditions.
        let poly = vec![v(-50.0, -10.0), v(-10.0, -50.0)];
        let clipped: Vec<Vec3> = clip_polygon(&poly, &window());
        assert!(clipped.is_empty());
    }
}
