// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line clipping strategies.

use panorama_geom::Vec3;

use crate::{ClipRect, Outcode};

/// Runtime-selectable line clipping algorithm.
///
/// The editor can switch between the two algorithms live, so the choice is a
/// plain value threaded through each clip call rather than any shared state.
/// Both algorithms agree on fully-visible and fully-invisible segments; they
/// may differ in the least significant bits of computed intersections.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LineClipper {
    /// Parametric clipping (Liang–Barsky).
    #[default]
    LiangBarsky,
    /// Outcode-based iterative clipping (Cohen–Sutherland).
    CohenSutherland,
}

impl LineClipper {
    /// Clips the segment `a`–`b` against `rect`.
    ///
    /// Returns the visible sub-segment endpoints, or `None` when the segment
    /// lies entirely outside. Depth (`z`) is interpolated along the segment.
    #[must_use]
    pub fn clip_line(self, a: Vec3, b: Vec3, rect: &ClipRect) -> Option<[Vec3; 2]> {
        match self {
            Self::LiangBarsky => liang_barsky(a, b, rect),
            Self::CohenSutherland => cohen_sutherland(a, b, rect),
        }
    }
}

/// Liang–Barsky parametric line clipping.
///
/// The segment is `a + t·(b − a)` for `t ∈ [0, 1]`. Each window boundary
/// contributes a `(p, q)` pair; a boundary parallel to the segment with the
/// segment outside (`p == 0, q < 0`) rejects outright, otherwise the
/// boundary ratios shrink the admissible `t` range from whichever side the
/// segment crosses.
fn liang_barsky(a: Vec3, b: Vec3, rect: &ClipRect) -> Option<[Vec3; 2]> {
    let d = b - a;
    let p = [-d.x, d.x, -d.y, d.y];
    let q = [
        a.x - rect.min.x,
        rect.max.x - a.x,
        a.y - rect.min.y,
        rect.max.y - a.y,
    ];

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for k in 0..4 {
        if p[k] == 0.0 {
            if q[k] < 0.0 {
                return None;
            }
        } else {
            let r = q[k] / p[k];
            if p[k] < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
        }
    }
    if t0 > t1 {
        return None;
    }
    Some([a.lerp(b, t0), a.lerp(b, t1)])
}

/// Cohen–Sutherland iterative line clipping.
///
/// Trivial-accept when both outcodes are empty, trivial-reject when their
/// intersection is nonempty; otherwise the endpoint that is outside moves to
/// its intersection with the boundary named by the first set bit of its
/// outcode, and the loop re-classifies. Each iteration clears at least one
/// bit, so the loop runs at most four times.
fn cohen_sutherland(mut a: Vec3, mut b: Vec3, rect: &ClipRect) -> Option<[Vec3; 2]> {
    loop {
        let code_a = Outcode::of(a, rect);
        let code_b = Outcode::of(b, rect);

        if (code_a | code_b).is_empty() {
            return Some([a, b]);
        }
        if !(code_a & code_b).is_empty() {
            return None;
        }

        if code_a.is_empty() {
            b = intersect_boundary(a, b, code_b, rect);
        } else {
            a = intersect_boundary(a, b, code_a, rect);
        }
    }
}

/// Intersection of the infinite line through `a`–`b` with the boundary named
/// by the lowest set bit of `code`.
///
/// The divisions are safe: a `LEFT` bit can only be pending when the segment
/// crosses the left boundary, which requires `dx != 0` (and likewise for the
/// other bits).
fn intersect_boundary(a: Vec3, b: Vec3, code: Outcode, rect: &ClipRect) -> Vec3 {
    let d = b - a;
    if code.contains(Outcode::LEFT) {
        let t = (rect.min.x - a.x) / d.x;
        Vec3::new(rect.min.x, a.y + t * d.y, a.z + t * d.z)
    } else if code.contains(Outcode::RIGHT) {
        let t = (rect.max.x - a.x) / d.x;
        Vec3::new(rect.max.x, a.y + t * d.y, a.z + t * d.z)
    } else if code.contains(Outcode::BOTTOM) {
        let t = (rect.min.y - a.y) / d.y;
        Vec3::new(a.x + t * d.x, rect.min.y, a.z + t * d.z)
    } else {
        let t = (rect.max.y - a.y) / d.y;
        Vec3::new(a.x + t * d.x, rect.max.y, a.z + t * d.z)
    }
}

#[cfg(test)]
mod tests {
    use super::LineClipper;
    use crate::ClipRect;
    use panorama_geom::Vec3;

    const ALGORITHMS: [LineClipper; 2] = [LineClipper::LiangBarsky, LineClipper::CohenSutherland];

    fn window() -> ClipRect {
        ClipRect::new(Vec3::new(10.0, 10.0, 0.0), Vec3::new(590.0, 590.0, 0.0))
    }

    #[test]
    fn fully_inside_lines_pass_unmodified_in_both_algorithms() {
        let a = Vec3::new(100.0, 100.0, 0.0);
        let b = Vec3::new(500.0, 250.0, 0.0);
        for alg in ALGORITHMS {
            let clipped = alg.clip_line(a, b, &window()).unwrap();
            assert_eq!(clipped, [a, b]);
        }
    }

    #[test]
    fn shared_outcode_bit_rejects() {
        // Both endpoints right of the window.
        let a = Vec3::new(600.0, 100.0, 0.0);
        let b = Vec3::new(700.0, 500.0, 0.0);
        for alg in ALGORITHMS {
            assert_eq!(alg.clip_line(a, b, &window()), None);
        }
    }

    #[test]
    fn diagonal_entering_at_corner_region() {
        // Spec'd scenario: (0,0)-(100,100) against (10,10)-(590,590).
        let clipped = LineClipper::LiangBarsky
            .clip_line(Vec3::ZERO, Vec3::new(100.0, 100.0, 0.0), &window())
            .unwrap();
        assert!(clipped[0].approx_eq(Vec3::new(10.0, 10.0, 0.0), 1e-9));
        assert!(clipped[1].approx_eq(Vec3::new(100.0, 100.0, 0.0), 1e-9));
    }

    #[test]
    fn algorithms_agree_on_crossing_segments() {
        let a = Vec3::new(0.0, 300.0, 0.0);
        let b = Vec3::new(700.0, 350.0, 0.0);
        let lb = LineClipper::LiangBarsky.clip_line(a, b, &window()).unwrap();
        let cs = LineClipper::CohenSutherland
            .clip_line(a, b, &window())
            .unwrap();
        for (p, q) in lb.iter().zip(cs.iter()) {
            assert!(p.approx_eq(*q, 1e-9));
        }
    }

    #[test]
    fn vertical_segment_is_clipped_without_division_by_zero() {
        let a = Vec3::new(300.0, -50.0, 0.0);
        let b = Vec3::new(300.0, 650.0, 0.0);
        for alg in ALGORITHMS {
            let clipped = alg.clip_line(a, b, &window()).unwrap();
            assert!(clipped[0].approx_eq(Vec3::new(300.0, 10.0, 0.0), 1e-9));
            assert!(clipped[1].approx_eq(Vec3::new(300.0, 590.0, 0.0), 1e-9));
        }
    }

    #[test]
    fn segment_outside_parallel_to_boundary_rejects() {
        // Horizontal segment below the window: p == 0 with q < 0 on the
        // bottom boundary for Liang-Barsky.
        let a = Vec3::new(100.0, 0.0, 0.0);
        let b = Vec3::new(500.0, 0.0, 0.0);
        for alg in ALGORITHMS {
            assert_eq!(alg.clip_line(a, b, &window()), None);
        }
    }

    #[test]
    fn degenerate_point_segment_inside_is_kept() {
        let p = Vec3::new(50.0, 50.0, 0.0);
        for alg in ALGORITHMS {
            assert_eq!(alg.clip_line(p, p, &window()), Some([p, p]));
        }
    }

    #[test]
    fn depth_is_interpolated() {
        let a = Vec3::new(0.0, 300.0, 0.0);
        let b = Vec3::new(600.0, 300.0, 6.0);
        let clipped = LineClipper::LiangBarsky.clip_line(a, b, &window()).unwrap();
        assert!((clipped[0].z - 0.1).abs() < 1e-9);
        assert!((clipped[1].z - 5.9).abs() < 1e-9);
    }
}
