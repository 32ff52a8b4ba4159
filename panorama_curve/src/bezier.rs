// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier tessellation.

use alloc::vec::Vec;

use panorama_geom::Vec3;

use crate::{Resolution, TessellationError};

/// Tessellates a chain of cubic Bézier segments.
///
/// `control` holds `4 + 3k` points: each segment consumes four, and each
/// join shares one endpoint with the next segment. Every segment is sampled
/// exactly `resolution.steps()` times at `t = i / n` for `i` in `0..n`, so a
/// segment's first sample is its first control point and its `t = 1` point
/// is supplied by the next segment's `t = 0` sample.
pub fn tessellate_bezier(
    control: &[Vec3],
    resolution: Resolution,
) -> Result<Vec<Vec3>, TessellationError> {
    if control.len() < 4 {
        return Err(TessellationError::TooFewControlPoints {
            needed: 4,
            got: control.len(),
        });
    }
    if (control.len() - 4) % 3 != 0 {
        return Err(TessellationError::UnalignedControlCount {
            got: control.len(),
        });
    }

    let n = resolution.steps();
    let mut samples = Vec::with_capacity((control.len() - 1) / 3 * n);

    for group in control.windows(4).step_by(3) {
        let [p1, p2, p3, p4] = [group[0], group[1], group[2], group[3]];
        for i in 0..n {
            let t = i as f64 / n as f64;
            let u = 1.0 - t;
            let h1 = u * u * u;
            let h2 = 3.0 * u * u * t;
            let h3 = 3.0 * u * t * t;
            let h4 = t * t * t;
            samples.push(p1 * h1 + p2 * h2 + p3 * h3 + p4 * h4);
        }
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::tessellate_bezier;
    use crate::{Resolution, TessellationError};
    use panorama_geom::Vec3;

    fn quad() -> [Vec3; 4] {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 30.0, 0.0),
            Vec3::new(20.0, 30.0, 0.0),
            Vec3::new(30.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn single_segment_sample_count_and_first_point() {
        let control = quad();
        let samples = tessellate_bezier(&control, Resolution::for_curve(10)).unwrap();
        assert_eq!(samples.len(), 10);
        assert_eq!(samples[0], control[0]);
    }

    #[test]
    fn tessellation_is_deterministic() {
        let control = quad();
        let a = tessellate_bezier(&control, Resolution::for_curve(64)).unwrap();
        let b = tessellate_bezier(&control, Resolution::for_curve(64)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn chained_segments_share_joins() {
        let control = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(4.0, -2.0, 0.0),
            Vec3::new(5.0, -2.0, 0.0),
            Vec3::new(6.0, 0.0, 0.0),
        ];
        let n = 10;
        let samples = tessellate_bezier(&control, Resolution::for_curve(n)).unwrap();
        assert_eq!(samples.len(), 2 * n);
        // The second segment starts at the shared join point.
        assert!(samples[n].approx_eq(control[3], 1e-12));
    }

    #[test]
    fn control_count_is_validated() {
        assert_eq!(
            tessellate_bezier(&quad()[..3], Resolution::for_curve(10)),
            Err(TessellationError::TooFewControlPoints { needed: 4, got: 3 })
        );
        let five = [Vec3::ZERO; 5];
        assert_eq!(
            tessellate_bezier(&five, Resolution::for_curve(10)),
            Err(TessellationError::UnalignedControlCount { got: 5 })
        );
    }

    #[test]
    fn curve_stays_in_control_hull() {
        let samples = tessellate_bezier(&quad(), Resolution::for_curve(100)).unwrap();
        for p in samples {
            assert!((0.0..=30.0).contains(&p.x));
            assert!((0.0..=30.0).contains(&p.y));
        }
    }
}
