// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform cubic B-spline tessellation via forward differences.

use alloc::vec::Vec;

use panorama_geom::Vec3;

use crate::{BSPLINE_BASIS, Resolution, TessellationError, delta_matrix};

/// Tessellates a uniform cubic B-spline.
///
/// Every consecutive 4-point window of `control` contributes one segment of
/// `resolution.steps()` samples. Per segment, the basis-transformed cubic
/// coefficients are folded once into `[f(0), Δ, Δ², Δ³]`, and each further
/// sample costs two vector additions (the forward-difference recurrence)
/// instead of a polynomial evaluation.
pub fn tessellate_bspline(
    control: &[Vec3],
    resolution: Resolution,
) -> Result<Vec<Vec3>, TessellationError> {
    if control.len() < 4 {
        return Err(TessellationError::TooFewControlPoints {
            needed: 4,
            got: control.len(),
        });
    }

    let n = resolution.steps();
    let fold = delta_matrix(1.0 / n as f64);
    let mut samples = Vec::with_capacity((control.len() - 3) * n);

    for window in control.windows(4) {
        let coefficients = mat_vec(&BSPLINE_BASIS, window);
        let differences = mat_vec(&fold, &coefficients);
        emit_segment(&differences, n, &mut samples);
    }

    Ok(samples)
}

/// Walks the forward-difference recurrence, pushing `n` samples.
pub(crate) fn emit_segment(differences: &[Vec3; 4], n: usize, out: &mut Vec<Vec3>) {
    let [mut p, mut d1, mut d2, d3] = *differences;
    out.push(p);
    for _ in 1..n {
        p += d1;
        d1 += d2;
        d2 += d3;
        out.push(p);
    }
}

/// Multiplies a scalar 4×4 matrix by a vector of four points, componentwise
/// over x/y/z.
pub(crate) fn mat_vec(m: &[[f64; 4]; 4], g: &[Vec3]) -> [Vec3; 4] {
    let mut out = [Vec3::ZERO; 4];
    for (row, cell) in m.iter().zip(out.iter_mut()) {
        *cell = g[0] * row[0] + g[1] * row[1] + g[2] * row[2] + g[3] * row[3];
    }
    out
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{mat_vec, tessellate_bspline};
    use crate::{BSPLINE_BASIS, Resolution, TessellationError};
    use panorama_geom::Vec3;

    fn control() -> [Vec3; 6] {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 40.0, 0.0),
            Vec3::new(30.0, 40.0, 5.0),
            Vec3::new(40.0, 0.0, 5.0),
            Vec3::new(60.0, -40.0, 0.0),
            Vec3::new(70.0, 0.0, 0.0),
        ]
    }

    /// Direct cubic evaluation of one segment, for cross-checking the
    /// forward-difference recurrence.
    fn eval_direct(window: &[Vec3], t: f64) -> Vec3 {
        let c = mat_vec(&BSPLINE_BASIS, window);
        ((c[0] * t + c[1]) * t + c[2]) * t + c[3]
    }

    #[test]
    fn sample_count_is_segments_times_resolution() {
        let n = 10;
        let samples = tessellate_bspline(&control(), Resolution::for_curve(n)).unwrap();
        // 6 control points -> 3 overlapping 4-point windows.
        assert_eq!(samples.len(), 3 * n);
    }

    #[test]
    fn forward_differences_match_direct_evaluation() {
        let n = 50;
        let points = control();
        let samples = tessellate_bspline(&points, Resolution::for_curve(n)).unwrap();
        for (seg, window) in points.windows(4).enumerate() {
            for i in 0..n {
                let t = i as f64 / n as f64;
                let direct = eval_direct(window, t);
                assert!(
                    samples[seg * n + i].approx_eq(direct, 1e-6),
                    "segment {seg} sample {i} diverged from direct evaluation"
                );
            }
        }
    }

    #[test]
    fn too_few_control_points_is_rejected() {
        let three: Vec<Vec3> = control()[..3].to_vec();
        assert_eq!(
            tessellate_bspline(&three, Resolution::for_curve(10)),
            Err(TessellationError::TooFewControlPoints { needed: 4, got: 3 })
        );
    }

    #[test]
    fn tessellation_is_deterministic() {
        let a = tessellate_bspline(&control(), Resolution::for_curve(100)).unwrap();
        let b = tessellate_bspline(&control(), Resolution::for_curve(100)).unwrap();
        assert_eq!(a, b);
    }
}
