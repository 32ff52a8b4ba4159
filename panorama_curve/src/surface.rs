// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bicubic B-spline surface tessellation.

use alloc::vec::Vec;

use panorama_geom::Vec3;

use crate::bspline::emit_segment;
use crate::{BSPLINE_BASIS, Resolution, TessellationError, delta_matrix};

type PatchMatrix = [[Vec3; 4]; 4];

/// Tessellates a uniform bicubic B-spline surface into a wireframe mesh.
///
/// Every 4×4 neighborhood of the control grid forms one patch. Per patch the
/// basis-transformed coefficient matrix is folded into a forward-difference
/// matrix, which is walked in both parametric directions: each of the
/// `steps` iso-`s` polylines is generated by the curve recurrence over `t`,
/// then the matrix rows are advanced by one forward-difference step in `s`
/// (and symmetrically for the transposed, iso-`t` family). Output is the
/// segment list of both families, covering `t, s ∈ [0, 1]` inclusive.
pub fn tessellate_bspline_surface(
    grid: &[Vec<Vec3>],
    resolution: Resolution,
) -> Result<Vec<[Vec3; 2]>, TessellationError> {
    let rows = grid.len();
    if rows < 4 {
        return Err(TessellationError::TooFewControlPoints {
            needed: 4,
            got: rows,
        });
    }
    let cols = grid[0].len();
    if grid.iter().any(|row| row.len() != cols) {
        return Err(TessellationError::RaggedGrid);
    }
    if cols < 4 {
        return Err(TessellationError::TooFewControlPoints {
            needed: 4,
            got: cols,
        });
    }

    let steps = resolution.steps();
    let fold = delta_matrix(1.0 / (steps as f64 - 1.0));

    let mut segments = Vec::new();
    for i in 0..=rows - 4 {
        for j in 0..=cols - 4 {
            let mut geometry = [[Vec3::ZERO; 4]; 4];
            for (r, row) in geometry.iter_mut().enumerate() {
                row.copy_from_slice(&grid[i + r][j..j + 4]);
            }

            let coefficients = sandwich(&BSPLINE_BASIS, &geometry, &BSPLINE_BASIS);
            let differences = sandwich(&fold, &coefficients, &fold);

            emit_family(differences, steps, &mut segments);
            emit_family(transpose(&differences), steps, &mut segments);
        }
    }

    Ok(segments)
}

/// Emits one iso-parameter polyline family: generate the current row's curve
/// with the `t` recurrence, then advance all rows one forward-difference
/// step in the other direction.
fn emit_family(mut d: PatchMatrix, steps: usize, segments: &mut Vec<[Vec3; 2]>) {
    let mut polyline = Vec::with_capacity(steps);
    for _ in 0..steps {
        polyline.clear();
        emit_segment(&d[0], steps, &mut polyline);
        for pair in polyline.windows(2) {
            segments.push([pair[0], pair[1]]);
        }

        for r in 0..3 {
            for c in 0..4 {
                let step = d[r + 1][c];
                d[r][c] += step;
            }
        }
    }
}

/// `a * g * aᵀ` with scalar `a` and pointwise `g`.
fn sandwich(a: &[[f64; 4]; 4], g: &PatchMatrix, b: &[[f64; 4]; 4]) -> PatchMatrix {
    // left = a * g
    let mut left = [[Vec3::ZERO; 4]; 4];
    for (i, row) in left.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..4).fold(Vec3::ZERO, |acc, k| acc + g[k][j] * a[i][k]);
        }
    }
    // out = left * bᵀ
    let mut out = [[Vec3::ZERO; 4]; 4];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..4).fold(Vec3::ZERO, |acc, k| acc + left[i][k] * b[j][k]);
        }
    }
    out
}

fn transpose(m: &PatchMatrix) -> PatchMatrix {
    let mut out = [[Vec3::ZERO; 4]; 4];
    for (i, row) in m.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            out[j][i] = cell;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::tessellate_bspline_surface;
    use crate::{Resolution, TessellationError};
    use panorama_geom::Vec3;

    /// A flat 4x4 grid lying in the z = 0 plane.
    fn flat_grid() -> Vec<Vec<Vec3>> {
        (0..4)
            .map(|r| {
                (0..4)
                    .map(|c| Vec3::new(c as f64 * 10.0, r as f64 * 10.0, 0.0))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn single_patch_emits_both_families() {
        let steps = 5;
        let segments =
            tessellate_bspline_surface(&flat_grid(), Resolution::for_surface(steps)).unwrap();
        // Two families of `steps` polylines, each with `steps - 1` segments.
        assert_eq!(segments.len(), 2 * steps * (steps - 1));
    }

    #[test]
    fn flat_grid_tessellates_flat() {
        let segments =
            tessellate_bspline_surface(&flat_grid(), Resolution::for_surface(4)).unwrap();
        for [a, b] in segments {
            assert!(a.z.abs() < 1e-9 && b.z.abs() < 1e-9);
        }
    }

    #[test]
    fn grid_shape_is_validated() {
        let mut ragged = flat_grid();
        ragged[2].pop();
        assert_eq!(
            tessellate_bspline_surface(&ragged, Resolution::for_surface(5)),
            Err(TessellationError::RaggedGrid)
        );

        let narrow: Vec<Vec<Vec3>> = vec![vec![Vec3::ZERO; 3]; 4];
        assert_eq!(
            tessellate_bspline_surface(&narrow, Resolution::for_surface(5)),
            Err(TessellationError::TooFewControlPoints { needed: 4, got: 3 })
        );
    }

    #[test]
    fn larger_grid_advances_the_patch_window() {
        // 5x4 grid -> two vertical patch positions.
        let mut grid = flat_grid();
        grid.push(
            (0..4)
                .map(|c| Vec3::new(c as f64 * 10.0, 40.0, 0.0))
                .collect(),
        );
        let steps = 3;
        let segments =
            tessellate_bspline_surface(&grid, Resolution::for_surface(steps)).unwrap();
        assert_eq!(segments.len(), 2 * 2 * steps * (steps - 1));
    }
}
