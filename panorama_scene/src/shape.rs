// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shape variant and its origin/working point buffers.

use alloc::string::String;
use alloc::vec::Vec;

use panorama_curve::{
    Resolution, TessellationError, tessellate_bezier, tessellate_bspline,
    tessellate_bspline_surface,
};
use panorama_geom::Vec3;
use peniko::Color;

/// What a shape's point list means and how it reaches the screen.
///
/// One tag per primitive kind; dispatch in the pipeline is a `match` on this
/// tag (clip algorithm, tessellation, draw primitive) rather than any
/// override chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    /// A single point, drawn as a small disc.
    Point,
    /// A two-point line segment.
    Line,
    /// An N-point polygon ring, stroked or filled.
    Wireframe {
        /// Whether the polygon is drawn filled.
        filled: bool,
    },
    /// A cubic Bézier chain over the origin control points.
    Bezier {
        /// Samples per curve segment.
        resolution: Resolution,
    },
    /// A uniform cubic B-spline over the origin control points.
    BSpline {
        /// Samples per curve segment.
        resolution: Resolution,
    },
    /// A bicubic B-spline surface over a control grid.
    BSplineSurface {
        /// Columns of the control grid (origin points are row-major).
        cols: usize,
        /// Steps per parametric direction.
        resolution: Resolution,
    },
}

/// A displayable shape.
///
/// The origin points are authoritative geometry, owned exclusively by this
/// shape and only edited by the owner (user transforms, file load). The
/// working copy is derived data, rebuilt from origin each frame the shape is
/// dirty and then consumed by projection/canonicalization/clipping in place.
#[derive(Clone, Debug)]
pub struct Shape {
    name: String,
    color: Color,
    kind: ShapeKind,
    origin: Vec<Vec3>,
    working: Vec<Vec3>,
    dirty: bool,
}

impl Shape {
    /// Creates a shape from already-validated parts.
    ///
    /// Intake validation lives in [`crate::ShapeSpec::build`]; this
    /// constructor trusts its caller on point counts.
    pub(crate) fn from_parts(name: String, color: Color, kind: ShapeKind, origin: Vec<Vec3>) -> Self {
        Self {
            name,
            color,
            kind,
            origin,
            working: Vec::new(),
            dirty: true,
        }
    }

    /// The shape's unique name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shape's color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The variant tag.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The authoritative origin points (control points for curves and
    /// surfaces, vertices otherwise).
    #[must_use]
    pub fn origin_points(&self) -> &[Vec3] {
        &self.origin
    }

    /// Whether the working copy must be recomputed before the next draw.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the working copy stale.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clears the dirty flag; called by the redraw loop after emission.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Edits the origin points in place and marks the shape dirty.
    ///
    /// This is the entry point for user transformations (rotate/scale/
    /// translate a selected shape): the edit targets origin geometry, never
    /// the working copy.
    pub fn edit_origin(&mut self, edit: impl FnOnce(&mut [Vec3])) {
        edit(&mut self.origin);
        self.dirty = true;
    }

    /// Rebuilds the working copy from the origin points.
    ///
    /// Plain shapes copy their vertices; curves and surfaces tessellate
    /// their control points. For surfaces the working buffer holds the mesh
    /// segment endpoints pairwise (`2k` points = `k` segments).
    pub fn refresh_working(&mut self) -> Result<(), TessellationError> {
        match self.kind {
            ShapeKind::Point | ShapeKind::Line | ShapeKind::Wireframe { .. } => {
                self.working.clear();
                self.working.extend_from_slice(&self.origin);
            }
            ShapeKind::Bezier { resolution } => {
                self.working = tessellate_bezier(&self.origin, resolution)?;
            }
            ShapeKind::BSpline { resolution } => {
                self.working = tessellate_bspline(&self.origin, resolution)?;
            }
            ShapeKind::BSplineSurface { cols, resolution } => {
                let grid: Vec<Vec<Vec3>> =
                    self.origin.chunks(cols).map(|row| row.to_vec()).collect();
                let segments = tessellate_bspline_surface(&grid, resolution)?;
                self.working.clear();
                self.working.reserve(segments.len() * 2);
                for [a, b] in segments {
                    self.working.push(a);
                    self.working.push(b);
                }
            }
        }
        Ok(())
    }

    /// The current working copy.
    #[must_use]
    pub fn working_points(&self) -> &[Vec3] {
        &self.working
    }

    /// Mutable access to the working copy, for the projection and
    /// canonicalization passes.
    pub fn working_points_mut(&mut self) -> &mut [Vec3] {
        &mut self.working
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::{Shape, ShapeKind};
    use panorama_curve::Resolution;
    use panorama_geom::Vec3;
    use peniko::Color;

    fn line() -> Shape {
        Shape::from_parts(
            "l".to_string(),
            Color::WHITE,
            ShapeKind::Line,
            vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)],
        )
    }

    #[test]
    fn new_shapes_start_dirty_with_empty_working_copy() {
        let shape = line();
        assert!(shape.is_dirty());
        assert!(shape.working_points().is_empty());
    }

    #[test]
    fn refresh_copies_vertices_for_plain_shapes() {
        let mut shape = line();
        shape.refresh_working().unwrap();
        assert_eq!(shape.working_points(), shape.origin_points());
    }

    #[test]
    fn refresh_never_touches_origin_points() {
        let mut shape = Shape::from_parts(
            "c".to_string(),
            Color::WHITE,
            ShapeKind::Bezier {
                resolution: Resolution::for_curve(10),
            },
            vec![
                Vec3::ZERO,
                Vec3::new(1.0, 2.0, 0.0),
                Vec3::new(2.0, 2.0, 0.0),
                Vec3::new(3.0, 0.0, 0.0),
            ],
        );
        let before = shape.origin_points().to_vec();
        shape.refresh_working().unwrap();
        // Working copy is the tessellation; origin is untouched.
        assert_eq!(shape.working_points().len(), 10);
        assert_eq!(shape.origin_points(), &before[..]);
    }

    #[test]
    fn edit_origin_marks_dirty() {
        let mut shape = line();
        shape.clear_dirty();
        shape.edit_origin(|points| points[0].x += 1.0);
        assert!(shape.is_dirty());
        assert_eq!(shape.origin_points()[0], Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn surface_working_copy_holds_segment_pairs() {
        let grid: alloc::vec::Vec<Vec3> = (0..16)
            .map(|i| Vec3::new((i % 4) as f64, (i / 4) as f64, 0.0))
            .collect();
        let mut shape = Shape::from_parts(
            "s".to_string(),
            Color::WHITE,
            ShapeKind::BSplineSurface {
                cols: 4,
                resolution: Resolution::for_surface(3),
            },
            grid,
        );
        shape.refresh_working().unwrap();
        assert!(!shape.working_points().is_empty());
        assert_eq!(shape.working_points().len() % 2, 0);
    }
}
