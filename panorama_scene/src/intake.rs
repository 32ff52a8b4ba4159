// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated shape intake from the editor.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use panorama_curve::{Resolution, TessellationError};
use panorama_geom::Vec3;
use peniko::Color;

use crate::{Shape, ShapeKind};

/// Error validating a [`ShapeSpec`].
///
/// A failed build leaves no trace: nothing is added anywhere and the caller
/// reports the failure next to the triggering control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntakeError {
    /// The display name is empty.
    EmptyName,
    /// The payload's point count does not fit the declared kind.
    WrongPointCount {
        /// What the kind requires, e.g. "exactly 2".
        expected: &'static str,
        /// What the payload carried.
        got: usize,
    },
    /// A coordinate is NaN or infinite.
    NonFinitePoint,
    /// Control points that cannot be tessellated.
    Tessellation(TessellationError),
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "shape name must not be empty"),
            Self::WrongPointCount { expected, got } => {
                write!(f, "expected {expected} points, got {got}")
            }
            Self::NonFinitePoint => write!(f, "shape contains a NaN or infinite coordinate"),
            Self::Tessellation(err) => write!(f, "invalid control points: {err}"),
        }
    }
}

impl core::error::Error for IntakeError {}

impl From<TessellationError> for IntakeError {
    fn from(err: TessellationError) -> Self {
        Self::Tessellation(err)
    }
}

/// Geometry payload of a shape-intake command.
///
/// Mirrors the editor's entry forms: a type tag plus a point list (or a
/// control grid for surfaces) and, for parametric shapes, a tessellation
/// resolution. Resolutions are clamped, not rejected.
#[derive(Clone, Debug)]
pub enum ShapeData {
    /// A single point.
    Point(Vec3),
    /// A two-point line.
    Line([Vec3; 2]),
    /// A polygon ring.
    Wireframe {
        /// Ring vertices in order.
        points: Vec<Vec3>,
        /// Whether to fill the polygon.
        filled: bool,
    },
    /// A cubic Bézier chain.
    Bezier {
        /// `4 + 3k` control points.
        control: Vec<Vec3>,
        /// Requested samples per segment.
        points_per_segment: usize,
    },
    /// A uniform cubic B-spline.
    BSpline {
        /// At least 4 control points.
        control: Vec<Vec3>,
        /// Requested samples per segment.
        points_per_segment: usize,
    },
    /// A bicubic B-spline surface.
    BSplineSurface {
        /// Control grid rows (each at least 4 long, all equal).
        control: Vec<Vec<Vec3>>,
        /// Requested steps per parametric direction.
        steps: usize,
    },
}

/// A complete shape-intake command.
#[derive(Clone, Debug)]
pub struct ShapeSpec {
    /// Display name; must be unique in the display file (the caller
    /// resolves collisions by suffixing).
    pub name: String,
    /// Draw color.
    pub color: Color,
    /// Geometry payload.
    pub data: ShapeData,
}

impl ShapeSpec {
    /// Validates the payload and produces a shape.
    ///
    /// The returned shape is dirty and its working copy empty; the first
    /// redraw computes it. Curve and surface control points are checked by
    /// running their tessellation validation up front so a malformed payload
    /// is reported at intake time, not at draw time.
    pub fn build(self) -> Result<Shape, IntakeError> {
        if self.name.is_empty() {
            return Err(IntakeError::EmptyName);
        }

        let (kind, origin) = match self.data {
            ShapeData::Point(p) => (ShapeKind::Point, alloc::vec![p]),
            ShapeData::Line(points) => (ShapeKind::Line, points.to_vec()),
            ShapeData::Wireframe { points, filled } => {
                if points.len() < 3 {
                    return Err(IntakeError::WrongPointCount {
                        expected: "at least 3",
                        got: points.len(),
                    });
                }
                (ShapeKind::Wireframe { filled }, points)
            }
            ShapeData::Bezier {
                control,
                points_per_segment,
            } => {
                let resolution = Resolution::for_curve(points_per_segment);
                panorama_curve::tessellate_bezier(&control, resolution)?;
                (ShapeKind::Bezier { resolution }, control)
            }
            ShapeData::BSpline {
                control,
                points_per_segment,
            } => {
                let resolution = Resolution::for_curve(points_per_segment);
                panorama_curve::tessellate_bspline(&control, resolution)?;
                (ShapeKind::BSpline { resolution }, control)
            }
            ShapeData::BSplineSurface { control, steps } => {
                let resolution = Resolution::for_surface(steps);
                panorama_curve::tessellate_bspline_surface(&control, resolution)?;
                let cols = control.first().map_or(0, Vec::len);
                let origin: Vec<Vec3> = control.into_iter().flatten().collect();
                (ShapeKind::BSplineSurface { cols, resolution }, origin)
            }
        };

        if origin.iter().any(|p| !p.is_finite()) {
            return Err(IntakeError::NonFinitePoint);
        }

        Ok(Shape::from_parts(self.name, self.color, kind, origin))
    }
}
