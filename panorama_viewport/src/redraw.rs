// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame redraw sweep.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Point;
use panorama_clip::{ClipRect, LineClipper, clip_polygon, clip_polyline, strip_border_segments};
use panorama_curve::TessellationError;
use panorama_geom::{GeometryError, Vec3};
use panorama_scene::{DisplayFile, Shape, ShapeKind};
use panorama_window::{ProjectionMode, Window};

use crate::{DrawTarget, Primitive, Viewport};

/// Device radius of a point shape's disc.
const DOT_RADIUS: f64 = 3.0;

/// Tolerance for the border-segment drop on clipped curve runs.
const BORDER_EPS: f64 = 1e-9;

/// Why one shape's emission was skipped this frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RedrawError {
    /// The shape's working copy could not be tessellated.
    Tessellation(TessellationError),
    /// Projection or canonicalization failed.
    Geometry(GeometryError),
}

impl fmt::Display for RedrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tessellation(err) => write!(f, "tessellation failed: {err}"),
            Self::Geometry(err) => write!(f, "projection failed: {err}"),
        }
    }
}

impl core::error::Error for RedrawError {}

impl From<TessellationError> for RedrawError {
    fn from(err: TessellationError) -> Self {
        Self::Tessellation(err)
    }
}

impl From<GeometryError> for RedrawError {
    fn from(err: GeometryError) -> Self {
        Self::Geometry(err)
    }
}

/// One shape's failure, reported back to the caller after the sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeFailure {
    /// The failing shape's name.
    pub name: String,
    /// What went wrong.
    pub error: RedrawError,
}

/// The redraw orchestrator.
///
/// Owns the device mapping and a per-shape cache of the last emitted
/// primitive. Dirty shapes run the full pipeline; clean shapes re-emit their
/// cached primitive unchanged, so two consecutive [`Renderer::redraw`] calls
/// with no state change in between produce identical emission sequences.
#[derive(Clone, Debug)]
pub struct Renderer {
    viewport: Viewport,
    cache: HashMap<String, Option<Primitive>>,
}

impl Renderer {
    /// Creates a renderer over `viewport` with an empty cache.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            cache: HashMap::new(),
        }
    }

    /// The device mapping in use.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Drops the cached primitive for a removed shape.
    pub fn forget(&mut self, shape_name: &str) {
        self.cache.remove(shape_name);
    }

    /// Runs one synchronous redraw sweep over the display file.
    ///
    /// Per dirty shape: rebuild the working copy from origin, project,
    /// canonicalize jointly with the window, clip by kind, map to device,
    /// emit, cache, clear the dirty flag. An empty clip emits nothing but
    /// still counts as drawn (the flag clears and the cache records the
    /// absence). A failing shape is skipped and reported in the returned
    /// list; it stays dirty and never aborts the sweep.
    pub fn redraw(
        &mut self,
        window: &mut Window,
        display_file: &mut DisplayFile,
        clipper: LineClipper,
        projection: ProjectionMode,
        target: &mut dyn DrawTarget,
    ) -> Vec<ShapeFailure> {
        let mut failures = Vec::new();

        for shape in display_file.iter_mut() {
            if !shape.is_dirty() {
                if let Some(Some(primitive)) = self.cache.get(shape.name()) {
                    target.draw(shape.name(), primitive);
                }
                continue;
            }

            match self.draw_shape(window, shape, clipper, projection) {
                Ok(primitive) => {
                    if let Some(primitive) = &primitive {
                        target.draw(shape.name(), primitive);
                    }
                    self.cache.insert(shape.name().to_string(), primitive);
                    shape.clear_dirty();
                }
                Err(error) => failures.push(ShapeFailure {
                    name: shape.name().to_string(),
                    error,
                }),
            }
        }
        failures
    }

    /// Runs the pipeline for one dirty shape, up to (not including) emission.
    fn draw_shape(
        &self,
        window: &mut Window,
        shape: &mut Shape,
        clipper: LineClipper,
        projection: ProjectionMode,
    ) -> Result<Option<Primitive>, RedrawError> {
        shape.refresh_working()?;
        projection.project(window, &mut [shape.working_points_mut()])?;
        window.canonicalize(&mut [shape.working_points_mut()])?;

        let rect = ClipRect::new(window.ppc_min(), window.ppc_max());
        let map = |p: Vec3| -> Point {
            self.viewport
                .map_to_device(rect.min, rect.max, window.zoom_offset(), p)
        };

        let color = shape.color();
        let working = shape.working_points();
        let primitive = match shape.kind() {
            ShapeKind::Point => rect.contains(working[0]).then(|| Primitive::Dot {
                center: map(working[0]),
                radius: DOT_RADIUS,
                color,
            }),
            ShapeKind::Line => clipper
                .clip_line(working[0], working[1], &rect)
                .map(|[a, b]| Primitive::Segments {
                    segments: alloc::vec![[map(a), map(b)]],
                    color,
                }),
            ShapeKind::Wireframe { filled } => {
                let ring = clip_polygon(working, &rect);
                if ring.is_empty() {
                    None
                } else if filled {
                    Some(Primitive::Polygon {
                        points: ring.iter().map(|&p| map(p)).collect(),
                        fill: true,
                        color,
                    })
                } else {
                    // Stroked rings drop edges introduced along the window
                    // border by the clip, instead of drawing a false outline.
                    let mut edges: Vec<[Vec3; 2]> = ring
                        .windows(2)
                        .map(|pair| [pair[0], pair[1]])
                        .collect();
                    if ring.len() > 2 {
                        edges.push([ring[ring.len() - 1], ring[0]]);
                    }
                    let edges = strip_border_segments(edges, &rect, BORDER_EPS);
                    (!edges.is_empty()).then(|| Primitive::Segments {
                        segments: edges.iter().map(|&[a, b]| [map(a), map(b)]).collect(),
                        color,
                    })
                }
            }
            ShapeKind::Bezier { .. } | ShapeKind::BSpline { .. } => {
                let runs = clip_polyline(working, &rect, clipper);
                let runs = strip_border_segments(runs, &rect, BORDER_EPS);
                (!runs.is_empty()).then(|| Primitive::Segments {
                    segments: runs.iter().map(|&[a, b]| [map(a), map(b)]).collect(),
                    color,
                })
            }
            ShapeKind::BSplineSurface { .. } => {
                // The working buffer holds mesh segment endpoints pairwise.
                let segments: Vec<[Point; 2]> = working
                    .chunks_exact(2)
                    .filter_map(|pair| clipper.clip_line(pair[0], pair[1], &rect))
                    .map(|[a, b]| [map(a), map(b)])
                    .collect();
                (!segments.is_empty()).then_some(Primitive::Segments { segments, color })
            }
        };
        Ok(primitive)
    }
}
