// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device-space draw primitives and the emission seam.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;

/// A device-space draw call, ready for the external drawing surface.
///
/// Coordinates are device pixels (y grows downward); all clipping and
/// projection has already happened.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A point, drawn as a small filled disc.
    Dot {
        /// Disc center.
        center: Point,
        /// Disc radius in pixels.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// Disconnected line segments sharing one color.
    Segments {
        /// Endpoint pairs.
        segments: Vec<[Point; 2]>,
        /// Stroke color.
        color: Color,
    },
    /// A closed polygon ring.
    Polygon {
        /// Ring vertices in order; the closing edge is implicit.
        points: Vec<Point>,
        /// Whether the ring is filled rather than stroked.
        fill: bool,
        /// Draw color.
        color: Color,
    },
}

/// Sink for emitted primitives.
///
/// The rasterizing surface lives outside this crate; the redraw loop hands
/// it one primitive per visible shape, keyed by the shape name so the
/// surface can manage retained draw state.
pub trait DrawTarget {
    /// Receives one shape's primitive for this frame.
    fn draw(&mut self, shape_name: &str, primitive: &Primitive);
}

/// A [`DrawTarget`] that records every call, for tests and inspection.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    /// Recorded `(shape name, primitive)` pairs in emission order.
    pub calls: Vec<(String, Primitive)>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DrawTarget for Recorder {
    fn draw(&mut self, shape_name: &str, primitive: &Primitive) {
        self.calls.push((shape_name.to_string(), primitive.clone()));
    }
}
