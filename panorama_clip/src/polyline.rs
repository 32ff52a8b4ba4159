// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clipping of tessellated curves (polylines).

use alloc::vec::Vec;

use panorama_geom::Vec3;

use crate::{ClipRect, LineClipper};

/// Clips a polyline against `rect` by clipping each consecutive sample pair
/// as a line segment, concatenating the visible sub-runs.
///
/// The output is a list of segments rather than a point ring: a curve can
/// leave and re-enter the window any number of times, producing several
/// disconnected visible runs.
#[must_use]
pub fn clip_polyline(points: &[Vec3], rect: &ClipRect, clipper: LineClipper) -> Vec<[Vec3; 2]> {
    let mut segments = Vec::new();
    for pair in points.windows(2) {
        if let Some(segment) = clipper.clip_line(pair[0], pair[1], rect) {
            segments.push(segment);
        }
    }
    segments
}

/// Drops segments that lie entirely on one window border.
///
/// Clipping a curve that exits and re-enters the window leaves zero-area
/// connector segments running along the border between the exit and re-entry
/// points. A segment whose endpoints are both within `eps` of the same
/// border line is such an artifact and is removed.
#[must_use]
pub fn strip_border_segments(
    segments: Vec<[Vec3; 2]>,
    rect: &ClipRect,
    eps: f64,
) -> Vec<[Vec3; 2]> {
    segments
        .into_iter()
        .filter(|[a, b]| !on_same_border(*a, *b, rect, eps))
        .collect()
}

fn on_same_border(a: Vec3, b: Vec3, rect: &ClipRect, eps: f64) -> bool {
    for x in [rect.min.x, rect.max.x] {
        if libm::fabs(a.x - x) < eps && libm::fabs(b.x - x) < eps {
            return true;
        }
    }
    for y in [rect.min.y, rect.max.y] {
        if libm::fabs(a.y - y) < eps && libm::fabs(b.y - y) < eps {
            return true;
        }
    }
    false
}
