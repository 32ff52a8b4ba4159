// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clip rectangle and Cohen–Sutherland outcodes.

use bitflags::bitflags;
use panorama_geom::Vec3;

/// The visible region of the canonical (post-canonicalization) frame.
///
/// `min`/`max` are the window's ppc corners; depth is ignored by the 2D
/// clippers, which operate on the projection plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClipRect {
    /// Lower-left corner.
    pub min: Vec3,
    /// Upper-right corner.
    pub max: Vec3,
}

impl ClipRect {
    /// Creates a clip rectangle from opposite corners.
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Point clip: containment is inclusive on both axes.
    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }
}

bitflags! {
    /// Position of a point relative to the four half-planes of a [`ClipRect`].
    ///
    /// An empty outcode means "inside". Two endpoints sharing a set bit lie
    /// on the same outside of one boundary, so the segment between them is
    /// trivially invisible.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Outcode: u8 {
        /// `x` below the left boundary.
        const LEFT = 1 << 0;
        /// `x` above the right boundary.
        const RIGHT = 1 << 1;
        /// `y` below the bottom boundary.
        const BOTTOM = 1 << 2;
        /// `y` above the top boundary.
        const TOP = 1 << 3;
    }
}

impl Outcode {
    /// Computes the outcode of `p` relative to `rect`.
    #[must_use]
    pub fn of(p: Vec3, rect: &ClipRect) -> Self {
        let mut code = Self::empty();
        if p.x < rect.min.x {
            code |= Self::LEFT;
        } else if p.x > rect.max.x {
            code |= Self::RIGHT;
        }
        if p.y < rect.min.y {
            code |= Self::BOTTOM;
        } else if p.y > rect.max.y {
            code |= Self::TOP;
        }
        code
    }
}
