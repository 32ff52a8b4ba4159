// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panorama Clip: reduction of canonical-frame geometry to the visible window.
//!
//! Every clipper here is a pure function `(points, clip rect) -> clipped
//! points`; the window is never mutated and an empty result is not an error,
//! it just means there is nothing to draw for that shape this frame.
//!
//! - Points: inclusive containment ([`ClipRect::contains`]).
//! - Lines: two interchangeable algorithms behind one strategy value,
//!   [`LineClipper`] (Liang–Barsky and Cohen–Sutherland). The strategy is an
//!   explicit parameter of every call so the editor can switch algorithms
//!   live without any shared global.
//! - Polygons: Sutherland–Hodgman adapted for a rectangular clip region,
//!   with corner reinsertion for edges that pass outside a window corner
//!   ([`clip_polygon`]).
//! - Tessellated curves: pairwise line clipping over consecutive samples
//!   ([`clip_polyline`]), with an epsilon-based pass that drops segments
//!   lying on the window border ([`strip_border_segments`]).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod line;
mod polygon;
mod polyline;
mod rect;

pub use line::LineClipper;
pub use polygon::clip_polygon;
pub use polyline::{clip_polyline, strip_border_segments};
pub use rect::{ClipRect, Outcode};
