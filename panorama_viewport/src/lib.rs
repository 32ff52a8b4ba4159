// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panorama Viewport: device mapping and the redraw loop.
//!
//! The [`Viewport`] remaps canonical-frame coordinates onto a device pixel
//! rectangle (y flipped, bounds inflated by a zoom-aware margin). The
//! [`Renderer`] drives the per-frame sweep: every dirty shape's working copy
//! is rebuilt, projected, canonicalized jointly with the window, clipped by
//! kind, mapped to device coordinates, and emitted to a [`DrawTarget`] as a
//! [`Primitive`]. Clean shapes re-emit their cached primitive, making the
//! sweep idempotent. The sweep is single-threaded and synchronous; a failing
//! shape is reported, not fatal.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod primitive;
mod redraw;
mod viewport;

pub use primitive::{DrawTarget, Primitive, Recorder};
pub use redraw::{RedrawError, Renderer, ShapeFailure};
pub use viewport::Viewport;
