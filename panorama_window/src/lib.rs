// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panorama Window: the view volume and its projections.
//!
//! A [`Window`] is an oriented rectangle in world space with a
//! view-reference-point and view-plane normal. It supports pan, zoom, and
//! rotation relative to its own orientation, and it owns the per-frame
//! canonical ("ppc") working corners: projection rebuilds them from the
//! owner-edited corners and [`Window::canonicalize`] moves the centroid to
//! the origin and the local vertical onto +y, jointly with every dirty
//! shape's working buffer, in a single composed transform.
//!
//! The [`projection`] module provides the parallel and perspective paths;
//! both share the alignment step that rotates the view-plane normal onto the
//! canonical depth axis, so canonicalization and clipping always operate in
//! a consistent frame.
//!
//! This crate is `no_std` and has no allocations.

#![no_std]

pub mod projection;
mod window;

pub use projection::{ProjectionMode, project_parallel, project_perspective};
pub use window::{MIN_EXTENT, PanDirection, Window, WindowAxis, WindowDebugInfo, ZoomDirection};
