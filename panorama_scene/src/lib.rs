// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panorama Scene: the shape model and display file.
//!
//! A [`Shape`] is a tagged variant ([`ShapeKind`]) over one shared layout:
//! a name, a color, the authoritative *origin* points, and a per-frame
//! *working copy* guarded by a dirty flag. The pipeline never touches origin
//! points; [`Shape::refresh_working`] rebuilds the working copy (tessellating
//! curves and surfaces) and everything downstream — projection,
//! canonicalization, clipping — operates on the working buffer only. No
//! point buffer is ever shared between two shapes.
//!
//! The [`DisplayFile`] is the ordered shape collection keyed by unique name.
//! Shape intake from the editor goes through [`ShapeSpec`], which validates
//! the payload (point counts, grid shape, name) before anything is added.
//!
//! The `doc` module holds the persisted-geometry schema shared with the
//! external file codec: a vertex + index list document that a display file
//! converts to and from without any partial mutation on failure.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod doc;
mod display_file;
mod intake;
mod shape;

pub use display_file::{DisplayFile, DisplayFileError};
pub use intake::{IntakeError, ShapeData, ShapeSpec};
pub use shape::{Shape, ShapeKind};
