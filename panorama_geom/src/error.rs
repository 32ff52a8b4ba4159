// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry error type shared across the pipeline crates.

use core::fmt;

/// Error produced by geometric operations.
///
/// Recoverable conditions (a clip that removes everything, a zoom below the
/// window floor) are *not* errors; this type covers the cases that abort an
/// operation entirely.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A rotation axis with near-zero magnitude was supplied.
    DegenerateAxis,
    /// A computation produced (or was handed) a NaN or infinite coordinate.
    NonFinite,
    /// An operation that needs at least one point was given none.
    EmptyPointSet,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateAxis => write!(f, "rotation axis has near-zero magnitude"),
            Self::NonFinite => write!(f, "coordinate is NaN or infinite"),
            Self::EmptyPointSet => write!(f, "operation requires at least one point"),
        }
    }
}

impl core::error::Error for GeometryError {}
