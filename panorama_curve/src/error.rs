// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessellation error type.

use core::fmt;

/// Error produced when a control-point set cannot be tessellated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TessellationError {
    /// Fewer control points than the minimum the primitive needs.
    TooFewControlPoints {
        /// Minimum number of control points required.
        needed: usize,
        /// Number of control points supplied.
        got: usize,
    },
    /// A Bézier chain must hold `4 + 3k` control points so every 4-point
    /// group shares its last point with the next group's first.
    UnalignedControlCount {
        /// Number of control points supplied.
        got: usize,
    },
    /// A surface control grid with rows of differing lengths.
    RaggedGrid,
}

impl fmt::Display for TessellationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewControlPoints { needed, got } => {
                write!(f, "need at least {needed} control points, got {got}")
            }
            Self::UnalignedControlCount { got } => {
                write!(f, "Bezier chain needs 4 + 3k control points, got {got}")
            }
            Self::RaggedGrid => write!(f, "surface control grid rows differ in length"),
        }
    }
}

impl core::error::Error for TessellationError {}
