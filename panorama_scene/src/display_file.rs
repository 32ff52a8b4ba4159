// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The display file: the ordered, name-indexed shape collection.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::Shape;

/// Error adding a shape to a [`DisplayFile`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayFileError {
    /// A shape with this name already exists. Names are unique keys; the
    /// intake collaborator resolves collisions by suffixing before retrying.
    DuplicateName(String),
}

impl fmt::Display for DisplayFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(f, "shape name {name:?} is already in use"),
        }
    }
}

impl core::error::Error for DisplayFileError {}

/// Ordered collection of shapes with unique names.
///
/// Shapes keep their insertion order for stable draw order; lookups go
/// through a name index. The display file is owned and mutated only by the
/// orchestration layer.
#[derive(Clone, Debug, Default)]
pub struct DisplayFile {
    shapes: Vec<Shape>,
    index: HashMap<String, usize>,
}

impl DisplayFile {
    /// Creates an empty display file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// `true` when no shapes are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Adds a shape, rejecting duplicate names.
    pub fn add(&mut self, shape: Shape) -> Result<(), DisplayFileError> {
        if self.index.contains_key(shape.name()) {
            return Err(DisplayFileError::DuplicateName(shape.name().to_string()));
        }
        self.index.insert(shape.name().to_string(), self.shapes.len());
        self.shapes.push(shape);
        Ok(())
    }

    /// Removes a shape by name, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<Shape> {
        let position = self.index.remove(name)?;
        let shape = self.shapes.remove(position);
        // Positions after the removal point shifted down by one.
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(shape)
    }

    /// Looks up a shape by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Shape> {
        self.index.get(name).map(|&i| &self.shapes[i])
    }

    /// Looks up a shape mutably by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Shape> {
        let i = *self.index.get(name)?;
        Some(&mut self.shapes[i])
    }

    /// Iterates shapes in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Iterates shapes mutably in draw order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.iter_mut()
    }

    /// Marks every shape dirty, forcing a full recompute on the next redraw.
    ///
    /// Window mutations (pan/zoom/rotate) change the canonical frame for
    /// everything, so the orchestrator calls this before redrawing.
    pub fn mark_all_dirty(&mut self) {
        for shape in &mut self.shapes {
            shape.mark_dirty();
        }
    }
}
