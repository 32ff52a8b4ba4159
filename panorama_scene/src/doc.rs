// Copyright 2026 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The persisted-geometry document schema.
//!
//! A [`GeometryDoc`] is the interchange form of a display file: a shared
//! vertex list, a material table, and per-object primitive records holding
//! 1-based vertex indices (negative indices count back from the end of the
//! vertex list). The external codec reads and writes this document; the
//! conversions here never leave partial state behind on failure.
//!
//! Only points, lines, and faces are representable. Curves and surfaces have
//! no record type and are skipped on export.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use panorama_geom::Vec3;
use peniko::Color;

use crate::{DisplayFile, Shape, ShapeKind};

/// Error instantiating a [`GeometryDoc`] into a display file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocError {
    /// An object references a material name missing from the table.
    UnknownMaterial(String),
    /// A primitive index resolves outside the vertex list.
    VertexIndexOutOfRange {
        /// The object whose record is malformed.
        object: String,
        /// The offending raw index.
        index: i64,
    },
    /// Two objects share a name.
    DuplicateName(String),
    /// An object record carries no usable geometry.
    EmptyObject(String),
}

impl fmt::Display for DocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMaterial(name) => write!(f, "object references unknown material {name:?}"),
            Self::VertexIndexOutOfRange { object, index } => {
                write!(f, "object {object:?} has vertex index {index} out of range")
            }
            Self::DuplicateName(name) => write!(f, "document declares object {name:?} twice"),
            Self::EmptyObject(name) => write!(f, "object {name:?} has no geometry"),
        }
    }
}

impl core::error::Error for DocError {}

/// A named color in the material table.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Table key, referenced by object records.
    pub name: String,
    /// Red, green, blue in `[0, 1]`.
    pub rgb: [f64; 3],
}

/// One primitive record, holding raw document indices.
///
/// Indices are 1-based; a negative index `-k` means the `k`-th vertex from
/// the end of the vertex list. Zero is never valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrimitiveRecord {
    /// A single vertex.
    Point(i64),
    /// A two-vertex segment.
    Line([i64; 2]),
    /// A closed ring of three or more vertices.
    Face(Vec<i64>),
}

/// One named object in the document.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectRecord {
    /// Object name, unique within the document.
    pub name: String,
    /// Material table key.
    pub material: String,
    /// The geometry record.
    pub primitive: PrimitiveRecord,
    /// For faces, whether the ring is filled when instantiated.
    pub filled: bool,
}

/// The persisted-geometry document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryDoc {
    /// Material table; names are unique.
    pub materials: Vec<Material>,
    /// Shared vertex list, indexed 1-based by primitive records.
    pub vertices: Vec<Vec3>,
    /// Object records in declaration order.
    pub objects: Vec<ObjectRecord>,
}

impl GeometryDoc {
    /// Builds a document from a display file.
    ///
    /// All exportable vertices are gathered, sorted by the coordinate total
    /// order, and deduplicated exactly, so the shared list is independent of
    /// shape order. Materials are synthesized per distinct color and named
    /// `material_0`, `material_1`, ... in first-use order. Shapes whose kind
    /// has no record type (curves, surfaces) are skipped.
    #[must_use]
    pub fn from_display_file(display_file: &DisplayFile) -> Self {
        let exportable = |shape: &&Shape| {
            matches!(
                shape.kind(),
                ShapeKind::Point | ShapeKind::Line | ShapeKind::Wireframe { .. }
            )
        };

        let mut vertices: Vec<Vec3> = display_file
            .iter()
            .filter(exportable)
            .flat_map(|shape| shape.origin_points().iter().copied())
            .collect();
        vertices.sort_unstable_by(|a, b| a.cmp_total(*b));
        // Dedup under the same total order the sort used; `PartialEq` would
        // merge `-0.0` with `0.0` and leave the list out of step with the
        // binary search below.
        vertices.dedup_by(|a, b| a.cmp_total(*b).is_eq());

        #[expect(clippy::cast_possible_truncation, reason = "vertex counts fit i64")]
        let slot_of = |p: Vec3| -> i64 {
            // Indices are 1-based in the document.
            let slot = vertices
                .binary_search_by(|v| v.cmp_total(p))
                .expect("every origin point was interned above");
            (slot + 1) as i64
        };

        let mut doc = Self {
            vertices: Vec::new(),
            materials: Vec::new(),
            objects: Vec::new(),
        };
        let mut material_slots: HashMap<[u8; 4], String> = HashMap::new();

        for shape in display_file.iter().filter(exportable) {
            let points = shape.origin_points();
            let primitive = match shape.kind() {
                ShapeKind::Point => PrimitiveRecord::Point(slot_of(points[0])),
                ShapeKind::Line => PrimitiveRecord::Line([slot_of(points[0]), slot_of(points[1])]),
                ShapeKind::Wireframe { .. } => {
                    PrimitiveRecord::Face(points.iter().map(|&p| slot_of(p)).collect())
                }
                _ => continue,
            };

            let material = doc.intern_material(&mut material_slots, shape.color());
            let filled = matches!(shape.kind(), ShapeKind::Wireframe { filled: true });
            doc.objects.push(ObjectRecord {
                name: shape.name().to_string(),
                material,
                primitive,
                filled,
            });
        }
        doc.vertices = vertices;
        doc
    }

    /// Instantiates the document into a fresh display file.
    ///
    /// Every index and material reference is resolved before any shape is
    /// built, and the display file is assembled last, so a malformed document
    /// produces an error and nothing else.
    pub fn instantiate(&self) -> Result<DisplayFile, DocError> {
        let mut colors: HashMap<&str, Color> = HashMap::new();
        for material in &self.materials {
            #[expect(clippy::cast_possible_truncation, reason = "color channels are unit range")]
            let [r, g, b] = material.rgb.map(|c| c as f32);
            colors.insert(&material.name, Color::new([r, g, b, 1.0]));
        }

        let mut shapes = Vec::with_capacity(self.objects.len());
        for object in &self.objects {
            let color = *colors
                .get(object.material.as_str())
                .ok_or_else(|| DocError::UnknownMaterial(object.material.clone()))?;

            let resolve = |raw: i64| -> Result<Vec3, DocError> {
                let slot = resolve_index(raw, self.vertices.len()).ok_or(
                    DocError::VertexIndexOutOfRange {
                        object: object.name.clone(),
                        index: raw,
                    },
                )?;
                Ok(self.vertices[slot])
            };

            let (kind, origin) = match &object.primitive {
                PrimitiveRecord::Point(i) => (ShapeKind::Point, alloc::vec![resolve(*i)?]),
                PrimitiveRecord::Line([a, b]) => {
                    (ShapeKind::Line, alloc::vec![resolve(*a)?, resolve(*b)?])
                }
                PrimitiveRecord::Face(indices) => {
                    if indices.len() < 3 {
                        return Err(DocError::EmptyObject(object.name.clone()));
                    }
                    let points = indices
                        .iter()
                        .map(|&i| resolve(i))
                        .collect::<Result<Vec<Vec3>, DocError>>()?;
                    (
                        ShapeKind::Wireframe {
                            filled: object.filled,
                        },
                        points,
                    )
                }
            };
            shapes.push(Shape::from_parts(object.name.clone(), color, kind, origin));
        }

        let mut display_file = DisplayFile::new();
        for shape in shapes {
            let name = shape.name().to_string();
            display_file
                .add(shape)
                .map_err(|_| DocError::DuplicateName(name))?;
        }
        Ok(display_file)
    }

    fn intern_material(&mut self, slots: &mut HashMap<[u8; 4], String>, color: Color) -> String {
        let rgba = color.to_rgba8();
        let key = [rgba.r, rgba.g, rgba.b, rgba.a];
        slots
            .entry(key)
            .or_insert_with(|| {
                let name = format!("material_{}", self.materials.len());
                let [r, g, b, _] = color.components;
                self.materials.push(Material {
                    name: name.clone(),
                    rgb: [f64::from(r), f64::from(g), f64::from(b)],
                });
                name
            })
            .clone()
    }
}

/// Resolves a 1-based, possibly negative document index to a slot.
#[expect(clippy::cast_possible_truncation, reason = "vertex counts fit i64, slot < len")]
fn resolve_index(raw: i64, len: usize) -> Option<usize> {
    let len = len as i64;
    let slot = if raw > 0 && raw <= len {
        raw - 1
    } else if raw < 0 && -raw <= len {
        len + raw
    } else {
        return None;
    };
    Some(slot as usize)
}
