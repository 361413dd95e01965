// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use smallvec::SmallVec;

use crate::error::{Diagnostic, MeshError};
use crate::geometry::Point2;
use crate::mesh::basic_types::Dcel;
use crate::mesh::core::build_dcel;
use crate::validation::validate_mesh;

/// Vertex indices of one face boundary, 0-based.
pub type FaceLoop = SmallVec<[usize; 8]>;

/// Input mesh: integer vertices plus faces given as cyclic vertex lists.
///
/// Immutable once built; validation and DCEL construction only borrow it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanarMesh {
    pub vertices: Vec<Point2>,
    pub faces: Vec<FaceLoop>,
}

impl PlanarMesh {
    pub fn new<P, F, I>(vertices: impl IntoIterator<Item = P>, faces: I) -> Self
    where
        P: Into<Point2>,
        I: IntoIterator<Item = F>,
        F: AsRef<[usize]>,
    {
        Self {
            vertices: vertices.into_iter().map(Into::into).collect(),
            faces: faces
                .into_iter()
                .map(|f| f.as_ref().iter().copied().collect())
                .collect(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Coordinates of the corners of face `f`, in boundary order.
    ///
    /// Panics if `f` or one of its vertex indices is out of range.
    pub fn face_polygon(&self, f: usize) -> SmallVec<[Point2; 8]> {
        self.faces[f].iter().map(|&v| self.vertices[v]).collect()
    }

    pub fn validate(&self) -> Result<(), Diagnostic> {
        validate_mesh(&self.vertices, &self.faces)
    }

    /// Validates the mesh and, only if it passes, builds its DCEL.
    pub fn to_dcel(&self) -> Result<Dcel, MeshError> {
        self.validate()?;
        Ok(build_dcel(&self.vertices, &self.faces)?)
    }
}
