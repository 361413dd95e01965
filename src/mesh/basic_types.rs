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

use crate::geometry::Point2;
use crate::mesh::{face::Face, half_edge::HalfEdge, vertex::Vertex};

/// Doubly-connected edge list of a planar subdivision.
///
/// Vertices, half-edges and faces live in flat arenas and refer to each other
/// by index. A `Dcel` is produced once by [`crate::mesh::core::build_dcel`]
/// and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dcel {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) half_edges: Vec<HalfEdge>,
    pub(crate) faces: Vec<Face>,
}

impl Dcel {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges; always even.
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.half_edges.len() / 2
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn half_edges(&self) -> &[HalfEdge] {
        &self.half_edges
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vertex(&self, v: usize) -> Option<&Vertex> {
        self.vertices.get(v)
    }

    pub fn half_edge(&self, he: usize) -> Option<&HalfEdge> {
        self.half_edges.get(he)
    }

    pub fn face(&self, f: usize) -> Option<&Face> {
        self.faces.get(f)
    }

    pub fn position(&self, v: usize) -> Point2 {
        self.vertices[v].position
    }
}
