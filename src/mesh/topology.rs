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

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::{error::DcelError, mesh::basic_types::Dcel};

/// Walks the `next` cycle of a face, starting at its outer component.
pub struct FaceCycle<'a> {
    dcel: &'a Dcel,
    start: Option<usize>,
    current: Option<usize>,
    steps: usize,
}

impl Iterator for FaceCycle<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let he = self.current?;
        self.steps += 1;

        let next = self.dcel.half_edges[he].next;
        // a broken cycle never returns to the start; stop after visiting every half-edge once
        self.current = if Some(next) == self.start || self.steps >= self.dcel.half_edges.len() {
            None
        } else {
            Some(next)
        };
        Some(he)
    }
}

impl Dcel {
    /// Vertex the half-edge points to.
    pub fn target(&self, he: usize) -> usize {
        self.half_edges[self.half_edges[he].next].origin
    }

    pub fn twin(&self, he: usize) -> usize {
        self.half_edges[he].twin
    }

    /// Half-edges around face `f`, in stored boundary order.
    pub fn face_half_edges(&self, f: usize) -> FaceCycle<'_> {
        let start = self.faces[f].outer_component;
        FaceCycle {
            dcel: self,
            start,
            current: start,
            steps: 0,
        }
    }

    /// Boundary vertices of face `f`, in stored order.
    pub fn face_vertices(&self, f: usize) -> Vec<usize> {
        self.face_half_edges(f)
            .map(|he| self.half_edges[he].origin)
            .collect()
    }

    /// Half-edges leaving `v`, found by rotating through `twin.next`.
    pub fn outgoing_half_edges(&self, v: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let Some(start) = self.vertices[v].half_edge else {
            return out;
        };

        let mut he = start;
        loop {
            out.push(he);
            he = self.half_edges[self.half_edges[he].twin].next;
            if he == start || out.len() > self.half_edges.len() {
                break;
            }
        }
        out
    }

    /// Vertices joined to `v` by an edge.
    pub fn vertex_neighbors(&self, v: usize) -> Vec<usize> {
        self.outgoing_half_edges(v)
            .into_iter()
            .map(|he| self.target(he))
            .collect()
    }

    /// Faces sharing at least one edge with `f`, each listed once, in the
    /// order their shared edges appear along the boundary of `f`.
    pub fn adjacent_faces(&self, f: usize) -> SmallVec<[usize; 8]> {
        let mut adjacent: SmallVec<[usize; 8]> = SmallVec::new();
        for he in self.face_half_edges(f) {
            let other = self.half_edges[self.half_edges[he].twin].face;
            if other != f && !adjacent.contains(&other) {
                adjacent.push(other);
            }
        }
        adjacent
    }

    pub fn face_adjacency_graph(&self) -> AHashMap<usize, Vec<usize>> {
        (0..self.faces.len())
            .map(|f| (f, self.adjacent_faces(f).into_vec()))
            .collect()
    }

    /// Checks every referential invariant of the structure.
    ///
    /// - `twin(twin(h)) == h` and `twin(h) != h`
    /// - `prev(next(h)) == h` and `next(prev(h)) == h`
    /// - `face(next(h)) == face(h)`
    /// - `origin(twin(h)) == origin(next(h))`
    /// - every vertex's half-edge starts at that vertex
    pub fn check_invariants(&self) -> Result<(), DcelError> {
        let m = self.half_edges.len();
        if m % 2 != 0 {
            return Err(DcelError::OddHalfEdgeCount { half_edges: m });
        }

        for (i, he) in self.half_edges.iter().enumerate() {
            if he.twin >= m || he.twin == i || self.half_edges[he.twin].twin != i {
                return Err(DcelError::TwinMismatch { half_edge: i });
            }
            if he.next >= m
                || he.prev >= m
                || self.half_edges[he.next].prev != i
                || self.half_edges[he.prev].next != i
            {
                return Err(DcelError::LinkMismatch { half_edge: i });
            }
            if self.half_edges[he.next].face != he.face {
                return Err(DcelError::FaceMismatch { half_edge: i });
            }
            if self.half_edges[he.twin].origin != self.half_edges[he.next].origin {
                return Err(DcelError::OriginMismatch { half_edge: i });
            }
        }

        for (v, vertex) in self.vertices.iter().enumerate() {
            if let Some(he) = vertex.half_edge {
                if he >= m || self.half_edges[he].origin != v {
                    return Err(DcelError::IncidentMismatch { vertex: v });
                }
            }
        }

        Ok(())
    }
}
