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
use tracing::{debug, trace};

use crate::{
    error::DcelError,
    geometry::Point2,
    mesh::{
        basic_types::Dcel, edge::DirectedEdge, edge::face_edges, face::Face, half_edge::HalfEdge,
        vertex::Vertex,
    },
};

/// Builds the half-edge structure of an already validated mesh.
///
/// Half-edges are created face by face in stored boundary order, so the
/// half-edges of face `f` occupy one contiguous index range and the first of
/// them is the face's outer component. A half-edge is paired with its twin as
/// soon as the reverse directed edge is seen.
///
/// The input is expected to have passed [`crate::validate_mesh`]. An edge left
/// without a twin at the end is reported as [`DcelError::UnpairedHalfEdge`],
/// which means validation and construction disagree.
pub fn build_dcel<F: AsRef<[usize]>>(vertices: &[Point2], faces: &[F]) -> Result<Dcel, DcelError> {
    let half_edge_total: usize = faces.iter().map(|f| f.as_ref().len()).sum();

    let mut dcel = Dcel {
        vertices: vertices.iter().copied().map(Vertex::new).collect(),
        half_edges: Vec::with_capacity(half_edge_total),
        faces: Vec::with_capacity(faces.len()),
    };

    // directed edges still waiting for their reverse
    let mut pending: AHashMap<DirectedEdge, usize> = AHashMap::with_capacity(half_edge_total / 2);

    for (face_idx, face) in faces.iter().enumerate() {
        let face = face.as_ref();
        let first = dcel.half_edges.len();

        for edge in face_edges(face) {
            if edge.from >= vertices.len() {
                return Err(DcelError::UnknownVertex {
                    face: face_idx,
                    vertex: edge.from,
                    vertex_count: vertices.len(),
                });
            }

            let he_idx = dcel.half_edges.len();
            dcel.half_edges.push(HalfEdge::new(edge.from, face_idx));

            match pending.remove(&edge.reversed()) {
                Some(twin) => {
                    dcel.half_edges[he_idx].twin = twin;
                    dcel.half_edges[twin].twin = he_idx;
                }
                None => {
                    if pending.insert(edge, he_idx).is_some() {
                        return Err(DcelError::DuplicateHalfEdge {
                            origin: edge.from,
                            target: edge.to,
                        });
                    }
                }
            }
        }

        let n = face.len();
        for k in 0..n {
            let he = &mut dcel.half_edges[first + k];
            he.next = first + (k + 1) % n;
            he.prev = first + (k + n - 1) % n;
        }

        dcel.faces.push(if n == 0 {
            Face::default()
        } else {
            Face::new(first)
        });
        trace!(face = face_idx, half_edges = n, "face wired");
    }

    for (he_idx, he) in dcel.half_edges.iter().enumerate() {
        dcel.vertices[he.origin].half_edge.get_or_insert(he_idx);
    }

    if let Some(edge) = pending.keys().min() {
        return Err(DcelError::UnpairedHalfEdge {
            origin: edge.from,
            target: edge.to,
        });
    }

    debug_assert!(dcel.half_edges.iter().all(HalfEdge::has_twin));
    debug!(
        vertices = dcel.vertex_count(),
        half_edges = dcel.half_edge_count(),
        faces = dcel.face_count(),
        "DCEL built"
    );

    Ok(dcel)
}
