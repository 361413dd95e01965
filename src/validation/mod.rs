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

pub mod overlap;
pub mod topology;

use tracing::debug;

use crate::error::Diagnostic;
use crate::geometry::Point2;
use crate::mesh::edge::face_edges;

pub use overlap::{
    OrientationReport, check_containment, check_cross_intersections, check_orientation,
    check_self_intersections,
};
pub use topology::{EdgeCensus, EdgeStatus, Occurrence, TopologyReport, check_topology};

/// Rejects faces the other checks cannot reason about: fewer than three
/// corners, indices outside the vertex list, or a zero-length edge.
pub fn check_face_structure<F: AsRef<[usize]>>(
    vertex_count: usize,
    faces: &[F],
) -> Result<(), Diagnostic> {
    for (f, face) in faces.iter().enumerate() {
        let face = face.as_ref();
        if face.len() < 3 {
            return Err(Diagnostic::TooFewVertices {
                face: f + 1,
                count: face.len(),
            });
        }
        if let Some(&v) = face.iter().find(|&&v| v >= vertex_count) {
            return Err(Diagnostic::UnknownVertex {
                face: f + 1,
                vertex: v + 1,
            });
        }
        if face_edges(face).any(|e| e.from == e.to) {
            return Err(Diagnostic::DegenerateFace { face: f + 1 });
        }
    }
    Ok(())
}

/// Decides whether the mesh is a closed, non-overlapping planar subdivision.
///
/// Checks run in a fixed order and the first failure is returned:
/// face structure, edge pairing, self-intersection, cross-face
/// intersection, orientation, containment.
pub fn validate_mesh<F: AsRef<[usize]>>(vertices: &[Point2], faces: &[F]) -> Result<(), Diagnostic> {
    check_face_structure(vertices.len(), faces)?;

    let topology = check_topology(faces)?;
    debug!(
        edges = topology.edge_count,
        half_edges = topology.half_edge_count,
        "topology ok"
    );

    check_self_intersections(vertices, faces)?;
    check_cross_intersections(vertices, faces)?;
    debug!("no overlapping edges");

    let orientation = check_orientation(vertices, faces)?;
    debug!(unbounded_face = ?orientation.unbounded_face, "orientation ok");

    check_containment(vertices, faces)?;
    Ok(())
}
