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
use tracing::{debug, trace};

use crate::error::Diagnostic;
use crate::geometry::{Aabb, Point2, Segment2};
use crate::kernel::orientation::Orientation;
use crate::kernel::polygon::{point_on_border, ray_crossings_odd, signed_area2};
use crate::mesh::edge::{DirectedEdge, face_edges};

type Polygon = SmallVec<[Point2; 8]>;

fn polygon_of(vertices: &[Point2], face: &[usize]) -> Polygon {
    face.iter().map(|&v| vertices[v]).collect()
}

fn segment_of<'a>(vertices: &'a [Point2], edge: &DirectedEdge) -> Segment2<'a> {
    Segment2::new(&vertices[edge.from], &vertices[edge.to])
}

/// Looks for two edges of the same face that meet although they share no
/// vertex.
pub fn check_self_intersections<F: AsRef<[usize]>>(
    vertices: &[Point2],
    faces: &[F],
) -> Result<(), Diagnostic> {
    for (f, face) in faces.iter().enumerate() {
        let edges: SmallVec<[DirectedEdge; 8]> = face_edges(face.as_ref()).collect();

        for i in 0..edges.len() {
            let si = segment_of(vertices, &edges[i]);
            for j in (i + 1)..edges.len() {
                if edges[i].shares_vertex(&edges[j]) {
                    continue;
                }
                if si.intersects(&segment_of(vertices, &edges[j])) {
                    return Err(Diagnostic::SelfIntersection {
                        face: f + 1,
                        first: edges[i].external(),
                        second: edges[j].external(),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Looks for edges of two different faces that meet anywhere other than at
/// a vertex both edges share.
pub fn check_cross_intersections<F: AsRef<[usize]>>(
    vertices: &[Point2],
    faces: &[F],
) -> Result<(), Diagnostic> {
    let boxes: Vec<Option<Aabb>> = faces
        .iter()
        .map(|f| Aabb::from_polygon(f.as_ref().iter().map(|&v| &vertices[v])))
        .collect();

    for a in 0..faces.len() {
        for b in (a + 1)..faces.len() {
            match (&boxes[a], &boxes[b]) {
                (Some(ba), Some(bb)) if ba.intersects(bb) => {}
                _ => continue,
            }

            for ea in face_edges(faces[a].as_ref()) {
                let sa = segment_of(vertices, &ea);
                for eb in face_edges(faces[b].as_ref()) {
                    if ea.shares_vertex(&eb) {
                        continue;
                    }
                    if sa.intersects(&segment_of(vertices, &eb)) {
                        return Err(Diagnostic::CrossIntersection {
                            face_a: a + 1,
                            face_b: b + 1,
                            edge_a: ea.external(),
                            edge_b: eb.external(),
                        });
                    }
                }
            }
        }
    }
    Ok(())
}

/// Winding of every face, and which one (if any) is the unbounded face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrientationReport {
    /// Twice the signed area of each face, positive when counter-clockwise.
    pub signed_areas: Vec<i128>,
    /// The clockwise face enclosing all others, when the mesh has one.
    pub unbounded_face: Option<usize>,
}

impl OrientationReport {
    pub fn orientation(&self, f: usize) -> Orientation {
        Orientation::from_determinant(self.signed_areas[f])
    }
}

/// Every bounded face must be counter-clockwise in stored order.
///
/// Zero-area faces are degenerate. At most one face may run clockwise: the
/// unbounded face, taken to be the clockwise face of largest area (lowest
/// index on ties). Any further clockwise face is badly oriented.
pub fn check_orientation<F: AsRef<[usize]>>(
    vertices: &[Point2],
    faces: &[F],
) -> Result<OrientationReport, Diagnostic> {
    let signed_areas: Vec<i128> = faces
        .iter()
        .map(|f| signed_area2(&polygon_of(vertices, f.as_ref())))
        .collect();

    if let Some(f) = signed_areas.iter().position(|&a| a == 0) {
        return Err(Diagnostic::DegenerateFace { face: f + 1 });
    }

    let unbounded_face = signed_areas
        .iter()
        .enumerate()
        .filter(|(_, a)| **a < 0)
        .min_by_key(|(f, a)| (**a, *f))
        .map(|(f, _)| f);

    if let Some(f) = signed_areas
        .iter()
        .enumerate()
        .position(|(f, &a)| a < 0 && Some(f) != unbounded_face)
    {
        return Err(Diagnostic::BadOrientation { face: f + 1 });
    }

    trace!(?unbounded_face, "face orientations checked");
    Ok(OrientationReport {
        signed_areas,
        unbounded_face,
    })
}

/// No mesh vertex may lie on the border of, or strictly inside, a
/// counter-clockwise face unless it is one of that face's corners.
/// Clockwise faces are skipped.
pub fn check_containment<F: AsRef<[usize]>>(
    vertices: &[Point2],
    faces: &[F],
) -> Result<(), Diagnostic> {
    for (f, face) in faces.iter().enumerate() {
        let face = face.as_ref();
        let polygon = polygon_of(vertices, face);
        if signed_area2(&polygon) <= 0 {
            continue;
        }
        let Some(bbox) = Aabb::from_polygon(&polygon) else {
            continue;
        };

        for (v, pt) in vertices.iter().enumerate() {
            if face.contains(&v) || !bbox.contains(pt) {
                continue;
            }
            if point_on_border(pt, &polygon) {
                return Err(Diagnostic::PointOnBorder {
                    vertex: v + 1,
                    face: f + 1,
                });
            }
            if ray_crossings_odd(pt, &polygon) {
                return Err(Diagnostic::PointInside {
                    vertex: v + 1,
                    face: f + 1,
                });
            }
        }
    }

    debug!(faces = faces.len(), "no vertex inside a foreign face");
    Ok(())
}
