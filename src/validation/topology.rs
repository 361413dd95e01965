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

use std::collections::BTreeMap;

use smallvec::SmallVec;
use tracing::debug;

use crate::error::Diagnostic;
use crate::mesh::edge::{DirectedEdge, UndirectedEdge, face_edges};

/// One traversal of an undirected edge by a face boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub face: usize,
    /// True when the face walks the edge from its lower to its higher vertex.
    pub forward: bool,
}

impl Occurrence {
    pub fn directed(&self, edge: &UndirectedEdge) -> DirectedEdge {
        if self.forward {
            DirectedEdge::new(edge.a, edge.b)
        } else {
            DirectedEdge::new(edge.b, edge.a)
        }
    }
}

/// How the faces of a mesh use one undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStatus {
    /// Two traversals, opposite directions, distinct faces.
    Paired,
    /// Only one face borders the edge.
    Open,
    /// Two traversals in the same direction; no face walks it backwards.
    Unmatched,
    /// A single face walks the edge more than once.
    Repeated { face: usize, count: usize },
    /// More than two traversals.
    Crowded(usize),
}

impl EdgeStatus {
    pub fn of(occurrences: &[Occurrence]) -> Self {
        for (i, occ) in occurrences.iter().enumerate() {
            let count = occurrences[i..]
                .iter()
                .filter(|o| o.face == occ.face)
                .count();
            if count > 1 {
                return EdgeStatus::Repeated {
                    face: occ.face,
                    count,
                };
            }
        }

        match occurrences {
            [_] => EdgeStatus::Open,
            [a, b] if a.forward == b.forward => EdgeStatus::Unmatched,
            [_, _] => EdgeStatus::Paired,
            many => EdgeStatus::Crowded(many.len()),
        }
    }
}

/// Every undirected edge of a mesh with the faces that traverse it, in
/// ascending `(a, b)` order.
#[derive(Debug, Clone, Default)]
pub struct EdgeCensus {
    edges: BTreeMap<UndirectedEdge, SmallVec<[Occurrence; 2]>>,
}

/// Successful outcome of the topology check: every edge is shared by
/// exactly two faces walking it in opposite directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopologyReport {
    pub edge_count: usize,
    pub half_edge_count: usize,
}

impl EdgeCensus {
    pub fn new<F: AsRef<[usize]>>(faces: &[F]) -> Self {
        let mut edges: BTreeMap<UndirectedEdge, SmallVec<[Occurrence; 2]>> = BTreeMap::new();
        for (face, boundary) in faces.iter().enumerate() {
            for edge in face_edges(boundary.as_ref()) {
                let key = edge.undirected();
                edges.entry(key).or_default().push(Occurrence {
                    face,
                    forward: key.is_forward(&edge),
                });
            }
        }
        Self { edges }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn occurrences(&self, edge: &UndirectedEdge) -> &[Occurrence] {
        self.edges.get(edge).map(|occ| occ.as_slice()).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UndirectedEdge, &[Occurrence])> {
        self.edges.iter().map(|(edge, occ)| (edge, occ.as_slice()))
    }

    pub fn status(&self, edge: &UndirectedEdge) -> Option<EdgeStatus> {
        self.edges.get(edge).map(|occ| EdgeStatus::of(occ))
    }

    /// Classifies the whole census.
    ///
    /// A face repeating one of its own edges is looked for first, over the
    /// full census. Then the first edge, in ascending order, that is not
    /// shared by exactly two opposite traversals decides the outcome.
    pub fn check(&self) -> Result<TopologyReport, Diagnostic> {
        for (edge, occ) in self.iter() {
            if let EdgeStatus::Repeated { face, count } = EdgeStatus::of(occ) {
                let first = occ.iter().find(|o| o.face == face).unwrap_or(&occ[0]);
                return Err(Diagnostic::RepeatedEdge {
                    edge: first.directed(edge).external(),
                    face: face + 1,
                    count,
                });
            }
        }

        let mut half_edge_count = 0;
        for (edge, occ) in self.iter() {
            match EdgeStatus::of(occ) {
                EdgeStatus::Paired => half_edge_count += 2,
                EdgeStatus::Open | EdgeStatus::Unmatched => {
                    return Err(Diagnostic::Open {
                        edge: occ[0].directed(edge).external(),
                    });
                }
                EdgeStatus::Crowded(count) | EdgeStatus::Repeated { count, .. } => {
                    return Err(Diagnostic::NonPlanar {
                        edge: occ[0].directed(edge).external(),
                        count,
                    });
                }
            }
        }

        debug!(edges = self.len(), "edge census closed and planar");
        Ok(TopologyReport {
            edge_count: self.len(),
            half_edge_count,
        })
    }
}

/// Edge-pairing check over the face lists alone; no coordinates are needed.
pub fn check_topology<F: AsRef<[usize]>>(faces: &[F]) -> Result<TopologyReport, Diagnostic> {
    EdgeCensus::new(faces).check()
}
