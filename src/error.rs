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

use std::fmt;

use thiserror::Error;

/// Why a mesh is not a valid planar subdivision.
///
/// Every index carried by a diagnostic is 1-based, the same numbering used by
/// the input file. Edges are `(from, to)` vertex pairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("aresta ({},{}) é fronteira de apenas uma face", .edge.0, .edge.1)]
    Open { edge: (usize, usize) },

    #[error("aresta ({},{}) e sua inversa aparecem {count} vezes", .edge.0, .edge.1)]
    NonPlanar { edge: (usize, usize), count: usize },

    #[error("aresta ({},{}) aparece {count} vezes na face {face}", .edge.0, .edge.1)]
    RepeatedEdge {
        edge: (usize, usize),
        face: usize,
        count: usize,
    },

    #[error(
        "face {face} tem auto-intersecção entre arestas ({},{}) e ({},{})",
        .first.0, .first.1, .second.0, .second.1
    )]
    SelfIntersection {
        face: usize,
        first: (usize, usize),
        second: (usize, usize),
    },

    #[error(
        "aresta ({},{}) da face {face_a} intersecta aresta ({},{}) da face {face_b}",
        .edge_a.0, .edge_a.1, .edge_b.0, .edge_b.1
    )]
    CrossIntersection {
        face_a: usize,
        face_b: usize,
        edge_a: (usize, usize),
        edge_b: (usize, usize),
    },

    #[error("face {face} não está no sentido anti-horário")]
    BadOrientation { face: usize },

    #[error("face {face} é degenerada (área zero)")]
    DegenerateFace { face: usize },

    #[error("face {face} tem apenas {count} vértices")]
    TooFewVertices { face: usize, count: usize },

    #[error("face {face} referencia o vértice inexistente {vertex}")]
    UnknownVertex { face: usize, vertex: usize },

    #[error("ponto {vertex} está na borda da face {face}")]
    PointOnBorder { vertex: usize, face: usize },

    #[error("ponto {vertex} está dentro da face {face}")]
    PointInside { vertex: usize, face: usize },
}

/// Coarse classification of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Open,
    NotPlanarSubdivision,
    Overlapping,
    Degenerate,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Verdict::Open => "aberta",
            Verdict::NotPlanarSubdivision => "não subdivisão planar",
            Verdict::Overlapping => "superposta",
            Verdict::Degenerate => "degenerada",
        };
        f.write_str(word)
    }
}

impl Diagnostic {
    pub fn verdict(&self) -> Verdict {
        match self {
            Diagnostic::Open { .. } => Verdict::Open,
            Diagnostic::NonPlanar { .. } | Diagnostic::RepeatedEdge { .. } => {
                Verdict::NotPlanarSubdivision
            }
            Diagnostic::SelfIntersection { .. }
            | Diagnostic::CrossIntersection { .. }
            | Diagnostic::BadOrientation { .. }
            | Diagnostic::PointOnBorder { .. }
            | Diagnostic::PointInside { .. } => Verdict::Overlapping,
            Diagnostic::DegenerateFace { .. }
            | Diagnostic::TooFewVertices { .. }
            | Diagnostic::UnknownVertex { .. } => Verdict::Degenerate,
        }
    }
}

/// Internal inconsistencies found while wiring a DCEL.
///
/// These signal a bug in the validator/builder pairing, never a user error.
/// Indices are 0-based handles into the DCEL arenas.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DcelError {
    #[error("half-edge {origin}->{target} has no twin")]
    UnpairedHalfEdge { origin: usize, target: usize },

    #[error("half-edge {origin}->{target} is produced twice")]
    DuplicateHalfEdge { origin: usize, target: usize },

    #[error("face {face} references vertex {vertex}, but only {vertex_count} exist")]
    UnknownVertex {
        face: usize,
        vertex: usize,
        vertex_count: usize,
    },

    #[error("half-edge {half_edge} breaks the twin symmetry")]
    TwinMismatch { half_edge: usize },

    #[error("half-edge {half_edge} breaks the next/prev linkage")]
    LinkMismatch { half_edge: usize },

    #[error("half-edge {half_edge} does not share the face of its successor")]
    FaceMismatch { half_edge: usize },

    #[error("half-edge {half_edge} ends somewhere other than where its twin starts")]
    OriginMismatch { half_edge: usize },

    #[error("vertex {vertex} points at a half-edge that does not leave it")]
    IncidentMismatch { vertex: usize },

    #[error("{half_edges} half-edges cannot be split into twin pairs")]
    OddHalfEdgeCount { half_edges: usize },
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("unexpected end of input: {0}")]
    UnexpectedEof(&'static str),
}

/// Failure of the validate-then-build pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("{verdict}: {0}", verdict = .0.verdict())]
    Invalid(#[from] Diagnostic),

    #[error("internal DCEL defect: {0}")]
    Defect(#[from] DcelError),
}
