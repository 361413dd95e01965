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

/// Directed edge `from -> to` between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectedEdge {
    pub from: usize,
    pub to: usize,
}

impl DirectedEdge {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.to, self.from)
    }

    pub fn undirected(&self) -> UndirectedEdge {
        UndirectedEdge::new(self.from, self.to)
    }

    pub fn shares_vertex(&self, other: &DirectedEdge) -> bool {
        self.from == other.from
            || self.from == other.to
            || self.to == other.from
            || self.to == other.to
    }

    /// 1-based `(from, to)` pair as reported to users.
    pub fn external(&self) -> (usize, usize) {
        (self.from + 1, self.to + 1)
    }
}

/// Unordered vertex pair, stored with `a <= b` so that both traversal
/// directions map to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UndirectedEdge {
    pub a: usize,
    pub b: usize,
}

impl UndirectedEdge {
    pub fn new(v1: usize, v2: usize) -> Self {
        if v1 <= v2 {
            Self { a: v1, b: v2 }
        } else {
            Self { a: v2, b: v1 }
        }
    }

    /// True when `edge` runs from `a` to `b`.
    pub fn is_forward(&self, edge: &DirectedEdge) -> bool {
        edge.from == self.a && edge.to == self.b
    }

    pub fn external(&self) -> (usize, usize) {
        (self.a + 1, self.b + 1)
    }
}

/// Cyclic boundary edges of a face given as vertex indices.
pub fn face_edges(face: &[usize]) -> impl Iterator<Item = DirectedEdge> + '_ {
    let n = face.len();
    (0..n).map(move |i| DirectedEdge::new(face[i], face[(i + 1) % n]))
}
