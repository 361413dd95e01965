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

#![allow(dead_code)]

use planar_dcel::PlanarMesh;

/// Unit square `(0,0)-(4,4)` as one CCW face plus its clockwise outer face.
pub fn square() -> PlanarMesh {
    PlanarMesh::new(
        [(0, 0), (4, 0), (4, 4), (0, 4)],
        [vec![0, 1, 2, 3], vec![0, 3, 2, 1]],
    )
}

/// The square split along its diagonal `(0,0)-(4,4)` into two CCW
/// triangles, closed by the clockwise outer face.
pub fn split_square() -> PlanarMesh {
    PlanarMesh::new(
        [(0, 0), (4, 0), (4, 4), (0, 4)],
        [vec![0, 1, 2], vec![0, 2, 3], vec![0, 3, 2, 1]],
    )
}

/// 2x2 grid of squares of side 2; vertex `y * 3 + x` sits at `(2x, 2y)`.
/// Faces 0..4 are the cells, row by row; face 4 is the outer face.
pub fn grid() -> PlanarMesh {
    let vertices: Vec<(i32, i32)> = (0..3)
        .flat_map(|y| (0..3).map(move |x| (2 * x, 2 * y)))
        .collect();

    let mut faces: Vec<Vec<usize>> = Vec::new();
    for y in 0..2 {
        for x in 0..2 {
            let v = y * 3 + x;
            faces.push(vec![v, v + 1, v + 4, v + 3]);
        }
    }
    faces.push(vec![0, 3, 6, 7, 8, 5, 2, 1]);

    PlanarMesh::new(vertices, faces)
}
