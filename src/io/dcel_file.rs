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

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::mesh::basic_types::Dcel;

/// Write a DCEL in the tabular text layout.
/// Format (every index 1-based, 0 meaning "none"):
///   <numVertices> <numEdges> <numFaces>
///   x y incidentHalfEdge                   (one line per vertex)
///   outerComponent                         (one line per face)
///   origin twin face next prev             (one line per half-edge)
pub fn write_dcel<W: Write>(dcel: &Dcel, out: &mut W) -> io::Result<()> {
    fn one_based(idx: Option<usize>) -> usize {
        idx.map_or(0, |i| i + 1)
    }

    writeln!(
        out,
        "{} {} {}",
        dcel.vertex_count(),
        dcel.edge_count(),
        dcel.face_count()
    )?;

    for v in dcel.vertices() {
        writeln!(
            out,
            "{} {} {}",
            v.position.x,
            v.position.y,
            one_based(v.half_edge)
        )?;
    }

    for f in dcel.faces() {
        writeln!(out, "{}", one_based(f.outer_component))?;
    }

    for he in dcel.half_edges() {
        writeln!(
            out,
            "{} {} {} {} {}",
            he.origin + 1,
            he.twin + 1,
            he.face + 1,
            he.next + 1,
            he.prev + 1
        )?;
    }

    Ok(())
}

pub fn write_dcel_file<P: AsRef<Path>>(dcel: &Dcel, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_dcel(dcel, &mut out)?;
    out.flush()
}
