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

use std::io::{self, Write};

use crate::{
    mesh::{basic_types::Dcel, planar::PlanarMesh},
    validation::topology::{EdgeCensus, EdgeStatus},
};

/// Human-readable dump of an input mesh, 1-based like the input file.
/// With `census`, every undirected edge is listed with its traversal status.
pub fn write_mesh_report<W: Write>(mesh: &PlanarMesh, census: bool, out: &mut W) -> io::Result<()> {
    writeln!(out, "vertices ({}):", mesh.vertex_count())?;
    for (i, v) in mesh.vertices.iter().enumerate() {
        writeln!(out, "  v{}: {}", i + 1, v)?;
    }

    writeln!(out, "faces ({}):", mesh.face_count())?;
    for (f, face) in mesh.faces.iter().enumerate() {
        let cycle: Vec<String> = face
            .iter()
            .chain(face.first())
            .map(|v| (v + 1).to_string())
            .collect();
        writeln!(out, "  f{}: {}", f + 1, cycle.join(" -> "))?;
    }

    if !census {
        return Ok(());
    }

    let census = EdgeCensus::new(&mesh.faces);
    let mut paired = 0usize;
    writeln!(out, "edges ({}):", census.len())?;
    for (edge, occ) in census.iter() {
        let status = EdgeStatus::of(occ);
        let faces: Vec<String> = occ.iter().map(|o| (o.face + 1).to_string()).collect();
        let note = match status {
            EdgeStatus::Paired => {
                paired += 1;
                "ok".to_string()
            }
            EdgeStatus::Open => "open".to_string(),
            EdgeStatus::Unmatched => "no reverse traversal".to_string(),
            EdgeStatus::Repeated { face, count } => format!("{count}x in face {}", face + 1),
            EdgeStatus::Crowded(n) => format!("{n} traversals"),
        };
        writeln!(
            out,
            "  ({},{}) faces [{}]: {}",
            edge.a + 1,
            edge.b + 1,
            faces.join(", "),
            note
        )?;
    }
    writeln!(
        out,
        "paired edges: {paired}, unpaired edges: {}",
        census.len() - paired
    )
}

/// Human-readable dump of a DCEL, 1-based like [`super::dcel_file::write_dcel`].
pub fn write_dcel_report<W: Write>(dcel: &Dcel, out: &mut W) -> io::Result<()> {
    writeln!(out, "vertices ({}):", dcel.vertex_count())?;
    for (i, v) in dcel.vertices().iter().enumerate() {
        match v.half_edge {
            Some(he) => writeln!(out, "  v{}: {} leaves by e{}", i + 1, v.position, he + 1)?,
            None => writeln!(out, "  v{}: {} isolated", i + 1, v.position)?,
        }
    }

    writeln!(out, "half-edges ({}):", dcel.half_edge_count())?;
    for (i, he) in dcel.half_edges().iter().enumerate() {
        writeln!(
            out,
            "  e{}: v{} -> v{} twin e{} face f{}",
            i + 1,
            he.origin + 1,
            dcel.target(i) + 1,
            he.twin + 1,
            he.face + 1
        )?;
    }

    writeln!(out, "faces ({}):", dcel.face_count())?;
    for f in 0..dcel.face_count() {
        let boundary: Vec<String> = dcel
            .face_vertices(f)
            .iter()
            .map(|v| format!("v{}", v + 1))
            .collect();
        let adjacent: Vec<String> = dcel
            .adjacent_faces(f)
            .iter()
            .map(|g| format!("f{}", g + 1))
            .collect();
        writeln!(
            out,
            "  f{}: [{}] adjacent to [{}]",
            f + 1,
            boundary.join(" "),
            adjacent.join(" ")
        )?;
    }
    Ok(())
}
