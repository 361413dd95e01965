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
    io::{self, BufRead, BufReader, Write},
    path::Path,
    str::FromStr,
};

use crate::{
    error::ReadError,
    geometry::Point2,
    mesh::planar::{FaceLoop, PlanarMesh},
};

/// Read a mesh in the plain text format.
/// Format:
///   n f
///   x y            (n lines)
///   i j k ...      (f lines, 1-based vertex numbers)
///
/// Blank lines and `#` comments are ignored. Vertex numbers are converted to
/// 0-based indices; a number outside `1..=n` is rejected here.
pub fn read_mesh<R: BufRead>(reader: R) -> Result<PlanarMesh, ReadError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|l| (i + 1, l)))
        .filter(|res| match res {
            Ok((_, l)) => !strip_comment(l).trim().is_empty(),
            Err(_) => true,
        });

    let (line_no, header) = lines
        .next()
        .ok_or(ReadError::UnexpectedEof("missing header"))??;
    let counts: Vec<usize> = parse_tokens(line_no, &header)?;
    let &[vertex_count, face_count] = counts.as_slice() else {
        return Err(syntax(line_no, "header must be `<vertices> <faces>`"));
    };

    let mut vertices = Vec::with_capacity(vertex_count.min(1 << 16));
    for _ in 0..vertex_count {
        let (line_no, line) = lines
            .next()
            .ok_or(ReadError::UnexpectedEof("incomplete vertex list"))??;
        let coords: Vec<i32> = parse_tokens(line_no, &line)?;
        let &[x, y] = coords.as_slice() else {
            return Err(syntax(line_no, "vertex must be `<x> <y>`"));
        };
        vertices.push(Point2::new(x, y));
    }

    let mut faces = Vec::with_capacity(face_count.min(1 << 16));
    for _ in 0..face_count {
        let (line_no, line) = lines
            .next()
            .ok_or(ReadError::UnexpectedEof("incomplete face list"))??;
        let numbers: Vec<usize> = parse_tokens(line_no, &line)?;
        let face = numbers
            .into_iter()
            .map(|v| {
                if (1..=vertex_count).contains(&v) {
                    Ok(v - 1)
                } else {
                    Err(syntax(
                        line_no,
                        &format!("vertex {v} outside 1..={vertex_count}"),
                    ))
                }
            })
            .collect::<Result<FaceLoop, _>>()?;
        faces.push(face);
    }

    Ok(PlanarMesh { vertices, faces })
}

pub fn read_mesh_file<P: AsRef<Path>>(path: P) -> Result<PlanarMesh, ReadError> {
    let file = File::open(path)?;
    read_mesh(BufReader::new(file))
}

/// Write a mesh in the format accepted by [`read_mesh`].
pub fn write_mesh<W: Write>(mesh: &PlanarMesh, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} {}", mesh.vertices.len(), mesh.faces.len())?;
    for v in &mesh.vertices {
        writeln!(out, "{} {}", v.x, v.y)?;
    }
    for face in &mesh.faces {
        let numbers: Vec<String> = face.iter().map(|v| (v + 1).to_string()).collect();
        writeln!(out, "{}", numbers.join(" "))?;
    }
    Ok(())
}

fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or("")
}

fn parse_tokens<T: FromStr>(line_no: usize, line: &str) -> Result<Vec<T>, ReadError> {
    strip_comment(line)
        .split_whitespace()
        .map(|tok| {
            tok.parse()
                .map_err(|_| syntax(line_no, &format!("bad number `{tok}`")))
        })
        .collect()
}

fn syntax(line: usize, message: &str) -> ReadError {
    ReadError::Syntax {
        line,
        message: message.to_string(),
    }
}
