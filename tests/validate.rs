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

mod helpers;

use planar_dcel::kernel::{Orientation, winding};
use planar_dcel::validation::{check_orientation, check_topology};
use planar_dcel::{Diagnostic, MeshError, PlanarMesh, Verdict, validate_mesh};

fn square_with(extra: (i32, i32)) -> PlanarMesh {
    PlanarMesh::new(
        [(0, 0), (4, 0), (4, 4), (0, 4), extra],
        [vec![0, 1, 2, 3], vec![0, 3, 2, 1]],
    )
}

#[test]
fn test_lone_triangle_is_open() {
    let mesh = PlanarMesh::new([(0, 0), (4, 0), (0, 4)], [vec![0, 1, 2]]);
    let err = mesh.validate().unwrap_err();
    assert_eq!(err, Diagnostic::Open { edge: (1, 2) });
    assert_eq!(err.verdict(), Verdict::Open);
    assert_eq!(
        err.to_string(),
        "aresta (1,2) é fronteira de apenas uma face"
    );
}

#[test]
fn test_split_square_with_outer_face_is_valid() {
    let mesh = helpers::split_square();
    assert_eq!(mesh.validate(), Ok(()));

    // without the outer face every boundary edge is open
    let inner_only = PlanarMesh::new(mesh.vertices.clone(), &mesh.faces[..2]);
    assert_eq!(
        inner_only.validate(),
        Err(Diagnostic::Open { edge: (1, 2) })
    );
}

#[test]
fn test_grid_is_valid() {
    let mesh = helpers::grid();
    assert_eq!(mesh.validate(), Ok(()));

    let report = check_orientation(&mesh.vertices, &mesh.faces).unwrap();
    assert_eq!(report.unbounded_face, Some(4));
    assert!(report.signed_areas[..4].iter().all(|&a| a == 8));
    assert_eq!(report.signed_areas[4], -32);
    assert_eq!(report.orientation(4), Orientation::Clockwise);
    assert_eq!(winding(&mesh.face_polygon(0)), Orientation::CounterClockwise);
}

#[test]
fn test_repeated_consecutive_vertex_is_degenerate() {
    let mesh = PlanarMesh::new(
        [(0, 0), (4, 0), (4, 4), (0, 4), (2, 6)],
        [vec![0, 1, 2, 4, 4, 3], vec![0, 3, 4, 2, 1]],
    );
    let err = mesh.validate().unwrap_err();
    assert_eq!(err, Diagnostic::DegenerateFace { face: 1 });
    assert_eq!(err.verdict(), Verdict::Degenerate);
}

#[test]
fn test_zero_area_faces_are_degenerate() {
    // closed and pairwise consistent, but both faces are flat
    let faces: Vec<Vec<usize>> = vec![vec![0, 1, 2], vec![0, 2, 1]];
    assert!(check_topology(&faces).is_ok());
    let mesh = PlanarMesh::new([(0, 0), (2, 0), (4, 0)], faces);
    assert_eq!(
        mesh.validate(),
        Err(Diagnostic::DegenerateFace { face: 1 })
    );
}

#[test]
fn test_structural_faults() {
    let mesh = PlanarMesh::new([(0, 0), (4, 0), (0, 4)], [vec![0, 1]]);
    assert_eq!(
        mesh.validate(),
        Err(Diagnostic::TooFewVertices { face: 1, count: 2 })
    );

    let mesh = PlanarMesh::new([(0, 0), (4, 0), (0, 4)], [vec![0, 1, 2], vec![0, 2, 7]]);
    assert_eq!(
        mesh.validate(),
        Err(Diagnostic::UnknownVertex { face: 2, vertex: 8 })
    );
}

#[test]
fn test_centroid_vertex_is_inside() {
    let err = square_with((2, 2)).validate().unwrap_err();
    assert_eq!(err, Diagnostic::PointInside { vertex: 5, face: 1 });
    assert_eq!(err.verdict(), Verdict::Overlapping);
}

#[test]
fn test_vertex_on_edge_is_on_border() {
    assert_eq!(
        square_with((2, 0)).validate(),
        Err(Diagnostic::PointOnBorder { vertex: 5, face: 1 })
    );
}

#[test]
fn test_vertex_outside_is_ignored() {
    assert_eq!(square_with((9, 9)).validate(), Ok(()));
}

#[test]
fn test_edge_shared_by_three_faces() {
    let mesh = PlanarMesh::new(
        [(0, 0), (4, 0), (2, 3), (2, -3), (2, 6)],
        [vec![0, 1, 2], vec![1, 0, 3], vec![0, 1, 4]],
    );
    let err = mesh.validate().unwrap_err();
    assert_eq!(err, Diagnostic::NonPlanar { edge: (1, 2), count: 3 });
    assert_eq!(err.verdict(), Verdict::NotPlanarSubdivision);
}

#[test]
fn test_bowtie_self_intersection() {
    let mesh = PlanarMesh::new(
        [(0, 0), (4, 4), (4, 0), (0, 4)],
        [vec![0, 1, 2, 3], vec![0, 3, 2, 1]],
    );
    assert_eq!(
        mesh.validate(),
        Err(Diagnostic::SelfIntersection {
            face: 1,
            first: (1, 2),
            second: (3, 4),
        })
    );
}

#[test]
fn test_overlapping_squares_cross() {
    let mesh = PlanarMesh::new(
        [
            (0, 0),
            (4, 0),
            (4, 4),
            (0, 4),
            (2, 2),
            (6, 2),
            (6, 6),
            (2, 6),
        ],
        [
            vec![0, 1, 2, 3],
            vec![0, 3, 2, 1],
            vec![4, 5, 6, 7],
            vec![4, 7, 6, 5],
        ],
    );
    let err = mesh.validate().unwrap_err();
    assert_eq!(
        err,
        Diagnostic::CrossIntersection {
            face_a: 1,
            face_b: 3,
            edge_a: (2, 3),
            edge_b: (5, 6),
        }
    );
    assert_eq!(err.verdict(), Verdict::Overlapping);
}

#[test]
fn test_second_clockwise_face_is_badly_oriented() {
    let mesh = PlanarMesh::new(
        [
            (0, 0),
            (4, 0),
            (4, 4),
            (0, 4),
            (10, 0),
            (14, 0),
            (14, 4),
            (10, 4),
        ],
        [
            vec![0, 1, 2, 3],
            vec![0, 3, 2, 1],
            vec![4, 5, 6, 7],
            vec![4, 7, 6, 5],
        ],
    );
    assert_eq!(
        mesh.validate(),
        Err(Diagnostic::BadOrientation { face: 4 })
    );
}

#[test]
fn test_unbounded_face_is_found_anywhere() {
    // outer face listed first; no index is special
    let mesh = PlanarMesh::new(
        [(0, 0), (4, 0), (4, 4), (0, 4)],
        [vec![0, 3, 2, 1], vec![0, 1, 2], vec![0, 2, 3]],
    );
    assert_eq!(mesh.validate(), Ok(()));
    let report = check_orientation(&mesh.vertices, &mesh.faces).unwrap();
    assert_eq!(report.unbounded_face, Some(0));
}

#[test]
fn test_inner_face_wound_clockwise() {
    // both triangles reversed and the outer face counter-clockwise; the
    // first triangle is taken as unbounded, the second is rejected
    let mesh = PlanarMesh::new(
        [(0, 0), (4, 0), (4, 4), (0, 4)],
        [vec![0, 2, 1], vec![0, 3, 2], vec![0, 1, 2, 3]],
    );
    assert_eq!(
        mesh.validate(),
        Err(Diagnostic::BadOrientation { face: 2 })
    );
}

#[test]
fn test_validation_is_repeatable() {
    let invalid = square_with((2, 2));
    assert_eq!(invalid.validate(), invalid.validate());

    let valid = helpers::grid();
    assert_eq!(valid.validate(), Ok(()));
    assert_eq!(valid.validate(), Ok(()));
    assert_eq!(
        validate_mesh(&valid.vertices, &valid.faces),
        valid.validate()
    );
}

#[test]
fn test_pipeline_reports_invalid_mesh() {
    let mesh = PlanarMesh::new([(0, 0), (4, 0), (0, 4)], [vec![0, 1, 2]]);
    let err = mesh.to_dcel().unwrap_err();
    assert_eq!(err, MeshError::Invalid(Diagnostic::Open { edge: (1, 2) }));
    assert_eq!(
        err.to_string(),
        "aberta: aresta (1,2) é fronteira de apenas uma face"
    );
}

#[test]
fn test_verdict_words() {
    assert_eq!(Verdict::Open.to_string(), "aberta");
    assert_eq!(
        Verdict::NotPlanarSubdivision.to_string(),
        "não subdivisão planar"
    );
    assert_eq!(Verdict::Overlapping.to_string(), "superposta");
    assert_eq!(Verdict::Degenerate.to_string(), "degenerada");
}
