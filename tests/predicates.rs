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

use planar_dcel::geometry::{Point2, Segment2};
use planar_dcel::kernel::{
    Orientation, orient2d, orientation, point_inside_strict, point_on_border, segments_intersect,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_point(rng: &mut StdRng, range: i32) -> Point2 {
    Point2::new(rng.random_range(-range..=range), rng.random_range(-range..=range))
}

#[test]
fn test_orientation_is_invariant_under_rotation() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..2_000 {
        let (p, q, r) = (
            random_point(&mut rng, 50),
            random_point(&mut rng, 50),
            random_point(&mut rng, 50),
        );
        let o = orientation(&p, &q, &r);
        assert_eq!(orientation(&q, &r, &p), o);
        assert_eq!(orientation(&r, &p, &q), o);
    }
}

#[test]
fn test_orientation_flips_under_swap() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..2_000 {
        let (p, q, r) = (
            random_point(&mut rng, 1_000),
            random_point(&mut rng, 1_000),
            random_point(&mut rng, 1_000),
        );
        let o = orientation(&p, &q, &r);
        assert_eq!(orientation(&q, &p, &r), o.reversed());
        assert_eq!(orientation(&p, &r, &q), o.reversed());
        assert_eq!(orientation(&r, &q, &p), o.reversed());
    }
}

#[test]
fn test_collinear_in_every_order() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let p = random_point(&mut rng, 1_000);
        let d = random_point(&mut rng, 100);
        let q = Point2::new(p.x + d.x, p.y + d.y);
        let r = Point2::new(p.x + 3 * d.x, p.y + 3 * d.y);
        for (a, b, c) in [
            (p, q, r),
            (p, r, q),
            (q, p, r),
            (q, r, p),
            (r, p, q),
            (r, q, p),
        ] {
            assert_eq!(orientation(&a, &b, &c), Orientation::Collinear);
        }
    }
}

#[test]
fn test_orient2d_matches_orientation() {
    let a = Point2::new(1, 1);
    let b = Point2::new(5, 2);
    let c = Point2::new(2, 6);
    assert!(orient2d(&a, &b, &c) > 0);
    assert_eq!(orientation(&a, &b, &c), Orientation::CounterClockwise);
    assert!(orient2d(&a, &c, &b) < 0);
    assert_eq!(orientation(&a, &c, &b), Orientation::Clockwise);
}

#[test]
fn test_segment_intersection_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..2_000 {
        let (a, b, c, d) = (
            random_point(&mut rng, 8),
            random_point(&mut rng, 8),
            random_point(&mut rng, 8),
            random_point(&mut rng, 8),
        );
        let hit = segments_intersect(&a, &b, &c, &d);
        assert_eq!(segments_intersect(&c, &d, &a, &b), hit);
        assert_eq!(segments_intersect(&b, &a, &d, &c), hit);
        assert_eq!(Segment2::new(&a, &b).intersects(&Segment2::new(&d, &c)), hit);
    }
}

#[test]
fn test_segment_contains_point() {
    let a = Point2::new(-2, -1);
    let b = Point2::new(6, 3);
    let seg = Segment2::new(&a, &b);
    assert!(seg.contains_point(&Point2::new(2, 1)));
    assert!(seg.contains_point(&Point2::new(6, 3)));
    assert!(!seg.contains_point(&Point2::new(8, 4)));
    assert!(!seg.contains_point(&Point2::new(2, 2)));
    assert!(!seg.is_degenerate());
    assert_eq!(seg.inverse().a, &b);
}

#[test]
fn test_convex_polygon_centroid_and_outward_offsets() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..300 {
        let x0 = rng.random_range(-100..100);
        let y0 = rng.random_range(-100..100);
        let w = 2 * rng.random_range(1..50);
        let h = 2 * rng.random_range(1..50);
        let rect = [
            Point2::new(x0, y0),
            Point2::new(x0 + w, y0),
            Point2::new(x0 + w, y0 + h),
            Point2::new(x0, y0 + h),
        ];

        let centroid = Point2::new(x0 + w / 2, y0 + h / 2);
        assert!(point_inside_strict(&centroid, &rect));
        assert!(!point_on_border(&centroid, &rect));

        // one unit past each edge midpoint, along the outward normal
        for outside in [
            Point2::new(x0 + w / 2, y0 - 1),
            Point2::new(x0 + w + 1, y0 + h / 2),
            Point2::new(x0 + w / 2, y0 + h + 1),
            Point2::new(x0 - 1, y0 + h / 2),
        ] {
            assert!(!point_inside_strict(&outside, &rect));
            assert!(!point_on_border(&outside, &rect));
        }
    }
}

#[test]
fn test_triangle_corners_are_on_border_not_inside() {
    let tri = [Point2::new(0, 0), Point2::new(4, 0), Point2::new(0, 4)];
    for corner in &tri {
        assert!(point_on_border(corner, &tri));
        assert!(!point_inside_strict(corner, &tri));
    }
    assert!(point_on_border(&Point2::new(2, 2), &tri));
    assert!(point_inside_strict(&Point2::new(1, 1), &tri));
}
