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

use num_traits::ToPrimitive;

use crate::geometry::Point2;
use crate::kernel::orientation::Orientation;
use crate::kernel::predicates::on_segment;

/// Iterates the closed boundary `(p[i], p[i + 1 mod n])` of a polygon.
pub fn boundary_edges(polygon: &[Point2]) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| (&polygon[i], &polygon[(i + 1) % n]))
}

/// True iff `pt` lies on one of the polygon's boundary edges.
pub fn point_on_border(pt: &Point2, polygon: &[Point2]) -> bool {
    boundary_edges(polygon).any(|(a, b)| on_segment(a, b, pt))
}

/// Ray casting towards `+x`. Points on the border are never inside.
pub fn point_inside_strict(pt: &Point2, polygon: &[Point2]) -> bool {
    !point_on_border(pt, polygon) && ray_crossings_odd(pt, polygon)
}

/// Parity of the crossings between the ray from `pt` towards `+x` and the
/// polygon boundary. Only meaningful for points off the border.
///
/// Edges follow the half-open convention `(a.y > y) != (b.y > y)`, so a ray
/// through a vertex is counted once and horizontal edges are never crossed.
pub fn ray_crossings_odd(pt: &Point2, polygon: &[Point2]) -> bool {
    let px = f64::from(pt.x);
    let mut crossings = 0usize;

    for (a, b) in boundary_edges(polygon) {
        if (a.y > pt.y) == (b.y > pt.y) {
            continue;
        }
        let dy = i128::from(b.y) - i128::from(a.y);
        if dy == 0 {
            // unreachable under the half-open test, kept so the division below is total
            continue;
        }
        let num = (i128::from(b.x) - i128::from(a.x)) * (i128::from(pt.y) - i128::from(a.y));
        let (Some(num), Some(dy)) = (num.to_f64(), dy.to_f64()) else {
            continue;
        };
        let x_intercept = f64::from(a.x) + num / dy;
        if px < x_intercept {
            crossings += 1;
        }
    }

    crossings % 2 == 1
}

/// `sum (x[i+1] - x[i]) * (y[i+1] + y[i])` over the closed boundary.
///
/// Negative for counter-clockwise polygons, positive for clockwise ones and
/// zero for degenerate (zero-area) ones. Its magnitude is twice the area.
pub fn shoelace_sum(polygon: &[Point2]) -> i128 {
    boundary_edges(polygon)
        .map(|(a, b)| {
            (i128::from(b.x) - i128::from(a.x)) * (i128::from(b.y) + i128::from(a.y))
        })
        .sum()
}

/// Twice the signed area, positive when counter-clockwise.
pub fn signed_area2(polygon: &[Point2]) -> i128 {
    -shoelace_sum(polygon)
}

pub fn winding(polygon: &[Point2]) -> Orientation {
    Orientation::from_determinant(signed_area2(polygon))
}

pub fn is_counter_clockwise(polygon: &[Point2]) -> bool {
    winding(polygon) == Orientation::CounterClockwise
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0, 0),
            Point2::new(4, 0),
            Point2::new(4, 4),
            Point2::new(0, 4),
        ]
    }

    #[test]
    fn centroid_is_inside() {
        let sq = square();
        assert!(point_inside_strict(&Point2::new(2, 2), &sq));
        assert!(!point_on_border(&Point2::new(2, 2), &sq));
    }

    #[test]
    fn border_points_are_not_inside() {
        let sq = square();
        for pt in [Point2::new(0, 0), Point2::new(2, 0), Point2::new(4, 3)] {
            assert!(point_on_border(&pt, &sq));
            assert!(!point_inside_strict(&pt, &sq));
        }
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        // diamond; the ray from (0, 0) passes exactly through vertex (2, 0)
        let diamond = vec![
            Point2::new(0, -2),
            Point2::new(2, 0),
            Point2::new(0, 2),
            Point2::new(-2, 0),
        ];
        assert!(point_inside_strict(&Point2::new(0, 0), &diamond));
        assert!(!point_inside_strict(&Point2::new(-3, 0), &diamond));
    }

    #[test]
    fn ray_along_horizontal_edge() {
        // concave polygon whose bottom edge at y = 2 lies on the ray
        let poly = vec![
            Point2::new(0, 0),
            Point2::new(6, 0),
            Point2::new(6, 6),
            Point2::new(4, 6),
            Point2::new(4, 2),
            Point2::new(2, 2),
            Point2::new(2, 6),
            Point2::new(0, 6),
        ];
        assert!(point_inside_strict(&Point2::new(1, 2), &poly));
        assert!(!point_inside_strict(&Point2::new(3, 4), &poly));
        assert!(point_on_border(&Point2::new(3, 2), &poly));
    }

    #[test]
    fn shoelace_sign_convention() {
        let mut sq = square();
        assert_eq!(shoelace_sum(&sq), -32);
        assert!(is_counter_clockwise(&sq));
        sq.reverse();
        assert_eq!(signed_area2(&sq), -32);
        assert_eq!(winding(&sq), Orientation::Clockwise);
    }

    #[test]
    fn flat_polygon_is_collinear() {
        let flat = vec![Point2::new(0, 0), Point2::new(1, 1), Point2::new(2, 2)];
        assert_eq!(winding(&flat), Orientation::Collinear);
    }
}
