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

use crate::geometry::Point2;
use crate::kernel::orientation::{Orientation, orientation};

/// True iff `p` is collinear with `a`-`b` and inside its bounding box.
pub fn on_segment(a: &Point2, b: &Point2, p: &Point2) -> bool {
    p.is_within_box(a, b) && (b - a).cross(&(p - a)) == 0
}

/// True when the closed segments `p1`-`q1` and `p2`-`q2` share a point.
///
/// Touching configurations count: a shared endpoint, an endpoint resting on
/// the other segment and collinear overlap all return `true`. Callers that
/// expect shared endpoints must exclude those pairs themselves.
pub fn segments_intersect(p1: &Point2, q1: &Point2, p2: &Point2, q2: &Point2) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    // General case
    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear cases
    (o1 == Orientation::Collinear && on_segment(p1, q1, p2))
        || (o2 == Orientation::Collinear && on_segment(p1, q1, q2))
        || (o3 == Orientation::Collinear && on_segment(p2, q2, p1))
        || (o4 == Orientation::Collinear && on_segment(p2, q2, q1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn crossing_segments() {
        assert!(segments_intersect(&p(0, 0), &p(4, 4), &p(0, 4), &p(4, 0)));
    }

    #[test]
    fn parallel_segments() {
        assert!(!segments_intersect(&p(0, 0), &p(4, 0), &p(0, 1), &p(4, 1)));
    }

    #[test]
    fn collinear_disjoint_segments() {
        assert!(!segments_intersect(&p(0, 0), &p(2, 0), &p(3, 0), &p(5, 0)));
    }

    #[test]
    fn collinear_overlapping_segments() {
        assert!(segments_intersect(&p(0, 0), &p(3, 0), &p(2, 0), &p(5, 0)));
    }

    #[test]
    fn t_junction_touches() {
        assert!(segments_intersect(&p(0, 0), &p(4, 0), &p(2, 0), &p(2, 3)));
    }

    #[test]
    fn shared_endpoint_touches() {
        assert!(segments_intersect(&p(0, 0), &p(4, 0), &p(4, 0), &p(4, 4)));
    }

    #[test]
    fn on_segment_requires_collinearity() {
        assert!(on_segment(&p(0, 0), &p(4, 4), &p(2, 2)));
        assert!(on_segment(&p(0, 0), &p(4, 4), &p(4, 4)));
        assert!(!on_segment(&p(0, 0), &p(4, 4), &p(2, 3)));
        assert!(!on_segment(&p(0, 0), &p(4, 4), &p(5, 5)));
    }
}
