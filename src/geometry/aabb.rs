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

use crate::geometry::point_2::Point2;

/// An axis-aligned bounding box with inclusive integer bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aabb {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb {
    pub fn new(min: Point2, max: Point2) -> Self {
        Aabb { min, max }
    }

    /// Build the smallest AABB containing two points.
    pub fn from_points(a: &Point2, b: &Point2) -> Self {
        Aabb::new(
            Point2::new(a.x.min(b.x), a.y.min(b.y)),
            Point2::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }

    /// Smallest AABB containing every point, `None` for an empty input.
    pub fn from_polygon<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        Some(it.fold(Aabb::new(*first, *first), |acc, p| acc.expanded(p)))
    }

    pub fn expanded(&self, p: &Point2) -> Aabb {
        Aabb::new(
            Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        )
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        self.expanded(&other.min).expanded(&other.max)
    }

    /// Does this AABB intersect `other`? Touching boxes intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    pub fn contains(&self, p: &Point2) -> bool {
        p.is_within_box(&self.min, &self.max)
    }
}
