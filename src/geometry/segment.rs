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
use crate::kernel::predicates::{on_segment, segments_intersect};

/// Closed segment between two borrowed points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment2<'a> {
    pub a: &'a Point2,
    pub b: &'a Point2,
}

impl<'a> Segment2<'a> {
    pub fn new(a: &'a Point2, b: &'a Point2) -> Self {
        Self { a, b }
    }

    pub fn contains_point(&self, p: &Point2) -> bool {
        on_segment(self.a, self.b, p)
    }

    /// True when the two closed segments share at least one point.
    pub fn intersects(&self, other: &Segment2<'_>) -> bool {
        segments_intersect(self.a, self.b, other.a, other.b)
    }

    pub fn inverse(&self) -> Self {
        Self::new(self.b, self.a)
    }

    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}
