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

use std::fmt;
use std::ops::Sub;

/// Integer point of the plane.
///
/// Coordinates are `i32` so that every predicate built on top of them can be
/// evaluated exactly in `i128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point2 {
    pub x: i32,
    pub y: i32,
}

impl Point2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Axis-aligned bounding box test, inclusive on every side.
    pub fn is_within_box(&self, a: &Point2, b: &Point2) -> bool {
        a.x.min(b.x) <= self.x
            && self.x <= a.x.max(b.x)
            && a.y.min(b.y) <= self.y
            && self.y <= a.y.max(b.y)
    }
}

impl From<(i32, i32)> for Point2 {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Difference of two points, widened so it never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector2 {
    pub x: i128,
    pub y: i128,
}

impl Vector2 {
    /// z component of the 3D cross product.
    pub fn cross(&self, other: &Vector2) -> i128 {
        self.x * other.y - self.y * other.x
    }
}

impl<'a, 'b> Sub<&'b Point2> for &'a Point2 {
    type Output = Vector2;

    fn sub(self, rhs: &'b Point2) -> Vector2 {
        Vector2 {
            x: i128::from(self.x) - i128::from(rhs.x),
            y: i128::from(self.y) - i128::from(rhs.y),
        }
    }
}

impl Sub for Point2 {
    type Output = Vector2;

    fn sub(self, rhs: Point2) -> Vector2 {
        &self - &rhs
    }
}
