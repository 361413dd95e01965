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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Collinear => Orientation::Collinear,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }

    pub fn from_determinant(det: i128) -> Self {
        match det.signum() {
            0 => Orientation::Collinear,
            1 => Orientation::CounterClockwise,
            _ => Orientation::Clockwise,
        }
    }
}

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
///
/// Exact for every `i32` input.
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> i128 {
    (b - a).cross(&(c - a))
}

/// Turn direction of the path `p -> q -> r`, from the sign of `(q - p) x (r - q)`.
pub fn orientation(p: &Point2, q: &Point2, r: &Point2) -> Orientation {
    Orientation::from_determinant((q - p).cross(&(r - q)))
}
