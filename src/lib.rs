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

//! Validation of planar polygon meshes and their conversion into a
//! doubly-connected edge list.
//!
//! A mesh is a list of integer vertices plus faces given as cyclic lists of
//! vertex indices. [`validate_mesh`] accepts it only if it is a closed,
//! non-overlapping planar subdivision; [`build_dcel`] then wires the
//! half-edge structure.

pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod mesh;
pub mod validation;

pub use error::{DcelError, Diagnostic, MeshError, ReadError, Verdict};
pub use geometry::Point2;
pub use mesh::{Dcel, PlanarMesh, build_dcel};
pub use validation::validate_mesh;
