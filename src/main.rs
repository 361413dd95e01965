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

mod cli;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use planar_dcel::{
    MeshError,
    io::{read_mesh, read_mesh_file, write_dcel, write_dcel_report, write_mesh_report},
};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mesh = match &cli.input {
        Some(path) => {
            read_mesh_file(path).with_context(|| format!("reading mesh from {}", path.display()))?
        }
        None => read_mesh(io::stdin().lock()).context("reading mesh from standard input")?,
    };

    let verbose = cli.verbose > 0;
    let mut err = io::stderr().lock();
    if verbose || cli.debug {
        write_mesh_report(&mesh, cli.debug, &mut err)?;
    }

    let mut out = io::stdout().lock();
    match mesh.to_dcel() {
        Ok(dcel) => {
            if verbose {
                write_dcel_report(&dcel, &mut err)?;
            }
            write_dcel(&dcel, &mut out)?;
        }
        Err(MeshError::Invalid(diagnostic)) => {
            writeln!(out, "{}", diagnostic.verdict())?;
            if verbose {
                writeln!(err, "{diagnostic}")?;
            }
        }
        Err(MeshError::Defect(defect)) => {
            return Err(defect).context("mesh passed validation but its DCEL is inconsistent");
        }
    }

    out.flush()?;
    Ok(())
}
