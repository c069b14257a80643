// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Escape-time Mandelbrot rendering as an ASCII density map.
//!
//! Grid coordinates are produced by repeatedly adding the step to the
//! previous coordinate, not by multiplying an index. Floating-point drift
//! therefore decides the exact column count at the upper bound, and this
//! module preserves that behavior.

use serde::{Deserialize, Serialize};

/// Iteration cap used by the reference programs.
pub const DEFAULT_MAX_ITERATIONS: u32 = 4096;

/// Magnitude beyond which a point is considered escaped.
const ESCAPE_RADIUS: f64 = 2.0;

/// Inclusivity of the grid's upper x bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XBound {
    /// Columns run up to and including `max_x` (the loop limit is `max_x + step`).
    #[default]
    Closed,
    /// Columns stop strictly before `max_x`.
    HalfOpen,
}

/// Region of the complex plane to sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub step: f64,
}

impl Viewport {
    /// The classic view, `x in [-1.5, 0.5]`, `y in [-1.0, 1.0)`.
    pub fn classic(step: f64) -> Self {
        Self {
            min_x: -1.5,
            max_x: 0.5,
            min_y: -1.0,
            max_y: 1.0,
            step,
        }
    }

    /// Classic view sampled `resolution` times per unit.
    pub fn with_resolution(resolution: u32) -> Self {
        Self::classic(1.0 / f64::from(resolution))
    }
}

/// Iterate `Z <- Z^2 + C` from zero and report when `|Z|` first exceeds 2.
///
/// Returns `max_iter` for points that never escape.
pub fn escape(cr: f64, ci: f64, max_iter: u32) -> u32 {
    let mut zr = 0.0f64;
    let mut zi = 0.0f64;
    for iteration in 0..max_iter {
        let new_zr = (zr * zr - zi * zi) + cr;
        let new_zi = 2.0 * (zr * zi) + ci;
        let magnitude = (new_zr * new_zr + new_zi * new_zi).sqrt();
        if magnitude > ESCAPE_RADIUS {
            return iteration;
        }
        zr = new_zr;
        zi = new_zi;
    }
    max_iter
}

/// Two-character glyph for an escape count.
pub fn glyph(iterations: u32) -> &'static str {
    if iterations > 40 {
        "  "
    } else if iterations > 30 {
        "''"
    } else if iterations > 20 {
        "--"
    } else if iterations > 10 {
        "**"
    } else {
        "##"
    }
}

/// Rendered grid plus the escape statistics gathered while drawing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    /// Glyph rows, each terminated by `\n`.
    pub text: String,
    pub rows: usize,
    pub cells: u64,
    pub total_iterations: u64,
}

impl Rendering {
    /// Mean escape count over all cells (0 for an empty grid).
    pub fn average_iterations(&self) -> f64 {
        if self.cells == 0 {
            return 0.0;
        }
        self.total_iterations as f64 / self.cells as f64
    }
}

/// Render `viewport` row by row.
pub fn render(viewport: &Viewport, bound: XBound, max_iter: u32) -> Rendering {
    let x_limit = match bound {
        XBound::Closed => viewport.max_x + viewport.step,
        XBound::HalfOpen => viewport.max_x,
    };

    let mut rendering = Rendering {
        text: String::new(),
        rows: 0,
        cells: 0,
        total_iterations: 0,
    };

    let mut y = viewport.min_y;
    while y < viewport.max_y {
        let mut x = viewport.min_x;
        while x < x_limit {
            let iterations = escape(x, y, max_iter);
            rendering.text.push_str(glyph(iterations));
            rendering.cells += 1;
            rendering.total_iterations += u64::from(iterations);
            x += viewport.step;
        }
        rendering.text.push('\n');
        rendering.rows += 1;
        y += viewport.step;
    }

    tracing::debug!(
        rows = rendering.rows,
        cells = rendering.cells,
        average = rendering.average_iterations(),
        "Mandelbrot rendered"
    );
    rendering
}
