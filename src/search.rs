// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Minimum-energy seam search.
//!
//! The energy grid is an implicit DAG: each cell at `(x, y)` has edges
//! down to `(x-1, y+1)`, `(x, y+1)` and `(x+1, y+1)`, weighted by the
//! destination's energy.  Because rows are already a topological order,
//! one top-to-bottom relaxation sweep finds the shortest top-to-bottom
//! path.  The search always works in vertical framing; the carver
//! transposes its grids first when a horizontal seam is wanted.

use crate::plane::Plane;

// Best known distance to a cell, plus the column in the row above the
// path came through.
#[derive(Default, Debug, Copy, Clone)]
struct Relaxed {
    dist: f64,
    parent: u32,
}

/// Given an energy grid, return the column index of the minimum-energy
/// seam for every row, top to bottom.
///
/// Every starting column is equally valid, so row 0 begins at distance
/// zero.  Relaxation uses strictly-lower comparisons throughout: on
/// ties, whichever candidate was reached first keeps the cell.
pub fn find_seam(energy: &Plane<f64>) -> Vec<u32> {
    let (width, height) = (energy.width(), energy.height());

    let mut table = Plane::from_fn(width, height, |_, y| Relaxed {
        dist: if y == 0 { 0.0 } else { f64::INFINITY },
        parent: 0,
    });

    for y in 0..height - 1 {
        for x in 0..width {
            let base = table[(x, y)].dist;
            // Successors relax left-diagonal, straight, right-diagonal.
            let lo = x.saturating_sub(1);
            let hi = (x + 1).min(width - 1);
            for nx in lo..=hi {
                let candidate = base + energy[(nx, y + 1)];
                let cell = &mut table[(nx, y + 1)];
                if candidate < cell.dist {
                    cell.dist = candidate;
                    cell.parent = x;
                }
            }
        }
    }

    // First-found minimum in the bottom row wins.
    let mut best = 0;
    for x in 1..width {
        if table[(x, height - 1)].dist < table[(best, height - 1)].dist {
            best = x;
        }
    }

    // Trace parents back up to row 0.
    let mut seam = vec![0u32; height as usize];
    let mut col = best;
    for y in (0..height).rev() {
        seam[y as usize] = col;
        if y > 0 {
            col = table[(col, y)].parent;
        }
    }
    seam
}
