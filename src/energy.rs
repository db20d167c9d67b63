// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The dual-gradient energy of a pixel grid.
//!
//! Energy marks how visually important a pixel is: high energy means
//! high local contrast, which the seam search will route around.  An
//! interior pixel's energy is the square root of the sum of its
//! horizontal and vertical neighbor-pair gradients.  Border pixels are
//! pinned to a fixed sentinel so that seams never prefer the frame of
//! the image over its content.

use crate::color;
use crate::plane::Plane;

/// The fixed energy of every pixel on the outer edge of the grid.
pub const BORDER_ENERGY: f64 = 1000.0;

/// Dual-gradient energy of the pixel at `(x, y)`.
///
/// The coordinate must lie within the plane; the caller is the carver,
/// which maintains that invariant.
pub fn pixel_energy(colors: &Plane<u32>, x: u32, y: u32) -> f64 {
    if x == 0 || y == 0 || x == colors.width() - 1 || y == colors.height() - 1 {
        return BORDER_ENERGY;
    }

    let horizontal = color::gradient(colors[(x - 1, y)], colors[(x + 1, y)]);
    let vertical = color::gradient(colors[(x, y - 1)], colors[(x, y + 1)]);
    (horizontal + vertical).sqrt()
}

/// Compute the energy of every pixel in the grid.  Done once when the
/// carver is built; afterwards, removal repairs only the cells whose
/// neighbor set changed.
pub fn energy_plane(colors: &Plane<u32>) -> Plane<f64> {
    Plane::from_fn(colors.width(), colors.height(), |x, y| {
        pixel_energy(colors, x, y)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::pack;

    // The 3x4 sample image from the Princeton seam-carving assignment,
    // with its hand-checked interior energies.
    fn sample_colors() -> Plane<u32> {
        Plane::from_vec(
            3,
            4,
            vec![
                pack(255, 101, 51),
                pack(255, 101, 153),
                pack(255, 101, 255),
                pack(255, 153, 51),
                pack(255, 153, 153),
                pack(255, 153, 255),
                pack(255, 203, 51),
                pack(255, 204, 153),
                pack(255, 205, 255),
                pack(255, 255, 51),
                pack(255, 255, 153),
                pack(255, 255, 255),
            ],
        )
    }

    #[test]
    fn interior_energies_match_hand_computation() {
        let colors = sample_colors();
        let energy = energy_plane(&colors);
        assert_eq!(energy[(1, 1)], (52225.0f64).sqrt());
        assert_eq!(energy[(1, 2)], (52024.0f64).sqrt());
    }

    #[test]
    fn border_pixels_hold_the_sentinel() {
        let colors = sample_colors();
        let energy = energy_plane(&colors);
        for y in 0..4 {
            assert_eq!(energy[(0, y)], BORDER_ENERGY);
            assert_eq!(energy[(2, y)], BORDER_ENERGY);
        }
        for x in 0..3 {
            assert_eq!(energy[(x, 0)], BORDER_ENERGY);
            assert_eq!(energy[(x, 3)], BORDER_ENERGY);
        }
    }

    #[test]
    fn single_pixel_grid_is_all_border() {
        let colors = Plane::from_vec(1, 1, vec![pack(12, 34, 56)]);
        assert_eq!(pixel_energy(&colors, 0, 0), BORDER_ENERGY);
    }

    #[test]
    fn flat_color_interior_has_zero_energy() {
        let colors = Plane::from_fn(4, 4, |_, _| pack(40, 40, 40));
        let energy = energy_plane(&colors);
        assert_eq!(energy[(1, 1)], 0.0);
        assert_eq!(energy[(2, 2)], 0.0);
    }
}
