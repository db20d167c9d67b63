// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The carving engine.
//!
//! A [`SeamGrid`] exclusively owns a packed color grid and its parallel
//! energy grid.  The same row-by-row search and removal routines serve
//! both seam directions: when a horizontal operation is requested the
//! grids are physically transposed first, and an orientation flag
//! records that the stored layout is rotated relative to the picture
//! the caller sees.  Transposition is lazy, so alternating operations
//! in one direction never pay for it twice.

use image::{GenericImageView, ImageBuffer, Pixel, Primitive, RgbImage};
use itertools::iproduct;
use log::debug;
use num_traits::NumCast;

use crate::color;
use crate::energy::{energy_plane, pixel_energy};
use crate::error::CarveError;
use crate::plane::Plane;
use crate::search::find_seam;

/// A content-aware carver over one picture.
///
/// Operations must be serialized by the caller; every method runs to
/// completion and the carver is not reentrant.
#[derive(Debug, Clone)]
pub struct SeamGrid {
    colors: Plane<u32>,
    energies: Plane<f64>,
    transposed: bool,
}

impl SeamGrid {
    /// Build a carver from a picture, packing each pixel's RGB channels
    /// and computing the full energy grid once.
    ///
    /// Channels are truncated to 8 bits.  Fails with `InvalidArgument`
    /// when the picture has no pixels.
    pub fn new<I, P, S>(picture: &I) -> Result<Self, CarveError>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = picture.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::InvalidArgument { width, height });
        }

        let colors = Plane::from_fn(width, height, |x, y| {
            let pixel = picture.get_pixel(x, y).to_rgb();
            let c = pixel.channels();
            let r: u32 = NumCast::from(c[0]).unwrap();
            let g: u32 = NumCast::from(c[1]).unwrap();
            let b: u32 = NumCast::from(c[2]).unwrap();
            color::pack(r as u8, g as u8, b as u8)
        });
        let energies = energy_plane(&colors);

        Ok(SeamGrid {
            colors,
            energies,
            transposed: false,
        })
    }

    /// Width of the picture as the caller sees it.
    pub fn width(&self) -> u32 {
        if self.transposed {
            self.colors.height()
        } else {
            self.colors.width()
        }
    }

    /// Height of the picture as the caller sees it.
    pub fn height(&self) -> u32 {
        if self.transposed {
            self.colors.width()
        } else {
            self.colors.height()
        }
    }

    /// Energy of the pixel at column `x`, row `y` of the picture as the
    /// caller sees it, translated through the orientation flag.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64, CarveError> {
        if x >= self.width() || y >= self.height() {
            return Err(CarveError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(if self.transposed {
            self.energies[(y, x)]
        } else {
            self.energies[(x, y)]
        })
    }

    /// Materialize the current grid as a picture, always in natural
    /// orientation.
    pub fn picture(&mut self) -> RgbImage {
        self.ensure_natural();

        let (width, height) = (self.colors.width(), self.colors.height());
        let mut out = ImageBuffer::new(width, height);
        for (y, x) in iproduct!(0..height, 0..width) {
            let c = color::channels(self.colors[(x, y)]);
            out.put_pixel(x, y, *Pixel::from_slice(&c));
        }
        out
    }

    /// The minimum-energy top-to-bottom seam: one column index per row.
    pub fn find_vertical_seam(&mut self) -> Vec<u32> {
        self.ensure_natural();
        find_seam(&self.energies)
    }

    /// The minimum-energy left-to-right seam: one row index per column.
    pub fn find_horizontal_seam(&mut self) -> Vec<u32> {
        self.ensure_transposed();
        find_seam(&self.energies)
    }

    /// Remove a vertical seam, narrowing the picture by one column.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<(), CarveError> {
        self.ensure_natural();
        self.remove(seam)
    }

    /// Remove a horizontal seam, shortening the picture by one row.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<(), CarveError> {
        self.ensure_transposed();
        self.remove(seam)
    }

    fn ensure_natural(&mut self) {
        if self.transposed {
            self.transpose();
        }
    }

    fn ensure_transposed(&mut self) {
        if !self.transposed {
            self.transpose();
        }
    }

    fn transpose(&mut self) {
        debug!(
            "transposing {}x{} grid",
            self.colors.width(),
            self.colors.height()
        );
        self.colors = self.colors.transposed();
        self.energies = self.energies.transposed();
        self.transposed = !self.transposed;
    }

    // Validation happens in full before any mutation: a rejected seam
    // leaves both grids untouched.
    fn validate(&self, seam: &[u32]) -> Result<(), CarveError> {
        let (width, height) = (self.colors.width(), self.colors.height());

        if width <= 1 {
            return Err(CarveError::InvalidSeam {
                reason: "the grid is already a single column wide",
            });
        }
        if seam.len() != height as usize {
            return Err(CarveError::InvalidSeam {
                reason: "seam length does not match the grid height",
            });
        }
        for (i, &s) in seam.iter().enumerate() {
            if s >= width {
                return Err(CarveError::InvalidSeam {
                    reason: "seam entry outside the grid width",
                });
            }
            if i > 0 {
                let prev = seam[i - 1];
                if s > prev + 1 || prev > s + 1 {
                    return Err(CarveError::InvalidSeam {
                        reason: "adjacent seam entries differ by more than one",
                    });
                }
            }
        }
        Ok(())
    }

    // Delete one cell per row along the seam, left-shifting the cells
    // to its right into fresh one-narrower planes, then recompute the
    // energies whose neighbor set changed.  Only the one or two columns
    // beside the seam point need repair, so a removal costs O(height)
    // energy work rather than a full recompute.
    fn remove(&mut self, seam: &[u32]) -> Result<(), CarveError> {
        self.validate(seam)?;

        let (width, height) = (self.colors.width(), self.colors.height());
        let colors = Plane::from_fn(width - 1, height, |x, y| {
            let s = seam[y as usize];
            self.colors[(if x < s { x } else { x + 1 }, y)]
        });
        let energies = Plane::from_fn(width - 1, height, |x, y| {
            let s = seam[y as usize];
            self.energies[(if x < s { x } else { x + 1 }, y)]
        });
        self.colors = colors;
        self.energies = energies;

        let width = width - 1;
        for y in 0..height {
            let s = seam[y as usize];
            if s == 0 {
                self.energies[(s, y)] = pixel_energy(&self.colors, s, y);
            } else if s == width {
                self.energies[(s - 1, y)] = pixel_energy(&self.colors, s - 1, y);
            } else {
                self.energies[(s, y)] = pixel_energy(&self.colors, s, y);
                self.energies[(s - 1, y)] = pixel_energy(&self.colors, s - 1, y);
            }
        }
        Ok(())
    }
}
