// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while carving.
//!
//! All three conditions are caller errors, detected eagerly at the
//! public API boundary before any grid mutation begins.  A failed call
//! leaves the carver bit-identical to its prior state.

use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// The constructor was handed a picture with no pixels.
    #[fail(display = "cannot carve an empty {}x{} picture", width, height)]
    InvalidArgument { width: u32, height: u32 },

    /// A coordinate accessor was called outside the current logical
    /// dimensions.
    #[fail(display = "coordinate ({}, {}) lies outside the {}x{} grid", x, y, width, height)]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// A seam failed the length, range, adjacency, or minimum-width
    /// check.
    #[fail(display = "invalid seam: {}", reason)]
    InvalidSeam { reason: &'static str },
}
