// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core geometry types for page box detection.

use serde::{Deserialize, Serialize};

/// Direction a border scan advances in.
///
/// `Horizontal` advances across columns (x = scan position, y = band sample);
/// `Vertical` advances across rows (y = scan position, x = band sample).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Pixel coordinate for scan position `i` and band sample `j`.
    pub fn point(self, i: i32, j: i32) -> (i32, i32) {
        match self {
            Self::Horizontal => (i, j),
            Self::Vertical => (j, i),
        }
    }
}

/// Integer rectangle with inclusive pixel bounds.
///
/// Produced by the border scanner and adjusted by the corner refiner. The
/// bounds are stored exactly as detected and are not normalized: a fully
/// black raster yields `left > right` (see the scanner docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IntRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// `right - left + 1`; negative when the bounds are inverted.
    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    /// `bottom - top + 1`; negative when the bounds are inverted.
    pub fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    /// The four corners of the pixel area covered by this rectangle, as
    /// floating-point points: origin `(left, top)`, size `(width, height)`.
    ///
    /// Order: top-left, top-right, bottom-left, bottom-right.
    pub fn corner_points(&self) -> [(f64, f64); 4] {
        let x0 = self.left as f64;
        let y0 = self.top as f64;
        let x1 = x0 + self.width() as f64;
        let y1 = y0 + self.height() as f64;
        [(x0, y0), (x1, y0), (x0, y1), (x1, y1)]
    }

    /// Axis-aligned floating-point rectangle covering the same pixel area.
    pub fn to_float(&self) -> FloatRect {
        FloatRect::bounding(self.corner_points())
    }
}

/// Floating-point rectangle in the caller's logical coordinate space.
///
/// A zero-area rectangle is the "nothing detected" result.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FloatRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FloatRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The empty sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the rectangle covers no area (or its size is not a number).
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Smallest axis-aligned rectangle containing every point.
    ///
    /// Returns the empty rectangle for an empty iterator.
    pub fn bounding<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut iter = points.into_iter();
        let Some((first_x, first_y)) = iter.next() else {
            return Self::empty();
        };
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first_x, first_y, first_x, first_y);
        for (x, y) in iter {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// Native resolution of a raster, in dots per inch per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dpi {
    pub horizontal: u32,
    pub vertical: u32,
}

impl Dpi {
    pub fn new(horizontal: u32, vertical: u32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Same resolution on both axes.
    pub fn uniform(dpi: u32) -> Self {
        Self::new(dpi, dpi)
    }

    /// Both axes non-zero.
    pub fn is_valid(&self) -> bool {
        self.horizontal > 0 && self.vertical > 0
    }
}
