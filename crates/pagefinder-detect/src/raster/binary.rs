// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Two-colour rasters.

use image::{GrayImage, Luma};

/// Read access to a black/white raster.
///
/// (0, 0) is the top-left pixel; x grows rightward, y downward.
pub trait BinaryRaster {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Whether the pixel at `(x, y)` is black. Out-of-bounds reads are white.
    fn is_black(&self, x: i32, y: i32) -> bool;
}

/// Owned black/white raster, one entry per pixel in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryImage {
    width: u32,
    height: u32,
    black: Vec<bool>,
}

impl BinaryImage {
    /// All-white raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, false)
    }

    /// Raster with every pixel set to `black`.
    pub fn filled(width: u32, height: u32, black: bool) -> Self {
        Self {
            width,
            height,
            black: vec![black; width as usize * height as usize],
        }
    }

    /// Build a raster by evaluating `f(x, y)` (true = black) for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut black = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                black.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            black,
        }
    }

    /// Threshold a grayscale image: levels at or below `threshold` are black.
    pub fn from_gray(gray: &GrayImage, threshold: u8) -> Self {
        Self::from_fn(gray.width(), gray.height(), |x, y| {
            gray.get_pixel(x, y).0[0] <= threshold
        })
    }

    /// Set a single pixel. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, black: bool) {
        if x < self.width && y < self.height {
            let idx = y as usize * self.width as usize + x as usize;
            self.black[idx] = black;
        }
    }

    /// Number of black pixels.
    pub fn count_black(&self) -> usize {
        self.black.iter().filter(|&&b| b).count()
    }

    /// Render as grayscale: black = 0, white = 255.
    pub fn to_gray(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            if self.is_black(x as i32, y as i32) {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        })
    }
}

impl BinaryRaster for BinaryImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn is_black(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return false;
        }
        self.black[y as usize * self.width as usize + x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_image_is_white() {
        let img = BinaryImage::new(4, 3);
        assert_eq!(img.count_black(), 0);
        assert!(!img.is_black(0, 0));
    }

    #[test]
    fn out_of_bounds_reads_are_white() {
        let img = BinaryImage::filled(4, 3, true);
        assert!(img.is_black(3, 2));
        assert!(!img.is_black(-1, 0));
        assert!(!img.is_black(0, -1));
        assert!(!img.is_black(4, 0));
        assert!(!img.is_black(0, 3));
    }

    #[test]
    fn set_ignores_out_of_bounds() {
        let mut img = BinaryImage::new(2, 2);
        img.set(1, 1, true);
        img.set(5, 5, true);
        assert_eq!(img.count_black(), 1);
        assert!(img.is_black(1, 1));
    }

    #[test]
    fn threshold_is_inclusive() {
        let gray = GrayImage::from_fn(3, 1, |x, _| Luma([[10u8, 11, 12][x as usize]]));
        let bw = BinaryImage::from_gray(&gray, 11);
        assert!(bw.is_black(0, 0));
        assert!(bw.is_black(1, 0));
        assert!(!bw.is_black(2, 0));
    }

    #[test]
    fn gray_rendering_uses_black_and_white() {
        let mut img = BinaryImage::new(2, 1);
        img.set(0, 0, true);
        let gray = img.to_gray();
        assert_eq!(gray.get_pixel(0, 0).0[0], 0);
        assert_eq!(gray.get_pixel(1, 0).0[0], 255);
    }
}
