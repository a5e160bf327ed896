// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global binarization — turns the reference-resolution grayscale raster into a
// black/white raster for the border scan.

use image::GrayImage;
use imageproc::contrast::otsu_level;
use pagefinder_core::error::Result;
use tracing::{debug, instrument};

use super::binary::BinaryImage;

/// Thresholds a grayscale image into a two-colour image.
pub trait Binarizer {
    fn binarize(&self, gray: &GrayImage) -> Result<BinaryImage>;
}

/// Global binarization at the Otsu threshold.
///
/// [`otsu_level`] reports the last gray level of the dark class, so levels at
/// or below it become black. A uniform or empty image has level 0: it is all
/// black when its pixels are 0 and all white otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct OtsuBinarizer;

impl Binarizer for OtsuBinarizer {
    #[instrument(skip_all, fields(width = gray.width(), height = gray.height()))]
    fn binarize(&self, gray: &GrayImage) -> Result<BinaryImage> {
        let threshold = otsu_level(gray);
        let bw = BinaryImage::from_gray(gray, threshold);
        debug!(threshold, black = bw.count_black(), "Otsu binarization complete");
        Ok(bw)
    }
}
