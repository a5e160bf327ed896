// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page finder — the full content-box detection pipeline:
//
// 1. Pre-scale the caller's transformation to the reference resolution
// 2. Normalize the source raster (dark fill for exposed areas)
// 3. Binarize at a global threshold
// 4. Scan the four borders and refine the corners
// 5. Map the rectangle back to the caller's logical space

use image::GrayImage;
use pagefinder_core::error::Result;
use pagefinder_core::{
    CancellationToken, Dpi, FloatRect, ImageTransformation, IntRect, ScanParams,
};
use tracing::{debug, info, instrument, warn};

use super::mapper::{combined_transform, map_to_logical};
use crate::raster::binarize::{Binarizer, OtsuBinarizer};
use crate::raster::binary::BinaryRaster;
use crate::raster::debug::DebugSink;
use crate::raster::normalize::{Normalizer, WarpNormalizer};
use crate::scan::border::detect_borders;
use crate::scan::corners::refine_corners;

/// Detects the content box of a scanned page.
///
/// Normalization and binarization are pluggable; the defaults warp with
/// `imageproc` and threshold with Otsu.
///
/// ```ignore
/// let xform = ImageTransformation::new(gray.dimensions(), Dpi::uniform(300));
/// let page = PageFinder::new().find_page_box(&gray, &xform, None, &CancellationToken::new())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PageFinder<N = WarpNormalizer, B = OtsuBinarizer> {
    normalizer: N,
    binarizer: B,
    params: ScanParams,
}

impl PageFinder {
    /// Finder with the default collaborators and parameters.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: Normalizer, B: Binarizer> PageFinder<N, B> {
    /// Finder with custom normalization and binarization stages.
    pub fn with_collaborators(normalizer: N, binarizer: B) -> Self {
        Self {
            normalizer,
            binarizer,
            params: ScanParams::default(),
        }
    }

    /// Override the scan parameters.
    pub fn with_params(mut self, params: ScanParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &ScanParams {
        &self.params
    }

    /// Detect the content box of `source` and return it in the logical space
    /// of `xform`.
    ///
    /// Returns the empty rectangle when the transformation renders the source
    /// as an empty (or non-invertible) region; nothing is scanned in that
    /// case. Errors come only from the collaborators and from `status`.
    #[instrument(skip_all, fields(src_w = source.width(), src_h = source.height()))]
    pub fn find_page_box(
        &self,
        source: &GrayImage,
        xform: &ImageTransformation,
        mut dbg: Option<&mut dyn DebugSink>,
        status: &CancellationToken,
    ) -> Result<FloatRect> {
        status.check()?;

        let reference_dpi = self.params.reference_dpi;
        let reference = xform.pre_scaled_to_dpi(Dpi::uniform(reference_dpi));
        let (width, height) = reference.target_size();
        if width == 0 || height == 0 {
            warn!(width, height, "Transformed page is empty; no content box");
            return Ok(FloatRect::empty());
        }
        let Some(combined) = combined_transform(&reference.transform, &xform.transform) else {
            warn!("Reference transform is not invertible; no content box");
            return Ok(FloatRect::empty());
        };
        info!(width, height, reference_dpi, "Searching for page box");

        let gray = self.normalizer.normalize(source, &reference, status)?;
        if let Some(sink) = dbg.as_mut() {
            sink.add(&gray, &format!("gray{reference_dpi}"));
        }
        status.check()?;

        let bw = self.binarizer.binarize(&gray)?;
        if let Some(sink) = dbg.as_mut() {
            sink.add(&bw.to_gray(), &format!("bw{reference_dpi}"));
        }
        status.check()?;

        let content = self.detect_content_rect(&bw);
        let page_box = map_to_logical(&content, &combined);
        info!(
            x = page_box.x,
            y = page_box.y,
            width = page_box.width,
            height = page_box.height,
            "Page box found"
        );
        Ok(page_box)
    }

    /// Border scan plus corner refinement on an already binarized raster, in
    /// that raster's pixel coordinates.
    pub fn detect_content_rect<R>(&self, bw: &R) -> IntRect
    where
        R: BinaryRaster + ?Sized,
    {
        let mut rect = detect_borders(bw, &self.params);
        refine_corners(bw, &mut rect);
        debug!(?rect, "Content rectangle in reference pixels");
        rect
    }
}

/// [`PageFinder::find_page_box`] with the default collaborators and parameters.
pub fn find_page_box(
    source: &GrayImage,
    xform: &ImageTransformation,
    dbg: Option<&mut dyn DebugSink>,
    status: &CancellationToken,
) -> Result<FloatRect> {
    PageFinder::new().find_page_box(source, xform, dbg, status)
}
