// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Normalization — resamples the source grayscale raster under an affine
// transform into a raster at the reference resolution.

use image::{GrayImage, Luma};
use imageproc::geometric_transformations::{Interpolation, Projection, warp_into};
use pagefinder_core::error::{PageFinderError, Result};
use pagefinder_core::{AffineTransform, CancellationToken, ImageTransformation};
use tracing::{debug, instrument};

/// Produces the reference-resolution grayscale raster.
///
/// `xform` is the already pre-scaled transformation: it maps source pixels to
/// output pixels and its [`target_size`](ImageTransformation::target_size) is
/// the output size.
pub trait Normalizer {
    fn normalize(
        &self,
        source: &GrayImage,
        xform: &ImageTransformation,
        status: &CancellationToken,
    ) -> Result<GrayImage>;
}

/// Bilinear affine warp via `imageproc`.
///
/// Output pixels that fall outside the source (corners exposed by a rotation)
/// take the darkest level present in the source, so scan shadows stay dark
/// instead of gaining an artificial bright frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct WarpNormalizer;

impl Normalizer for WarpNormalizer {
    #[instrument(skip_all, fields(src_w = source.width(), src_h = source.height()))]
    fn normalize(
        &self,
        source: &GrayImage,
        xform: &ImageTransformation,
        status: &CancellationToken,
    ) -> Result<GrayImage> {
        let (width, height) = xform.target_size();
        if xform.transform == AffineTransform::identity() && source.dimensions() == (width, height)
        {
            debug!("Identity normalization; reusing source raster");
            return Ok(source.clone());
        }

        let outside = Luma([darkest_gray_level(source)]);
        let projection = to_projection(&xform.transform).ok_or_else(|| {
            PageFinderError::ImageError(format!(
                "normalization transform is not invertible: {:?}",
                xform.transform
            ))
        })?;
        status.check()?;

        let mut output = GrayImage::from_pixel(width, height, outside);
        warp_into(source, &projection, Interpolation::Bilinear, outside, &mut output);

        debug!(width, height, outside = outside.0[0], "Normalization complete");
        Ok(output)
    }
}

/// Lowest gray level present in `image` (0 for an empty image).
pub fn darkest_gray_level(image: &GrayImage) -> u8 {
    image.pixels().map(|p| p.0[0]).min().unwrap_or(0)
}

/// Convert an affine transform into an `imageproc` projection.
///
/// Returns `None` when the matrix is not invertible in single precision.
pub fn to_projection(xform: &AffineTransform) -> Option<Projection> {
    Projection::from_matrix([
        xform.a as f32,
        xform.b as f32,
        xform.tx as f32,
        xform.c as f32,
        xform.d as f32,
        xform.ty as f32,
        0.0,
        0.0,
        1.0,
    ])
}
