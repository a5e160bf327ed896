// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Coordinate mapping from the reference raster back to logical space.

use pagefinder_core::{AffineTransform, FloatRect, IntRect};

/// Reference-raster pixels → source pixels → logical space.
///
/// `normalization` maps source pixels to the reference raster; `original` maps
/// source pixels to logical space. Returns `None` when `normalization` cannot
/// be inverted.
pub fn combined_transform(
    normalization: &AffineTransform,
    original: &AffineTransform,
) -> Option<AffineTransform> {
    normalization
        .inverse()
        .map(|to_source| to_source.then(original))
}

/// Map `rect` through `combined` and return the bounding box of its corners.
pub fn map_to_logical(rect: &IntRect, combined: &AffineTransform) -> FloatRect {
    FloatRect::bounding(
        rect.corner_points()
            .into_iter()
            .map(|corner| combined.map_point(corner)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rect_close(actual: FloatRect, expected: FloatRect) {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(
            close(actual.x, expected.x)
                && close(actual.y, expected.y)
                && close(actual.width, expected.width)
                && close(actual.height, expected.height),
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn identity_mapping_keeps_the_pixel_area() {
        let combined =
            combined_transform(&AffineTransform::identity(), &AffineTransform::identity())
                .unwrap();
        let rect = IntRect::new(51, 51, 349, 249);
        assert_eq!(map_to_logical(&rect, &combined), rect.to_float());
    }

    #[test]
    fn reference_scale_is_undone() {
        // Source at 300 dpi, reference at 150 dpi: one reference pixel is two
        // source pixels.
        let normalization = AffineTransform::scale(0.5, 0.5);
        let combined = combined_transform(&normalization, &AffineTransform::identity()).unwrap();
        let mapped = map_to_logical(&IntRect::new(10, 20, 29, 39), &combined);
        assert_rect_close(mapped, FloatRect::new(20.0, 40.0, 40.0, 40.0));
    }

    #[test]
    fn original_transform_is_applied_last() {
        let original = AffineTransform::translate(100.0, -50.0);
        let normalization = original.then(&AffineTransform::translate(-100.0, 50.0));
        let combined = combined_transform(&normalization, &original).unwrap();
        let mapped = map_to_logical(&IntRect::new(0, 0, 9, 9), &combined);
        assert_rect_close(mapped, FloatRect::new(100.0, -50.0, 10.0, 10.0));
    }

    #[test]
    fn rotated_mapping_returns_bounding_box() {
        let original = AffineTransform::rotate_degrees(90.0);
        let combined = combined_transform(&AffineTransform::identity(), &original).unwrap();
        let mapped = map_to_logical(&IntRect::new(0, 0, 9, 4), &combined);
        assert_rect_close(mapped, FloatRect::new(-5.0, 0.0, 5.0, 10.0));
    }

    #[test]
    fn singular_normalization_has_no_mapping() {
        assert!(
            combined_transform(&AffineTransform::scale(1.0, 0.0), &AffineTransform::identity())
                .is_none()
        );
    }
}
