// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Affine transforms and the source-image transformation they describe.

use serde::{Deserialize, Serialize};

use crate::types::{Dpi, FloatRect};

/// 2-D affine transform.
///
/// Maps `(x, y)` to `(a*x + b*y + tx, c*x + d*y + ty)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn translate(tx: f64, ty: f64) -> Self {
        Self {
            tx,
            ty,
            ..Self::identity()
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::identity()
        }
    }

    /// Rotation about the origin. With y pointing down, positive angles turn
    /// clockwise on screen.
    pub fn rotate_degrees(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            a: cos,
            b: -sin,
            c: sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Composition: apply `self`, then `next`.
    pub fn then(&self, next: &AffineTransform) -> Self {
        Self {
            a: next.a * self.a + next.b * self.c,
            b: next.a * self.b + next.b * self.d,
            c: next.c * self.a + next.d * self.c,
            d: next.c * self.b + next.d * self.d,
            tx: next.a * self.tx + next.b * self.ty + next.tx,
            ty: next.c * self.tx + next.d * self.ty + next.ty,
        }
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Inverse transform, or `None` for a singular or non-finite matrix.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        Some(Self {
            a,
            b,
            c,
            d,
            tx: -(a * self.tx + b * self.ty),
            ty: -(c * self.tx + d * self.ty),
        })
    }

    pub fn map_point(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (
            self.a * x + self.b * y + self.tx,
            self.c * x + self.d * y + self.ty,
        )
    }

    /// Bounding box of `rect` after mapping its four corners.
    pub fn map_rect_bounds(&self, rect: &FloatRect) -> FloatRect {
        let corners = [
            (rect.x, rect.y),
            (rect.right(), rect.y),
            (rect.x, rect.bottom()),
            (rect.right(), rect.bottom()),
        ];
        FloatRect::bounding(corners.into_iter().map(|p| self.map_point(p)))
    }
}

/// A source raster's extent and resolution, plus the transform from its pixel
/// coordinates into the caller's logical space (rotation, crop offsets, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageTransformation {
    /// Source width and height in pixels.
    pub source_size: (u32, u32),
    /// Native resolution of the source raster.
    pub source_dpi: Dpi,
    /// Source pixel coordinates to logical coordinates.
    pub transform: AffineTransform,
}

impl ImageTransformation {
    /// Identity transformation over a source of the given size.
    pub fn new(source_size: (u32, u32), source_dpi: Dpi) -> Self {
        Self {
            source_size,
            source_dpi,
            transform: AffineTransform::identity(),
        }
    }

    pub fn with_transform(mut self, transform: AffineTransform) -> Self {
        self.transform = transform;
        self
    }

    /// The source extent as a rectangle in source pixel coordinates.
    pub fn source_rect(&self) -> FloatRect {
        FloatRect::new(
            0.0,
            0.0,
            self.source_size.0 as f64,
            self.source_size.1 as f64,
        )
    }

    /// Bounding box of the source extent in the transformed space.
    pub fn resulting_rect(&self) -> FloatRect {
        self.transform.map_rect_bounds(&self.source_rect())
    }

    /// The same transformation rendered at `target` resolution.
    ///
    /// Source pixels are first scaled by `target / source_dpi` per source
    /// axis, then mapped by the caller's transform, then translated so the
    /// top-left of the resulting rectangle sits at the origin. The result
    /// addresses the pixels of a raster of [`target_size`](Self::target_size).
    pub fn pre_scaled_to_dpi(&self, target: Dpi) -> Self {
        let scale = AffineTransform::scale(
            target.horizontal as f64 / self.source_dpi.horizontal as f64,
            target.vertical as f64 / self.source_dpi.vertical as f64,
        );
        let scaled = scale.then(&self.transform);
        let bounds = scaled.map_rect_bounds(&self.source_rect());
        let shifted = scaled.then(&AffineTransform::translate(-bounds.x, -bounds.y));
        Self {
            transform: shifted,
            ..*self
        }
    }

    /// Pixel size of the resulting rectangle, rounded half away from zero.
    ///
    /// Either side is zero when the resulting rectangle is empty or not finite.
    pub fn target_size(&self) -> (u32, u32) {
        let rect = self.resulting_rect();
        let span = |start: f64, end: f64| -> u32 {
            let len = end.round() - start.round();
            if len.is_finite() && len > 0.0 {
                len as u32
            } else {
                0
            }
        };
        (span(rect.x, rect.right()), span(rect.y, rect.bottom()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn then_applies_left_to_right() {
        let xform = AffineTransform::scale(2.0, 3.0).then(&AffineTransform::translate(10.0, 20.0));
        assert_close(xform.map_point((1.0, 1.0)), (12.0, 23.0));

        let reversed =
            AffineTransform::translate(10.0, 20.0).then(&AffineTransform::scale(2.0, 3.0));
        assert_close(reversed.map_point((1.0, 1.0)), (22.0, 63.0));
    }

    #[test]
    fn inverse_undoes_transform() {
        let xform = AffineTransform::rotate_degrees(30.0)
            .then(&AffineTransform::scale(0.5, 2.0))
            .then(&AffineTransform::translate(-7.0, 3.5));
        let inverse = xform.inverse().expect("invertible");
        let round_trip = xform.then(&inverse);
        assert_close(round_trip.map_point((123.0, -45.0)), (123.0, -45.0));
    }

    #[test]
    fn singular_transform_has_no_inverse() {
        assert!(AffineTransform::scale(0.0, 1.0).inverse().is_none());
        assert!(AffineTransform::scale(f64::INFINITY, 1.0).inverse().is_none());
    }

    #[test]
    fn rotation_by_ninety_degrees() {
        let xform = AffineTransform::rotate_degrees(90.0);
        assert_close(xform.map_point((1.0, 0.0)), (0.0, 1.0));
    }

    #[test]
    fn pre_scaling_to_same_dpi_is_identity() {
        let xform = ImageTransformation::new((400, 300), Dpi::uniform(150));
        let scaled = xform.pre_scaled_to_dpi(Dpi::uniform(150));
        assert_eq!(scaled.transform, AffineTransform::identity());
        assert_eq!(scaled.target_size(), (400, 300));
    }

    #[test]
    fn pre_scaling_halves_a_300_dpi_source() {
        let xform = ImageTransformation::new((400, 300), Dpi::uniform(300));
        let scaled = xform.pre_scaled_to_dpi(Dpi::uniform(150));
        assert_eq!(scaled.target_size(), (200, 150));
        assert_close(scaled.transform.map_point((400.0, 300.0)), (200.0, 150.0));
    }

    #[test]
    fn pre_scaling_moves_rotated_bounds_to_origin() {
        let xform = ImageTransformation::new((100, 50), Dpi::uniform(150))
            .with_transform(AffineTransform::rotate_degrees(90.0));
        let scaled = xform.pre_scaled_to_dpi(Dpi::uniform(150));
        let rect = scaled.resulting_rect();
        assert!(rect.x.abs() < 1e-9 && rect.y.abs() < 1e-9);
        assert_eq!(scaled.target_size(), (50, 100));
    }

    #[test]
    fn anisotropic_dpi_scales_source_axes_before_rotation() {
        // 100x100 px at 300x150 dpi is 1/3 in wide and 2/3 in tall; turned a
        // quarter it is 2/3 in wide and 1/3 in tall.
        let xform = ImageTransformation::new((100, 100), Dpi::new(300, 150))
            .with_transform(AffineTransform::rotate_degrees(90.0));
        let scaled = xform.pre_scaled_to_dpi(Dpi::uniform(150));
        assert_eq!(scaled.target_size(), (100, 50));

        // The source's bottom-left corner lands on the reference top-left.
        assert_close(scaled.transform.map_point((0.0, 100.0)), (0.0, 0.0));
        assert_close(scaled.transform.map_point((100.0, 0.0)), (100.0, 50.0));
    }

    #[test]
    fn collapsed_transform_has_empty_target() {
        let xform = ImageTransformation::new((100, 50), Dpi::uniform(150))
            .with_transform(AffineTransform::scale(1.0, 0.0));
        assert_eq!(xform.pre_scaled_to_dpi(Dpi::uniform(150)).target_size().1, 0);
    }

    #[test]
    fn zero_dpi_source_has_empty_target() {
        let xform = ImageTransformation::new((100, 50), Dpi::new(0, 0));
        let size = xform.pre_scaled_to_dpi(Dpi::uniform(150)).target_size();
        assert_eq!(size, (0, 0));
    }
}
