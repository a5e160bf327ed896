// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Corner refinement — eats diagonally into dark wedges left at the corners of
// the scanned rectangle.

use pagefinder_core::IntRect;
use tracing::debug;

use crate::raster::binary::BinaryRaster;

/// Walk each corner of `rect` diagonally inward while it sits on black.
///
/// Corners run top-left, top-right, bottom-left, bottom-right over shared
/// edge values, so a corner starts from edges an earlier corner already
/// moved. A corner never steps outside the raster.
pub fn refine_corners<R>(img: &R, rect: &mut IntRect)
where
    R: BinaryRaster + ?Sized,
{
    let IntRect {
        mut left,
        mut top,
        mut right,
        mut bottom,
    } = *rect;

    refine_corner(img, &mut left, &mut top, 1, 1);
    refine_corner(img, &mut right, &mut top, -1, 1);
    refine_corner(img, &mut left, &mut bottom, 1, -1);
    refine_corner(img, &mut right, &mut bottom, -1, -1);

    if (left, top, right, bottom) != (rect.left, rect.top, rect.right, rect.bottom) {
        debug!(left, top, right, bottom, "Corners refined");
    }
    *rect = IntRect::new(left, top, right, bottom);
}

/// Step `(x, y)` by `(inc_x, inc_y)` until the pixel under it is not black or
/// the next step would leave the raster.
fn refine_corner<R>(img: &R, x: &mut i32, y: &mut i32, inc_x: i32, inc_y: i32)
where
    R: BinaryRaster + ?Sized,
{
    let max_x = img.width() as i32 - 1;
    let max_y = img.height() as i32 - 1;
    loop {
        let next_x = *x + inc_x;
        let next_y = *y + inc_y;
        if !img.is_black(*x, *y) || next_x < 0 || next_x > max_x || next_y < 0 || next_y > max_y {
            break;
        }
        *x = next_x;
        *y = next_y;
    }
}
