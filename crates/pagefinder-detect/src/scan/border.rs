// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Border scan — walks each side of the binarized page inward for as long as
// the dark scan border is still seen near the sampling band.

use pagefinder_core::{Axis, IntRect, ScanParams};
use tracing::{debug, instrument, trace};

use crate::raster::binary::BinaryRaster;

/// One directional edge scan.
///
/// Scan lines run from `start` toward `end` (exclusive) in steps of `step`.
/// Each line is sampled across the band around `mid` on the perpendicular
/// axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSpec {
    pub start: i32,
    pub end: i32,
    pub step: i32,
    pub mid: i32,
    pub axis: Axis,
}

impl ScanSpec {
    /// Left side: columns from 0 toward the last column.
    pub fn left(width: u32, height: u32, params: &ScanParams) -> Self {
        Self {
            start: 0,
            end: last_index(width),
            step: 1,
            mid: band_mid(height, params),
            axis: Axis::Horizontal,
        }
    }

    /// Top side: rows from 0 toward the last row.
    pub fn top(width: u32, height: u32, params: &ScanParams) -> Self {
        Self {
            start: 0,
            end: last_index(height),
            step: 1,
            mid: band_mid(width, params),
            axis: Axis::Vertical,
        }
    }

    /// Right side: columns from the last column toward 0.
    pub fn right(width: u32, height: u32, params: &ScanParams) -> Self {
        Self {
            start: last_index(width),
            end: 0,
            step: -1,
            mid: band_mid(height, params),
            axis: Axis::Horizontal,
        }
    }

    /// Bottom side: rows from the last row toward the already detected `top`.
    pub fn bottom(width: u32, height: u32, top: i32, params: &ScanParams) -> Self {
        Self {
            start: last_index(height),
            end: top,
            step: -1,
            mid: band_mid(width, params),
            axis: Axis::Vertical,
        }
    }

    /// Half-open range of perpendicular samples for each scan line.
    ///
    /// `mid - mid / divisor .. mid + mid / divisor`; not centred exactly on
    /// `mid` when the quotient truncates, and empty when `mid < divisor`.
    pub fn band(&self, params: &ScanParams) -> std::ops::Range<i32> {
        let half = if params.band_divisor > 0 {
            self.mid / params.band_divisor
        } else {
            0
        };
        (self.mid - half)..(self.mid + half)
    }

    /// True when stepping from `start` eventually reaches `end`.
    fn terminates(&self) -> bool {
        self.start == self.end
            || (self.step != 0 && (self.end - self.start).signum() == self.step.signum())
    }
}

/// Final state of a side scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeScan {
    /// Last scan position where a black band sample was seen (or `start`).
    pub edge: i32,
    /// Consecutive scan lines without black at the point the scan stopped.
    pub gap: u32,
}

/// Scan one side of `img` and return the detected edge position.
pub fn detect_edge<R>(img: &R, spec: &ScanSpec, params: &ScanParams) -> i32
where
    R: BinaryRaster + ?Sized,
{
    scan_edge(img, spec, params).edge
}

/// Scan one side, keeping the gap counter alongside the edge.
///
/// A line that hits black in the band moves `edge` to that line and resets
/// `gap`; the rest of the band is not examined. A line without black bumps
/// `gap` once. The scan gives up once `gap` exceeds `params.gap_tolerance`.
pub fn scan_edge<R>(img: &R, spec: &ScanSpec, params: &ScanParams) -> EdgeScan
where
    R: BinaryRaster + ?Sized,
{
    let mut edge = spec.start;
    let mut gap = 0u32;

    if !spec.terminates() {
        return EdgeScan { edge, gap };
    }

    let band = spec.band(params);
    let mut i = spec.start;
    while i != spec.end {
        let old_gap = gap;
        for j in band.clone() {
            let (x, y) = spec.axis.point(i, j);
            if img.is_black(x, y) {
                edge = i;
                gap = 0;
                break;
            }
            if gap == old_gap {
                gap += 1;
            }
        }
        if gap > params.gap_tolerance {
            trace!(line = i, gap, "Gap tolerance exceeded");
            break;
        }
        i += spec.step;
    }

    EdgeScan { edge, gap }
}

/// Run the four side scans and assemble the content rectangle.
///
/// Sides run left, top, right, bottom; the bottom scan stops at the detected
/// top. The result is not normalized: on a fully black raster every side runs
/// to its far end and `left` ends up greater than `right`.
#[instrument(skip_all, fields(width = img.width(), height = img.height()))]
pub fn detect_borders<R>(img: &R, params: &ScanParams) -> IntRect
where
    R: BinaryRaster + ?Sized,
{
    let (width, height) = (img.width(), img.height());

    let left = detect_edge(img, &ScanSpec::left(width, height, params), params);
    let top = detect_edge(img, &ScanSpec::top(width, height, params), params);
    let right = detect_edge(img, &ScanSpec::right(width, height, params), params);
    let bottom = detect_edge(img, &ScanSpec::bottom(width, height, top, params), params);

    let rect = IntRect::new(left, top, right, bottom);
    debug!(left, top, right, bottom, "Borders detected");
    rect
}

fn last_index(extent: u32) -> i32 {
    extent as i32 - 1
}

fn band_mid(extent: u32, params: &ScanParams) -> i32 {
    (last_index(extent) as f64 * params.golden_ratio) as i32
}
