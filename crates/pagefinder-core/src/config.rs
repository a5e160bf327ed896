// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Detection parameters.

use serde::{Deserialize, Serialize};

/// Resolution (per axis) at which borders are scanned.
pub const REFERENCE_DPI: u32 = 150;

/// Fraction of the perpendicular extent where the sampling band sits.
pub const GOLDEN_RATIO: f64 = 0.382;

/// The sampling band spans `mid - mid / BAND_DIVISOR .. mid + mid / BAND_DIVISOR`.
pub const BAND_DIVISOR: i32 = 4;

/// Consecutive non-black scan lines after which a side stops.
pub const GAP_TOLERANCE: u32 = 20;

/// Tunables of the border scan heuristic.
///
/// The defaults are the values detection has always been run with; they are
/// kept in one place so the heuristic can be exercised with other values in
/// isolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanParams {
    /// Working resolution of the normalized raster.
    pub reference_dpi: u32,
    /// Position of the sampling band as a fraction of the last pixel index.
    pub golden_ratio: f64,
    /// Divisor applied to `mid` to get the band half-width.
    pub band_divisor: i32,
    /// A side stops once its gap counter exceeds this value.
    pub gap_tolerance: u32,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            reference_dpi: REFERENCE_DPI,
            golden_ratio: GOLDEN_RATIO,
            band_divisor: BAND_DIVISOR,
            gap_tolerance: GAP_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let params = ScanParams::default();
        assert_eq!(params.reference_dpi, 150);
        assert_eq!(params.golden_ratio, 0.382);
        assert_eq!(params.band_divisor, 4);
        assert_eq!(params.gap_tolerance, 20);
    }

    #[test]
    fn params_survive_json() {
        let params = ScanParams {
            gap_tolerance: 5,
            ..Default::default()
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: ScanParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
