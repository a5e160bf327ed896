// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pagefinder-detect — Page content-box detection for scanned documents.
//
// Provides the raster abstractions and pluggable collaborators (normalization to
// the reference resolution, global binarization, debug capture), the border
// scanner and corner refiner, and the pipeline that maps the detected box back
// into the caller's coordinate space.

pub mod raster;
pub mod pipeline;
pub mod scan;

// Re-export the primary items so callers can use `pagefinder_detect::PageFinder` etc.
pub use raster::binarize::{Binarizer, OtsuBinarizer};
pub use raster::binary::{BinaryImage, BinaryRaster};
pub use raster::debug::{DebugImages, DebugSink};
pub use raster::normalize::{Normalizer, WarpNormalizer};
pub use pipeline::finder::{PageFinder, find_page_box};
pub use scan::border::{ScanSpec, detect_borders, detect_edge};
pub use scan::corners::refine_corners;
