// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster module — binary rasters and the stages that produce them: normalization
// to the reference resolution, global binarization, and debug capture.

pub mod binarize;
pub mod binary;
pub mod debug;
pub mod normalize;

pub use binarize::{Binarizer, OtsuBinarizer};
pub use binary::{BinaryImage, BinaryRaster};
pub use debug::{DebugImages, DebugSink};
pub use normalize::{Normalizer, WarpNormalizer};
