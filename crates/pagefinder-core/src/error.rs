// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Pagefinder.

use thiserror::Error;

/// Top-level error type for all Pagefinder operations.
///
/// Detection itself never fails on odd geometry: a degenerate transform or an
/// empty source yields an empty `FloatRect`. Errors come from the stages around
/// it (decoding, normalization, binarization) or from cancellation.
#[derive(Debug, Error)]
pub enum PageFinderError {
    #[error("operation cancelled")]
    Cancelled,

    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PageFinderError>;
