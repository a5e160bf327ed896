// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pagefinder — Core geometry, parameters, and error definitions shared across
// all crates.

pub mod config;
pub mod error;
pub mod status;
pub mod transform;
pub mod types;

pub use config::ScanParams;
pub use error::PageFinderError;
pub use status::CancellationToken;
pub use transform::{AffineTransform, ImageTransformation};
pub use types::*;
