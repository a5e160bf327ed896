// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Content-box scanning — per-side border scan and diagonal corner refinement.

pub mod border;
pub mod corners;

pub use border::{ScanSpec, detect_borders, detect_edge};
pub use corners::refine_corners;
