// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Detection pipeline — orchestration and mapping back to logical coordinates.

pub mod finder;
pub mod mapper;

pub use finder::{PageFinder, find_page_box};
pub use mapper::{combined_transform, map_to_logical};
