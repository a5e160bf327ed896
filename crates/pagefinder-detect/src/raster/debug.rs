// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Debug capture of intermediate rasters.

use std::path::{Path, PathBuf};

use image::GrayImage;
use pagefinder_core::error::{PageFinderError, Result};
use tracing::{debug, instrument};

/// Write-only side channel for named intermediate rasters.
///
/// Purely diagnostic: what a sink does with a snapshot never affects detection.
pub trait DebugSink {
    fn add(&mut self, image: &GrayImage, label: &str);
}

/// In-memory collection of labelled snapshots, in capture order.
#[derive(Debug, Clone, Default)]
pub struct DebugImages {
    entries: Vec<(String, GrayImage)>,
}

impl DebugImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshots as `(label, image)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GrayImage)> {
        self.entries.iter().map(|(label, img)| (label.as_str(), img))
    }

    /// Write every snapshot to `dir` as `NN-label.png`, creating `dir` if needed.
    #[instrument(skip(self), fields(count = self.entries.len()))]
    pub fn save_all(&self, dir: impl AsRef<Path> + std::fmt::Debug) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(self.entries.len());
        for (idx, (label, img)) in self.entries.iter().enumerate() {
            let path = dir.join(format!("{:02}-{}.png", idx + 1, label));
            img.save(&path).map_err(|err| {
                PageFinderError::ImageError(format!(
                    "failed to save debug image to {}: {}",
                    path.display(),
                    err
                ))
            })?;
            debug!(path = %path.display(), "Debug image written");
            written.push(path);
        }
        Ok(written)
    }
}

impl DebugSink for DebugImages {
    fn add(&mut self, image: &GrayImage, label: &str) {
        self.entries.push((label.to_owned(), image.clone()));
    }
}
