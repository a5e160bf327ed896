// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use pagefinder_core::error::{PageFinderError, Result};
use pagefinder_core::{AffineTransform, Dpi, ImageTransformation};

/// Detect the content box of a scanned page.
#[derive(Debug, Parser)]
#[command(name = "pagefinder", version, about)]
pub struct Args {
    /// Scanned page image (PNG, JPEG, TIFF, ...).
    pub input: PathBuf,

    /// Resolution the page was scanned at.
    #[arg(long, default_value_t = 300)]
    pub dpi: u32,

    /// Rotate the page clockwise by this many degrees before detection.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rotate: f64,

    /// Write the input cropped to the detected box here (unrotated pages only).
    #[arg(long)]
    pub crop: Option<PathBuf>,

    /// Write intermediate rasters into this directory.
    #[arg(long)]
    pub debug_dir: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Source transformation for an image of `size` pixels.
    ///
    /// A rotation turns the page about the origin and then shifts it so its
    /// bounding box starts at (0, 0).
    pub fn transformation(&self, size: (u32, u32)) -> Result<ImageTransformation> {
        let dpi = Dpi::uniform(self.dpi);
        if !dpi.is_valid() {
            return Err(PageFinderError::InvalidInput(
                "--dpi must be greater than zero".into(),
            ));
        }
        if !self.rotate.is_finite() {
            return Err(PageFinderError::InvalidInput(format!(
                "--rotate must be a finite angle, got {}",
                self.rotate
            )));
        }

        let xform = ImageTransformation::new(size, dpi);
        if self.is_rotated() {
            let rotated = xform.with_transform(AffineTransform::rotate_degrees(self.rotate));
            let bounds = rotated.resulting_rect();
            let shift = AffineTransform::translate(-bounds.x, -bounds.y);
            Ok(rotated.with_transform(rotated.transform.then(&shift)))
        } else {
            Ok(xform)
        }
    }

    pub fn is_rotated(&self) -> bool {
        self.rotate.rem_euclid(360.0) != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("pagefinder").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn defaults() {
        let args = parse(&["scan.png"]);
        assert_eq!(args.input, PathBuf::from("scan.png"));
        assert_eq!(args.dpi, 300);
        assert!(!args.is_rotated());
        assert!(args.crop.is_none());
        assert!(args.debug_dir.is_none());
    }

    #[test]
    fn unrotated_transformation_is_identity() {
        let args = parse(&["scan.png", "--dpi", "600"]);
        let xform = args.transformation((100, 200)).unwrap();
        assert_eq!(xform.transform, AffineTransform::identity());
        assert_eq!(xform.source_dpi, Dpi::uniform(600));
    }

    #[test]
    fn rotated_transformation_starts_at_origin() {
        let args = parse(&["scan.png", "--rotate", "-30"]);
        let rect = args.transformation((100, 200)).unwrap().resulting_rect();
        assert!(rect.x.abs() < 1e-9 && rect.y.abs() < 1e-9, "{rect:?}");
    }

    #[test]
    fn full_turn_is_not_a_rotation() {
        assert!(!parse(&["scan.png", "--rotate", "360"]).is_rotated());
    }

    #[test]
    fn zero_dpi_is_rejected() {
        let args = parse(&["scan.png", "--dpi", "0"]);
        assert!(matches!(
            args.transformation((10, 10)),
            Err(PageFinderError::InvalidInput(_))
        ));
    }
}
