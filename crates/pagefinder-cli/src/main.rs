// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pagefinder — content-box detection for scanned pages.
//
// Entry point. Initialises logging, loads the scan, runs detection, and prints
// a JSON report.

mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use image::DynamicImage;
use pagefinder_core::error::{PageFinderError, Result};
use pagefinder_core::{CancellationToken, Dpi, FloatRect, ScanParams};
use pagefinder_detect::{DebugImages, DebugSink, PageFinder};
use serde::Serialize;

use cli::Args;

/// JSON report printed on stdout.
#[derive(Debug, Serialize)]
struct Report {
    input: PathBuf,
    source_size: (u32, u32),
    dpi: Dpi,
    rotate: f64,
    /// `None` when no content box was found.
    page_box: Option<FloatRect>,
    params: ScanParams,
    crop: Option<PathBuf>,
    debug_images: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match run(&args) {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize report");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            tracing::error!(error = %err, input = %args.input.display(), "page detection failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Report> {
    let source = image::open(&args.input).map_err(|err| {
        PageFinderError::ImageError(format!(
            "failed to open {}: {}",
            args.input.display(),
            err
        ))
    })?;
    let gray = source.to_luma8();
    tracing::info!(
        width = gray.width(),
        height = gray.height(),
        dpi = args.dpi,
        "Scan loaded"
    );

    let xform = args.transformation(gray.dimensions())?;
    let finder = PageFinder::new();
    let token = CancellationToken::new();

    let mut debug_images = DebugImages::new();
    let dbg: Option<&mut dyn DebugSink> = if args.debug_dir.is_some() {
        Some(&mut debug_images)
    } else {
        None
    };
    let page_box = finder.find_page_box(&gray, &xform, dbg, &token)?;

    let debug_paths = match &args.debug_dir {
        Some(dir) => debug_images.save_all(dir)?,
        None => Vec::new(),
    };

    let crop = match (&args.crop, page_box.is_empty()) {
        (Some(path), false) if !args.is_rotated() => {
            save_crop(&source, &page_box, path)?;
            Some(path.clone())
        }
        (Some(_), _) => {
            tracing::warn!(
                rotated = args.is_rotated(),
                empty = page_box.is_empty(),
                "Crop skipped"
            );
            None
        }
        (None, _) => None,
    };

    Ok(Report {
        input: args.input.clone(),
        source_size: gray.dimensions(),
        dpi: xform.source_dpi,
        rotate: args.rotate,
        page_box: (!page_box.is_empty()).then_some(page_box),
        params: *finder.params(),
        crop,
        debug_images: debug_paths,
    })
}

/// Crop `source` to the pixels covered by `page_box` and save it.
fn save_crop(source: &DynamicImage, page_box: &FloatRect, path: &Path) -> Result<()> {
    let (x, y, width, height) = crop_bounds(page_box, source.width(), source.height());
    tracing::info!(x, y, width, height, path = %path.display(), "Writing cropped page");
    source.crop_imm(x, y, width, height).save(path).map_err(|err| {
        PageFinderError::ImageError(format!(
            "failed to save crop to {}: {}",
            path.display(),
            err
        ))
    })
}

/// Integer pixel bounds of `page_box`, clamped to an image of the given size.
fn crop_bounds(page_box: &FloatRect, img_w: u32, img_h: u32) -> (u32, u32, u32, u32) {
    let clamp = |v: f64, max: u32| v.round().clamp(0.0, max as f64) as u32;
    let x0 = clamp(page_box.x, img_w);
    let y0 = clamp(page_box.y, img_h);
    let x1 = clamp(page_box.right(), img_w);
    let y1 = clamp(page_box.bottom(), img_h);
    (x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use std::ffi::OsStr;

    fn write_scan(dir: &Path) -> PathBuf {
        let img = GrayImage::from_fn(400, 300, |x, y| {
            if (50..350).contains(&x) && (50..250).contains(&y) {
                Luma([230u8])
            } else {
                Luma([20u8])
            }
        });
        let path = dir.join("scan.png");
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn crop_bounds_are_clamped() {
        let page = FloatRect::new(-3.2, 10.6, 500.0, 20.0);
        assert_eq!(crop_bounds(&page, 400, 300), (0, 11, 400, 20));
    }

    #[test]
    fn run_reports_box_and_writes_outputs() {
        let tmp = tempfile::tempdir().unwrap();
        let input = write_scan(tmp.path());
        let crop = tmp.path().join("page.png");
        let debug_dir = tmp.path().join("debug");

        let args = Args::try_parse_from([
            OsStr::new("pagefinder"),
            input.as_os_str(),
            OsStr::new("--dpi"),
            OsStr::new("150"),
            OsStr::new("--crop"),
            crop.as_os_str(),
            OsStr::new("--debug-dir"),
            debug_dir.as_os_str(),
        ])
        .unwrap();

        let report = run(&args).unwrap();
        assert_eq!(report.page_box, Some(FloatRect::new(51.0, 51.0, 299.0, 199.0)));
        assert_eq!(report.source_size, (400, 300));
        assert_eq!(report.debug_images.len(), 2);

        let cropped = image::open(&crop).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (299, 199));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["params"]["gap_tolerance"], 20);
    }

    #[test]
    fn missing_input_is_an_image_error() {
        let args = Args::try_parse_from(["pagefinder", "/nonexistent/scan.png"]).unwrap();
        assert!(matches!(run(&args), Err(PageFinderError::ImageError(_))));
    }
}
