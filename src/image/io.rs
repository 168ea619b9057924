//! I/O helpers for sketch sources, sketch outputs and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned interleaved RGB buffer.
//! - `save_gray_image`: write a single-channel buffer to disk (PNG and friends).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{GrayImageU8, RasterU8};
use crate::error::SketchError;
use image::{DynamicImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned interleaved 8-bit RGB buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbImageU8 {
    /// Construct an owned RGB buffer given raw interleaved bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `RasterU8` view
    pub fn as_view(&self) -> RasterU8<'_> {
        RasterU8 {
            w: self.width,
            h: self.height,
            channels: 3,
            stride: self.width * 3,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to interleaved 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImageU8, SketchError> {
    let img = image::open(path)
        .map_err(|e| SketchError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(RgbImageU8::new(width, height, data))
}

/// Save a single-channel 8-bit buffer to disk; format follows the extension.
pub fn save_gray_image(buffer: &GrayImageU8, path: &Path) -> Result<(), SketchError> {
    ensure_parent_dir(path).map_err(|message| SketchError::Encode {
        path: path.to_path_buf(),
        message,
    })?;
    let data = buffer.data.clone();
    let image: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.w as u32, buffer.h as u32, data).ok_or_else(|| {
            SketchError::Encode {
                path: path.to_path_buf(),
                message: "buffer does not match dimensions".to_string(),
            }
        })?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| SketchError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), SketchError> {
    ensure_parent_dir(path).map_err(|message| SketchError::Encode {
        path: path.to_path_buf(),
        message,
    })?;
    let json = serde_json::to_string_pretty(value).map_err(|e| SketchError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path, json).map_err(|e| SketchError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::TimingBreakdown;

    #[test]
    fn as_view_exposes_rgb_layout() {
        let img = RgbImageU8::new(2, 1, vec![10, 20, 30, 40, 50, 60]);
        let view = img.as_view();
        assert_eq!(view.channels, 3);
        assert_eq!(view.stride, 6);
        assert_eq!(view.get(1, 0, 2), 60);
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.png");
        let mut gray = GrayImageU8::new(3, 2);
        gray.set(1, 0, 128);
        gray.set(2, 1, 255);
        save_gray_image(&gray, &path).expect("save");

        let reloaded = image::open(&path).expect("reload").into_luma8();
        assert_eq!(reloaded.width(), 3);
        assert_eq!(reloaded.height(), 2);
        assert_eq!(reloaded.get_pixel(1, 0).0[0], 128);
        assert_eq!(reloaded.get_pixel(2, 1).0[0], 255);
    }

    #[test]
    fn save_rejects_mismatched_buffer() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.png");
        let gray = GrayImageU8 {
            w: 4,
            h: 4,
            stride: 4,
            data: vec![0; 3],
        };
        assert!(save_gray_image(&gray, &path).is_err());
    }

    #[test]
    fn load_rgb_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tiny.png");
        let mut rgb = image::RgbImage::new(2, 2);
        rgb.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        rgb.put_pixel(1, 1, image::Rgb([1, 2, 3]));
        rgb.save(&path).expect("save");

        let loaded = load_rgb_image(&path).expect("load");
        assert_eq!((loaded.width(), loaded.height()), (2, 2));
        let view = loaded.as_view();
        assert_eq!(
            [view.get(0, 0, 0), view.get(0, 0, 1), view.get(0, 0, 2)],
            [255, 0, 0]
        );
        assert_eq!(
            [view.get(1, 1, 0), view.get(1, 1, 1), view.get(1, 1, 2)],
            [1, 2, 3]
        );
    }

    #[test]
    fn decode_failure_reports_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("junk.png");
        fs::write(&path, b"not an image at all").expect("write junk");

        let err = load_rgb_image(&path).expect_err("junk bytes cannot decode");
        assert!(matches!(err, SketchError::Decode { .. }));
        assert!(
            err.to_string().contains("junk.png"),
            "error should name the file: {err}"
        );
    }

    #[test]
    fn json_report_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("trace.json");
        let mut timings = TimingBreakdown::with_total(4.25);
        timings.push("grayscale", 1.5);
        write_json_file(&path, &timings).expect("write");

        let raw = fs::read_to_string(&path).expect("read back");
        let back: TimingBreakdown = serde_json::from_str(&raw).expect("parse");
        assert_eq!(back.total_ms, 4.25);
        assert_eq!(back.stages.len(), 1);
        assert_eq!(back.stages[0].label, "grayscale");
        assert_eq!(back.stages[0].elapsed_ms, 1.5);
    }

    #[test]
    fn json_write_failure_reports_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"plain file").expect("write blocker");

        let path = blocker.join("trace.json");
        let err = write_json_file(&path, &vec![1, 2, 3]).expect_err("parent is not a directory");
        assert!(matches!(err, SketchError::Encode { .. }));
        assert!(
            err.to_string().contains("trace.json"),
            "error should name the file: {err}"
        );
    }
}
