//! Error taxonomy shared by the pipeline and the codec helpers.
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced to the immediate caller; no retries, no partial output.
#[derive(Debug, Error)]
pub enum SketchError {
    /// Source raster has zero width or height, a channel count other than
    /// three, or a pixel buffer shorter than its geometry implies.
    #[error("Invalid source image: {width}x{height} with {channels} channel(s)")]
    InvalidImage {
        width: usize,
        height: usize,
        channels: usize,
    },

    /// The codec could not decode the file at `path`.
    #[error("Failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// The codec could not encode or write the file at `path`.
    #[error("Failed to encode {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn invalid_image_names_the_geometry() {
        let err = SketchError::InvalidImage {
            width: 0,
            height: 480,
            channels: 4,
        };
        assert_eq!(
            err.to_string(),
            "Invalid source image: 0x480 with 4 channel(s)"
        );
    }

    #[test]
    fn decode_error_names_the_path() {
        let err = SketchError::Decode {
            path: Path::new("missing.png").to_path_buf(),
            message: "no such file".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to decode missing.png: no such file");
    }

    #[test]
    fn encode_error_names_the_path() {
        let err = SketchError::Encode {
            path: Path::new("out/sketch.png").to_path_buf(),
            message: "disk full".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to encode out/sketch.png: disk full"
        );
    }
}
