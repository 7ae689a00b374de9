// THEORY:
// The error hierarchy of the decoder. `ExtractionError` holds the only two ways the
// core measurement can fail; both are deterministic properties of the input, so a
// caller should surface them and never retry. `GridError` covers buffers that cannot
// be turned into a grid at all. `DecoderError` is the crate-level root that the
// pipelines return, wrapping the other kinds plus image decoding and catalog misses.

use thiserror::Error;

/// Why a grid could not be reduced to a descriptor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The grid has zero area. Rejected before any scanning.
    #[error("invalid grid: {width}x{height} has no samples")]
    InvalidGrid { width: u32, height: u32 },

    /// Too few dark samples to classify reliably.
    #[error("No significant geometric features detected in the image ({pixel_count} dark samples, need {minimum})")]
    InsufficientFeatures { pixel_count: usize, minimum: usize },
}

/// A sample buffer that does not describe a `width * height` grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid of {width}x{height} needs {expected} samples, got {actual}")]
    SampleCountMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("buffer of {actual} bytes is not a whole number of {channels}-channel samples for {width}x{height}")]
    BufferLength {
        width: u32,
        height: u32,
        channels: usize,
        actual: usize,
    },
}

/// Root error type for all decoder failures.
#[derive(Error, Debug)]
pub enum DecoderError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Grid(#[from] GridError),

    /// The `image` crate could not open or decode the input.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("upload is empty")]
    EmptyUpload,

    #[error("upload of {size} bytes exceeds the {limit} byte limit")]
    UploadTooLarge { size: usize, limit: usize },

    /// The parallel decoder's workers have shut down.
    #[error("worker pool unavailable: {0}")]
    WorkerUnavailable(&'static str),
}

impl DecoderError {
    /// `true` when the input simply lacks geometry; the caller should show guidance
    /// instead of an error.
    pub fn is_insufficient_features(&self) -> bool {
        matches!(
            self,
            DecoderError::Extraction(ExtractionError::InsufficientFeatures { .. })
        )
    }
}

pub type DecoderResult<T> = Result<T, DecoderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_features_message_carries_guidance() {
        let err = ExtractionError::InsufficientFeatures {
            pixel_count: 12,
            minimum: 100,
        };
        let message = err.to_string();
        assert!(message.starts_with("No significant geometric features"));
        assert!(message.contains("12"));
    }

    #[test]
    fn wrapped_extraction_errors_stay_recognizable() {
        let err: DecoderError = ExtractionError::InsufficientFeatures {
            pixel_count: 0,
            minimum: 100,
        }
        .into();
        assert!(err.is_insufficient_features());

        let err: DecoderError = ExtractionError::InvalidGrid { width: 0, height: 4 }.into();
        assert!(!err.is_insufficient_features());
        assert_eq!(err.to_string(), "invalid grid: 0x4 has no samples");
    }
}
