// THEORY:
// The `pipeline` module is the top-level API of the decoder. It wraps the core
// (extract, then classify) and the preset catalog behind a single request/report
// interface: a caller hands in either a grid or a preset key and gets back a `Report`
// that the presentation layer can render the same way regardless of where it came
// from. The pipeline owns nothing mutable; every call is independent.

use crate::core_modules::category_record::{CategoryRecord, SymbolicRecord};
use crate::core_modules::classifier::classify;
use crate::core_modules::descriptor::Descriptor;
use crate::core_modules::error::{DecoderError, DecoderResult};
use crate::core_modules::extractor::extractor::extract;
use crate::core_modules::pixel_grid::PixelGrid;
use crate::core_modules::preset_catalog::{self, Preset};
use crate::core_modules::sample::sample::Sample;
use crate::core_modules::utils::image_helper::image_helper;
use std::path::Path;
use tracing::{info, warn};

// Re-export key data structures for the public API.
pub use crate::core_modules::category_record::Category;
pub use crate::core_modules::error::ExtractionError;

const DEFAULT_MAX_EDGE: u32 = 400;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Configuration for the decoder, allowing for tunable input handling.
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Decoded images are scaled to fit a `max_edge` square before extraction.
    /// 0 disables scaling.
    pub max_edge: u32,
    /// Color transparent pixels are composited over.
    pub background: Sample,
    /// Uploads larger than this are rejected before decoding.
    pub max_upload_bytes: usize,
    /// Number of workers used by the parallel decoder.
    pub worker_count: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_edge: DEFAULT_MAX_EDGE,
            background: Sample::WHITE,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            worker_count: num_cpus::get(),
        }
    }
}

/// What the caller wants decoded.
#[derive(Debug, Clone)]
pub enum DecodeRequest {
    /// Measure and classify a grid.
    Grid(PixelGrid),
    /// Look up a named preset.
    Preset(String),
}

/// The output of the decoder for a single request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Report {
    Computed {
        descriptor: Descriptor,
        record: CategoryRecord,
    },
    Preset(&'static Preset),
}

impl Report {
    pub fn name(&self) -> &str {
        match self {
            Report::Computed { record, .. } => record.name,
            Report::Preset(preset) => preset.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Report::Computed { record, .. } => &record.description,
            Report::Preset(preset) => preset.description,
        }
    }

    pub fn symbolic(&self) -> &SymbolicRecord {
        match self {
            Report::Computed { record, .. } => record.symbolic,
            Report::Preset(preset) => &preset.symbolic,
        }
    }

    /// The computed category, if this report came from a grid.
    pub fn category(&self) -> Option<Category> {
        match self {
            Report::Computed { record, .. } => Some(record.category),
            Report::Preset(_) => None,
        }
    }
}

/// The main, top-level struct for the decoder.
#[derive(Debug, Clone, Default)]
pub struct DecoderPipeline {
    config: DecoderConfig,
}

impl DecoderPipeline {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn decode(&self, request: &DecodeRequest) -> DecoderResult<Report> {
        match request {
            DecodeRequest::Grid(grid) => self.decode_grid(grid),
            DecodeRequest::Preset(key) => self.decode_preset(key),
        }
    }

    pub fn decode_grid(&self, grid: &PixelGrid) -> DecoderResult<Report> {
        // Stage 1: Descriptor extraction
        let descriptor = match extract(grid) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                warn!(width = grid.width(), height = grid.height(), %err, "grid rejected");
                return Err(err.into());
            }
        };

        // Stage 2: Classification
        let record = classify(&descriptor);
        info!(
            category = %record.category,
            pixel_count = descriptor.pixel_count,
            "grid classified"
        );
        Ok(Report::Computed { descriptor, record })
    }

    pub fn decode_preset(&self, key: &str) -> DecoderResult<Report> {
        preset_catalog::lookup(key)
            .map(Report::Preset)
            .ok_or_else(|| DecoderError::UnknownPreset(key.to_string()))
    }

    /// Decodes an uploaded image buffer and classifies it.
    pub fn decode_upload(&self, bytes: &[u8]) -> DecoderResult<Report> {
        let grid = image_helper::decode_upload(bytes, &self.config)?;
        self.decode_grid(&grid)
    }

    /// Opens an image file and classifies it.
    pub fn decode_file<P: AsRef<Path>>(&self, path: P) -> DecoderResult<Report> {
        let grid = image_helper::load(path, &self.config)?;
        self.decode_grid(&grid)
    }
}
