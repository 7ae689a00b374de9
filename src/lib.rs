// THEORY:
// This file is the main entry point for the `geometry_decoder` library crate.
// It exposes two layers:
//
// - The core: `extract` reduces a `PixelGrid` to a shape `Descriptor`, and
//   `classify` maps that descriptor onto one of five field-pattern categories.
//   Both are pure functions and can be called from any thread.
// - The pipeline: `DecoderPipeline` (and its batched sibling `ParallelDecoder`)
//   accepts explicit requests, either a grid or a preset key, and returns a
//   uniform `Report`. Image decoding and the preset catalog live behind it.

pub mod core_modules;
pub mod parallel_pipeline;
pub mod pipeline;

pub use core_modules::category_record::{Category, CategoryRecord, SymbolicRecord};
pub use core_modules::classifier::classify;
pub use core_modules::descriptor::{BoundingBox, Descriptor};
pub use core_modules::error::{DecoderError, DecoderResult, ExtractionError, GridError};
pub use core_modules::extractor::extractor::extract;
pub use core_modules::pixel_grid::PixelGrid;
pub use core_modules::preset_catalog::Preset;
pub use core_modules::sample::sample::Sample;
pub use parallel_pipeline::ParallelDecoder;
pub use pipeline::{DecodeRequest, DecoderConfig, DecoderPipeline, Report};
