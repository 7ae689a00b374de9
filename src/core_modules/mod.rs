pub mod category_record;
pub mod classifier;
pub mod descriptor;
pub mod error;
pub mod extractor;
pub mod pixel_grid;
pub mod preset_catalog;
pub mod sample;
pub mod utils;
