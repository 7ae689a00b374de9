// THEORY:
// The bridge between encoded images and the decoder. Extraction wants a bounded,
// opaque RGB grid; real uploads are arbitrary formats, sizes and alpha layouts.
// This helper normalizes them the way an upload canvas would: scale so the longer
// fitting edge equals `max_edge`, paint transparent regions with the background
// color, then read the result back as samples.

pub mod image_helper {
    use crate::core_modules::error::{DecoderError, DecoderResult};
    use crate::core_modules::pixel_grid::PixelGrid;
    use crate::core_modules::sample::sample::Sample;
    use crate::pipeline::DecoderConfig;
    use image::DynamicImage;
    use image::imageops::FilterType;
    use std::path::Path;
    use tracing::debug;

    /// Target dimensions after fitting `width x height` into a `max_edge` square.
    ///
    /// Scales up as well as down. A `max_edge` of 0 leaves the size unchanged.
    pub fn fitted_size(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
        if max_edge == 0 || width == 0 || height == 0 {
            return (width, height);
        }
        let scale = (max_edge as f64 / width as f64).min(max_edge as f64 / height as f64);
        (
            ((width as f64 * scale) as u32).max(1),
            ((height as f64 * scale) as u32).max(1),
        )
    }

    /// Converts a decoded image into a grid, resized and flattened over the background.
    pub fn grid_from_image(image: &DynamicImage, config: &DecoderConfig) -> PixelGrid {
        let (target_width, target_height) =
            fitted_size(image.width(), image.height(), config.max_edge);

        let resized;
        let source = if (target_width, target_height) == (image.width(), image.height()) {
            image
        } else {
            debug!(
                from_width = image.width(),
                from_height = image.height(),
                target_width,
                target_height,
                "resizing image"
            );
            resized = image.resize_exact(target_width, target_height, FilterType::Triangle);
            &resized
        };

        let rgba = source.to_rgba8();
        PixelGrid::from_fn(rgba.width(), rgba.height(), |x, y| {
            Sample::over(rgba.get_pixel(x, y).0, config.background)
        })
    }

    /// Validates and decodes an uploaded byte buffer.
    pub fn decode_upload(bytes: &[u8], config: &DecoderConfig) -> DecoderResult<PixelGrid> {
        if bytes.is_empty() {
            return Err(DecoderError::EmptyUpload);
        }
        if bytes.len() > config.max_upload_bytes {
            return Err(DecoderError::UploadTooLarge {
                size: bytes.len(),
                limit: config.max_upload_bytes,
            });
        }
        let image = image::load_from_memory(bytes)?;
        Ok(grid_from_image(&image, config))
    }

    /// Opens and decodes an image file.
    pub fn load<P: AsRef<Path>>(path: P, config: &DecoderConfig) -> DecoderResult<PixelGrid> {
        let image = image::open(path)?;
        Ok(grid_from_image(&image, config))
    }

    /// Writes a grid out as an RGB PNG.
    pub fn save<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<(), image::error::ImageError> {
        image::save_buffer_with_format(
            path,
            &grid.to_rgb_bytes(),
            grid.width(),
            grid.height(),
            image::ExtendedColorType::Rgb8,
            image::ImageFormat::Png,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::image_helper::*;
    use crate::core_modules::error::DecoderError;
    use crate::core_modules::pixel_grid::PixelGrid;
    use crate::core_modules::sample::sample::Sample;
    use crate::pipeline::DecoderConfig;
    use image::{DynamicImage, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(image: &DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn fitting_scales_both_ways() {
        assert_eq!(fitted_size(800, 600, 400), (400, 300));
        assert_eq!(fitted_size(100, 50, 400), (400, 200));
        assert_eq!(fitted_size(400, 400, 400), (400, 400));
        assert_eq!(fitted_size(1000, 1, 400), (400, 1));
        assert_eq!(fitted_size(123, 45, 0), (123, 45));
    }

    #[test]
    fn transparency_becomes_background() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 0])));
        let config = DecoderConfig {
            max_edge: 0,
            ..DecoderConfig::default()
        };
        let grid = grid_from_image(&image, &config);
        assert_eq!(grid.width(), 10);
        assert!(grid.samples().iter().all(|s| *s == Sample::WHITE));
    }

    #[test]
    fn upload_is_resized_to_max_edge() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(50, 25, Rgba([0, 0, 0, 255])));
        let grid = decode_upload(&png_bytes(&image), &DecoderConfig::default()).expect("decodes");
        assert_eq!((grid.width(), grid.height()), (400, 200));
        assert!(grid.samples().iter().all(|s| s.is_dark()));
    }

    #[test]
    fn upload_limits() {
        let config = DecoderConfig {
            max_upload_bytes: 16,
            ..DecoderConfig::default()
        };
        assert!(matches!(decode_upload(&[], &config), Err(DecoderError::EmptyUpload)));
        assert!(matches!(
            decode_upload(&[0u8; 17], &config),
            Err(DecoderError::UploadTooLarge { size: 17, limit: 16 })
        ));
        assert!(matches!(
            decode_upload(b"not an image", &DecoderConfig::default()),
            Err(DecoderError::Image(_))
        ));
    }

    #[test]
    fn saved_grids_load_back() {
        let grid = PixelGrid::from_fn(40, 40, |x, y| {
            if (x as i64 - 20).pow(2) + (y as i64 - 20).pow(2) <= 144 {
                Sample::BLACK
            } else {
                Sample::WHITE
            }
        });
        let path = std::env::temp_dir().join(format!("geometry_decoder_{}.png", std::process::id()));
        save(&grid, &path).expect("save png");

        let config = DecoderConfig {
            max_edge: 0,
            ..DecoderConfig::default()
        };
        let loaded = load(&path, &config).expect("load png");
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, grid);
    }
}
