// THEORY:
// The `extractor` is the measurement half of the decoder. It reduces a `PixelGrid` to
// a `Descriptor`: a handful of scalars that say how much ink there is, where it sits,
// how it fills its envelope and how evenly it spreads around its own center.
//
// Algorithm steps:
// 1.  **Binarization & Aggregation**: One row-major scan over the grid. Every dark
//     sample bumps the count, the centroid sums and the running bounds. Nothing else
//     is allocated; the scan is O(W*H) with O(1) accumulators.
// 2.  **Ratios**: Aspect ratio, fill ratio and compactness fall straight out of the
//     count and the bounding box. The aspect ratio's denominator carries a small
//     epsilon so a single-row shape does not divide by zero.
// 3.  **Radial Sampling**: 32 rays are cast from the centroid, evenly spaced around
//     the full circle. Each ray steps outward two units at a time up to half the
//     shorter grid edge and counts how many of its probes land on ink. Probes outside
//     the grid are skipped. The spread of those 32 counts around their mean becomes
//     the symmetry score: 1.0 for perfectly even rays, lower as rays disagree.
// 4.  **Rejection**: Zero-area grids are rejected before scanning. Grids with fewer
//     than 100 dark samples are rejected after scanning, because a near-empty image
//     would otherwise be classified on noise.
// 5.  **Stateless Utility**: `extract` is a pure function of its input.

use crate::core_modules::descriptor::{BoundingBox, Descriptor};
use crate::core_modules::error::ExtractionError;
use crate::core_modules::pixel_grid::PixelGrid;

pub mod extractor {
    use super::*;
    use std::f64::consts::TAU;
    use tracing::debug;

    /// Fewer dark samples than this and the grid is not worth classifying.
    pub const MIN_DARK_SAMPLES: usize = 100;

    /// Number of angular rays used for the symmetry score.
    pub const RAY_COUNT: usize = 32;

    /// Distance between consecutive probes along a ray, in grid units.
    const RAY_STEP: f64 = 2.0;

    /// Keeps the aspect ratio finite for shapes with zero vertical extent.
    pub const ASPECT_EPSILON: f64 = 1e-4;

    /// Measures the dark shape in `grid`.
    ///
    /// Fails with `InvalidGrid` for zero-area input and with `InsufficientFeatures`
    /// when fewer than `MIN_DARK_SAMPLES` samples are dark.
    pub fn extract(grid: &PixelGrid) -> Result<Descriptor, ExtractionError> {
        if grid.is_empty() {
            return Err(ExtractionError::InvalidGrid {
                width: grid.width(),
                height: grid.height(),
            });
        }

        let descriptor = measure(grid);
        debug!(
            width = grid.width(),
            height = grid.height(),
            pixel_count = descriptor.pixel_count,
            aspect_ratio = descriptor.aspect_ratio,
            fill_ratio = descriptor.fill_ratio,
            compactness = descriptor.compactness,
            radial_symmetry = descriptor.radial_symmetry,
            "measured grid"
        );

        if descriptor.pixel_count < MIN_DARK_SAMPLES {
            return Err(ExtractionError::InsufficientFeatures {
                pixel_count: descriptor.pixel_count,
                minimum: MIN_DARK_SAMPLES,
            });
        }
        Ok(descriptor)
    }

    /// Computes every descriptor field without applying the rejection thresholds.
    ///
    /// With no dark samples the centroid is the grid center, the bounding box is
    /// all zeros and the symmetry score is 0. Callers go through `extract`.
    pub(crate) fn measure(grid: &PixelGrid) -> Descriptor {
        // --- 1. Single-pass aggregation ---
        let mut pixel_count = 0usize;
        let mut sum_x = 0u64;
        let mut sum_y = 0u64;
        let mut min_x = u32::MAX;
        let mut min_y = u32::MAX;
        let mut max_x = 0;
        let mut max_y = 0;

        for (x, y, sample) in grid.iter() {
            if !sample.is_dark() {
                continue;
            }
            pixel_count += 1;
            sum_x += x as u64;
            sum_y += y as u64;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        let (centroid, bounding_box) = if pixel_count == 0 {
            (
                (grid.width() as f64 / 2.0, grid.height() as f64 / 2.0),
                BoundingBox::default(),
            )
        } else {
            (
                (
                    sum_x as f64 / pixel_count as f64,
                    sum_y as f64 / pixel_count as f64,
                ),
                BoundingBox {
                    min_x,
                    max_x,
                    min_y,
                    max_y,
                },
            )
        };

        // --- 2. Ratios ---
        let aspect_ratio =
            bounding_box.span_x() as f64 / (bounding_box.span_y() as f64 + ASPECT_EPSILON);
        let fill_ratio = if grid.area() == 0 {
            0.0
        } else {
            pixel_count as f64 / grid.area() as f64
        };
        let compactness = pixel_count as f64 / bounding_box.area() as f64;

        // --- 3. Radial sampling ---
        let rays = ray_counts(grid, centroid);
        let radial_symmetry = symmetry_score(&rays);

        Descriptor {
            pixel_count,
            centroid,
            bounding_box,
            aspect_ratio,
            fill_ratio,
            compactness,
            radial_symmetry,
        }
    }

    /// Casts `RAY_COUNT` rays from `origin` and counts the dark probes along each.
    ///
    /// Ray `i` points at angle `i * 2π / RAY_COUNT`. Probes sit at radii
    /// `0, 2, 4, ...` strictly below half the shorter grid edge and are rounded to
    /// the nearest sample, halves rounding up.
    pub fn ray_counts(grid: &PixelGrid, origin: (f64, f64)) -> [u32; RAY_COUNT] {
        let max_radius = grid.width().min(grid.height()) as f64 / 2.0;
        let mut rays = [0u32; RAY_COUNT];

        for (i, hits) in rays.iter_mut().enumerate() {
            let angle = i as f64 * TAU / RAY_COUNT as f64;
            let (sin, cos) = angle.sin_cos();

            let mut radius = 0.0;
            while radius < max_radius {
                let x = round_half_up(origin.0 + radius * cos);
                let y = round_half_up(origin.1 + radius * sin);
                if grid.get_signed(x, y).is_some_and(|sample| sample.is_dark()) {
                    *hits += 1;
                }
                radius += RAY_STEP;
            }
        }

        rays
    }

    /// `1 - Σ|ray - mean| / (mean * n)`, or 0 when no ray hit anything.
    pub(crate) fn symmetry_score(rays: &[u32]) -> f64 {
        if rays.is_empty() {
            return 0.0;
        }
        let n = rays.len() as f64;
        let mean = rays.iter().map(|&r| r as f64).sum::<f64>() / n;
        if mean == 0.0 {
            return 0.0;
        }
        let deviation: f64 = rays.iter().map(|&r| (r as f64 - mean).abs()).sum();
        1.0 - deviation / (mean * n)
    }

    #[inline]
    fn round_half_up(value: f64) -> i64 {
        (value + 0.5).floor() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::extractor::*;
    use super::*;
    use crate::core_modules::sample::sample::Sample;
    use approx::assert_relative_eq;

    fn ink_if(dark: bool) -> Sample {
        if dark { Sample::BLACK } else { Sample::WHITE }
    }

    fn disk(size: u32, cx: i64, cy: i64, radius: i64) -> PixelGrid {
        PixelGrid::from_fn(size, size, |x, y| {
            let dx = x as i64 - cx;
            let dy = y as i64 - cy;
            ink_if(dx * dx + dy * dy <= radius * radius)
        })
    }

    #[test]
    fn zero_area_is_invalid() {
        for (w, h) in [(0, 10), (10, 0), (0, 0)] {
            let grid = PixelGrid::filled(w, h, Sample::BLACK);
            assert_eq!(
                extract(&grid),
                Err(ExtractionError::InvalidGrid { width: w, height: h })
            );
        }
    }

    #[test]
    fn bright_grids_lack_features() {
        for level in [200u8, 230, 255] {
            let grid = PixelGrid::filled(64, 48, Sample::gray(level));
            assert_eq!(
                extract(&grid),
                Err(ExtractionError::InsufficientFeatures {
                    pixel_count: 0,
                    minimum: MIN_DARK_SAMPLES
                })
            );
        }
    }

    #[test]
    fn ninety_nine_dark_samples_are_not_enough() {
        let grid = PixelGrid::from_fn(50, 50, |x, y| ink_if(y * 50 + x < 99));
        assert!(matches!(
            extract(&grid),
            Err(ExtractionError::InsufficientFeatures { pixel_count: 99, .. })
        ));

        let grid = PixelGrid::from_fn(50, 50, |x, y| ink_if(y * 50 + x < 100));
        assert_eq!(extract(&grid).map(|d| d.pixel_count), Ok(100));
    }

    #[test]
    fn empty_measurement_uses_fallbacks() {
        let grid = PixelGrid::filled(30, 20, Sample::WHITE);
        let descriptor = measure(&grid);
        assert_eq!(descriptor.pixel_count, 0);
        assert_eq!(descriptor.centroid, (15.0, 10.0));
        assert_eq!(descriptor.bounding_box, BoundingBox::default());
        assert_eq!(descriptor.radial_symmetry, 0.0);
        assert_eq!(descriptor.fill_ratio, 0.0);
    }

    #[test]
    fn centered_disk() {
        let grid = disk(100, 50, 50, 30);
        let d = extract(&grid).expect("disk has features");

        assert!((2750..=2900).contains(&d.pixel_count), "{}", d.pixel_count);
        assert_relative_eq!(d.centroid.0, 50.0, epsilon = 1e-9);
        assert_relative_eq!(d.centroid.1, 50.0, epsilon = 1e-9);
        assert_eq!(
            d.bounding_box,
            BoundingBox {
                min_x: 20,
                max_x: 80,
                min_y: 20,
                max_y: 80
            }
        );
        assert_relative_eq!(d.aspect_ratio, 1.0, epsilon = 1e-3);
        assert_relative_eq!(d.compactness, std::f64::consts::FRAC_PI_4, epsilon = 0.05);
        assert!(d.radial_symmetry > 0.9, "{}", d.radial_symmetry);
        assert!(d.fill_ratio > 0.0 && d.fill_ratio <= 1.0);
    }

    #[test]
    fn solid_strip() {
        let grid = PixelGrid::filled(100, 20, Sample::BLACK);
        let d = extract(&grid).expect("solid grid has features");
        assert_eq!(d.pixel_count, 2000);
        assert_relative_eq!(d.fill_ratio, 1.0);
        assert_relative_eq!(d.compactness, 1.0);
        assert_relative_eq!(d.aspect_ratio, 99.0 / (19.0 + ASPECT_EPSILON));
        assert_relative_eq!(d.centroid.0, 49.5);
        assert_relative_eq!(d.centroid.1, 9.5);
    }

    #[test]
    fn single_row_stays_finite() {
        let grid = PixelGrid::from_fn(200, 10, |_, y| ink_if(y == 4));
        let d = extract(&grid).expect("row has 200 samples");
        assert_relative_eq!(d.aspect_ratio, 199.0 / ASPECT_EPSILON);
        assert!(d.aspect_ratio.is_finite());
    }

    #[test]
    fn pixel_count_never_exceeds_area() {
        let grid = PixelGrid::from_fn(37, 23, |x, y| ink_if((x * 7 + y * 3) % 5 != 0));
        let d = measure(&grid);
        assert!(d.pixel_count <= grid.area());
        assert!((0.0..=1.0).contains(&d.fill_ratio));
    }

    #[test]
    fn rays_skip_out_of_bounds_probes() {
        // Only the center column is dark; rays pointing straight down and up hit it.
        let grid = PixelGrid::from_fn(21, 21, |x, _| ink_if(x == 10));
        let rays = ray_counts(&grid, (10.0, 10.0));
        // Radii 0, 2, 4, 6, 8, 10 are below a max radius of 10.5.
        assert_eq!(rays[8], 6);
        assert_eq!(rays[24], 6);
        // The horizontal rays only see the center sample.
        assert_eq!(rays[0], 1);
        assert_eq!(rays[16], 1);
    }

    #[test]
    fn symmetry_policy() {
        assert_eq!(symmetry_score(&[0; RAY_COUNT]), 0.0);
        assert_relative_eq!(symmetry_score(&[7; RAY_COUNT]), 1.0);

        let alternating: Vec<u32> = (0..RAY_COUNT).map(|i| if i % 2 == 0 { 0 } else { 2 }).collect();
        assert_relative_eq!(symmetry_score(&alternating), 0.0);

        // One ray carries everything: mean 1, deviation 31 + 31.
        let mut spike = [0u32; RAY_COUNT];
        spike[0] = 32;
        assert_relative_eq!(symmetry_score(&spike), 1.0 - 62.0 / 32.0);
    }
}
