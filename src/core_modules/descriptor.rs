// THEORY:
// The `Descriptor` is the hand-off between the two halves of the decoder. It is the
// extractor's only output and the classifier's only input: a fixed set of scalars
// (count, centroid, bounds, three ratios and a symmetry score) that summarize the
// dark shape in a grid.
//
// Like `SmartBlob`, it is a stateless data container. It is produced once per
// extraction call, consumed immediately and never mutated. Its fields are public so
// that callers (and tests) can build descriptors directly and exercise the classifier
// without going through a grid.

/// Tight box around all dark samples, in grid coordinates (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min_x: u32,
    pub max_x: u32,
    pub min_y: u32,
    pub max_y: u32,
}

impl BoundingBox {
    /// Horizontal extent, `max_x - min_x`.
    pub fn span_x(&self) -> u32 {
        self.max_x - self.min_x
    }

    /// Vertical extent, `max_y - min_y`.
    pub fn span_y(&self) -> u32 {
        self.max_y - self.min_y
    }

    /// Number of grid cells covered by the box.
    pub fn area(&self) -> u64 {
        (self.span_x() as u64 + 1) * (self.span_y() as u64 + 1)
    }
}

/// Shape measurements of the dark region in a `PixelGrid`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Descriptor {
    /// Number of dark samples.
    pub pixel_count: usize,
    /// Mean `(x, y)` position of the dark samples.
    pub centroid: (f64, f64),
    pub bounding_box: BoundingBox,
    /// Box width over box height, with the height floor-protected.
    pub aspect_ratio: f64,
    /// `pixel_count / (width * height)`, always in `[0, 1]`.
    pub fill_ratio: f64,
    /// `pixel_count` over the bounding box area.
    pub compactness: f64,
    /// 1.0 when dark samples are spread evenly across the angular rays around the
    /// centroid. Unbounded below.
    pub radial_symmetry: f64,
}

impl Descriptor {
    /// Human-readable summary of the three scalars the classifier reports back.
    pub fn summary(&self) -> String {
        format!(
            "Analyzed geometric form with aspect ratio {:.2}, fill ratio {:.3}, radial symmetry {:.2}",
            self.aspect_ratio, self.fill_ratio, self.radial_symmetry
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_area_is_inclusive() {
        let bbox = BoundingBox {
            min_x: 20,
            max_x: 80,
            min_y: 5,
            max_y: 5,
        };
        assert_eq!(bbox.span_x(), 60);
        assert_eq!(bbox.span_y(), 0);
        assert_eq!(bbox.area(), 61);
    }

    #[test]
    fn summary_uses_fixed_precision() {
        let descriptor = Descriptor {
            pixel_count: 2821,
            centroid: (50.0, 50.0),
            bounding_box: BoundingBox::default(),
            aspect_ratio: 0.999998,
            fill_ratio: 0.2821,
            compactness: 0.7581,
            radial_symmetry: 0.9687,
        };
        assert_eq!(
            descriptor.summary(),
            "Analyzed geometric form with aspect ratio 1.00, fill ratio 0.282, radial symmetry 0.97"
        );
    }
}
