// THEORY (Single-Sample Heuristics):
// The `Sample` module is the most fundamental unit of the decoder. It is a "dumb"
// data container for a single RGB sample plus the one heuristic the extractor
// needs from it: is this sample "dark"? That question is answered from the sample
// alone, with no knowledge of neighbors. Anything that needs more than one sample
// (centroids, bounds, rays) belongs in the extractor.
//
// The darkness test is a plain channel average against a fixed threshold. There is
// no gamma correction and no anti-aliasing compensation: a sample whose mean
// channel value is below 200 counts as ink, everything else counts as paper.

pub mod sample {
    pub type Channel = u8;
    pub type Brightness = f64;

    const CHANNELS: usize = 3;

    /// Samples whose mean channel value falls below this are treated as dark.
    pub const DARK_THRESHOLD: Brightness = 200.0;

    /// A "dumb" data container representing a single RGB sample.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Sample {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
    }

    impl Sample {
        pub const WHITE: Sample = Sample::new(255, 255, 255);
        pub const BLACK: Sample = Sample::new(0, 0, 0);

        pub const fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Sample { red, green, blue }
        }

        pub const fn gray(level: Channel) -> Self {
            Sample::new(level, level, level)
        }

        /// Mean of the three channels, on the 0..255 scale.
        pub fn brightness(&self) -> Brightness {
            (self.red as Brightness + self.green as Brightness + self.blue as Brightness) / 3.0
        }

        /// Binarization used throughout extraction.
        #[inline]
        pub fn is_dark(&self) -> bool {
            self.brightness() < DARK_THRESHOLD
        }

        /// Composites an RGBA value over an opaque background.
        ///
        /// - Alpha 255 returns the color unchanged, alpha 0 returns the background.
        /// - Rounds to the nearest channel value.
        pub fn over(rgba: [Channel; 4], background: Sample) -> Self {
            let alpha = rgba[3] as f64 / 255.0;
            let blend = |fg: Channel, bg: Channel| -> Channel {
                (fg as f64 * alpha + bg as f64 * (1.0 - alpha)).round() as Channel
            };
            Sample::new(
                blend(rgba[0], background.red),
                blend(rgba[1], background.green),
                blend(rgba[2], background.blue),
            )
        }
    }

    impl From<[Channel; CHANNELS]> for Sample {
        fn from(channels: [Channel; CHANNELS]) -> Self {
            Sample::new(channels[0], channels[1], channels[2])
        }
    }

    impl From<Sample> for [Channel; CHANNELS] {
        fn from(sample: Sample) -> Self {
            [sample.red, sample.green, sample.blue]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::sample::*;

    #[test]
    fn threshold_is_strict() {
        // 200 average is paper, 199.67 is ink.
        assert!(!Sample::gray(200).is_dark());
        assert!(Sample::new(200, 200, 199).is_dark());
        assert!(Sample::BLACK.is_dark());
        assert!(!Sample::WHITE.is_dark());
    }

    #[test]
    fn saturated_colors_use_channel_mean() {
        // Pure red averages to 85, which is dark even though one channel is full.
        assert!(Sample::new(255, 0, 0).is_dark());
        // Yellow averages to 170.
        assert!(Sample::new(255, 255, 0).is_dark());
        // Pale cyan averages to 220.
        assert!(!Sample::new(150, 255, 255).is_dark());
    }

    #[test]
    fn compositing_over_white() {
        assert_eq!(Sample::over([0, 0, 0, 0], Sample::WHITE), Sample::WHITE);
        assert_eq!(Sample::over([0, 0, 0, 255], Sample::WHITE), Sample::BLACK);
        assert_eq!(Sample::over([0, 0, 0, 128], Sample::WHITE), Sample::gray(127));
    }
}
