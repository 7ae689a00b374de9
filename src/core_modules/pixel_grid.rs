// THEORY:
// The `PixelGrid` is the input side of the decoder: a row-major, immutable 2D array
// of `Sample`s. It is owned by the caller and only ever borrowed by the extractor.
//
// Key architectural principles:
// 1.  **Dumb Container**: Like `Sample`, the grid knows nothing about shapes. It can
//     answer "what is at (x, y)" and "is (x, y) inside me", nothing more.
// 2.  **Raw Buffers In**: Decoded images usually arrive as flat RGB or RGBA byte
//     buffers. The grid slices those into samples the same way a frame buffer is
//     walked elsewhere: `byte_index = ((y * width) + x) * channels`.
// 3.  **Zero Area Is Representable**: A 0xN grid can be built so that extraction can
//     reject it explicitly with `InvalidGrid`, rather than failing at construction.

use crate::core_modules::error::GridError;
use crate::core_modules::sample::sample::Sample;

/// An immutable, row-major grid of RGB samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    samples: Vec<Sample>,
}

impl PixelGrid {
    /// Builds a grid from row-major samples. The sample count must be `width * height`.
    pub fn new(width: u32, height: u32, samples: Vec<Sample>) -> Result<Self, GridError> {
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(GridError::SampleCountMismatch {
                width,
                height,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// A grid where every sample has the same value.
    pub fn filled(width: u32, height: u32, sample: Sample) -> Self {
        Self {
            width,
            height,
            samples: vec![sample; width as usize * height as usize],
        }
    }

    /// Builds a grid by evaluating `f(x, y)` for every position, row by row.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Sample,
    {
        let mut samples = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            samples,
        }
    }

    /// Interprets a packed RGB8 buffer.
    pub fn from_rgb_bytes(width: u32, height: u32, buffer: &[u8]) -> Result<Self, GridError> {
        Self::from_packed(width, height, buffer, 3, |bytes| {
            Sample::new(bytes[0], bytes[1], bytes[2])
        })
    }

    /// Interprets a packed RGBA8 buffer, compositing each sample over `background`.
    pub fn from_rgba_bytes(
        width: u32,
        height: u32,
        buffer: &[u8],
        background: Sample,
    ) -> Result<Self, GridError> {
        Self::from_packed(width, height, buffer, 4, |bytes| {
            Sample::over([bytes[0], bytes[1], bytes[2], bytes[3]], background)
        })
    }

    fn from_packed<F>(
        width: u32,
        height: u32,
        buffer: &[u8],
        channels: usize,
        to_sample: F,
    ) -> Result<Self, GridError>
    where
        F: Fn(&[u8]) -> Sample,
    {
        let expected = width as usize * height as usize * channels;
        if buffer.len() != expected {
            return Err(GridError::BufferLength {
                width,
                height,
                channels,
                actual: buffer.len(),
            });
        }
        let samples = buffer.chunks_exact(channels).map(to_sample).collect();
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of samples, `width * height`.
    pub fn area(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The sample at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<&Sample> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.samples.get((y as usize * self.width as usize) + x as usize)
    }

    /// Like `get`, but for signed coordinates produced by ray walking.
    pub fn get_signed(&self, x: i64, y: i64) -> Option<&Sample> {
        if x < 0 || y < 0 {
            return None;
        }
        self.get(u32::try_from(x).ok()?, u32::try_from(y).ok()?)
    }

    /// Iterates `(x, y, sample)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &Sample)> + '_ {
        let width = self.width.max(1) as usize;
        self.samples
            .iter()
            .enumerate()
            .map(move |(i, sample)| ((i % width) as u32, (i / width) as u32, sample))
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Flattens the grid back into a packed RGB8 buffer.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.samples.len() * 3);
        for sample in &self.samples {
            buffer.extend_from_slice(&[sample.red, sample.green, sample.blue]);
        }
        buffer
    }
}
