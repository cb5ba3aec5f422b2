//! Owned image batch buffers.
//!
//! [`ImageBatch`] stores pixel data for one or more frames in a single
//! contiguous allocation with axes (batch, height, width, channels),
//! row-major, channels innermost. Axes are `usize`, so negative extents
//! are unrepresentable; zero extents are valid on every axis.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::channel::ChannelValue;

// ---------------------------------------------------------------------------
// BatchError
// ---------------------------------------------------------------------------

/// Errors from image batch construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BatchError {
    /// The shape's sample count overflows `usize`.
    InvalidDimensions,
    /// The backing vec length does not match the shape's sample count.
    LengthMismatch {
        /// Samples required by the shape.
        expected: usize,
        /// Samples in the supplied vec.
        actual: usize,
    },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions => write!(f, "shape sample count overflows usize"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "vec holds {actual} samples, shape requires {expected}")
            }
        }
    }
}

impl core::error::Error for BatchError {}

// ---------------------------------------------------------------------------
// ImageBatch
// ---------------------------------------------------------------------------

/// Owned pixel data with axes (batch, height, width, channels).
///
/// Both inputs to [`composite`](crate::composite) use this representation.
/// The backing vec can be recovered with [`into_vec`](Self::into_vec) for
/// pool reuse.
#[derive(Clone, PartialEq)]
pub struct ImageBatch<T> {
    data: Vec<T>,
    batch: usize,
    height: usize,
    width: usize,
    channels: usize,
}

impl<T: ChannelValue> ImageBatch<T> {
    /// Allocate a batch filled with [`BLACK`](ChannelValue::BLACK).
    pub fn new(batch: usize, height: usize, width: usize, channels: usize) -> Self {
        Self::filled(batch, height, width, channels, T::BLACK)
    }
}

impl<T: Copy> ImageBatch<T> {
    /// Allocate a batch filled with `value`.
    pub fn filled(batch: usize, height: usize, width: usize, channels: usize, value: T) -> Self {
        let total = batch * height * width * channels;
        Self {
            data: vec![value; total],
            batch,
            height,
            width,
            channels,
        }
    }

    /// Prepend `rows` full-width rows of `value` to every batch item.
    ///
    /// This is the canvas-growth primitive used when an overlay extends
    /// above the origin. Existing pixels keep their values and shift down
    /// by `rows`.
    pub fn extend_top(&mut self, rows: usize, value: T) {
        if rows == 0 {
            return;
        }
        let row_len = self.width * self.channels;
        let frame_len = self.height * row_len;
        let new_height = self.height + rows;
        let mut data = Vec::with_capacity(self.batch * new_height * row_len);
        for b in 0..self.batch {
            data.extend(core::iter::repeat_n(value, rows * row_len));
            let start = b * frame_len;
            data.extend_from_slice(&self.data[start..start + frame_len]);
        }
        self.data = data;
        self.height = new_height;
    }
}

impl<T> ImageBatch<T> {
    /// Wrap an existing vec of interleaved samples.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::InvalidDimensions`] if the shape's sample
    /// count overflows, or [`BatchError::LengthMismatch`] if `data` does
    /// not hold exactly `batch * height * width * channels` samples.
    pub fn from_vec(
        data: Vec<T>,
        batch: usize,
        height: usize,
        width: usize,
        channels: usize,
    ) -> Result<Self, BatchError> {
        let expected = batch
            .checked_mul(height)
            .and_then(|n| n.checked_mul(width))
            .and_then(|n| n.checked_mul(channels))
            .ok_or(BatchError::InvalidDimensions)?;
        if data.len() != expected {
            return Err(BatchError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            batch,
            height,
            width,
            channels,
        })
    }

    /// Wrap without validation. Callers guarantee `data.len()` matches the
    /// shape product.
    pub(crate) fn from_raw(
        data: Vec<T>,
        batch: usize,
        height: usize,
        width: usize,
        channels: usize,
    ) -> Self {
        debug_assert_eq!(data.len(), batch * height * width * channels);
        Self {
            data,
            batch,
            height,
            width,
            channels,
        }
    }

    /// Number of frames in the batch.
    #[inline]
    pub fn batch(&self) -> usize {
        self.batch
    }

    /// Frame height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Frame width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Channels per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Shape as (batch, height, width, channels).
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize, usize) {
        (self.batch, self.height, self.width, self.channels)
    }

    /// Total sample count across all axes.
    #[inline]
    pub fn samples(&self) -> usize {
        self.data.len()
    }

    /// All samples, batch-major.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the batch and return the backing vec for pool reuse.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Samples of row `y` in frame `b` (`width * channels` samples).
    ///
    /// # Panics
    ///
    /// Panics if `b >= batch` or `y >= height`.
    #[inline]
    pub fn row(&self, b: usize, y: usize) -> &[T] {
        let start = self.row_start(b, y);
        &self.data[start..start + self.width * self.channels]
    }

    /// Mutable samples of row `y` in frame `b`.
    ///
    /// # Panics
    ///
    /// Panics if `b >= batch` or `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, b: usize, y: usize) -> &mut [T] {
        let start = self.row_start(b, y);
        let len = self.width * self.channels;
        &mut self.data[start..start + len]
    }

    /// Channel samples of the pixel at (`x`, `y`) in frame `b`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    #[inline]
    pub fn pixel(&self, b: usize, y: usize, x: usize) -> &[T] {
        assert!(x < self.width, "column {x} out of bounds (width: {})", self.width);
        let start = self.row_start(b, y) + x * self.channels;
        &self.data[start..start + self.channels]
    }

    #[inline]
    fn row_start(&self, b: usize, y: usize) -> usize {
        assert!(b < self.batch, "frame {b} out of bounds (batch: {})", self.batch);
        assert!(y < self.height, "row {y} out of bounds (height: {})", self.height);
        (b * self.height + y) * self.width * self.channels
    }
}

impl<T> fmt::Debug for ImageBatch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ImageBatch({}x{}x{}x{})",
            self.batch, self.height, self.width, self.channels
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn new_is_black() {
        let img = ImageBatch::<u8>::new(1, 2, 3, 4);
        assert_eq!(img.shape(), (1, 2, 3, 4));
        assert_eq!(img.samples(), 24);
        assert!(img.as_slice().iter().all(|&s| s == 0));
    }

    #[test]
    fn filled_sets_every_sample() {
        let img = ImageBatch::filled(2, 2, 2, 3, 7u8);
        assert!(img.as_slice().iter().all(|&s| s == 7));
    }

    #[test]
    fn from_vec_valid() {
        let img = ImageBatch::from_vec(vec![0u8; 24], 1, 2, 3, 4).unwrap();
        assert_eq!(img.shape(), (1, 2, 3, 4));
    }

    #[test]
    fn from_vec_wrong_length() {
        let err = ImageBatch::from_vec(vec![0u8; 23], 1, 2, 3, 4).unwrap_err();
        assert_eq!(
            err,
            BatchError::LengthMismatch {
                expected: 24,
                actual: 23
            }
        );
    }

    #[test]
    fn from_vec_overflowing_shape() {
        let err = ImageBatch::from_vec(Vec::<u8>::new(), usize::MAX, 2, 2, 2).unwrap_err();
        assert_eq!(err, BatchError::InvalidDimensions);
    }

    #[test]
    fn from_vec_zero_extent() {
        let img = ImageBatch::from_vec(Vec::<u8>::new(), 1, 0, 5, 3).unwrap();
        assert_eq!(img.height(), 0);
        assert_eq!(img.samples(), 0);
    }

    #[test]
    fn row_and_pixel_access() {
        // 1x2x2x2, samples numbered in layout order
        let img = ImageBatch::from_vec((0u8..8).collect(), 1, 2, 2, 2).unwrap();
        assert_eq!(img.row(0, 0), &[0, 1, 2, 3]);
        assert_eq!(img.row(0, 1), &[4, 5, 6, 7]);
        assert_eq!(img.pixel(0, 1, 1), &[6, 7]);
    }

    #[test]
    fn row_mut_writes_through() {
        let mut img = ImageBatch::<u8>::new(1, 2, 2, 1);
        img.row_mut(0, 1).copy_from_slice(&[9, 9]);
        assert_eq!(img.as_slice(), &[0, 0, 9, 9]);
    }

    #[test]
    fn rows_are_per_frame() {
        let img = ImageBatch::from_vec((0u8..8).collect(), 2, 2, 2, 1).unwrap();
        assert_eq!(img.row(0, 0), &[0, 1]);
        assert_eq!(img.row(1, 0), &[4, 5]);
        assert_eq!(img.row(1, 1), &[6, 7]);
    }

    #[test]
    #[should_panic(expected = "row 2 out of bounds")]
    fn row_out_of_bounds_panics() {
        let img = ImageBatch::<u8>::new(1, 2, 2, 1);
        let _ = img.row(0, 2);
    }

    #[test]
    #[should_panic(expected = "frame 1 out of bounds")]
    fn frame_out_of_bounds_panics() {
        let img = ImageBatch::<u8>::new(1, 2, 2, 1);
        let _ = img.row(1, 0);
    }

    #[test]
    fn extend_top_prepends_filled_rows() {
        let mut img = ImageBatch::from_vec((0u8..4).collect(), 1, 2, 2, 1).unwrap();
        img.extend_top(2, 255);
        assert_eq!(img.height(), 4);
        assert_eq!(img.row(0, 0), &[255, 255]);
        assert_eq!(img.row(0, 1), &[255, 255]);
        assert_eq!(img.row(0, 2), &[0, 1]);
        assert_eq!(img.row(0, 3), &[2, 3]);
    }

    #[test]
    fn extend_top_fills_every_frame() {
        let mut img = ImageBatch::filled(2, 1, 2, 1, 5u8);
        img.extend_top(1, 9);
        assert_eq!(img.height(), 2);
        assert_eq!(img.row(0, 0), &[9, 9]);
        assert_eq!(img.row(0, 1), &[5, 5]);
        assert_eq!(img.row(1, 0), &[9, 9]);
        assert_eq!(img.row(1, 1), &[5, 5]);
    }

    #[test]
    fn extend_top_zero_rows_is_noop() {
        let mut img = ImageBatch::filled(1, 2, 2, 1, 3u8);
        let before = img.clone();
        img.extend_top(0, 255);
        assert_eq!(img, before);
    }

    #[test]
    fn into_vec_roundtrip() {
        let img = ImageBatch::filled(1, 2, 2, 3, 1u8);
        let v = img.into_vec();
        let img = ImageBatch::from_vec(v, 1, 2, 2, 3).unwrap();
        assert_eq!(img.samples(), 12);
    }

    #[test]
    fn debug_format() {
        let img = ImageBatch::<u8>::new(1, 400, 600, 3);
        assert_eq!(format!("{img:?}"), "ImageBatch(1x400x600x3)");
    }

    #[test]
    fn batch_error_display() {
        let msg = format!(
            "{}",
            BatchError::LengthMismatch {
                expected: 24,
                actual: 23
            }
        );
        assert!(msg.contains("23"));
        assert!(msg.contains("24"));
    }
}
