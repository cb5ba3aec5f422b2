//! Canvas-extending overlay placement.
//!
//! [`composite`] overwrites a window of the canvas with the overlay's
//! pixels. Placement is asymmetric on purpose, matching the pipeline
//! behavior this crate reproduces: a negative `y` grows the canvas upward
//! with white rows; negative `x` and positive overflow on either axis
//! clip instead of growing the canvas.

use core::fmt;

use crate::batch::ImageBatch;
use crate::channel::ChannelValue;

// ---------------------------------------------------------------------------
// OverlayError
// ---------------------------------------------------------------------------

/// Errors from [`composite`].
///
/// Both variants are precondition violations detected before any pixel is
/// written; the canvas is never returned partially modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum OverlayError {
    /// Canvas and overlay channel counts differ.
    ChannelMismatch {
        /// Channels per pixel in the canvas.
        source: usize,
        /// Channels per pixel in the overlay.
        overlay: usize,
    },
    /// Canvas and overlay batch counts differ.
    BatchMismatch {
        /// Frames in the canvas batch.
        source: usize,
        /// Frames in the overlay batch.
        overlay: usize,
    },
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelMismatch { source, overlay } => {
                write!(f, "overlay has {overlay} channels, canvas has {source}")
            }
            Self::BatchMismatch { source, overlay } => {
                write!(f, "overlay has {overlay} frames, canvas has {source}")
            }
        }
    }
}

impl core::error::Error for OverlayError {}

// ---------------------------------------------------------------------------
// composite
// ---------------------------------------------------------------------------

/// Place `overlay` onto `canvas` with its top-left corner at (`x`, `y`).
///
/// Consumes the canvas and returns it, possibly grown upward:
///
/// - `y < 0` prepends `|y|` rows of [`WHITE`](ChannelValue::WHITE) to every
///   frame, then anchors the overlay at row 0 of the grown canvas.
/// - `x < 0` does not grow the canvas; the columns left of the edge are
///   dropped.
/// - Overlay pixels past the right or bottom edge are dropped.
///
/// The copy is a hard overwrite across all frames and channels. Pixels
/// outside the written window are returned bit-identical.
///
/// # Errors
///
/// Returns [`OverlayError`] if the channel or batch counts differ. The
/// canvas is returned unmodified in no case — on error nothing is
/// returned, and the checks run before any mutation.
///
/// # Example
///
/// ```
/// use zenoverlay::{ImageBatch, composite};
///
/// let canvas = ImageBatch::<u8>::new(1, 400, 600, 3);
/// let overlay = ImageBatch::filled(1, 100, 100, 3, 40u8);
/// let out = composite(canvas, &overlay, 50, -20).unwrap();
/// assert_eq!(out.shape(), (1, 420, 600, 3));
/// assert_eq!(out.pixel(0, 0, 0), &[255, 255, 255]); // white padding
/// assert_eq!(out.pixel(0, 0, 50), &[40, 40, 40]); // overlay at new origin
/// ```
pub fn composite<T: ChannelValue>(
    mut canvas: ImageBatch<T>,
    overlay: &ImageBatch<T>,
    x: i64,
    y: i64,
) -> Result<ImageBatch<T>, OverlayError> {
    if canvas.channels() != overlay.channels() {
        return Err(OverlayError::ChannelMismatch {
            source: canvas.channels(),
            overlay: overlay.channels(),
        });
    }
    if canvas.batch() != overlay.batch() {
        return Err(OverlayError::BatchMismatch {
            source: canvas.batch(),
            overlay: overlay.batch(),
        });
    }

    let overlay_h = overlay.height() as i64;
    let overlay_w = overlay.width() as i64;

    // Nominal combined extents. These only bound the clip window below;
    // they never trigger padding on their own.
    let bound_h = (canvas.height() as i64).max(y.saturating_add(overlay_h));
    let bound_w = (canvas.width() as i64).max(x.saturating_add(overlay_w));

    #[cfg(feature = "log")]
    log::debug!(
        "composite {:?} onto {:?} at ({x}, {y})",
        overlay,
        canvas
    );

    // Upward growth is the only canvas extension.
    let mut y = y;
    if y < 0 {
        canvas.extend_top(y.unsigned_abs() as usize, T::WHITE);
        y = 0;
    }

    let canvas_h = canvas.height() as i64;
    let canvas_w = canvas.width() as i64;

    let start_y = y.max(0);
    let start_x = x.max(0);
    let end_y = y.saturating_add(overlay_h).min(bound_h).min(canvas_h);
    let end_x = x.saturating_add(overlay_w).min(bound_w).min(canvas_w);

    if end_y <= start_y || end_x <= start_x {
        // Window is empty: the overlay is fully clipped. Any upward growth
        // already happened above.
        return Ok(canvas);
    }

    let rows = (end_y - start_y) as usize;
    let cols = (end_x - start_x) as usize;
    let src_y = (-y).max(0) as usize;
    let src_x = (-x).max(0) as usize;
    let dst_y = start_y as usize;
    let dst_x = start_x as usize;
    let c = canvas.channels();

    for b in 0..canvas.batch() {
        for r in 0..rows {
            let src = overlay.row(b, src_y + r);
            let dst = canvas.row_mut(b, dst_y + r);
            dst[dst_x * c..(dst_x + cols) * c]
                .copy_from_slice(&src[src_x * c..(src_x + cols) * c]);
        }
    }

    #[cfg(feature = "log")]
    log::debug!("composite produced {:?}", canvas);

    Ok(canvas)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
