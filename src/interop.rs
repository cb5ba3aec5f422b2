//! `imgref` / `rgb` interop.
//!
//! Hosts usually hold decoded frames as typed 2D images. These conversions
//! move pixels between that representation and the interleaved batch-of-one
//! layout used by [`composite`](crate::composite). Both directions copy:
//! the sample layout changes.

use alloc::vec::Vec;

use imgref::{ImgRef, ImgVec};
use rgb::{Gray, Rgb, Rgba};

use crate::batch::ImageBatch;

// ---------------------------------------------------------------------------
// ImgRef → ImageBatch (From impls, batch of one)
// ---------------------------------------------------------------------------

macro_rules! impl_from_imgref {
    ($pixel:ty, $channels:expr, |$p:ident| $expand:expr) => {
        impl<T: Copy> From<ImgRef<'_, $pixel>> for ImageBatch<T> {
            fn from(img: ImgRef<'_, $pixel>) -> Self {
                let (buf, w, h) = img.to_contiguous_buf();
                let mut data = Vec::with_capacity(w * h * $channels);
                for $p in buf.iter() {
                    data.extend_from_slice(&$expand);
                }
                ImageBatch::from_raw(data, 1, h, w, $channels)
            }
        }
    };
}

impl_from_imgref!(Rgb<T>, 3, |p| [p.r, p.g, p.b]);
impl_from_imgref!(Rgba<T>, 4, |p| [p.r, p.g, p.b, p.a]);
impl_from_imgref!(Gray<T>, 1, |p| [p.value()]);

// ---------------------------------------------------------------------------
// ImageBatch → ImgVec (frame extraction)
// ---------------------------------------------------------------------------

macro_rules! impl_frame {
    ($name:ident, $pixel:ty, $channels:expr, |$c:ident| $build:expr) => {
        impl<T: Copy> ImageBatch<T> {
            /// Copy frame `b` out as a typed 2D image.
            ///
            /// Returns `None` when the channel count does not match the
            /// pixel type.
            ///
            /// # Panics
            ///
            /// Panics if `b >= batch`.
            pub fn $name(&self, b: usize) -> Option<ImgVec<$pixel>> {
                if self.channels() != $channels {
                    return None;
                }
                assert!(
                    b < self.batch(),
                    "frame {b} out of bounds (batch: {})",
                    self.batch()
                );
                let (w, h) = (self.width(), self.height());
                let mut pixels = Vec::with_capacity(w * h);
                for y in 0..h {
                    for $c in self.row(b, y).chunks_exact($channels) {
                        pixels.push($build);
                    }
                }
                Some(ImgVec::new(pixels, w, h))
            }
        }
    };
}

impl_frame!(frame_rgb, Rgb<T>, 3, |c| Rgb {
    r: c[0],
    g: c[1],
    b: c[2],
});
impl_frame!(frame_rgba, Rgba<T>, 4, |c| Rgba {
    r: c[0],
    g: c[1],
    b: c[2],
    a: c[3],
});
impl_frame!(frame_gray, Gray<T>, 1, |c| Gray::new(c[0]));

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
