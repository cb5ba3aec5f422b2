//! Canvas-extending overlay compositing for image batches.
//!
//! This crate places one image batch onto another at a signed integer
//! (x, y) offset:
//!
//! - [`ImageBatch`] — owned (batch, height, width, channels) pixel buffer
//! - [`composite`] — the single compositing operation
//! - [`ChannelValue`] — channel sample types and the white padding sentinel
//! - [`NodeDescriptor`] / [`IMAGE_OVERLAY`] — registration metadata for
//!   visual-pipeline hosts
//!
//! A negative `y` grows the canvas upward with white rows before the copy.
//! Every other out-of-bounds direction clips: the overlay pixels that fall
//! outside the canvas are dropped, the canvas keeps its size. Overwrite is
//! hard — no blending, no resampling.
//!
//! Hosts holding decoded frames as `imgref` typed images can convert at the
//! boundary; see the `From` impls on [`ImageBatch`] and the `frame_*`
//! accessors.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod batch;
mod channel;
mod interop;
mod node;
mod overlay;

pub use batch::{BatchError, ImageBatch};
pub use channel::ChannelValue;
pub use node::{IMAGE_OVERLAY, NodeDescriptor, Param, ParamKind};
pub use overlay::{OverlayError, composite};

// Re-exports for host integration.
pub use imgref::{Img, ImgRef, ImgVec};
pub use rgb;
pub use rgb::{Gray, Rgb, Rgba};
