//! Channel sample types.

/// A numeric channel sample stored in an [`ImageBatch`](crate::ImageBatch).
///
/// Rows introduced when a canvas grows upward are filled with
/// [`WHITE`](ChannelValue::WHITE), the maximum displayable intensity for
/// the type.
pub trait ChannelValue: Copy + PartialEq + core::fmt::Debug {
    /// Zero intensity.
    const BLACK: Self;
    /// Maximum displayable intensity. The padding sentinel.
    const WHITE: Self;
}

impl ChannelValue for u8 {
    const BLACK: Self = 0;
    const WHITE: Self = u8::MAX;
}

impl ChannelValue for u16 {
    const BLACK: Self = 0;
    const WHITE: Self = u16::MAX;
}

/// Float images are normalized: `0.0` is black, `1.0` is white.
impl ChannelValue for f32 {
    const BLACK: Self = 0.0;
    const WHITE: Self = 1.0;
}
