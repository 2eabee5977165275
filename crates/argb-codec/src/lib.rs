// SPDX-License-Identifier: MIT
//
// argb-codec — channel codec for packed 32-bit colors.
//
// Colors are plain u32 values laid out as 0xAARRGGBB. This crate owns the
// layout: packing and unpacking channel bytes, the per-channel masks and
// shifts the blend engine computes with, HSB conversion in both
// directions, and brightness scaling over batches of colors.
//
// Nothing here allocates except the batch helper that returns a Vec, and
// nothing holds state. Every function is safe to call from any thread.

pub mod error;
pub mod hsb;
pub mod packed;

pub use error::ColorError;
pub use hsb::{
    Hsb, brightness, hsb, hsb_f64, hsba, hsba_f64, hue, rgb_to_hsb, saturation,
    scale_brightness, scale_brightness_in_place, scale_brightness_into,
};
pub use packed::{Channel, PackedColor};
