// SPDX-License-Identifier: MIT
//
// argb — packed 32-bit ARGB color arithmetic.
//
// This is the facade that stitches the workspace crates into one surface:
//
//   argb-codec → PackedColor, channels, hex text, RGB ↔ HSB, brightness
//   argb-blend → BlendMode, the seven blend operators, slice blending
//
// A typical compositing step reads:
//
//   layer color ─┐
//                ├─ blend(base, layer, mode) ─ PackedColor (alpha = a1 + a2, clamped)
//   base color  ─┘

pub use argb_blend::{
    BlendMode, LerpAmount, ParseBlendModeError, add, blend, blend_in_place, blend_into,
    blend_uniform, darkest, lerp, lerp_by, lerp_with_alpha, lightest, multiply, screen, subtract,
};
pub use argb_codec::{
    Channel, ColorError, Hsb, PackedColor, brightness, hsb, hsb_f64, hsba, hsba_f64, hue,
    rgb_to_hsb, saturation, scale_brightness, scale_brightness_in_place, scale_brightness_into,
};
