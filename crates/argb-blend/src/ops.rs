//! The seven blend operators.
//!
//! Each operator composites a layer color `c2` onto a base color `c1`:
//!
//! - the layer's alpha is the strength of the effect;
//! - the result's alpha is `min(255, alpha(c1) + alpha(c2))` in every mode.
//!
//! Channel arithmetic runs on the channel bits left in their position
//! (`Channel::bits`) rather than on bytes. Products therefore carry
//! fractional bits below the channel window, and the final mask truncates
//! them. All modes share that rounding.
//!
//! ```text
//! lerp_channel(a, b, α) = a + ((α + 1)·(b − a)) >> 8     (flooring shift)
//! scale(x, α)           = (x·(α + 1)) >> 8
//! ```

// Single-letter channel names (c1, c2, a, b) mirror the formulas above.
#![allow(clippy::many_single_char_names)]

use argb_codec::{Channel, PackedColor};

use crate::mode::BlendMode;

/// Composite `c2` onto `c1` with the given mode.
///
/// ```
/// use argb_blend::{blend, BlendMode};
/// use argb_codec::PackedColor;
///
/// let out = blend(PackedColor::WHITE, PackedColor::BLACK, BlendMode::Multiply);
/// assert_eq!(out, PackedColor::BLACK);
/// ```
#[must_use]
pub fn blend(c1: PackedColor, c2: PackedColor, mode: BlendMode) -> PackedColor {
    match mode {
        BlendMode::Lerp => lerp(c1, c2),
        BlendMode::Add => add(c1, c2),
        BlendMode::Subtract => subtract(c1, c2),
        BlendMode::Multiply => multiply(c1, c2),
        BlendMode::Screen => screen(c1, c2),
        BlendMode::Lightest => lightest(c1, c2),
        BlendMode::Darkest => darkest(c1, c2),
    }
}

// ─── Lerp ────────────────────────────────────────────────────────────────────

/// An interpolation amount that converts to a 0–255 alpha.
///
/// Implemented for `u8` (used as-is) and for `f32`/`f64` in 0–1, which
/// become `amount * 255` truncated and clamped to `[0, 255]`.
pub trait LerpAmount: Copy {
    fn to_alpha(self) -> u8;
}

impl LerpAmount for u8 {
    #[inline]
    fn to_alpha(self) -> u8 {
        self
    }
}

impl LerpAmount for f32 {
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn to_alpha(self) -> u8 {
        (self * 255.0).clamp(0.0, 255.0) as u8
    }
}

impl LerpAmount for f64 {
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn to_alpha(self) -> u8 {
        (self * 255.0).clamp(0.0, 255.0) as u8
    }
}

/// Interpolate RGB from `c1` toward `c2`, weighted by `c2`'s alpha.
#[must_use]
pub fn lerp(c1: PackedColor, c2: PackedColor) -> PackedColor {
    lerp_with_alpha(c1, c2, c2.alpha())
}

/// Interpolate RGB from `c1` toward `c2` by an `f32`, `f64` or `u8` amount.
///
/// ```
/// use argb_blend::lerp_by;
/// use argb_codec::PackedColor;
///
/// let gray = lerp_by(PackedColor::BLACK, PackedColor::WHITE, 0.5_f32);
/// assert_eq!(gray.argb(), 0xff7f_7f7f);
/// ```
#[must_use]
pub fn lerp_by<A: LerpAmount>(c1: PackedColor, c2: PackedColor, amount: A) -> PackedColor {
    lerp_with_alpha(c1, c2, amount.to_alpha())
}

/// Interpolate RGB from `c1` toward `c2` by an explicit 0–255 weight.
///
/// 255 lands exactly on `c2`'s RGB. The alpha of the result is still the
/// clamped sum of both colors' alphas, whatever the weight.
#[must_use]
pub fn lerp_with_alpha(c1: PackedColor, c2: PackedColor, alpha: u8) -> PackedColor {
    per_channel(c1, c2, |ch| lerp_channel(c1.argb(), c2.argb(), alpha, ch))
}

// ─── Clipped Arithmetic ──────────────────────────────────────────────────────

/// Add `c2`'s channels, scaled by its alpha, clipping at 255.
#[must_use]
pub fn add(c1: PackedColor, c2: PackedColor) -> PackedColor {
    let c2a = c2.alpha();
    per_channel(c1, c2, |ch| {
        (ch.bits(c1) + scale(ch.bits(c2), c2a)).min(ch.mask())
    })
}

/// Subtract `c2`'s channels, scaled by its alpha, clipping at 0.
#[must_use]
pub fn subtract(c1: PackedColor, c2: PackedColor) -> PackedColor {
    let c2a = c2.alpha();
    per_channel(c1, c2, |ch| ch.bits(c1).saturating_sub(scale(ch.bits(c2), c2a)))
}

/// Channel-wise maximum of `c1` and `c2` scaled by its alpha.
#[must_use]
pub fn lightest(c1: PackedColor, c2: PackedColor) -> PackedColor {
    let c2a = c2.alpha();
    per_channel(c1, c2, |ch| ch.bits(c1).max(scale(ch.bits(c2), c2a)))
}

// ─── Blended Targets ─────────────────────────────────────────────────────────
//
// These compute a target per channel, then interpolate from c1 toward it
// by c2's alpha.

/// Multiply channels: `c1 · (c2 + 1) / 256`, faded in by `c2`'s alpha.
#[must_use]
pub fn multiply(c1: PackedColor, c2: PackedColor) -> PackedColor {
    let c2a = c2.alpha();
    per_channel(c1, c2, |ch| {
        let product = u32::from(c1.channel(ch)) * (u32::from(c2.channel(ch)) + 1);
        let target = (product << ch.shift()) >> 8;
        lerp_channel(c1.argb(), target, c2a, ch)
    })
}

/// Inverse multiply: `255 − (255 − c1)·(256 − c2) / 256`, faded in by
/// `c2`'s alpha.
#[must_use]
pub fn screen(c1: PackedColor, c2: PackedColor) -> PackedColor {
    let c2a = c2.alpha();
    per_channel(c1, c2, |ch| {
        let inverse = u32::from(0xff - c1.channel(ch)) * (0x100 - u32::from(c2.channel(ch)));
        let target = ch.mask() - ((inverse << ch.shift()) >> 8);
        lerp_channel(c1.argb(), target, c2a, ch)
    })
}

/// Channel-wise minimum of `c1` and `c2`, faded in by `c2`'s alpha.
#[must_use]
pub fn darkest(c1: PackedColor, c2: PackedColor) -> PackedColor {
    let c2a = c2.alpha();
    per_channel(c1, c2, |ch| {
        let target = ch.bits(c1).min(ch.bits(c2));
        lerp_channel(c1.argb(), target, c2a, ch)
    })
}

// ─── Shared Primitives ───────────────────────────────────────────────────────

/// Assemble a result from the combined alpha and one value per RGB channel.
///
/// `f` returns the channel still in its bit position; anything outside the
/// channel's window is masked off.
#[inline]
fn per_channel(c1: PackedColor, c2: PackedColor, f: impl Fn(Channel) -> u32) -> PackedColor {
    let rgb = Channel::RGB
        .into_iter()
        .fold(0, |acc, ch| acc | (f(ch) & ch.mask()));
    PackedColor::new(combined_alpha(c1, c2) | rgb)
}

/// `min(255, alpha(c1) + alpha(c2))`, in the alpha bit position.
#[inline]
fn combined_alpha(c1: PackedColor, c2: PackedColor) -> u32 {
    let sum = u32::from(c1.alpha()) + u32::from(c2.alpha());
    sum.min(0xff) << Channel::Alpha.shift()
}

/// Scale in-position channel bits by an alpha weight.
///
/// Cannot overflow: `0xff0000 · 256` is `0xff000000`.
#[inline]
fn scale(bits: u32, alpha: u8) -> u32 {
    (bits * (u32::from(alpha) + 1)) >> 8
}

/// Interpolate one channel of `a` toward the same channel of `b`.
///
/// The shift floors, so the result lies between the two inputs and is
/// never negative.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(a: u32, b: u32, alpha: u8, ch: Channel) -> u32 {
    let am = i64::from(a & ch.mask());
    let bm = i64::from(b & ch.mask());
    let mixed = am + (((i64::from(alpha) + 1) * (bm - am)) >> 8);
    (mixed as u32) & ch.mask()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
