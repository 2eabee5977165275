// SPDX-License-Identifier: MIT
//
// RGB ↔ HSB (hue, saturation, brightness) for packed colors.
//
// Two scales are in play:
//
//   public   hue 0–360°, saturation 0–100, brightness 0–100   (`Hsb`)
//   internal hue 0–1,    saturation 0–1,   brightness 0–1     (unit form)
//
// The unit form is what the sector algorithm works in and what brightness
// scaling round-trips through. Channel bytes come back with +0.5 rounding,
// so RGB → HSB → RGB lands within one unit of the original.
//
// Single-char names (h, s, b, r, g, p, q, t, f) follow the usual notation.
#![allow(clippy::many_single_char_names)]

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::packed::PackedColor;

/// A color as hue (0–360), saturation (0–100) and brightness (0–100).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsb {
    /// Hue angle in degrees, `[0, 360)`.
    pub hue: f32,
    /// Saturation, `[0, 100]`.
    pub saturation: f32,
    /// Brightness, `[0, 100]`.
    pub brightness: f32,
}

impl Hsb {
    #[inline]
    #[must_use]
    pub const fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Convert back to an opaque packed color. See [`hsb`].
    #[must_use]
    pub fn to_color(self) -> PackedColor {
        hsb(self.hue, self.saturation, self.brightness)
    }

    /// Convert back to a packed color with alpha from 0–1. See [`hsba`].
    #[must_use]
    pub fn to_color_with_alpha(self, alpha: f32) -> PackedColor {
        hsba(self.hue, self.saturation, self.brightness, alpha)
    }
}

impl From<PackedColor> for Hsb {
    fn from(color: PackedColor) -> Self {
        rgb_to_hsb(color)
    }
}

// ─── RGB → HSB ───────────────────────────────────────────────────────────────

/// Convert a color's RGB channels to HSB. Alpha is ignored.
///
/// Black (max channel 0) and grays (no spread between channels) have hue 0
/// and saturation 0.
///
/// ```
/// use argb_codec::{rgb_to_hsb, Hsb, PackedColor};
///
/// assert_eq!(rgb_to_hsb(PackedColor::BLACK), Hsb::new(0.0, 0.0, 0.0));
/// assert_eq!(rgb_to_hsb(PackedColor::BLUE), Hsb::new(240.0, 100.0, 100.0));
/// ```
#[must_use]
pub fn rgb_to_hsb(color: PackedColor) -> Hsb {
    Hsb {
        hue: hue(color),
        saturation: saturation(color),
        brightness: brightness(color),
    }
}

/// Hue of a color in degrees, `[0, 360)`.
#[must_use]
pub fn hue(color: PackedColor) -> f32 {
    360.0 * unit_hue(color)
}

/// Saturation of a color, 0–100.
#[must_use]
pub fn saturation(color: PackedColor) -> f32 {
    let (min, max) = extremes(color);
    if max == 0 {
        0.0
    } else {
        f32::from(max - min) * 100.0 / f32::from(max)
    }
}

/// Brightness of a color, 0–100.
#[must_use]
pub fn brightness(color: PackedColor) -> f32 {
    let (_, max) = extremes(color);
    100.0 * f32::from(max) / 255.0
}

/// Smallest and largest of the RGB channels.
#[inline]
fn extremes(color: PackedColor) -> (u8, u8) {
    let (r, g, b) = (color.red(), color.green(), color.blue());
    (r.min(g).min(b), r.max(g).max(b))
}

/// Six-region hue in `[0, 1)`.
fn unit_hue(color: PackedColor) -> f32 {
    let (r, g, b) = (color.red(), color.green(), color.blue());
    let (min, max) = extremes(color);
    if max == min {
        return 0.0;
    }

    let range = f32::from(max - min);
    let rc = f32::from(max - r) / range;
    let gc = f32::from(max - g) / range;
    let bc = f32::from(max - b) / range;

    let sixths = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    let h = sixths / 6.0;
    if h < 0.0 { h + 1.0 } else { h }
}

/// HSB in unit form, every component in 0–1.
fn unit_hsb(color: PackedColor) -> (f32, f32, f32) {
    let (min, max) = extremes(color);
    let b = f32::from(max) / 255.0;
    let s = if max == 0 {
        0.0
    } else {
        f32::from(max - min) / f32::from(max)
    };
    (unit_hue(color), s, b)
}

// ─── HSB → RGB ───────────────────────────────────────────────────────────────

/// Create an opaque color from hue (degrees), saturation and brightness
/// (both 0–100).
///
/// Any finite hue is accepted and wrapped into `[0, 360)`, negative hues
/// included.
///
/// ```
/// use argb_codec::{hsb, PackedColor};
///
/// assert_eq!(hsb(0.0, 100.0, 100.0), PackedColor::RED);
/// assert_eq!(hsb(-240.0, 100.0, 100.0), PackedColor::GREEN);
/// ```
#[must_use]
pub fn hsb(h: f32, s: f32, b: f32) -> PackedColor {
    unit_to_rgb(h.rem_euclid(360.0) / 360.0, s / 100.0, b / 100.0)
}

/// Like [`hsb`], with alpha given as 0–1.
///
/// Alpha is `a * 255` truncated and clamped to `[0, 255]`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsba(h: f32, s: f32, b: f32, a: f32) -> PackedColor {
    // Clamped to 0.0..=255.0 before the cast.
    let alpha = (a * 255.0).clamp(0.0, 255.0) as u8;
    hsb(h, s, b).with_alpha(alpha)
}

/// [`hsb`] for `f64` inputs.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn hsb_f64(h: f64, s: f64, b: f64) -> PackedColor {
    hsb(h as f32, s as f32, b as f32)
}

/// [`hsba`] for `f64` inputs.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn hsba_f64(h: f64, s: f64, b: f64, a: f64) -> PackedColor {
    hsba(h as f32, s as f32, b as f32, a as f32)
}

/// Sector conversion from unit HSB. Always opaque.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_rgb(hue: f32, s: f32, v: f32) -> PackedColor {
    if s <= 0.0 {
        let gray = to_u8(v);
        return PackedColor::from_rgb(gray, gray, gray);
    }

    let h = (hue - hue.floor()) * 6.0;
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * s.mul_add(-f, 1.0);
    let t = v * s.mul_add(f - 1.0, 1.0);

    // `h` can round up to exactly 6.0 for hues a hair under 1.0, which is
    // the same point on the wheel as sector 0.
    let (r, g, b) = match sector as u8 {
        0 | 6 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    PackedColor::from_rgb(to_u8(r), to_u8(g), to_u8(b))
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Brightness Scaling ──────────────────────────────────────────────────────

impl PackedColor {
    /// HSB form of this color. See [`rgb_to_hsb`].
    #[inline]
    #[must_use]
    pub fn to_hsb(self) -> Hsb {
        rgb_to_hsb(self)
    }

    /// Scale brightness by `factor`, clamping the result to full brightness.
    ///
    /// The color goes through an HSB round trip, so the result is always
    /// opaque: the input's alpha is not carried over.
    #[must_use]
    pub fn scale_brightness(self, factor: f32) -> Self {
        let (h, s, b) = unit_hsb(self);
        unit_to_rgb(h, s, (b * factor).clamp(0.0, 1.0))
    }
}

/// Scale the brightness of every color, returning new colors.
///
/// Results are opaque regardless of input alpha. See
/// [`PackedColor::scale_brightness`].
#[must_use]
pub fn scale_brightness(colors: &[PackedColor], factor: f32) -> Vec<PackedColor> {
    tracing::trace!(count = colors.len(), factor, "scaling brightness");
    colors.iter().map(|c| c.scale_brightness(factor)).collect()
}

/// Scale the brightness of every color into a caller-supplied buffer.
///
/// # Errors
///
/// Returns [`ColorError::LengthMismatch`] if `out` is not the same length
/// as `colors`; `out` is left untouched in that case.
pub fn scale_brightness_into(
    colors: &[PackedColor],
    factor: f32,
    out: &mut [PackedColor],
) -> Result<(), ColorError> {
    ColorError::check_len(colors.len(), out.len())?;
    tracing::trace!(count = colors.len(), factor, "scaling brightness into buffer");
    for (dst, src) in out.iter_mut().zip(colors) {
        *dst = src.scale_brightness(factor);
    }
    Ok(())
}

/// Scale the brightness of every color, overwriting the input.
pub fn scale_brightness_in_place(colors: &mut [PackedColor], factor: f32) {
    tracing::trace!(count = colors.len(), factor, "scaling brightness in place");
    for color in colors.iter_mut() {
        *color = color.scale_brightness(factor);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Helper: check that two f32 values are approximately equal.
    fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    // Helper: assert RGB values are close (within ±1 out of 255).
    fn assert_rgb8_close(actual: PackedColor, expected: (u8, u8, u8)) {
        let (ar, ag, ab) = (actual.red(), actual.green(), actual.blue());
        let (er, eg, eb) = expected;
        assert!(
            ar.abs_diff(er) <= 1 && ag.abs_diff(eg) <= 1 && ab.abs_diff(eb) <= 1,
            "RGB mismatch: got ({ar}, {ag}, {ab}), expected ({er}, {eg}, {eb})"
        );
    }

    // ── Known Values ─────────────────────────────────────────────────────

    #[test]
    fn primaries_from_hsb() {
        assert_eq!(hsb(0.0, 100.0, 100.0).argb(), 0xffff_0000);
        assert_eq!(hsb(120.0, 100.0, 100.0), PackedColor::GREEN);
        assert_eq!(hsb(240.0, 100.0, 100.0), PackedColor::BLUE);
    }

    #[test]
    fn hue_wraps_modulo_360() {
        assert_eq!(hsb(360.0, 100.0, 100.0), PackedColor::RED);
        assert_eq!(hsb(480.0, 100.0, 100.0), PackedColor::GREEN);
        assert_eq!(hsb(-120.0, 100.0, 100.0), PackedColor::BLUE);
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(hsb(200.0, 0.0, 100.0), PackedColor::WHITE);
        assert_eq!(hsb(200.0, 0.0, 0.0), PackedColor::BLACK);
        assert_rgb8_close(hsb(37.0, 0.0, 50.0), (128, 128, 128));
    }

    #[test]
    fn hsb_is_opaque() {
        assert!(hsb(300.0, 40.0, 10.0).is_opaque());
    }

    #[test]
    fn black_has_zero_hsb() {
        let black = rgb_to_hsb(PackedColor::BLACK);
        assert_eq!(black, Hsb::new(0.0, 0.0, 0.0));
        assert!(!black.hue.is_nan());
    }

    #[test]
    fn gray_has_zero_hue_and_saturation() {
        let gray = rgb_to_hsb(PackedColor::from_rgb(128, 128, 128));
        assert_eq!(gray.hue, 0.0);
        assert_eq!(gray.saturation, 0.0);
        assert!(approx_eq(gray.brightness, 50.196, 0.001));
    }

    #[test]
    fn primaries_to_hsb() {
        assert_eq!(rgb_to_hsb(PackedColor::RED), Hsb::new(0.0, 100.0, 100.0));
        assert_eq!(rgb_to_hsb(PackedColor::GREEN), Hsb::new(120.0, 100.0, 100.0));
        assert_eq!(rgb_to_hsb(PackedColor::BLUE), Hsb::new(240.0, 100.0, 100.0));
    }

    #[test]
    fn negative_region_wraps_into_range() {
        // Red max with blue above green lands below zero before wrapping.
        let magenta_ish = rgb_to_hsb(PackedColor::from_rgb(255, 0, 128));
        assert!(
            magenta_ish.hue > 300.0 && magenta_ish.hue < 360.0,
            "hue was {}",
            magenta_ish.hue
        );
    }

    #[test]
    fn alpha_does_not_affect_hsb() {
        let opaque = rgb_to_hsb(PackedColor::new(0xff33_6699));
        let clear = rgb_to_hsb(PackedColor::new(0x0033_6699));
        assert_eq!(opaque, clear);
    }

    #[test]
    fn single_component_accessors_agree() {
        let c = PackedColor::from_rgb(10, 200, 90);
        let full = c.to_hsb();
        assert_eq!(hue(c), full.hue);
        assert_eq!(saturation(c), full.saturation);
        assert_eq!(brightness(c), full.brightness);
    }

    // ── Roundtrip ────────────────────────────────────────────────────────

    #[test]
    fn rgb_hsb_rgb_roundtrip() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let back = rgb_to_hsb(PackedColor::from_rgb(r, g, b)).to_color();
                    assert_rgb8_close(back, (r, g, b));
                }
            }
        }
    }

    #[test]
    fn roundtrip_near_byte_boundaries() {
        for v in [0u8, 1, 2, 127, 128, 253, 254, 255] {
            for w in [0u8, 1, 254, 255] {
                for (r, g, b) in [(v, w, 0), (w, 0, v), (0, v, w), (v, v, w)] {
                    let back = Hsb::from(PackedColor::from_rgb(r, g, b)).to_color();
                    assert_rgb8_close(back, (r, g, b));
                }
            }
        }
    }

    // ── Alpha ────────────────────────────────────────────────────────────

    #[test]
    fn hsba_sets_alpha_from_unit_float() {
        let c = hsba(0.0, 100.0, 100.0, 0.5);
        assert_eq!(c.argb(), 0x7fff_0000);
        assert_eq!(hsba(0.0, 100.0, 100.0, 1.0), PackedColor::RED);
    }

    #[test]
    fn hsba_clamps_alpha() {
        assert_eq!(hsba(120.0, 100.0, 100.0, 3.0).alpha(), 0xff);
        assert_eq!(hsba(120.0, 100.0, 100.0, -1.0).alpha(), 0);
    }

    #[test]
    fn f64_entry_points_match() {
        assert_eq!(hsb_f64(120.0, 100.0, 100.0), hsb(120.0, 100.0, 100.0));
        assert_eq!(hsba_f64(60.0, 50.0, 50.0, 0.25), hsba(60.0, 50.0, 50.0, 0.25));
    }

    #[test]
    fn hsb_struct_conversions() {
        let h = Hsb::new(240.0, 100.0, 100.0);
        assert_eq!(h.to_color(), PackedColor::BLUE);
        assert_eq!(h.to_color_with_alpha(0.0).argb(), 0x0000_00ff);
    }

    #[test]
    fn hsb_serde_roundtrip() {
        let h = Hsb::new(30.0, 50.0, 75.0);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"{"hue":30.0,"saturation":50.0,"brightness":75.0}"#);
        assert_eq!(serde_json::from_str::<Hsb>(&json).unwrap(), h);
    }

    // ── Brightness Scaling ───────────────────────────────────────────────

    #[test]
    fn halving_brightness() {
        let dim = PackedColor::RED.scale_brightness(0.5);
        assert_rgb8_close(dim, (128, 0, 0));
    }

    #[test]
    fn brightness_clamps_at_full() {
        let c = PackedColor::from_rgb(100, 50, 0);
        let bright = c.scale_brightness(10.0);
        assert_eq!(bright.red(), 255);
        // Hue and saturation survive, so green keeps its ratio to red.
        assert_rgb8_close(bright, (255, 128, 0));
    }

    #[test]
    fn scaling_drops_alpha_to_opaque() {
        let c = PackedColor::new(0x4080_4020);
        assert!(c.scale_brightness(1.0).is_opaque());
        assert_rgb8_close(c.scale_brightness(1.0), (0x80, 0x40, 0x20));
    }

    #[test]
    fn negative_factor_yields_black() {
        assert_eq!(PackedColor::WHITE.scale_brightness(-2.0), PackedColor::BLACK);
    }

    #[test]
    fn batch_scaling_forms_agree() {
        let input = [PackedColor::RED, PackedColor::new(0x8033_6699), PackedColor::WHITE];
        let expected: Vec<_> = input.iter().map(|c| c.scale_brightness(0.25)).collect();

        assert_eq!(scale_brightness(&input, 0.25), expected);

        let mut out = [PackedColor::TRANSPARENT; 3];
        scale_brightness_into(&input, 0.25, &mut out).unwrap();
        assert_eq!(out.to_vec(), expected);

        let mut in_place = input;
        scale_brightness_in_place(&mut in_place, 0.25);
        assert_eq!(in_place.to_vec(), expected);
    }

    #[test]
    fn scaling_into_short_buffer_fails() {
        let input = [PackedColor::RED; 3];
        let mut out = [PackedColor::TRANSPARENT; 2];
        assert_eq!(
            scale_brightness_into(&input, 0.5, &mut out),
            Err(ColorError::LengthMismatch { expected: 3, actual: 2 })
        );
        assert_eq!(out, [PackedColor::TRANSPARENT; 2]);
    }

    #[test]
    fn empty_batch() {
        assert!(scale_brightness(&[], 2.0).is_empty());
        assert_eq!(scale_brightness_into(&[], 2.0, &mut []), Ok(()));
    }
}
