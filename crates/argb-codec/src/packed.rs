// SPDX-License-Identifier: MIT
//
// Packed ARGB colors — one byte per channel in a single u32.
//
//   bit  31        24 23        16 15         8 7          0
//        [   alpha   ][    red    ][   green   ][   blue    ]
//
// Every u32 is a valid color, so packing and unpacking are total and
// lossless. The blend engine works on channels left in their bit position
// (`Channel::bits`) instead of shifting them down to bytes, which is why
// both forms are exposed here.
//
// Narrowing `u32 -> u8` after a mask-and-shift can never lose bits, and
// `u32::from` is not usable in const fns.
#![allow(clippy::cast_possible_truncation, clippy::cast_lossless)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

// ─── Channel ─────────────────────────────────────────────────────────────────

/// One of the four byte-wide channels of a [`PackedColor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Alpha,
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels, most-significant first.
    pub const ALL: [Self; 4] = [Self::Alpha, Self::Red, Self::Green, Self::Blue];

    /// The color channels, without alpha.
    pub const RGB: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Bit offset of the channel's least-significant bit.
    #[inline]
    #[must_use]
    pub const fn shift(self) -> u32 {
        match self {
            Self::Alpha => 24,
            Self::Red => 16,
            Self::Green => 8,
            Self::Blue => 0,
        }
    }

    /// The channel's bit window, e.g. `0x00ff_0000` for red.
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u32 {
        0xff << self.shift()
    }

    /// The channel's bits of `color`, left in place.
    #[inline]
    #[must_use]
    pub const fn bits(self, color: PackedColor) -> u32 {
        color.0 & self.mask()
    }

    /// The channel's value of `color` as a byte.
    #[inline]
    #[must_use]
    pub const fn extract(self, color: PackedColor) -> u8 {
        (self.bits(color) >> self.shift()) as u8
    }

    /// Move a byte into this channel's bit window.
    #[inline]
    #[must_use]
    pub const fn place(self, value: u8) -> u32 {
        (value as u32) << self.shift()
    }
}

// ─── PackedColor ─────────────────────────────────────────────────────────────

/// A 32-bit ARGB color.
///
/// This is a plain value: operations never mutate it, they return new
/// colors.
///
/// # Examples
///
/// ```
/// use argb_codec::PackedColor;
///
/// let orange = PackedColor::from_rgb(0xff, 0x80, 0x00);
/// assert_eq!(orange.argb(), 0xffff_8000);
/// assert_eq!(orange.green(), 0x80);
///
/// let overlay: PackedColor = "#ff800080".parse().unwrap();
/// assert_eq!(overlay.alpha(), 0x80);
/// assert_eq!(overlay.to_string(), "#ff800080");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct PackedColor(u32);

impl PackedColor {
    /// Opaque black.
    pub const BLACK: Self = Self(0xff00_0000);

    /// Opaque white.
    pub const WHITE: Self = Self(0xffff_ffff);

    /// Opaque red.
    pub const RED: Self = Self(0xffff_0000);

    /// Opaque green.
    pub const GREEN: Self = Self(0xff00_ff00);

    /// Opaque blue.
    pub const BLUE: Self = Self(0xff00_00ff);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0);

    /// Wrap a raw `0xAARRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn new(argb: u32) -> Self {
        Self(argb)
    }

    /// Pack four channel bytes.
    #[inline]
    #[must_use]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(
            Channel::Alpha.place(a)
                | Channel::Red.place(r)
                | Channel::Green.place(g)
                | Channel::Blue.place(b),
        )
    }

    /// Pack an opaque color.
    #[inline]
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xff, r, g, b)
    }

    /// Parse a hex color string.
    ///
    /// Supports: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (with or without `#`).
    /// Forms without an alpha digit are opaque.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if the string is not a valid hex color.
    pub fn hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidHex(s.to_owned()))
    }

    /// The raw `0xAARRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// The color bits with alpha cleared (`0x00RRGGBB`).
    #[inline]
    #[must_use]
    pub const fn rgb(self) -> u32 {
        self.0 & 0x00ff_ffff
    }

    #[inline]
    #[must_use]
    pub const fn alpha(self) -> u8 {
        Channel::Alpha.extract(self)
    }

    #[inline]
    #[must_use]
    pub const fn red(self) -> u8 {
        Channel::Red.extract(self)
    }

    #[inline]
    #[must_use]
    pub const fn green(self) -> u8 {
        Channel::Green.extract(self)
    }

    #[inline]
    #[must_use]
    pub const fn blue(self) -> u8 {
        Channel::Blue.extract(self)
    }

    /// Read any channel by selector.
    #[inline]
    #[must_use]
    pub const fn channel(self, channel: Channel) -> u8 {
        channel.extract(self)
    }

    /// Return a copy with the alpha byte replaced.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self(self.rgb() | Channel::Alpha.place(a))
    }

    /// Whether alpha is 255.
    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xff
    }

    /// Whether alpha is 0.
    #[inline]
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.alpha() == 0
    }

    /// Convert to hex string (`#rrggbb`, or `#rrggbbaa` if not opaque).
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = (self.red(), self.green(), self.blue());
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = self.alpha();
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl fmt::Debug for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedColor({:#010x})", self.0)
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for PackedColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::hex(s)
    }
}

impl From<u32> for PackedColor {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<PackedColor> for u32 {
    fn from(color: PackedColor) -> Self {
        color.0
    }
}

// Colors appear in caller configuration as their hex text form.
impl Serialize for PackedColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PackedColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<PackedColor> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();

    match digits.len() {
        // #RGB / #RGBA
        3 | 4 => {
            let r = parse_short(digits[0])?;
            let g = parse_short(digits[1])?;
            let b = parse_short(digits[2])?;
            let a = match digits.get(3) {
                Some(&d) => parse_short(d)?,
                None => 0xff,
            };
            Some(PackedColor::from_argb(a, r, g, b))
        }
        // #RRGGBB / #RRGGBBAA
        6 | 8 => {
            let r = parse_hex_byte(&digits[0..2])?;
            let g = parse_hex_byte(&digits[2..4])?;
            let b = parse_hex_byte(&digits[4..6])?;
            let a = match digits.get(6..8) {
                Some(pair) => parse_hex_byte(pair)?,
                None => 0xff,
            };
            Some(PackedColor::from_argb(a, r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// A single digit stands for a repeated nibble: `f` → `0xff`.
#[inline]
fn parse_short(c: u8) -> Option<u8> {
    let v = parse_hex_digit(c)?;
    Some(v << 4 | v)
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
