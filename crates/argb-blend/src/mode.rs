//! Blend mode selector.
//!
//! `BlendMode` is a closed set, so dispatch in [`crate::blend`] is an
//! exhaustive `match` and there is no "unknown mode" path at runtime. The
//! only place an unknown mode can show up is text input, which is rejected
//! by [`BlendMode::from_str`](std::str::FromStr).

use std::fmt;
use std::str::FromStr;

use argb_codec::PackedColor;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a layer color is composited onto a base color.
///
/// In every mode the layer's alpha is the strength of the effect, and the
/// result's alpha is the clamped sum of both alphas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// Interpolate toward the layer.
    #[default]
    Lerp,
    /// Add the layer, clipping at full intensity.
    Add,
    /// Subtract the layer, clipping at zero.
    Subtract,
    /// Multiply channels (darkens).
    Multiply,
    /// Inverse multiply (lightens).
    Screen,
    /// Channel-wise maximum.
    Lightest,
    /// Channel-wise minimum.
    Darkest,
}

impl BlendMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Lerp,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Screen,
        Self::Lightest,
        Self::Darkest,
    ];

    /// Lower-case name, as used in text and serialized forms.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lerp => "lerp",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Lightest => "lightest",
            Self::Darkest => "darkest",
        }
    }

    /// Composite `layer` onto `base` with this mode.
    #[inline]
    #[must_use]
    pub fn apply(self, base: PackedColor, layer: PackedColor) -> PackedColor {
        crate::blend(base, layer, self)
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A string that names no [`BlendMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown blend mode: {0:?}")]
pub struct ParseBlendModeError(String);

impl FromStr for BlendMode {
    type Err = ParseBlendModeError;

    /// Parse a mode name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseBlendModeError(s.to_owned()))
    }
}
