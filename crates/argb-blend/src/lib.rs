//! # argb-blend — Blend engine for packed ARGB colors
//!
//! Composites a layer color onto a base color with one of seven modes:
//!
//! - **[`BlendMode::Lerp`]** — interpolate toward the layer
//! - **[`BlendMode::Add`]** / **[`BlendMode::Subtract`]** — clipped arithmetic
//! - **[`BlendMode::Multiply`]** / **[`BlendMode::Screen`]** — darken / lighten
//! - **[`BlendMode::Lightest`]** / **[`BlendMode::Darkest`]** — channel-wise max / min
//!
//! ```text
//! blend(c1, c2, mode)
//!     │
//!     ▼
//! ops.rs:   per-channel arithmetic on in-position bits (argb-codec Channel)
//!     │     weight = alpha(c2), result alpha = min(255, a1 + a2)
//!     ▼
//! batch.rs: the same, index by index over slices
//! ```
//!
//! Every function is pure. Unknown modes are unrepresentable: `BlendMode`
//! is a closed enum and dispatch is an exhaustive match.

pub mod batch;
pub mod mode;
pub mod ops;

pub use batch::{blend_in_place, blend_into, blend_uniform};
pub use mode::{BlendMode, ParseBlendModeError};
pub use ops::{
    LerpAmount, add, blend, darkest, lerp, lerp_by, lerp_with_alpha, lightest, multiply, screen,
    subtract,
};
