//! Blending whole strips of colors at once.
//!
//! A base strip and a layer strip are combined index by index, the way a
//! renderer composites one layer of pixels onto the layers below it.

use argb_codec::{ColorError, PackedColor};

use crate::mode::BlendMode;
use crate::ops::blend;

/// Composite `layer[i]` onto `base[i]` for every index, in place.
///
/// # Errors
///
/// Returns [`ColorError::LengthMismatch`] if the slices differ in length;
/// `base` is left untouched in that case.
pub fn blend_in_place(
    base: &mut [PackedColor],
    layer: &[PackedColor],
    mode: BlendMode,
) -> Result<(), ColorError> {
    ColorError::check_len(base.len(), layer.len())?;
    tracing::trace!(count = base.len(), %mode, "blending layer in place");
    for (dst, &src) in base.iter_mut().zip(layer) {
        *dst = blend(*dst, src, mode);
    }
    Ok(())
}

/// Composite `layer[i]` onto `base[i]` for every index, writing to `out`.
///
/// # Errors
///
/// Returns [`ColorError::LengthMismatch`] if `layer` or `out` differs in
/// length from `base`; `out` is left untouched in that case.
pub fn blend_into(
    base: &[PackedColor],
    layer: &[PackedColor],
    mode: BlendMode,
    out: &mut [PackedColor],
) -> Result<(), ColorError> {
    ColorError::check_len(base.len(), layer.len())?;
    ColorError::check_len(base.len(), out.len())?;
    tracing::trace!(count = base.len(), %mode, "blending layer into buffer");
    for ((dst, &c1), &c2) in out.iter_mut().zip(base).zip(layer) {
        *dst = blend(c1, c2, mode);
    }
    Ok(())
}

/// Composite one color onto every entry of `base`, in place.
pub fn blend_uniform(base: &mut [PackedColor], layer: PackedColor, mode: BlendMode) {
    tracing::trace!(count = base.len(), %mode, %layer, "blending uniform layer");
    for dst in base.iter_mut() {
        *dst = blend(*dst, layer, mode);
    }
}
