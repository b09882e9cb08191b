//! Packing of discriminants into counter slots.
//!
//! Every discriminant satisfies `X ≡ 0` or `X ≡ 3 (mod 4)`. With the range
//! starting at `min_x ≡ 1 (mod 4)`, the offset `d = X - min_x` is therefore
//! `≡ 2` or `≡ 3 (mod 4)`, and the aligned window `4k .. 4k + 3` of offsets
//! needs only the two slots `2k` and `2k + 1`.

use crate::{Discriminant, TauError};

/// Number of slots needed to count a range of `len` discriminants.
pub const fn slots_for_len(len: u64) -> u64 {
    len / 2
}

/// Slot of the discriminant `x` in a buffer whose first discriminant is `min_x`.
pub fn slot_index(min_x: Discriminant, x: Discriminant) -> Result<u64, TauError> {
    let offset = x
        .checked_sub(min_x)
        .ok_or(TauError::Residue { x, min_x })?;
    match offset % 4 {
        2 => Ok((offset - 2) >> 1),
        3 => Ok((offset - 1) >> 1),
        _ => Err(TauError::Residue { x, min_x }),
    }
}

/// Inverse of [`slot_index`].
pub const fn slot_discriminant(min_x: Discriminant, index: u64) -> Discriminant {
    min_x + 2 * index + 2 - (index & 1)
}
