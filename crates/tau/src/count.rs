use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{
    CBounds, CountingBuffer, Discriminant, MAX_DISCRIMINANT, TauError, Thresholds, slot_index,
    slots_for_len,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    Sequential,
    /// Spreads the `c` loop over the rayon pool. Gives the same counts and the
    /// same maximum as [`Strategy::Sequential`].
    Parallel,
}

/// Counts the admissible triples of every discriminant in
/// `[min_x, min_x + len - 1]` and returns the largest slot value reached.
///
/// `buffer` is expected to be cleared by the caller. Every failure means the
/// enumeration can no longer be trusted.
#[instrument(name = "count_tau", level = "debug", skip(buffer))]
pub fn count_tau(
    buffer: &mut CountingBuffer,
    min_x: Discriminant,
    len: u64,
    thresholds: Thresholds,
    strategy: Strategy,
) -> Result<u8, TauError> {
    if min_x % 4 != 1 {
        return Err(TauError::Misaligned { min_x });
    }
    let max_x = match len.checked_sub(1).and_then(|l| min_x.checked_add(l)) {
        Some(max_x) => max_x,
        None => return Err(TauError::EmptyRange { min_x }),
    };
    if max_x > MAX_DISCRIMINANT {
        return Err(TauError::TooLarge { max_x });
    }
    let required = slots_for_len(len);
    if (buffer.len() as u64) < required {
        return Err(TauError::BufferTooSmall {
            slots: buffer.len(),
            required: required as usize,
        });
    }

    let bounds = CBounds::for_range(min_x, max_x)?;
    debug!(min_c = bounds.min, max_c = bounds.max, "bounds on c");

    match strategy {
        Strategy::Sequential => {
            let mut max = 0;
            for c in bounds.min..=bounds.max {
                let column_max = count_column(c, min_x, max_x, thresholds, |index, x| {
                    buffer.bump(index, x)
                })?;
                max = max.max(column_max);
            }
            Ok(max)
        }
        Strategy::Parallel => {
            let buffer = &*buffer;
            (bounds.min..=bounds.max)
                .into_par_iter()
                .try_fold(
                    || 0,
                    |max: u8, c| {
                        count_column(c, min_x, max_x, thresholds, |index, x| {
                            buffer.bump_shared(index, x)
                        })
                        .map(|column_max| max.max(column_max))
                    },
                )
                .try_reduce(|| 0, |a, b| Ok(a.max(b)))
        }
    }
}

/// Inner two loops for a fixed `c`.
fn count_column(
    c: u64,
    min_x: Discriminant,
    max_x: Discriminant,
    thresholds: Thresholds,
    mut bump: impl FnMut(u64, Discriminant) -> Result<u8, TauError>,
) -> Result<u8, TauError> {
    let mut max = 0;
    for a in thresholds.min_a(c)..=c {
        for b in thresholds.min_b(a)..=a {
            let x = 4 * a * c - b * b;
            if !(min_x..=max_x).contains(&x) {
                continue;
            }
            max = max.max(bump(slot_index(min_x, x)?, x)?);
        }
    }
    Ok(max)
}
