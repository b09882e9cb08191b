use crate::{Discriminant, TauError};

/// Range of `c` that can reach a discriminant in `[min_x, max_x]`.
///
/// `X <= 4ac <= 4c^2` gives `c >= sqrt(min_x) / 2`. The upper end
/// `c <= sqrt(max_x)` relies on `a` being close enough to `c`, see
/// [`crate::MIN_COMPLETE_MINA_FACTOR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CBounds {
    pub min: u64,
    pub max: u64,
}

impl CBounds {
    /// Floating point estimate; must go through [`Self::check`] before use.
    pub fn approximate(min_x: Discriminant, max_x: Discriminant) -> Self {
        Self {
            min: ((min_x as f64).sqrt() / 2.0).floor() as u64,
            max: (max_x as f64).sqrt().floor() as u64,
        }
    }

    /// Exact integer re-validation: `4 min^2 <= min_x` and `(max + 1)^2 > max_x`.
    pub fn check(self, min_x: Discriminant, max_x: Discriminant) -> Result<Self, TauError> {
        let min = u128::from(self.min);
        let max = u128::from(self.max);
        if 4 * min * min > u128::from(min_x) || (max + 1) * (max + 1) <= u128::from(max_x) {
            return Err(TauError::Rounding {
                min_c: self.min,
                min_x,
                max_c: self.max,
                max_x,
            });
        }
        Ok(self)
    }

    /// Validated bounds with `c = 0` removed.
    pub fn for_range(min_x: Discriminant, max_x: Discriminant) -> Result<Self, TauError> {
        let bounds = Self::approximate(min_x, max_x).check(min_x, max_x)?;
        Ok(Self {
            min: bounds.min.max(1),
            ..bounds
        })
    }
}
