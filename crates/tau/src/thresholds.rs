pub const PER_MILLE: u64 = 1000;

/// Smallest `mina_factor` for which `c <= sqrt(X)` holds on the whole window:
/// with `a >= floor(c / 2)` we get `X >= a (4c - a) >= c^2`.
pub const MIN_COMPLETE_MINA_FACTOR: u64 = 500;

/// Epsilon-admissibility window, as per-mille ratios.
///
/// `mina_factor` is `floor(1000 / (1 + sqrt(3) eps + eps^2))` and `minb_factor`
/// is `floor(1000 (1 - 2 eps))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub mina_factor: u64,
    pub minb_factor: u64,
}

impl Thresholds {
    pub const fn new(mina_factor: u64, minb_factor: u64) -> Self {
        Self {
            mina_factor,
            minb_factor,
        }
    }

    /// Lower end of the `a` loop for a given `c` (truncating division).
    #[inline(always)]
    pub const fn min_a(&self, c: u64) -> u64 {
        self.mina_factor * c / PER_MILLE
    }

    #[inline(always)]
    pub const fn min_b(&self, a: u64) -> u64 {
        self.minb_factor * a / PER_MILLE
    }

    /// Whether the bounds on `c` used by [`crate::count_tau`] see every triple
    /// of the window.
    pub const fn is_complete(&self) -> bool {
        self.mina_factor >= MIN_COMPLETE_MINA_FACTOR
            && self.mina_factor <= PER_MILLE
            && self.minb_factor <= PER_MILLE
    }
}
