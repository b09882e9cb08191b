use derive_more::Deref;
use tau::{Discriminant, Strategy, Thresholds};

/// One verification run: the discriminant range, the blocking, and the
/// admissibility window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub label: &'static str,
    /// Must be divisible by 4 so that every block starts at `1 (mod 4)`.
    pub block_size: u64,
    pub discriminant_max: Discriminant,
    pub thresholds: Thresholds,
}

impl Profile {
    /// Lemma 7.2 (i): eps = 0.001, about 5 GB of counters.
    pub const LEMMA_7_2_I: Self = Self::new(
        "Lemma 7.2 (i)",
        10_000_000_000,
        10_000_000_000,
        Thresholds::new(998, 998),
    );

    /// Lemma 7.2 (ii): eps = 0.004, about 5 MB of counters.
    pub const LEMMA_7_2_II: Self = Self::new(
        "Lemma 7.2 (ii)",
        10_000_000,
        10_000_000,
        Thresholds::new(993, 992),
    );

    pub const fn new(
        label: &'static str,
        block_size: u64,
        discriminant_max: Discriminant,
        thresholds: Thresholds,
    ) -> Self {
        Self {
            label,
            block_size,
            discriminant_max,
            thresholds,
        }
    }

    /// Size of the counting buffer, in slots (= bytes).
    pub const fn buffer_slots(&self) -> u64 {
        tau::slots_for_len(self.block_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deref)]
pub struct ScanSettings {
    #[deref]
    pub profile: Profile,
    pub strategy: Strategy,
}

impl ScanSettings {
    pub const fn new(profile: Profile, strategy: Strategy) -> Self {
        Self { profile, strategy }
    }
}
