use crate::Discriminant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TauError {
    /// The range does not start at a discriminant `≡ 1 (mod 4)`.
    Misaligned { min_x: Discriminant },
    EmptyRange { min_x: Discriminant },
    TooLarge { max_x: Discriminant },
    BufferTooSmall { slots: usize, required: usize },
    /// The floating point bounds on `c` failed exact re-validation.
    Rounding {
        min_c: u64,
        min_x: Discriminant,
        max_c: u64,
        max_x: Discriminant,
    },
    /// `X - min_x` has a residue mod 4 that no discriminant can have.
    Residue { x: Discriminant, min_x: Discriminant },
    IndexOutOfRange { index: u64, slots: usize },
    CounterOverflow { x: Discriminant },
    Allocation { bytes: usize },
}

impl std::fmt::Display for TauError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Misaligned { min_x } => {
                write!(f, "minX = {min_x} is not 1 mod 4")
            }
            Self::EmptyRange { min_x } => {
                write!(f, "empty discriminant range starting at {min_x}")
            }
            Self::TooLarge { max_x } => write!(
                f,
                "maxX = {max_x} exceeds the largest supported discriminant {}",
                crate::MAX_DISCRIMINANT
            ),
            Self::BufferTooSmall { slots, required } => write!(
                f,
                "counting buffer holds {slots} slots but the range needs {required}"
            ),
            Self::Rounding {
                min_c,
                min_x,
                max_c,
                max_x,
            } => write!(
                f,
                "rounding error (minc = {min_c}, minX = {min_x}, maxc = {max_c}, maxX = {max_x})"
            ),
            Self::Residue { x, min_x } => write!(
                f,
                "discriminant {x} has offset {} mod 4 from minX = {min_x}",
                x.wrapping_sub(*min_x) % 4
            ),
            Self::IndexOutOfRange { index, slots } => {
                write!(f, "slot index {index} outside a buffer of {slots} slots")
            }
            Self::CounterOverflow { x } => {
                write!(f, "counter for discriminant {x} would overflow")
            }
            Self::Allocation { bytes } => {
                write!(f, "could not allocate {bytes} bytes for the counting buffer")
            }
        }
    }
}

impl std::error::Error for TauError {}
