use std::fmt;

use tau::{TauError, Thresholds};

use crate::Block;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    ResourceExhaustion,
    NumericalInvariant,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Configuration => "configuration error",
            Self::ResourceExhaustion => "resource exhaustion",
            Self::NumericalInvariant => "numerical invariant violation",
        })
    }
}

/// Every variant is fatal: the bound is only meaningful if each block was
/// enumerated completely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    IntegerWidth { bits: u32 },
    BlockSize { block_size: u64 },
    EmptyScan,
    DiscriminantMax { discriminant_max: u64 },
    Thresholds(Thresholds),
    BufferSize { slots: u64 },
    OutOfMemory { bytes: usize },
    Enumeration { block: Block, error: TauError },
}

impl ScanError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IntegerWidth { .. }
            | Self::BlockSize { .. }
            | Self::EmptyScan
            | Self::DiscriminantMax { .. }
            | Self::Thresholds(_)
            | Self::BufferSize { .. } => ErrorKind::Configuration,
            Self::OutOfMemory { .. } => ErrorKind::ResourceExhaustion,
            Self::Enumeration { .. } => ErrorKind::NumericalInvariant,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntegerWidth { bits } => write!(
                f,
                "discriminants need an integer type of at least 64 bits, got {bits}"
            ),
            Self::BlockSize { block_size } => {
                write!(f, "block size {block_size} must be a positive multiple of 4")
            }
            Self::EmptyScan => f.write_str("maximal discriminant must be at least 1"),
            Self::DiscriminantMax { discriminant_max } => write!(
                f,
                "maximal discriminant {discriminant_max} exceeds the supported {}",
                tau::MAX_DISCRIMINANT
            ),
            Self::Thresholds(thresholds) => write!(
                f,
                "ratio factors {}/{} leave admissible forms outside the bounds on c",
                thresholds.mina_factor, thresholds.minb_factor
            ),
            Self::BufferSize { slots } => {
                write!(f, "a buffer of {slots} bytes is not addressable")
            }
            Self::OutOfMemory { bytes } => {
                write!(f, "error allocating {bytes} bytes of memory")
            }
            Self::Enumeration { block, error } => write!(
                f,
                "block {} ({} to {}): {error}",
                block.number,
                block.start,
                block.end()
            ),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Enumeration { error, .. } => Some(error),
            _ => None,
        }
    }
}
