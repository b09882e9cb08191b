use std::{fmt, time::Duration};

use colored::Colorize;
use tau::Discriminant;

use crate::Block;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockReport {
    pub block: Block,
    pub bound: u8,
}

/// Outcome of a complete scan of `[1, discriminant_max]`.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub label: &'static str,
    pub discriminant_max: Discriminant,
    pub block_size: u64,
    pub blocks: Vec<BlockReport>,
    /// Upper bound on C_epsilon(Delta) for every Delta in range.
    pub bound: u8,
    pub elapsed: Duration,
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Calculations needed in {}.", self.label)?;
        writeln!(
            f,
            "Checked {} block(s) of size {}.",
            self.blocks.len(),
            self.block_size
        )?;
        writeln!(f, "Done after {:.3}ms.", self.elapsed.as_secs_f64() * 1000.0)?;
        write!(
            f,
            "{}",
            format!(
                "Found C_epsilon(Delta)<={} in range 1 to {}.",
                self.bound, self.discriminant_max
            )
            .green()
        )
    }
}
