use std::time::Instant;

use tau::{CountingBuffer, Discriminant, MAX_DISCRIMINANT, count_tau};
use tracing::{info, info_span};
use utils::{pretty_bytes, pretty_integer};

use crate::{BlockPlan, BlockReport, Profile, ScanError, ScanReport, ScanSettings};

/// Checks a profile before anything is allocated and returns the number of
/// counter slots it needs.
pub fn validate(profile: &Profile) -> Result<usize, ScanError> {
    if Discriminant::BITS < 64 {
        return Err(ScanError::IntegerWidth {
            bits: Discriminant::BITS,
        });
    }
    if profile.block_size == 0 || profile.block_size % 4 != 0 {
        return Err(ScanError::BlockSize {
            block_size: profile.block_size,
        });
    }
    if profile.discriminant_max == 0 {
        return Err(ScanError::EmptyScan);
    }
    if profile.discriminant_max > MAX_DISCRIMINANT {
        return Err(ScanError::DiscriminantMax {
            discriminant_max: profile.discriminant_max,
        });
    }
    if !profile.thresholds.is_complete() {
        return Err(ScanError::Thresholds(profile.thresholds));
    }
    let slots = profile.buffer_slots();
    usize::try_from(slots).map_err(|_| ScanError::BufferSize { slots })
}

/// Scans `[1, discriminant_max]` block by block with a single reused buffer
/// and returns the largest count over all blocks.
///
/// Each block gets its own root span so that its progress is flushed as soon
/// as the block is done.
pub fn run_scan(settings: &ScanSettings) -> Result<ScanReport, ScanError> {
    let time = Instant::now();
    info!("Calculations needed in {}", settings.label);
    let slots = validate(&settings.profile)?;

    info!(
        "Going up to absolute discriminant {}",
        pretty_integer(settings.discriminant_max)
    );
    info!("Block size: {}", pretty_integer(settings.block_size));
    info!("Reserving {} of RAM", pretty_bytes(slots as u64));

    let mut buffer =
        CountingBuffer::try_new(slots).map_err(|_| ScanError::OutOfMemory { bytes: slots })?;

    let plan = BlockPlan::new(settings.block_size, settings.discriminant_max);
    let mut blocks = Vec::with_capacity(plan.len());
    let mut bound = 0;
    for block in plan {
        let _span = info_span!("block", profile = settings.label, number = block.number)
            .entered();
        buffer.clear();
        info!(
            "Checking absolute discriminant in range {} to {}",
            pretty_integer(block.start),
            pretty_integer(block.end())
        );
        let block_bound = count_tau(
            &mut buffer,
            block.start,
            block.len,
            settings.thresholds,
            settings.strategy,
        )
        .map_err(|error| ScanError::Enumeration { block, error })?;
        info!("Found C_epsilon(Delta)<={block_bound} in current range");

        bound = bound.max(block_bound);
        blocks.push(BlockReport {
            block,
            bound: block_bound,
        });
    }

    Ok(ScanReport {
        label: settings.label,
        discriminant_max: settings.discriminant_max,
        block_size: settings.block_size,
        blocks,
        bound,
        elapsed: time.elapsed(),
    })
}
