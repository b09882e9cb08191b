use tau::Discriminant;

/// A contiguous slice `[start, start + len - 1]` of the discriminant range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// 1-based.
    pub number: u64,
    pub start: Discriminant,
    pub len: u64,
}

impl Block {
    pub const fn end(&self) -> Discriminant {
        self.start + self.len - 1
    }
}

/// Consecutive blocks covering `[1, discriminant_max]`; the last one is
/// truncated. A `block_size` of 0 yields no blocks.
#[derive(Debug, Clone)]
pub struct BlockPlan {
    block_size: u64,
    discriminant_max: Discriminant,
    next: u64,
}

impl BlockPlan {
    pub const fn new(block_size: u64, discriminant_max: Discriminant) -> Self {
        Self {
            block_size,
            discriminant_max,
            next: 1,
        }
    }

    pub const fn n_blocks(&self) -> u64 {
        match self.block_size {
            0 => 0,
            block_size => self.discriminant_max.div_ceil(block_size),
        }
    }
}

impl Iterator for BlockPlan {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if self.next > self.n_blocks() {
            return None;
        }
        let number = self.next;
        self.next += 1;
        let start = self.block_size * (number - 1) + 1;
        let len = self.block_size.min(self.discriminant_max - start + 1);
        Some(Block { number, start, len })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.n_blocks() + 1 - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BlockPlan {}
