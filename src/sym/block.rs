// Copyright (C) Microsoft Corporation. All rights reserved.

//! Block-level buffering for streaming cipher operations.
//!
//! Block ciphers consume fixed-size blocks, but streaming input arrives in
//! arbitrary chunks. [`BlockQueue`] accumulates partial blocks between
//! update calls and hands back the runs of complete blocks that are ready to
//! process. Padded decryption additionally withholds the final complete
//! block so it can be unpadded at finalization.

/// Partial-block buffer for a block cipher transform.
pub(crate) struct BlockQueue {
    buf: Vec<u8>,
    block_size: usize,
    hold_back: bool,
}

impl BlockQueue {
    /// Creates a queue for the given block size.
    ///
    /// With `hold_back` set, the final complete block is never drained by
    /// [`absorb`](Self::absorb); it stays queued for
    /// [`take_remainder`](Self::take_remainder) so padding can be stripped.
    pub(crate) fn new(block_size: usize, hold_back: bool) -> Self {
        Self {
            buf: Vec::with_capacity(block_size),
            block_size,
            hold_back,
        }
    }

    /// Absorbs input and drains every block that is ready to process.
    ///
    /// Returns a buffer whose length is a multiple of the block size. When
    /// holding back, at least one byte always stays queued so that input
    /// ending exactly on a block boundary keeps its last block buffered.
    pub(crate) fn absorb(&mut self, input: &[u8]) -> Vec<u8> {
        self.buf.extend_from_slice(input);
        let reserve = usize::from(self.hold_back);
        let ready = self.buf.len().saturating_sub(reserve) / self.block_size * self.block_size;
        let rest = self.buf.split_off(ready);
        std::mem::replace(&mut self.buf, rest)
    }

    /// Takes whatever is still queued, leaving the queue empty.
    pub(crate) fn take_remainder(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::BlockQueue;

    #[test]
    fn test_absorb_drains_complete_blocks() {
        let mut queue = BlockQueue::new(4, false);
        assert_eq!(queue.absorb(&[1, 2]), Vec::<u8>::new());
        assert_eq!(queue.absorb(&[3, 4, 5]), vec![1, 2, 3, 4]);
        assert_eq!(queue.absorb(&[6, 7, 8, 9]), vec![5, 6, 7, 8]);
        assert_eq!(queue.take_remainder(), vec![9]);
    }

    #[test]
    fn test_hold_back_keeps_last_block() {
        let mut queue = BlockQueue::new(4, true);
        // input ending on a block boundary keeps its final block queued
        assert_eq!(queue.absorb(&[1, 2, 3, 4]), Vec::<u8>::new());
        assert_eq!(queue.absorb(&[5, 6, 7, 8]), vec![1, 2, 3, 4]);
        assert_eq!(queue.take_remainder(), vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_hold_back_with_trailing_data() {
        let mut queue = BlockQueue::new(4, true);
        assert_eq!(queue.absorb(&[1, 2, 3, 4, 5]), vec![1, 2, 3, 4]);
        assert_eq!(queue.take_remainder(), vec![5]);
    }
}
