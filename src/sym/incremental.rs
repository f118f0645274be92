// Copyright (C) Microsoft Corporation. All rights reserved.

//! Incremental (streaming) cipher sessions.

use super::*;

/// An in-progress incremental cipher operation.
///
/// Created by [`SymmetricCipherKey::create_encryptor`] or
/// [`SymmetricCipherKey::create_decryptor`]. Data fed through [`Self::update`]
/// may arrive in arbitrary chunk sizes; partial blocks are buffered
/// internally and emitted once complete. [`Self::finalize_block`] consumes the
/// trailing data and applies or removes padding.
///
/// The borrow ties the operation to its key session, so the key cannot run a
/// one-shot call while an incremental operation is open.
pub struct IncrementalCipher<'a> {
    transform: &'a mut Box<dyn TransformOp>,
    algorithm: SymmetricAlgorithm,
}

impl<'a> IncrementalCipher<'a> {
    pub(crate) fn new(
        transform: &'a mut Box<dyn TransformOp>,
        algorithm: SymmetricAlgorithm,
    ) -> Self {
        Self {
            transform,
            algorithm,
        }
    }

    /// The granularity at which input is consumed, in bytes.
    pub fn input_block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    /// The granularity at which output is produced, in bytes.
    pub fn output_block_size(&self) -> usize {
        self.transform.block_size()
    }

    /// Feeds more data, returning whatever complete output is available.
    ///
    /// Block ciphers return a multiple of the block size, possibly empty;
    /// stream ciphers return exactly `input.len()` bytes.
    pub fn update(&mut self, input: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.transform.update(input)
    }

    /// Feeds the final data and completes the operation.
    ///
    /// For padded block modes this emits the padded tail (encryption) or
    /// strips and validates the padding (decryption). For unpadded block
    /// modes the total data fed must have been block-aligned or
    /// [`CryptoError::CipherNotBlockAligned`] is returned. Stream ciphers
    /// simply process the final chunk.
    pub fn finalize_block(&mut self, input: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if self.algorithm.is_block_cipher() {
            self.transform.finalize(input)
        } else {
            self.transform.update(input)
        }
    }
}
