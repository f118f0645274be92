// Copyright (C) Microsoft Corporation. All rights reserved.

//! Generic cipher transforms over the RustCrypto trait stack.
//!
//! These adapters implement [`TransformOp`] for any block-mode state
//! implementing `BlockEncryptMut`/`BlockDecryptMut` and for any
//! `StreamCipher`. The block adapters own a [`BlockQueue`] for partial-block
//! buffering and handle PKCS#7 padding at finalization; the stream adapter
//! applies the keystream directly and treats finalize as update.

use cipher::{Block, BlockDecryptMut, BlockEncryptMut, StreamCipher};

use super::*;

/// Block cipher encryption transform.
pub(crate) struct BlockEncryptTransform<M: BlockEncryptMut> {
    mode: M,
    queue: BlockQueue,
    pad: bool,
}

impl<M: BlockEncryptMut> BlockEncryptTransform<M> {
    pub(crate) fn new(mode: M, pad: bool) -> Self {
        Self {
            mode,
            queue: BlockQueue::new(M::block_size(), false),
            pad,
        }
    }

    fn process(&mut self, data: &mut [u8]) {
        for chunk in data.chunks_exact_mut(M::block_size()) {
            self.mode.encrypt_block_mut(Block::<M>::from_mut_slice(chunk));
        }
    }
}

impl<M: BlockEncryptMut> TransformOp for BlockEncryptTransform<M> {
    fn block_size(&self) -> usize {
        M::block_size()
    }

    fn update(&mut self, input: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut ready = self.queue.absorb(input);
        self.process(&mut ready);
        Ok(ready)
    }

    fn finalize(&mut self, input: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut output = self.update(input)?;
        let mut last = self.queue.take_remainder();
        if self.pad {
            pkcs7_pad(&mut last, M::block_size());
            self.process(&mut last);
            output.extend_from_slice(&last);
        } else if !last.is_empty() {
            return Err(CryptoError::CipherNotBlockAligned {
                len: last.len(),
                block_size: M::block_size(),
            });
        }
        Ok(output)
    }
}

/// Block cipher decryption transform.
///
/// With padding enabled, the final complete ciphertext block is withheld
/// from update output and unpadded at finalization.
pub(crate) struct BlockDecryptTransform<M: BlockDecryptMut> {
    mode: M,
    queue: BlockQueue,
    pad: bool,
}

impl<M: BlockDecryptMut> BlockDecryptTransform<M> {
    pub(crate) fn new(mode: M, pad: bool) -> Self {
        Self {
            mode,
            queue: BlockQueue::new(M::block_size(), pad),
            pad,
        }
    }

    fn process(&mut self, data: &mut [u8]) {
        for chunk in data.chunks_exact_mut(M::block_size()) {
            self.mode.decrypt_block_mut(Block::<M>::from_mut_slice(chunk));
        }
    }
}

impl<M: BlockDecryptMut> TransformOp for BlockDecryptTransform<M> {
    fn block_size(&self) -> usize {
        M::block_size()
    }

    fn update(&mut self, input: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut ready = self.queue.absorb(input);
        self.process(&mut ready);
        Ok(ready)
    }

    fn finalize(&mut self, input: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut output = self.update(input)?;
        let mut last = self.queue.take_remainder();
        if self.pad {
            if last.len() != M::block_size() {
                return Err(CryptoError::CipherIllegalBlockSize);
            }
            self.process(&mut last);
            let unpadded = pkcs7_unpad(&last, M::block_size())?;
            output.extend_from_slice(unpadded);
        } else if !last.is_empty() {
            return Err(CryptoError::CipherIllegalBlockSize);
        }
        Ok(output)
    }
}

/// Stream cipher transform.
///
/// Keystream position persists across calls; finalize has no distinct
/// semantics.
pub(crate) struct StreamCipherTransform<C: StreamCipher> {
    cipher: C,
}

impl<C: StreamCipher> StreamCipherTransform<C> {
    pub(crate) fn new(cipher: C) -> Self {
        Self { cipher }
    }
}

impl<C: StreamCipher> TransformOp for StreamCipherTransform<C> {
    fn block_size(&self) -> usize {
        1
    }

    fn update(&mut self, input: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut output = input.to_vec();
        self.cipher.apply_keystream(&mut output);
        Ok(output)
    }

    fn finalize(&mut self, input: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.update(input)
    }
}

/// Appends PKCS#7 padding, always adding between 1 and `block_size` bytes.
fn pkcs7_pad(data: &mut Vec<u8>, block_size: usize) {
    let pad = block_size - data.len() % block_size;
    data.resize(data.len() + pad, pad as u8);
}

/// Validates and strips PKCS#7 padding from a decrypted final block.
fn pkcs7_unpad(block: &[u8], block_size: usize) -> Result<&[u8], CryptoError> {
    let pad = *block.last().ok_or(CryptoError::CipherIllegalBlockSize)? as usize;
    if pad == 0 || pad > block_size || pad > block.len() {
        return Err(CryptoError::CipherIllegalBlockSize);
    }
    let (body, padding) = block.split_at(block.len() - pad);
    if padding.iter().any(|&b| b as usize != pad) {
        return Err(CryptoError::CipherIllegalBlockSize);
    }
    Ok(body)
}
