// Copyright (C) Microsoft Corporation. All rights reserved.

//! The cipher provider seam.
//!
//! Symmetric cipher sessions do not talk to a cipher backend directly. They
//! hold transforms behind the object-safe [`TransformOp`] trait and obtain
//! them from a [`CipherProvider`]. Each target platform supplies one provider
//! implementation; the session and key logic depend only on these traits.
//!
//! # Transform lifecycle
//!
//! A transform is bound to one key, one direction, and (for IV-bearing
//! modes) one IV at creation. Block-oriented transforms buffer partial
//! blocks across [`update`](TransformOp::update) calls and apply or validate
//! padding in [`finalize`](TransformOp::finalize). Stream transforms keep
//! their keystream position across calls and have no distinct finalize
//! semantics.

use super::*;

/// An initialized cipher transform for a single key and direction.
///
/// Implementations are stateful: block transforms carry partial-block
/// buffers, stream transforms carry keystream state. A transform is not
/// reusable across keys or directions.
pub trait TransformOp {
    /// Returns the transform's block size in bytes (1 for stream ciphers).
    fn block_size(&self) -> usize;

    /// Processes a chunk of input data, returning whatever output is ready.
    ///
    /// Any chunk size is valid. For block transforms the output may be
    /// shorter than the input while partial blocks accumulate; for stream
    /// transforms the output always matches the input length.
    fn update(&mut self, input: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Absorbs a final chunk and completes the operation.
    ///
    /// Block transforms apply padding (encryption) or validate and strip it
    /// (decryption) here. Stream transforms treat this exactly like
    /// [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::CipherNotBlockAligned`] when an unpadded
    /// encryption ends off a block boundary, and
    /// [`CryptoError::CipherIllegalBlockSize`] when ciphertext length or
    /// padding is invalid on decryption.
    fn finalize(&mut self, input: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// Factory for cipher transforms, implemented once per platform backend.
///
/// Providers are constructed at startup and passed to
/// [`SymmetricKeyProvider`](crate::SymmetricKeyProvider) explicitly; there is
/// no process-wide provider registry.
pub trait CipherProvider: Send + Sync {
    /// Creates an initialized transform for the given algorithm, key
    /// material, direction, and IV.
    ///
    /// The caller has already validated key size, IV presence, and IV
    /// length against the algorithm descriptor; `iv` is `Some` exactly when
    /// the algorithm uses one.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::CipherAlgorithmNotSupported`] when this
    /// provider does not implement the requested algorithm.
    fn create_transform(
        &self,
        algorithm: &SymmetricAlgorithm,
        key: &SecretKeyMaterial,
        direction: Direction,
        iv: Option<&[u8]>,
    ) -> Result<Box<dyn TransformOp>, CryptoError>;
}
