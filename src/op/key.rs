// Copyright (C) Microsoft Corporation. All rights reserved.

//! Traits for the cryptographic key type system.
//!
//! This module provides the key marker hierarchy and the basic key lifecycle
//! operations (import, export, generation). The markers give compile-time
//! guarantees that a key type is used with the operations it supports.

use super::*;

/// Base trait for all cryptographic keys.
///
/// Establishes the size queries every key type answers. For symmetric keys
/// the size is the raw material length; for RSA keys it is the modulus
/// length.
pub trait Key {
    /// Returns the length of the key in bytes.
    fn size(&self) -> usize;

    /// Returns the length of the key in bits.
    ///
    /// Always `size() * 8`.
    fn bits(&self) -> usize;
}

/// Marker trait for symmetric (secret) keys.
///
/// Identifies key types used in symmetric cryptography, where the same key
/// encrypts and decrypts. Prevents accidental use of asymmetric keys where
/// symmetric material is required.
pub trait SymmetricKey: Key {}

/// Trait for keys that can be constructed from raw bytes.
pub trait ImportableKey: Sized {
    /// Imports a key from its byte representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid representation for the
    /// key type (for example, empty symmetric key material).
    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError>;
}

/// Trait for keys that can be serialized to bytes.
///
/// Export follows the two-phase buffer pattern: call with `None` to learn the
/// required size, then with `Some(buffer)` to perform the copy.
pub trait ExportableKey {
    /// Exports the key to its byte representation.
    ///
    /// # Arguments
    ///
    /// * `bytes` - Optional output buffer. If `None`, returns the required
    ///   buffer size without exporting.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::KeyBufferTooSmall`] if the provided buffer
    /// cannot hold the exported key, or a format error if the key cannot be
    /// expressed in its export format.
    fn to_bytes(&self, bytes: Option<&mut [u8]>) -> Result<usize, CryptoError>;
}

/// Trait for generating new keys with secure randomness.
pub trait KeyGenerationOp {
    /// The key type produced by generation.
    type Key;

    /// Generates a new key of `size` bytes from a cryptographically secure
    /// random source.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::RngError`] if the platform entropy source
    /// fails.
    fn generate(size: usize) -> Result<Self::Key, CryptoError>;
}
