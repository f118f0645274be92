// Copyright (C) Microsoft Corporation. All rights reserved.

//! Cross-platform cryptographic key and cipher abstraction.
//!
//! This crate provides a single key/cipher API backed by a pluggable cipher
//! provider. It includes support for:
//!
//! - **Symmetric cipher sessions**: per-key encryption/decryption transform
//!   state with one-shot and incremental (streaming) operation modes, across
//!   block ciphers (AES, DES, 3DES) and stream ciphers (RC4)
//! - **Legacy RSA key blobs**: bit-exact encoding/decoding of the CAPI
//!   PUBLICKEYBLOB/PRIVATEKEYBLOB binary layout, with the compatibility
//!   validation that format requires
//! - **Secret key material**: owned, zeroized-on-drop key bytes with secure
//!   generation and import
//!
//! # Architecture
//!
//! The crate is structured around a small trait layer: key markers and
//! import/generation traits, codec traits, and the cipher provider seam
//! ([`TransformOp`], [`CipherProvider`]). The session logic depends only on
//! that seam; the bundled software provider implements it on top of the
//! RustCrypto `cipher` trait stack. Providers are injected explicitly at
//! key-provider construction, never looked up through process-wide state.

mod op;
mod rsa;
mod secret;
mod sym;

pub use op::*;
pub use rsa::*;
pub use secret::*;
pub use sym::*;
use thiserror::Error;

/// Error type for all cryptographic operations.
///
/// Variants group into the failure classes callers dispatch on: invalid
/// arguments (detected before any provider call), structural rejection by the
/// legacy blob format, and operations the provider or format does not
/// support. All failures are deterministic functions of the input; nothing is
/// retried.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CryptoError {
    // Symmetric cipher errors
    /// Key material was empty at key creation.
    #[error("cipher key material is empty")]
    CipherEmptyKeyMaterial,
    /// Key material length is invalid for the selected cipher family.
    #[error("cipher invalid key size")]
    CipherInvalidKeySize,
    /// IV length does not match the cipher block size.
    #[error("cipher invalid IV size")]
    CipherInvalidIvSize,
    /// An IV was supplied to an algorithm that does not take one.
    #[error("IV supplied but the algorithm does not use an IV")]
    CipherIvNotSupported,
    /// Input length is not a positive multiple of the cipher block size.
    #[error("data length {len} is not a positive multiple of the {block_size}-byte block size")]
    CipherNotBlockAligned { len: usize, block_size: usize },
    /// Ciphertext length or padding cannot be decrypted.
    #[error("illegal block size")]
    CipherIllegalBlockSize,
    /// The algorithm is not implemented by the active cipher provider.
    #[error("cipher algorithm not supported by this provider")]
    CipherAlgorithmNotSupported,
    /// Raw symmetric key material export is not supported by this layer.
    #[error("symmetric key export not supported")]
    CipherKeyExportNotSupported,

    // Legacy (CAPI) RSA key blob errors
    /// The key parameters are not representable in the legacy blob format.
    #[error("RSA key parameters are incompatible with the legacy blob format")]
    BlobFormatRejected,
    /// The blob does not parse as the fixed legacy layout.
    #[error("malformed legacy key blob")]
    BlobMalformed,
    /// The requested blob kind is not implemented for this key type.
    #[error("key blob kind not supported")]
    BlobKindNotSupported,
    /// The key cannot be exported in the requested format.
    #[error("key not supported by the requested blob format")]
    KeyFormatNotSupported,

    // Key management errors
    /// Output buffer is too small for the exported key.
    #[error("key buffer too small")]
    KeyBufferTooSmall,
    /// Random number generation failed.
    #[error("random number generation failed")]
    RngError,
}
