// Copyright (C) Microsoft Corporation. All rights reserved.

//! Encoding and decoding traits for fixed key blob formats.
//!
//! These traits are the generic face of the legacy key blob codec: a
//! structure that can be written to a fixed binary layout and parsed back
//! from it. Encoding follows the two-phase approach used throughout the
//! crate: a `None` output queries the required size, `Some(buffer)` performs
//! the actual encoding.

use super::*;

/// Trait for encoding a data structure to its byte representation.
pub trait EncodeOp {
    /// Encodes the structure to bytes.
    ///
    /// # Arguments
    ///
    /// * `output` - Optional output buffer. If `None`, returns the encoded
    ///   size without writing.
    ///
    /// # Returns
    ///
    /// The number of bytes required (if `output` is `None`) or written (if
    /// `output` is `Some`).
    ///
    /// # Errors
    ///
    /// Returns an error if the structure is not representable in the target
    /// format or the buffer is too small.
    fn to_bytes(&mut self, output: Option<&mut [u8]>) -> Result<usize, CryptoError>;
}

/// Trait for decoding a byte representation back into a data structure.
pub trait DecodeOp {
    /// The type of the decoded output.
    type T;

    /// Parameters required for decoding. Use `()` when none are needed.
    type P;

    /// Decodes the input bytes into a structure.
    ///
    /// # Errors
    ///
    /// Returns an error if the input does not parse as the expected layout.
    fn from_bytes(input: &[u8], params: Self::P) -> Result<Self::T, CryptoError>;
}
