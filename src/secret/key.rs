// Copyright (C) Microsoft Corporation. All rights reserved.

//! Generic secret key material implementation.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::*;

/// Raw secret key material for symmetric cipher operations.
///
/// The material is owned exclusively by the key object that wraps it and is
/// zeroed when dropped. It must be non-empty; the key size in bits is the
/// byte length times eight.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKeyMaterial {
    material: Vec<u8>,
}

impl SecretKeyMaterial {
    /// Returns the raw key bytes for provider use.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.material
    }
}

/// Marks this type as a cryptographic key.
impl Key for SecretKeyMaterial {
    fn size(&self) -> usize {
        self.material.len()
    }

    fn bits(&self) -> usize {
        self.material.len() * 8
    }
}

impl SymmetricKey for SecretKeyMaterial {}

/// Marks this key material as importable.
impl ImportableKey for SecretKeyMaterial {
    /// Imports key material from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::CipherEmptyKeyMaterial`] for empty input; any
    /// other length is accepted here, with family-specific key size checks
    /// applied at key creation.
    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.is_empty() {
            return Err(CryptoError::CipherEmptyKeyMaterial);
        }
        Ok(Self {
            material: bytes.to_vec(),
        })
    }
}

impl KeyGenerationOp for SecretKeyMaterial {
    type Key = Self;

    /// Generates new key material from the platform entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::RngError`] if entropy is unavailable, and
    /// [`CryptoError::CipherEmptyKeyMaterial`] for a zero size.
    fn generate(size: usize) -> Result<Self, CryptoError> {
        if size == 0 {
            return Err(CryptoError::CipherEmptyKeyMaterial);
        }
        let mut material = vec![0u8; size];
        getrandom::getrandom(&mut material).map_err(|_| CryptoError::RngError)?;
        Ok(Self { material })
    }
}

/// Redacts the key bytes; only the length is ever formatted.
impl fmt::Debug for SecretKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKeyMaterial")
            .field("len", &self.material.len())
            .finish_non_exhaustive()
    }
}
