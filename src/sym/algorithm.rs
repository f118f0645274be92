// Copyright (C) Microsoft Corporation. All rights reserved.

//! Symmetric algorithm descriptors.
//!
//! A [`SymmetricAlgorithm`] identifies a cipher family, block mode, and
//! padding scheme. It is immutable and fully determines the capability
//! surface of a cipher session: block size, whether an IV is consumed, and
//! whether the session transform resets on every one-shot call.

use std::fmt;

use super::*;

/// Symmetric cipher families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CipherFamily {
    /// AES with 128, 192, or 256-bit keys.
    Aes,
    /// Single DES with a 64-bit key.
    Des,
    /// Triple DES (two-key or three-key EDE).
    TripleDes,
    /// RC2 with 40 to 128-bit keys.
    Rc2,
    /// RC4 stream cipher.
    Rc4,
}

/// Cipher block modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockMode {
    /// Cipher block chaining; consumes an IV.
    Cbc,
    /// Electronic codebook; no IV.
    Ecb,
    /// Counter with CBC-MAC authenticated mode.
    Ccm,
    /// Galois/counter authenticated mode.
    Gcm,
    /// No block structure; the cipher is a keystream.
    Streaming,
}

/// Padding applied to the final block of a block cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CipherPadding {
    /// No padding; input must be block aligned.
    None,
    /// PKCS#7 padding.
    Pkcs7,
}

/// Direction of a cipher transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

/// An immutable symmetric cipher descriptor.
///
/// Construct with [`SymmetricAlgorithm::new`], which rejects inconsistent
/// combinations, or use the named constructors for common algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymmetricAlgorithm {
    family: CipherFamily,
    mode: BlockMode,
    padding: CipherPadding,
}

impl SymmetricAlgorithm {
    /// Creates a descriptor, validating the family/mode/padding combination.
    ///
    /// Stream cipher families pair only with [`BlockMode::Streaming`] and no
    /// padding; block families require a non-streaming mode; PKCS#7 padding
    /// applies only to CBC and ECB.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::CipherAlgorithmNotSupported`] for inconsistent
    /// combinations.
    pub fn new(
        family: CipherFamily,
        mode: BlockMode,
        padding: CipherPadding,
    ) -> Result<Self, CryptoError> {
        let streaming_family = matches!(family, CipherFamily::Rc4);
        let valid = match mode {
            BlockMode::Streaming => streaming_family && padding == CipherPadding::None,
            BlockMode::Cbc | BlockMode::Ecb => !streaming_family,
            BlockMode::Ccm | BlockMode::Gcm => {
                family == CipherFamily::Aes && padding == CipherPadding::None
            }
        };
        if !valid {
            return Err(CryptoError::CipherAlgorithmNotSupported);
        }
        Ok(Self {
            family,
            mode,
            padding,
        })
    }

    /// AES in CBC mode without padding.
    pub fn aes_cbc() -> Self {
        Self {
            family: CipherFamily::Aes,
            mode: BlockMode::Cbc,
            padding: CipherPadding::None,
        }
    }

    /// AES in CBC mode with PKCS#7 padding.
    pub fn aes_cbc_pkcs7() -> Self {
        Self {
            family: CipherFamily::Aes,
            mode: BlockMode::Cbc,
            padding: CipherPadding::Pkcs7,
        }
    }

    /// AES in ECB mode without padding.
    pub fn aes_ecb() -> Self {
        Self {
            family: CipherFamily::Aes,
            mode: BlockMode::Ecb,
            padding: CipherPadding::None,
        }
    }

    /// AES in ECB mode with PKCS#7 padding.
    pub fn aes_ecb_pkcs7() -> Self {
        Self {
            family: CipherFamily::Aes,
            mode: BlockMode::Ecb,
            padding: CipherPadding::Pkcs7,
        }
    }

    /// DES in CBC mode without padding.
    pub fn des_cbc() -> Self {
        Self {
            family: CipherFamily::Des,
            mode: BlockMode::Cbc,
            padding: CipherPadding::None,
        }
    }

    /// Triple DES in CBC mode with PKCS#7 padding.
    pub fn triple_des_cbc_pkcs7() -> Self {
        Self {
            family: CipherFamily::TripleDes,
            mode: BlockMode::Cbc,
            padding: CipherPadding::Pkcs7,
        }
    }

    /// RC4 keystream cipher.
    pub fn rc4() -> Self {
        Self {
            family: CipherFamily::Rc4,
            mode: BlockMode::Streaming,
            padding: CipherPadding::None,
        }
    }

    /// Returns the cipher family.
    pub fn family(&self) -> CipherFamily {
        self.family
    }

    /// Returns the block mode.
    pub fn mode(&self) -> BlockMode {
        self.mode
    }

    /// Returns the padding scheme.
    pub fn padding(&self) -> CipherPadding {
        self.padding
    }

    /// Returns the cipher block size in bytes (1 for stream ciphers).
    pub fn block_size(&self) -> usize {
        match self.family {
            CipherFamily::Aes => 16,
            CipherFamily::Des | CipherFamily::TripleDes | CipherFamily::Rc2 => 8,
            CipherFamily::Rc4 => 1,
        }
    }

    /// Returns whether the algorithm consumes an initialization vector.
    pub fn uses_iv(&self) -> bool {
        matches!(self.mode, BlockMode::Cbc | BlockMode::Ccm | BlockMode::Gcm)
    }

    /// Returns whether the algorithm has block alignment and padding
    /// semantics.
    ///
    /// True for CBC and ECB only. Authenticated modes run the cipher in a
    /// counter construction and accept any input length, so they behave
    /// stream-like here even though they consume an IV.
    pub fn is_block_cipher(&self) -> bool {
        matches!(self.mode, BlockMode::Cbc | BlockMode::Ecb)
    }

    /// Returns whether one-shot calls reinitialize the session transform.
    ///
    /// True exactly for block-oriented algorithms: each one-shot call is then
    /// an independent operation honoring its own IV. Stream ciphers keep
    /// their transform so keystream state spans calls.
    pub fn resets_per_call(&self) -> bool {
        self.is_block_cipher()
    }

    /// Returns whether `len` is a valid key material length for the family.
    pub fn valid_key_size(&self, len: usize) -> bool {
        match self.family {
            CipherFamily::Aes => matches!(len, 16 | 24 | 32),
            CipherFamily::Des => len == 8,
            CipherFamily::TripleDes => matches!(len, 16 | 24),
            CipherFamily::Rc2 => (5..=16).contains(&len),
            CipherFamily::Rc4 => matches!(len, 5 | 8 | 16 | 24 | 32),
        }
    }
}

impl fmt::Display for SymmetricAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let family = match self.family {
            CipherFamily::Aes => "AES",
            CipherFamily::Des => "DES",
            CipherFamily::TripleDes => "3DES",
            CipherFamily::Rc2 => "RC2",
            CipherFamily::Rc4 => "RC4",
        };
        match self.mode {
            BlockMode::Streaming => write!(f, "{family}")?,
            BlockMode::Cbc => write!(f, "{family}_CBC")?,
            BlockMode::Ecb => write!(f, "{family}_ECB")?,
            BlockMode::Ccm => write!(f, "{family}_CCM")?,
            BlockMode::Gcm => write!(f, "{family}_GCM")?,
        }
        if self.padding == CipherPadding::Pkcs7 {
            write!(f, "_PKCS7")?;
        }
        Ok(())
    }
}
