// Copyright (C) Microsoft Corporation. All rights reserved.

//! Symmetric cipher key sessions.
//!
//! A [`SymmetricKeyProvider`] binds a [`SymmetricAlgorithm`] to a
//! [`CipherProvider`] backend and opens [`SymmetricCipherKey`] sessions. A
//! session owns the key material and up to two live transforms, one per
//! direction, created lazily on first use.
//!
//! Block cipher sessions build a fresh transform for every one-shot call, so
//! repeated calls with the same arguments produce identical output. Stream
//! cipher sessions keep their transform alive across calls and continue the
//! keystream where the previous call left off.

use std::sync::Arc;

use super::*;

/// Factory for symmetric cipher key sessions.
pub struct SymmetricKeyProvider {
    algorithm: SymmetricAlgorithm,
    provider: Arc<dyn CipherProvider>,
}

impl SymmetricKeyProvider {
    /// Opens a provider for `algorithm` backed by the software ciphers.
    pub fn open(algorithm: SymmetricAlgorithm) -> Self {
        Self::open_with(algorithm, Arc::new(SoftwareCipherProvider))
    }

    /// Opens a provider for `algorithm` backed by a specific cipher backend.
    pub fn open_with(algorithm: SymmetricAlgorithm, provider: Arc<dyn CipherProvider>) -> Self {
        Self {
            algorithm,
            provider,
        }
    }

    /// The algorithm this provider opens keys for.
    pub fn algorithm(&self) -> &SymmetricAlgorithm {
        &self.algorithm
    }

    /// The block size in bytes of the provider's algorithm.
    ///
    /// Stream ciphers report 1.
    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    /// Creates a key session from caller-supplied key material.
    ///
    /// The material length must be valid for the algorithm's family; see
    /// [`SymmetricAlgorithm::valid_key_size`].
    pub fn create_key(&self, material: &[u8]) -> Result<SymmetricCipherKey, CryptoError> {
        if material.is_empty() {
            return Err(CryptoError::CipherEmptyKeyMaterial);
        }
        if !self.algorithm.valid_key_size(material.len()) {
            return Err(CryptoError::CipherInvalidKeySize);
        }
        Ok(SymmetricCipherKey {
            algorithm: self.algorithm,
            material: SecretKeyMaterial::from_bytes(material)?,
            provider: Arc::clone(&self.provider),
            encryptor: None,
            decryptor: None,
        })
    }

    /// Generates a fresh random key of `size` bytes and opens a session on it.
    pub fn generate_key(&self, size: usize) -> Result<SymmetricCipherKey, CryptoError> {
        if !self.algorithm.valid_key_size(size) {
            return Err(CryptoError::CipherInvalidKeySize);
        }
        Ok(SymmetricCipherKey {
            algorithm: self.algorithm,
            material: SecretKeyMaterial::generate(size)?,
            provider: Arc::clone(&self.provider),
            encryptor: None,
            decryptor: None,
        })
    }
}

/// A symmetric cipher key session.
///
/// Holds the key material together with the per-direction transform state.
/// Obtained from [`SymmetricKeyProvider::create_key`] or
/// [`SymmetricKeyProvider::generate_key`].
pub struct SymmetricCipherKey {
    algorithm: SymmetricAlgorithm,
    material: SecretKeyMaterial,
    provider: Arc<dyn CipherProvider>,
    encryptor: Option<Box<dyn TransformOp>>,
    decryptor: Option<Box<dyn TransformOp>>,
}

impl SymmetricCipherKey {
    /// The algorithm this key operates under.
    pub fn algorithm(&self) -> &SymmetricAlgorithm {
        &self.algorithm
    }

    /// Encrypts `data` in one shot.
    ///
    /// For block ciphers the call is self-contained: the transform is built,
    /// run to completion including padding, and discarded. CBC mode requires
    /// an IV of exactly one block; passing `None` uses an all-zero IV. Modes
    /// without an IV reject `Some` with
    /// [`CryptoError::CipherIvNotSupported`].
    ///
    /// Stream ciphers ignore block semantics and advance the shared
    /// keystream, so consecutive calls behave like one continuous message.
    pub fn encrypt(&mut self, data: &[u8], iv: Option<&[u8]>) -> Result<Vec<u8>, CryptoError> {
        self.check_block_alignment(data)?;
        let block = self.algorithm.is_block_cipher();
        let transform = self.transform_mut(Direction::Encrypt, iv)?;
        if block {
            transform.finalize(data)
        } else {
            transform.update(data)
        }
    }

    /// Decrypts `data` in one shot. The IV rules match [`Self::encrypt`].
    pub fn decrypt(&mut self, data: &[u8], iv: Option<&[u8]>) -> Result<Vec<u8>, CryptoError> {
        self.check_block_alignment(data)?;
        let block = self.algorithm.is_block_cipher();
        let transform = self.transform_mut(Direction::Decrypt, iv)?;
        if block {
            transform.finalize(data)
        } else {
            transform.update(data)
        }
    }

    /// Starts an incremental encryption over this key.
    ///
    /// The returned cipher borrows the session; feeding it advances the
    /// session's encryptor state.
    pub fn create_encryptor(
        &mut self,
        iv: Option<&[u8]>,
    ) -> Result<IncrementalCipher<'_>, CryptoError> {
        let algorithm = self.algorithm;
        let transform = self.transform_slot(Direction::Encrypt, iv)?;
        Ok(IncrementalCipher::new(transform, algorithm))
    }

    /// Starts an incremental decryption over this key.
    pub fn create_decryptor(
        &mut self,
        iv: Option<&[u8]>,
    ) -> Result<IncrementalCipher<'_>, CryptoError> {
        let algorithm = self.algorithm;
        let transform = self.transform_slot(Direction::Decrypt, iv)?;
        Ok(IncrementalCipher::new(transform, algorithm))
    }

    /// Unpadded block modes require input to be a positive multiple of the
    /// block size; the check runs before any backend state is touched.
    fn check_block_alignment(&self, data: &[u8]) -> Result<(), CryptoError> {
        if self.algorithm.is_block_cipher() && self.algorithm.padding() == CipherPadding::None {
            let block_size = self.algorithm.block_size();
            if data.is_empty() || data.len() % block_size != 0 {
                return Err(CryptoError::CipherNotBlockAligned {
                    len: data.len(),
                    block_size,
                });
            }
        }
        Ok(())
    }

    /// Validates the IV against the algorithm, filling in an all-zero IV
    /// where one is required but absent.
    fn resolve_iv(&self, iv: Option<&[u8]>) -> Result<Option<Vec<u8>>, CryptoError> {
        if !self.algorithm.uses_iv() {
            return match iv {
                Some(_) => Err(CryptoError::CipherIvNotSupported),
                None => Ok(None),
            };
        }
        let block_size = self.algorithm.block_size();
        match iv {
            Some(iv) if iv.len() == block_size => Ok(Some(iv.to_vec())),
            Some(_) => Err(CryptoError::CipherInvalidIvSize),
            None => Ok(Some(vec![0u8; block_size])),
        }
    }

    fn transform_mut(
        &mut self,
        direction: Direction,
        iv: Option<&[u8]>,
    ) -> Result<&mut dyn TransformOp, CryptoError> {
        Ok(self.transform_slot(direction, iv)?.as_mut())
    }

    /// Returns the live transform for `direction`, creating one if the slot
    /// is empty or the algorithm resets per call.
    fn transform_slot(
        &mut self,
        direction: Direction,
        iv: Option<&[u8]>,
    ) -> Result<&mut Box<dyn TransformOp>, CryptoError> {
        let iv = self.resolve_iv(iv)?;
        let resets = self.algorithm.resets_per_call();
        let reusable = match direction {
            Direction::Encrypt => &mut self.encryptor,
            Direction::Decrypt => &mut self.decryptor,
        }
        .take()
        .filter(|_| !resets);
        let transform = match reusable {
            Some(transform) => transform,
            None => self.provider.create_transform(
                &self.algorithm,
                &self.material,
                direction,
                iv.as_deref(),
            )?,
        };
        let slot = match direction {
            Direction::Encrypt => &mut self.encryptor,
            Direction::Decrypt => &mut self.decryptor,
        };
        Ok(slot.insert(transform))
    }
}

impl Key for SymmetricCipherKey {
    fn size(&self) -> usize {
        self.material.size()
    }

    fn bits(&self) -> usize {
        self.material.bits()
    }
}

impl SymmetricKey for SymmetricCipherKey {}

impl ExportableKey for SymmetricCipherKey {
    /// Cipher sessions never release their key material.
    fn to_bytes(&self, _output: Option<&mut [u8]>) -> Result<usize, CryptoError> {
        Err(CryptoError::CipherKeyExportNotSupported)
    }
}
