// Copyright (C) Microsoft Corporation. All rights reserved.

//! Software cipher provider.
//!
//! The bundled [`CipherProvider`] implementation, backed by the pure-Rust
//! RustCrypto cipher crates. It supports AES (128/192/256) and DES/3DES in
//! CBC and ECB modes with optional PKCS#7 padding, and the RC4 stream
//! cipher. Authenticated modes (CCM/GCM) and RC2 are not implemented by this
//! provider and fail with [`CryptoError::CipherAlgorithmNotSupported`].

use aes::{Aes128, Aes192, Aes256};
use cipher::consts::{U16, U24, U32, U5, U8};
use cipher::{BlockCipher, BlockDecrypt, BlockEncrypt, KeyInit, KeyIvInit, StreamCipher};
use des::{Des, TdesEde2, TdesEde3};
use rc4::Rc4;
use tracing::debug;

use super::transform::{BlockDecryptTransform, BlockEncryptTransform, StreamCipherTransform};
use super::*;

/// Cipher provider backed by software cipher implementations.
///
/// Stateless; a single instance can serve any number of keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftwareCipherProvider;

impl CipherProvider for SoftwareCipherProvider {
    fn create_transform(
        &self,
        algorithm: &SymmetricAlgorithm,
        key: &SecretKeyMaterial,
        direction: Direction,
        iv: Option<&[u8]>,
    ) -> Result<Box<dyn TransformOp>, CryptoError> {
        debug!(algorithm = %algorithm, ?direction, "initializing cipher transform");
        let key = key.as_bytes();
        let pad = algorithm.padding() == CipherPadding::Pkcs7;
        match (algorithm.family(), algorithm.mode()) {
            (CipherFamily::Aes, BlockMode::Cbc) => match key.len() {
                16 => cbc_transform::<Aes128>(key, iv, pad, direction),
                24 => cbc_transform::<Aes192>(key, iv, pad, direction),
                32 => cbc_transform::<Aes256>(key, iv, pad, direction),
                _ => Err(CryptoError::CipherInvalidKeySize),
            },
            (CipherFamily::Aes, BlockMode::Ecb) => match key.len() {
                16 => ecb_transform::<Aes128>(key, pad, direction),
                24 => ecb_transform::<Aes192>(key, pad, direction),
                32 => ecb_transform::<Aes256>(key, pad, direction),
                _ => Err(CryptoError::CipherInvalidKeySize),
            },
            (CipherFamily::Des, BlockMode::Cbc) => cbc_transform::<Des>(key, iv, pad, direction),
            (CipherFamily::Des, BlockMode::Ecb) => ecb_transform::<Des>(key, pad, direction),
            (CipherFamily::TripleDes, BlockMode::Cbc) => match key.len() {
                16 => cbc_transform::<TdesEde2>(key, iv, pad, direction),
                24 => cbc_transform::<TdesEde3>(key, iv, pad, direction),
                _ => Err(CryptoError::CipherInvalidKeySize),
            },
            (CipherFamily::TripleDes, BlockMode::Ecb) => match key.len() {
                16 => ecb_transform::<TdesEde2>(key, pad, direction),
                24 => ecb_transform::<TdesEde3>(key, pad, direction),
                _ => Err(CryptoError::CipherInvalidKeySize),
            },
            (CipherFamily::Rc4, BlockMode::Streaming) => rc4_transform(key),
            _ => Err(CryptoError::CipherAlgorithmNotSupported),
        }
    }
}

/// Builds a CBC transform for the given block cipher and direction.
fn cbc_transform<C>(
    key: &[u8],
    iv: Option<&[u8]>,
    pad: bool,
    direction: Direction,
) -> Result<Box<dyn TransformOp>, CryptoError>
where
    C: BlockCipher + BlockEncrypt + BlockDecrypt + KeyInit + 'static,
{
    let iv = iv.ok_or(CryptoError::CipherInvalidIvSize)?;
    match direction {
        Direction::Encrypt => {
            let mode = cbc::Encryptor::<C>::new_from_slices(key, iv)
                .map_err(|_| CryptoError::CipherInvalidKeySize)?;
            Ok(Box::new(BlockEncryptTransform::new(mode, pad)))
        }
        Direction::Decrypt => {
            let mode = cbc::Decryptor::<C>::new_from_slices(key, iv)
                .map_err(|_| CryptoError::CipherInvalidKeySize)?;
            Ok(Box::new(BlockDecryptTransform::new(mode, pad)))
        }
    }
}

/// Builds an ECB transform; the raw cipher is applied block by block.
fn ecb_transform<C>(
    key: &[u8],
    pad: bool,
    direction: Direction,
) -> Result<Box<dyn TransformOp>, CryptoError>
where
    C: BlockEncrypt + BlockDecrypt + KeyInit + 'static,
{
    let cipher = C::new_from_slice(key).map_err(|_| CryptoError::CipherInvalidKeySize)?;
    match direction {
        Direction::Encrypt => Ok(Box::new(BlockEncryptTransform::new(cipher, pad))),
        Direction::Decrypt => Ok(Box::new(BlockDecryptTransform::new(cipher, pad))),
    }
}

/// Builds an RC4 transform for the supported key lengths.
///
/// RC4 state depends on the exact key length, so each supported length maps
/// to its own cipher instantiation. Direction is irrelevant; the keystream
/// is symmetric.
fn rc4_transform(key: &[u8]) -> Result<Box<dyn TransformOp>, CryptoError> {
    fn build<C: StreamCipher + KeyInit + 'static>(
        key: &[u8],
    ) -> Result<Box<dyn TransformOp>, CryptoError> {
        let cipher = C::new_from_slice(key).map_err(|_| CryptoError::CipherInvalidKeySize)?;
        Ok(Box::new(StreamCipherTransform::new(cipher)))
    }
    match key.len() {
        5 => build::<Rc4<U5>>(key),
        8 => build::<Rc4<U8>>(key),
        16 => build::<Rc4<U16>>(key),
        24 => build::<Rc4<U24>>(key),
        32 => build::<Rc4<U32>>(key),
        _ => Err(CryptoError::CipherInvalidKeySize),
    }
}
