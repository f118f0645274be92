// Copyright (C) Microsoft Corporation. All rights reserved.

//! RSA key parameters and key object.
//!
//! Parameters use the standard CRT representation with all integer components
//! stored big-endian. A key is public-only when the private half is absent.

use super::*;

/// Private half of an RSA key in CRT form. All components are big-endian.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaPrivateParameters {
    /// First prime factor.
    pub p: Vec<u8>,
    /// Second prime factor.
    pub q: Vec<u8>,
    /// `d mod (p - 1)`.
    pub dp: Vec<u8>,
    /// `d mod (q - 1)`.
    pub dq: Vec<u8>,
    /// `q^-1 mod p`.
    pub inverse_q: Vec<u8>,
    /// Private exponent.
    pub d: Vec<u8>,
}

/// Full RSA key parameter set, public-only or private.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaKeyParameters {
    /// Modulus, big-endian.
    pub modulus: Vec<u8>,
    /// Public exponent, big-endian.
    pub exponent: Vec<u8>,
    /// Private components, absent for public-only keys.
    pub private: Option<RsaPrivateParameters>,
}

impl RsaKeyParameters {
    /// Whether the private components are absent.
    pub fn public_only(&self) -> bool {
        self.private.is_none()
    }

    /// Returns a copy with the private components stripped.
    pub fn to_public(&self) -> Self {
        Self {
            modulus: self.modulus.clone(),
            exponent: self.exponent.clone(),
            private: None,
        }
    }

    /// Checks whether these parameters fit the legacy CAPI blob layout.
    ///
    /// The blob format carries no per-component lengths; it derives them all
    /// from the modulus length. Public-only parameters always fit. Private
    /// parameters fit only when each CRT component is exactly half the
    /// modulus length (rounded up) and `d` matches the modulus length. Keys
    /// violating this would encode to a blob that decodes to different
    /// numbers, so they must be rejected up front.
    pub fn is_compatible(&self) -> bool {
        let private = match &self.private {
            Some(private) => private,
            None => return true,
        };
        let half = (self.modulus.len() + 1) / 2;
        private.p.len() == half
            && private.q.len() == half
            && private.dp.len() == half
            && private.dq.len() == half
            && private.inverse_q.len() == half
            && private.d.len() == self.modulus.len()
    }
}

/// Private key blob serialization formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrivateKeyBlobKind {
    /// Legacy CAPI `PRIVATEKEYBLOB`.
    Capi1PrivateKey,
    /// PKCS#1 `RSAPrivateKey` DER.
    Pkcs1RsaPrivateKey,
    /// PKCS#8 `PrivateKeyInfo` DER.
    Pkcs8RawPrivateKeyInfo,
    /// CNG `BCRYPT_RSAFULLPRIVATE_BLOB`.
    BCryptPrivateKey,
}

/// Public key blob serialization formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublicKeyBlobKind {
    /// Legacy CAPI `PUBLICKEYBLOB`.
    Capi1PublicKey,
    /// PKCS#1 `RSAPublicKey` DER.
    Pkcs1RsaPublicKey,
    /// X.509 `SubjectPublicKeyInfo` DER.
    X509SubjectPublicKeyInfo,
    /// CNG `BCRYPT_RSAPUBLIC_BLOB`.
    BCryptPublicKey,
}

/// An RSA key backed by its parameter set.
///
/// Supports import from and export to the legacy CAPI blob format; other
/// blob kinds fail with [`CryptoError::BlobKindNotSupported`].
#[derive(Clone, Debug)]
pub struct RsaKey {
    params: RsaKeyParameters,
}

impl RsaKey {
    /// Wraps an existing parameter set.
    pub fn new(params: RsaKeyParameters) -> Self {
        Self { params }
    }

    /// Imports a private key from a serialized blob.
    pub fn import(kind: PrivateKeyBlobKind, blob: &[u8]) -> Result<Self, CryptoError> {
        match kind {
            PrivateKeyBlobKind::Capi1PrivateKey => {
                let params = capi::read(blob)?;
                Ok(Self { params })
            }
            _ => Err(CryptoError::BlobKindNotSupported),
        }
    }

    /// Imports a public key from a serialized blob.
    pub fn import_public(kind: PublicKeyBlobKind, blob: &[u8]) -> Result<Self, CryptoError> {
        match kind {
            PublicKeyBlobKind::Capi1PublicKey => {
                let params = capi::read(blob)?;
                Ok(Self {
                    params: params.to_public(),
                })
            }
            _ => Err(CryptoError::BlobKindNotSupported),
        }
    }

    /// Exports the private key as a blob of the requested kind.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::KeyFormatNotSupported`] for a public-only key
    /// or for parameters the legacy layout cannot carry, and
    /// [`CryptoError::BlobKindNotSupported`] for unimplemented kinds.
    pub fn export(&self, kind: PrivateKeyBlobKind) -> Result<Vec<u8>, CryptoError> {
        match kind {
            PrivateKeyBlobKind::Capi1PrivateKey => {
                if self.params.public_only() {
                    return Err(CryptoError::KeyFormatNotSupported);
                }
                match capi::write(&self.params) {
                    Ok(blob) => Ok(blob),
                    // Structural limitation of the format, not a caller bug.
                    Err(CryptoError::BlobFormatRejected) => {
                        Err(CryptoError::KeyFormatNotSupported)
                    }
                    Err(err) => Err(err),
                }
            }
            _ => Err(CryptoError::BlobKindNotSupported),
        }
    }

    /// Exports the public half as a blob of the requested kind.
    pub fn export_public(&self, kind: PublicKeyBlobKind) -> Result<Vec<u8>, CryptoError> {
        match kind {
            PublicKeyBlobKind::Capi1PublicKey => match capi::write(&self.params.to_public()) {
                Ok(blob) => Ok(blob),
                Err(CryptoError::BlobFormatRejected) => Err(CryptoError::KeyFormatNotSupported),
                Err(err) => Err(err),
            },
            _ => Err(CryptoError::BlobKindNotSupported),
        }
    }

    /// Returns a public-only copy of this key.
    pub fn public_key(&self) -> Self {
        Self {
            params: self.params.to_public(),
        }
    }

    /// The underlying parameter set.
    pub fn parameters(&self) -> &RsaKeyParameters {
        &self.params
    }
}

impl Key for RsaKey {
    /// Modulus length in bytes.
    fn size(&self) -> usize {
        self.params.modulus.len()
    }

    fn bits(&self) -> usize {
        self.params.modulus.len() * 8
    }
}

impl ExportableKey for RsaKey {
    /// Exports the key in its legacy CAPI blob form, private when the
    /// private components are present.
    fn to_bytes(&self, output: Option<&mut [u8]>) -> Result<usize, CryptoError> {
        let blob = capi::write(&self.params)?;
        match output {
            None => Ok(blob.len()),
            Some(buffer) => {
                if buffer.len() < blob.len() {
                    return Err(CryptoError::KeyBufferTooSmall);
                }
                buffer[..blob.len()].copy_from_slice(&blob);
                Ok(blob.len())
            }
        }
    }
}
