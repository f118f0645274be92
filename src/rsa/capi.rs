// Copyright (C) Microsoft Corporation. All rights reserved.

//! Legacy CAPI RSA key blob codec.
//!
//! Reproduces the CryptoAPI `PUBLICKEYBLOB`/`PRIVATEKEYBLOB` layout byte for
//! byte:
//!
//! ```text
//! BLOBHEADER { bType: u8, bVersion: u8, reserved: u16, aiKeyAlg: u32 }
//! RSAPUBKEY  { magic: u32 ("RSA1" public / "RSA2" private),
//!              bitlen: u32, pubexp: u32 }
//! modulus        bitlen/8 bytes
//! -- private blobs only --
//! p, q, dp, dq, inverse_q    each ceil(bitlen/16) bytes
//! d                          bitlen/8 bytes
//! ```
//!
//! All header integers and all key components are little-endian; the
//! big-endian parameter components are byte-reversed on the way in and out.
//! The layout carries no per-component lengths, so [`verify_compatible`]
//! gates every write.

use tracing::trace;

use super::*;

pub(crate) const HEADER_LEN: usize = 20;

const BLOB_VERSION: u8 = 0x02;
const PUBLIC_BLOB_TYPE: u8 = 0x06;
const PRIVATE_BLOB_TYPE: u8 = 0x07;

const CALG_RSA_KEYX: u32 = 0x0000a400;
const CALG_RSA_SIGN: u32 = 0x00002400;

const MAGIC_RSA1: u32 = u32::from_le_bytes(*b"RSA1");
const MAGIC_RSA2: u32 = u32::from_le_bytes(*b"RSA2");

/// Fails with [`CryptoError::BlobFormatRejected`] when the parameters do not
/// fit the blob's inferred component lengths.
pub fn verify_compatible(params: &RsaKeyParameters) -> Result<(), CryptoError> {
    if params.is_compatible() {
        Ok(())
    } else {
        Err(CryptoError::BlobFormatRejected)
    }
}

/// Encodes `params` as a legacy blob, private when the private components are
/// present.
pub fn write(params: &RsaKeyParameters) -> Result<Vec<u8>, CryptoError> {
    verify_compatible(params)?;
    if params.modulus.is_empty() {
        return Err(CryptoError::BlobFormatRejected);
    }
    let pubexp = exponent_to_u32(&params.exponent)?;
    let bitlen = (params.modulus.len() * 8) as u32;
    let (blob_type, magic) = match params.private {
        Some(_) => (PRIVATE_BLOB_TYPE, MAGIC_RSA2),
        None => (PUBLIC_BLOB_TYPE, MAGIC_RSA1),
    };
    trace!(bitlen, private = params.private.is_some(), "encoding legacy RSA blob");

    let mut blob = Vec::with_capacity(blob_len(params.modulus.len(), params.private.is_some()));
    blob.push(blob_type);
    blob.push(BLOB_VERSION);
    blob.extend_from_slice(&0u16.to_le_bytes());
    blob.extend_from_slice(&CALG_RSA_KEYX.to_le_bytes());
    blob.extend_from_slice(&magic.to_le_bytes());
    blob.extend_from_slice(&bitlen.to_le_bytes());
    blob.extend_from_slice(&pubexp.to_le_bytes());
    blob.extend(params.modulus.iter().rev());
    if let Some(private) = &params.private {
        blob.extend(private.p.iter().rev());
        blob.extend(private.q.iter().rev());
        blob.extend(private.dp.iter().rev());
        blob.extend(private.dq.iter().rev());
        blob.extend(private.inverse_q.iter().rev());
        blob.extend(private.d.iter().rev());
    }
    Ok(blob)
}

/// Parses a legacy blob into big-endian parameters.
///
/// Private blobs yield full parameters, public blobs a public-only set.
/// Anything that deviates from the fixed layout fails with
/// [`CryptoError::BlobMalformed`].
pub fn read(blob: &[u8]) -> Result<RsaKeyParameters, CryptoError> {
    if blob.len() < HEADER_LEN {
        return Err(CryptoError::BlobMalformed);
    }
    let blob_type = blob[0];
    let version = blob[1];
    let alg = le_u32(&blob[4..8]);
    let magic = le_u32(&blob[8..12]);
    let bitlen = le_u32(&blob[12..16]);
    let pubexp = le_u32(&blob[16..20]);

    if version != BLOB_VERSION || (alg != CALG_RSA_KEYX && alg != CALG_RSA_SIGN) {
        return Err(CryptoError::BlobMalformed);
    }
    let private = match (blob_type, magic) {
        (PUBLIC_BLOB_TYPE, MAGIC_RSA1) => false,
        (PRIVATE_BLOB_TYPE, MAGIC_RSA2) => true,
        _ => return Err(CryptoError::BlobMalformed),
    };
    if bitlen == 0 || bitlen % 8 != 0 || pubexp == 0 {
        return Err(CryptoError::BlobMalformed);
    }
    let modulus_len = (bitlen / 8) as usize;
    if blob.len() != blob_len(modulus_len, private) {
        return Err(CryptoError::BlobMalformed);
    }
    trace!(bitlen, private, "decoding legacy RSA blob");

    let half = (modulus_len + 1) / 2;
    let mut offset = HEADER_LEN;
    let mut component = |len: usize| {
        let bytes = reversed(&blob[offset..offset + len]);
        offset += len;
        bytes
    };
    let modulus = component(modulus_len);
    let private = if private {
        Some(RsaPrivateParameters {
            p: component(half),
            q: component(half),
            dp: component(half),
            dq: component(half),
            inverse_q: component(half),
            d: component(modulus_len),
        })
    } else {
        None
    };
    Ok(RsaKeyParameters {
        modulus,
        exponent: trimmed_be(pubexp),
        private,
    })
}

/// Total blob size for a modulus of `modulus_len` bytes.
fn blob_len(modulus_len: usize, private: bool) -> usize {
    let half = (modulus_len + 1) / 2;
    if private {
        HEADER_LEN + 2 * modulus_len + 5 * half
    } else {
        HEADER_LEN + modulus_len
    }
}

/// Packs a big-endian exponent into the header's u32 field.
///
/// The format has exactly four bytes for the exponent; anything wider fails
/// with [`CryptoError::BlobFormatRejected`].
fn exponent_to_u32(exponent: &[u8]) -> Result<u32, CryptoError> {
    let significant: Vec<u8> = exponent
        .iter()
        .copied()
        .skip_while(|&byte| byte == 0)
        .collect();
    if significant.is_empty() || significant.len() > 4 {
        return Err(CryptoError::BlobFormatRejected);
    }
    let mut bytes = [0u8; 4];
    bytes[4 - significant.len()..].copy_from_slice(&significant);
    Ok(u32::from_be_bytes(bytes))
}

/// Big-endian bytes of `value` with leading zeros stripped.
fn trimmed_be(value: u32) -> Vec<u8> {
    value
        .to_be_bytes()
        .iter()
        .copied()
        .skip_while(|&byte| byte == 0)
        .collect()
}

fn reversed(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

fn le_u32(bytes: &[u8]) -> u32 {
    let mut array = [0u8; 4];
    array.copy_from_slice(bytes);
    u32::from_le_bytes(array)
}

impl EncodeOp for RsaKeyParameters {
    /// Encodes these parameters in the legacy blob layout.
    fn to_bytes(&mut self, output: Option<&mut [u8]>) -> Result<usize, CryptoError> {
        let blob = write(self)?;
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

impl DecodeOp for RsaKeyParameters {
    type T = RsaKeyParameters;
    type P = ();

    /// Decodes parameters from the legacy blob layout.
    fn from_bytes(input: &[u8], _params: ()) -> Result<Self::T, CryptoError> {
        read(input)
    }
}
