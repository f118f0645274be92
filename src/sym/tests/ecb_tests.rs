// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

#[test]
fn aes128_ecb_pkcs7_known_answer() {
    let key_material = unhex("000102030405060708090a0b0c0d0e0f");
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_ecb_pkcs7());
    let mut key = provider.create_key(&key_material).unwrap();

    let ciphertext = key.encrypt(b"hello", None).unwrap();
    assert_eq!(ciphertext, unhex("5d8749e2af7531b2bf6661e9e5daf012"));

    let plaintext = key.decrypt(&ciphertext, None).unwrap();
    assert_eq!(plaintext, b"hello");
}

#[test]
fn ecb_identical_blocks_encrypt_identically() {
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_ecb());
    let mut key = provider.generate_key(16).unwrap();

    let ciphertext = key.encrypt(&[0xabu8; 32], None).unwrap();
    assert_eq!(ciphertext[..16], ciphertext[16..]);
}

#[test]
fn aes256_ecb_pkcs7_round_trip() {
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_ecb_pkcs7());
    let mut key = provider.generate_key(32).unwrap();

    let message = b"an exact multiple of sixteen bs!";
    assert_eq!(message.len(), 32);
    let ciphertext = key.encrypt(message, None).unwrap();
    // Aligned input still gains a full padding block.
    assert_eq!(ciphertext.len(), 48);

    let plaintext = key.decrypt(&ciphertext, None).unwrap();
    assert_eq!(plaintext, message);
}

#[test]
fn ecb_rejects_supplied_iv() {
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_ecb_pkcs7());
    let mut key = provider.generate_key(16).unwrap();

    assert_eq!(
        key.encrypt(&[1, 2, 3], Some(&[0u8; 16])),
        Err(CryptoError::CipherIvNotSupported)
    );
}

#[test]
fn unpadded_ecb_rejects_misaligned_input() {
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_ecb());
    let mut key = provider.generate_key(16).unwrap();

    assert_eq!(
        key.encrypt(&[0u8; 15], None),
        Err(CryptoError::CipherNotBlockAligned {
            len: 15,
            block_size: 16,
        })
    );
}
