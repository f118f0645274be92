// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

#[test]
fn aes128_cbc_pkcs7_known_answer() {
    let key = b64("T1kMUiju2rHiRyhJKfo/Jg==");
    let iv = b64("reCDYoG9G+4xr15Am15N+w==");
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_cbc_pkcs7());
    let mut key = provider.create_key(&key).unwrap();

    let ciphertext = key.encrypt(&[3, 5, 8], Some(&iv)).unwrap();
    assert_eq!(ciphertext, b64("3ChRgsiJ0mXxJIEQS5Z4NA=="));

    let plaintext = key.decrypt(&ciphertext, Some(&iv)).unwrap();
    assert_eq!(plaintext, vec![3, 5, 8]);
}

#[test]
fn aes128_cbc_missing_iv_defaults_to_zero() {
    let key_material = b64("T1kMUiju2rHiRyhJKfo/Jg==");
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_cbc_pkcs7());
    let mut key = provider.create_key(&key_material).unwrap();

    let implicit = key.encrypt(&[3, 5, 8], None).unwrap();
    assert_eq!(implicit, b64("oCSAA4sUCGa5ukwSJdeKWw=="));

    let explicit = key.encrypt(&[3, 5, 8], Some(&[0u8; 16])).unwrap();
    assert_eq!(implicit, explicit);
}

#[test]
fn aes128_cbc_repeated_one_shot_calls_are_independent() {
    let key_material = b64("T1kMUiju2rHiRyhJKfo/Jg==");
    let iv = b64("reCDYoG9G+4xr15Am15N+w==");
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_cbc_pkcs7());
    let mut key = provider.create_key(&key_material).unwrap();

    let first = key.encrypt(b"same message", Some(&iv)).unwrap();
    let second = key.encrypt(b"same message", Some(&iv)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn aes256_cbc_pkcs7_round_trip() {
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_cbc_pkcs7());
    let mut key = provider.generate_key(32).unwrap();
    let iv = [7u8; 16];

    let message = b"a message that spans more than one AES block";
    let ciphertext = key.encrypt(message, Some(&iv)).unwrap();
    assert_eq!(ciphertext.len() % 16, 0);
    assert_ne!(&ciphertext[..message.len().min(ciphertext.len())], &message[..]);

    let plaintext = key.decrypt(&ciphertext, Some(&iv)).unwrap();
    assert_eq!(plaintext, message);
}

#[test]
fn padded_encryption_accepts_empty_input() {
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_cbc_pkcs7());
    let mut key = provider.generate_key(16).unwrap();

    // Empty plaintext still gains a full padding block.
    let ciphertext = key.encrypt(&[], None).unwrap();
    assert_eq!(ciphertext.len(), 16);
    assert_eq!(key.decrypt(&ciphertext, None).unwrap(), Vec::<u8>::new());
}

#[test]
fn des_cbc_known_answer() {
    let key_material = unhex("0123456789abcdef");
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::des_cbc());
    let mut key = provider.create_key(&key_material).unwrap();

    let ciphertext = key.encrypt(&[0u8; 8], Some(&[0u8; 8])).unwrap();
    assert_eq!(ciphertext, unhex("d5d44ff720683d0d"));
}

#[test]
fn triple_des_cbc_pkcs7_known_answer() {
    let key_material = unhex("000102030405060708090a0b0c0d0e0f1011121314151617");
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::triple_des_cbc_pkcs7());
    let mut key = provider.create_key(&key_material).unwrap();

    let ciphertext = key.encrypt(b"attack at dawn", Some(&[0u8; 8])).unwrap();
    assert_eq!(ciphertext, unhex("31a39a71031db9e11815b27bc328a7bb"));

    let plaintext = key.decrypt(&ciphertext, Some(&[0u8; 8])).unwrap();
    assert_eq!(plaintext, b"attack at dawn");
}

#[test]
fn unpadded_cbc_rejects_misaligned_input() {
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::des_cbc());
    let mut key = provider.create_key(&unhex("0123456789abcdef")).unwrap();

    assert_eq!(
        key.encrypt(&[0u8; 7], Some(&[0u8; 8])),
        Err(CryptoError::CipherNotBlockAligned {
            len: 7,
            block_size: 8,
        })
    );
    assert_eq!(
        key.decrypt(&[], Some(&[0u8; 8])),
        Err(CryptoError::CipherNotBlockAligned {
            len: 0,
            block_size: 8,
        })
    );
}

#[test]
fn cbc_rejects_wrong_iv_length() {
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_cbc_pkcs7());
    let mut key = provider.generate_key(16).unwrap();

    assert_eq!(
        key.encrypt(&[1, 2, 3], Some(&[0u8; 8])),
        Err(CryptoError::CipherInvalidIvSize)
    );
}

#[test]
fn corrupted_padding_fails_decryption() {
    let key_material = b64("T1kMUiju2rHiRyhJKfo/Jg==");
    let iv = [0u8; 16];

    // Zero plaintext encrypted without padding decrypts to a zero pad byte,
    // which PKCS#7 removal must reject.
    let raw = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_cbc());
    let mut raw_key = raw.create_key(&key_material).unwrap();
    let bogus = raw_key.encrypt(&[0u8; 16], Some(&iv)).unwrap();

    let padded = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_cbc_pkcs7());
    let mut padded_key = padded.create_key(&key_material).unwrap();
    assert_eq!(
        padded_key.decrypt(&bogus, Some(&iv)),
        Err(CryptoError::CipherIllegalBlockSize)
    );
}

#[test]
fn padded_decrypt_rejects_empty_ciphertext() {
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_cbc_pkcs7());
    let mut key = provider.generate_key(16).unwrap();

    assert_eq!(
        key.decrypt(&[], Some(&[0u8; 16])),
        Err(CryptoError::CipherIllegalBlockSize)
    );
}
