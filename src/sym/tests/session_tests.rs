// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

#[test]
fn create_key_rejects_empty_material() {
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_cbc_pkcs7());
    assert_eq!(
        provider.create_key(&[]).err(),
        Some(CryptoError::CipherEmptyKeyMaterial)
    );
}

#[test]
fn create_key_rejects_invalid_length() {
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_cbc_pkcs7());
    assert_eq!(
        provider.create_key(&[0u8; 15]).err(),
        Some(CryptoError::CipherInvalidKeySize)
    );

    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::des_cbc());
    assert_eq!(
        provider.create_key(&[0u8; 16]).err(),
        Some(CryptoError::CipherInvalidKeySize)
    );
}

#[test]
fn generate_key_validates_size_and_produces_working_keys() {
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_cbc_pkcs7());
    assert_eq!(
        provider.generate_key(15).err(),
        Some(CryptoError::CipherInvalidKeySize)
    );

    let mut key = provider.generate_key(24).unwrap();
    assert_eq!(key.size(), 24);
    assert_eq!(key.bits(), 192);

    let ciphertext = key.encrypt(b"payload", None).unwrap();
    assert_eq!(key.decrypt(&ciphertext, None).unwrap(), b"payload");
}

#[test]
fn generated_keys_are_distinct() {
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_cbc_pkcs7());
    let mut first = provider.generate_key(32).unwrap();
    let mut second = provider.generate_key(32).unwrap();

    // Same plaintext and IV under independent random keys.
    let iv = [0u8; 16];
    assert_ne!(
        first.encrypt(b"payload", Some(&iv)).unwrap(),
        second.encrypt(b"payload", Some(&iv)).unwrap()
    );
}

#[test]
fn symmetric_key_export_is_unsupported() {
    let provider = SymmetricKeyProvider::open(SymmetricAlgorithm::aes_cbc_pkcs7());
    let key = provider.generate_key(16).unwrap();
    assert_eq!(
        key.to_bytes(None),
        Err(CryptoError::CipherKeyExportNotSupported)
    );
}

#[test]
fn authenticated_modes_are_rejected_by_software_provider() {
    for mode in [BlockMode::Gcm, BlockMode::Ccm] {
        let algorithm =
            SymmetricAlgorithm::new(CipherFamily::Aes, mode, CipherPadding::None).unwrap();
        // No block alignment requirement for counter-based modes: input of
        // any length must reach the provider and fail there.
        assert!(!algorithm.is_block_cipher());
        assert!(algorithm.uses_iv());

        let provider = SymmetricKeyProvider::open(algorithm);
        let mut key = provider.create_key(&[0u8; 16]).unwrap();
        assert_eq!(
            key.encrypt(b"payload", None),
            Err(CryptoError::CipherAlgorithmNotSupported)
        );
    }
}

#[test]
fn inconsistent_algorithm_combinations_are_rejected() {
    assert_eq!(
        SymmetricAlgorithm::new(CipherFamily::Rc4, BlockMode::Cbc, CipherPadding::None).err(),
        Some(CryptoError::CipherAlgorithmNotSupported)
    );
    assert_eq!(
        SymmetricAlgorithm::new(
            CipherFamily::Rc4,
            BlockMode::Streaming,
            CipherPadding::Pkcs7
        )
        .err(),
        Some(CryptoError::CipherAlgorithmNotSupported)
    );
    assert_eq!(
        SymmetricAlgorithm::new(CipherFamily::Des, BlockMode::Gcm, CipherPadding::None).err(),
        Some(CryptoError::CipherAlgorithmNotSupported)
    );
}

#[test]
fn rc2_is_rejected_by_software_provider() {
    let algorithm =
        SymmetricAlgorithm::new(CipherFamily::Rc2, BlockMode::Cbc, CipherPadding::Pkcs7).unwrap();
    let provider = SymmetricKeyProvider::open(algorithm);
    let mut key = provider.create_key(&[0u8; 16]).unwrap();
    assert_eq!(
        key.encrypt(b"payload", None),
        Err(CryptoError::CipherAlgorithmNotSupported)
    );
}

#[test]
fn algorithm_display_names() {
    assert_eq!(SymmetricAlgorithm::aes_cbc_pkcs7().to_string(), "AES_CBC_PKCS7");
    assert_eq!(SymmetricAlgorithm::des_cbc().to_string(), "DES_CBC");
    assert_eq!(SymmetricAlgorithm::rc4().to_string(), "RC4");
}
