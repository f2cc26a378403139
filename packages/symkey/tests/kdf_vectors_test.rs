//! Known-answer vectors for the derivation paths
//!
//! PBKDF2-HMAC-SHA1 from RFC 6070, PBKDF2-HMAC-SHA256 from the widely
//! published "password"/"salt" set, scrypt from RFC 7914 section 12.

use hex_literal::hex;
use symkey::prelude::*;

#[test]
fn test_pbkdf2_sha1_rfc6070() {
    let cases: [(u32, [u8; 20]); 3] = [
        (1, hex!("0c60c80f961f0e71f3a9b524af6012062fe037a6")),
        (2, hex!("ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957")),
        (4096, hex!("4b007901b765489abead49d926f721d065a429c1")),
    ];

    for (iterations, expected) in cases {
        let key = KeyMaterial::derive_pbkdf2_sha1(
            SymmetricAlgorithm::HmacSha1,
            b"password",
            b"salt",
            iterations,
            160u32.bits(),
        )
        .expect("RFC 6070 parameters should derive");
        assert_eq!(key.bytes(), &expected, "iterations = {iterations}");
    }
}

#[test]
fn test_pbkdf2_sha256_vectors() {
    let cases: [(u32, [u8; 32]); 2] = [
        (
            1,
            hex!("120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"),
        ),
        (
            4096,
            hex!("c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a"),
        ),
    ];

    for (iterations, expected) in cases {
        let key = KeyMaterial::derive_pbkdf2_sha256(
            SymmetricAlgorithm::Aes,
            b"password",
            b"salt",
            iterations,
            256u32.bits(),
        )
        .expect("AES-256 PBKDF2-SHA256 derivation should succeed");
        assert_eq!(key.bytes(), &expected, "iterations = {iterations}");
    }
}

#[test]
fn test_pbkdf2_sha256_truncated_to_aes_128() {
    let key = KeyMaterial::derive_pbkdf2_sha256(
        SymmetricAlgorithm::Aes,
        b"password",
        b"salt",
        1,
        128u32.bits(),
    )
    .expect("AES-128 PBKDF2-SHA256 derivation should succeed");
    assert_eq!(key.bytes(), &hex!("120fb6cffcf8b32c43e7225256c4f837"));
}

#[test]
fn test_scrypt_rfc7914_empty_password() {
    let params = ScryptParams {
        cost: 16,
        block_size: 1,
        parallelization: 1,
        max_memory_bytes: 0,
    };
    let key = KeyMaterial::derive_scrypt(
        SymmetricAlgorithm::HmacSha1,
        b"",
        b"",
        &params,
        512u32.bits(),
    )
    .expect("RFC 7914 vector 1 should derive");
    assert_eq!(
        key.bytes(),
        &hex!(
            "77d6576238657b203b19ca42c18a0497f16b4844e3074ae8dfdffa3fede21442"
            "fcd0069ded0948f8326a753a0fc81f17e8d3e0fb2e0d3628cf35e20c38d18906"
        )
    );
}

#[test]
fn test_scrypt_rfc7914_nacl() {
    let params = ScryptParams {
        cost: 1024,
        block_size: 8,
        parallelization: 16,
        max_memory_bytes: 0,
    };
    let key = KeyMaterial::derive_scrypt(
        SymmetricAlgorithm::HmacSha1,
        b"password",
        b"NaCl",
        &params,
        512u32.bits(),
    )
    .expect("RFC 7914 vector 2 fits the default memory ceiling");
    assert_eq!(
        key.bytes(),
        &hex!(
            "fdbabe1c9d3472007856e7190d01e9fe7c6ad7cbc8237830e77376634b373162"
            "2eaf30d92e22a3886ff109279d9830dac727afb94a83ee6d8360cbdfa2cc0640"
        )
    );
}

#[test]
fn test_derive_dispatch_uses_selected_kdf() {
    let key = KeyMaterial::derive(
        SymmetricAlgorithm::HmacSha1,
        b"password",
        b"salt",
        &KdfParams::Pbkdf2Sha1(Pbkdf2Params { iterations: 2 }),
        160u32.bits(),
    )
    .expect("dispatching to PBKDF2-SHA1 should succeed");
    assert_eq!(
        key.bytes(),
        &hex!("ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957")
    );
}
