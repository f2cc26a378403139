//! KDF parameter sets loaded from JSON configuration

use symkey::prelude::*;
use symkey::DEFAULT_SCRYPT_MAX_MEMORY;

#[test]
fn test_parse_pbkdf2_config() {
    let params: KdfParams = serde_json::from_str(r#"{"kdf": "pbkdf2-sha256", "iterations": 1000}"#)
        .expect("PBKDF2 config should parse");
    assert_eq!(params, KdfParams::Pbkdf2Sha256(Pbkdf2Params { iterations: 1000 }));
    assert_eq!(params.name(), "pbkdf2-sha256");

    let params: KdfParams = serde_json::from_str(r#"{"kdf": "pbkdf2-sha1", "iterations": 2}"#)
        .expect("PBKDF2-SHA1 config should parse");
    assert_eq!(params, KdfParams::Pbkdf2Sha1(Pbkdf2Params { iterations: 2 }));
}

#[test]
fn test_parse_scrypt_config_defaults_ceiling() {
    let params: KdfParams = serde_json::from_str(
        r#"{"kdf": "scrypt", "cost": 16384, "block_size": 8, "parallelization": 1}"#,
    )
    .expect("scrypt config should parse");

    let KdfParams::Scrypt(scrypt) = params else {
        panic!("expected scrypt parameters, got {params:?}");
    };
    assert_eq!(scrypt.max_memory_bytes, 0);
    assert_eq!(scrypt.memory_limit(), DEFAULT_SCRYPT_MAX_MEMORY);
    assert!(params.validate().is_ok());
}

#[test]
fn test_unknown_kdf_rejected() {
    let result: std::result::Result<KdfParams, _> =
        serde_json::from_str(r#"{"kdf": "argon2id", "iterations": 3}"#);
    assert!(result.is_err());
}

#[test]
fn test_config_round_trip_through_derive() {
    let json = serde_json::to_string(&KdfParams::Pbkdf2Sha256(Pbkdf2Params::fast()))
        .expect("KDF params should serialize");
    let params: KdfParams = serde_json::from_str(&json).expect("KDF params should parse back");

    let from_config = KeyMaterial::derive(
        SymmetricAlgorithm::Aes,
        b"pw",
        b"salt",
        &params,
        128u32.bits(),
    )
    .expect("derivation from parsed config should succeed");
    let direct = KeyMaterial::derive_pbkdf2_sha256(
        SymmetricAlgorithm::Aes,
        b"pw",
        b"salt",
        1_000,
        128u32.bits(),
    )
    .expect("direct derivation should succeed");
    assert_eq!(from_config, direct);
}

#[test]
fn test_algorithm_names_in_config() {
    let algorithm: SymmetricAlgorithm =
        serde_json::from_str(r#""HMAC-SHA1""#).expect("algorithm name should parse");
    assert_eq!(algorithm, SymmetricAlgorithm::HmacSha1);
    assert_eq!(
        serde_json::to_string(&SymmetricAlgorithm::Aes).expect("algorithm should serialize"),
        r#""AES""#
    );
}
