// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! secp256k1 ECDSA signing, public-key recovery and verification over
//! libsecp256k1.
//!
//! All curve arithmetic is delegated to the native library linked through
//! the [`secp256k1`] crate. This crate decodes and length-checks caller
//! buffers before they reach the native boundary, converts between the
//! three signature encodings and maps native status codes onto
//! [`ErrorKind`].
//!
//! | encoding | sign | recover | verify |
//! |---|---|---|---|
//! | raw `(v, r, s)` | [`sign_raw`] | [`recover_raw`] | [`verify_raw`] |
//! | 65-byte compact | [`sign_compact`] | [`recover_compact`] | [`verify_compact`] |
//! | DER | [`sign_der`] | [`recover_der`] | [`verify_der`] |
//!
//! Raw and compact operations take a 32-byte digest; the DER path hashes an
//! arbitrary message first. The free functions use
//! [`BridgeConfig::DEFAULT`]; build a [`SignatureBridge`] to change the DER
//! digest or the high-S policy.

pub mod bridge;
pub mod config;
pub mod error;
pub mod hash_algorithm;
pub mod keys;
pub mod message;
mod ops;
pub mod signature;

pub use bridge::SignatureBridge;
pub use config::{BridgeConfig, ConfigError};
pub use error::{Error, ErrorKind, Result};
pub use hash_algorithm::{HashAlgorithm, DIGEST_SIZE};
pub use keys::{derive_public_key, PrivateKey, PublicKey, KEY_SIZE};
pub use message::{recover_message, sign_message, verify_message};
pub use signature::{CompactSignature, DerSignature, RawSignature, COMPACT_SIZE};

/// Signs a 32-byte digest, returning `(v, r, s)` with `v = 27 + recid`.
#[inline]
pub fn sign_raw(digest: &[u8; DIGEST_SIZE], private_key: &[u8; KEY_SIZE]) -> Result<RawSignature> {
    SignatureBridge::DEFAULT.sign_raw(digest, private_key)
}

#[inline]
pub fn recover_raw(digest: &[u8; DIGEST_SIZE], signature: &RawSignature) -> Result<PublicKey> {
    SignatureBridge::DEFAULT.recover_raw(digest, signature)
}

#[inline]
pub fn verify_raw(
    digest: &[u8; DIGEST_SIZE],
    signature: &RawSignature,
    public_key: &[u8],
) -> Result<bool> {
    SignatureBridge::DEFAULT.verify_raw(digest, signature, public_key)
}

#[inline]
pub fn sign_compact(
    digest: &[u8; DIGEST_SIZE],
    private_key: &[u8; KEY_SIZE],
) -> Result<CompactSignature> {
    SignatureBridge::DEFAULT.sign_compact(digest, private_key)
}

/// Fails with [`Error::InvalidSignature`] for any buffer that is not a
/// well-formed 65-byte compact signature.
#[inline]
pub fn recover_compact(digest: &[u8; DIGEST_SIZE], signature: &[u8]) -> Result<PublicKey> {
    SignatureBridge::DEFAULT.recover_compact(digest, signature)
}

#[inline]
pub fn verify_compact(
    digest: &[u8; DIGEST_SIZE],
    signature: &[u8],
    public_key: &[u8],
) -> Result<bool> {
    SignatureBridge::DEFAULT.verify_compact(digest, signature, public_key)
}

/// Signs SHA-256(`message`) and DER-encodes the result.
#[inline]
pub fn sign_der(message: &[u8], private_key: &[u8; KEY_SIZE]) -> Result<DerSignature> {
    SignatureBridge::DEFAULT.sign_der(message, private_key)
}

/// DER carries no recovery id, so this returns every distinct key the
/// signature recovers to, in recovery-id order. The signer's key is always
/// one of them; pick it with [`verify_der`] or out-of-band knowledge.
#[inline]
pub fn recover_der(message: &[u8], signature: &[u8]) -> Result<Vec<PublicKey>> {
    SignatureBridge::DEFAULT.recover_der(message, signature)
}

#[inline]
pub fn verify_der(message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
    SignatureBridge::DEFAULT.verify_der(message, signature, public_key)
}
