// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use crate::{
    config::BridgeConfig,
    error::Result,
    hash_algorithm::DIGEST_SIZE,
    keys::{PublicKey, KEY_SIZE},
    message, ops,
    signature::{CompactSignature, DerSignature, RawSignature},
};

/// Entry point for the nine sign/recover/verify operations.
///
/// Holds nothing but an immutable [`BridgeConfig`]; the native context is
/// the library's read-only global, so one bridge may be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SignatureBridge {
    config: BridgeConfig,
}

impl SignatureBridge {
    pub const DEFAULT: Self = Self {
        config: BridgeConfig::DEFAULT,
    };

    #[inline]
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    #[inline]
    pub fn sign_raw(
        &self,
        digest: &[u8; DIGEST_SIZE],
        private_key: &[u8; KEY_SIZE],
    ) -> Result<RawSignature> {
        ops::sign_raw(digest, private_key)
    }

    #[inline]
    pub fn recover_raw(
        &self,
        digest: &[u8; DIGEST_SIZE],
        signature: &RawSignature,
    ) -> Result<PublicKey> {
        ops::recover_raw(digest, signature)
    }

    /// `Ok(false)` when the signature does not match; `Err` only when an
    /// input cannot be decoded.
    #[inline]
    pub fn verify_raw(
        &self,
        digest: &[u8; DIGEST_SIZE],
        signature: &RawSignature,
        public_key: &[u8],
    ) -> Result<bool> {
        ops::verify_raw(digest, signature, public_key, self.config.strict_low_s)
    }

    #[inline]
    pub fn sign_compact(
        &self,
        digest: &[u8; DIGEST_SIZE],
        private_key: &[u8; KEY_SIZE],
    ) -> Result<CompactSignature> {
        ops::sign_compact(digest, private_key)
    }

    #[inline]
    pub fn recover_compact(&self, digest: &[u8; DIGEST_SIZE], signature: &[u8]) -> Result<PublicKey> {
        ops::recover_compact(digest, signature)
    }

    #[inline]
    pub fn verify_compact(
        &self,
        digest: &[u8; DIGEST_SIZE],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<bool> {
        ops::verify_compact(digest, signature, public_key, self.config.strict_low_s)
    }

    /// Hashes `message` with the configured digest before signing.
    #[inline]
    pub fn sign_der(&self, message: &[u8], private_key: &[u8; KEY_SIZE]) -> Result<DerSignature> {
        ops::sign_der(message, private_key, self.config.der_digest)
    }

    /// Candidate public keys for a DER signature, see [`crate::recover_der`].
    #[inline]
    pub fn recover_der(&self, message: &[u8], signature: &[u8]) -> Result<Vec<PublicKey>> {
        ops::recover_der(message, signature, self.config.der_digest)
    }

    #[inline]
    pub fn verify_der(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        ops::verify_der(
            message,
            signature,
            public_key,
            self.config.der_digest,
            self.config.strict_low_s,
        )
    }

    /// Base64 "Bitcoin Signed Message" signature over `message`.
    #[inline]
    pub fn sign_message(&self, message: &[u8], private_key: &[u8; KEY_SIZE]) -> Result<String> {
        message::sign(message, private_key)
    }

    #[inline]
    pub fn recover_message(&self, message: &[u8], signature: &str) -> Result<PublicKey> {
        message::recover(message, signature)
    }

    #[inline]
    pub fn verify_message(
        &self,
        message: &[u8],
        signature: &str,
        public_key: &[u8],
    ) -> Result<bool> {
        message::verify(message, signature, public_key, self.config.strict_low_s)
    }
}

impl From<BridgeConfig> for SignatureBridge {
    #[inline]
    fn from(config: BridgeConfig) -> Self {
        Self::new(config)
    }
}
