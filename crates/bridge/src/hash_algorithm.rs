// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sha3::Keccak256;

pub const DIGEST_SIZE: usize = 32;

/// Digest applied to arbitrary-length messages on the DER path.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    /// SHA-256 applied twice.
    Sha256d,
    Keccak256,
}

impl HashAlgorithm {
    /// Hash `message` according to the configured algorithm.
    #[inline]
    pub fn digest(self, message: &[u8]) -> [u8; DIGEST_SIZE] {
        match self {
            HashAlgorithm::Sha256 => sha256(message),
            HashAlgorithm::Sha256d => sha256(&sha256(message)),
            HashAlgorithm::Keccak256 => Keccak256::digest(message).into(),
        }
    }
}

#[inline]
pub(crate) fn sha256(message: &[u8]) -> [u8; DIGEST_SIZE] {
    Sha256::digest(message).into()
}
