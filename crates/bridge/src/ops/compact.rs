// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use crate::{
    error::Result,
    hash_algorithm::DIGEST_SIZE,
    keys::{PublicKey, KEY_SIZE},
    signature::CompactSignature,
};

pub(crate) fn sign_compact(
    digest: &[u8; DIGEST_SIZE],
    private_key: &[u8; KEY_SIZE],
) -> Result<CompactSignature> {
    let signature = super::sign_recoverable(digest, private_key)?;
    Ok(CompactSignature::from_native(&signature))
}

/// `signature` arrives untrusted; its length and header are checked before
/// the native parser sees it.
pub(crate) fn recover_compact(digest: &[u8; DIGEST_SIZE], signature: &[u8]) -> Result<PublicKey> {
    let native = CompactSignature::from_slice(signature)?.to_native()?;
    super::recover(digest, &native)
}

pub(crate) fn verify_compact(
    digest: &[u8; DIGEST_SIZE],
    signature: &[u8],
    public_key: &[u8],
    strict_low_s: bool,
) -> Result<bool> {
    let public = super::public_key(public_key)?;
    let native = CompactSignature::from_slice(signature)?
        .to_native()?
        .to_standard();
    Ok(super::verify(digest, &native, &public, strict_low_s))
}
