// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use crate::{
    error::Result,
    hash_algorithm::DIGEST_SIZE,
    keys::{PublicKey, KEY_SIZE},
    signature::RawSignature,
};

pub(crate) fn sign_raw(
    digest: &[u8; DIGEST_SIZE],
    private_key: &[u8; KEY_SIZE],
) -> Result<RawSignature> {
    let signature = super::sign_recoverable(digest, private_key)?;
    Ok(RawSignature::from_native(&signature))
}

pub(crate) fn recover_raw(digest: &[u8; DIGEST_SIZE], signature: &RawSignature) -> Result<PublicKey> {
    let native = signature.to_native()?;
    super::recover(digest, &native)
}

pub(crate) fn verify_raw(
    digest: &[u8; DIGEST_SIZE],
    signature: &RawSignature,
    public_key: &[u8],
    strict_low_s: bool,
) -> Result<bool> {
    let public = super::public_key(public_key)?;
    let native = signature.to_native()?.to_standard();
    Ok(super::verify(digest, &native, &public, strict_low_s))
}
