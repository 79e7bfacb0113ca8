// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};

use crate::{
    error::{Error, Result},
    hash_algorithm::HashAlgorithm,
    keys::{PublicKey, KEY_SIZE},
    signature::{DerSignature, MAX_RECOVERY_ID},
};

pub(crate) fn sign_der(
    message: &[u8],
    private_key: &[u8; KEY_SIZE],
    algorithm: HashAlgorithm,
) -> Result<DerSignature> {
    let digest = algorithm.digest(message);
    let signature = super::sign_recoverable(&digest, private_key)?;
    Ok(DerSignature::from_native(&signature.to_standard()))
}

/// DER drops the recovery id, so every id is tried against the parsed
/// `(r, s)`. Returns the distinct candidates in recovery-id order; the
/// signer's key is always among them.
pub(crate) fn recover_der(
    message: &[u8],
    signature: &[u8],
    algorithm: HashAlgorithm,
) -> Result<Vec<PublicKey>> {
    let rs = DerSignature::from_slice(signature)?
        .to_native()?
        .serialize_compact();
    let digest = algorithm.digest(message);

    let mut candidates = Vec::with_capacity(2);
    for recid in 0..=i32::from(MAX_RECOVERY_ID) {
        let Ok(recid) = RecoveryId::from_i32(recid) else {
            continue;
        };
        let Ok(recoverable) = RecoverableSignature::from_compact(&rs, recid) else {
            continue;
        };
        if let Ok(public) = super::recover(&digest, &recoverable) {
            if !candidates.contains(&public) {
                candidates.push(public);
            }
        }
    }

    if candidates.is_empty() {
        tracing::debug!("no recovery id yields a curve point for DER signature");
        return Err(Error::InvalidSignature("recovery yields no curve point"));
    }
    Ok(candidates)
}

pub(crate) fn verify_der(
    message: &[u8],
    signature: &[u8],
    public_key: &[u8],
    algorithm: HashAlgorithm,
    strict_low_s: bool,
) -> Result<bool> {
    let public = super::public_key(public_key)?;
    let native = DerSignature::from_slice(signature)?.to_native()?;
    let digest = algorithm.digest(message);
    Ok(super::verify(&digest, &native, &public, strict_low_s))
}
