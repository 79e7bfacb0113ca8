// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

mod compact;
mod der;
mod raw;
#[cfg(test)]
mod tests;

pub(crate) use compact::{recover_compact, sign_compact, verify_compact};
pub(crate) use der::{recover_der, sign_der, verify_der};
pub(crate) use raw::{recover_raw, sign_raw, verify_raw};

use secp256k1::{
    ecdsa::{RecoverableSignature, Signature},
    Message, SECP256K1,
};

use crate::{
    error::{Error, ErrorKind, Result},
    hash_algorithm::DIGEST_SIZE,
    keys::{self, PrivateKey, PublicKey, KEY_SIZE},
};

#[inline]
fn message(digest: &[u8; DIGEST_SIZE]) -> Message {
    Message::from_digest(*digest)
}

pub(crate) fn sign_recoverable(
    digest: &[u8; DIGEST_SIZE],
    private_key: &[u8; KEY_SIZE],
) -> Result<RecoverableSignature> {
    let secret = PrivateKey::new(*private_key).to_native()?;
    Ok(SECP256K1.sign_ecdsa_recoverable(&message(digest), &secret))
}

pub(crate) fn recover(digest: &[u8; DIGEST_SIZE], signature: &RecoverableSignature) -> Result<PublicKey> {
    let public = SECP256K1
        .recover_ecdsa(&message(digest), signature)
        .map_err(|err| {
            Error::native(err, ErrorKind::InvalidSignature, "recovery yields no curve point")
        })?;
    let recovered = PublicKey::from_native(&public);
    tracing::trace!(pubkey = ?recovered, "recovered public key");
    Ok(recovered)
}

/// Callers decode the public key before the signature, so a malformed key
/// is reported as such even when the signature is bad too.
#[inline]
pub(crate) fn public_key(bytes: &[u8]) -> Result<secp256k1::PublicKey> {
    keys::parse_native(bytes)
}

/// libsecp256k1 only accepts low-S signatures; unless `strict_low_s` is
/// set, a high-S signature gets a second attempt with `s` normalized.
pub(crate) fn verify(
    digest: &[u8; DIGEST_SIZE],
    signature: &Signature,
    public: &secp256k1::PublicKey,
    strict_low_s: bool,
) -> bool {
    let msg = message(digest);
    if SECP256K1.verify_ecdsa(&msg, signature, public).is_ok() {
        return true;
    }
    if strict_low_s {
        return false;
    }

    let mut normalized = *signature;
    normalized.normalize_s();
    if normalized == *signature {
        return false;
    }
    tracing::trace!("retrying verification with normalized s");
    SECP256K1.verify_ecdsa(&msg, &normalized, public).is_ok()
}
