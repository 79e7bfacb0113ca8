// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! "Bitcoin Signed Message" signatures: a recoverable signature over
//! `SHA256d(magic || varint(len) || message)`, shipped as base64 of the
//! 65-byte compact encoding.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{
    bridge::SignatureBridge,
    error::{Error, Result},
    hash_algorithm::{HashAlgorithm, DIGEST_SIZE},
    keys::{PublicKey, KEY_SIZE},
    ops,
    signature::{CompactSignature, COMPACT_SIZE, RECOVERY_OFFSET},
};

const MAGIC: &[u8] = b"\x18Bitcoin Signed Message:\n";
/// Header offset signalling that the signer's key is compressed.
const COMPRESSED_FLAG: u8 = 4;

fn write_varint(out: &mut Vec<u8>, value: usize) {
    let value = value as u64;
    match value {
        0..=0xfc => out.push(value as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(value as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(value as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&value.to_le_bytes());
        }
    }
}

/// Digest that signed-message signatures commit to.
pub fn message_digest(message: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut buf = Vec::with_capacity(MAGIC.len() + 9 + message.len());
    buf.extend_from_slice(MAGIC);
    write_varint(&mut buf, message.len());
    buf.extend_from_slice(message);
    HashAlgorithm::Sha256d.digest(&buf)
}

fn decode(signature: &str) -> Result<CompactSignature> {
    let mut bytes = STANDARD
        .decode(signature.trim())
        .map_err(|_| Error::InvalidSignature("malformed base64"))?;
    if bytes.len() != COMPACT_SIZE {
        return Err(Error::InvalidSignature("signed message must decode to 65 bytes"));
    }
    if bytes[0] >= RECOVERY_OFFSET + COMPRESSED_FLAG {
        bytes[0] -= COMPRESSED_FLAG;
    }
    CompactSignature::from_slice(&bytes)
}

pub(crate) fn sign(message: &[u8], private_key: &[u8; KEY_SIZE]) -> Result<String> {
    let signature = ops::sign_recoverable(&message_digest(message), private_key)?;
    Ok(STANDARD.encode(CompactSignature::from_native(&signature).as_bytes()))
}

pub(crate) fn recover(message: &[u8], signature: &str) -> Result<PublicKey> {
    let native = decode(signature)?.to_native()?;
    ops::recover(&message_digest(message), &native)
}

pub(crate) fn verify(
    message: &[u8],
    signature: &str,
    public_key: &[u8],
    strict_low_s: bool,
) -> Result<bool> {
    let public = ops::public_key(public_key)?;
    let native = decode(signature)?.to_native()?.to_standard();
    Ok(ops::verify(&message_digest(message), &native, &public, strict_low_s))
}

/// Signs `message`, returning the base64 form. The header marks the key as
/// uncompressed.
#[inline]
pub fn sign_message(message: &[u8], private_key: &[u8; KEY_SIZE]) -> Result<String> {
    SignatureBridge::DEFAULT.sign_message(message, private_key)
}

#[inline]
pub fn recover_message(message: &[u8], signature: &str) -> Result<PublicKey> {
    SignatureBridge::DEFAULT.recover_message(message, signature)
}

#[inline]
pub fn verify_message(message: &[u8], signature: &str, public_key: &[u8]) -> Result<bool> {
    SignatureBridge::DEFAULT.verify_message(message, signature, public_key)
}
