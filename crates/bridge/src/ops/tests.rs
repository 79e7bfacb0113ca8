// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use super::*;
use crate::{
    hash_algorithm::HashAlgorithm,
    keys::derive_public_key,
    signature::{CompactSignature, RawSignature, COMPACT_SIZE},
};
use hex_literal::hex;
use num_bigint::BigUint;
use secp256k1::constants::CURVE_ORDER;

const PRIVATE: [u8; 32] = hex!("1b7f730fc3ac386a1ae1c2cbaabdd99e3bb85da7d5236f9b1a92bb0b742d30ca");
const OTHER: [u8; 32] = [b'x'; 32];
const DIGEST: [u8; 32] = hex!("6d16ca2b9f10f8917ac12f90b91f864b0db1d0545d142e9d5b75f1c83c5f4321");

fn tampered(mut signature: [u8; COMPACT_SIZE]) -> [u8; COMPACT_SIZE] {
    signature[20] = if signature[20] == b'E' { b'F' } else { b'E' };
    signature
}

/// `s' = n - s` with R's parity flipped: the other valid encoding of the
/// same signature.
fn high_s(signature: &RawSignature) -> RawSignature {
    let order = BigUint::from_bytes_be(&CURVE_ORDER);
    let v = 27 + ((signature.v - 27) ^ 1);
    RawSignature::new(v, signature.r.clone(), order - &signature.s)
}

#[test]
fn raw_sign_recover_verify() {
    let public = derive_public_key(&PRIVATE).unwrap();
    let signature = sign_raw(&DIGEST, &PRIVATE).unwrap();

    assert!(signature.v == 27 || signature.v == 28);
    assert_eq!(recover_raw(&DIGEST, &signature).unwrap(), public);
    assert!(verify_raw(&DIGEST, &signature, &public.to_uncompressed(), false).unwrap());
}

#[test]
fn raw_verify_accepts_all_pubkey_forms() {
    let public = derive_public_key(&PRIVATE).unwrap();
    let signature = sign_raw(&DIGEST, &PRIVATE).unwrap();

    assert!(verify_raw(&DIGEST, &signature, &public.to_uncompressed(), false).unwrap());
    assert!(verify_raw(&DIGEST, &signature, &public.to_xy(), false).unwrap());
    assert!(verify_raw(&DIGEST, &signature, &public.to_compressed(), false).unwrap());
}

#[test]
fn raw_signature_from_other_key() {
    let public = derive_public_key(&PRIVATE).unwrap();
    let wrong = sign_raw(&DIGEST, &OTHER).unwrap();

    assert_ne!(recover_raw(&DIGEST, &wrong).unwrap(), public);
    assert!(!verify_raw(&DIGEST, &wrong, &public.to_uncompressed(), false).unwrap());
}

#[test]
fn raw_rejects_unpinned_v() {
    let mut signature = sign_raw(&DIGEST, &PRIVATE).unwrap();
    signature.v -= 27;
    let err = recover_raw(&DIGEST, &signature).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSignature);
}

#[test]
fn raw_rejects_zero_scalars() {
    let signature = RawSignature::new(27, BigUint::from(0u8), BigUint::from(1u8));
    let err = recover_raw(&DIGEST, &signature).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSignature);
}

#[test]
fn signing_with_invalid_scalar_fails() {
    for key in [[0u8; 32], CURVE_ORDER] {
        assert_eq!(
            sign_raw(&DIGEST, &key).unwrap_err().kind(),
            ErrorKind::InvalidPrivateKey
        );
        assert_eq!(
            sign_compact(&DIGEST, &key).unwrap_err().kind(),
            ErrorKind::InvalidPrivateKey
        );
        assert_eq!(
            sign_der(b"msg", &key, HashAlgorithm::Sha256).unwrap_err().kind(),
            ErrorKind::InvalidPrivateKey
        );
    }
}

#[test]
fn signing_is_deterministic() {
    let first = sign_compact(&DIGEST, &PRIVATE).unwrap();
    let second = sign_compact(&DIGEST, &PRIVATE).unwrap();
    assert_eq!(first, second);
}

#[test]
fn compact_sign_recover_verify() {
    let public = derive_public_key(&PRIVATE).unwrap();
    let signature = sign_compact(&DIGEST, &PRIVATE).unwrap();

    assert_eq!(signature.as_bytes().len(), COMPACT_SIZE);
    assert_eq!(recover_compact(&DIGEST, signature.as_ref()).unwrap(), public);
    assert!(verify_compact(&DIGEST, signature.as_ref(), &public.to_uncompressed(), false).unwrap());
}

#[test]
fn compact_and_raw_agree() {
    let raw = sign_raw(&DIGEST, &PRIVATE).unwrap();
    let compact = sign_compact(&DIGEST, &PRIVATE).unwrap();

    assert_eq!(compact.to_raw(), raw);
    assert_eq!(raw.to_compact().unwrap(), compact);
    assert_eq!(
        recover_raw(&DIGEST, &raw).unwrap(),
        recover_compact(&DIGEST, compact.as_ref()).unwrap()
    );
}

#[test]
fn tampered_compact_does_not_verify() {
    let public = derive_public_key(&PRIVATE).unwrap();
    let signature = sign_compact(&DIGEST, &PRIVATE).unwrap();
    let bad = tampered(signature.into_bytes());

    assert!(!verify_compact(&DIGEST, &bad, &public.to_uncompressed(), false).unwrap());
}

#[test]
fn malformed_compact_is_a_typed_error() {
    let signature = sign_compact(&DIGEST, &PRIVATE).unwrap().into_bytes();

    let err = recover_compact(&DIGEST, &signature[..COMPACT_SIZE - 1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSignature);

    let mut bad_header = signature;
    bad_header[0] = b'x';
    let err = recover_compact(&DIGEST, &bad_header).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSignature);

    let err = recover_compact(&DIGEST, &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSignature);
}

#[test]
fn compact_verify_reports_bad_pubkey_before_bad_signature() {
    let err = verify_compact(&DIGEST, &[0u8; 3], &[0u8; 5], false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPubkey);
}

#[test]
fn high_s_policy() {
    let public = derive_public_key(&PRIVATE).unwrap().to_uncompressed();
    let signature = sign_raw(&DIGEST, &PRIVATE).unwrap();
    let flipped = high_s(&signature);

    assert!(verify_raw(&DIGEST, &flipped, &public, false).unwrap());
    assert!(!verify_raw(&DIGEST, &flipped, &public, true).unwrap());
    assert_eq!(
        recover_raw(&DIGEST, &flipped).unwrap(),
        derive_public_key(&PRIVATE).unwrap()
    );
}

#[test]
fn der_sign_recover_verify() {
    let message = [0xa5u8; 128];
    let public = derive_public_key(&PRIVATE).unwrap();
    let signature = sign_der(&message, &PRIVATE, HashAlgorithm::Sha256).unwrap();

    assert_eq!(signature.as_bytes()[0], 0x30);
    let candidates = recover_der(&message, signature.as_ref(), HashAlgorithm::Sha256).unwrap();
    assert!(candidates.contains(&public));
    assert!(verify_der(
        &message,
        signature.as_ref(),
        &public.to_uncompressed(),
        HashAlgorithm::Sha256,
        false
    )
    .unwrap());
}

#[test]
fn der_digest_must_match() {
    let public = derive_public_key(&PRIVATE).unwrap().to_uncompressed();
    let signature = sign_der(b"payload", &PRIVATE, HashAlgorithm::Keccak256).unwrap();

    assert!(verify_der(b"payload", signature.as_ref(), &public, HashAlgorithm::Keccak256, false).unwrap());
    assert!(!verify_der(b"payload", signature.as_ref(), &public, HashAlgorithm::Sha256, false).unwrap());
}

#[test]
fn der_verify_rejects_off_curve_pubkey() {
    let mut public = derive_public_key(&PRIVATE).unwrap().to_uncompressed();
    let signature = sign_der(b"payload", &PRIVATE, HashAlgorithm::Sha256).unwrap();
    public[20] = if public[20] == b'E' { b'F' } else { b'E' };

    let err = verify_der(b"payload", signature.as_ref(), &public, HashAlgorithm::Sha256, false)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPubkey);
}

#[test]
fn der_rejects_malformed_signature() {
    let public = derive_public_key(&PRIVATE).unwrap().to_uncompressed();
    let signature = sign_der(b"payload", &PRIVATE, HashAlgorithm::Sha256).unwrap();
    let truncated = &signature.as_bytes()[..signature.as_bytes().len() - 1];

    let err = verify_der(b"payload", truncated, &public, HashAlgorithm::Sha256, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSignature);
    let err = recover_der(b"payload", truncated, HashAlgorithm::Sha256).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSignature);
}

#[test]
fn der_and_compact_share_r_and_s() {
    let digest = HashAlgorithm::Sha256.digest(b"shared");
    let compact = sign_compact(&digest, &PRIVATE).unwrap();
    let der = sign_der(b"shared", &PRIVATE, HashAlgorithm::Sha256).unwrap();

    let from_der = der.to_native().unwrap().serialize_compact();
    assert_eq!(&from_der[..], &compact.as_bytes()[1..]);
    let parsed = CompactSignature::from_slice(compact.as_ref()).unwrap();
    assert_eq!(parsed, compact);
}
