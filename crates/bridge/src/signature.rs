// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Wire encodings of a recoverable secp256k1 signature.
//!
//! The raw `v` value and the compact header byte share one convention:
//! `27 + recid`, with `recid` in `0..=3`. Anything outside `27..=30` is
//! rejected rather than guessed at.

use core::fmt::{self, Debug, Formatter};

use num_bigint::BigUint;
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId, Signature};

use crate::error::{Error, ErrorKind, Result};

pub const SCALAR_SIZE: usize = 32;
pub const COMPACT_SIZE: usize = 1 + 2 * SCALAR_SIZE;
/// Added to the recovery id in both the raw `v` and the compact header.
pub const RECOVERY_OFFSET: u8 = 27;
pub const MAX_RECOVERY_ID: u8 = 3;

#[inline]
pub(crate) fn recovery_id_from_header(header: u8) -> Result<RecoveryId> {
    let recid = header
        .checked_sub(RECOVERY_OFFSET)
        .filter(|recid| *recid <= MAX_RECOVERY_ID)
        .ok_or(Error::InvalidSignature("recovery header outside 27..=30"))?;
    RecoveryId::from_i32(i32::from(recid))
        .map_err(|err| Error::native(err, ErrorKind::InvalidSignature, "bad recovery id"))
}

#[inline]
pub(crate) fn header_from_recovery_id(recid: RecoveryId) -> u8 {
    // from_i32 only admits 0..=3
    RECOVERY_OFFSET + recid.to_i32() as u8
}

fn recoverable_from_parts(recid: RecoveryId, rs: &[u8]) -> Result<RecoverableSignature> {
    RecoverableSignature::from_compact(rs, recid)
        .map_err(|err| Error::native(err, ErrorKind::InvalidSignature, "r or s out of range"))
}

/// Big-endian, left-padded encoding of `value`; fails if it needs more than
/// 32 bytes.
fn scalar_bytes(value: &BigUint) -> Result<[u8; SCALAR_SIZE]> {
    let bytes = value.to_bytes_be();
    if bytes.len() > SCALAR_SIZE {
        return Err(Error::InvalidSignature("scalar wider than 32 bytes"));
    }
    let mut out = [0u8; SCALAR_SIZE];
    out[SCALAR_SIZE - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

/// `(v, r, s)` with `v = 27 + recid`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RawSignature {
    pub v: u8,
    pub r: BigUint,
    pub s: BigUint,
}

impl RawSignature {
    #[inline]
    pub fn new(v: u8, r: BigUint, s: BigUint) -> Self {
        Self { v, r, s }
    }

    pub(crate) fn from_native(signature: &RecoverableSignature) -> Self {
        let (recid, rs) = signature.serialize_compact();
        Self {
            v: header_from_recovery_id(recid),
            r: BigUint::from_bytes_be(&rs[..SCALAR_SIZE]),
            s: BigUint::from_bytes_be(&rs[SCALAR_SIZE..]),
        }
    }

    pub(crate) fn to_native(&self) -> Result<RecoverableSignature> {
        let recid = recovery_id_from_header(self.v)?;
        let mut rs = [0u8; 2 * SCALAR_SIZE];
        rs[..SCALAR_SIZE].copy_from_slice(&scalar_bytes(&self.r)?);
        rs[SCALAR_SIZE..].copy_from_slice(&scalar_bytes(&self.s)?);
        recoverable_from_parts(recid, &rs)
    }

    #[inline]
    pub fn to_compact(&self) -> Result<CompactSignature> {
        self.to_native().map(|sig| CompactSignature::from_native(&sig))
    }
}

/// `[27 + recid] [r(32)] [s(32)]`.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct CompactSignature([u8; COMPACT_SIZE]);

impl CompactSignature {
    /// Checks the length and header before anything is handed to the
    /// native parser.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let array: [u8; COMPACT_SIZE] = bytes
            .try_into()
            .map_err(|_| Error::InvalidSignature("compact signature must be 65 bytes"))?;
        recovery_id_from_header(array[0])?;
        Ok(Self(array))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; COMPACT_SIZE] {
        &self.0
    }

    #[inline]
    pub fn into_bytes(self) -> [u8; COMPACT_SIZE] {
        self.0
    }

    #[inline]
    pub fn header(&self) -> u8 {
        self.0[0]
    }

    pub(crate) fn from_native(signature: &RecoverableSignature) -> Self {
        let (recid, rs) = signature.serialize_compact();
        let mut out = [0u8; COMPACT_SIZE];
        out[0] = header_from_recovery_id(recid);
        out[1..].copy_from_slice(&rs);
        Self(out)
    }

    pub(crate) fn to_native(&self) -> Result<RecoverableSignature> {
        let recid = recovery_id_from_header(self.0[0])?;
        recoverable_from_parts(recid, &self.0[1..])
    }

    pub fn to_raw(&self) -> RawSignature {
        RawSignature {
            v: self.0[0],
            r: BigUint::from_bytes_be(&self.0[1..1 + SCALAR_SIZE]),
            s: BigUint::from_bytes_be(&self.0[1 + SCALAR_SIZE..]),
        }
    }
}

impl AsRef<[u8]> for CompactSignature {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for CompactSignature {
    type Error = Error;

    #[inline]
    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl Debug for CompactSignature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompactSignature")
            .field(&hex::encode(self.0))
            .finish()
    }
}

/// ASN.1 `SEQUENCE { INTEGER r, INTEGER s }`, strictly DER-encoded.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct DerSignature(Vec<u8>);

impl DerSignature {
    /// Validates the encoding through the native strict-DER parser.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Signature::from_der(bytes)
            .map_err(|err| Error::native(err, ErrorKind::InvalidSignature, "malformed DER"))?;
        Ok(Self(bytes.to_vec()))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub(crate) fn from_native(signature: &Signature) -> Self {
        Self(signature.serialize_der().to_vec())
    }

    pub(crate) fn to_native(&self) -> Result<Signature> {
        Signature::from_der(&self.0)
            .map_err(|err| Error::native(err, ErrorKind::InvalidSignature, "malformed DER"))
    }
}

impl AsRef<[u8]> for DerSignature {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for DerSignature {
    type Error = Error;

    #[inline]
    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl Debug for DerSignature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DerSignature")
            .field(&hex::encode(&self.0))
            .finish()
    }
}
