// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use core::fmt::{self, Debug, Formatter};

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::{Error, ErrorKind, Result};

pub const KEY_SIZE: usize = 32;
pub const UNCOMPRESSED_SIZE: usize = 65;
pub const COMPRESSED_SIZE: usize = 33;
/// `X || Y` without the SEC1 tag byte.
pub const XY_SIZE: usize = 64;

#[derive(Clone)]
pub struct PrivateKey {
    key: Zeroizing<[u8; KEY_SIZE]>,
}

impl PrivateKey {
    /// Wraps the scalar without validating it; the native library checks
    /// it on first use.
    #[inline]
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self {
            key: Zeroizing::new(bytes),
        }
    }

    #[inline]
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_SIZE] = slice
            .try_into()
            .map_err(|_| Error::InvalidPrivateKey("expected 32 bytes"))?;
        Ok(Self::new(bytes))
    }

    pub(crate) fn to_native(&self) -> Result<secp256k1::SecretKey> {
        secp256k1::SecretKey::from_slice(self.key.as_slice()).map_err(|err| {
            Error::native(
                err,
                ErrorKind::InvalidPrivateKey,
                "scalar is zero or not below the curve order",
            )
        })
    }

    pub fn public_key(&self) -> Result<PublicKey> {
        let secret = self.to_native()?;
        let public = secp256k1::PublicKey::from_secret_key(secp256k1::SECP256K1, &secret);
        Ok(PublicKey::from_native(&public))
    }
}

impl From<[u8; KEY_SIZE]> for PrivateKey {
    #[inline]
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Self::new(bytes)
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&"***").finish()
    }
}

impl Eq for PrivateKey {}

impl PartialEq for PrivateKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key.as_slice().ct_eq(other.key.as_slice()).into()
    }
}

/// An affine point on secp256k1, always known to be on the curve.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct PublicKey {
    gx: [u8; KEY_SIZE],
    gy: [u8; KEY_SIZE],
}

impl PublicKey {
    pub(crate) fn from_native(public: &secp256k1::PublicKey) -> Self {
        let encoded = public.serialize_uncompressed();
        let mut gx = [0u8; KEY_SIZE];
        let mut gy = [0u8; KEY_SIZE];
        gx.copy_from_slice(&encoded[1..33]);
        gy.copy_from_slice(&encoded[33..]);
        Self { gx, gy }
    }

    /// Decodes a SEC1 point (65-byte uncompressed or hybrid, 33-byte
    /// compressed) or the 64-byte untagged `X || Y` form.
    #[inline]
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        parse_native(bytes).map(|public| Self::from_native(&public))
    }

    #[inline]
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_SIZE] {
        let mut buf = [0u8; UNCOMPRESSED_SIZE];
        buf[0] = 0x04;
        buf[1..33].copy_from_slice(&self.gx);
        buf[33..].copy_from_slice(&self.gy);
        buf
    }

    #[inline]
    pub fn to_compressed(&self) -> [u8; COMPRESSED_SIZE] {
        let mut buf = [0u8; COMPRESSED_SIZE];
        buf[0] = 0x02 + (self.gy[KEY_SIZE - 1] & 0x01);
        buf[1..].copy_from_slice(&self.gx);
        buf
    }

    #[inline]
    pub fn to_xy(&self) -> [u8; XY_SIZE] {
        let mut buf = [0u8; XY_SIZE];
        buf[..KEY_SIZE].copy_from_slice(&self.gx);
        buf[KEY_SIZE..].copy_from_slice(&self.gy);
        buf
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    #[inline]
    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_sec1_bytes(bytes)
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("compressed", &hex::encode(self.to_compressed()))
            .finish()
    }
}

/// Length-checks `bytes` before the native parser sees them.
pub(crate) fn parse_native(bytes: &[u8]) -> Result<secp256k1::PublicKey> {
    match bytes.len() {
        UNCOMPRESSED_SIZE | COMPRESSED_SIZE => secp256k1::PublicKey::from_slice(bytes),
        XY_SIZE => {
            let mut tagged = [0u8; UNCOMPRESSED_SIZE];
            tagged[0] = 0x04;
            tagged[1..].copy_from_slice(bytes);
            secp256k1::PublicKey::from_slice(&tagged)
        }
        _ => return Err(Error::InvalidPubkey("expected 33, 64 or 65 bytes")),
    }
    .map_err(|err| Error::native(err, ErrorKind::InvalidPubkey, "point is not on the curve"))
}

/// Derives the uncompressed public key for `private_key`.
pub fn derive_public_key(private_key: &[u8; KEY_SIZE]) -> Result<PublicKey> {
    PrivateKey::new(*private_key).public_key()
}
