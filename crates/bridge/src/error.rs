// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use core::fmt;

/// Category of a rejected input.
///
/// Every failure surfaced by the bridge is one of these three; a signature
/// that parses but does not verify is reported as `Ok(false)` instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    InvalidPrivateKey,
    InvalidPubkey,
    InvalidSignature,
}

impl ErrorKind {
    /// Maps a libsecp256k1 status onto the bridge taxonomy.
    ///
    /// Statuses without a natural home (tweaks, ECDH, allocation) map to
    /// `fallback`, which callers pick from the operand they were decoding.
    pub fn from_native(err: secp256k1::Error, fallback: ErrorKind) -> ErrorKind {
        use secp256k1::Error as Native;

        match err {
            Native::InvalidSecretKey => ErrorKind::InvalidPrivateKey,
            Native::InvalidPublicKey => ErrorKind::InvalidPubkey,
            Native::InvalidSignature
            | Native::InvalidRecoveryId
            | Native::IncorrectSignature
            | Native::InvalidMessage => ErrorKind::InvalidSignature,
            _ => fallback,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidPrivateKey => f.write_str("invalid private key"),
            ErrorKind::InvalidPubkey => f.write_str("invalid public key"),
            ErrorKind::InvalidSignature => f.write_str("invalid signature"),
        }
    }
}

/// Errors returned by the signing, recovery and verification entry points.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("secp256k1: invalid private key: {0}")]
    InvalidPrivateKey(&'static str),

    #[error("secp256k1: invalid public key: {0}")]
    InvalidPubkey(&'static str),

    #[error("secp256k1: invalid signature: {0}")]
    InvalidSignature(&'static str),
}

impl Error {
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidPrivateKey(_) => ErrorKind::InvalidPrivateKey,
            Error::InvalidPubkey(_) => ErrorKind::InvalidPubkey,
            Error::InvalidSignature(_) => ErrorKind::InvalidSignature,
        }
    }

    #[inline]
    pub fn reason(&self) -> &'static str {
        match self {
            Error::InvalidPrivateKey(reason)
            | Error::InvalidPubkey(reason)
            | Error::InvalidSignature(reason) => reason,
        }
    }

    pub(crate) fn new(kind: ErrorKind, reason: &'static str) -> Self {
        match kind {
            ErrorKind::InvalidPrivateKey => Error::InvalidPrivateKey(reason),
            ErrorKind::InvalidPubkey => Error::InvalidPubkey(reason),
            ErrorKind::InvalidSignature => Error::InvalidSignature(reason),
        }
    }

    /// Wraps a native status, logging the raw code before it is flattened.
    pub(crate) fn native(err: secp256k1::Error, fallback: ErrorKind, reason: &'static str) -> Self {
        let kind = ErrorKind::from_native(err, fallback);
        tracing::debug!(native = ?err, %kind, reason, "libsecp256k1 rejected input");
        Error::new(kind, reason)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
