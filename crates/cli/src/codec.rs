//! Text forms of keys, digests and signatures used on the command line.

use anyhow::{anyhow, bail, Context, Result};
use num_bigint::BigUint;
use secp_bridge::RawSignature;

pub fn decode_hex(value: &str) -> Result<Vec<u8>> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).with_context(|| format!("invalid hex: {value}"))
}

pub fn decode_array32(value: &str, what: &str) -> Result<[u8; 32]> {
    let bytes = decode_hex(value)?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| anyhow!("{what} must be 32 bytes, got {len}"))
}

/// `v:r:s` with decimal `v` and hex `r`, `s`.
pub fn parse_raw(value: &str) -> Result<RawSignature> {
    let parts: Vec<&str> = value.trim().split(':').collect();
    let [v, r, s] = parts.as_slice() else {
        bail!("raw signature must look like v:r_hex:s_hex");
    };
    let v: u8 = v.parse().with_context(|| format!("invalid v: {v}"))?;
    let r = BigUint::from_bytes_be(&decode_hex(r)?);
    let s = BigUint::from_bytes_be(&decode_hex(s)?);
    Ok(RawSignature::new(v, r, s))
}

pub fn format_raw(signature: &RawSignature) -> String {
    format!(
        "{}:{:064x}:{:064x}",
        signature.v, signature.r, signature.s
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_accepts_prefix() {
        assert_eq!(decode_hex("0x0aff").unwrap(), vec![0x0a, 0xff]);
        assert_eq!(decode_hex(" 0aff ").unwrap(), vec![0x0a, 0xff]);
        assert!(decode_hex("zz").is_err());
    }

    #[test]
    fn array32_checks_length() {
        assert!(decode_array32(&"11".repeat(32), "digest").is_ok());
        let err = decode_array32("1111", "digest").unwrap_err();
        assert_eq!(err.to_string(), "digest must be 32 bytes, got 2");
    }

    #[test]
    fn raw_text_roundtrip() {
        let signature = RawSignature::new(28, BigUint::from(0xabcdu32), BigUint::from(7u8));
        let text = format_raw(&signature);
        assert!(text.starts_with("28:"));
        assert_eq!(text.len(), 2 + 1 + 64 + 1 + 64);
        assert_eq!(parse_raw(&text).unwrap(), signature);
    }

    #[test]
    fn raw_text_rejects_wrong_shape() {
        assert!(parse_raw("27:00").is_err());
        assert!(parse_raw("x:00:00").is_err());
    }
}
