//! Subcommand execution.

use crate::{
    args::{Command, Format},
    codec::{decode_array32, decode_hex, format_raw, parse_raw},
};
use anyhow::{ensure, Context, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use secp_bridge::{derive_public_key, PublicKey, SignatureBridge};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Printed text plus whether the command succeeded. Only `verify` can
/// produce `success = false` without an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

pub fn execute(command: &Command, bridge: &SignatureBridge) -> Result<Outcome> {
    match command {
        Command::Derive { key } => derive(key),
        Command::Sign {
            key,
            message,
            format,
        } => sign(bridge, key, message, *format),
        Command::Recover {
            message,
            signature,
            format,
        } => recover(bridge, message, signature, *format),
        Command::Verify {
            message,
            signature,
            pubkey,
            format,
        } => verify(bridge, message, signature, pubkey, *format),
        Command::Bench { rounds } => bench(bridge, *rounds),
    }
}

fn pubkey_hex(key: &PublicKey) -> String {
    hex::encode(key.to_uncompressed())
}

fn derive(key: &str) -> Result<Outcome> {
    let private = decode_array32(key, "private key")?;
    let public = derive_public_key(&private).context("cannot derive public key")?;
    Ok(Outcome::ok(pubkey_hex(&public)))
}

fn sign(bridge: &SignatureBridge, key: &str, message: &str, format: Format) -> Result<Outcome> {
    let private = decode_array32(key, "private key")?;
    let output = match format {
        Format::Raw => {
            let digest = decode_array32(message, "digest")?;
            format_raw(&bridge.sign_raw(&digest, &private)?)
        }
        Format::Compact => {
            let digest = decode_array32(message, "digest")?;
            hex::encode(bridge.sign_compact(&digest, &private)?)
        }
        Format::Der => hex::encode(bridge.sign_der(&decode_hex(message)?, &private)?),
        Format::Message => bridge.sign_message(&decode_hex(message)?, &private)?,
    };
    debug!(?format, "signed");
    Ok(Outcome::ok(output))
}

fn recover(
    bridge: &SignatureBridge,
    message: &str,
    signature: &str,
    format: Format,
) -> Result<Outcome> {
    let keys = match format {
        Format::Raw => {
            let digest = decode_array32(message, "digest")?;
            vec![bridge.recover_raw(&digest, &parse_raw(signature)?)?]
        }
        Format::Compact => {
            let digest = decode_array32(message, "digest")?;
            vec![bridge.recover_compact(&digest, &decode_hex(signature)?)?]
        }
        Format::Der => bridge.recover_der(&decode_hex(message)?, &decode_hex(signature)?)?,
        Format::Message => vec![bridge.recover_message(&decode_hex(message)?, signature.trim())?],
    };
    debug!(?format, candidates = keys.len(), "recovered");
    let lines: Vec<String> = keys.iter().map(pubkey_hex).collect();
    Ok(Outcome::ok(lines.join("\n")))
}

fn verify(
    bridge: &SignatureBridge,
    message: &str,
    signature: &str,
    pubkey: &str,
    format: Format,
) -> Result<Outcome> {
    let public = decode_hex(pubkey)?;
    let valid = match format {
        Format::Raw => {
            let digest = decode_array32(message, "digest")?;
            bridge.verify_raw(&digest, &parse_raw(signature)?, &public)?
        }
        Format::Compact => {
            let digest = decode_array32(message, "digest")?;
            bridge.verify_compact(&digest, &decode_hex(signature)?, &public)?
        }
        Format::Der => bridge.verify_der(&decode_hex(message)?, &decode_hex(signature)?, &public)?,
        Format::Message => {
            bridge.verify_message(&decode_hex(message)?, signature.trim(), &public)?
        }
    };
    Ok(Outcome {
        output: valid.to_string(),
        success: valid,
    })
}

struct Timing {
    label: &'static str,
    rounds: usize,
    elapsed: Duration,
}

impl Timing {
    fn line(&self) -> String {
        let secs = self.elapsed.as_secs_f64();
        let per_op = secs * 1e6 / self.rounds as f64;
        let rate = if secs > 0.0 {
            self.rounds as f64 / secs
        } else {
            f64::INFINITY
        };
        format!(
            "{:<16} {} ops in {:.3}s ({:.1} us/op, {:.0} ops/s)",
            self.label, self.rounds, secs, per_op, rate
        )
    }
}

fn bench(bridge: &SignatureBridge, rounds: usize) -> Result<Outcome> {
    ensure!(rounds > 0, "rounds must be positive");
    let mut rng = StdRng::from_entropy();

    let mut inputs = Vec::with_capacity(rounds);
    while inputs.len() < rounds {
        let private: [u8; 32] = rng.gen();
        if let Ok(public) = derive_public_key(&private) {
            inputs.push((private, rng.gen::<[u8; 32]>(), public));
        }
    }
    info!(rounds, "benchmarking compact sign/recover");

    let start = Instant::now();
    let mut signatures = Vec::with_capacity(rounds);
    for (private, digest, _) in &inputs {
        signatures.push(bridge.sign_compact(digest, private)?);
    }
    let sign = Timing {
        label: "sign_compact",
        rounds,
        elapsed: start.elapsed(),
    };

    let start = Instant::now();
    let mut recovered = Vec::with_capacity(rounds);
    for ((_, digest, _), signature) in inputs.iter().zip(&signatures) {
        recovered.push(bridge.recover_compact(digest, signature.as_ref())?);
    }
    let recover = Timing {
        label: "recover_compact",
        rounds,
        elapsed: start.elapsed(),
    };

    for ((_, _, public), key) in inputs.iter().zip(&recovered) {
        ensure!(public == key, "recovered key does not match signer");
    }

    Ok(Outcome::ok(format!("{}\n{}", sign.line(), recover.line())))
}
