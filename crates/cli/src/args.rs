use clap::{Parser, Subcommand, ValueEnum};
use secp_bridge::config::CONFIG_ENV;
use std::path::PathBuf;

/// Command-line arguments for secp-bridge
#[derive(Parser, Debug, Clone)]
#[command(
    name = "secp-bridge",
    version = env!("CARGO_PKG_VERSION"),
    about = "secp256k1 ECDSA sign/recover/verify over libsecp256k1",
    long_about = "Signs 32-byte digests (raw and compact recoverable encodings), arbitrary messages (DER, signed-message) and recovers or verifies public keys. All curve arithmetic is done by libsecp256k1."
)]
pub struct CliArgs {
    /// TOML file with bridge settings (der_digest, strict_low_s)
    #[arg(short = 'c', long = "config", value_name = "FILE", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Log level; RUST_LOG takes precedence when set
    #[arg(long = "log-level", value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the uncompressed public key of a private key
    Derive {
        /// 32-byte private key, hex
        #[arg(long, value_name = "HEX")]
        key: String,
    },

    /// Sign a digest (raw, compact) or a message (der, message)
    Sign {
        /// 32-byte private key, hex
        #[arg(long, value_name = "HEX")]
        key: String,

        /// 32-byte digest for raw/compact, any length for der/message; hex
        #[arg(long, value_name = "HEX")]
        message: String,

        #[arg(long, value_enum, default_value = "compact")]
        format: Format,
    },

    /// Recover the signer's public key
    Recover {
        #[arg(long, value_name = "HEX")]
        message: String,

        /// v:r:s for raw, base64 for message, hex otherwise
        #[arg(long, value_name = "SIG")]
        signature: String,

        #[arg(long, value_enum, default_value = "compact")]
        format: Format,
    },

    /// Verify a signature; exits non-zero when it does not match
    Verify {
        #[arg(long, value_name = "HEX")]
        message: String,

        #[arg(long, value_name = "SIG")]
        signature: String,

        /// 33-, 64- or 65-byte public key, hex
        #[arg(long, value_name = "HEX")]
        pubkey: String,

        #[arg(long, value_enum, default_value = "compact")]
        format: Format,
    },

    /// Time compact signing and recovery over random keys
    Bench {
        #[arg(long, default_value_t = 1000)]
        rounds: usize,
    },
}

/// Signature encoding
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// (v, r, s) with v = 27 + recovery id
    Raw,
    /// 65 bytes: header, r, s
    Compact,
    /// ASN.1 DER over the configured message digest
    Der,
    /// Base64 "Bitcoin Signed Message"
    Message,
}

/// Log level enumeration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive for `EnvFilter` when `RUST_LOG` is unset.
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
