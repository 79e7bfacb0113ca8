//! Command-line front end for the secp-bridge library.

pub mod args;
pub mod codec;
pub mod commands;

pub use args::{CliArgs, Command, Format, LogLevel};
pub use commands::{execute, Outcome};
