//! Command-line interface for the `pontifex` binary.
//!
//! The clap definitions live here; each command family runs in its own
//! submodule.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pontifex::Mode;

pub mod crypt;
pub mod deck;

/// Argument parser for the `pontifex` binary.
#[derive(Parser, Debug)]
#[command(
    name = "pontifex",
    version,
    about = "Solitaire (Pontifex) stream cipher toolkit"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Command families exposed to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(subcommand)]
    Deck(deck::DeckCommand),
    /// Encrypt a message with a deck key.
    Encrypt(crypt::CryptArgs),
    /// Decrypt a ciphertext with a deck key.
    Decrypt(crypt::CryptArgs),
}

/// Dispatch the parsed command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Deck(cmd) => deck::handle(cmd),
        Command::Encrypt(args) => crypt::handle(args, Mode::Encrypt),
        Command::Decrypt(args) => crypt::handle(args, Mode::Decrypt),
    }
}
