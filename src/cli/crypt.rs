//! Encrypt/decrypt commands (`pontifex encrypt`, `pontifex decrypt`).

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pontifex::{Deck, Mode, process};

/// Arguments shared by `pontifex encrypt` and `pontifex decrypt`.
#[derive(Args, Debug)]
pub struct CryptArgs {
    /// Deck key file (JSON array of 54 card tokens).
    #[arg(short = 'k', long = "deck")]
    pub deck: PathBuf,
    /// Inline message (mutually exclusive with --from; stdin if neither).
    #[arg(long, conflicts_with = "from")]
    pub text: Option<String>,
    /// Read the message from a file (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    /// Output file path (`-` for stdout).
    #[arg(short = 'o', long = "output", default_value = "-")]
    pub output: PathBuf,
    /// Persist the advanced deck state after the operation.
    #[arg(long = "save-deck")]
    pub save_deck: Option<PathBuf>,
}

/// Execute an encrypt or decrypt command.
pub fn handle(args: CryptArgs, mode: Mode) -> Result<()> {
    let message = read_message(&args)?;
    let mut deck = Deck::load(args.deck.as_path())?;
    let result = process(&message, mode, &mut deck);
    if args.output.as_os_str() == "-" {
        println!("{result}");
    } else {
        fs::write(&args.output, format!("{result}\n"))
            .with_context(|| format!("failed to write {}", args.output.display()))?;
        // Output length equals the normalized letter count.
        println!(
            "{} {} letters into {}",
            match mode {
                Mode::Encrypt => "Encrypted",
                Mode::Decrypt => "Decrypted",
            },
            result.len(),
            args.output.display()
        );
    }
    if let Some(path) = args.save_deck {
        deck.save(&path)?;
        println!("Saved advanced deck state to {}", path.display());
    }
    Ok(())
}

/// Resolves the message from `--text`, a `--from` file, or stdin. Clap has
/// already rejected `--text` combined with `--from`.
fn read_message(args: &CryptArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    match &args.from {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read message file {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read message from stdin")?;
            Ok(buffer)
        }
    }
}
