//! Deck key lifecycle commands (`pontifex deck ...`).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use pontifex::{Card, Deck};

/// Supported `pontifex deck` subcommands.
#[derive(Subcommand, Debug)]
pub enum DeckCommand {
    /// Generate a deck key file.
    Generate(DeckGenerateArgs),
    /// Show deck metadata and key fingerprint.
    Info(DeckInfoArgs),
    /// Print the deck order as card tokens.
    Show(DeckShowArgs),
}

/// Arguments for `pontifex deck generate`.
#[derive(Args, Debug)]
pub struct DeckGenerateArgs {
    /// Output deck path (JSON array of card tokens).
    pub path: PathBuf,
    /// Write the unkeyed new-deck order instead of a random shuffle.
    #[arg(long)]
    pub unkeyed: bool,
}

/// Arguments for `pontifex deck info`.
#[derive(Args, Debug)]
pub struct DeckInfoArgs {
    /// Deck file to inspect.
    pub deck: PathBuf,
}

/// Arguments for `pontifex deck show`.
#[derive(Args, Debug)]
pub struct DeckShowArgs {
    /// Deck file to print.
    pub deck: PathBuf,
}

/// Execute a deck command.
pub fn handle(command: DeckCommand) -> Result<()> {
    match command {
        DeckCommand::Generate(args) => generate(args),
        DeckCommand::Info(args) => info(args),
        DeckCommand::Show(args) => show(args),
    }
}

fn generate(args: DeckGenerateArgs) -> Result<()> {
    let deck = if args.unkeyed {
        Deck::unkeyed()
    } else {
        Deck::shuffled(&mut rand::thread_rng())
    };
    deck.save(&args.path)?;
    println!(
        "Generated {} deck {} (fingerprint {})",
        if args.unkeyed { "unkeyed" } else { "random" },
        args.path.display(),
        deck.fingerprint()
    );
    Ok(())
}

fn info(args: DeckInfoArgs) -> Result<()> {
    let deck = Deck::load(args.deck.as_path())?;
    let joker_a = deck.cards().iter().position(|c| *c == Card::JokerA);
    let joker_b = deck.cards().iter().position(|c| *c == Card::JokerB);
    println!("Deck: {}", args.deck.display());
    println!("Cards: {}", deck.cards().len());
    println!("Top card: {}", deck.cards()[0]);
    if let (Some(a), Some(b)) = (joker_a, joker_b) {
        println!("Jokers: A at {}, B at {} (1-based)", a + 1, b + 1);
    }
    println!("Fingerprint: {}", deck.fingerprint());
    Ok(())
}

fn show(args: DeckShowArgs) -> Result<()> {
    let deck = Deck::load(args.deck.as_path())?;
    println!("{}", deck.tokens().join(" "));
    Ok(())
}
