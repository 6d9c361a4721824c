use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::card::{Card, ParseCardError, Rank, Suit};

/// Number of cards in a cipher deck: 52 standard cards plus two jokers.
pub const DECK_SIZE: usize = 54;

/// Invariant violations detected while building a deck.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck must contain exactly 54 cards (got {0})")]
    WrongLength(usize),
    #[error(transparent)]
    UnknownToken(#[from] ParseCardError),
    #[error("deck is missing '{0}'")]
    MissingJoker(Card),
    #[error("duplicate card '{0}' in deck")]
    DuplicateCard(Card),
}

/// The 54-card ordered permutation that keys the cipher.
///
/// A deck always holds exactly [`DECK_SIZE`] pairwise-distinct cards with one
/// of each joker; construction rejects anything else, and the manipulation
/// primitives only reorder. The order is the entire key: two decks with the
/// same order produce the same keystream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a deck from card tokens as found in a deck file, enforcing all
    /// invariants before any cipher operation can touch it.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, DeckError> {
        let cards = tokens
            .iter()
            .map(|token| token.as_ref().parse())
            .collect::<Result<Vec<Card>, ParseCardError>>()?;
        Self::from_cards(cards)
    }

    /// Builds a deck from already-parsed cards, enforcing all invariants.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongLength(cards.len()));
        }
        for joker in [Card::JokerA, Card::JokerB] {
            if !cards.contains(&joker) {
                return Err(DeckError::MissingJoker(joker));
            }
        }
        let mut seen: Vec<Card> = Vec::with_capacity(DECK_SIZE);
        for &card in &cards {
            if seen.contains(&card) {
                return Err(DeckError::DuplicateCard(card));
            }
            seen.push(card);
        }
        Ok(Self { cards })
    }

    /// The unkeyed new-deck order: ace through king of clubs, diamonds,
    /// hearts, spades, then joker A and joker B.
    pub fn unkeyed() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::Standard { rank, suit });
            }
        }
        cards.push(Card::JokerA);
        cards.push(Card::JokerB);
        Self { cards }
    }

    /// A freshly shuffled deck, i.e. a new random key.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::unkeyed();
        deck.cards.shuffle(rng);
        deck
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read deck file {}", path.display()))?;
        let cards: Vec<Card> = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse deck file {}", path.display()))?;
        Self::from_cards(cards).with_context(|| format!("invalid deck in {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let mut json =
            serde_json::to_string(&self.cards).context("failed to serialize deck")?;
        json.push('\n');
        fs::write(path, json).with_context(|| format!("failed to write deck file {}", path.display()))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Token form of the deck order, suitable for a deck file.
    pub fn tokens(&self) -> Vec<String> {
        self.cards.iter().map(Card::to_string).collect()
    }

    /// SHA-256 over the token sequence. Lets two parties confirm they hold
    /// the same key without revealing the deck order.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for card in &self.cards {
            hasher.update(card.to_string().as_bytes());
            hasher.update(b"\n");
        }
        let digest = hasher.finalize();
        format!("{digest:x}")
    }

    /// Moves the given joker down by `positions` places. The deck is circular
    /// below the top card: a joker carried past the bottom re-enters just
    /// below the top, never becoming the top card itself.
    pub fn move_joker(&mut self, joker: Card, positions: usize) {
        let Some(idx) = self.cards.iter().position(|&card| card == joker) else {
            return;
        };
        let card = self.cards.remove(idx);
        let mut target = idx + positions;
        if target >= DECK_SIZE {
            target -= DECK_SIZE - 1;
        }
        self.cards.insert(target, card);
    }

    /// Swaps the runs above the first joker and below the second joker,
    /// leaving the jokers and everything between them in place.
    pub fn triple_cut(&mut self) {
        let Some(a) = self.cards.iter().position(|card| *card == Card::JokerA) else {
            return;
        };
        let Some(b) = self.cards.iter().position(|card| *card == Card::JokerB) else {
            return;
        };
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let mut next = Vec::with_capacity(self.cards.len());
        next.extend_from_slice(&self.cards[hi + 1..]);
        next.extend_from_slice(&self.cards[lo..=hi]);
        next.extend_from_slice(&self.cards[..lo]);
        self.cards = next;
    }

    /// Cuts the top `v` cards to just above the bottom card, where `v` is the
    /// bottom card's value. The bottom card stays put, so a bottom joker
    /// (value 53) cuts the 53 cards above it: a full rotation, no reorder.
    pub fn count_cut(&mut self) {
        let v = self.cards[self.cards.len() - 1].value() as usize;
        if v >= self.cards.len() {
            return;
        }
        let last = self.cards.len() - 1;
        self.cards[..last].rotate_left(v);
    }

    /// Reads the output card: count down from the top by the top card's
    /// value, then report that card's value. A joker there is a miss and the
    /// cycle yields nothing.
    pub fn output_card(&self) -> Option<u8> {
        let v = self.cards[0].value() as usize;
        if v >= self.cards.len() {
            return None;
        }
        let card = self.cards[v];
        if card.is_joker() { None } else { Some(card.value()) }
    }
}
