use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Keystream value assigned to either joker.
pub const JOKER_VALUE: u8 = 53;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized card token '{0}'")]
pub struct ParseCardError(String);

/// Suits in bridge order. The order determines each suit's value offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Value added to the rank: clubs 0, diamonds 13, hearts 26, spades 39.
    pub fn offset(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 13,
            Suit::Hearts => 26,
            Suit::Spades => 39,
        }
    }

    fn token(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    fn from_token(ch: char) -> Option<Suit> {
        match ch {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Ranks ace through king, valued 1 through 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    fn from_token(s: &str) -> Option<Rank> {
        Rank::ALL.into_iter().find(|rank| rank.token() == s)
    }
}

/// A single card of the 54-card cipher deck.
///
/// The two jokers are distinguishable and carry no rank or suit. Equality is
/// by tag, so a joker never compares equal to a standard card regardless of
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    JokerA,
    JokerB,
    Standard { rank: Rank, suit: Suit },
}

impl Card {
    /// Keystream value of the card: rank plus suit offset (1-52), jokers 53.
    pub fn value(self) -> u8 {
        match self {
            Card::JokerA | Card::JokerB => JOKER_VALUE,
            Card::Standard { rank, suit } => rank.value() + suit.offset(),
        }
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Card::JokerA | Card::JokerB)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::JokerA => write!(f, "JOKER_A"),
            Card::JokerB => write!(f, "JOKER_B"),
            Card::Standard { rank, suit } => write!(f, "{}{}", rank.token(), suit.token()),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a deck file token: `JOKER_A`, `JOKER_B`, or rank+suit like
    /// `10H` or `KC`. Tokens are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JOKER_A" => return Ok(Card::JokerA),
            "JOKER_B" => return Ok(Card::JokerB),
            _ => {}
        }
        let mut chars = s.chars();
        let suit_ch = chars.next_back().ok_or_else(|| ParseCardError(s.to_string()))?;
        let suit = Suit::from_token(suit_ch);
        let rank = Rank::from_token(chars.as_str());
        match (rank, suit) {
            (Some(rank), Some(suit)) => Ok(Card::Standard { rank, suit }),
            _ => Err(ParseCardError(s.to_string())),
        }
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(D::Error::custom)
    }
}
