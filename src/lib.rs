//! Core library for the Solitaire (Pontifex) stream cipher.
//!
//! The cipher keys a keystream off the order of a 54-card deck: each emitted
//! value permutes the deck through a fixed four-step cycle (move joker A,
//! move joker B, triple cut, count cut) and reads an output card. The
//! keystream combines with the message one letter at a time over the 26
//! letter alphabet.
//!
//! # Examples
//!
//! ```
//! use pontifex::{Deck, decrypt, encrypt};
//!
//! let ciphertext = encrypt("AAAAAAAAAA", &mut Deck::unkeyed());
//! assert_eq!(ciphertext, "EXKYIZSGEH");
//!
//! let plaintext = decrypt(&ciphertext, &mut Deck::unkeyed());
//! assert_eq!(plaintext, "AAAAAAAAAA");
//! ```

mod card;
mod cipher;
mod deck;
mod keystream;

pub use card::{Card, JOKER_VALUE, ParseCardError, Rank, Suit};
pub use cipher::{Mode, char_to_number, normalize, number_to_char, process};
pub use deck::{DECK_SIZE, Deck, DeckError};
pub use keystream::Keystream;

/// Encrypts a message, consuming keystream from the deck.
pub fn encrypt(message: &str, deck: &mut Deck) -> String {
    cipher::process(message, Mode::Encrypt, deck)
}

/// Decrypts a ciphertext, consuming keystream from the deck.
pub fn decrypt(message: &str, deck: &mut Deck) -> String {
    cipher::process(message, Mode::Decrypt, deck)
}
