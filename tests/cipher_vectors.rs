//! End-to-end vectors and properties for the public cipher API.
//!
//! The frozen vectors come from the published Solitaire worked example: the
//! unkeyed new-deck order encrypting a run of As. Any change in output means
//! the deck engine drifted off the algorithm.

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pontifex::{DECK_SIZE, Deck, DeckError, Keystream, Mode, decrypt, encrypt, normalize, process};

#[test]
fn unkeyed_deck_encrypts_the_known_vector() {
    let mut deck = Deck::unkeyed();
    assert_eq!(encrypt("AAAAAAAAAA", &mut deck), "EXKYIZSGEH");
}

#[test]
fn unkeyed_deck_decrypts_the_known_vector() {
    let mut deck = Deck::unkeyed();
    assert_eq!(decrypt("EXKYIZSGEH", &mut deck), "AAAAAAAAAA");
}

#[test]
fn unkeyed_keystream_prefix_is_frozen() {
    let mut deck = Deck::unkeyed();
    let values = Keystream::new(&mut deck).generate(10);
    assert_eq!(values, vec![4, 23, 10, 24, 8, 25, 18, 6, 4, 7]);
}

#[test]
fn round_trip_restores_normalized_messages() {
    let messages = [
        "ATTACK AT DAWN",
        "He,llo! 123",
        "the quick brown fox jumps over the lazy dog",
        "A",
    ];
    for (seed, message) in messages.iter().enumerate() {
        let deck = Deck::shuffled(&mut StdRng::seed_from_u64(seed as u64));
        let mut enc_deck = deck.clone();
        let mut dec_deck = deck;
        let ciphertext = encrypt(message, &mut enc_deck);
        assert_eq!(decrypt(&ciphertext, &mut dec_deck), normalize(message));
    }
}

#[test]
fn output_length_matches_normalized_input() {
    let mut deck = Deck::shuffled(&mut StdRng::seed_from_u64(99));
    let message = "Hello, World! 2024";
    let ciphertext = encrypt(message, &mut deck.clone());
    assert_eq!(ciphertext.len(), normalize(message).len());
    assert_eq!(encrypt("", &mut deck), "");
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let deck = Deck::shuffled(&mut StdRng::seed_from_u64(1234));
    let first = encrypt("DETERMINISM", &mut deck.clone());
    let second = encrypt("DETERMINISM", &mut deck.clone());
    assert_eq!(first, second);
}

#[test]
fn normalization_only_encodes_letters() {
    let mut noisy = Deck::unkeyed();
    let mut clean = Deck::unkeyed();
    assert_eq!(
        process("He,llo! 123", Mode::Encrypt, &mut noisy),
        process("HELLO", Mode::Encrypt, &mut clean)
    );
}

#[test]
fn empty_message_consumes_no_keystream() {
    let mut deck = Deck::unkeyed();
    let before = deck.clone();
    assert_eq!(encrypt("12 34 -- !!", &mut deck), "");
    assert_eq!(deck, before);
}

#[test]
fn short_deck_is_rejected() {
    let mut tokens = Deck::unkeyed().tokens();
    tokens.pop();
    assert_eq!(Deck::from_tokens(&tokens), Err(DeckError::WrongLength(53)));
}

#[test]
fn deck_without_joker_b_is_rejected() {
    let mut tokens = Deck::unkeyed().tokens();
    let last = tokens.len() - 1;
    tokens[last] = "7D".to_string();
    assert!(matches!(
        Deck::from_tokens(&tokens),
        Err(DeckError::MissingJoker(_))
    ));
}

#[test]
fn deck_with_duplicate_card_is_rejected() {
    let mut tokens = Deck::unkeyed().tokens();
    tokens[5] = "AC".to_string();
    assert!(matches!(
        Deck::from_tokens(&tokens),
        Err(DeckError::DuplicateCard(_))
    ));
}

#[test]
fn deck_with_unknown_token_is_rejected() {
    let mut tokens = Deck::unkeyed().tokens();
    tokens[0] = "ZZ".to_string();
    assert!(matches!(
        Deck::from_tokens(&tokens),
        Err(DeckError::UnknownToken(_))
    ));
}

#[test]
fn primitives_preserve_deck_invariants_under_load() {
    let mut deck = Deck::shuffled(&mut StdRng::seed_from_u64(42));
    let mut stream = Keystream::new(&mut deck);
    let _ = stream.generate(260);
    assert_eq!(deck.cards().len(), DECK_SIZE);
    Deck::from_cards(deck.cards().to_vec()).expect("invariants violated after generation");
}
