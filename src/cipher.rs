use crate::deck::Deck;
use crate::keystream::Keystream;

/// Direction of a cipher operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

/// Uppercases the message and drops everything that is not an ASCII letter.
/// Spacing, digits and punctuation do not survive a round trip.
pub fn normalize(message: &str) -> String {
    message
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

/// Position of an uppercase letter in the alphabet, A=1 through Z=26.
pub fn char_to_number(ch: char) -> u8 {
    ch as u8 - b'A' + 1
}

/// Inverse of [`char_to_number`], total over all integers: any `n` reduces
/// into 1-26 before lookup, so 27 is A again and 0 wraps back to Z.
pub fn number_to_char(n: i32) -> char {
    ((n - 1).rem_euclid(26) as u8 + b'A') as char
}

/// Encrypts or decrypts `message` against the keystream drawn from `deck`.
///
/// The deck is consumed-in-place: one keystream value per normalized letter.
/// An empty normalized message returns an empty string without advancing the
/// deck at all. Output length always equals the normalized input length.
pub fn process(message: &str, mode: Mode, deck: &mut Deck) -> String {
    let letters = normalize(message);
    if letters.is_empty() {
        return String::new();
    }
    let keystream = Keystream::new(deck).generate(letters.len());
    letters
        .chars()
        .zip(keystream)
        .map(|(ch, key)| {
            let value = char_to_number(ch);
            let raw = match mode {
                Mode::Encrypt => value + key,
                Mode::Decrypt => value + 26 - key,
            };
            let reduced = if raw % 26 == 0 { 26 } else { raw % 26 };
            number_to_char(i32::from(reduced))
        })
        .collect()
}
