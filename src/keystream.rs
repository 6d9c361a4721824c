use crate::card::Card;
use crate::deck::Deck;

/// Stateful keystream generator driving a [`Deck`].
///
/// Every value drawn advances the deck permanently; there is no way to peek
/// without consuming. Callers that need to replay a keystream must keep a
/// copy of the original deck.
pub struct Keystream<'a> {
    deck: &'a mut Deck,
}

impl<'a> Keystream<'a> {
    pub fn new(deck: &'a mut Deck) -> Self {
        Self { deck }
    }

    /// Runs one full cycle: move joker A down 1, joker B down 2, triple cut,
    /// count cut, then read the output card. Returns the raw output value
    /// (1-52), or `None` when the cycle lands on a joker (a miss).
    pub fn advance(&mut self) -> Option<u8> {
        self.deck.move_joker(Card::JokerA, 1);
        self.deck.move_joker(Card::JokerB, 2);
        self.deck.triple_cut();
        self.deck.count_cut();
        self.deck.output_card()
    }

    /// Draws the next keystream value in 1-26, cycling past misses. Values
    /// above 26 fold down by 26, so 26 itself passes through and 0 never
    /// occurs.
    pub fn next_value(&mut self) -> u8 {
        loop {
            if let Some(v) = self.advance() {
                return if v > 26 { v - 26 } else { v };
            }
        }
    }

    /// Draws exactly `n` keystream values.
    pub fn generate(&mut self, n: usize) -> Vec<u8> {
        (0..n).map(|_| self.next_value()).collect()
    }
}
