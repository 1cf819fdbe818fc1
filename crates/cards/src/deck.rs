// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck definitions.
use rand::prelude::*;
use std::{fmt, sync::atomic};

use crate::Icon;

/// A unique card identifier.
///
/// Ids come from a process wide counter so a card keeps its id for its whole
/// lifetime and ids are never reused by a later deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(u64);

impl CardId {
    /// Create a new unique card id.
    pub fn new_id() -> CardId {
        static LAST_ID: atomic::AtomicU64 = atomic::AtomicU64::new(1);
        CardId(LAST_ID.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A memory game card.
#[derive(Clone, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    icon: Icon,
    face_up: bool,
    matched: bool,
}

impl Card {
    /// Creates a face down card with a new id.
    pub fn new(icon: Icon) -> Self {
        Self {
            id: CardId::new_id(),
            icon,
            face_up: false,
            matched: false,
        }
    }

    /// This card id.
    pub fn id(&self) -> CardId {
        self.id
    }

    /// This card icon.
    pub fn icon(&self) -> Icon {
        self.icon
    }

    /// Checks if the card icon is visible.
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Checks if this card has been paired.
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Checks if this card is face up and waiting for its pair.
    pub fn is_pending(&self) -> bool {
        self.face_up && !self.matched
    }

    /// Turns the card face up.
    pub fn flip_up(&mut self) {
        self.face_up = true;
    }

    /// Turns the card face down, matched cards stay face up.
    pub fn flip_down(&mut self) {
        if !self.matched {
            self.face_up = false;
        }
    }

    /// Marks this card as matched, a matched card is always face up.
    pub fn set_matched(&mut self) {
        self.face_up = true;
        self.matched = true;
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match (self.face_up, self.matched) {
            (_, true) => "matched",
            (true, false) => "up",
            (false, false) => "down",
        };

        write!(f, "Card({} {} {})", self.id, self.icon.label(), state)
    }
}

/// A deck with two cards for each icon.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a new shuffled deck with a pair of cards for each icon.
    pub fn new_and_shuffled<R: Rng + ?Sized>(icons: &[Icon], rng: &mut R) -> Self {
        let mut cards = icons
            .iter()
            .flat_map(|&icon| [Card::new(icon), Card::new(icon)])
            .collect::<Vec<_>>();
        cards.shuffle(rng);
        Self { cards }
    }

    /// The number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in deck order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates the cards in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Gets a card by id.
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Gets a mutable card by id.
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// Returns the cards that are face up and not matched.
    pub fn pending(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.is_pending())
    }

    /// Checks if all the cards in the deck have been matched.
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::{HashMap, HashSet};
    use rand::rngs::StdRng;

    #[test]
    fn deck_pairs() {
        let mut rng = StdRng::seed_from_u64(7);

        for n in 1..=Icon::PALETTE.len() {
            let deck = Deck::new_and_shuffled(&Icon::PALETTE[..n], &mut rng);
            assert_eq!(deck.len(), 2 * n);

            let mut counts = HashMap::<Icon, usize>::default();
            for card in &deck {
                *counts.entry(card.icon()).or_default() += 1;
            }

            assert_eq!(counts.len(), n);
            assert!(counts.values().all(|&c| c == 2));

            // Check uniqueness.
            let ids = deck.iter().map(|c| c.id()).collect::<HashSet<_>>();
            assert_eq!(ids.len(), deck.len());
        }
    }

    #[test]
    fn new_ids_across_decks() {
        let mut rng = StdRng::seed_from_u64(11);
        let d1 = Deck::new_and_shuffled(&Icon::PALETTE, &mut rng);
        let d2 = Deck::new_and_shuffled(&Icon::PALETTE, &mut rng);

        let ids = d1.iter().map(|c| c.id()).collect::<HashSet<_>>();
        assert!(d2.iter().all(|c| !ids.contains(&c.id())));
    }

    #[test]
    fn card_flags() {
        let mut card = Card::new(Icon::Lemon);
        assert!(!card.is_face_up() && !card.is_matched() && !card.is_pending());

        card.flip_up();
        assert!(card.is_pending());

        card.flip_down();
        assert!(!card.is_face_up());

        // Matched cards cannot be turned face down.
        card.set_matched();
        card.flip_down();
        assert!(card.is_face_up() && card.is_matched() && !card.is_pending());
    }

    #[test]
    fn deck_lookup() {
        let mut deck = Deck::new_and_shuffled(&Icon::PALETTE[..3], &mut rand::rng());
        let id = deck.cards()[4].id();

        deck.get_mut(id).unwrap().flip_up();
        assert!(deck.get(id).unwrap().is_face_up());
        assert_eq!(deck.pending().count(), 1);
        assert!(!deck.all_matched());

        assert!(deck.get(CardId::new_id()).is_none());
        assert!(Deck::default().is_empty());
    }
}
