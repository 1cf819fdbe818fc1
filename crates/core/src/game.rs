// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game state and flip rules.
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use std::time::Duration;

use pairs_cards::{Card, CardId, Deck};

use crate::{Config, GameEvent, PairCount, Result, SubscriptionId, event::Listeners};

/// The outcome of a flip request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flip {
    /// The request didn't change the game state.
    Ignored(Ignore),
    /// The card is the first of a turn and is now face up.
    Revealed,
    /// The card matches the other face up card.
    Matched,
    /// The card doesn't match the other face up card, both will be turned face
    /// down after the mismatch delay.
    Mismatched,
}

/// Why a flip request has been ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignore {
    /// A mismatched pair is waiting to be turned face down.
    Processing,
    /// The card is already face up or matched.
    FaceUp,
    /// There is no card with this id in the deck.
    UnknownCard,
}

/// A mismatched pair waiting to be turned face down.
#[derive(Debug, Clone, Copy)]
struct Mismatch {
    first: CardId,
    second: CardId,
    deadline: Duration,
}

/// The memory game state.
///
/// All mutations go through [Game::reset], [Game::set_pair_count],
/// [Game::flip_card] and [Game::poll], and each of them notifies subscribers
/// with one or more [GameEvent]s.
#[derive(Debug)]
pub struct Game {
    config: Config,
    deck: Deck,
    processing: bool,
    mismatch: Option<Mismatch>,
    turns: u32,
    rng: StdRng,
    listeners: Listeners,
}

impl Game {
    /// Creates a new game with a deck shuffled using OS randomness.
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a new game with the given random generator.
    pub fn with_rng(config: Config, rng: StdRng) -> Self {
        let mut game = Self {
            config,
            deck: Deck::default(),
            processing: false,
            mismatch: None,
            turns: 0,
            rng,
            listeners: Listeners::default(),
        };

        game.reset();
        game
    }

    /// Replaces the deck with a new shuffled deck.
    ///
    /// A pending mismatch is dropped together with the old cards.
    pub fn reset(&mut self) {
        let pair_count = self.config.pair_count;
        self.deck = Deck::new_and_shuffled(pair_count.icons(), &mut self.rng);
        self.processing = false;
        self.mismatch = None;
        self.turns = 0;

        info!("New game with {pair_count} pairs");

        self.listeners.emit(GameEvent::Reset { pair_count });
    }

    /// Sets the number of pairs and starts a new game.
    ///
    /// If the count is not valid the current game is left untouched.
    pub fn set_pair_count(&mut self, count: usize) -> Result<()> {
        self.config.pair_count = PairCount::new(count)?;
        self.reset();
        Ok(())
    }

    /// Flips a card face up and checks it against the other face up card.
    ///
    /// The `now` argument is the time since the driver epoch, it is used to set
    /// the deadline for turning a mismatched pair face down.
    pub fn flip_card(&mut self, id: CardId, now: Duration) -> Flip {
        if self.processing {
            return Flip::Ignored(Ignore::Processing);
        }

        let Some(card) = self.deck.get(id) else {
            return Flip::Ignored(Ignore::UnknownCard);
        };

        if card.is_face_up() {
            return Flip::Ignored(Ignore::FaceUp);
        }

        let icon = card.icon();
        let other = self.deck.pending().map(|c| (c.id(), c.icon())).next();

        self.update_card(id, Card::flip_up);
        debug!("Flipped card {id} {}", icon.label());
        self.listeners.emit(GameEvent::CardFlipped(id));

        let Some((other_id, other_icon)) = other else {
            return Flip::Revealed;
        };

        self.processing = true;
        self.turns += 1;

        if other_icon == icon {
            self.update_card(other_id, Card::set_matched);
            self.update_card(id, Card::set_matched);
            self.processing = false;

            debug!("Matched cards {other_id} {id}");
            self.listeners.emit(GameEvent::PairMatched(other_id, id));

            if self.is_won() {
                info!("Game won in {} turns", self.turns);
                self.listeners.emit(GameEvent::GameWon { turns: self.turns });
            }

            Flip::Matched
        } else {
            let deadline = now + self.config.mismatch_delay;
            self.mismatch = Some(Mismatch {
                first: other_id,
                second: id,
                deadline,
            });

            debug!("Mismatched cards {other_id} {id}");
            self.listeners.emit(GameEvent::MismatchScheduled {
                first: other_id,
                second: id,
                deadline,
            });

            Flip::Mismatched
        }
    }

    /// Turns a mismatched pair face down if its deadline has passed.
    ///
    /// Returns the time left before the pending mismatch deadline, or `None` if
    /// there is nothing left to wait for.
    pub fn poll(&mut self, now: Duration) -> Option<Duration> {
        let mismatch = self.mismatch?;

        if now < mismatch.deadline {
            return Some(mismatch.deadline - now);
        }

        self.update_card(mismatch.first, Card::flip_down);
        self.update_card(mismatch.second, Card::flip_down);

        self.mismatch = None;
        self.processing = false;

        debug!("Turned down cards {} {}", mismatch.first, mismatch.second);
        self.listeners
            .emit(GameEvent::MismatchResolved(mismatch.first, mismatch.second));

        None
    }

    /// Registers a listener for game events.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Removes a listener, returns false if the listener was not found.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// The cards in deck order.
    pub fn cards(&self) -> &[Card] {
        self.deck.cards()
    }

    /// Gets a card by id.
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.get(id)
    }

    /// The number of pairs in this game.
    pub fn pair_count(&self) -> PairCount {
        self.config.pair_count
    }

    /// Checks if a mismatched pair is waiting to be turned face down.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// The deadline of the pending mismatch if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.mismatch.map(|m| m.deadline)
    }

    /// The number of turns, a turn is complete when two cards are face up.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The number of matched pairs.
    pub fn matched_pairs(&self) -> usize {
        self.deck.iter().filter(|c| c.is_matched()).count() / 2
    }

    /// Checks if all the pairs have been matched.
    pub fn is_won(&self) -> bool {
        !self.deck.is_empty() && self.deck.all_matched()
    }

    fn update_card(&mut self, id: CardId, f: impl FnOnce(&mut Card)) {
        if let Some(card) = self.deck.get_mut(id) {
            f(card);
        }
    }
}
