// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game change events and subscriptions.
use std::{fmt, time::Duration};

use pairs_cards::CardId;

use crate::PairCount;

/// An event emitted by the game after each state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new shuffled deck has replaced the old one.
    Reset {
        /// The number of pairs in the new deck.
        pair_count: PairCount,
    },
    /// A card has been turned face up.
    CardFlipped(CardId),
    /// Two face up cards have the same icon and are now matched.
    PairMatched(CardId, CardId),
    /// Two face up cards have different icons and will be turned face down.
    MismatchScheduled {
        /// The first card of the pair.
        first: CardId,
        /// The second card of the pair.
        second: CardId,
        /// When the cards will be turned face down.
        deadline: Duration,
    },
    /// A mismatched pair has been turned face down.
    MismatchResolved(CardId, CardId),
    /// All the pairs have been matched.
    GameWon {
        /// The number of turns it took.
        turns: u32,
    },
}

/// A subscription handle used to stop receiving events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Listener = Box<dyn FnMut(&GameEvent)>;

/// The game events listeners.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u32,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    /// Adds a listener.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Removes a listener, returns false if the listener was not found.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != len
    }

    /// Sends an event to all listeners in subscription order.
    pub fn emit(&mut self, event: GameEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}
