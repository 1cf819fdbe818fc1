// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pairs memory game state and rules shared by the game front ends.
//!
//! The [Game] type owns a shuffled deck and applies the flip rules, front ends
//! forward player input to it and re-render on the [GameEvent]s it emits:
//!
//! ```
//! # use std::time::Duration;
//! # use pairs_core::{Config, Flip, Game};
//! let mut game = Game::new(Config::default());
//! let first = game.cards()[0].id();
//! assert_eq!(game.flip_card(first, Duration::ZERO), Flip::Revealed);
//! ```
//!
//! A mismatched pair is turned face down by [Game::poll] once the configured
//! delay has elapsed, time is passed in by the caller as the elapsed time since
//! any fixed epoch.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod config;
pub use config::{Config, PairCount};

pub mod error;
pub use error::{GameError, Result};

pub mod event;
pub use event::{GameEvent, SubscriptionId};

pub mod game;
pub use game::{Flip, Game, Ignore};

// Reexport cards types.
pub use pairs_cards::{Card, CardId, Deck, Icon};
