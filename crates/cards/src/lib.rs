// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pairs memory game cards types.
//!
//! This crate defines the [Icon] palette used to decorate cards, the [Card]
//! type with its face-up and matched flags, and a [Deck] type that builds a
//! shuffled set of pairs:
//!
//! ```
//! # use pairs_cards::{Deck, Icon};
//! let deck = Deck::new_and_shuffled(&Icon::PALETTE[..3], &mut rand::rng());
//! assert_eq!(deck.len(), 6);
//! assert!(deck.iter().all(|c| !c.is_face_up() && !c.is_matched()));
//! ```
//!
//! Each card gets a [CardId] that is unique for the lifetime of the process,
//! so ids from a discarded deck never show up again in a new one.
//!
//! The **`egui`** feature exports the [CardPainter](egui::CardPainter) type to
//! paint cards faces and backs.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardId, Deck};

mod icon;
pub use icon::Icon;

#[cfg(feature = "egui")]
pub mod egui;
