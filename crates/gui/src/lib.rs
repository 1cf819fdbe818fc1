// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pairs memory game GUI client.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod game_view;

pub mod gui;
pub use gui::{AppFrame, Config};
