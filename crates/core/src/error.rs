// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game errors.
use std::num::ParseIntError;
use thiserror::Error;

/// Errors returned when configuring a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The pair count is zero or there are not enough icons for it.
    #[error("invalid pair count {count}, must be between 1 and {max}")]
    InvalidPairCount {
        /// The requested count.
        count: usize,
        /// The maximum count given the icons palette.
        max: usize,
    },
    /// The pair count is not a number.
    #[error("invalid pair count: {0}")]
    ParsePairCount(#[from] ParseIntError),
}

/// Game result type.
pub type Result<T> = std::result::Result<T, GameError>;
