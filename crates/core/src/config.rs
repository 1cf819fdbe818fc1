// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game configuration.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::Duration};

use pairs_cards::Icon;

use crate::{GameError, Result};

/// The number of pairs in a game.
///
/// A pair count is always between one and the icons palette size, so a deck
/// built from it always has two cards for each icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PairCount(u8);

impl PairCount {
    /// The largest pair count.
    pub const MAX: usize = Icon::PALETTE.len();

    /// The pair counts offered by the size selection controls.
    pub const PRESETS: [PairCount; 3] = [PairCount(3), PairCount(6), PairCount(10)];

    /// Creates a pair count checking it fits the icons palette.
    pub fn new(count: usize) -> Result<Self> {
        if (1..=Self::MAX).contains(&count) {
            Ok(Self(count as u8))
        } else {
            Err(GameError::InvalidPairCount {
                count,
                max: Self::MAX,
            })
        }
    }

    /// The number of pairs.
    pub fn get(&self) -> usize {
        self.0 as usize
    }

    /// The icons used by a game with this number of pairs.
    pub fn icons(&self) -> &'static [Icon] {
        let palette: &'static [Icon] = &Icon::PALETTE;
        &palette[..self.get()]
    }
}

impl Default for PairCount {
    fn default() -> Self {
        Self::PRESETS[0]
    }
}

impl fmt::Display for PairCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for PairCount {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value as usize)
    }
}

impl From<PairCount> for u8 {
    fn from(value: PairCount) -> Self {
        value.0
    }
}

impl FromStr for PairCount {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim().parse()?)
    }
}

/// Game configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// The number of pairs in a new game.
    pub pair_count: PairCount,
    /// How long a mismatched pair stays visible.
    pub mismatch_delay: Duration,
}

impl Config {
    /// The default mismatch delay.
    pub const MISMATCH_DELAY: Duration = Duration::from_secs(1);
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pair_count: PairCount::default(),
            mismatch_delay: Self::MISMATCH_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_count_bounds() {
        assert!(matches!(
            PairCount::new(0),
            Err(GameError::InvalidPairCount { count: 0, max: 10 })
        ));
        assert!(matches!(
            PairCount::new(11),
            Err(GameError::InvalidPairCount { count: 11, max: 10 })
        ));

        for n in 1..=PairCount::MAX {
            let pc = PairCount::new(n).unwrap();
            assert_eq!(pc.get(), n);
            assert_eq!(pc.icons().len(), n);
        }

        let presets = PairCount::PRESETS.map(|pc| pc.get());
        assert_eq!(presets, [3, 6, 10]);
        assert_eq!(PairCount::default().get(), 3);
    }

    #[test]
    fn pair_count_parse() {
        assert_eq!("6".parse::<PairCount>().unwrap().get(), 6);
        assert_eq!(" 10 ".parse::<PairCount>().unwrap().get(), 10);
        assert!(matches!(
            "12".parse::<PairCount>(),
            Err(GameError::InvalidPairCount { .. })
        ));
        assert!(matches!(
            "six".parse::<PairCount>(),
            Err(GameError::ParsePairCount(_))
        ));

        let err = PairCount::new(42).unwrap_err();
        assert_eq!(err.to_string(), "invalid pair count 42, must be between 1 and 10");
    }

    #[test]
    fn pair_count_serde() {
        let pc = PairCount::new(6).unwrap();
        let json = serde_json::to_string(&pc).unwrap();
        assert_eq!(json, "6");
        assert_eq!(serde_json::from_str::<PairCount>(&json).unwrap(), pc);

        // Out of range values are rejected.
        assert!(serde_json::from_str::<PairCount>("11").is_err());
    }
}
