// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card icons.
use std::fmt;

/// The icon shown on a card face, two cards in a deck share each icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Icon {
    /// Apple
    Apple,
    /// Banana
    Banana,
    /// Watermelon
    Watermelon,
    /// Grapes
    Grapes,
    /// Strawberry
    Strawberry,
    /// Avocado
    Avocado,
    /// Lemon
    Lemon,
    /// Tangerine
    Tangerine,
    /// Cherries
    Cherries,
    /// Peach
    Peach,
}

impl Icon {
    /// All the icons in palette order, a game with `n` pairs uses the first `n`.
    pub const PALETTE: [Icon; 10] = [
        Icon::Apple,
        Icon::Banana,
        Icon::Watermelon,
        Icon::Grapes,
        Icon::Strawberry,
        Icon::Avocado,
        Icon::Lemon,
        Icon::Tangerine,
        Icon::Cherries,
        Icon::Peach,
    ];

    /// Returns the emoji for this icon.
    pub fn emoji(&self) -> &'static str {
        match self {
            Icon::Apple => "🍎",
            Icon::Banana => "🍌",
            Icon::Watermelon => "🍉",
            Icon::Grapes => "🍇",
            Icon::Strawberry => "🍓",
            Icon::Avocado => "🥑",
            Icon::Lemon => "🍋",
            Icon::Tangerine => "🍊",
            Icon::Cherries => "🍒",
            Icon::Peach => "🍑",
        }
    }

    /// A short fixed width label for terminals that cannot display emoji.
    pub fn label(&self) -> &'static str {
        match self {
            Icon::Apple => "APL",
            Icon::Banana => "BAN",
            Icon::Watermelon => "WML",
            Icon::Grapes => "GRP",
            Icon::Strawberry => "STR",
            Icon::Avocado => "AVO",
            Icon::Lemon => "LEM",
            Icon::Tangerine => "TAN",
            Icon::Cherries => "CHR",
            Icon::Peach => "PCH",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn palette_is_distinct() {
        let icons = Icon::PALETTE.iter().collect::<HashSet<_>>();
        assert_eq!(icons.len(), Icon::PALETTE.len());

        let emojis = Icon::PALETTE
            .iter()
            .map(|i| i.emoji())
            .collect::<HashSet<_>>();
        assert_eq!(emojis.len(), Icon::PALETTE.len());

        let labels = Icon::PALETTE
            .iter()
            .map(|i| i.label())
            .collect::<HashSet<_>>();
        assert_eq!(labels.len(), Icon::PALETTE.len());
        assert!(labels.iter().all(|l| l.len() == 3));
    }

    #[test]
    fn icon_to_string() {
        assert_eq!(Icon::Apple.to_string(), "🍎");
        assert_eq!(Icon::Banana.to_string(), "🍌");
        assert_eq!(Icon::Peach.to_string(), "🍑");
    }
}
