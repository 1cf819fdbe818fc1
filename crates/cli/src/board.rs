// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Board layout and cursor.

/// A cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up
    Up,
    /// Down
    Down,
    /// Left
    Left,
    /// Right
    Right,
}

/// The cards grid with the selected card position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    len: usize,
    columns: usize,
    cursor: usize,
}

impl Board {
    /// Creates a board for the given number of cards.
    pub fn new(len: usize) -> Self {
        // Smallest square that fits all cards.
        let mut columns = 1;
        while columns * columns < len {
            columns += 1;
        }

        Self {
            len,
            columns,
            cursor: 0,
        }
    }

    /// The number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.len.div_ceil(self.columns)
    }

    /// The selected card index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The row and column of a card index.
    pub fn position(&self, idx: usize) -> (usize, usize) {
        (idx / self.columns, idx % self.columns)
    }

    /// Moves the cursor, wrapping around the board edges.
    pub fn move_cursor(&mut self, dir: Direction) {
        if self.len == 0 {
            return;
        }

        let (row, col) = self.position(self.cursor);
        let rows = self.rows();

        // The last row may be shorter than the others.
        let row_len = |row: usize| (self.len - row * self.columns).min(self.columns);
        let col_len = |col: usize| rows - usize::from(col >= row_len(rows - 1));

        let (row, col) = match dir {
            Direction::Left => (row, (col + row_len(row) - 1) % row_len(row)),
            Direction::Right => (row, (col + 1) % row_len(row)),
            Direction::Up => ((row + col_len(col) - 1) % col_len(col), col),
            Direction::Down => ((row + 1) % col_len(col), col),
        };

        self.cursor = row * self.columns + col;
    }
}
