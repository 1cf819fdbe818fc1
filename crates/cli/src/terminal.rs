// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    cursor,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{self, Stylize},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use log::{debug, error, info};
use std::{cell::Cell, io, rc::Rc, time::Duration};
use tokio::time::Instant;

use pairs_core::{Card, Game, PairCount};

use crate::board::{Board, Direction};

/// A player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move(Direction),
    Flip,
    Reset,
    SetPairs(usize),
    Quit,
}

impl Command {
    fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let cmd = match key.code {
            KeyCode::Up | KeyCode::Char('w') => Command::Move(Direction::Up),
            KeyCode::Down | KeyCode::Char('s') => Command::Move(Direction::Down),
            KeyCode::Left | KeyCode::Char('a') => Command::Move(Direction::Left),
            KeyCode::Right | KeyCode::Char('d') => Command::Move(Direction::Right),
            KeyCode::Char(' ') | KeyCode::Enter => Command::Flip,
            KeyCode::Char('r') => Command::Reset,
            KeyCode::Char(c @ '1'..='3') => {
                let idx = c as usize - '1' as usize;
                Command::SetPairs(PairCount::PRESETS[idx].get())
            }
            KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
            _ => return None,
        };

        Some(cmd)
    }

    /// Applies this command to the game, returns false if the player quits.
    fn apply(self, game: &mut Game, board: &mut Board, now: Duration) -> bool {
        match self {
            Command::Move(dir) => board.move_cursor(dir),
            Command::Flip => {
                if let Some(card) = game.cards().get(board.cursor()) {
                    game.flip_card(card.id(), now);
                }
            }
            Command::Reset => {
                info!("Reset game");
                game.reset();
            }
            Command::SetPairs(pair_count) => {
                info!("Selected {pair_count} pairs");
                match game.set_pair_count(pair_count) {
                    Ok(()) => *board = Board::new(game.cards().len()),
                    Err(e) => error!("{e}"),
                }
            }
            Command::Quit => return false,
        }

        true
    }
}

/// Runs the terminal loop.
pub async fn run(mut game: Game) -> Result<()> {
    // Redraw after any game change.
    let dirty = Rc::new(Cell::new(true));
    let tx = dirty.clone();
    game.subscribe(move |_| tx.set(true));

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let res = play(&mut game, &dirty, &mut stdout).await;

    execute!(
        stdout,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        cursor::Show
    )?;
    disable_raw_mode()?;

    res
}

async fn play(game: &mut Game, dirty: &Cell<bool>, w: &mut impl io::Write) -> Result<()> {
    let start = Instant::now();
    let mut board = Board::new(game.cards().len());
    let mut reader = EventStream::new();

    loop {
        let timeout = game.poll(start.elapsed());

        if dirty.replace(false) {
            print_game(w, game, &board)?;
        }

        tokio::select! {
            // The pending mismatch deadline.
            _ = wait(timeout) => {},
            // We have received an event from the terminal.
            res = reader.next() => {
                let event = match res {
                    Some(event) => event?,
                    None => break,
                };

                match event {
                    Event::Key(key) => {
                        let Some(cmd) = Command::from_key(key) else {
                            continue;
                        };

                        debug!("Command {cmd:?}");

                        if !cmd.apply(game, &mut board, start.elapsed()) {
                            break;
                        }

                        // Cursor moves do not emit game events.
                        dirty.set(true);
                    }
                    Event::Resize(..) => dirty.set(true),
                    _ => {}
                }
            },
        };
    }

    Ok(())
}

async fn wait(timeout: Option<Duration>) {
    match timeout {
        Some(timeout) => tokio::time::sleep(timeout).await,
        None => std::future::pending().await,
    }
}

fn print_game(w: &mut impl io::Write, game: &Game, board: &Board) -> Result<()> {
    // Each card cell is 7 columns wide and 3 rows high.
    const CELL_LX: u16 = 8;
    const CELL_LY: u16 = 4;
    const TOP: u16 = 3;

    queue!(w, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    let status = if game.is_won() {
        format!("You won in {} turns!", game.turns())
    } else {
        format!(
            "Turns: {}  Pairs: {}/{}",
            game.turns(),
            game.matched_pairs(),
            game.pair_count()
        )
    };

    queue!(
        w,
        style::PrintStyledContent(status.as_str().bold()),
        cursor::MoveTo(0, 1),
        style::PrintStyledContent(
            "arrows/wasd move  space flip  r reset  1/2/3 pairs 3/6/10  q quit".dark_grey()
        )
    )?;

    for (idx, card) in game.cards().iter().enumerate() {
        let (row, col) = board.position(idx);
        let x = col as u16 * CELL_LX;
        let y = TOP + row as u16 * CELL_LY;
        print_card(w, card, x, y, idx == board.cursor())?;
    }

    w.flush()?;

    Ok(())
}

fn print_card(w: &mut impl io::Write, card: &Card, x: u16, y: u16, selected: bool) -> Result<()> {
    let label = if card.is_face_up() {
        card.icon().label()
    } else {
        "???"
    };

    let lines = ["+-----+".to_string(), format!("| {label} |"), "+-----+".to_string()];

    for (dy, line) in lines.iter().enumerate() {
        let mut text = if card.is_matched() {
            line.as_str().green()
        } else if card.is_face_up() {
            line.as_str().yellow()
        } else {
            line.as_str().blue()
        };

        if selected {
            text = text.reverse();
        }

        queue!(
            w,
            cursor::MoveTo(x, y + dy as u16),
            style::PrintStyledContent(text)
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn key_commands() {
        assert_eq!(
            Command::from_key(key(KeyCode::Up)),
            Some(Command::Move(Direction::Up))
        );
        assert_eq!(
            Command::from_key(key(KeyCode::Char('d'))),
            Some(Command::Move(Direction::Right))
        );
        assert_eq!(Command::from_key(key(KeyCode::Enter)), Some(Command::Flip));
        assert_eq!(Command::from_key(key(KeyCode::Char('r'))), Some(Command::Reset));
        assert_eq!(Command::from_key(key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(Command::from_key(key(KeyCode::Char('x'))), None);

        let sizes = ['1', '2', '3']
            .map(|c| match Command::from_key(key(KeyCode::Char(c))) {
                Some(Command::SetPairs(n)) => n,
                _ => 0,
            });
        assert_eq!(sizes, [3, 6, 10]);

        let mut release = key(KeyCode::Char(' '));
        release.kind = KeyEventKind::Release;
        assert_eq!(Command::from_key(release), None);
    }

    #[test]
    fn invalid_pair_count_keeps_playing() {
        let mut game = Game::new(pairs_core::Config::default());
        let mut board = Board::new(game.cards().len());
        board.move_cursor(Direction::Right);

        let now = Duration::ZERO;
        let ids = game.cards().iter().map(|c| c.id()).collect::<Vec<_>>();
        assert!(Command::SetPairs(PairCount::MAX + 1).apply(&mut game, &mut board, now));
        assert!(Command::SetPairs(0).apply(&mut game, &mut board, now));

        // Same deck and cursor after the errors.
        assert_eq!(game.pair_count().get(), 3);
        assert!(game.cards().iter().map(|c| c.id()).eq(ids));
        assert_eq!(board.cursor(), 1);

        assert!(Command::SetPairs(6).apply(&mut game, &mut board, now));
        assert_eq!(game.cards().len(), 12);
        assert_eq!(board, Board::new(12));

        assert!(!Command::Quit.apply(&mut game, &mut board, now));
    }

    #[test]
    fn print_board() {
        let game = Game::new(pairs_core::Config::default());
        let board = Board::new(game.cards().len());

        let mut out = Vec::new();
        print_game(&mut out, &game, &board).unwrap();

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("Turns: 0  Pairs: 0/3"));
        assert_eq!(text.matches("| ??? |").count(), 6);
    }
}
