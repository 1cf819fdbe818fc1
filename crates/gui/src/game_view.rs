// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game view.
use eframe::egui::*;
use log::{error, info};
use std::time::Duration;

use pairs_cards::{CardId, egui::CardPainter};
use pairs_core::{Flip, Game, PairCount};

/// The game board and its controls.
pub struct GameView {
    game: Game,
    painter: CardPainter,
}

impl GameView {
    const CARD_SIZE: Vec2 = vec2(110.0, 150.0);
    const SPACING: f32 = 5.0;
    const BG_COLOR: Color32 = Color32::from_rgb(250, 225, 160);
    const SIZE_COLOR: Color32 = Color32::from_rgb(230, 190, 20);
    const RESET_COLOR: Color32 = Color32::from_rgb(40, 170, 60);
    const TEXT_FONT: FontId = FontId::new(16.0, FontFamily::Proportional);

    /// Creates a new [GameView].
    pub fn new(game: Game) -> Self {
        Self {
            game,
            painter: CardPainter::default(),
        }
    }

    /// The game shown by this view.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Process a view update.
    pub fn update(&mut self, ctx: &Context) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time));
        if let Some(left) = self.game.poll(now) {
            ctx.request_repaint_after(left);
        }

        TopBottomPanel::top("controls")
            .frame(Frame::NONE.fill(Self::BG_COLOR).inner_margin(5.0))
            .show(ctx, |ui| self.paint_controls(ui));

        CentralPanel::default()
            .frame(Frame::NONE.fill(Self::BG_COLOR).inner_margin(5.0))
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink(false)
                    .show(ui, |ui| self.paint_cards(ui, now));
            });
    }

    fn paint_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let mut selected = None;

            ui.visuals_mut().widgets.inactive.weak_bg_fill = Self::SIZE_COLOR;
            ComboBox::from_id_salt("pair_count")
                .selected_text(
                    RichText::new("Choose Size")
                        .font(Self::TEXT_FONT)
                        .color(Color32::WHITE),
                )
                .show_ui(ui, |ui| {
                    for preset in PairCount::PRESETS {
                        let current = preset == self.game.pair_count();
                        if ui
                            .selectable_label(current, format!("{preset} Pairs"))
                            .clicked()
                        {
                            selected = Some(preset);
                        }
                    }
                });

            let btn = Button::new(
                RichText::new("Reset Game")
                    .font(Self::TEXT_FONT)
                    .color(Color32::WHITE),
            )
            .fill(Self::RESET_COLOR)
            .corner_radius(15.0);

            if ui.add(btn).clicked() {
                info!("Reset game");
                self.game.reset();
            }

            if let Some(preset) = selected {
                info!("Selected {preset} pairs");
                if let Err(e) = self.game.set_pair_count(preset.get()) {
                    error!("{e}");
                }
            }

            ui.separator();

            let status = if self.game.is_won() {
                format!("You won in {} turns!", self.game.turns())
            } else {
                format!(
                    "Turns: {}  Pairs: {}/{}",
                    self.game.turns(),
                    self.game.matched_pairs(),
                    self.game.pair_count()
                )
            };

            ui.label(
                RichText::new(status)
                    .font(Self::TEXT_FONT)
                    .color(Color32::from_gray(40)),
            );
        });
    }

    fn paint_cards(&mut self, ui: &mut Ui, now: Duration) {
        // Matched cards are removed from the board.
        let visible = self
            .game
            .cards()
            .iter()
            .filter(|c| !c.is_matched())
            .collect::<Vec<_>>();

        let rects = card_rects(
            visible.len(),
            ui.available_width(),
            Self::CARD_SIZE,
            Self::SPACING,
        );

        let height = rects.last().map(|r| r.bottom()).unwrap_or_default();
        let (board, _) =
            ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());

        let mut clicked: Option<CardId> = None;
        for (card, rect) in visible.iter().zip(rects) {
            let rect = rect.translate(board.min.to_vec2());
            let response = ui.interact(rect, Id::new(("card", card.id())), Sense::click());
            if response.clicked() {
                clicked = Some(card.id());
            }

            self.painter.paint(ui, rect, card);
        }

        if let Some(id) = clicked {
            if let Flip::Ignored(reason) = self.game.flip_card(id, now) {
                log::debug!("Flip of card {id} ignored: {reason:?}");
            }
        }
    }
}

/// Lays out cards in rows that fit the given width, rects are relative to the
/// board top left corner.
fn card_rects(count: usize, width: f32, size: Vec2, spacing: f32) -> Vec<Rect> {
    let columns = (((width + spacing) / (size.x + spacing)).floor() as usize).max(1);

    // Center the grid horizontally.
    let used = columns.min(count) as f32 * (size.x + spacing) - spacing;
    let left = ((width - used) / 2.0).max(0.0);

    (0..count)
        .map(|idx| {
            let (row, col) = (idx / columns, idx % columns);
            let min = pos2(
                left + col as f32 * (size.x + spacing),
                row as f32 * (size.y + spacing),
            );
            Rect::from_min_size(min, size)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_rows() {
        let size = vec2(100.0, 150.0);

        // Three columns fit in 320 points.
        let rects = card_rects(7, 320.0, size, 10.0);
        assert_eq!(rects.len(), 7);
        assert_eq!(rects[0].min, pos2(0.0, 0.0));
        assert_eq!(rects[2].min, pos2(220.0, 0.0));
        assert_eq!(rects[3].min, pos2(0.0, 160.0));
        assert_eq!(rects[6].min, pos2(0.0, 320.0));

        // Narrow boards use a single column.
        let rects = card_rects(2, 50.0, size, 10.0);
        assert_eq!(rects[1].min, pos2(0.0, 160.0));

        assert!(card_rects(0, 320.0, size, 10.0).is_empty());
    }

    #[test]
    fn layout_centered() {
        let size = vec2(100.0, 150.0);
        let rects = card_rects(2, 420.0, size, 10.0);
        assert_eq!(rects[0].min, pos2(105.0, 0.0));
        assert_eq!(rects[1].min, pos2(215.0, 0.0));
    }
}
