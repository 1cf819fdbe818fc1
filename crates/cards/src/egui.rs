// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards painting.
use eframe::egui::{Align2, Color32, FontFamily, FontId, Rect, Stroke, StrokeKind, Ui, vec2};

use crate::Card;

/// Paints cards faces and backs.
#[derive(Debug, Clone)]
pub struct CardPainter {
    /// The card face fill color.
    pub face: Color32,
    /// The card back fill color.
    pub back: Color32,
    /// The cards corner radius.
    pub corner_radius: f32,
}

impl Default for CardPainter {
    fn default() -> Self {
        Self {
            face: Color32::WHITE,
            back: Color32::from_rgb(30, 90, 200),
            corner_radius: 10.0,
        }
    }
}

impl CardPainter {
    /// Paints a card in the given rect, face up cards show their icon.
    pub fn paint(&self, ui: &mut Ui, rect: Rect, card: &Card) {
        if card.is_face_up() {
            self.paint_face(ui, rect, card);
        } else {
            self.paint_back(ui, rect);
        }
    }

    fn paint_face(&self, ui: &mut Ui, rect: Rect, card: &Card) {
        // Shadow
        ui.painter().rect(
            rect.translate(vec2(2.0, 3.0)),
            self.corner_radius,
            Color32::from_black_alpha(90),
            Stroke::NONE,
            StrokeKind::Inside,
        );

        ui.painter().rect(
            rect,
            self.corner_radius,
            self.face,
            Stroke::NONE,
            StrokeKind::Inside,
        );

        let font_size = rect.width().min(rect.height()) * 0.45;
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            card.icon().emoji(),
            FontId::new(font_size, FontFamily::Proportional),
            Color32::BLACK,
        );
    }

    fn paint_back(&self, ui: &mut Ui, rect: Rect) {
        ui.painter().rect(
            rect,
            self.corner_radius,
            self.back,
            Stroke::NONE,
            StrokeKind::Inside,
        );

        // Inner border
        let stroke = Stroke::new(2.0, self.back.lerp_to_gamma(Color32::WHITE, 0.4));
        ui.painter().rect_stroke(
            rect.shrink2(vec2(8.0, 8.0)),
            self.corner_radius / 2.0,
            stroke,
            StrokeKind::Inside,
        );
    }
}
