// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pairs egui app implementation.
use eframe::egui::*;
use rand::{SeedableRng, rngs::StdRng};

use pairs_core::{Game, PairCount};

use crate::game_view::GameView;

/// App configuration parameters.
#[derive(Debug, Default)]
pub struct Config {
    /// The pair count, if not set the last selected count is used.
    pub pair_count: Option<PairCount>,
    /// The game parameters.
    pub game: pairs_core::Config,
    /// Seed for the deck shuffles.
    pub seed: Option<u64>,
}

/// The UI main frame.
pub struct AppFrame {
    view: GameView,
}

impl AppFrame {
    /// The storage key for the selected pair count.
    pub const PAIR_COUNT_KEY: &'static str = "pair_count";

    /// Creates a new App instance.
    pub fn new(config: Config, cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_theme(Theme::Dark);

        log::info!("Creating new app with config: {config:?}");

        let Config {
            pair_count,
            game: mut game_config,
            seed,
        } = config;

        let stored = cc
            .storage
            .and_then(|s| eframe::get_value::<PairCount>(s, Self::PAIR_COUNT_KEY));
        if let Some(pair_count) = pair_count.or(stored) {
            game_config.pair_count = pair_count;
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut game = Game::with_rng(game_config, rng);

        // Repaint on any game change.
        let ctx = cc.egui_ctx.clone();
        game.subscribe(move |_| ctx.request_repaint());

        AppFrame {
            view: GameView::new(game),
        }
    }
}

impl eframe::App for AppFrame {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.view.update(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(
            storage,
            Self::PAIR_COUNT_KEY,
            &self.view.game().pair_count(),
        );
    }
}
