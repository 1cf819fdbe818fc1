// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;
    use pairs_core::PairCount;
    use std::time::Duration;

    #[derive(Debug, Parser)]
    struct Cli {
        /// The number of pairs, defaults to the last selected one.
        #[arg(long, short)]
        pairs: Option<PairCount>,
        /// How long a mismatched pair stays visible in milliseconds.
        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,
        /// Seed for the cards shuffle.
        #[arg(long)]
        seed: Option<u64>,
        /// The configuration storage key.
        #[arg(long, short)]
        storage: Option<String>,
    }

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let init_size = [800.0, 640.0];
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(init_size)
            .with_min_inner_size([360.0, 400.0])
            .with_title("Pairs"),
        ..Default::default()
    };

    let cli = Cli::parse();

    let config = pairs_gui::Config {
        pair_count: cli.pairs,
        game: pairs_core::Config {
            mismatch_delay: Duration::from_millis(cli.delay_ms),
            ..Default::default()
        },
        seed: cli.seed,
    };

    let app_name = cli
        .storage
        .map(|s| format!("pairs-{s}"))
        .unwrap_or_else(|| "pairs".to_string());

    eframe::run_native(
        &app_name,
        native_options,
        Box::new(|cc| Ok(Box::new(pairs_gui::AppFrame::new(config, cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("canvas")
            .expect("Failed to find canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("canvas was not a HtmlCanvasElement");

        let config = pairs_gui::Config::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                Default::default(),
                Box::new(|cc| Ok(Box::new(pairs_gui::AppFrame::new(config, cc)))),
            )
            .await
            .expect("failed to start eframe");
    });
}
