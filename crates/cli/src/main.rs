// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pairs memory game terminal client.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Duration;

use pairs_core::{Config, Game, PairCount};

pub mod board;
pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of pairs.
    #[clap(long, short, default_value_t = PairCount::default())]
    pairs: PairCount,
    /// How long a mismatched pair stays visible in milliseconds.
    #[clap(long, default_value_t = 1000)]
    delay_ms: u64,
    /// Seed for the cards shuffle.
    #[clap(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, enable them with RUST_LOG and redirect stderr to a file.
    env_logger::builder()
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let config = Config {
        pair_count: cli.pairs,
        mismatch_delay: Duration::from_millis(cli.delay_ms),
    };

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    terminal::run(Game::with_rng(config, rng)).await
}
