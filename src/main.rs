/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use anyhow::Context;
use clap::Parser;
use piecemeal::{Cli, Movement};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let movement = match &cli.config_dir {
        Some(dir) => Movement::from_dir(dir)
            .with_context(|| format!("failed to load configuration from {}", dir.display()))?,
        None => Movement::standard(),
    };

    let mut moves = movement.reachable(&cli.piece, &cli.square)?;
    if cli.sort {
        moves.sort();
    }

    println!("{}", moves.join(" "));
    Ok(())
}
