/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::PathBuf;

use clap::Parser;

/// Compute the squares a chess piece can reach from a starting square,
/// driven by a declarative JSON rule table.
#[derive(Debug, Clone, Parser)]
#[command(about, version)]
pub struct Cli {
    /// The piece type to expand, as named in the rule table (e.g. "king").
    pub piece: String,

    /// The starting square label (e.g. "D5").
    pub square: String,

    /// Directory containing chess_rules.json and board_matrix.json.
    ///
    /// If not set, the rule set and board layout bundled with the binary
    /// are used.
    #[arg(short, long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// If set, destinations will be printed in alphabetical order.
    ///
    /// By default, destinations follow the rule's direction order.
    #[arg(short, long, default_value = "false")]
    pub sort: bool,
}
