/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Board geometry: coordinates and the label-to-coordinate layout table.
mod board;

/// Command-line interface definition.
mod cli;

/// The eight fixed movement directions and their coordinate vectors.
mod direction;

/// Typed errors for configuration loading and move expansion.
mod error;

/// Expansion of movement rules into reachable squares.
mod movement;

/// Declarative movement rules and their JSON representation.
mod rules;

pub use board::*;
pub use cli::*;
pub use direction::*;
pub use error::*;
pub use movement::*;
pub use rules::*;
