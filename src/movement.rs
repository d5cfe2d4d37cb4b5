/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::Path;

use crate::{BoardLayout, Coord, Error, MoveRule, Result, RuleBook};

/// File name of the movement-rule resource inside a configuration directory.
pub const RULES_FILE: &str = "chess_rules.json";

/// File name of the board-layout resource inside a configuration directory.
pub const BOARD_FILE: &str = "board_matrix.json";

/// The expansion context: a board layout plus a rule table, loaded once and
/// held immutably.
///
/// Nothing in here mutates after construction, so a [`Movement`] can be
/// shared freely across threads and queried any number of times.
///
/// # Example
/// ```
/// # use piecemeal::Movement;
/// let movement = Movement::standard();
/// let moves = movement.reachable("king", "D5").unwrap();
/// assert_eq!(moves.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct Movement {
    board: BoardLayout,
    rules: RuleBook,
}

impl Movement {
    /// Creates a new expansion context from an already-loaded layout and
    /// rule table.
    pub fn new(board: BoardLayout, rules: RuleBook) -> Self {
        Self { board, rules }
    }

    /// The bundled board layout and rule set.
    pub fn standard() -> Self {
        Self::new(BoardLayout::standard(), RuleBook::standard())
    }

    /// Loads both configuration resources from a directory containing
    /// [`RULES_FILE`] and [`BOARD_FILE`].
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(Self::new(
            BoardLayout::from_path(dir.join(BOARD_FILE))?,
            RuleBook::from_path(dir.join(RULES_FILE))?,
        ))
    }

    /// The board layout backing this context.
    #[inline(always)]
    pub fn board(&self) -> &BoardLayout {
        &self.board
    }

    /// The rule table backing this context.
    #[inline(always)]
    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    /// Computes every square `piece` can reach from the square labeled
    /// `from`, in rule order.
    ///
    /// For a sliding rule, each direction is walked at every magnitude from
    /// 1 up to the rule's step count; a step count of 1 therefore yields
    /// single-step pieces like the king with no special casing. For a
    /// composite rule, each leg steps one square along its primary
    /// direction, then the step count along each secondary direction.
    ///
    /// Candidates that land off the board are silently dropped. An unknown
    /// piece type or square label is an error.
    ///
    /// # Example
    /// ```
    /// # use piecemeal::Movement;
    /// let movement = Movement::standard();
    /// let moves = movement.reachable("king", "A1").unwrap();
    /// assert_eq!(moves, ["B1", "A2", "B2"]);
    /// ```
    pub fn reachable(&self, piece: &str, from: &str) -> Result<Vec<String>> {
        let origin = self
            .board
            .coord_of(from)
            .ok_or_else(|| Error::UnknownSquare(from.to_string()))?;
        let rule = self.rules.rule(piece)?;
        log::debug!("expanding {piece} from {from} at {origin}");

        let mut moves = Vec::new();
        match rule {
            MoveRule::Sliding { directions, steps } => {
                for &direction in directions {
                    for magnitude in 1..=*steps {
                        self.collect(direction.apply(magnitude, origin), &mut moves);
                    }
                }
            }
            // A zero step count moves nothing, matching the sliding
            // shape's empty magnitude range; without the guard the
            // zero-length secondary leg would emit the intermediate square.
            MoveRule::Composite { steps: 0, .. } => {}
            MoveRule::Composite { legs, steps } => {
                for (primary, secondaries) in legs {
                    // The intermediate square is not bounds-checked; only
                    // the final destination has to land on the board.
                    let mid = primary.apply(1, origin);
                    for &direction in secondaries {
                        self.collect(direction.apply(*steps, mid), &mut moves);
                    }
                }
            }
        }

        log::trace!("{piece} at {from}: {moves:?}");
        Ok(moves)
    }

    /// Appends the label of `candidate` to `moves` if it lies on the board.
    fn collect(&self, candidate: Coord, moves: &mut Vec<String>) {
        if let Some(label) = self.board.label_at(candidate) {
            moves.push(label.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_king_in_the_middle() {
        let movement = Movement::standard();
        let moves = movement.reachable("king", "D5").unwrap();
        // One square per direction, in rule order.
        assert_eq!(moves, ["C5", "E5", "D6", "D4", "C6", "E6", "C4", "E4"]);
    }

    #[test]
    fn test_king_in_the_corner() {
        let movement = Movement::standard();
        assert_eq!(movement.reachable("king", "A1").unwrap(), ["B1", "A2", "B2"]);
        assert_eq!(movement.reachable("king", "H8").unwrap(), ["G8", "H7", "G7"]);
    }

    #[test]
    fn test_unknown_square_label() {
        let movement = Movement::standard();
        assert!(matches!(
            movement.reachable("king", "Z9"),
            Err(Error::UnknownSquare(label)) if label == "Z9"
        ));
    }

    #[test]
    fn test_unknown_piece_type() {
        let movement = Movement::standard();
        assert!(matches!(
            movement.reachable("dragon", "D5"),
            Err(Error::UnknownPiece(_))
        ));
    }

    #[test]
    fn test_never_returns_off_board_squares() {
        let movement = Movement::standard();
        for piece in ["king", "queen", "rook", "bishop", "horse"] {
            for (_, label) in movement.board().squares().collect::<Vec<_>>() {
                for dest in movement.reachable(piece, label).unwrap() {
                    assert!(
                        movement.board().coord_of(&dest).is_some(),
                        "{piece} at {label} produced off-board {dest}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_huge_step_count_clips_at_the_edge() {
        let rules = RuleBook::from_json(
            r#"{ "slider": { "pieceActions": ["VT", "HL"], "steps": 200 } }"#,
        )
        .unwrap();
        let movement = Movement::new(BoardLayout::standard(), rules);
        assert_eq!(
            movement.reachable("slider", "D5").unwrap(),
            ["D6", "D7", "D8", "C5", "B5", "A5"]
        );
    }

    #[test]
    fn test_zero_steps_moves_nothing() {
        let rules = RuleBook::from_json(
            r#"{ "slider": { "pieceActions": ["VT", "HR"], "steps": 0 },
                 "hopper": { "pieceActions": { "VT": ["HL"] }, "steps": 0 } }"#,
        )
        .unwrap();
        let movement = Movement::new(BoardLayout::standard(), rules);
        // Neither shape may emit anything, in particular not the hopper's
        // intermediate square D6.
        assert_eq!(movement.reachable("slider", "D5").unwrap(), Vec::<String>::new());
        assert_eq!(movement.reachable("hopper", "D5").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_idempotent() {
        let movement = Movement::standard();
        let first = movement.reachable("queen", "C3").unwrap();
        let second = movement.reachable("queen", "C3").unwrap();
        assert_eq!(first, second);
    }
}
