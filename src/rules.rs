/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{collections::HashMap, fmt, fs, path::Path};

use serde::{
    de::{MapAccess, SeqAccess, Visitor},
    Deserialize, Deserializer,
};

use crate::{BoardLayout, Direction, Error, Result};

/// How a single piece type moves, resolved from its JSON shape at load time.
///
/// Rule files use one of two shapes for `pieceActions`, and the distinction
/// is settled here, once, rather than re-examined on every expansion:
///
/// - a flat list of direction codes yields [`MoveRule::Sliding`]: the piece
///   travels along each direction for every magnitude up to `steps`;
/// - a map from a primary code to secondary codes yields
///   [`MoveRule::Composite`]: the piece steps one square along the primary
///   leg, then `steps` squares along each secondary leg (the L-shaped
///   knight move).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRule {
    /// Travels up to `steps` squares along each listed direction.
    Sliding {
        directions: Vec<Direction>,
        steps: u8,
    },
    /// One square along each primary leg, then `steps` squares along each
    /// of its secondary legs. Leg order follows the rule file.
    Composite {
        legs: Vec<(Direction, Vec<Direction>)>,
        steps: u8,
    },
}

impl MoveRule {
    /// The step count configured for this rule.
    #[inline(always)]
    pub const fn steps(&self) -> u8 {
        match self {
            Self::Sliding { steps, .. } | Self::Composite { steps, .. } => *steps,
        }
    }
}

/// The table of movement rules, keyed by piece-type name.
///
/// Loaded once and held immutably; lookups never touch the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleBook {
    rules: HashMap<String, MoveRule>,
}

impl RuleBook {
    /// The rule set bundled with the crate: king, queen, rook, bishop, and
    /// the jumping "horse".
    ///
    /// # Example
    /// ```
    /// # use piecemeal::RuleBook;
    /// let rules = RuleBook::standard();
    /// assert_eq!(rules.rule("king").unwrap().steps(), 1);
    /// assert!(rules.rule("dragon").is_err());
    /// ```
    pub fn standard() -> Self {
        Self::from_json(include_str!("../rules/chess_rules.json"))
            .expect("bundled chess rules are valid")
    }

    /// Loads a rule table from a JSON file on disk.
    ///
    /// Read and parse failures are returned to the caller, never fatal.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading movement rules from {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|e| e.with_path(path))
    }

    /// Parses a rule table from a JSON string.
    ///
    /// Step counts larger than the board size are clamped to it; on an 8x8
    /// board every count from 8 upward already means "slides to the edge".
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: HashMap<String, RawRule> = serde_json::from_str(text)?;
        let rules = raw
            .into_iter()
            .map(|(piece, rule)| (piece, rule.resolve()))
            .collect();
        Ok(Self { rules })
    }

    /// Fetches the rule for `piece`, or [`Error::UnknownPiece`] if the
    /// table has no entry for it.
    ///
    /// Piece names match exactly as written in the rule file.
    pub fn rule(&self, piece: &str) -> Result<&MoveRule> {
        self.rules
            .get(piece)
            .ok_or_else(|| Error::UnknownPiece(piece.to_string()))
    }

    /// Returns an iterator over all piece-type names in the table.
    pub fn pieces(&self) -> impl Iterator<Item = &str> + '_ {
        self.rules.keys().map(String::as_str)
    }
}

/// A rule entry as written in the JSON file, before its shape is resolved.
#[derive(Deserialize)]
struct RawRule {
    #[serde(rename = "pieceActions", alias = "PieceActions")]
    piece_actions: RawActions,
    steps: u32,
}

impl RawRule {
    fn resolve(self) -> MoveRule {
        // Rule files use a large step count to mean "slides to the edge of
        // the board". No direction can travel further than SIZE squares, so
        // clamping here keeps the coordinate arithmetic within i8 range.
        let steps = self.steps.min(BoardLayout::SIZE as u32) as u8;
        match self.piece_actions {
            RawActions::List(directions) => MoveRule::Sliding { directions, steps },
            RawActions::Map(legs) => MoveRule::Composite { legs, steps },
        }
    }
}

/// The two JSON shapes of `pieceActions`: a flat list of codes, or a map
/// from primary code to secondary codes.
enum RawActions {
    List(Vec<Direction>),
    Map(Vec<(Direction, Vec<Direction>)>),
}

impl<'de> Deserialize<'de> for RawActions {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActionsVisitor;

        impl<'de> Visitor<'de> for ActionsVisitor {
            type Value = RawActions;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a list of direction codes or a map of primary to secondary codes")
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut directions = Vec::new();
                while let Some(dir) = seq.next_element()? {
                    directions.push(dir);
                }
                Ok(RawActions::List(directions))
            }

            // Visiting the map entry by entry keeps the legs in file order,
            // which expansion relies on for deterministic output.
            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut legs = Vec::new();
                while let Some(entry) = map.next_entry()? {
                    legs.push(entry);
                }
                Ok(RawActions::Map(legs))
            }
        }

        deserializer.deserialize_any(ActionsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rules() {
        let rules = RuleBook::standard();
        assert_eq!(
            rules.rule("king").unwrap(),
            &MoveRule::Sliding {
                directions: Direction::ALL.to_vec(),
                steps: 1
            }
        );
        assert_eq!(rules.rule("queen").unwrap().steps(), 8);
        assert!(matches!(
            rules.rule("horse").unwrap(),
            MoveRule::Composite { steps: 2, .. }
        ));
    }

    #[test]
    fn test_unknown_piece_is_an_error() {
        let rules = RuleBook::standard();
        assert!(matches!(
            rules.rule("dragon"),
            Err(Error::UnknownPiece(name)) if name == "dragon"
        ));
    }

    #[test]
    fn test_composite_legs_keep_file_order() {
        let rules = RuleBook::from_json(
            r#"{ "horse": { "pieceActions": { "VT": ["HL", "HR"], "HL": ["VT"] }, "steps": 2 } }"#,
        )
        .unwrap();
        let MoveRule::Composite { legs, steps } = rules.rule("horse").unwrap() else {
            panic!("expected a composite rule");
        };
        assert_eq!(*steps, 2);
        assert_eq!(
            legs,
            &vec![
                (Direction::VT, vec![Direction::HL, Direction::HR]),
                (Direction::HL, vec![Direction::VT]),
            ]
        );
    }

    #[test]
    fn test_capitalized_field_name_is_accepted() {
        // Rule files in the wild carry both spellings of the field.
        let rules = RuleBook::from_json(
            r#"{ "rook": { "PieceActions": ["HL", "HR"], "steps": 8 } }"#,
        )
        .unwrap();
        assert_eq!(rules.rule("rook").unwrap().steps(), 8);
    }

    #[test]
    fn test_oversized_step_counts_are_clamped() {
        let rules = RuleBook::from_json(
            r#"{ "slider": { "pieceActions": ["VT"], "steps": 200 },
                 "hopper": { "pieceActions": { "VT": ["HL"] }, "steps": 4000000000 } }"#,
        )
        .unwrap();
        assert_eq!(rules.rule("slider").unwrap().steps(), 8);
        assert_eq!(rules.rule("hopper").unwrap().steps(), 8);
    }

    #[test]
    fn test_rejects_unknown_direction_code() {
        let res = RuleBook::from_json(r#"{ "rook": { "pieceActions": ["XX"], "steps": 8 } }"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(RuleBook::from_json("{"), Err(Error::Json(_))));
    }
}
