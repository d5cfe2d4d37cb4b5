/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::{Coord, Error};

/// One of the eight fixed movement directions a rule may reference.
///
/// Each code denotes a coordinate delta scaled by a step count `s`:
///
/// ```text
/// HL: (0, -s)   HR: (0, +s)    horizontal left / right
/// VT: (+s, 0)   VB: (-s, 0)    vertical top / bottom
/// UL: (+s, -s)  UR: (+s, +s)   upper-left / upper-right diagonal
/// DL: (-s, -s)  DR: (-s, +s)   lower-left / lower-right diagonal
/// ```
///
/// "Up" means increasing row; which rank that is on a real board depends
/// entirely on the injected [`BoardLayout`](crate::BoardLayout).
///
/// These eight vectors are exhaustive and fixed; rule files referencing any
/// other token are rejected at load time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Direction {
    HL,
    HR,
    VT,
    VB,
    UL,
    UR,
    DL,
    DR,
}

impl Direction {
    /// All eight directions, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::HL,
        Self::HR,
        Self::VT,
        Self::VB,
        Self::UL,
        Self::UR,
        Self::DL,
        Self::DR,
    ];

    /// Applies this direction's vector at magnitude `steps` to `origin`.
    ///
    /// Pure delta arithmetic: the result may lie off the board and must be
    /// bounds-checked by the caller.
    ///
    /// # Example
    /// ```
    /// # use piecemeal::{Coord, Direction};
    /// let d5 = Coord::new(4, 3);
    /// assert_eq!(Direction::HL.apply(1, d5), Coord::new(4, 2));
    /// assert_eq!(Direction::UR.apply(3, d5), Coord::new(7, 6));
    /// assert_eq!(Direction::VB.apply(8, d5), Coord::new(-4, 3));
    /// ```
    #[inline(always)]
    pub const fn apply(&self, steps: u8, origin: Coord) -> Coord {
        let s = steps as i8;
        match self {
            Self::HL => origin.offset(0, -s),
            Self::HR => origin.offset(0, s),
            Self::VT => origin.offset(s, 0),
            Self::VB => origin.offset(-s, 0),
            Self::UL => origin.offset(s, -s),
            Self::UR => origin.offset(s, s),
            Self::DL => origin.offset(-s, -s),
            Self::DR => origin.offset(-s, s),
        }
    }

    /// The two-letter code token for this direction, as written in rule
    /// files.
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::HL => "HL",
            Self::HR => "HR",
            Self::VT => "VT",
            Self::VB => "VB",
            Self::UL => "UL",
            Self::UR => "UR",
            Self::DL => "DL",
            Self::DR => "DR",
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    /// Parses a direction from its code token.
    ///
    /// # Example
    /// ```
    /// # use piecemeal::Direction;
    /// assert_eq!("UR".parse::<Direction>().unwrap(), Direction::UR);
    /// assert!("XX".parse::<Direction>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.code() == s)
            .ok_or_else(|| Error::UnknownDirection(s.to_string()))
    }
}

impl fmt::Display for Direction {
    /// Calls [`Direction::code`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.code().fmt(f)
    }
}

impl fmt::Debug for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.code().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_deltas() {
        let origin = Coord::new(4, 3);
        for steps in 0..8u8 {
            let s = steps as i8;
            assert_eq!(Direction::HL.apply(steps, origin), Coord::new(4, 3 - s));
            assert_eq!(Direction::HR.apply(steps, origin), Coord::new(4, 3 + s));
            assert_eq!(Direction::VT.apply(steps, origin), Coord::new(4 + s, 3));
            assert_eq!(Direction::VB.apply(steps, origin), Coord::new(4 - s, 3));
            assert_eq!(
                Direction::UL.apply(steps, origin),
                Coord::new(4 + s, 3 - s)
            );
            assert_eq!(
                Direction::UR.apply(steps, origin),
                Coord::new(4 + s, 3 + s)
            );
            assert_eq!(
                Direction::DL.apply(steps, origin),
                Coord::new(4 - s, 3 - s)
            );
            assert_eq!(
                Direction::DR.apply(steps, origin),
                Coord::new(4 - s, 3 + s)
            );
        }
    }

    #[test]
    fn test_zero_steps_is_identity() {
        let origin = Coord::new(2, 6);
        for dir in Direction::ALL {
            assert_eq!(dir.apply(0, origin), origin);
        }
    }

    #[test]
    fn test_code_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(dir.code().parse::<Direction>().unwrap(), dir);
        }
    }

    #[test]
    fn test_deserializes_from_token() {
        let dirs: Vec<Direction> = serde_json::from_str(r#"["HL", "DR"]"#).unwrap();
        assert_eq!(dirs, vec![Direction::HL, Direction::DR]);
        assert!(serde_json::from_str::<Direction>(r#""XX""#).is_err());
    }
}
