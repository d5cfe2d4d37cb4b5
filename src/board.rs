/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, fs, path::Path};

use crate::{Error, Result};

/// A zero-based `(row, column)` pair on the board.
///
/// A [`Coord`] is plain arithmetic data: nothing prevents constructing one
/// outside the board, and direction vectors routinely produce such values.
/// Use [`Coord::in_bounds`] (or [`BoardLayout::label_at`], which checks for
/// you) before treating one as a real square.
///
/// # Example
/// ```
/// # use piecemeal::Coord;
/// let d5 = Coord::new(4, 3);
/// assert!(d5.in_bounds());
/// assert!(!Coord::new(-1, 3).in_bounds());
/// assert!(!Coord::new(4, 8).in_bounds());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    /// Creates a new [`Coord`] from a row and column.
    #[inline(always)]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Returns `true` if both components lie in `[0, 8)`.
    ///
    /// # Example
    /// ```
    /// # use piecemeal::Coord;
    /// assert!(Coord::new(0, 0).in_bounds());
    /// assert!(Coord::new(7, 7).in_bounds());
    /// assert!(!Coord::new(8, 0).in_bounds());
    /// ```
    #[inline(always)]
    pub const fn in_bounds(&self) -> bool {
        let size = BoardLayout::SIZE as i8;
        0 <= self.row && self.row < size && 0 <= self.col && self.col < size
    }

    /// Returns this [`Coord`] shifted by the given row and column deltas.
    ///
    /// No bounds checking is performed; the result may lie off the board.
    ///
    /// # Example
    /// ```
    /// # use piecemeal::Coord;
    /// assert_eq!(Coord::new(4, 3).offset(1, -2), Coord::new(5, 1));
    /// ```
    #[inline(always)]
    pub const fn offset(&self, rows: i8, cols: i8) -> Self {
        Self::new(self.row + rows, self.col + cols)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An 8x8 ordered grid of square labels, defining the only valid
/// correspondence between labels (like `"D5"`) and [`Coord`]s.
///
/// The grid is injected data: which rank row 0 corresponds to is decided
/// entirely by the layout resource, never by this crate's logic. The bundled
/// layout (see [`BoardLayout::standard`]) puts rank 1 at row 0, so `"D5"`
/// sits at `(4, 3)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    grid: Vec<Vec<String>>,
}

impl BoardLayout {
    /// Width and height of the board.
    pub const SIZE: usize = 8;

    /// The board layout bundled with the crate, with rank 1 at row 0.
    ///
    /// # Example
    /// ```
    /// # use piecemeal::{BoardLayout, Coord};
    /// let board = BoardLayout::standard();
    /// assert_eq!(board.coord_of("D5"), Some(Coord::new(4, 3)));
    /// assert_eq!(board.label_at(Coord::new(0, 0)), Some("A1"));
    /// ```
    pub fn standard() -> Self {
        Self::from_json(include_str!("../rules/board_matrix.json"))
            .expect("bundled board matrix is a valid 8x8 grid")
    }

    /// Loads a board layout from a JSON file on disk.
    ///
    /// The file must contain an array of 8 arrays of 8 strings. Read and
    /// parse failures are returned to the caller, never fatal.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading board layout from {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|e| e.with_path(path))
    }

    /// Parses a board layout from a JSON string, validating that the grid
    /// is exactly 8x8.
    pub fn from_json(text: &str) -> Result<Self> {
        let grid: Vec<Vec<String>> = serde_json::from_str(text)?;

        if grid.len() != Self::SIZE {
            return Err(Error::MalformedBoard {
                rows: grid.len(),
                cols: grid.first().map_or(0, Vec::len),
            });
        }
        if let Some(row) = grid.iter().find(|row| row.len() != Self::SIZE) {
            return Err(Error::MalformedBoard {
                rows: grid.len(),
                cols: row.len(),
            });
        }

        Ok(Self { grid })
    }

    /// Finds the [`Coord`] of the given square label, scanning the grid
    /// row-major and returning the first match.
    ///
    /// At 64 cells a linear scan is plenty; callers that care can build
    /// their own index from [`BoardLayout::squares`].
    ///
    /// # Example
    /// ```
    /// # use piecemeal::{BoardLayout, Coord};
    /// let board = BoardLayout::standard();
    /// assert_eq!(board.coord_of("A1"), Some(Coord::new(0, 0)));
    /// assert_eq!(board.coord_of("Z9"), None);
    /// ```
    pub fn coord_of(&self, label: &str) -> Option<Coord> {
        self.squares()
            .find(|(_, cell)| *cell == label)
            .map(|(coord, _)| coord)
    }

    /// Fetches the label at the given [`Coord`], or [`None`] if the
    /// coordinate lies off the board.
    ///
    /// # Example
    /// ```
    /// # use piecemeal::{BoardLayout, Coord};
    /// let board = BoardLayout::standard();
    /// assert_eq!(board.label_at(Coord::new(4, 3)), Some("D5"));
    /// assert_eq!(board.label_at(Coord::new(-1, -1)), None);
    /// ```
    pub fn label_at(&self, coord: Coord) -> Option<&str> {
        if !coord.in_bounds() {
            return None;
        }
        Some(self.grid[coord.row as usize][coord.col as usize].as_str())
    }

    /// Returns an iterator over all `(coordinate, label)` pairs in
    /// row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (Coord, &str)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (Coord::new(row as i8, col as i8), cell.as_str()))
        })
    }
}
