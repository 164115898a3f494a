//! Placement of minterms on the 4x4 Karnaugh map

use crate::*;

use log::debug;
use std::fmt;

/// Size of each side of the map.
pub const SIDE: usize = 4;

/// Reflected binary sequence used on both axes: the cell at index `i` holds the 2-bit value `GRAY_CODE[i]`.
///
/// Two neighbouring cells (including the last and first ones) differ by a single bit.
pub static GRAY_CODE: [u8; SIDE] = [0b00, 0b01, 0b11, 0b10];

/// Coordinates of a cell in the map.
///
/// Rows are indexed by the variables A and B, columns by C and D.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate, wrapping around the edges of the map
    pub fn wrapped(row: usize, col: usize) -> Self {
        Self {
            row: row % SIDE,
            col: col % SIDE,
        }
    }

    /// Minterm stored in this cell
    pub fn minterm(self) -> Minterm {
        inverse(self)
    }

    pub(crate) fn index(self) -> usize {
        self.row * SIDE + self.col
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

fn gray_index(bits: u8) -> usize {
    match bits & 0b11 {
        0b00 => 0,
        0b01 => 1,
        0b11 => 2,
        _ => 3,
    }
}

/// Find the cell of a minterm.
///
/// The two most significant bits (AB) select the row and the two others (CD) select the column,
/// each of them through the reflected binary sequence [GRAY_CODE].
///
/// ```
/// use kmap::{position, Coord, Minterm};
///
/// let m = Minterm::new(0b1110).unwrap();
/// assert_eq!(position(m), Coord { row: 2, col: 3 });
/// ```
pub fn position(m: Minterm) -> Coord {
    let bits = m.value();
    Coord {
        row: gray_index(bits >> 2),
        col: gray_index(bits),
    }
}

/// Find the minterm stored in a cell (inverse of [position]).
pub fn inverse(coord: Coord) -> Minterm {
    let c = Coord::wrapped(coord.row, coord.col);
    Minterm::from_bits((GRAY_CODE[c.row] << 2) | GRAY_CODE[c.col])
}

/// State of a cell in the map
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// The function is false
    #[default]
    Empty,
    /// The function is true
    True,
    /// The value of the function is not constrained
    DontCare,
}

impl Cell {
    /// Return true if a grouping can include this cell
    pub fn is_coverable(self) -> bool {
        !matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "0"),
            Cell::True => write!(f, "1"),
            Cell::DontCare => write!(f, "X"),
        }
    }
}

/// The 4x4 Karnaugh map of a four-variable function.
///
/// It is built once from the sets of minterms and don't-care terms, and is read-only afterwards.
///
/// ```
/// use kmap::{Cell, Coord, Grid, MintermSet};
/// # use kmap::KmapError;
/// # fn main() -> Result<(), KmapError> {
///
/// let minterms: MintermSet = "0, 1, 8, 9".parse()?;
/// let dont_cares: MintermSet = "2, 3".parse()?;
/// let grid = Grid::build(&minterms, &dont_cares)?;
///
/// assert_eq!(grid.cell(Coord { row: 0, col: 1 }), Cell::True);
/// assert_eq!(grid.cell(Coord { row: 0, col: 2 }), Cell::DontCare);
/// assert_eq!(grid.cell(Coord { row: 1, col: 1 }), Cell::Empty);
///
/// // Overlapping sets are rejected
/// assert!(Grid::build(&minterms, &minterms).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [[Cell; SIDE]; SIDE],
}

impl Grid {
    /// Fill a new map, failing if a value is both a minterm and a don't-care term
    pub fn build(minterms: &MintermSet, dont_cares: &MintermSet) -> Result<Self, KmapError> {
        let mut overlap = minterms.clone();
        overlap.intersect_with(dont_cares);
        if let Some(m) = overlap.first() {
            return Err(KmapError::OverlappingSets(m.value()));
        }
        Ok(Self::fill(minterms, dont_cares))
    }

    /// Fill a new map from sets which are known to be disjoint
    pub(crate) fn fill(minterms: &MintermSet, dont_cares: &MintermSet) -> Self {
        let mut grid = Grid::default();
        for m in minterms {
            grid.set(position(m), Cell::True);
        }
        for m in dont_cares {
            grid.set(position(m), Cell::DontCare);
        }
        debug!(
            "grid: {} minterms, {} don't-cares",
            minterms.len(),
            dont_cares.len()
        );
        grid
    }

    fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    /// State of a cell, coordinates wrap around the edges
    pub fn cell(&self, coord: Coord) -> Cell {
        let c = Coord::wrapped(coord.row, coord.col);
        self.cells[c.row][c.col]
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        (0..SIDE).flat_map(move |row| {
            (0..SIDE).map(move |col| {
                let coord = Coord { row, col };
                (coord, self.cell(coord))
            })
        })
    }

    /// Collect the minterms of all cells in a given state
    pub fn minterms_in(&self, state: Cell) -> MintermSet {
        self.iter()
            .filter(|(_, c)| *c == state)
            .map(|(coord, _)| inverse(coord))
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AB\\CD")?;
        for bits in GRAY_CODE {
            write!(f, " {:02b}", bits)?;
        }
        writeln!(f)?;
        for (row, bits) in GRAY_CODE.iter().enumerate() {
            write!(f, "   {:02b}", bits)?;
            for col in 0..SIDE {
                write!(f, "  {}", self.cells[row][col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
