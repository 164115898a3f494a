//! Rectangular groupings of cells and their enumeration on a map

use crate::*;

use log::{debug, trace};
use slab::Slab;
use std::collections::HashMap;
use std::fmt;

/// Shapes of the rectangles which can form a valid grouping.
///
/// Each shape is a rectangle of `height x width` cells, with power-of-two sides.
/// When anchored near the border of the map, the rectangle wraps around the edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Single,
    HorizontalPair,
    VerticalPair,
    Square,
    HorizontalQuad,
    VerticalQuad,
    /// Two adjacent full rows
    RowOctet,
    /// Two adjacent full columns
    ColumnOctet,
}

/// All shapes, tested in this order for each anchor cell
pub static SHAPES: [Shape; 8] = [
    Shape::Single,
    Shape::HorizontalPair,
    Shape::VerticalPair,
    Shape::Square,
    Shape::HorizontalQuad,
    Shape::VerticalQuad,
    Shape::RowOctet,
    Shape::ColumnOctet,
];

impl Shape {
    /// Number of rows and columns covered by this shape
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            Shape::Single => (1, 1),
            Shape::HorizontalPair => (1, 2),
            Shape::VerticalPair => (2, 1),
            Shape::Square => (2, 2),
            Shape::HorizontalQuad => (1, grid::SIDE),
            Shape::VerticalQuad => (grid::SIDE, 1),
            Shape::RowOctet => (2, grid::SIDE),
            Shape::ColumnOctet => (grid::SIDE, 2),
        }
    }

    /// Build the grouping of this shape with its top-left corner on the anchor cell
    pub fn anchored_at(self, anchor: Coord) -> Grouping {
        let (height, width) = self.dimensions();
        (0..height)
            .flat_map(|dr| (0..width).map(move |dc| (dr, dc)))
            .map(|(dr, dc)| Coord::wrapped(anchor.row + dr, anchor.col + dc))
            .collect()
    }
}

/// A set of cells forming one candidate product term.
///
/// The cells are kept sorted and unique: two groupings with the same cells are equal,
/// regardless of the order in which the cells were listed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Grouping {
    cells: Vec<Coord>,
}

impl Grouping {
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Test if all cells of this grouping can be covered in the map.
    ///
    /// A grouping is valid if all cells are true or don't-care, and if a single cell is not a don't-care.
    pub fn is_valid_in(&self, grid: &Grid) -> bool {
        match self.cells.as_slice() {
            [] => false,
            [single] => grid.cell(*single) == Cell::True,
            cells => cells.iter().all(|c| grid.cell(*c).is_coverable()),
        }
    }

    /// Decode the cells into the set of covered minterms
    pub fn covered_minterms(&self) -> MintermSet {
        self.cells.iter().map(|c| grid::inverse(*c)).collect()
    }

    /// Product term matching the covered minterms
    pub fn term(&self) -> Term {
        Term::from_minterms(&self.covered_minterms())
    }
}

impl FromIterator<Coord> for Grouping {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut cells: Vec<Coord> = iter
            .into_iter()
            .map(|c| Coord::wrapped(c.row, c.col))
            .collect();
        cells.sort_unstable();
        cells.dedup();
        Self { cells }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

/// Collection of unique groupings, identified by their index in the collection.
///
/// Groupings are stored in an arena in insertion order, a secondary index
/// rejects the insertion of a grouping with the same cells as an existing one.
#[derive(Clone, Default, Debug)]
pub struct Groupings {
    arena: Slab<Grouping>,
    index: HashMap<Grouping, usize>,
}

impl Groupings {
    /// Enumerate all valid groupings of a map.
    ///
    /// Every shape is anchored on every cell, the cells are wrapped around the edges of the map,
    /// and the candidate is kept if it is valid in the map. Groupings contained in a larger valid
    /// grouping are kept as well.
    ///
    /// ```
    /// use kmap::{Grid, Groupings, MintermSet};
    /// # use kmap::KmapError;
    /// # fn main() -> Result<(), KmapError> {
    ///
    /// let grid = Grid::build(&"0, 2, 8, 10".parse()?, &MintermSet::new())?;
    /// let groupings = Groupings::enumerate(&grid);
    ///
    /// // 4 single cells, 4 pairs wrapping around an edge and the four corners
    /// assert_eq!(groupings.len(), 9);
    /// # Ok(())
    /// # }
    /// ```
    pub fn enumerate(grid: &Grid) -> Self {
        let mut groupings = Groupings::default();
        for (anchor, _) in grid.iter() {
            for shape in SHAPES {
                let candidate = shape.anchored_at(anchor);
                if candidate.is_valid_in(grid) {
                    groupings.insert(candidate);
                }
            }
        }
        debug!("enumerated {} groupings", groupings.len());
        groupings
    }

    /// Add a grouping if it is new, return its index
    pub fn insert(&mut self, grouping: Grouping) -> usize {
        if let Some(idx) = self.index.get(&grouping) {
            return *idx;
        }
        trace!("new grouping {}", grouping);
        let idx = self.arena.insert(grouping.clone());
        self.index.insert(grouping, idx);
        idx
    }

    pub fn get(&self, idx: usize) -> Option<&Grouping> {
        self.arena.get(idx)
    }

    /// Test if a grouping with the same cells is already present
    pub fn contains(&self, grouping: &Grouping) -> bool {
        self.index.contains_key(grouping)
    }

    /// Iterate over (index, grouping) pairs in insertion order
    pub fn iter(&self) -> slab::Iter<'_, Grouping> {
        self.arena.iter()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::grouping::*;
    use test_log::test;

    fn grid(minterms: &str, dont_cares: &str) -> Grid {
        let minterms: MintermSet = minterms.parse().unwrap();
        let dont_cares: MintermSet = dont_cares.parse().unwrap();
        Grid::build(&minterms, &dont_cares).unwrap()
    }

    #[test]
    fn shapes_wrap_around() {
        let g = Shape::Square.anchored_at(Coord { row: 3, col: 3 });
        let corners: Grouping = vec![
            Coord { row: 0, col: 0 },
            Coord { row: 0, col: 3 },
            Coord { row: 3, col: 0 },
            Coord { row: 3, col: 3 },
        ]
        .into_iter()
        .collect();
        assert_eq!(g, corners);
        assert_eq!(g.covered_minterms(), "0, 2, 8, 10".parse::<MintermSet>().unwrap());

        let octet = Shape::ColumnOctet.anchored_at(Coord { row: 2, col: 3 });
        assert_eq!(octet.len(), 8);
        assert_eq!(
            octet.covered_minterms(),
            "0,2,4,6,8,10,12,14".parse::<MintermSet>().unwrap()
        );

        for shape in SHAPES {
            let (h, w) = shape.dimensions();
            assert_eq!(shape.anchored_at(Coord { row: 1, col: 2 }).len(), h * w);
            assert!((h * w).is_power_of_two());
        }
    }

    #[test]
    fn equality_ignores_order() {
        let a: Grouping = vec![Coord { row: 1, col: 0 }, Coord { row: 0, col: 0 }]
            .into_iter()
            .collect();
        let b: Grouping = vec![Coord { row: 0, col: 0 }, Coord::wrapped(5, 4)]
            .into_iter()
            .collect();
        assert_eq!(a, b);

        let mut groupings = Groupings::default();
        let i = groupings.insert(a);
        assert_eq!(groupings.insert(b.clone()), i);
        assert_eq!(groupings.len(), 1);
        assert!(groupings.contains(&b));
    }

    #[test]
    fn dont_care_never_alone() {
        let g = grid("0", "1");
        let groupings = Groupings::enumerate(&g);
        // the single minterm and its pair with the don't-care
        assert_eq!(groupings.len(), 2);
        for (_, grouping) in groupings.iter() {
            assert!(grouping.covered_minterms().contains(Minterm::new(0).unwrap()));
        }
    }

    #[test]
    fn only_valid_groupings() {
        let g = grid("5, 6, 9, 13, 15", "1, 7, 14");
        let groupings = Groupings::enumerate(&g);
        assert!(!groupings.is_empty());
        for (_, grouping) in groupings.iter() {
            assert!(grouping.is_valid_in(&g));
            assert!(grouping.len().is_power_of_two());
        }

        // C'D: the column 01 is fully covered
        let column = Shape::VerticalQuad.anchored_at(Coord { row: 0, col: 1 });
        assert!(groupings.contains(&column));
        // the whole map is never valid here
        let octet = Shape::RowOctet.anchored_at(Coord { row: 1, col: 0 });
        assert!(!groupings.contains(&octet));
    }

    #[test]
    fn enumeration_counts() {
        assert_eq!(Groupings::enumerate(&grid("", "")).len(), 0);
        assert_eq!(Groupings::enumerate(&grid("7", "")).len(), 1);
        assert_eq!(Groupings::enumerate(&grid("0, 5, 10, 15", "")).len(), 4);
        assert_eq!(Groupings::enumerate(&grid("0, 1, 8, 9", "2, 3, 10, 11")).len(), 23);
        assert_eq!(
            Groupings::enumerate(&grid("0,1,2,3,4,5,6,7", "8,9,10,11,12,13,14,15")).len(),
            72
        );
    }
}
