//! Minterms of a four-variable function and sets of minterms

use crate::*;

use bit_set::BitSet;
use delegate::delegate;
use std::fmt;
use std::str::FromStr;

/// Number of input variables of the functions handled by this crate.
pub const VARIABLE_COUNT: usize = 4;

/// Number of minterms (rows of the truth table) of a four-variable function.
pub const MINTERM_COUNT: usize = 1 << VARIABLE_COUNT;

/// The input variables, in the order of their bits in a minterm (most significant first).
pub static VARIABLES: [Variable; VARIABLE_COUNT] =
    [Variable::A, Variable::B, Variable::C, Variable::D];

/// One of the four input variables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variable {
    A,
    B,
    C,
    D,
}

impl Variable {
    /// Position of this variable in [VARIABLES], which is also its distance from the most significant bit
    pub fn index(self) -> usize {
        self as usize
    }

    /// Bit position of this variable in a minterm value (3 for A, 0 for D)
    pub fn bit_index(self) -> u32 {
        (VARIABLE_COUNT - 1 - self.index()) as u32
    }

    /// The letter used to display this variable
    pub fn name(self) -> char {
        match self {
            Variable::A => 'A',
            Variable::B => 'B',
            Variable::C => 'C',
            Variable::D => 'D',
        }
    }

    /// Find a variable from its letter
    pub fn from_name(c: char) -> Option<Self> {
        VARIABLES.iter().copied().find(|v| v.name() == c)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single row of the truth table, identified by its index in [0,15].
///
/// The bits of the index give the values of the variables A, B, C, D, most significant bit first.
/// A minterm can only be created through a checked conversion:
///
/// ```
/// use kmap::{Minterm, Variable};
///
/// let m = Minterm::new(0b1010).unwrap();
/// assert!(m.bit(Variable::A));
/// assert!(!m.bit(Variable::B));
/// assert!(Minterm::new(16).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Minterm(u8);

impl Minterm {
    /// Check the range of a raw value and wrap it
    pub fn new(value: u32) -> Result<Self, KmapError> {
        if (value as usize) < MINTERM_COUNT {
            Ok(Self(value as u8))
        } else {
            Err(KmapError::InvalidRange(value as i64))
        }
    }

    /// Iterate over all minterms in increasing order
    pub fn all() -> impl Iterator<Item = Minterm> {
        (0..MINTERM_COUNT as u8).map(Minterm)
    }

    pub(crate) fn from_bits(bits: u8) -> Self {
        Self(bits & (MINTERM_COUNT as u8 - 1))
    }

    /// Return the raw index of this minterm
    pub fn value(self) -> u8 {
        self.0
    }

    /// Value taken by a variable in this minterm
    pub fn bit(self, var: Variable) -> bool {
        (self.0 >> var.bit_index()) & 1 == 1
    }

    /// Cell of the Karnaugh map holding this minterm
    pub fn position(self) -> Coord {
        grid::position(self)
    }
}

impl TryFrom<u32> for Minterm {
    type Error = KmapError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Minterm {
    type Error = KmapError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map_err(|_| KmapError::InvalidRange(value))
            .and_then(Self::new)
    }
}

impl From<Minterm> for usize {
    fn from(m: Minterm) -> usize {
        m.0 as usize
    }
}

impl fmt::Display for Minterm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A set of minterms with efficient bitwise operations.
///
/// A MintermSet is an abstraction over [BitSet], providing a similar API.
/// It iterates over its minterms in increasing order.
///
/// ```
/// use kmap::{Minterm, MintermSet};
///
/// let mut set: MintermSet = "0, 1, 8 9".parse().unwrap();
/// set.insert(Minterm::new(3).unwrap());
/// assert_eq!(set.len(), 5);
/// assert_eq!(format!("{}", set), "{0, 1, 3, 8, 9}");
/// ```
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct MintermSet {
    minterms: BitSet,
}

impl MintermSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_capacity() -> Self {
        Self {
            minterms: BitSet::with_capacity(MINTERM_COUNT),
        }
    }

    /// The set of all sixteen minterms
    pub fn full() -> Self {
        Minterm::all().collect()
    }

    /// Build a set from raw values, rejecting values outside [0,15]
    pub fn try_from_values<I: IntoIterator<Item = u32>>(values: I) -> Result<Self, KmapError> {
        values.into_iter().map(Minterm::new).collect()
    }

    delegate! {
        to self.minterms {
            /// Return the number of minterms in this set
            pub fn len(&self) -> usize;
            /// Return whether this set is empty
            pub fn is_empty(&self) -> bool;
            /// Remove all minterms
            pub fn clear(&mut self);
        }
    }

    /// Add a minterm, return false if it was already present
    pub fn insert(&mut self, m: Minterm) -> bool {
        self.minterms.insert(m.into())
    }

    pub fn remove(&mut self, m: Minterm) -> bool {
        self.minterms.remove(m.into())
    }

    pub fn contains(&self, m: Minterm) -> bool {
        self.minterms.contains(m.into())
    }

    /// Add all minterms from the other set
    pub fn union_with(&mut self, other: &Self) {
        self.minterms.union_with(&other.minterms);
    }

    /// Retain only the minterms also included in the other set
    pub fn intersect_with(&mut self, other: &Self) {
        self.minterms.intersect_with(&other.minterms);
    }

    /// Remove all minterms from the other set
    pub fn difference_with(&mut self, other: &Self) {
        self.minterms.difference_with(&other.minterms);
    }

    /// Return true if this set contains all minterms of the other set
    pub fn is_superset(&self, other: &Self) -> bool {
        self.minterms.is_superset(&other.minterms)
    }

    /// Return true if the two sets have no common minterm
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.minterms.is_disjoint(&other.minterms)
    }

    /// Smallest minterm in this set
    pub fn first(&self) -> Option<Minterm> {
        self.iter().next()
    }

    pub fn iter(&self) -> Iter {
        self.into_iter()
    }
}

impl FromIterator<Minterm> for MintermSet {
    fn from_iter<I: IntoIterator<Item = Minterm>>(iter: I) -> Self {
        let mut set = MintermSet::with_capacity();
        set.extend(iter);
        set
    }
}

impl Extend<Minterm> for MintermSet {
    fn extend<T: IntoIterator<Item = Minterm>>(&mut self, iter: T) {
        for m in iter {
            self.insert(m);
        }
    }
}

/// Iterate over minterms in a [MintermSet]
pub struct Iter<'a>(bit_set::Iter<'a, u32>);

impl Iterator for Iter<'_> {
    type Item = Minterm;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|idx| Minterm::from_bits(idx as u8))
    }
}

impl<'a> IntoIterator for &'a MintermSet {
    type Item = Minterm;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.minterms.iter())
    }
}

impl fmt::Display for MintermSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, m) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", m)?;
        }
        write!(f, "}}")
    }
}

impl FromStr for MintermSet {
    type Err = KmapError;

    fn from_str(descr: &str) -> Result<Self, KmapError> {
        let values = parse::parse_minterm_list(descr)?;
        values.into_iter().map(Minterm::try_from).collect()
    }
}
