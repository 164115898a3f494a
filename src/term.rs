//! Product terms derived from groups of minterms

use crate::*;

use std::fmt;
use std::str::FromStr;

/// A variable or its negation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    pub var: Variable,
    pub positive: bool,
}

impl Literal {
    pub fn new(var: Variable, positive: bool) -> Self {
        Self { var, positive }
    }

    /// Check if a minterm satisfies this literal
    pub fn accepts(&self, m: Minterm) -> bool {
        m.bit(self.var) == self.positive
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.positive {
            true => write!(f, "{}", self.var),
            false => write!(f, "{}'", self.var),
        }
    }
}

/// A product (AND) of literals, with at most one literal per variable.
///
/// The literals are ordered as the variables (A to D). A term without literal
/// is the constant function 1.
///
/// ```
/// use kmap::{MintermSet, Term};
///
/// let minterms: MintermSet = "0, 2, 8, 10".parse().unwrap();
/// let term = Term::from_minterms(&minterms);
/// assert_eq!(format!("{}", term), "B'D'");
/// assert_eq!(term.literal_count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Term {
    literals: Vec<Literal>,
}

impl Term {
    /// Build a term from literals, rejecting repeated variables.
    pub fn with_literals<I: IntoIterator<Item = Literal>>(literals: I) -> Result<Self, KmapError> {
        let mut literals: Vec<Literal> = literals.into_iter().collect();
        literals.sort_unstable();
        for pair in literals.windows(2) {
            if pair[0].var == pair[1].var {
                let descr = literals.iter().map(|l| l.to_string()).collect::<String>();
                return Err(ParseError::RepeatedVariable(pair[0].var.name(), descr).into());
            }
        }
        Ok(Self { literals })
    }

    /// Find the literals shared by all minterms of the set.
    ///
    /// A variable taking the same value in all minterms gives a literal, other variables are eliminated.
    /// The set should not be empty: an empty set gives the constant 1, as does the full set.
    pub fn from_minterms(minterms: &MintermSet) -> Self {
        let first = match minterms.first() {
            None => return Self::default(),
            Some(m) => m,
        };
        let literals = VARIABLES
            .iter()
            .filter(|var| minterms.iter().all(|m| m.bit(**var) == first.bit(**var)))
            .map(|var| Literal::new(*var, first.bit(*var)))
            .collect();
        Self { literals }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Number of literals in this term
    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }

    /// Return true for the constant term (no literal)
    pub fn is_constant(&self) -> bool {
        self.literals.is_empty()
    }

    /// Check if the term is true for a given minterm
    pub fn contains(&self, m: Minterm) -> bool {
        self.literals.iter().all(|l| l.accepts(m))
    }

    /// All minterms for which this term is true
    pub fn minterms(&self) -> MintermSet {
        Minterm::all().filter(|m| self.contains(*m)).collect()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "1");
        }
        for l in &self.literals {
            write!(f, "{}", l)?;
        }
        Ok(())
    }
}

impl FromStr for Term {
    type Err = KmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<SopExpr>()? {
            SopExpr::One => Ok(Term::default()),
            SopExpr::Sum(mut terms) if terms.len() == 1 => Ok(terms.remove(0)),
            _ => Err(KmapError::InvalidExpression),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn term(minterms: &str) -> String {
        let set: MintermSet = minterms.parse().unwrap();
        Term::from_minterms(&set).to_string()
    }

    #[test]
    fn derive_literals() {
        assert_eq!(term("0"), "A'B'C'D'");
        assert_eq!(term("15"), "ABCD");
        assert_eq!(term("0, 2, 8, 10"), "B'D'");
        assert_eq!(term("1, 5, 9, 13"), "C'D");
        assert_eq!(term("0, 1, 8, 9, 2, 3, 10, 11"), "B'");
        assert_eq!(term("6, 7, 14, 15"), "BC");
        assert_eq!(term("0,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15"), "1");
    }

    #[test]
    fn term_contents() {
        let set: MintermSet = "5, 7, 13, 15".parse().unwrap();
        let t = Term::from_minterms(&set);
        assert_eq!(t.literal_count(), 2);
        assert_eq!(t.minterms(), set);
        assert!(t.contains(Minterm::new(7).unwrap()));
        assert!(!t.contains(Minterm::new(6).unwrap()));
        assert!(Term::default().is_constant());
    }

    #[test]
    fn build_and_parse() -> Result<(), KmapError> {
        let t = Term::with_literals(vec![
            Literal::new(Variable::D, false),
            Literal::new(Variable::A, true),
        ])?;
        assert_eq!(t.to_string(), "AD'");
        assert_eq!("AD'".parse::<Term>()?, t);
        assert_eq!("1".parse::<Term>()?, Term::default());

        let repeated = Term::with_literals(vec![
            Literal::new(Variable::B, false),
            Literal::new(Variable::B, true),
        ]);
        assert!(matches!(
            repeated,
            Err(KmapError::Parse(ParseError::RepeatedVariable('B', _)))
        ));
        assert!("AB + C".parse::<Term>().is_err());
        Ok(())
    }
}
