//! Minimization entry point and sum-of-products expressions

use crate::*;

use log::{debug, info, warn};
use std::fmt;
use std::str::FromStr;

/// A Boolean function given as a sum of products.
///
/// The terms of a sum are kept sorted by their textual form, which gives a canonical display.
/// The constant functions are represented separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SopExpr {
    /// The constant false function
    Zero,
    /// The constant true function
    One,
    /// A disjunction of product terms
    Sum(Vec<Term>),
}

impl SopExpr {
    /// Build a sum of products, sorting the terms and dropping duplicates.
    ///
    /// An empty list gives the constant 0, a constant term absorbs all other terms.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        let mut keyed: Vec<(String, Term)> =
            terms.into_iter().map(|t| (t.to_string(), t)).collect();
        if keyed.iter().any(|(_, t)| t.is_constant()) {
            return SopExpr::One;
        }
        if keyed.is_empty() {
            return SopExpr::Zero;
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        keyed.dedup_by(|a, b| a.0 == b.0);
        SopExpr::Sum(keyed.into_iter().map(|(_, t)| t).collect())
    }

    /// Product terms of the sum (empty for constants)
    pub fn terms(&self) -> &[Term] {
        match self {
            SopExpr::Sum(terms) => terms,
            _ => &[],
        }
    }

    /// Total number of literals
    pub fn literal_count(&self) -> usize {
        self.terms().iter().map(Term::literal_count).sum()
    }

    /// Check if the expression is true for a given minterm
    pub fn eval(&self, m: Minterm) -> bool {
        match self {
            SopExpr::Zero => false,
            SopExpr::One => true,
            SopExpr::Sum(terms) => terms.iter().any(|t| t.contains(m)),
        }
    }

    /// All minterms for which the expression is true
    pub fn minterms(&self) -> MintermSet {
        Minterm::all().filter(|m| self.eval(*m)).collect()
    }
}

impl fmt::Display for SopExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SopExpr::Zero => write!(f, "0"),
            SopExpr::One => write!(f, "1"),
            SopExpr::Sum(terms) => {
                for (i, t) in terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{}", t)?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for SopExpr {
    type Err = KmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_sop(s)
    }
}

/// A four-variable function defined by its minterms and don't-care terms.
///
/// The two sets are guaranteed to be disjoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Function {
    minterms: MintermSet,
    dont_cares: MintermSet,
}

impl Function {
    /// Validate raw values and build a function.
    ///
    /// Values must be in the range [0,15] and no value can be both a minterm and a don't-care term.
    /// Repeated values are merged.
    pub fn new<M, D>(minterms: M, dont_cares: D) -> Result<Self, KmapError>
    where
        M: IntoIterator,
        M::Item: Into<i64>,
        D: IntoIterator,
        D::Item: Into<i64>,
    {
        let minterms = to_set(minterms)?;
        let dont_cares = to_set(dont_cares)?;
        Self::with_sets(minterms, dont_cares)
    }

    /// Build a function from two sets of minterms, which must be disjoint
    pub fn with_sets(minterms: MintermSet, dont_cares: MintermSet) -> Result<Self, KmapError> {
        let mut overlap = minterms.clone();
        overlap.intersect_with(&dont_cares);
        match overlap.first() {
            Some(m) => Err(KmapError::OverlappingSets(m.value())),
            None => Ok(Self {
                minterms,
                dont_cares,
            }),
        }
    }

    pub fn minterms(&self) -> &MintermSet {
        &self.minterms
    }

    pub fn dont_cares(&self) -> &MintermSet {
        &self.dont_cares
    }

    /// The Karnaugh map of this function
    pub fn grid(&self) -> Grid {
        Grid::fill(&self.minterms, &self.dont_cares)
    }

    /// Compute a minimal sum of products for this function.
    ///
    /// If all minterms are true or don't-care, the result is the constant 1. Without any minterm, the
    /// result is the constant 0. Otherwise, all valid groupings are enumerated on the map and a minimal
    /// cover is selected among them.
    pub fn minimize(&self) -> Minimized {
        let mut defined = self.minterms.clone();
        defined.union_with(&self.dont_cares);
        if defined.len() == MINTERM_COUNT {
            debug!("all cells are true or don't-care");
            return Minimized::constant(SopExpr::One);
        }
        if self.minterms.is_empty() {
            debug!("no minterm");
            return Minimized::constant(SopExpr::Zero);
        }

        let grid = self.grid();
        let groupings = Groupings::enumerate(&grid);
        match select_cover(&groupings, &self.minterms) {
            Some(cover) => {
                let expression = SopExpr::from_terms(cover.terms().iter().cloned());
                info!("minimized {} into {}", self.minterms, expression);
                Minimized { expression, cover }
            }
            None => {
                warn!("no cover found for {}, falling back to 0", self.minterms);
                Minimized::constant(SopExpr::Zero)
            }
        }
    }
}

fn to_set<I>(values: I) -> Result<MintermSet, KmapError>
where
    I: IntoIterator,
    I::Item: Into<i64>,
{
    values
        .into_iter()
        .map(|v| {
            let value: i64 = v.into();
            Minterm::try_from(value)
        })
        .collect()
}

/// Result of the minimization of a function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Minimized {
    expression: SopExpr,
    cover: Cover,
}

impl Minimized {
    fn constant(expression: SopExpr) -> Self {
        Self {
            expression,
            cover: Cover::default(),
        }
    }

    /// The minimal sum of products
    pub fn expression(&self) -> &SopExpr {
        &self.expression
    }

    /// Selected groupings, in the order of the terms of the expression
    pub fn groupings(&self) -> &[Grouping] {
        self.cover.groupings()
    }

    /// Minterms covered by each selected grouping, in the order of the terms of the expression
    pub fn covered_minterms(&self) -> Vec<MintermSet> {
        self.groupings()
            .iter()
            .map(Grouping::covered_minterms)
            .collect()
    }

    pub fn literal_count(&self) -> usize {
        self.expression.literal_count()
    }

    /// Render the expression as a Verilog module
    pub fn verilog(&self, cfg: &RenderConfig) -> String {
        render_verilog(&self.expression, cfg)
    }
}

impl fmt::Display for Minimized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Validate the inputs and minimize the function.
///
/// ```
/// use kmap::minimize;
/// # use kmap::KmapError;
/// # fn main() -> Result<(), KmapError> {
///
/// let result = minimize(&[0, 1, 8, 9], &[2, 3, 10, 11])?;
/// assert_eq!(result.to_string(), "B'");
///
/// let result = minimize(&[5, 6, 9, 13, 15], &[1, 7, 14])?;
/// assert_eq!(result.to_string(), "BC + C'D");
///
/// assert!(minimize(&[3, 16], &[]).is_err());
/// assert!(minimize(&[3, 4], &[4]).is_err());
/// # Ok(())
/// # }
/// ```
pub fn minimize(minterms: &[u32], dont_cares: &[u32]) -> Result<Minimized, KmapError> {
    let function = Function::new(minterms.iter().copied(), dont_cares.iter().copied())?;
    Ok(function.minimize())
}

#[cfg(test)]
mod tests {
    use crate::*;
    use test_log::test;

    #[test]
    fn degenerate_cases() -> Result<(), KmapError> {
        assert_eq!(minimize(&[], &[])?.expression(), &SopExpr::Zero);
        assert_eq!(minimize(&[], &[0, 1, 2])?.to_string(), "0");

        let all: Vec<u32> = (0..16).collect();
        assert_eq!(minimize(&all, &[])?.expression(), &SopExpr::One);
        assert_eq!(minimize(&all[..6], &all[6..])?.to_string(), "1");
        assert!(minimize(&all[..6], &all[6..])?.groupings().is_empty());
        Ok(())
    }

    #[test]
    fn validation() {
        assert_eq!(
            Function::new(vec![1, 20], Vec::<i64>::new()),
            Err(KmapError::InvalidRange(20))
        );
        assert_eq!(
            Function::new(vec![1], vec![-3]),
            Err(KmapError::InvalidRange(-3))
        );
        assert_eq!(
            Function::new(vec![1, 4, 6], vec![6, 4]),
            Err(KmapError::OverlappingSets(4))
        );
        let f = Function::new(vec![1u8, 1, 3], vec![2u8]).unwrap();
        assert_eq!(f.minterms().len(), 2);
        assert_eq!(f.dont_cares().len(), 1);
    }

    #[test]
    fn result_contents() -> Result<(), KmapError> {
        let result = minimize(&[1, 5, 7, 9, 11, 13, 15], &[])?;
        assert_eq!(result.to_string(), "AD + BD + C'D");
        assert_eq!(result.literal_count(), 6);
        assert_eq!(result.groupings().len(), 3);

        let covered: Vec<String> = result
            .covered_minterms()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            covered,
            vec!["{9, 11, 13, 15}", "{5, 7, 13, 15}", "{1, 5, 9, 13}"]
        );
        Ok(())
    }

    #[test]
    fn expression_from_terms() -> Result<(), KmapError> {
        let terms: Vec<Term> = vec!["CD".parse()?, "A'B".parse()?, "CD".parse()?];
        let sop = SopExpr::from_terms(terms);
        assert_eq!(sop.to_string(), "A'B + CD");
        assert_eq!(sop.literal_count(), 4);
        assert!(sop.eval(Minterm::new(0b0111)?));
        assert!(!sop.eval(Minterm::new(0b1000)?));

        assert_eq!(SopExpr::from_terms(vec![]), SopExpr::Zero);
        assert_eq!(
            SopExpr::from_terms(vec![Term::default(), "A".parse()?]),
            SopExpr::One
        );
        assert_eq!(SopExpr::One.minterms().len(), 16);
        assert!(SopExpr::Zero.minterms().is_empty());
        Ok(())
    }
}
