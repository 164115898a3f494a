//! Selection of a minimal set of groupings covering the required minterms

use crate::*;

use itertools::Itertools;
use log::{debug, trace};
use std::collections::BTreeSet;
use std::fmt;

/// A grouping considered for the cover, with its minterms and product term
#[derive(Clone, Debug)]
struct Candidate {
    grouping: Grouping,
    minterms: MintermSet,
    term: Term,
    text: String,
}

impl Candidate {
    fn new(grouping: &Grouping) -> Self {
        let minterms = grouping.covered_minterms();
        let term = Term::from_minterms(&minterms);
        let text = term.to_string();
        Self {
            grouping: grouping.clone(),
            minterms,
            term,
            text,
        }
    }
}

/// A list of groupings covering all required minterms.
///
/// The groupings are ordered by the textual form of their terms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cover {
    groupings: Vec<Grouping>,
    terms: Vec<Term>,
}

impl Cover {
    fn from_candidates<'a>(selected: impl IntoIterator<Item = &'a Candidate>) -> Self {
        let mut selected: Vec<&Candidate> = selected.into_iter().collect();
        selected.sort_by(|a, b| a.text.cmp(&b.text));
        Self {
            groupings: selected.iter().map(|c| c.grouping.clone()).collect(),
            terms: selected.iter().map(|c| c.term.clone()).collect(),
        }
    }

    pub fn groupings(&self) -> &[Grouping] {
        &self.groupings
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.groupings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groupings.is_empty()
    }

    /// Total number of literals in the terms of this cover
    pub fn literal_count(&self) -> usize {
        self.terms.iter().map(Term::literal_count).sum()
    }

    /// Union of the minterms covered by all groupings
    pub fn covered_minterms(&self) -> MintermSet {
        let mut result = MintermSet::new();
        for g in &self.groupings {
            result.union_with(&g.covered_minterms());
        }
        result
    }
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, t) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", t)?;
        }
        Ok(())
    }
}

/// For each required minterm, the positions of the candidates covering it
fn coverage_map(candidates: &[Candidate], required: &MintermSet) -> Vec<(Minterm, Vec<usize>)> {
    required
        .iter()
        .map(|m| {
            let covering = candidates
                .iter()
                .positions(|c| c.minterms.contains(m))
                .collect();
            (m, covering)
        })
        .collect()
}

/// Ordering key of complete covers: fewer literals first, then the smallest list of terms
fn cover_cost(candidates: &[Candidate], selected: &[usize]) -> (usize, Vec<String>) {
    let literals = selected
        .iter()
        .map(|i| candidates[*i].term.literal_count())
        .sum();
    let texts = selected
        .iter()
        .map(|i| candidates[*i].text.clone())
        .sorted()
        .collect();
    (literals, texts)
}

/// Select a minimal cover of the required minterms.
///
/// 1. Each required minterm covered by a single grouping makes this grouping essential.
/// 2. If the essential groupings do not cover all required minterms, combinations of the remaining
///    groupings are tested by increasing size. The first size providing a complete cover wins.
/// 3. Among the complete covers of this size, the one with the fewest literals is selected,
///    remaining ties are broken by taking the smallest sorted list of terms.
///
/// Returns None if a required minterm can not be covered, which does not happen
/// for groupings enumerated on a map where all required minterms are true.
///
/// ```
/// use kmap::{select_cover, Grid, Groupings, MintermSet};
/// # use kmap::KmapError;
/// # fn main() -> Result<(), KmapError> {
///
/// let minterms: MintermSet = "1, 5, 7, 9, 11, 13, 15".parse()?;
/// let grid = Grid::build(&minterms, &MintermSet::new())?;
/// let cover = select_cover(&Groupings::enumerate(&grid), &minterms).unwrap();
///
/// assert_eq!(cover.len(), 3);
/// assert_eq!(cover.to_string(), "AD + BD + C'D");
/// # Ok(())
/// # }
/// ```
pub fn select_cover(groupings: &Groupings, required: &MintermSet) -> Option<Cover> {
    let candidates: Vec<Candidate> = groupings.iter().map(|(_, g)| Candidate::new(g)).collect();

    let coverage = coverage_map(&candidates, required);
    if let Some((m, _)) = coverage.iter().find(|(_, covering)| covering.is_empty()) {
        debug!("no grouping covers the minterm {}", m);
        return None;
    }

    let essential: BTreeSet<usize> = coverage
        .iter()
        .filter(|(_, covering)| covering.len() == 1)
        .map(|(_, covering)| covering[0])
        .collect();

    let mut covered = MintermSet::new();
    for i in &essential {
        covered.union_with(&candidates[*i].minterms);
    }
    debug!(
        "{} essential groupings out of {}",
        essential.len(),
        candidates.len()
    );

    if covered.is_superset(required) {
        return Some(Cover::from_candidates(essential.iter().map(|i| &candidates[*i])));
    }

    let mut remaining = required.clone();
    remaining.difference_with(&covered);
    let optional: Vec<usize> = (0..candidates.len())
        .filter(|i| !essential.contains(i))
        .collect();

    let mut union = MintermSet::new();
    for size in 1..=optional.len() {
        trace!("testing combinations of {} groupings", size);
        let best = optional
            .iter()
            .copied()
            .combinations(size)
            .filter(|combination| {
                union.clear();
                for i in combination {
                    union.union_with(&candidates[*i].minterms);
                }
                union.is_superset(&remaining)
            })
            .map(|combination| {
                let selected: Vec<usize> = essential.iter().copied().chain(combination).collect();
                let cost = cover_cost(&candidates, &selected);
                (cost, selected)
            })
            .min_by(|a, b| a.0.cmp(&b.0));

        if let Some((cost, selected)) = best {
            debug!(
                "completed the cover with {} groupings ({} literals)",
                size, cost.0
            );
            return Some(Cover::from_candidates(selected.iter().map(|i| &candidates[*i])));
        }
    }

    debug!("no combination covers the remaining minterms {}", remaining);
    None
}
