use itertools::Itertools;
use kmap::*;
use proptest::prelude::*;

fn values(mask: u16) -> Vec<u32> {
    (0..16).filter(|i| mask & (1 << i) != 0).collect()
}

/// Random functions with a sparse set of don't-care terms
fn function_masks() -> impl Strategy<Value = (u16, u16)> {
    (any::<u16>(), any::<u16>(), any::<u16>()).prop_map(|(on, a, b)| (on, a & b & !on))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn cover_is_complete_and_valid((on, dc) in function_masks()) {
        let minterms = MintermSet::try_from_values(values(on)).unwrap();
        let dont_cares = MintermSet::try_from_values(values(dc)).unwrap();
        let result = minimize(&values(on), &values(dc)).unwrap();

        // every minterm is covered
        let true_set = result.expression().minterms();
        prop_assert!(true_set.is_superset(&minterms));

        // only minterms and don't-cares are covered
        let mut allowed = minterms.clone();
        allowed.union_with(&dont_cares);
        prop_assert!(allowed.is_superset(&true_set));

        let grid = Grid::build(&minterms, &dont_cares).unwrap();
        for grouping in result.groupings() {
            prop_assert!(grouping.is_valid_in(&grid));
        }
    }

    #[test]
    fn groupings_reproduce_the_expression((on, dc) in function_masks()) {
        let result = minimize(&values(on), &values(dc)).unwrap();
        if let SopExpr::Sum(_) = result.expression() {
            let terms: Vec<Term> = result
                .covered_minterms()
                .iter()
                .map(Term::from_minterms)
                .collect();
            let rebuilt = SopExpr::from_terms(terms);
            prop_assert_eq!(rebuilt.to_string(), result.to_string());
            prop_assert_eq!(result.to_string().parse::<SopExpr>().unwrap(), rebuilt);
        }
    }

    #[test]
    fn cover_is_irredundant((on, dc) in function_masks()) {
        let minterms = MintermSet::try_from_values(values(on)).unwrap();
        let result = minimize(&values(on), &values(dc)).unwrap();
        let covered = result.covered_minterms();
        for skipped in 0..covered.len() {
            let mut union = MintermSet::new();
            for (i, set) in covered.iter().enumerate() {
                if i != skipped {
                    union.union_with(set);
                }
            }
            prop_assert!(!union.is_superset(&minterms));
        }
    }

    #[test]
    fn deterministic((on, dc) in function_masks()) {
        let mut reversed = values(on);
        reversed.reverse();
        let first = minimize(&values(on), &values(dc)).unwrap();
        let second = minimize(&reversed, &values(dc)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn no_smaller_cover((on, dc) in function_masks()) {
        let minterms = MintermSet::try_from_values(values(on)).unwrap();
        let dont_cares = MintermSet::try_from_values(values(dc)).unwrap();
        let result = minimize(&values(on), &values(dc)).unwrap();
        let grid = Grid::build(&minterms, &dont_cares).unwrap();
        let groupings: Vec<MintermSet> = Groupings::enumerate(&grid)
            .iter()
            .map(|(_, g)| g.covered_minterms())
            .collect();

        // exhaustive search is only affordable on small maps
        if result.groupings().is_empty() || groupings.len() > 30 {
            return Ok(());
        }
        for size in 1..result.groupings().len() {
            let found = groupings.iter().combinations(size).any(|sets| {
                let mut union = MintermSet::new();
                for set in sets {
                    union.union_with(set);
                }
                union.is_superset(&minterms)
            });
            prop_assert!(!found, "a cover with {} groupings exists", size);
        }
    }
}
