//! Property-based tests for the crafting engine.
//!
//! Uses proptest to generate random layered catalogs and crafting sessions,
//! then checks the structural invariants of the graph and ledger.

use alchemy_core::catalog::{ElementRecord, RecipeSpec, load, parse_recipes};
use alchemy_core::graph::CombinationGraph;
use alchemy_core::ledger::DiscoveryLedger;
use alchemy_core::transfer::{UpdateOutcome, downdate, update};
use proptest::prelude::*;
use proptest::sample::Index;

// ===========================================================================
// Generators
// ===========================================================================

fn element_name(i: usize, bases: usize) -> String {
    if i < bases {
        format!("Base {i}")
    } else {
        format!("Derived {}", i - bases)
    }
}

/// Generate a catalog whose derived elements only use earlier elements as
/// ingredients.
fn arb_records(max_base: usize, max_derived: usize) -> impl Strategy<Value = Vec<ElementRecord>> {
    (1..=max_base, 0..=max_derived).prop_flat_map(|(bases, derived)| {
        proptest::collection::vec(
            proptest::collection::vec((any::<Index>(), any::<Index>()), 1..=3),
            derived,
        )
        .prop_map(move |lists| {
            let mut records: Vec<_> = (0..bases)
                .map(|i| ElementRecord::base(element_name(i, bases)))
                .collect();
            for (k, pairs) in lists.into_iter().enumerate() {
                let available = bases + k;
                let recipe = pairs
                    .iter()
                    .map(|(a, b)| {
                        format!(
                            "{}, {}",
                            element_name(a.index(available), bases),
                            element_name(b.index(available), bases)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(" / ");
                records.push(ElementRecord::new(element_name(available, bases), recipe));
            }
            records
        })
    })
}

/// Random crafting attempts, as indexes into the catalog.
fn arb_attempts(max: usize) -> impl Strategy<Value = Vec<(Index, Index)>> {
    proptest::collection::vec((any::<Index>(), any::<Index>()), 0..=max)
}

fn names(graph: &CombinationGraph) -> Vec<String> {
    graph.all_elements().map(|e| e.name().to_string()).collect()
}

/// Replay attempts against a fresh ledger.
fn play(graph: &CombinationGraph, attempts: &[(Index, Index)]) -> DiscoveryLedger {
    let all = names(graph);
    let mut ledger = DiscoveryLedger::new(graph);
    for (a, b) in attempts {
        graph.combine(&mut ledger, &all[a.index(all.len())], &all[b.index(all.len())]);
    }
    ledger
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every element a record mentions, as product or ingredient, is in the catalog.
    #[test]
    fn referenced_elements_exist(records in arb_records(6, 20)) {
        let graph = load(&records).unwrap();
        for record in &records {
            prop_assert!(graph.id_of(&record.name).is_some());
            if let Ok(RecipeSpec::Pairs(pairs)) = parse_recipes(&record.recipes) {
                for (a, b) in pairs {
                    prop_assert!(graph.id_of(&a).is_some(), "missing ingredient {}", a);
                    prop_assert!(graph.id_of(&b).is_some(), "missing ingredient {}", b);
                    prop_assert!(graph.lookup(&a, &b).is_some());
                }
            }
        }
    }

    /// combine(a, b) and combine(b, a) agree on success and product.
    #[test]
    fn combine_is_symmetric(
        records in arb_records(6, 20),
        attempts in arb_attempts(30),
        probe in (any::<Index>(), any::<Index>()),
    ) {
        let graph = load(&records).unwrap();
        let ledger = play(&graph, &attempts);
        let all = names(&graph);
        let a = &all[probe.0.index(all.len())];
        let b = &all[probe.1.index(all.len())];

        let mut left = ledger.clone();
        let mut right = ledger.clone();
        let l = graph.combine(&mut left, a, b);
        let r = graph.combine(&mut right, b, a);
        prop_assert_eq!(l, r);
        prop_assert_eq!(left, right);
    }

    /// Repeating a successful combination never grows the ledger again.
    #[test]
    fn combine_is_idempotent(records in arb_records(6, 20), attempts in arb_attempts(30)) {
        let graph = load(&records).unwrap();
        let mut ledger = play(&graph, &attempts);
        let all = names(&graph);
        for (a, b) in &attempts {
            let a = &all[a.index(all.len())];
            let b = &all[b.index(all.len())];
            if graph.combine(&mut ledger, a, b).is_success() {
                let len = ledger.len();
                prop_assert!(graph.combine(&mut ledger, a, b).is_success());
                prop_assert_eq!(ledger.len(), len);
            }
        }
    }

    /// The ledger only ever holds catalog elements, with no duplicates.
    #[test]
    fn ledger_stays_within_catalog(records in arb_records(6, 20), attempts in arb_attempts(40)) {
        let graph = load(&records).unwrap();
        let ledger = play(&graph, &attempts);
        let exported = downdate(&graph, &ledger).unwrap();
        let unique: std::collections::HashSet<_> = exported.iter().collect();
        prop_assert_eq!(unique.len(), exported.len());
        prop_assert!(ledger.len() <= graph.len());
    }

    /// update never shrinks the ledger; a rejected update leaves it untouched.
    #[test]
    fn update_is_monotonic(
        records in arb_records(6, 20),
        attempts in arb_attempts(30),
        picks in proptest::collection::vec(any::<Index>(), 0..30),
    ) {
        let graph = load(&records).unwrap();
        let mut ledger = play(&graph, &attempts);
        let before = ledger.clone();
        let all = names(&graph);
        let supplied: Vec<&str> = picks.iter().map(|i| all[i.index(all.len())].as_str()).collect();

        match update(&graph, &mut ledger, &supplied).unwrap() {
            UpdateOutcome::Applied => prop_assert!(ledger.len() >= before.len()),
            UpdateOutcome::Rejected => prop_assert_eq!(&ledger, &before),
        }
    }

    /// update(downdate(ledger)) reproduces the ledger.
    #[test]
    fn downdate_update_round_trip(records in arb_records(6, 20), attempts in arb_attempts(30)) {
        let graph = load(&records).unwrap();
        let mut ledger = play(&graph, &attempts);
        let before = ledger.clone();
        let exported = downdate(&graph, &ledger).unwrap();
        prop_assert_eq!(update(&graph, &mut ledger, &exported).unwrap(), UpdateOutcome::Applied);
        prop_assert_eq!(ledger, before);
    }
}
