//! Shared test fixtures for unit tests, integration tests and downstream
//! crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`.

use crate::catalog::{ElementRecord, load};
use crate::graph::CombinationGraph;
use crate::ledger::DiscoveryLedger;

// ===========================================================================
// Catalogs
// ===========================================================================

/// A small four-element catalog with a few tiers of recipes.
pub fn elemental_records() -> Vec<ElementRecord> {
    vec![
        ElementRecord::base("Water"),
        ElementRecord::base("Earth"),
        ElementRecord::base("Fire"),
        ElementRecord::base("Air"),
        ElementRecord::new("Mud", "Water, Earth"),
        ElementRecord::new("Steam", "Water, Fire / Water, Lava"),
        ElementRecord::new("Lava", "Earth, Fire"),
        ElementRecord::new("Dust", "Earth, Air"),
        ElementRecord::new("Brick", "Mud, Fire"),
        ElementRecord::new("Wall", "Brick, Brick"),
        ElementRecord::new("Cloud", "Steam, Air / Water, Air"),
        ElementRecord::new("Rain", "Cloud, Water"),
        ElementRecord::new("Stone", "Lava, Air"),
    ]
}

/// A chemistry-flavoured catalog.
pub fn chemistry_records() -> Vec<ElementRecord> {
    vec![
        ElementRecord::base("Hydrogen"),
        ElementRecord::base("Oxygen"),
        ElementRecord::base("Carbon"),
        ElementRecord::new("H2O", "Hydrogen, Oxygen"),
        ElementRecord::new("Carbon Dioxide", "Carbon, Oxygen"),
        ElementRecord::new("Methane", "Carbon, Hydrogen"),
        ElementRecord::new("Carbonic Acid", "H2O, Carbon Dioxide"),
    ]
}

pub fn elemental_graph() -> CombinationGraph {
    load(&elemental_records()).expect("fixture catalog is well formed")
}

pub fn chemistry_graph() -> CombinationGraph {
    load(&chemistry_records()).expect("fixture catalog is well formed")
}

/// The elemental graph and a fresh ledger of its base elements.
pub fn elemental_session() -> (CombinationGraph, DiscoveryLedger) {
    let graph = elemental_graph();
    let ledger = DiscoveryLedger::new(&graph);
    (graph, ledger)
}

/// Craft every pair in order, asserting each succeeds.
pub fn craft_all(graph: &CombinationGraph, ledger: &mut DiscoveryLedger, pairs: &[(&str, &str)]) {
    for (a, b) in pairs {
        let outcome = graph.combine(ledger, a, b);
        assert!(outcome.is_success(), "expected {a} + {b} to craft, got {outcome:?}");
    }
}
