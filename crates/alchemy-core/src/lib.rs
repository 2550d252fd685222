//! Alchemy Core -- the discovery-crafting engine.
//!
//! A fixed catalog of elements, each producible by combining two others,
//! plus a per-player ledger of elements already discovered. The engine
//! answers "what do A and B make?", only lets players craft from elements
//! they hold, and moves progress between screens and save files.
//!
//! # Flow
//!
//! 1. [`catalog::load`] builds a [`graph::CombinationGraph`] from records.
//! 2. [`ledger::DiscoveryLedger::new`] seeds a ledger with the base elements.
//! 3. Gameplay calls [`graph::CombinationGraph::combine`] once per attempt.
//! 4. [`transfer::downdate`] exports the ledger as names when leaving the
//!    play screen; [`transfer::update`] reconciles names back on return or
//!    after loading a save, never dropping discovered elements.
//! 5. Players may add their own recipes with
//!    [`graph::CombinationGraph::define_combo`].
//!
//! ```rust,ignore
//! let graph = catalog::load(&records)?;
//! let mut ledger = DiscoveryLedger::new(&graph);
//! let (ok, product) = graph.combine(&mut ledger, "water", "earth").into_parts();
//! ```
//!
//! Everything is synchronous and single-threaded: one graph and one ledger,
//! passed explicitly by the caller.

pub mod catalog;
pub mod element;
pub mod extension;
pub mod graph;
pub mod ledger;
pub mod transfer;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use catalog::{CatalogError, ElementRecord, load};
pub use element::{Element, ElementId};
pub use graph::{CombinationGraph, GraphError};
pub use ledger::{CombineOutcome, DiscoveryLedger, LedgerPager, PageEntry, Progress};
pub use transfer::{TransferError, UpdateOutcome, downdate, update};
