//! Moving ledger contents to and from a portable list of names.
//!
//! [`downdate`] snapshots a ledger for a save file or another screen;
//! [`update`] reconciles such a snapshot back into a ledger without ever
//! losing an element the player already holds.

use crate::graph::CombinationGraph;
use crate::ledger::DiscoveryLedger;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while transferring progress.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    /// A supplied name has no element in the catalog.
    #[error("unknown element '{name}'")]
    UnknownElement { name: String },

    /// The ledger holds an element the catalog does not know.
    #[error("ledger entry {position} is not in the catalog")]
    Inconsistent { position: usize },
}

/// Whether [`update`] replaced the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The ledger now holds exactly the supplied names.
    Applied,
    /// The supplied names would have dropped discovered elements; the
    /// ledger is unchanged.
    Rejected,
}

/// Snapshot the ledger as canonical names, in ledger order.
pub fn downdate(
    graph: &CombinationGraph,
    ledger: &DiscoveryLedger,
) -> Result<Vec<String>, TransferError> {
    ledger
        .ids()
        .iter()
        .enumerate()
        .map(|(position, &id)| {
            graph
                .element(id)
                .map(|e| e.name().to_string())
                .ok_or(TransferError::Inconsistent { position })
        })
        .collect()
}

/// Replace the ledger with `names`, provided every element it currently
/// holds is among them.
///
/// Every name must resolve in the catalog, otherwise nothing changes and
/// an error is returned.
pub fn update<S: AsRef<str>>(
    graph: &CombinationGraph,
    ledger: &mut DiscoveryLedger,
    names: &[S],
) -> Result<UpdateOutcome, TransferError> {
    let ids = names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            graph
                .id_of(name)
                .ok_or_else(|| TransferError::UnknownElement {
                    name: name.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let supplied: HashSet<_> = ids.iter().copied().collect();
    if !ledger.ids().iter().all(|id| supplied.contains(id)) {
        tracing::warn!(
            held = ledger.len(),
            supplied = supplied.len(),
            "progress update would drop discovered elements; ignoring"
        );
        return Ok(UpdateOutcome::Rejected);
    }

    ledger.replace(ids);
    Ok(UpdateOutcome::Applied)
}

// ===========================================================================
// Tests
// ===========================================================================
