//! The discovery ledger and the crafting rule that grows it.
//!
//! A ledger is the ordered, duplicate-free list of elements a player has
//! unlocked. Crafting with [`CombinationGraph::combine`] is only possible
//! from elements already in the ledger, and appends at most one element.

use crate::element::{Element, ElementId};
use crate::graph::CombinationGraph;
use std::collections::HashSet;
use std::fmt;

// ---------------------------------------------------------------------------
// DiscoveryLedger
// ---------------------------------------------------------------------------

/// A player's discovered elements, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryLedger {
    order: Vec<ElementId>,
    known: HashSet<ElementId>,
}

impl DiscoveryLedger {
    /// A fresh ledger holding the graph's base elements.
    pub fn new(graph: &CombinationGraph) -> Self {
        let mut ledger = Self::default();
        ledger.reset(graph);
        ledger
    }

    /// Discard all progress and start again from the graph's base elements.
    pub fn reset(&mut self, graph: &CombinationGraph) {
        self.replace(graph.base_elements().to_vec());
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.known.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Discovered element IDs, first-discovered first.
    pub fn ids(&self) -> &[ElementId] {
        &self.order
    }

    /// Discovered elements resolved against a graph, in ledger order.
    /// IDs the graph does not know are skipped.
    pub fn elements<'g>(&'g self, graph: &'g CombinationGraph) -> impl Iterator<Item = &'g Element> {
        self.order.iter().filter_map(|&id| graph.element(id))
    }

    /// Append an element. Returns false if it was already present.
    pub(crate) fn push(&mut self, id: ElementId) -> bool {
        if self.known.insert(id) {
            self.order.push(id);
            true
        } else {
            false
        }
    }

    /// Replace the whole sequence, dropping repeats after their first
    /// occurrence.
    pub(crate) fn replace(&mut self, ids: Vec<ElementId>) {
        self.order.clear();
        self.known.clear();
        for id in ids {
            self.push(id);
        }
    }
}

// ---------------------------------------------------------------------------
// Combining
// ---------------------------------------------------------------------------

/// The result of trying to combine two elements.
///
/// Failed combinations are ordinary gameplay feedback, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombineOutcome {
    /// A new element was crafted and appended to the ledger.
    Discovered { product: ElementId, display: String },
    /// The recipe exists but its product was already in the ledger.
    AlreadyKnown { product: ElementId, display: String },
    /// At least one operand has not been discovered (or does not exist).
    Undiscovered,
    /// Both operands are discovered but no recipe joins them.
    NoRecipe,
}

impl CombineOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Discovered { .. } | Self::AlreadyKnown { .. })
    }

    /// Whether this combination added something to the ledger.
    pub fn is_new(&self) -> bool {
        matches!(self, Self::Discovered { .. })
    }

    /// The display name of the product, if the combination succeeded.
    pub fn product_name(&self) -> Option<&str> {
        match self {
            Self::Discovered { display, .. } | Self::AlreadyKnown { display, .. } => Some(display),
            Self::Undiscovered | Self::NoRecipe => None,
        }
    }

    /// Flatten into `(success, product display name)`.
    pub fn into_parts(self) -> (bool, Option<String>) {
        match self {
            Self::Discovered { display, .. } | Self::AlreadyKnown { display, .. } => {
                (true, Some(display))
            }
            Self::Undiscovered | Self::NoRecipe => (false, None),
        }
    }
}

impl CombinationGraph {
    /// Combine two discovered elements.
    ///
    /// Never mutates the graph; appends at most one element to the ledger.
    pub fn combine(
        &self,
        ledger: &mut DiscoveryLedger,
        first: &str,
        second: &str,
    ) -> CombineOutcome {
        let (Some(first), Some(second)) = (self.id_of(first), self.id_of(second)) else {
            return CombineOutcome::Undiscovered;
        };
        if !ledger.contains(first) || !ledger.contains(second) {
            return CombineOutcome::Undiscovered;
        }
        let Some(product) = self.lookup_ids(first, second) else {
            return CombineOutcome::NoRecipe;
        };
        // Recipe products are always vertices of the same graph.
        let Some(element) = self.element(product) else {
            return CombineOutcome::NoRecipe;
        };
        let name = element.display_name().to_string();

        if ledger.push(product) {
            tracing::debug!(element = %name, total = ledger.len(), "discovered element");
            CombineOutcome::Discovered { product, display: name }
        } else {
            CombineOutcome::AlreadyKnown { product, display: name }
        }
    }

    /// Whether a name is in the ledger, resolved through this graph.
    pub fn is_discovered(&self, ledger: &DiscoveryLedger, name: &str) -> bool {
        self.id_of(name).is_some_and(|id| ledger.contains(id))
    }

    /// Discovered-versus-total counter for progress displays.
    pub fn progress(&self, ledger: &DiscoveryLedger) -> Progress {
        Progress {
            discovered: ledger.len(),
            total: self.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// How much of the catalog a ledger covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub discovered: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.discovered >= self.total
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Discovered: {} / {}", self.discovered, self.total)
    }
}

// ---------------------------------------------------------------------------
// Paging
// ---------------------------------------------------------------------------

/// One row of the discovered-elements sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry<'g> {
    /// 1-based position in the ledger.
    pub number: usize,
    pub element: &'g Element,
}

/// A scrolling window over a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerPager {
    offset: usize,
    page_size: usize,
}

impl LedgerPager {
    /// A pager at the top of the list. A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether there are entries below the current window.
    pub fn can_scroll_down(&self, ledger: &DiscoveryLedger) -> bool {
        self.offset + self.page_size < ledger.len()
    }

    /// Move the window down by one entry. Returns false at the bottom.
    pub fn scroll_down(&mut self, ledger: &DiscoveryLedger) -> bool {
        if self.can_scroll_down(ledger) {
            self.offset += 1;
            true
        } else {
            false
        }
    }

    /// Move the window up by one entry. Returns false at the top.
    pub fn scroll_up(&mut self) -> bool {
        if self.offset > 0 {
            self.offset -= 1;
            true
        } else {
            false
        }
    }

    /// Jump back to the top of the list.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// The visible entries.
    pub fn page<'g>(
        &self,
        ledger: &DiscoveryLedger,
        graph: &'g CombinationGraph,
    ) -> Vec<PageEntry<'g>> {
        ledger
            .ids()
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.page_size)
            .filter_map(|(i, &id)| {
                graph.element(id).map(|element| PageEntry {
                    number: i + 1,
                    element,
                })
            })
            .collect()
    }
}

impl Default for LedgerPager {
    fn default() -> Self {
        Self::new(10)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
