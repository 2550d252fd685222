//! Builds a [`CombinationGraph`] from declarative element records.
//!
//! Each record names an element and either the no-recipe marker (making it
//! a base element) or one or more ingredient pairs separated by `/`, with
//! the two ingredients of a pair separated by `,`:
//!
//! ```text
//! { "NAME": "Water", "RECIPES": "$DEFAULT" }
//! { "NAME": "Steam", "RECIPES": "Water, Fire / Water, Lava" }
//! ```
//!
//! All records are validated before the graph is built, so a malformed
//! record never yields a partially built catalog.

use crate::element::canonical_name;
use crate::graph::{CombinationGraph, GraphError};
use serde::{Deserialize, Serialize};

/// Recipe text marking an element as a base element (compared case-insensitively).
pub const NO_RECIPE_MARKER: &str = "$DEFAULT";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural errors in catalog records. Record indexes are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("record {record} has no element name")]
    MissingName { record: usize },

    #[error("record {record} ('{name}') has an empty recipe list")]
    EmptyRecipes { record: usize, name: String },

    #[error("record {record} ('{name}') has malformed ingredient pair '{pair}'")]
    MalformedPair {
        record: usize,
        name: String,
        pair: String,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One catalog entry as it appears in a data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRecord {
    #[serde(alias = "NAME")]
    pub name: String,
    #[serde(alias = "RECIPES")]
    pub recipes: String,
}

impl ElementRecord {
    pub fn new(name: impl Into<String>, recipes: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            recipes: recipes.into(),
        }
    }

    /// A record for an element with no recipe.
    pub fn base(name: impl Into<String>) -> Self {
        Self::new(name, NO_RECIPE_MARKER)
    }
}

/// What a record's recipe text describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeSpec {
    /// The element has no recipe and is available from the start.
    Base,
    /// Alternative ingredient pairs that each produce the element.
    Pairs(Vec<(String, String)>),
}

/// A validated record with canonical names.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedRecord {
    name: String,
    spec: RecipeSpec,
}

/// Parse recipe text into canonical ingredient pairs.
///
/// Returns the offending pair text on failure.
pub fn parse_recipes(text: &str) -> Result<RecipeSpec, String> {
    let text = text.trim();
    if text.eq_ignore_ascii_case(NO_RECIPE_MARKER) {
        return Ok(RecipeSpec::Base);
    }

    let mut pairs = Vec::new();
    for pair in text.split('/') {
        let mut parts = pair.split(',').map(canonical_name);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(a), Some(b), None) if !a.is_empty() && !b.is_empty() => pairs.push((a, b)),
            _ => return Err(pair.trim().to_string()),
        }
    }
    Ok(RecipeSpec::Pairs(pairs))
}

fn parse_record(record: usize, raw: &ElementRecord) -> Result<ParsedRecord, CatalogError> {
    let name = canonical_name(&raw.name);
    if name.is_empty() {
        return Err(CatalogError::MissingName { record });
    }
    if raw.recipes.trim().is_empty() {
        return Err(CatalogError::EmptyRecipes { record, name });
    }
    let spec = parse_recipes(&raw.recipes)
        .map_err(|pair| CatalogError::MalformedPair {
            record,
            name: name.clone(),
            pair,
        })?;
    Ok(ParsedRecord { name, spec })
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Build a graph from catalog records.
///
/// Base elements are recorded in record order and seed every new
/// [`DiscoveryLedger`](crate::ledger::DiscoveryLedger). Ingredients that
/// never appear as their own record are created automatically.
pub fn load(records: &[ElementRecord]) -> Result<CombinationGraph, CatalogError> {
    let parsed = records
        .iter()
        .enumerate()
        .map(|(i, raw)| parse_record(i, raw))
        .collect::<Result<Vec<_>, _>>()?;

    let mut graph = CombinationGraph::new();
    for record in &parsed {
        let id = graph.add_element(&record.name)?;
        match &record.spec {
            RecipeSpec::Base => graph.mark_base(id),
            RecipeSpec::Pairs(pairs) => {
                for (first, second) in pairs {
                    graph.add_recipe(&record.name, first, second)?;
                }
            }
        }
    }

    tracing::debug!(
        elements = graph.len(),
        base = graph.base_elements().len(),
        recipes = graph.recipe_count(),
        "catalog loaded"
    );
    Ok(graph)
}

// ===========================================================================
// Tests
// ===========================================================================
