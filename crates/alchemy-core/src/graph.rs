//! The combination graph: the element catalog plus recipe adjacency.
//!
//! Elements live in a single arena indexed by [`ElementId`]. Recipes are
//! stored on both ingredients as `partner -> product` entries, so a lookup
//! from either side finds the same product.

use crate::element::{Element, ElementId, canonical_name};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while mutating the graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("element name is empty")]
    EmptyName,

    #[error("catalog is full ({len} elements)")]
    CatalogFull { len: usize },
}

// ---------------------------------------------------------------------------
// Vertex storage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Vertex {
    element: Element,
    /// Partner element -> product element.
    partners: HashMap<ElementId, ElementId>,
}

/// The ID the next vertex gets when `len` vertices already exist.
fn next_id(len: usize) -> Result<ElementId, GraphError> {
    u32::try_from(len)
        .map(ElementId)
        .map_err(|_| GraphError::CatalogFull { len })
}

// ---------------------------------------------------------------------------
// CombinationGraph
// ---------------------------------------------------------------------------

/// Element catalog and recipe adjacency.
///
/// Elements are never removed or renamed once added. The graph is built once
/// by the catalog loader and afterwards only grows through
/// [`add_recipe`](Self::add_recipe) and player-defined combos.
#[derive(Debug, Clone, Default)]
pub struct CombinationGraph {
    vertices: Vec<Vertex>,
    name_to_id: HashMap<String, ElementId>,
    /// Elements with no recipe, in catalog order.
    base: Vec<ElementId>,
}

impl CombinationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // -- Mutation API --

    /// Add an element if it is not already present. Returns its ID either way.
    pub fn add_element(&mut self, name: &str) -> Result<ElementId, GraphError> {
        let name = canonical_name(name);
        if name.is_empty() {
            return Err(GraphError::EmptyName);
        }
        if let Some(&id) = self.name_to_id.get(&name) {
            return Ok(id);
        }
        let id = next_id(self.vertices.len())?;
        self.vertices.push(Vertex {
            element: Element::new(name.clone()),
            partners: HashMap::new(),
        });
        self.name_to_id.insert(name, id);
        Ok(id)
    }

    /// Register `first + second -> product`, creating any missing elements.
    ///
    /// The pair is recorded on both ingredients. Re-declaring a pair replaces
    /// the previous product.
    pub fn add_recipe(
        &mut self,
        product: &str,
        first: &str,
        second: &str,
    ) -> Result<ElementId, GraphError> {
        if [product, first, second]
            .iter()
            .any(|name| name.trim().is_empty())
        {
            return Err(GraphError::EmptyName);
        }
        let product = self.add_element(product)?;
        let first = self.add_element(first)?;
        let second = self.add_element(second)?;
        self.link(product, first, second);
        Ok(product)
    }

    /// Record a base element. Base elements seed every fresh ledger.
    pub(crate) fn mark_base(&mut self, id: ElementId) {
        if !self.base.contains(&id) {
            self.base.push(id);
        }
    }

    fn link(&mut self, product: ElementId, first: ElementId, second: ElementId) {
        self.vertices[first.0 as usize]
            .partners
            .insert(second, product);
        self.vertices[second.0 as usize]
            .partners
            .insert(first, product);
    }

    // -- Query API --

    /// Look up the product of two ingredients by name.
    pub fn lookup(&self, first: &str, second: &str) -> Option<&Element> {
        let first = self.id_of(first)?;
        let second = self.id_of(second)?;
        self.lookup_ids(first, second)
            .and_then(|product| self.element(product))
    }

    /// Look up the product of two ingredients by ID.
    pub fn lookup_ids(&self, first: ElementId, second: ElementId) -> Option<ElementId> {
        self.vertices
            .get(first.0 as usize)?
            .partners
            .get(&second)
            .copied()
    }

    /// Resolve a name (in any case) to an element ID.
    pub fn id_of(&self, name: &str) -> Option<ElementId> {
        self.name_to_id.get(&canonical_name(name)).copied()
    }

    /// Get an element by ID.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.vertices.get(id.0 as usize).map(|v| &v.element)
    }

    /// Check whether an ID belongs to this graph.
    pub fn contains(&self, id: ElementId) -> bool {
        (id.0 as usize) < self.vertices.len()
    }

    /// The full catalog, in insertion order.
    pub fn all_elements(&self) -> impl Iterator<Item = &Element> {
        self.vertices.iter().map(|v| &v.element)
    }

    /// Every `(partner, product)` pair registered on an element.
    pub fn partners(&self, id: ElementId) -> impl Iterator<Item = (ElementId, ElementId)> + '_ {
        self.vertices
            .get(id.0 as usize)
            .into_iter()
            .flat_map(|v| v.partners.iter().map(|(&p, &r)| (p, r)))
    }

    /// Elements with no recipe, in catalog order.
    pub fn base_elements(&self) -> &[ElementId] {
        &self.base
    }

    /// Number of elements in the catalog.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of distinct unordered ingredient pairs with a recipe.
    pub fn recipe_count(&self) -> usize {
        let mut count = 0;
        for (i, vertex) in self.vertices.iter().enumerate() {
            let here = ElementId(i as u32);
            // Each pair is stored twice except self-pairs.
            count += vertex.partners.keys().filter(|&&p| p >= here).count();
        }
        count
    }
}

// ===========================================================================
// Tests
// ===========================================================================
