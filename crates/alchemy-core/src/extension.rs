//! Player-authored recipes added to a loaded catalog at runtime.

use crate::graph::{CombinationGraph, GraphError};

impl CombinationGraph {
    /// Whether a player may define a recipe for `first + second`.
    ///
    /// Both ingredients must already be catalog elements and the pair must
    /// not already have a recipe, so built-in recipes cannot be shadowed.
    pub fn can_define_combo(&self, first: &str, second: &str) -> bool {
        let (Some(a), Some(b)) = (self.id_of(first), self.id_of(second)) else {
            return false;
        };
        self.lookup_ids(a, b).is_none() && self.lookup_ids(b, a).is_none()
    }

    /// Add `first + second -> product` if [`can_define_combo`](Self::can_define_combo)
    /// allows it. The product is created if it does not exist yet.
    ///
    /// Returns whether the recipe was added.
    pub fn define_combo(
        &mut self,
        first: &str,
        second: &str,
        product: &str,
    ) -> Result<bool, GraphError> {
        if !self.can_define_combo(first, second) {
            tracing::warn!(first, second, product, "player recipe refused");
            return Ok(false);
        }
        self.add_recipe(product, first, second)?;
        tracing::debug!(first, second, product, "player recipe added");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{CombinationGraph, GraphError};
    use crate::ledger::DiscoveryLedger;

    fn graph() -> CombinationGraph {
        let mut graph = CombinationGraph::new();
        graph.add_recipe("mud", "water", "earth").unwrap();
        graph.add_recipe("wall", "brick", "brick").unwrap();
        graph
    }

    #[test]
    fn can_define_new_pair_of_known_elements() {
        let graph = graph();
        assert!(graph.can_define_combo("brick", "wall"));
        assert!(graph.can_define_combo("Wall", "BRICK"));
    }

    #[test]
    fn cannot_shadow_existing_recipe() {
        let graph = graph();
        assert!(!graph.can_define_combo("water", "earth"));
        assert!(!graph.can_define_combo("earth", "water"));
    }

    #[test]
    fn cannot_use_unknown_ingredients() {
        let graph = graph();
        assert!(!graph.can_define_combo("brick", "dragon"));
    }

    #[test]
    fn define_combo_adds_recipe_and_product() {
        let mut graph = graph();
        let before = graph.len();
        assert_eq!(graph.define_combo("brick", "wall", "castle"), Ok(true));
        assert_eq!(graph.len(), before + 1);
        assert_eq!(graph.lookup("wall", "brick").unwrap().display_name(), "Castle");
    }

    #[test]
    fn define_combo_refused_is_a_no_op() {
        let mut graph = graph();
        assert_eq!(graph.define_combo("water", "earth", "swamp"), Ok(false));
        assert_eq!(graph.lookup("water", "earth").unwrap().name(), "mud");
        assert!(graph.id_of("swamp").is_none());
    }

    #[test]
    fn define_combo_blank_product_is_an_error() {
        let mut graph = graph();
        assert_eq!(
            graph.define_combo("brick", "wall", "  "),
            Err(GraphError::EmptyName)
        );
        // Nothing was linked.
        assert!(graph.can_define_combo("brick", "wall"));
    }

    #[test]
    fn player_recipe_is_craftable() {
        let mut graph = graph();
        graph.define_combo("mud", "water", "swamp").unwrap();
        let mut ledger = DiscoveryLedger::default();
        crate::transfer::update(&graph, &mut ledger, &["mud", "water"]).unwrap();
        let outcome = graph.combine(&mut ledger, "water", "mud");
        assert_eq!(outcome.product_name(), Some("Swamp"));
    }
}
