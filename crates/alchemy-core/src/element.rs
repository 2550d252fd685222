use serde::{Deserialize, Serialize};

/// Identifies an element in a [`CombinationGraph`](crate::graph::CombinationGraph).
/// Cheap to copy and compare. Only meaningful for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u32);

/// An element in the crafting catalog.
///
/// Identity is the canonical (lowercase) name; the display form is derived
/// from it and only used for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    name: String,
    display: String,
}

impl Element {
    /// Build an element from an already canonical name.
    pub(crate) fn new(name: String) -> Self {
        let display = title_case(&name);
        Self { name, display }
    }

    /// The canonical name, used as the catalog key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The title-cased name shown to the player.
    pub fn display_name(&self) -> &str {
        &self.display
    }
}

/// Normalize a user- or file-supplied name into its canonical form.
pub fn canonical_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Title-case a name: a letter is upper-cased when the character before it
/// is not alphabetic, and lower-cased otherwise.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_alpha = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_name_trims_and_lowercases() {
        assert_eq!(canonical_name("  Water "), "water");
        assert_eq!(canonical_name("CARBON Dioxide"), "carbon dioxide");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("mud"), "Mud");
        assert_eq!(title_case("carbon dioxide"), "Carbon Dioxide");
        assert_eq!(title_case("h2o"), "H2O");
        assert_eq!(title_case("jack-o-lantern"), "Jack-O-Lantern");
    }

    #[test]
    fn element_display_is_derived() {
        let e = Element::new("sea salt".to_string());
        assert_eq!(e.name(), "sea salt");
        assert_eq!(e.display_name(), "Sea Salt");
    }

    #[test]
    fn element_ids_order_by_index() {
        assert!(ElementId(0) < ElementId(1));
        assert_eq!(ElementId(3), ElementId(3));
    }
}
