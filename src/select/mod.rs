//! Turns a catalog into a set of chosen parts.
//!
//! Three entry points share one output contract (category → chosen part):
//! interactive prompting, declarative resolution from a mapping file, and
//! clone seeding from a previously saved scenario.

pub mod declarative;
pub mod interactive;

pub use declarative::{load_mapping, resolve};
pub use interactive::select_interactive;

use crate::catalog::{Catalog, Part};
use crate::scenario::Scenario;
use std::collections::BTreeMap;

/// Re-anchors a saved scenario's choices to the current catalog.
///
/// Each saved part is matched by exact brand and model within its category;
/// parts the catalog no longer carries seed nothing. The result feeds the
/// interactive selector as per-category defaults ("press Enter to keep").
pub fn seed_from_scenario(catalog: &Catalog, previous: &Scenario) -> BTreeMap<String, Part> {
    let mut seed = BTreeMap::new();
    for (category, saved) in &previous.chosen {
        let hit = catalog
            .parts(category)
            .iter()
            .find(|part| part.brand == saved.brand && part.model == saved.model);
        if let Some(part) = hit {
            seed.insert(category.clone(), part.clone());
        }
    }
    seed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(category: &str, brand: &str, model: &str) -> Part {
        Part {
            category: category.to_string(),
            brand: brand.to_string(),
            model: model.to_string(),
            variant: String::new(),
            weight_g: 1.0,
            price: 1.0,
            notes: String::new(),
            source: String::new(),
            link: String::new(),
        }
    }

    #[test]
    fn seed_drops_parts_no_longer_in_catalog() {
        let mut catalog = Catalog::default();
        catalog.insert(part("Fork", "RockShox", "Reba RL"));

        let mut chosen = BTreeMap::new();
        chosen.insert("Fork".to_string(), part("Fork", "RockShox", "Reba RL"));
        chosen.insert("Saddle".to_string(), part("Saddle", "Fizik", "Arione"));
        let previous = Scenario::new("old".to_string(), chosen);

        let seed = seed_from_scenario(&catalog, &previous);
        assert_eq!(seed.len(), 1);
        assert!(seed.contains_key("Fork"));
    }
}
