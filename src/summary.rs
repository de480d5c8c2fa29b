//! Totals and the per-category listing derived from a scenario.
//!
//! A summary is recomputed on demand and never stored on its own; the saved
//! scenario embeds a copy of the totals purely for round-trip fidelity.

use crate::catalog::Catalog;
use crate::scenario::Scenario;

/// One selected category in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub category: String,
    pub brand: String,
    pub model: String,
    pub variant: String,
    pub weight_g: f64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_weight_g: f64,
    pub total_price: f64,
    pub rows: Vec<SummaryRow>,
}

/// Folds a scenario into totals.
///
/// Rows follow the catalog's first-seen category order and cover selected
/// categories only; unselected categories contribute nothing and are omitted
/// from the rows. Chosen categories the catalog no longer carries (a scenario
/// loaded against a changed catalog) follow in name order.
pub fn summarize(catalog: &Catalog, scenario: &Scenario) -> Summary {
    let mut rows = Vec::new();
    let mut push = |category: &str| {
        if let Some(part) = scenario.chosen.get(category) {
            rows.push(SummaryRow {
                category: category.to_string(),
                brand: part.brand.clone(),
                model: part.model.clone(),
                variant: part.variant.clone(),
                weight_g: part.weight_g,
                price: part.price,
            });
        }
    };
    for category in catalog.categories() {
        push(category);
    }
    let known: Vec<&str> = catalog.categories().collect();
    for category in scenario.chosen.keys() {
        if !known.contains(&category.as_str()) {
            push(category);
        }
    }

    let total_weight_g = rows.iter().map(|row| row.weight_g).sum();
    let total_price = rows.iter().map(|row| row.price).sum();
    Summary {
        total_weight_g,
        total_price,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Part;
    use std::collections::BTreeMap;

    fn part(category: &str, model: &str, weight_g: f64, price: f64) -> Part {
        Part {
            category: category.to_string(),
            brand: "Brand".to_string(),
            model: model.to_string(),
            variant: String::new(),
            weight_g,
            price,
            notes: String::new(),
            source: String::new(),
            link: String::new(),
        }
    }

    fn catalog_of(parts: Vec<Part>) -> Catalog {
        let mut catalog = Catalog::default();
        for p in parts {
            catalog.insert(p);
        }
        catalog
    }

    #[test]
    fn sums_only_selected_categories() {
        let catalog = catalog_of(vec![
            part("Fork", "Reba RL", 1650.0, 689.0),
            part("Wheelset", "XR 1700", 1672.0, 1250.0),
            part("Drivetrain", "GX Eagle", 2100.0, 545.0),
        ]);
        let mut chosen = BTreeMap::new();
        chosen.insert("Fork".to_string(), catalog.parts("Fork")[0].clone());
        chosen.insert("Wheelset".to_string(), catalog.parts("Wheelset")[0].clone());
        let scenario = Scenario::new("test".to_string(), chosen);

        let summary = summarize(&catalog, &scenario);
        assert_eq!(summary.total_weight_g, 3322.0);
        assert_eq!(summary.total_price, 1939.0);
        // Drivetrain is unselected and therefore omitted.
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].category, "Fork");
        assert_eq!(summary.rows[1].category, "Wheelset");
    }

    #[test]
    fn empty_selection_yields_zero_totals() {
        let catalog = catalog_of(vec![part("Fork", "Reba RL", 1650.0, 689.0)]);
        let scenario = Scenario::new("empty".to_string(), BTreeMap::new());
        let summary = summarize(&catalog, &scenario);
        assert_eq!(summary.total_weight_g, 0.0);
        assert_eq!(summary.total_price, 0.0);
        assert!(summary.rows.is_empty());
    }

    #[test]
    fn chosen_category_missing_from_catalog_still_counts() {
        let catalog = catalog_of(vec![part("Fork", "Reba RL", 1650.0, 689.0)]);
        let mut chosen = BTreeMap::new();
        chosen.insert("Fork".to_string(), catalog.parts("Fork")[0].clone());
        chosen.insert("Saddle".to_string(), part("Saddle", "Arione", 200.0, 150.0));
        let scenario = Scenario::new("stale".to_string(), chosen);

        let summary = summarize(&catalog, &scenario);
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[1].category, "Saddle");
        assert_eq!(summary.total_weight_g, 1850.0);
    }
}
