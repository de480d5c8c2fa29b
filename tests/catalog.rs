// Catalog loading and append guard rails.
#[path = "support/common.rs"]
mod common;

use anyhow::Result;
use partsbench::PlannerError;
use partsbench::catalog::{append_part, load_catalog_from_path};
use std::fs;

use common::{TempData, part};

#[test]
fn loads_grouped_in_file_order() -> Result<()> {
    let data = TempData::new();
    let catalog = load_catalog_from_path(&data.catalog_path())?;

    let categories: Vec<_> = catalog.categories().collect();
    assert_eq!(categories, vec!["Fork", "Wheelset", "Drivetrain"]);

    let forks: Vec<_> = catalog.parts("Fork").iter().map(|p| p.model.as_str()).collect();
    assert_eq!(forks, vec!["Reba RL", "32 Step-Cast"]);

    // Every part in a category's list carries that category.
    for category in catalog.categories() {
        assert!(catalog.parts(category).iter().all(|p| p.category == category));
    }
    Ok(())
}

#[test]
fn missing_catalog_is_catalog_missing() {
    let data = TempData::empty();
    let err = load_catalog_from_path(&data.catalog_path()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PlannerError>(),
        Some(PlannerError::CatalogMissing { .. })
    ));
}

#[test]
fn bad_rows_are_skipped_and_reported_rows_survive() -> Result<()> {
    let data = TempData::empty();
    data.write_file(
        "parts.csv",
        "category,brand,model,variant,weight_g,price,notes,source,link\n\
         Fork,RockShox,Reba RL,100mm,1650,689\n\
         ,NoCategory,Mystery,,10,1\n\
         Fork,Fox,32 Step-Cast,100mm,-5,1100\n\
         Seatpost,Generic,Alloy 27.2,,,\n",
    );
    let catalog = load_catalog_from_path(&data.catalog_path())?;
    assert_eq!(catalog.part_count(), 2);
    // Empty measures read as zero rather than failing the row.
    assert_eq!(catalog.parts("Seatpost")[0].weight_g, 0.0);
    Ok(())
}

#[test]
fn append_is_additive_and_preserves_prior_rows() -> Result<()> {
    let data = TempData::new();
    let before = fs::read(data.catalog_path())?;
    let before_rows = before.iter().filter(|b| **b == b'\n').count();

    append_part(
        &data.catalog_path(),
        &part("Saddle", "Fizik", "Arione R3", 205.0, 180.0),
    )?;

    let after = fs::read(data.catalog_path())?;
    assert_eq!(&after[..before.len()], &before[..], "prior bytes must not change");
    assert_eq!(after.iter().filter(|b| **b == b'\n').count(), before_rows + 1);

    // The appended row is visible to a fresh load in the same process.
    let catalog = load_catalog_from_path(&data.catalog_path())?;
    assert_eq!(catalog.parts("Saddle").len(), 1);
    assert_eq!(catalog.parts("Saddle")[0].price, 180.0);
    Ok(())
}
