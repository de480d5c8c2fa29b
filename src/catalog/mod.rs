//! Parts catalog wiring.
//!
//! This module wraps the parts file on disk (`parts.csv`) so callers load a
//! grouped, display-ordered view and append new rows through one seam. Types
//! here mirror the file's columns; callers use [`Catalog`] for grouped
//! lookups and [`editor`] to append.

pub mod editor;
pub mod index;
pub mod model;

pub use editor::{add_part_interactive, append_part};
pub use index::{Catalog, load_catalog_from_path};
pub use model::Part;

/// Column order of the backing catalog file.
pub const CATALOG_HEADER: [&str; 9] = [
    "category", "brand", "model", "variant", "weight_g", "price", "notes", "source", "link",
];
