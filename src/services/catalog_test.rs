#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// add
// =============================================================

#[test]
fn add_returns_component_and_lists_it() {
    let mut catalog = MemoryCatalog::new();
    let c = catalog.add("Headrail", 15.75).unwrap();
    assert_eq!(c.name, "Headrail");
    assert_eq!(c.cost, 15.75);
    assert_eq!(catalog.list(), vec![c.clone()]);
    assert_eq!(catalog.get(&c.id), Some(c));
}

#[test]
fn add_trims_name() {
    let mut catalog = MemoryCatalog::new();
    let c = catalog.add("  Valance  ", 4.0).unwrap();
    assert_eq!(c.name, "Valance");
}

#[test]
fn add_accepts_zero_cost() {
    let mut catalog = MemoryCatalog::new();
    assert!(catalog.add("Sample swatch", 0.0).is_ok());
}

#[test]
fn add_rejects_blank_name() {
    let mut catalog = MemoryCatalog::new();
    assert_eq!(catalog.add("", 1.0), Err(ValidationError::BlankName));
    assert_eq!(catalog.add(" \t ", 1.0), Err(ValidationError::BlankName));
    assert!(catalog.is_empty());
}

#[test]
fn add_rejects_bad_cost() {
    let mut catalog = MemoryCatalog::new();
    assert_eq!(catalog.add("Chain", -0.01), Err(ValidationError::InvalidCost));
    assert_eq!(catalog.add("Chain", f64::NAN), Err(ValidationError::InvalidCost));
    assert_eq!(catalog.add("Chain", f64::INFINITY), Err(ValidationError::InvalidCost));
    assert!(catalog.is_empty());
}

#[test]
fn list_keeps_insertion_order() {
    let mut catalog = MemoryCatalog::new();
    for name in ["c", "a", "b"] {
        catalog.add(name, 1.0).unwrap();
    }
    let names: Vec<String> = catalog.list().into_iter().map(|c| c.name).collect();
    assert_eq!(names, ["c", "a", "b"]);
}

#[test]
fn ids_are_unique() {
    let mut catalog = MemoryCatalog::new();
    let a = catalog.add("Same", 1.0).unwrap();
    let b = catalog.add("Same", 1.0).unwrap();
    assert_ne!(a.id, b.id);
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_is_idempotent() {
    let mut catalog = MemoryCatalog::new();
    let keep = catalog.add("Keep", 1.0).unwrap();
    let gone = catalog.add("Gone", 2.0).unwrap();

    assert_eq!(catalog.remove(&gone.id), Some(gone.clone()));
    assert_eq!(catalog.remove(&gone.id), None);
    assert_eq!(catalog.list(), vec![keep]);
    assert_eq!(catalog.get(&gone.id), None);
}

// =============================================================
// seeded
// =============================================================

#[test]
fn seeded_catalog_has_starter_components() {
    let catalog = MemoryCatalog::seeded();
    let list = catalog.list();
    assert_eq!(list.len(), 4);
    assert_eq!(list[0].name, "Aluminum Headrail");
    assert_eq!(list[0].cost, 15.75);
    assert_eq!(list[3].name, "Mounting Brackets (pair)");
    assert_eq!(list[3].cost, 2.50);
}

#[test]
fn validate_component_standalone() {
    assert_eq!(validate_component("Fabric", 5.5), Ok(()));
    assert_eq!(validate_component("", 5.5), Err(ValidationError::BlankName));
    assert_eq!(validate_component("Fabric", -5.5), Err(ValidationError::InvalidCost));
}
