#![allow(clippy::float_cmp)]

use time::Duration;

use super::*;

fn at(secs: i64) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_700_000_000 + secs).unwrap()
}

fn record(name: &str, cost: f64) -> PlacementRecord {
    PlacementRecord {
        source_component_id: Uuid::new_v4(),
        name: name.to_string(),
        cost,
        x: Some(100.0),
        y: Some(100.0),
        line_target_x: Some(200.0),
        line_target_y: Some(200.0),
    }
}

fn draft(id: Option<AssemblyId>, name: &str, placements: Vec<PlacementRecord>) -> AssemblyDraft {
    let total_cost = placements.iter().map(|p| p.cost).sum();
    AssemblyDraft { id, name: name.to_string(), placements, total_cost }
}

// =============================================================
// save
// =============================================================

#[test]
fn save_without_id_creates() {
    let mut store = MemoryAssemblies::new();
    let saved = store
        .save_at(draft(None, "Kitchen Blind", vec![record("Headrail", 15.75), record("Brackets", 2.50)]), at(0))
        .unwrap();

    assert_eq!(saved.outcome, SaveOutcome::Created);
    assert_eq!(saved.assembly.name, "Kitchen Blind");
    assert_eq!(saved.assembly.total_cost, 18.25);
    assert_eq!(saved.assembly.component_placements.len(), 2);
    assert_eq!(saved.assembly.created_at, at(0));
    assert_eq!(saved.assembly.updated_at, at(0));
    assert_eq!(store.get(&saved.assembly.id), Some(saved.assembly));
}

#[test]
fn save_with_id_updates_in_place() {
    let mut store = MemoryAssemblies::new();
    let first = store.save_at(draft(None, "Den", vec![record("Fabric", 5.5)]), at(0)).unwrap();
    let id = first.assembly.id;

    let second = store.save_at(draft(Some(id), "Den v2", vec![]), at(60)).unwrap();

    assert_eq!(second.outcome, SaveOutcome::Updated);
    assert_eq!(second.assembly.id, id);
    assert_eq!(second.assembly.name, "Den v2");
    assert_eq!(second.assembly.total_cost, 0.0);
    assert!(second.assembly.component_placements.is_empty());
    assert_eq!(store.len(), 1);
}

#[test]
fn created_at_is_fixed_and_updated_at_is_monotone() {
    let mut store = MemoryAssemblies::new();
    let id = store.save_at(draft(None, "Den", vec![]), at(10)).unwrap().assembly.id;

    let later = store.save_at(draft(Some(id), "Den", vec![]), at(20)).unwrap().assembly;
    assert_eq!(later.created_at, at(10));
    assert_eq!(later.updated_at, at(20));

    // A clock that went backwards does not move updatedAt back.
    let skewed = store.save_at(draft(Some(id), "Den", vec![]), at(20) - Duration::seconds(5)).unwrap().assembly;
    assert_eq!(skewed.created_at, at(10));
    assert_eq!(skewed.updated_at, at(20));
}

#[test]
fn save_rejects_blank_name() {
    let mut store = MemoryAssemblies::new();
    assert_eq!(store.save(draft(None, "", vec![])), Err(ValidationError::BlankAssemblyName));
    assert_eq!(store.save(draft(None, "   ", vec![])), Err(ValidationError::BlankAssemblyName));
    assert!(store.is_empty());
}

#[test]
fn save_with_deleted_id_reinserts_under_same_id() {
    let mut store = MemoryAssemblies::new();
    let id = store.save_at(draft(None, "Den", vec![]), at(0)).unwrap().assembly.id;
    store.remove(&id);

    let saved = store.save_at(draft(Some(id), "Den", vec![]), at(30)).unwrap();
    assert_eq!(saved.outcome, SaveOutcome::Created);
    assert_eq!(saved.assembly.id, id);
    assert_eq!(saved.assembly.created_at, at(30));
    assert_eq!(store.len(), 1);
}

#[test]
fn list_keeps_first_save_order() {
    let mut store = MemoryAssemblies::new();
    let a = store.save_at(draft(None, "A", vec![]), at(0)).unwrap().assembly.id;
    let b = store.save_at(draft(None, "B", vec![]), at(1)).unwrap().assembly.id;
    store.save_at(draft(Some(a), "A2", vec![]), at(2)).unwrap();

    let ids: Vec<AssemblyId> = store.list().iter().map(|x| x.id).collect();
    assert_eq!(ids, [a, b]);
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_twice_is_noop() {
    let mut store = MemoryAssemblies::new();
    let id = store.save(draft(None, "Den", vec![])).unwrap().assembly.id;
    assert!(store.remove(&id).is_some());
    assert!(store.remove(&id).is_none());
    assert!(store.get(&id).is_none());
}

// =============================================================
// JSON
// =============================================================

#[test]
fn json_uses_camel_case_and_rfc3339() {
    let mut store = MemoryAssemblies::new();
    let assembly = store.save_at(draft(None, "Den", vec![record("Fabric", 5.5)]), at(0)).unwrap().assembly;

    let json = assembly.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["name"], "Den");
    assert_eq!(value["totalCost"], 5.5);
    assert_eq!(value["createdAt"], "2023-11-14T22:13:20Z");
    assert_eq!(value["componentPlacements"][0]["lineTargetX"], 200.0);
    assert!(value["componentPlacements"][0].get("instanceId").is_none());

    assert_eq!(Assembly::from_json(&json).unwrap(), assembly);
}

#[test]
fn json_missing_coordinates_parse_as_absent() {
    let raw = r#"{
        "id": "8f7c1c44-3c47-4b3f-9f59-2ad1b1b0a001",
        "name": "Legacy",
        "componentPlacements": [
            {"sourceComponentId": "8f7c1c44-3c47-4b3f-9f59-2ad1b1b0a002", "name": "Chain", "cost": 3.2}
        ],
        "totalCost": 3.2,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z"
    }"#;
    let assembly = Assembly::from_json(raw).unwrap();
    let p = &assembly.component_placements[0];
    assert_eq!(p.x, None);
    assert_eq!(p.line_target_y, None);
}
