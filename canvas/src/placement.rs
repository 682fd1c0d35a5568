//! Placement model: catalog components, placed instances, and the canvas list.
//!
//! `CatalogComponent` is what the library panel offers. Dropping one onto the
//! canvas yields a `PlacedInstance` with its own `InstanceId`, position, and
//! leader-line target. `PlacementRecord` is the persisted form of an instance
//! (no instance id). `Placements` owns the ordered instance list for the
//! assembly under edit and derives the total cost from it.
//!
//! Every coordinate written through `Placements` is clamped to the current
//! canvas bounds.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_PLACEMENT_X, DEFAULT_PLACEMENT_Y, FALLBACK_CANVAS_HEIGHT, FALLBACK_CANVAS_WIDTH};
use crate::geom::{Bounds, Point};

/// Identifier of a catalog component.
pub type ComponentId = Uuid;

/// Identifier of one placement on the canvas. Minted on every drop and load.
pub type InstanceId = Uuid;

/// A priced component offered by the library panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogComponent {
    pub id: ComponentId,
    pub name: String,
    pub cost: f64,
}

/// A component instance positioned on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedInstance {
    pub instance_id: InstanceId,
    pub source_component_id: ComponentId,
    pub name: String,
    pub cost: f64,
    /// Canvas-local x of the instance body's top-left corner.
    pub x: f64,
    /// Canvas-local y of the instance body's top-left corner.
    pub y: f64,
    pub line_target_x: f64,
    pub line_target_y: f64,
}

impl PlacedInstance {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn line_target(&self) -> Point {
        Point::new(self.line_target_x, self.line_target_y)
    }

    /// Persisted form of this instance. The instance id is dropped.
    #[must_use]
    pub fn to_record(&self) -> PlacementRecord {
        PlacementRecord {
            source_component_id: self.source_component_id,
            name: self.name.clone(),
            cost: self.cost,
            x: Some(self.x),
            y: Some(self.y),
            line_target_x: Some(self.line_target_x),
            line_target_y: Some(self.line_target_y),
        }
    }
}

/// A placement as stored inside a saved assembly.
///
/// Coordinates are optional: a missing value is replaced by a default when
/// the record is loaded, while an explicit `0.0` is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRecord {
    pub source_component_id: ComponentId,
    pub name: String,
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_target_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_target_y: Option<f64>,
}

/// The ordered list of placed instances for the assembly under edit.
#[derive(Debug, Clone, Default)]
pub struct Placements {
    instances: Vec<PlacedInstance>,
    bounds: Bounds,
}

impl Placements {
    /// Create an empty canvas with the given bounds.
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self { instances: Vec::new(), bounds }
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Change the canvas size. Existing positions and targets are pulled
    /// back inside the new bounds.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        for inst in &mut self.instances {
            let pos = bounds.clamp(inst.position());
            let target = bounds.clamp(inst.line_target());
            inst.x = pos.x;
            inst.y = pos.y;
            inst.line_target_x = target.x;
            inst.line_target_y = target.y;
        }
    }

    /// Place `component` at canvas-local `at`, clamped to the bounds. The
    /// leader-line target starts at the canvas center.
    pub fn drop_component(&mut self, component: &CatalogComponent, at: Point) -> PlacedInstance {
        let pos = self.bounds.clamp(at);
        let target = self.bounds.center();
        let inst = PlacedInstance {
            instance_id: Uuid::new_v4(),
            source_component_id: component.id,
            name: component.name.clone(),
            cost: component.cost,
            x: pos.x,
            y: pos.y,
            line_target_x: target.x,
            line_target_y: target.y,
        };
        self.instances.push(inst.clone());
        inst
    }

    /// Remove an instance, returning it if it was present.
    pub fn remove(&mut self, id: &InstanceId) -> Option<PlacedInstance> {
        let idx = self.instances.iter().position(|i| i.instance_id == *id)?;
        Some(self.instances.remove(idx))
    }

    /// Move an instance body. Returns the clamped position, or `None` if
    /// the instance doesn't exist.
    pub fn move_instance(&mut self, id: &InstanceId, to: Point) -> Option<Point> {
        let pos = self.bounds.clamp(to);
        let inst = self.get_mut(id)?;
        inst.x = pos.x;
        inst.y = pos.y;
        Some(pos)
    }

    /// Move an instance's leader-line target. Returns the clamped target, or
    /// `None` if the instance doesn't exist.
    pub fn move_line_target(&mut self, id: &InstanceId, to: Point) -> Option<Point> {
        let target = self.bounds.clamp(to);
        let inst = self.get_mut(id)?;
        inst.line_target_x = target.x;
        inst.line_target_y = target.y;
        Some(target)
    }

    /// Replace the whole list from persisted records.
    ///
    /// Every record gets a fresh instance id. A missing (or non-finite)
    /// position falls back to `(50, 50)` and a missing target to the canvas
    /// center. An empty `bounds` falls back to 200 x 150.
    pub fn load_from(&mut self, records: &[PlacementRecord], bounds: Bounds) {
        self.bounds = if bounds.is_empty() {
            Bounds::new(FALLBACK_CANVAS_WIDTH, FALLBACK_CANVAS_HEIGHT)
        } else {
            bounds
        };
        let bounds = self.bounds;
        let center = bounds.center();
        self.instances = records
            .iter()
            .map(|rec| {
                let pos = bounds.clamp(Point::new(
                    present(rec.x).unwrap_or(DEFAULT_PLACEMENT_X),
                    present(rec.y).unwrap_or(DEFAULT_PLACEMENT_Y),
                ));
                let target = bounds.clamp(Point::new(
                    present(rec.line_target_x).unwrap_or(center.x),
                    present(rec.line_target_y).unwrap_or(center.y),
                ));
                PlacedInstance {
                    instance_id: Uuid::new_v4(),
                    source_component_id: rec.source_component_id,
                    name: rec.name.clone(),
                    cost: rec.cost,
                    x: pos.x,
                    y: pos.y,
                    line_target_x: target.x,
                    line_target_y: target.y,
                }
            })
            .collect();
    }

    /// Remove every instance. The total drops to zero.
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Sum of the costs of all current instances.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.instances.iter().map(|i| i.cost).sum()
    }

    /// Persisted records for every instance, in canvas order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PlacementRecord> {
        self.instances.iter().map(PlacedInstance::to_record).collect()
    }

    /// Instances in drop order (later entries draw on top).
    #[must_use]
    pub fn instances(&self) -> &[PlacedInstance] {
        &self.instances
    }

    #[must_use]
    pub fn get(&self, id: &InstanceId) -> Option<&PlacedInstance> {
        self.instances.iter().find(|i| i.instance_id == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &InstanceId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    fn get_mut(&mut self, id: &InstanceId) -> Option<&mut PlacedInstance> {
        self.instances.iter_mut().find(|i| i.instance_id == *id)
    }
}

fn present(v: Option<f64>) -> Option<f64> {
    v.filter(|n| n.is_finite())
}
