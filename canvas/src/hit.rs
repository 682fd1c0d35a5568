#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{INSTANCE_BOX_HEIGHT, INSTANCE_BOX_WIDTH, LINE_TARGET_RADIUS_PX};
use crate::geom::Point;
use crate::placement::{InstanceId, PlacedInstance, Placements};

/// Which part of a placed instance was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    LineTarget,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub instance_id: InstanceId,
    pub part: HitPart,
}

/// Canvas-local top-left of an instance's body box.
#[must_use]
pub fn body_origin(inst: &PlacedInstance) -> Point {
    inst.position()
}

/// Whether canvas-local `pt` lies inside the instance body box.
#[must_use]
pub fn body_contains(inst: &PlacedInstance, pt: Point) -> bool {
    let o = body_origin(inst);
    (o.x..=o.x + INSTANCE_BOX_WIDTH).contains(&pt.x) && (o.y..=o.y + INSTANCE_BOX_HEIGHT).contains(&pt.y)
}

/// Whether canvas-local `pt` lies on the instance's line-target handle.
#[must_use]
pub fn line_target_contains(inst: &PlacedInstance, pt: Point) -> bool {
    inst.line_target().distance_to(pt) <= LINE_TARGET_RADIUS_PX
}

/// Find what is under canvas-local `pt`.
///
/// Bodies are stacked above the leader-line layer, so they are checked
/// first; within a layer the most recently dropped instance wins.
#[must_use]
pub fn hit_test(pt: Point, placements: &Placements) -> Option<Hit> {
    let instances = placements.instances();
    if let Some(inst) = instances.iter().rev().find(|i| body_contains(i, pt)) {
        return Some(Hit { instance_id: inst.instance_id, part: HitPart::Body });
    }
    instances
        .iter()
        .rev()
        .find(|i| line_target_contains(i, pt))
        .map(|inst| Hit { instance_id: inst.instance_id, part: HitPart::LineTarget })
}
