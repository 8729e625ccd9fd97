//! Walkable ground: headless замена NavMesh/ground raycast.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Прямоугольник проходимой земли (XZ плоскость)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundPatch {
    pub min: Vec2,
    pub max: Vec2,
}

impl GroundPatch {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.z >= self.min.y && point.z <= self.max.y
    }
}

/// Где есть земля (patrol точки валидируются probe_ground_below)
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkableGround {
    pub patches: Vec<GroundPatch>,
}

impl Default for WalkableGround {
    fn default() -> Self {
        Self {
            patches: vec![GroundPatch::new(Vec2::splat(-20.0), Vec2::splat(20.0))],
        }
    }
}

impl WalkableGround {
    pub fn is_ground_below(&self, point: Vec3) -> bool {
        self.patches.iter().any(|patch| patch.contains(point))
    }
}
