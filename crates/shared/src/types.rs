use std::collections::HashMap;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Commanded thrust, in m/s² per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub ax: f64,
    pub ay: f64,
}

impl Action {
    pub fn new(ax: f64, ay: f64) -> Self {
        Self { ax, ay }
    }

    pub fn none() -> Self {
        Self { ax: 0.0, ay: 0.0 }
    }

    /// Values are taken as-is; out-of-range components are rejected by
    /// `step`, not clamped.
    pub fn from_raw(raw: [f64; ACTION_SIZE]) -> Self {
        Self {
            ax: raw[0],
            ay: raw[1],
        }
    }

    pub fn to_raw(&self) -> [f64; ACTION_SIZE] {
        [self.ax, self.ay]
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::none()
    }
}

/// What the policy sees: goal offset from the ball, plus velocity.
/// Absolute position is never observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub goal_dx: f64,
    pub goal_dy: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Observation {
    pub fn relative(goal: DVec2, position: DVec2, velocity: DVec2) -> Self {
        Self {
            goal_dx: goal.x - position.x,
            goal_dy: goal.y - position.y,
            vx: velocity.x,
            vy: velocity.y,
        }
    }

    pub fn to_raw(&self) -> [f64; OBS_SIZE] {
        [self.goal_dx, self.goal_dy, self.vx, self.vy]
    }
}

/// The four reward policies. The variant also fixes the world scale and
/// whether the goal is sampled or pinned to the world center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    SparseReach,
    PositionStop,
    QuadrantApproach,
    DwellTime,
}

impl Variant {
    pub fn world_scale(&self) -> f64 {
        match self {
            Variant::SparseReach | Variant::PositionStop => 1.0,
            Variant::QuadrantApproach | Variant::DwellTime => 2.0,
        }
    }

    pub fn fixed_goal(&self) -> bool {
        matches!(self, Variant::QuadrantApproach | Variant::DwellTime)
    }
}

/// Immutable per-episode-family configuration. Built once per variant and
/// never mutated by the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvConfig {
    pub variant: Variant,
    pub dt: f64,
    pub gravity: f64,
    pub max_acceleration: f64,
    pub max_velocity: f64,
    pub world_width: f64,
    pub world_height: f64,
    pub goal_radius: f64,
    pub max_frames: u32,
    pub frame_penalty: f64,
    pub goal_reward: f64,
    pub approach_reward: f64,
    pub dwell_frames: u32,
    pub dwell_reward_max: f64,
}

impl EnvConfig {
    pub fn for_variant(variant: Variant) -> Self {
        let scale = variant.world_scale();
        Self {
            variant,
            dt: DT,
            gravity: GRAVITY,
            max_acceleration: MAX_ACCELERATION,
            max_velocity: MAX_VELOCITY,
            world_width: WORLD_WIDTH * scale,
            world_height: WORLD_HEIGHT * scale,
            goal_radius: GOAL_RADIUS,
            max_frames: MAX_FRAMES,
            frame_penalty: FRAME_PENALTY,
            goal_reward: GOAL_REWARD,
            approach_reward: APPROACH_REWARD,
            dwell_frames: DWELL_FRAMES,
            dwell_reward_max: DWELL_REWARD_MAX,
        }
    }

    pub fn goal_center(&self) -> DVec2 {
        DVec2::new(self.world_width * 0.5, self.world_height * 0.5)
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::for_variant(Variant::SparseReach)
    }
}

/// Inclusive per-component action bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSpace {
    pub low: [f64; ACTION_SIZE],
    pub high: [f64; ACTION_SIZE],
}

/// Inclusive per-component observation bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationSpace {
    pub low: [f64; OBS_SIZE],
    pub high: [f64; OBS_SIZE],
}

/// One step's outcome. `info` is an always-empty metadata map kept for
/// harness compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
    pub info: HashMap<String, String>,
}
