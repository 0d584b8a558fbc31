use driveball_shared::*;
use glam::DVec2;

/// Rigid point state: position and velocity in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallState {
    pub position: DVec2,
    pub velocity: DVec2,
}

impl BallState {
    pub fn at_rest(position: DVec2) -> Self {
        Self {
            position,
            velocity: DVec2::ZERO,
        }
    }

    /// Advance one frame. Position integrates the previous frame's
    /// velocity, then velocity picks up thrust and gravity.
    pub fn step(&mut self, action: &Action, config: &EnvConfig) {
        // Integrate position first
        self.position += self.velocity * config.dt;

        // Walls clamp silently, no bounce
        self.position.x = self.position.x.clamp(0.0, config.world_width);
        self.position.y = self.position.y.clamp(0.0, config.world_height);

        // Thrust and gravity
        self.velocity.x += action.ax * config.dt;
        self.velocity.y += (action.ay + config.gravity) * config.dt;

        // Clamp velocity per axis
        self.velocity.x = self.velocity.x.clamp(-config.max_velocity, config.max_velocity);
        self.velocity.y = self.velocity.y.clamp(-config.max_velocity, config.max_velocity);
    }
}

/// Closed-disk containment test; the boundary counts as inside.
pub fn in_goal_disk(position: DVec2, goal: DVec2, radius: f64) -> bool {
    position.distance_squared(goal) <= radius * radius
}
