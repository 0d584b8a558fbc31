// Frame timing
pub const FRAME_RATE: u32 = 30;
pub const DT: f64 = 1.0 / FRAME_RATE as f64;

// Episode
pub const MAX_EPISODE_SECS: u32 = 15;
pub const MAX_FRAMES: u32 = FRAME_RATE * MAX_EPISODE_SECS; // 450

// World (meters; gravity acts along +y)
pub const WORLD_WIDTH: f64 = 125.0;
pub const WORLD_HEIGHT: f64 = 125.0;
pub const GRAVITY: f64 = 9.8;
pub const GOAL_RADIUS: f64 = WORLD_WIDTH * 0.1; // 12.5

// Ball limits (per axis, symmetric)
pub const MAX_ACCELERATION: f64 = 100.0;
pub const MAX_VELOCITY: f64 = MAX_ACCELERATION * 0.5; // 50

// Rewards
pub const FRAME_PENALTY: f64 = 1.0;
pub const GOAL_REWARD: f64 = MAX_FRAMES as f64 * FRAME_PENALTY; // 450, one episode of penalties
pub const APPROACH_REWARD: f64 = FRAME_PENALTY; // 1

// Dwell variant
pub const DWELL_FRAMES: u32 = MAX_FRAMES * 2 / 5; // 180 consecutive in-goal frames to finish
pub const DWELL_REWARD_MAX: f64 = 5.0 * APPROACH_REWARD; // 5

// Interface sizes
pub const OBS_SIZE: usize = 4;
pub const ACTION_SIZE: usize = 2;
