use std::collections::HashMap;

use driveball_shared::*;
use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::error::EnvError;
use crate::physics::{in_goal_disk, BallState};
use crate::reward;

/// Episode lifecycle. `step` is only legal while `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Running,
    Terminal,
}

/// Single-episode environment: one ball, one goal, one reward policy.
///
/// ```
/// use driveball_shared::{Action, EnvConfig, Variant};
/// use driveball_sim::BallEnv;
///
/// let mut env = BallEnv::with_seed(EnvConfig::for_variant(Variant::SparseReach), 42);
/// env.reset();
/// let step = env.step(Action::none()).unwrap();
/// assert_eq!(step.observation.vx, 0.0);
/// ```
pub struct BallEnv {
    pub config: EnvConfig,
    pub ball: BallState,
    pub goal: DVec2,
    pub frame: u32,
    pub dwell_frames: u32,
    pub phase: Phase,
    rng: Pcg64,
}

impl BallEnv {
    pub fn new(config: EnvConfig) -> Self {
        Self::with_rng(config, Pcg64::from_entropy())
    }

    pub fn with_seed(config: EnvConfig, seed: u64) -> Self {
        Self::with_rng(config, Pcg64::seed_from_u64(seed))
    }

    fn with_rng(config: EnvConfig, rng: Pcg64) -> Self {
        Self {
            ball: BallState::at_rest(DVec2::ZERO),
            goal: config.goal_center(),
            frame: 0,
            dwell_frames: 0,
            phase: Phase::Uninitialized,
            rng,
            config,
        }
    }

    /// Start a fresh episode. Safe to call at any time, including
    /// mid-episode, which abandons the running one.
    pub fn reset(&mut self) -> Observation {
        self.goal = if self.config.variant.fixed_goal() {
            self.config.goal_center()
        } else {
            self.sample_point()
        };
        self.ball = BallState::at_rest(self.sample_point());
        self.frame = 0;
        self.dwell_frames = 0;
        self.phase = Phase::Running;
        log::debug!(
            "reset {:?}: ball ({:.1}, {:.1}), goal ({:.1}, {:.1})",
            self.config.variant,
            self.ball.position.x,
            self.ball.position.y,
            self.goal.x,
            self.goal.y
        );
        self.observe()
    }

    /// Advance one frame. Precondition violations surface as errors and
    /// leave the episode untouched.
    pub fn step(&mut self, action: Action) -> Result<Step, EnvError> {
        if self.phase != Phase::Running {
            return Err(EnvError::NotReset(self.phase));
        }
        let limit = self.config.max_acceleration;
        // Written so non-finite components also fail the check
        if !(action.ax.abs() <= limit && action.ay.abs() <= limit) {
            return Err(EnvError::InvalidAction(action.ax, action.ay, limit));
        }

        self.ball.step(&action, &self.config);
        let in_goal = in_goal_disk(self.ball.position, self.goal, self.config.goal_radius);
        let (reward, reached) = reward::evaluate(
            &self.config,
            &self.ball,
            self.goal,
            &action,
            in_goal,
            &mut self.dwell_frames,
        );

        self.frame += 1;
        let done = reached || self.frame >= self.config.max_frames;
        if done {
            self.phase = Phase::Terminal;
            log::debug!("done at frame {}: reward {:.1}", self.frame, reward);
        }

        Ok(Step {
            observation: self.observe(),
            reward,
            done,
            info: HashMap::new(),
        })
    }

    pub fn action_space(&self) -> ActionSpace {
        let a = self.config.max_acceleration;
        ActionSpace {
            low: [-a; ACTION_SIZE],
            high: [a; ACTION_SIZE],
        }
    }

    /// Goal offsets span the full world extent when the goal is sampled,
    /// half of it when the goal sits at the center.
    pub fn observation_space(&self) -> ObservationSpace {
        let (dx, dy) = if self.config.variant.fixed_goal() {
            (self.config.world_width * 0.5, self.config.world_height * 0.5)
        } else {
            (self.config.world_width, self.config.world_height)
        };
        let v = self.config.max_velocity;
        ObservationSpace {
            low: [-dx, -dy, -v, -v],
            high: [dx, dy, v, v],
        }
    }

    fn sample_point(&mut self) -> DVec2 {
        DVec2::new(
            self.rng.gen_range(0.0..self.config.world_width),
            self.rng.gen_range(0.0..self.config.world_height),
        )
    }

    fn observe(&self) -> Observation {
        Observation::relative(self.goal, self.ball.position, self.ball.velocity)
    }
}
