use driveball_shared::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use rayon::prelude::*;

use crate::env::BallEnv;
use crate::error::EnvError;

/// Vectorized driver stepping N independent episodes in parallel.
///
/// Episodes that finish during `step_all` are reset in place, and the
/// returned observation for that slot already belongs to the replacement
/// episode. Each episode owns its own generator, seeded from the batch
/// seed, so a batch is deterministic end to end.
pub struct BatchEnv {
    config: EnvConfig,
    envs: Vec<BallEnv>,
}

impl BatchEnv {
    pub fn new(config: EnvConfig, n_envs: usize, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let envs = (0..n_envs)
            .map(|_| BallEnv::with_seed(config.clone(), rng.gen()))
            .collect();
        Self { config, envs }
    }

    pub fn len(&self) -> usize {
        self.envs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }

    pub fn reset_all(&mut self) -> Vec<Observation> {
        self.envs.par_iter_mut().map(|env| env.reset()).collect()
    }

    /// Step every episode with its own action. All actions are validated
    /// before any episode moves, so a rejected batch changes nothing.
    pub fn step_all(&mut self, actions: &[Action]) -> Result<Vec<Step>, EnvError> {
        if actions.len() != self.envs.len() {
            return Err(EnvError::ActionCountMismatch(self.envs.len(), actions.len()));
        }
        let limit = self.config.max_acceleration;
        for action in actions {
            if !(action.ax.abs() <= limit && action.ay.abs() <= limit) {
                return Err(EnvError::InvalidAction(action.ax, action.ay, limit));
            }
        }

        self.envs
            .par_iter_mut()
            .zip(actions.par_iter())
            .map(|(env, action)| {
                let mut step = env.step(*action)?;
                if step.done {
                    step.observation = env.reset();
                }
                Ok(step)
            })
            .collect()
    }
}
