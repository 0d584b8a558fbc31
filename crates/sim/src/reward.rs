use driveball_shared::*;
use glam::DVec2;

use crate::physics::BallState;

/// Reward and policy-side termination for one frame. Consumes the
/// post-step state, the action that produced it, and the containment
/// result. `dwell_frames` is the consecutive in-goal counter; only the
/// dwell variant reads or writes it.
pub fn evaluate(
    config: &EnvConfig,
    ball: &BallState,
    goal: DVec2,
    action: &Action,
    in_goal: bool,
    dwell_frames: &mut u32,
) -> (f64, bool) {
    match config.variant {
        Variant::SparseReach => {
            if in_goal {
                (config.goal_reward, true)
            } else {
                (-config.frame_penalty, false)
            }
        }
        Variant::PositionStop => {
            // Success requires exactly zero velocity, not an epsilon band.
            if in_goal && ball.velocity.x == 0.0 && ball.velocity.y == 0.0 {
                (config.goal_reward, true)
            } else {
                (-config.frame_penalty, false)
            }
        }
        Variant::QuadrantApproach => {
            if in_goal {
                (config.goal_reward, true)
            } else {
                (approach_shaping(config, ball, goal, action), false)
            }
        }
        Variant::DwellTime => {
            if in_goal {
                *dwell_frames += 1;
                if *dwell_frames >= config.dwell_frames {
                    (2.0 * (config.approach_reward + config.dwell_reward_max), true)
                } else {
                    let ramp = f64::from(*dwell_frames) / f64::from(config.dwell_frames)
                        * config.dwell_reward_max;
                    (2.0 * config.approach_reward + ramp, false)
                }
            } else {
                *dwell_frames = 0;
                (approach_shaping(config, ball, goal, action), false)
            }
        }
    }
}

/// Directional-intent shaping: rewarded only when the commanded thrust
/// points toward the goal on both axes, judged by sign alone.
fn approach_shaping(config: &EnvConfig, ball: &BallState, goal: DVec2, action: &Action) -> f64 {
    let toward_x = sign(goal.x - ball.position.x);
    let toward_y = sign(goal.y - ball.position.y);
    if sign(action.ax) == toward_x && sign(action.ay) == toward_y {
        config.approach_reward
    } else {
        -config.frame_penalty
    }
}

// Three-way sign: zero maps to zero, unlike f64::signum.
fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f64, y: f64) -> BallState {
        BallState::at_rest(DVec2::new(x, y))
    }

    #[test]
    fn test_sparse_reach_hit_and_miss() {
        let config = EnvConfig::for_variant(Variant::SparseReach);
        let goal = DVec2::new(100.0, 100.0);
        let mut dwell = 0;

        let (reward, done) = evaluate(&config, &ball_at(100.0, 100.0), goal, &Action::none(), true, &mut dwell);
        assert_eq!(reward, config.goal_reward);
        assert!(done);

        let (reward, done) = evaluate(&config, &ball_at(10.0, 10.0), goal, &Action::none(), false, &mut dwell);
        assert_eq!(reward, -config.frame_penalty);
        assert!(!done);
    }

    #[test]
    fn test_position_stop_requires_exact_rest() {
        let config = EnvConfig::for_variant(Variant::PositionStop);
        let goal = DVec2::new(100.0, 100.0);
        let mut dwell = 0;

        let mut moving = ball_at(100.0, 100.0);
        moving.velocity = DVec2::new(0.001, 0.0);
        let (reward, done) = evaluate(&config, &moving, goal, &Action::none(), true, &mut dwell);
        assert_eq!(reward, -config.frame_penalty, "contained but moving must not succeed");
        assert!(!done);

        let resting = ball_at(100.0, 100.0);
        let (reward, done) = evaluate(&config, &resting, goal, &Action::none(), true, &mut dwell);
        assert_eq!(reward, config.goal_reward);
        assert!(done);
    }

    #[test]
    fn test_quadrant_shaping_sign_agreement() {
        let config = EnvConfig::for_variant(Variant::QuadrantApproach);
        let goal = config.goal_center();
        let mut dwell = 0;

        // Goal is up-right of the ball: both offsets positive
        let below_left = ball_at(30.0, 30.0);
        let (reward, _) = evaluate(&config, &below_left, goal, &Action::new(50.0, 50.0), false, &mut dwell);
        assert_eq!(reward, config.approach_reward);

        let (reward, _) = evaluate(&config, &below_left, goal, &Action::new(50.0, -50.0), false, &mut dwell);
        assert_eq!(reward, -config.frame_penalty);

        // Zero thrust never counts as pointing toward an off-axis goal
        let (reward, _) = evaluate(&config, &below_left, goal, &Action::none(), false, &mut dwell);
        assert_eq!(reward, -config.frame_penalty);

        // Goal is down-left of the ball: negative thrust matches
        let above_right = ball_at(200.0, 200.0);
        let (reward, _) = evaluate(&config, &above_right, goal, &Action::new(-50.0, -50.0), false, &mut dwell);
        assert_eq!(reward, config.approach_reward);
    }

    #[test]
    fn test_quadrant_containment_outranks_shaping() {
        let config = EnvConfig::for_variant(Variant::QuadrantApproach);
        let goal = config.goal_center();
        let mut dwell = 0;

        // Thrust pointing away is irrelevant once contained
        let (reward, done) = evaluate(
            &config,
            &ball_at(goal.x, goal.y),
            goal,
            &Action::new(-50.0, -50.0),
            true,
            &mut dwell,
        );
        assert_eq!(reward, config.goal_reward);
        assert!(done);
    }

    #[test]
    fn test_dwell_ramp_then_terminal_bonus() {
        let config = EnvConfig::for_variant(Variant::DwellTime);
        let goal = config.goal_center();
        let ball = ball_at(goal.x, goal.y);
        let mut dwell = 0;
        let mut previous = f64::NEG_INFINITY;

        for frame in 1..config.dwell_frames {
            let (reward, done) = evaluate(&config, &ball, goal, &Action::none(), true, &mut dwell);
            let expected = 2.0 * config.approach_reward
                + f64::from(frame) / f64::from(config.dwell_frames) * config.dwell_reward_max;
            assert_eq!(reward, expected, "ramp mismatch at dwell frame {frame}");
            assert!(reward > previous, "dwell reward must strictly increase");
            assert!(!done);
            previous = reward;
        }

        let (reward, done) = evaluate(&config, &ball, goal, &Action::none(), true, &mut dwell);
        assert_eq!(reward, 2.0 * (config.approach_reward + config.dwell_reward_max));
        assert!(done, "dwell budget reached must terminate");
    }

    #[test]
    fn test_dwell_exit_resets_counter() {
        let config = EnvConfig::for_variant(Variant::DwellTime);
        let goal = config.goal_center();
        let mut dwell = 37;

        let (reward, done) = evaluate(&config, &ball_at(10.0, 10.0), goal, &Action::new(50.0, 50.0), false, &mut dwell);
        assert_eq!(dwell, 0, "leaving the disk must clear the dwell counter");
        assert_eq!(reward, config.approach_reward);
        assert!(!done);
    }
}
