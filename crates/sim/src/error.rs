use thiserror::Error;

use crate::env::Phase;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvError {
    #[error("Action ({0}, {1}) outside acceleration limit +/-{2}")]
    InvalidAction(f64, f64, f64),
    #[error("Step called while episode is {0:?}; call reset first")]
    NotReset(Phase),
    #[error("Expected {0} actions, got {1}")]
    ActionCountMismatch(usize, usize),
}
