use thiserror::Error;

use bg_agent::AgentError;
use bg_core::BgError;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error(transparent)]
    Core(#[from] BgError),

    #[error(transparent)]
    Agent(#[from] AgentError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
