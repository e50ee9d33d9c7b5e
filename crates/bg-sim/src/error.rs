use thiserror::Error;

use bg_agent::AgentError;
use bg_behavior::BehaviorError;
use bg_core::BgError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] BgError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error("world is {got_width}×{got_height} but the config expects {width}×{height}")]
    DimensionMismatch {
        width:      u32,
        height:     u32,
        got_width:  u32,
        got_height: u32,
    },

    #[error("world invariant violated: {0}")]
    Invariant(String),
}

pub type SimResult<T> = Result<T, SimError>;
