use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Unknown falling object: {0}")]
    UnknownObject(String),

    #[error("Invalid object parameters: {0}")]
    InvalidParameters(String),
}
