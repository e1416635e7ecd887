use thiserror::Error;

use crate::mx::Error as MxError;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error(transparent)]
    Resolver(#[from] MxError),
    #[error("invalid local host identity {0:?}")]
    InvalidLocalHost(String),
    #[error("invalid sender address {0:?}")]
    InvalidSender(String),
}
