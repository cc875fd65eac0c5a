//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TabError {
    #[error("Invalid style policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid animation: {0}")]
    InvalidAnimation(String),
}
