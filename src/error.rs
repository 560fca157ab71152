use thiserror::Error;

/// Errors raised while validating estimator inputs.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CostError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },

    #[error("unknown protocol '{0}' (run `zkgas list` for the available names)")]
    UnknownProtocol(String),

    #[error("unknown cost table '{0}' (expected 'standard' or 'optimized')")]
    UnknownCostTable(String),
}

pub type Result<T> = std::result::Result<T, CostError>;
