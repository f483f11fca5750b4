use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A hierarchical charge would push a group past its configured
    /// limit. All counters touched by the failed call have already been
    /// rolled back when this is returned.
    #[error("pin limit {limit} exceeded on group `{group}` (charge of {amount} denied)")]
    LimitExceeded {
        group: String,
        limit: u64,
        amount: u64,
    },
    /// Rejected `pins.max` input: not `max`, not a decimal non-negative
    /// integer, or colliding with the reserved unlimited sentinel.
    #[error("invalid pin limit `{0}`")]
    InvalidLimit(String),
}
