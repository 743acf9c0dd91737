//! Aggregation errors.

use gp_core::{GasId, Quantity};

pub type StatsResult<T> = Result<T, StatsError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Cannot average an empty series")]
    EmptySeries,

    #[error("Insufficient data: no {quantity} samples for gas {gas}")]
    InsufficientData { gas: GasId, quantity: Quantity },

    #[error("Invalid averaging window: {window} (must be at least 1)")]
    InvalidWindow { window: usize },
}
