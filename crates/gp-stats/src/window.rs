use gp_core::Real;

use crate::{StatsError, StatsResult};

/// Number of trailing samples averaged per series.
pub const DEFAULT_WINDOW: usize = 100;

/// The last `min(window, values.len())` values.
pub fn trailing_window(values: &[Real], window: usize) -> &[Real] {
    let start = values.len().saturating_sub(window);
    &values[start..]
}

/// Arithmetic mean of the trailing window. An empty series has no mean.
pub fn trailing_mean(values: &[Real], window: usize) -> StatsResult<Real> {
    if window == 0 {
        return Err(StatsError::InvalidWindow { window });
    }
    let tail = trailing_window(values, window);
    if tail.is_empty() {
        return Err(StatsError::EmptySeries);
    }
    Ok(tail.iter().sum::<Real>() / tail.len() as Real)
}
