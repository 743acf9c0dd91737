//! gp-stats: trailing-window averages over parsed progression logs.

pub mod averages;
pub mod error;
pub mod window;

pub use averages::{ChannelAverages, compute_averages};
pub use error::{StatsError, StatsResult};
pub use window::{DEFAULT_WINDOW, trailing_mean, trailing_window};
