//! Per-channel averages of a whole log.

use gp_core::{GasId, Quantity, Real};
use gp_log::ProgressionLog;
use serde::Serialize;

use crate::window::trailing_mean;
use crate::{StatsError, StatsResult};

/// Trailing-window average of every (gas, quantity) series of one log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelAverages {
    pub window: usize,
    pub flow: Vec<Real>,
    pub pressure: Vec<Real>,
}

impl ChannelAverages {
    pub fn gas_count(&self) -> usize {
        self.flow.len()
    }

    pub fn get(&self, gas: GasId, quantity: Quantity) -> Option<Real> {
        self.values(quantity).get(gas.index()).copied()
    }

    pub fn values(&self, quantity: Quantity) -> &[Real] {
        match quantity {
            Quantity::Flow => &self.flow,
            Quantity::Pressure => &self.pressure,
        }
    }

    /// `(gas, average)` pairs of one quantity in channel order.
    pub fn iter(&self, quantity: Quantity) -> impl Iterator<Item = (GasId, Real)> + '_ {
        self.values(quantity)
            .iter()
            .enumerate()
            .map(|(i, &v)| (GasId::from_index(i), v))
    }
}

pub fn compute_averages(log: &ProgressionLog, window: usize) -> StatsResult<ChannelAverages> {
    let gases: Vec<GasId> = log.layout().gases().collect();
    let mut averages = ChannelAverages {
        window,
        flow: Vec::with_capacity(gases.len()),
        pressure: Vec::with_capacity(gases.len()),
    };

    for quantity in Quantity::ALL {
        for &gas in &gases {
            let series = log.series(gas, quantity).unwrap_or_default();
            let mean = trailing_mean(series, window).map_err(|e| match e {
                StatsError::EmptySeries => StatsError::InsufficientData { gas, quantity },
                other => other,
            })?;
            match quantity {
                Quantity::Flow => averages.flow.push(mean),
                Quantity::Pressure => averages.pressure.push(mean),
            }
        }
    }

    tracing::debug!(window, records = log.len(), "computed channel averages");
    Ok(averages)
}
