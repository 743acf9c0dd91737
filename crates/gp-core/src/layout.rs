//! Field layout of one `progression.txt` record.
//!
//! A record is the iteration number followed by one fixed-size block of
//! fields per gas channel. Only two fields of each block are consumed.

use crate::{GasId, GpError, GpResult, Quantity};

/// Number of gas channels in a record.
pub const GAS_COUNT: usize = 7;
/// Fields written per gas channel.
pub const FIELDS_PER_GAS: usize = 4;
/// Position of the flow value inside a channel block.
pub const FLOW_OFFSET: usize = 2;
/// Position of the pressure value inside a channel block.
pub const PRESSURE_OFFSET: usize = 3;
/// Position of the iteration number in a record.
pub const ITERATION_FIELD: usize = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogLayout {
    pub gas_count: usize,
    pub fields_per_gas: usize,
    pub flow_offset: usize,
    pub pressure_offset: usize,
}

impl Default for LogLayout {
    fn default() -> Self {
        Self {
            gas_count: GAS_COUNT,
            fields_per_gas: FIELDS_PER_GAS,
            flow_offset: FLOW_OFFSET,
            pressure_offset: PRESSURE_OFFSET,
        }
    }
}

impl LogLayout {
    pub fn validate(&self) -> GpResult<()> {
        if self.gas_count == 0 {
            return Err(GpError::InvalidArg {
                what: "layout must have at least one gas channel",
            });
        }
        if self.flow_offset >= self.fields_per_gas || self.pressure_offset >= self.fields_per_gas
        {
            return Err(GpError::InvalidArg {
                what: "quantity offset lies outside the channel block",
            });
        }
        if self.flow_offset == self.pressure_offset {
            return Err(GpError::InvalidArg {
                what: "flow and pressure must use distinct offsets",
            });
        }
        Ok(())
    }

    /// Fields a record must contain: the iteration plus every channel block.
    pub fn min_field_count(&self) -> usize {
        ITERATION_FIELD + 1 + self.gas_count * self.fields_per_gas
    }

    pub fn offset(&self, quantity: Quantity) -> usize {
        match quantity {
            Quantity::Flow => self.flow_offset,
            Quantity::Pressure => self.pressure_offset,
        }
    }

    /// Record position of `quantity` for `gas`: `1 + fields_per_gas * gas + offset`.
    pub fn field_index(&self, gas: GasId, quantity: Quantity) -> GpResult<usize> {
        if gas.index() >= self.gas_count {
            return Err(GpError::IndexOob {
                what: "gas channel",
                index: gas.index(),
                len: self.gas_count,
            });
        }
        Ok(ITERATION_FIELD + 1 + self.fields_per_gas * gas.index() + self.offset(quantity))
    }

    pub fn gases(&self) -> impl Iterator<Item = GasId> + use<> {
        (0..self.gas_count).map(GasId::from_index)
    }
}
