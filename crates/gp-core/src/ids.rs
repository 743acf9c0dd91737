use core::fmt;

/// Index of one gas channel in a `progression.txt` record (0-based).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GasId(usize);

impl GasId {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for GasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GasId({})", self.0)
    }
}

impl fmt::Display for GasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quantity recorded per gas channel and iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantity {
    Flow,
    Pressure,
}

impl Quantity {
    /// Report order: flow first, then pressure.
    pub const ALL: [Quantity; 2] = [Quantity::Flow, Quantity::Pressure];

    pub fn label(self) -> &'static str {
        match self {
            Quantity::Flow => "flow",
            Quantity::Pressure => "pressure",
        }
    }

    /// Row of this quantity in the plot grid.
    pub fn row(self) -> usize {
        match self {
            Quantity::Flow => 0,
            Quantity::Pressure => 1,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
