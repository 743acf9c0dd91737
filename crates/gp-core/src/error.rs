use thiserror::Error;

pub type GpResult<T> = Result<T, GpError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GpError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },
}
