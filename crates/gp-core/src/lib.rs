//! gp-core: shared foundation for gasprog.
//!
//! Contains:
//! - layout (field positions of a `progression.txt` record)
//! - numeric (Real + tolerances + float helpers)
//! - ids (gas channel and measured quantity identifiers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod layout;
pub mod numeric;

pub use error::{GpError, GpResult};
pub use ids::*;
pub use layout::*;
pub use numeric::*;
