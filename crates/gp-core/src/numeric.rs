use crate::GpError;

/// Floating point type used for every measured value.
pub type Real = f64;

/// Relative tolerance for comparing averages; differences below
/// `ABS_FLOOR` always compare equal so values near zero work too.
pub const REL_TOL: Real = 1e-9;
const ABS_FLOOR: Real = 1e-12;

pub fn approx_eq(a: Real, b: Real) -> bool {
    let diff = (a - b).abs();
    diff <= ABS_FLOOR || diff <= REL_TOL * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, GpError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GpError::NonFinite { what, value: v })
    }
}
