use crate::error::ScalarGradError;
use crate::nn::Parameter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

/// Deterministic generator used for parameter initialization.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Fills the parameter with a value drawn from U(low, high).
///
/// # Errors
/// Returns `ScalarGradError::InvalidConfig` unless `low < high` and both are finite.
pub fn uniform_<R: Rng + ?Sized>(
    param: &Parameter,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<(), ScalarGradError> {
    let dist = uniform(low, high)?;
    param.set_value(dist.sample(rng))
}

/// Sets the parameter to `value`.
pub fn constant_(param: &Parameter, value: f64) -> Result<(), ScalarGradError> {
    param.set_value(value)
}

/// Sets the parameter to 0.
pub fn zeros_(param: &Parameter) -> Result<(), ScalarGradError> {
    constant_(param, 0.0)
}

pub(crate) fn uniform(low: f64, high: f64) -> Result<Uniform<f64>, ScalarGradError> {
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(ScalarGradError::InvalidConfig(format!(
            "uniform init requires finite low < high, got [{}, {})",
            low, high
        )));
    }
    Ok(Uniform::new(low, high))
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
