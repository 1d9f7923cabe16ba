use super::traits::Dataset;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use scalargrad_core::ScalarGradError;

/// The target curve: `sin(x) + 0.5 * cos(2x)`.
pub fn wave(x: f64) -> f64 {
    x.sin() + 0.5 * (2.0 * x).cos()
}

/// Samples of [`wave`] on an evenly spaced grid, as `(x, y)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveDataset {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl WaveDataset {
    /// `n` points `x_i = i * step`, for `i` in `0..n`.
    ///
    /// # Errors
    /// `EmptyDataset` if `n == 0`, `InvalidConfig` if `step` is not finite and positive.
    pub fn grid(n: usize, step: f64) -> Result<Self, ScalarGradError> {
        if n == 0 {
            return Err(ScalarGradError::EmptyDataset);
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "grid step must be positive and finite, got {}",
                step
            )));
        }
        Ok(WaveDataset::from_inputs((0..n).map(|i| i as f64 * step).collect()))
    }

    /// Exact targets for arbitrary inputs.
    pub fn from_inputs(xs: Vec<f64>) -> Self {
        let ys = xs.iter().map(|&x| wave(x)).collect();
        WaveDataset { xs, ys }
    }

    /// Adds seeded Gaussian noise with standard deviation `std_dev` to every target.
    pub fn with_noise(mut self, std_dev: f64, seed: u64) -> Result<Self, ScalarGradError> {
        if !(std_dev.is_finite() && std_dev >= 0.0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "noise std_dev must be non-negative and finite, got {}",
                std_dev
            )));
        }
        let normal = Normal::new(0.0, std_dev).map_err(|e| {
            ScalarGradError::InvalidConfig(format!("invalid noise std_dev {}: {}", std_dev, e))
        })?;
        let mut rng = StdRng::seed_from_u64(seed);
        for y in &mut self.ys {
            *y += normal.sample(&mut rng);
        }
        debug!(
            "Added N(0, {}) noise to {} targets (seed {})",
            std_dev,
            self.ys.len(),
            seed
        );
        Ok(self)
    }

    pub fn inputs(&self) -> &[f64] {
        &self.xs
    }

    pub fn targets(&self) -> &[f64] {
        &self.ys
    }

    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.xs.iter().copied().zip(self.ys.iter().copied()).collect()
    }
}

impl Default for WaveDataset {
    /// 100 points from 0.0 to 9.9.
    fn default() -> Self {
        WaveDataset::from_inputs((0..100).map(|i| i as f64 * 0.1).collect())
    }
}

impl Dataset for WaveDataset {
    type Item = (f64, f64);

    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError> {
        match (self.xs.get(index), self.ys.get(index)) {
            (Some(&x), Some(&y)) => Ok((x, y)),
            _ => Err(ScalarGradError::IndexOutOfBounds {
                index,
                len: self.xs.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.xs.len()
    }
}

#[cfg(test)]
#[path = "wave_test.rs"]
mod tests;
