//! Parameter initialisation schemes.
//!
//! Initial values are drawn from a caller-supplied random number generator,
//! so seeding the generator makes network construction reproducible.

use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::nn::Parameter;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// Distribution used to draw initial parameter values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform over `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    /// Every parameter gets the same value.
    Constant(f64),
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    pub fn uniform(low: f64, high: f64) -> Self {
        Init::Uniform { low, high }
    }

    pub fn normal(mean: f64, std: f64) -> Self {
        Init::Normal { mean, std }
    }

    pub fn zeros() -> Self {
        Init::Constant(0.0)
    }

    /// Checks that the distribution can be sampled.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite()) || low >= high {
                    return Err(ScalarGradError::InvalidConfiguration(format!(
                        "uniform init needs finite bounds with low < high, got [{low}, {high})"
                    )));
                }
            }
            Init::Normal { mean, std } => {
                if !mean.is_finite() || !std.is_finite() || std < 0.0 {
                    return Err(ScalarGradError::InvalidConfiguration(format!(
                        "normal init needs a finite mean and a finite non-negative std, got mean {mean}, std {std}"
                    )));
                }
            }
            Init::Constant(value) => {
                if !value.is_finite() {
                    return Err(ScalarGradError::InvalidConfiguration(format!(
                        "constant init must be finite, got {value}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Builds a sampler for this scheme.
    pub fn sampler(&self) -> Result<InitSampler, ScalarGradError> {
        self.validate()?;
        let sampler = match *self {
            Init::Uniform { low, high } => InitSampler::Uniform(Uniform::new(low, high)),
            Init::Normal { mean, std } => InitSampler::Normal(
                Normal::new(mean, std)
                    .map_err(|e| ScalarGradError::InvalidConfiguration(e.to_string()))?,
            ),
            Init::Constant(value) => InitSampler::Constant(value),
        };
        Ok(sampler)
    }

    /// Creates `count` fresh parameters in `graph`.
    pub fn parameters<R: Rng + ?Sized>(
        &self,
        graph: &mut Graph,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Parameter>, ScalarGradError> {
        let sampler = self.sampler()?;
        let mut params = Vec::with_capacity(count);
        for _ in 0..count {
            params.push(Parameter::new(graph, sampler.sample(rng)));
        }
        Ok(params)
    }
}

/// A validated [`Init`], ready to draw values.
#[derive(Debug, Clone, Copy)]
pub enum InitSampler {
    Uniform(Uniform<f64>),
    Normal(Normal<f64>),
    Constant(f64),
}

impl Distribution<f64> for InitSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            InitSampler::Uniform(dist) => dist.sample(rng),
            InitSampler::Normal(dist) => dist.sample(rng),
            InitSampler::Constant(value) => *value,
        }
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
