//! Sampling an expression of `x` over a range, the way a plot consumes it.

use crate::error::CalcError;
use crate::evaluate_at;
use log::debug;
use thiserror::Error;

pub const POINTS_MIN: usize = 10;
pub const POINTS_MAX: usize = 1000;
pub const DOMAIN_MIN: f64 = -100000.0;
pub const DOMAIN_MAX: f64 = 100000.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("point count must be between {min} and {max}, got {0}", min = POINTS_MIN, max = POINTS_MAX)]
    PointCount(usize),
    #[error("range [{0}, {1}] leaves the domain [{lo}, {hi}]", lo = DOMAIN_MIN, hi = DOMAIN_MAX)]
    OutOfDomain(f64, f64),
    #[error("range start {0} is past its end {1}")]
    Reversed(f64, f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    #[error("invalid sweep: {}", describe(.0))]
    Config(Vec<ConfigError>),
    #[error("evaluation failed at x = {x}: {source}")]
    Eval { x: f64, source: CalcError },
}

fn describe(errors: &[ConfigError]) -> String {
    errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; ")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub points: usize,
}

impl SweepConfig {
    pub fn new(x_min: f64, x_max: f64, points: usize) -> Self {
        SweepConfig { x_min, x_max, points }
    }

    /// Every violated bound, empty when the sweep is usable.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(POINTS_MIN..=POINTS_MAX).contains(&self.points) {
            errors.push(ConfigError::PointCount(self.points));
        }
        let domain = DOMAIN_MIN..=DOMAIN_MAX;
        if !domain.contains(&self.x_min) || !domain.contains(&self.x_max) {
            errors.push(ConfigError::OutOfDomain(self.x_min, self.x_max));
        }
        if self.x_min > self.x_max {
            errors.push(ConfigError::Reversed(self.x_min, self.x_max));
        }
        errors
    }

    /// Sample points `x_min + k * step` strictly below `x_max`.
    pub fn xs(&self) -> impl Iterator<Item = f64> {
        let SweepConfig { x_min, x_max, points } = *self;
        let step = (x_max - x_min) / points as f64;
        (0..points)
            .map(move |k| x_min + k as f64 * step)
            .take_while(move |x| *x < x_max)
    }

    /// Evaluate `expr` at every sample. The first failure aborts the whole
    /// sweep, no partial series is returned.
    pub fn sample(&self, expr: &str) -> Result<Vec<(f64, f64)>, SweepError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(SweepError::Config(errors));
        }
        debug!("sampling \"{}\" over [{}, {}) with {} points",
               expr, self.x_min, self.x_max, self.points);
        self.xs()
            .map(|x| match evaluate_at(expr, x) {
                Ok(y) => Ok((x, y)),
                Err(source) => Err(SweepError::Eval { x, source }),
            })
            .collect()
    }
}
