/*
    Disparity-Risk
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Formula constants, category thresholds, and the accepted age range.

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};

// ---------------------------------------------------------------------------
// EstimatorParams
// ---------------------------------------------------------------------------

/// Constants of the simulated mortality risk formula.
///
/// Outside the elevated group the base risk is
/// `base_risk + age_slope * (age_ceiling - age) / age_span`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatorParams {
    /// Risk assigned at `age_ceiling`.
    pub base_risk: f64,
    /// Risk added across one full `age_span` below the ceiling.
    pub age_slope: f64,
    /// Age at which the age term vanishes.
    pub age_ceiling: u32,
    /// Number of years over which `age_slope` is spread.
    pub age_span: f64,
    /// Flat risk for the elevated group (Black and unvaccinated).
    pub elevated_risk: f64,
    /// Lower clamp bound for the reported probability.
    pub min_probability: f64,
    /// Upper clamp bound for the reported probability.
    pub max_probability: f64,
    /// Probabilities strictly above this are `High`.
    pub high_threshold: f64,
    /// Probabilities strictly above this (and not `High`) are `Moderate`.
    pub moderate_threshold: f64,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            base_risk: 0.18,
            age_slope: 0.1,
            age_ceiling: 90,
            age_span: 50.0,
            elevated_risk: 0.72,
            min_probability: 0.01,
            max_probability: 0.95,
            high_threshold: 0.5,
            moderate_threshold: 0.2,
        }
    }
}

// ---------------------------------------------------------------------------
// AgeRange
// ---------------------------------------------------------------------------

/// Inclusive range of ages accepted for a query, with the input default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl AgeRange {
    /// Return `true` when `age` lies within `[min, max]`.
    #[inline(always)]
    pub fn contains(&self, age: u32) -> bool {
        (self.min..=self.max).contains(&age)
    }

    /// Return `age` unchanged, or [`QueryError::AgeOutOfRange`] when it falls
    /// outside `[min, max]`.
    pub fn validate(&self, age: u32) -> QueryResult<u32> {
        if !self.contains(age) {
            return Err(QueryError::AgeOutOfRange {
                age,
                min: self.min,
                max: self.max,
            });
        }
        Ok(age)
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self {
            min: 40,
            max: 90,
            default: 65,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
