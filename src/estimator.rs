/*
    Disparity-Risk
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Simulated mortality risk estimation.
//!
//! [`RiskEstimator`] maps a [`RiskQuery`] to a [`RiskResult`] with a fixed
//! two-branch formula:
//!
//! - elevated group (Black and unvaccinated): flat `elevated_risk`
//! - everyone else: `base_risk + age_slope * (age_ceiling - age) / age_span`
//!
//! The value is clamped to `[min_probability, max_probability]` and then
//! bucketed into a [`RiskCategory`].  Sex, and race outside the elevated
//! group, do not enter the formula.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::params::EstimatorParams;
use crate::query::{Race, RiskQuery, VaccinationStatus};

// ---------------------------------------------------------------------------
// RiskCategory
// ---------------------------------------------------------------------------

/// Three-level severity bucket for a clamped risk probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskCategory::Low => "Low",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::High => "High",
        })
    }
}

// ---------------------------------------------------------------------------
// RiskResult
// ---------------------------------------------------------------------------

/// Outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Clamped probability in `[min_probability, max_probability]`.
    pub risk_probability: f64,
    pub category: RiskCategory,
}

// ---------------------------------------------------------------------------
// RiskEstimator
// ---------------------------------------------------------------------------

/// Stateless risk estimator over a fixed set of [`EstimatorParams`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RiskEstimator {
    params: EstimatorParams,
}

impl RiskEstimator {
    /// Create a new estimator with the given parameters.
    #[inline(always)]
    pub fn new(params: EstimatorParams) -> Self {
        Self { params }
    }

    /// Parameters this estimator was built with.
    #[inline(always)]
    pub fn params(&self) -> &EstimatorParams {
        &self.params
    }

    /// Evaluate `query`: base risk, clamp, then categorize.
    pub fn estimate(&self, query: &RiskQuery) -> RiskResult {
        let risk_probability = self.clamp_probability(self.base_risk(query));
        RiskResult {
            risk_probability,
            category: self.categorize(risk_probability),
        }
    }

    /// Return `true` for the group that receives the flat elevated risk.
    #[inline(always)]
    pub fn is_elevated_group(&self, query: &RiskQuery) -> bool {
        query.race == Race::Black && query.vaccination_status == VaccinationStatus::Unvaccinated
    }

    /// Unclamped risk for `query`.
    ///
    /// Age is widened to `f64` before subtracting so ages above the ceiling
    /// give a negative age term instead of wrapping.  The operation order
    /// `base + (slope * years) / span` is significant for exact results.
    pub fn base_risk(&self, query: &RiskQuery) -> f64 {
        if self.is_elevated_group(query) {
            return self.params.elevated_risk;
        }
        let years = f64::from(self.params.age_ceiling) - f64::from(query.age);
        self.params.base_risk + self.params.age_slope * years / self.params.age_span
    }

    /// Saturate `risk` into `[min_probability, max_probability]`.
    #[inline(always)]
    pub fn clamp_probability(&self, risk: f64) -> f64 {
        risk.max(self.params.min_probability).min(self.params.max_probability)
    }

    /// Bucket a probability.  Both thresholds are strict lower bounds.
    #[inline(always)]
    pub fn categorize(&self, probability: f64) -> RiskCategory {
        if probability > self.params.high_threshold {
            RiskCategory::High
        } else if probability > self.params.moderate_threshold {
            RiskCategory::Moderate
        } else {
            RiskCategory::Low
        }
    }
}

/// Evaluate `query` with the default parameters.
#[inline(always)]
pub fn estimate(query: &RiskQuery) -> RiskResult {
    RiskEstimator::default().estimate(query)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
