/*
    Disparity-Risk
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Display-ready rendering of a [`RiskResult`].

use std::fmt;

use serde::Serialize;

use crate::estimator::{RiskCategory, RiskResult};

/// Heading printed above every report.
pub const HEADING: &str = "Predicted Mortality Risk (simulated)";

/// Label attached to the percentage.
pub const MODEL_LABEL: &str = "Random Forest Model";

// ---------------------------------------------------------------------------
// AlertStyle
// ---------------------------------------------------------------------------

/// Presentation style of the category message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStyle {
    Error,
    Warning,
    Success,
}

impl AlertStyle {
    #[inline(always)]
    pub fn for_category(category: RiskCategory) -> Self {
        match category {
            RiskCategory::High => AlertStyle::Error,
            RiskCategory::Moderate => AlertStyle::Warning,
            RiskCategory::Low => AlertStyle::Success,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            AlertStyle::Error => "[ERROR]",
            AlertStyle::Warning => "[WARNING]",
            AlertStyle::Success => "[OK]",
        }
    }
}

/// Guidance message for `category`.
pub fn category_message(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::High => "High predicted risk of mortality. Prioritize clinical support.",
        RiskCategory::Moderate => "Moderate risk. Suggest preventive care and follow-up.",
        RiskCategory::Low => "Low predicted risk.",
    }
}

// ---------------------------------------------------------------------------
// RiskReport
// ---------------------------------------------------------------------------

/// A [`RiskResult`] with its label, styled message and percentage text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub label: &'static str,
    pub risk_probability: f64,
    pub formatted_percentage: String,
    pub category: RiskCategory,
    pub style: AlertStyle,
    pub message: &'static str,
}

impl RiskReport {
    pub fn new(result: &RiskResult) -> Self {
        Self {
            label: MODEL_LABEL,
            risk_probability: result.risk_probability,
            formatted_percentage: format_percentage(result.risk_probability),
            category: result.category,
            style: AlertStyle::for_category(result.category),
            message: category_message(result.category),
        }
    }

    /// Probability scaled to percent, unrounded.
    #[inline(always)]
    pub fn percentage(&self) -> f64 {
        self.risk_probability * 100.0
    }
}

/// Render a probability as a percentage with one decimal place, e.g. `72.0 %`.
pub fn format_percentage(probability: f64) -> String {
    format!("{:.1} %", probability * 100.0)
}

impl fmt::Display for RiskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADING}")?;
        writeln!(f, "  {}: {}", self.label, self.formatted_percentage)?;
        write!(f, "  {} {}", self.style.tag(), self.message)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
