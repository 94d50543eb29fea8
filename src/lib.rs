/*
    Disparity-Risk
    Copyright (C) 2026 Moroya Sakamoto
*/

//! # Disparity-Risk
//!
//! Simulated COVID-19 mortality risk estimator over four inputs: age, sex,
//! race, and vaccination status.  The estimate is a fixed formula, not a
//! trained model.
//!
//! - [`query`]     — input options and [`RiskQuery`]
//! - [`params`]    — [`EstimatorParams`] formula constants and the [`AgeRange`]
//! - [`estimator`] — [`RiskEstimator`] producing a [`RiskResult`]
//! - [`report`]    — [`RiskReport`] for display
//!
//! ## Example
//!
//! ```rust
//! use disparity_risk::{
//!     estimator::{RiskCategory, RiskEstimator},
//!     query::{Race, RiskQuery, Sex, VaccinationStatus},
//!     report::RiskReport,
//! };
//!
//! let query = RiskQuery::new(65, Sex::Male, Race::Black, VaccinationStatus::Unvaccinated)?;
//! let result = RiskEstimator::default().estimate(&query);
//!
//! assert_eq!(result.risk_probability, 0.72);
//! assert_eq!(result.category, RiskCategory::High);
//! assert_eq!(RiskReport::new(&result).formatted_percentage, "72.0 %");
//! # Ok::<(), disparity_risk::QueryError>(())
//! ```

pub mod error;
pub mod estimator;
pub mod params;
pub mod query;
pub mod report;

pub use error::{QueryError, QueryResult};
pub use estimator::{estimate, RiskCategory, RiskEstimator, RiskResult};
pub use params::{AgeRange, EstimatorParams};
pub use query::{FeatureRow, Race, RiskQuery, Sex, VaccinationStatus};
pub use report::{AlertStyle, RiskReport};

/// Disparity-Risk crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
