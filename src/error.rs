/*
    Disparity-Risk
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Errors raised while building a [`RiskQuery`](crate::query::RiskQuery).

use thiserror::Error;

/// Reason a query could not be constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Age lies outside the accepted input range.
    #[error("age {age} is outside the accepted range {min}..={max}")]
    AgeOutOfRange {
        /// Rejected age.
        age: u32,
        /// Lowest accepted age.
        min: u32,
        /// Highest accepted age.
        max: u32,
    },

    /// A label did not match any option for the field.
    #[error("unknown {field} option: {value:?}")]
    UnknownOption {
        /// Field being parsed (e.g. `"race"`).
        field: &'static str,
        /// The label as given.
        value: String,
    },
}

/// Result type alias for query construction.
pub type QueryResult<T> = Result<T, QueryError>;
