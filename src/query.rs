/*
    Disparity-Risk
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Input options and the per-evaluation [`RiskQuery`].
//!
//! Each categorical field is a closed enum whose `ALL` constant lists the
//! options in input order.  Labels parse case-insensitively and render back
//! in their canonical form.  [`RiskQuery::encode`] produces the numeric
//! model encoding of a query as a [`FeatureRow`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};
use crate::params::AgeRange;

fn parse_label<T: Copy + fmt::Display>(
    field: &'static str,
    options: &[T],
    value: &str,
) -> QueryResult<T> {
    let wanted = value.trim();
    options
        .iter()
        .copied()
        .find(|opt| opt.to_string().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| QueryError::UnknownOption {
            field,
            value: value.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Sex
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Model encoding: Male → 1, Female → 0.
    #[inline(always)]
    pub fn code(self) -> u8 {
        match self {
            Sex::Male => 1,
            Sex::Female => 0,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        })
    }
}

impl FromStr for Sex {
    type Err = QueryError;

    fn from_str(s: &str) -> QueryResult<Self> {
        parse_label("sex", &Self::ALL, s)
    }
}

// ---------------------------------------------------------------------------
// Race
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    White,
    Black,
    Asian,
    Hispanic,
    Other,
}

impl Race {
    pub const ALL: [Race; 5] = [
        Race::White,
        Race::Black,
        Race::Asian,
        Race::Hispanic,
        Race::Other,
    ];

    /// Model encoding: Black → 0, Asian → 1, Hispanic → 2, Other → 3, White → 4.
    #[inline(always)]
    pub fn code(self) -> u8 {
        match self {
            Race::Black => 0,
            Race::Asian => 1,
            Race::Hispanic => 2,
            Race::Other => 3,
            Race::White => 4,
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Race::White => "White",
            Race::Black => "Black",
            Race::Asian => "Asian",
            Race::Hispanic => "Hispanic",
            Race::Other => "Other",
        })
    }
}

impl FromStr for Race {
    type Err = QueryError;

    fn from_str(s: &str) -> QueryResult<Self> {
        parse_label("race", &Self::ALL, s)
    }
}

// ---------------------------------------------------------------------------
// VaccinationStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VaccinationStatus {
    Vaccinated,
    Unvaccinated,
}

impl VaccinationStatus {
    pub const ALL: [VaccinationStatus; 2] =
        [VaccinationStatus::Vaccinated, VaccinationStatus::Unvaccinated];

    /// Model encoding: Vaccinated → 1, Unvaccinated → 0.
    #[inline(always)]
    pub fn code(self) -> u8 {
        match self {
            VaccinationStatus::Vaccinated => 1,
            VaccinationStatus::Unvaccinated => 0,
        }
    }
}

impl fmt::Display for VaccinationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VaccinationStatus::Vaccinated => "Vaccinated",
            VaccinationStatus::Unvaccinated => "Unvaccinated",
        })
    }
}

impl FromStr for VaccinationStatus {
    type Err = QueryError;

    fn from_str(s: &str) -> QueryResult<Self> {
        parse_label("vaccination status", &Self::ALL, s)
    }
}

// ---------------------------------------------------------------------------
// RiskQuery
// ---------------------------------------------------------------------------

/// The four inputs of a single risk evaluation.
///
/// Fields are public so callers that already enforce the input ranges can
/// build a query directly; [`RiskQuery::new`] validates the age first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskQuery {
    pub age: u32,
    pub sex: Sex,
    pub race: Race,
    pub vaccination_status: VaccinationStatus,
}

impl RiskQuery {
    /// Build a query, rejecting ages outside [`AgeRange::default`].
    pub fn new(
        age: u32,
        sex: Sex,
        race: Race,
        vaccination_status: VaccinationStatus,
    ) -> QueryResult<Self> {
        let age = AgeRange::default().validate(age)?;
        Ok(Self {
            age,
            sex,
            race,
            vaccination_status,
        })
    }

    /// Numeric model encoding of this query.
    #[inline(always)]
    pub fn encode(&self) -> FeatureRow {
        FeatureRow {
            age: self.age,
            sex: self.sex.code(),
            race: self.race.code(),
            vaccination_status: self.vaccination_status.code(),
        }
    }
}

impl Default for RiskQuery {
    fn default() -> Self {
        Self {
            age: AgeRange::default().default,
            sex: Sex::ALL[0],
            race: Race::ALL[0],
            vaccination_status: VaccinationStatus::ALL[0],
        }
    }
}

// ---------------------------------------------------------------------------
// FeatureRow
// ---------------------------------------------------------------------------

/// A query encoded as model features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeatureRow {
    pub age: u32,
    pub sex: u8,
    pub race: u8,
    pub vaccination_status: u8,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Option parsing
    // -----------------------------------------------------------------------

    #[test]
    fn test_labels_round_trip() {
        for sex in Sex::ALL {
            assert_eq!(sex.to_string().parse::<Sex>(), Ok(sex));
        }
        for race in Race::ALL {
            assert_eq!(race.to_string().parse::<Race>(), Ok(race));
        }
        for status in VaccinationStatus::ALL {
            assert_eq!(status.to_string().parse::<VaccinationStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("female".parse::<Sex>(), Ok(Sex::Female));
        assert_eq!("HISPANIC".parse::<Race>(), Ok(Race::Hispanic));
        assert_eq!(
            " unvaccinated ".parse::<VaccinationStatus>(),
            Ok(VaccinationStatus::Unvaccinated)
        );
    }

    #[test]
    fn test_parse_unknown_option() {
        let err = "Martian".parse::<Race>().unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownOption {
                field: "race",
                value: "Martian".to_string(),
            }
        );
        assert!("".parse::<Sex>().is_err());
        assert!("partial".parse::<VaccinationStatus>().is_err());
    }

    #[test]
    fn test_option_order() {
        assert_eq!(Sex::ALL, [Sex::Male, Sex::Female]);
        assert_eq!(Race::ALL[0], Race::White);
        assert_eq!(Race::ALL[4], Race::Other);
        assert_eq!(VaccinationStatus::ALL[0], VaccinationStatus::Vaccinated);
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    #[test]
    fn test_new_accepts_range_bounds() {
        for age in [40, 65, 90] {
            let query = RiskQuery::new(age, Sex::Male, Race::White, VaccinationStatus::Vaccinated);
            assert_eq!(query.map(|q| q.age), Ok(age));
        }
    }

    #[test]
    fn test_new_rejects_out_of_range_age() {
        let err = RiskQuery::new(39, Sex::Female, Race::Asian, VaccinationStatus::Vaccinated)
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::AgeOutOfRange {
                age: 39,
                min: 40,
                max: 90
            }
        );
        assert!(RiskQuery::new(91, Sex::Female, Race::Asian, VaccinationStatus::Vaccinated).is_err());
    }

    #[test]
    fn test_default_query() {
        let query = RiskQuery::default();
        assert_eq!(query.age, 65);
        assert_eq!(query.sex, Sex::Male);
        assert_eq!(query.race, Race::White);
        assert_eq!(query.vaccination_status, VaccinationStatus::Vaccinated);
    }

    // -----------------------------------------------------------------------
    // Encoding
    // -----------------------------------------------------------------------

    #[test]
    fn test_encode() {
        let query = RiskQuery {
            age: 72,
            sex: Sex::Female,
            race: Race::Black,
            vaccination_status: VaccinationStatus::Unvaccinated,
        };
        assert_eq!(
            query.encode(),
            FeatureRow {
                age: 72,
                sex: 0,
                race: 0,
                vaccination_status: 0,
            }
        );
    }

    #[test]
    fn test_race_codes() {
        let codes: Vec<u8> = Race::ALL.iter().map(|r| r.code()).collect();
        assert_eq!(codes, vec![4, 0, 1, 2, 3]);
        assert_eq!(Sex::Male.code(), 1);
        assert_eq!(VaccinationStatus::Vaccinated.code(), 1);
    }

    #[test]
    fn test_feature_row_serializes_with_model_column_names() {
        let row = RiskQuery::default().encode();
        let json = serde_json::to_value(row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Age": 65,
                "Sex": 1,
                "Race": 4,
                "VaccinationStatus": 1
            })
        );
    }
}
