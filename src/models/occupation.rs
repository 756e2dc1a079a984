//! Occupation outlook and salary records from the BLS-derived seed data.

use serde::{Deserialize, Serialize};

/// Occupation outlook record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupation {
    /// SOC occupation code, e.g. "15-1252".
    pub code: String,
    pub title: String,
    pub median_wage: Option<f64>,
    /// Typical entry-level education, free text.
    pub education: String,
    pub growth_pct: Option<f64>,
    pub annual_openings: Option<f64>,
}

/// Detailed salary percentiles for one occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupationSalary {
    pub code: String,
    pub title: String,
    pub total_employment: Option<f64>,
    pub p10: Option<f64>,
    pub p25: Option<f64>,
    pub p50: Option<f64>,
    pub p75: Option<f64>,
    pub p90: Option<f64>,
}
