//! Report output types and the cohort records they are derived from.

use serde::{Deserialize, Serialize};

use super::scenario::ScenarioInput;

/// Aggregate outcome statistics for a school-by-major population.
///
/// `school_id` / `major_id` may be the wildcard `"default"`, marking a
/// cohort that stands in for any school or any major on that axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cohort {
    pub id: String,
    pub school_id: String,
    pub major_id: String,
    pub grad_year_range: String,
    pub sample_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<PathShare>>,
    pub salary: SalaryDistribution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relocation: Option<Relocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employers: Option<Vec<NamedShare>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titles: Option<Vec<NamedShare>>,
}

/// Metadata about the cohort a report was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortMeta {
    pub grad_year_range: String,
    pub sample_size: u64,
}

/// Single-paragraph summary derived from a cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub top_path: String,
    pub median_salary: Option<f64>,
    pub top_metro: Option<String>,
}

/// One slice of the matriculation path distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathShare {
    pub category: String,
    /// Percentage in [0, 100].
    pub pct: f64,
}

/// A named percentage share, used for metros, states, employers, and titles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedShare {
    pub name: String,
    /// Percentage in [0, 100].
    pub pct: f64,
}

/// Salary percentiles for a cohort. Each percentile is nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryDistribution {
    pub p25: Option<f64>,
    pub p50: Option<f64>,
    pub p75: Option<f64>,
    pub p90: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub year: Option<u32>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl SalaryDistribution {
    /// The all-null distribution substituted when no cohort matches.
    pub fn unavailable() -> Self {
        Self {
            p25: None,
            p50: None,
            p75: None,
            p90: None,
            currency: default_currency(),
            year: None,
        }
    }
}

/// Where graduates end up, as metro and state distributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relocation {
    pub metros: Vec<NamedShare>,
    pub states: Vec<NamedShare>,
}

impl Relocation {
    pub fn empty() -> Self {
        Self {
            metros: Vec::new(),
            states: Vec::new(),
        }
    }
}

/// A labeled career event with a probability and a month-offset window
/// relative to the graduation anchor (month 0). Offsets may be negative
/// for events before graduation or after POST_GRAD re-anchoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub milestone_type: String,
    pub start_month: i32,
    pub end_month: i32,
    /// Probability percentage in [0, 100].
    pub pct: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Severity of an advisory flag. Ordered: INFO < WARN < RISK.
///
/// `Risk` is part of the taxonomy but not produced by the current rule
/// set; it is reserved for future rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Info,
    Warn,
    Risk,
}

/// An advisory message attached to a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub level: RiskLevel,
    pub message: String,
}

/// The complete synthesized report. Fully derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOutput {
    pub scenario: ScenarioInput,
    pub cohort_meta: CohortMeta,
    pub snapshot: Snapshot,
    pub paths: Vec<PathShare>,
    pub salary: SalaryDistribution,
    pub relocation: Relocation,
    pub employers: Vec<NamedShare>,
    pub titles: Vec<NamedShare>,
    pub timeline: Vec<Milestone>,
    pub risk_flags: Vec<RiskFlag>,
}
