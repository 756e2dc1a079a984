//! Request/response types for the REST API.
//!
//! Domain types already derive serde, so most responses are thin wrappers
//! adding counts and list envelopes.

use serde::{Deserialize, Serialize};

use crate::models::{Major, Occupation, ReportOutput, School};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub datasets: DatasetCounts,
}

/// Record counts per dataset, reported by the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetCounts {
    pub schools: usize,
    pub majors: usize,
    pub occupations: usize,
    pub cohorts: usize,
}

/// Query parameters for the schools listing. Exactly one filter applies,
/// precedence q, state, tier.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SchoolsQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolListResponse {
    pub schools: Vec<School>,
    pub count: usize,
}

/// Query parameters for the majors listing. Precedence q, category.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MajorsQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MajorListResponse {
    pub majors: Vec<Major>,
    /// Full sorted category list, independent of the filter.
    pub categories: Vec<String>,
    pub count: usize,
}

/// Query parameters for the occupations listing. Precedence q, education,
/// sort; unrecognized sort values fall through to the full list.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OccupationsQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupationListResponse {
    pub occupations: Vec<Occupation>,
    pub count: usize,
}

/// Request body for comparing two scenarios. Bodies stay raw JSON so each
/// side can be validated with per-field errors.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareRequest {
    pub scenario1: serde_json::Value,
    pub scenario2: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub report1: ReportOutput,
    pub report2: ReportOutput,
}
