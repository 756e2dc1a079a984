//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! repository and service layers for the actual work.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    CompareRequest, CompareResponse, DatasetCounts, HealthResponse, MajorListResponse,
    MajorsQuery, OccupationListResponse, OccupationsQuery, SchoolListResponse, SchoolsQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{OccupationSalary, ReportOutput, SchoolTier};
use crate::services::{validate_scenario, FieldError};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Limit applied to the sorted occupation listings.
const SORTED_OCCUPATIONS_LIMIT: usize = 50;

/// GET /health
///
/// Liveness check reporting the loaded dataset sizes.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        datasets: DatasetCounts {
            schools: state.datasets.schools.all().len(),
            majors: state.datasets.majors.all().len(),
            occupations: state.datasets.occupations.all().len(),
            cohorts: state.datasets.cohorts.all().len(),
        },
    }))
}

/// GET /v1/schools
///
/// List schools for dropdown selection, optionally filtered by name
/// search, state, or tier (first non-empty filter wins).
pub async fn list_schools(
    State(state): State<AppState>,
    Query(query): Query<SchoolsQuery>,
) -> HandlerResult<SchoolListResponse> {
    let repo = &state.datasets.schools;

    let schools = if let Some(q) = non_empty(query.q) {
        repo.search_by_name(&q).into_iter().cloned().collect()
    } else if let Some(s) = non_empty(query.state) {
        repo.get_by_state(&s).into_iter().cloned().collect()
    } else if let Some(t) = non_empty(query.tier) {
        let tier: SchoolTier = t
            .parse()
            .map_err(|e: crate::models::scenario::UnknownTier| AppError::BadRequest(e.to_string()))?;
        repo.get_by_tier(tier).into_iter().cloned().collect()
    } else {
        repo.all().to_vec()
    };

    let count = schools.len();
    Ok(Json(SchoolListResponse { schools, count }))
}

/// GET /v1/majors
///
/// List majors for dropdown selection, optionally filtered by name search
/// or category. The category list is always complete.
pub async fn list_majors(
    State(state): State<AppState>,
    Query(query): Query<MajorsQuery>,
) -> HandlerResult<MajorListResponse> {
    let repo = &state.datasets.majors;

    let majors = if let Some(q) = non_empty(query.q) {
        repo.search_by_name(&q).into_iter().cloned().collect()
    } else if let Some(c) = non_empty(query.category) {
        repo.get_by_category(&c).into_iter().cloned().collect()
    } else {
        repo.all().to_vec()
    };

    let count = majors.len();
    Ok(Json(MajorListResponse {
        majors,
        categories: repo.categories(),
        count,
    }))
}

/// GET /v1/occupations
///
/// List occupations with outlook data. Exactly one filter mode applies per
/// request, precedence: q, education, sort=growth|wage, else all.
pub async fn list_occupations(
    State(state): State<AppState>,
    Query(query): Query<OccupationsQuery>,
) -> HandlerResult<OccupationListResponse> {
    let repo = &state.datasets.occupations;

    let occupations: Vec<_> = if let Some(q) = non_empty(query.q) {
        repo.search_by_title(&q).into_iter().cloned().collect()
    } else if let Some(ed) = non_empty(query.education) {
        repo.get_by_education(&ed).into_iter().cloned().collect()
    } else {
        match query.sort.as_deref() {
            Some("growth") => repo
                .top_growing(SORTED_OCCUPATIONS_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
            Some("wage") => repo
                .highest_paying(SORTED_OCCUPATIONS_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
            _ => repo.all().to_vec(),
        }
    };

    let count = occupations.len();
    Ok(Json(OccupationListResponse { occupations, count }))
}

/// GET /v1/occupations/{code}/salary
///
/// Detailed salary percentiles for one occupation.
pub async fn get_occupation_salary(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> HandlerResult<OccupationSalary> {
    state
        .datasets
        .occupations
        .salary_by_code(&code)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No salary data for occupation '{code}'")))
}

/// POST /v1/report
///
/// Generate an outcome report for the given scenario. Invalid input yields
/// a 400 with per-field details; a cohort miss is not an error.
pub async fn generate_report(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> HandlerResult<ReportOutput> {
    let scenario = validate_scenario(body).map_err(AppError::Validation)?;
    Ok(Json(state.reports.generate_report(&scenario)))
}

/// POST /v1/report/compare
///
/// Generate two independent reports for side-by-side comparison. Field
/// errors from both scenarios are reported together, paths prefixed with
/// the failing side.
pub async fn compare_reports(
    State(state): State<AppState>,
    Json(body): Json<CompareRequest>,
) -> HandlerResult<CompareResponse> {
    let mut errors = Vec::new();
    let scenario1 = collect_side("scenario1", body.scenario1, &mut errors);
    let scenario2 = collect_side("scenario2", body.scenario2, &mut errors);

    match (scenario1, scenario2) {
        (Some(s1), Some(s2)) => {
            let (report1, report2) = state.reports.compare_scenarios(&s1, &s2);
            Ok(Json(CompareResponse { report1, report2 }))
        }
        _ => Err(AppError::Validation(errors)),
    }
}

fn collect_side(
    side: &str,
    value: serde_json::Value,
    errors: &mut Vec<FieldError>,
) -> Option<crate::models::ScenarioInput> {
    match validate_scenario(value) {
        Ok(scenario) => Some(scenario),
        Err(side_errors) => {
            errors.extend(
                side_errors
                    .into_iter()
                    .map(|e| FieldError::new(format!("{side}.{}", e.path), e.message)),
            );
            None
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
