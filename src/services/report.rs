//! Report composition: cohort matching, snapshot/timeline/risk synthesis.

use std::sync::Arc;

use crate::data::Datasets;
use crate::models::{
    Cohort, CohortMeta, PathShare, Relocation, ReportOutput, SalaryDistribution, ScenarioInput,
    Snapshot,
};
use crate::rules::{self, RiskRuleConfig};

use super::timeline;

/// Service for generating outcome reports.
///
/// Holds read-only handles to the datasets and the risk-rule keyword
/// configuration; cheap to clone behind the shared `Arc`s.
#[derive(Debug, Clone)]
pub struct ReportService {
    datasets: Arc<Datasets>,
    risk_rules: RiskRuleConfig,
}

impl ReportService {
    pub fn new(datasets: Arc<Datasets>, risk_rules: RiskRuleConfig) -> Self {
        Self {
            datasets,
            risk_rules,
        }
    }

    /// Generate a complete outcome report for a validated scenario.
    ///
    /// Never fails: a cohort lookup miss resolves to safe defaults in every
    /// section, so the output is always a fully-formed report.
    pub fn generate_report(&self, scenario: &ScenarioInput) -> ReportOutput {
        let cohort = self
            .datasets
            .cohorts
            .find_by_school_and_major(&scenario.school_id, &scenario.major_id);

        let cohort_meta = build_cohort_meta(cohort);
        let snapshot = build_snapshot(cohort);
        let timeline = timeline::generate_timeline(scenario, cohort, &self.datasets.majors);
        let risk_flags = rules::generate_risk_flags(scenario, cohort, &self.risk_rules);

        ReportOutput {
            scenario: scenario.clone(),
            cohort_meta,
            snapshot,
            paths: cohort
                .and_then(|c| c.paths.clone())
                .unwrap_or_else(|| {
                    vec![PathShare {
                        category: "Data Not Available".to_string(),
                        pct: 100.0,
                    }]
                }),
            salary: cohort
                .map(|c| c.salary.clone())
                .unwrap_or_else(SalaryDistribution::unavailable),
            relocation: cohort
                .and_then(|c| c.relocation.clone())
                .unwrap_or_else(Relocation::empty),
            employers: cohort.and_then(|c| c.employers.clone()).unwrap_or_default(),
            titles: cohort.and_then(|c| c.titles.clone()).unwrap_or_default(),
            timeline,
            risk_flags,
        }
    }

    /// Generate two independent reports for side-by-side comparison.
    pub fn compare_scenarios(
        &self,
        scenario1: &ScenarioInput,
        scenario2: &ScenarioInput,
    ) -> (ReportOutput, ReportOutput) {
        (
            self.generate_report(scenario1),
            self.generate_report(scenario2),
        )
    }
}

fn build_cohort_meta(cohort: Option<&Cohort>) -> CohortMeta {
    match cohort {
        Some(cohort) => CohortMeta {
            grad_year_range: cohort.grad_year_range.clone(),
            sample_size: cohort.sample_size,
        },
        None => CohortMeta {
            grad_year_range: "No data available".to_string(),
            sample_size: 0,
        },
    }
}

fn build_snapshot(cohort: Option<&Cohort>) -> Snapshot {
    let Some(cohort) = cohort else {
        return Snapshot {
            top_path: "Unknown".to_string(),
            median_salary: None,
            top_metro: None,
        };
    };

    let top_path = cohort
        .paths
        .as_deref()
        .and_then(|paths| first_max_by_pct(paths, |p| p.pct))
        .map(|p| p.category.clone())
        .unwrap_or_else(|| "Full-time Employment".to_string());

    let top_metro = cohort
        .relocation
        .as_ref()
        .and_then(|r| first_max_by_pct(&r.metros, |m| m.pct))
        .map(|m| m.name.clone());

    Snapshot {
        top_path,
        median_salary: cohort.salary.p50,
        top_metro,
    }
}

/// Stable first-max reduce: on ties, the earliest element wins.
fn first_max_by_pct<T>(items: &[T], pct: impl Fn(&T) -> f64) -> Option<&T> {
    items
        .iter()
        .reduce(|max, item| if pct(item) > pct(max) { item } else { max })
}
