//! Shared fixtures for integration tests.

use std::sync::Arc;

use outcomes_rust::data::Datasets;
use outcomes_rust::models::{
    Cohort, Major, NamedShare, PathShare, Relocation, SalaryDistribution, ScenarioInput, School,
    SchoolTier, SchoolType, Stage,
};
use outcomes_rust::rules::RiskRuleConfig;
use outcomes_rust::services::ReportService;

pub fn school(id: &str, unitid: Option<&str>) -> School {
    School {
        id: id.to_string(),
        unitid: unitid.map(str::to_string),
        name: format!("{id} University"),
        city: None,
        state: "MA".to_string(),
        school_type: SchoolType::Private,
        tier: Some(SchoolTier::Elite),
    }
}

pub fn major(id: &str, category: &str) -> Major {
    Major {
        id: id.to_string(),
        name: id.to_string(),
        category: category.to_string(),
        cip_code: None,
    }
}

/// The (harvard, cs) cohort from the acceptance scenario: small sample,
/// known median salary.
pub fn harvard_cs_cohort() -> Cohort {
    Cohort {
        id: "harvard-cs".to_string(),
        school_id: "harvard".to_string(),
        major_id: "cs".to_string(),
        grad_year_range: "2018-2022".to_string(),
        sample_size: 40,
        paths: Some(vec![
            PathShare {
                category: "Full-time Employment".to_string(),
                pct: 70.0,
            },
            PathShare {
                category: "Graduate School".to_string(),
                pct: 30.0,
            },
        ]),
        salary: SalaryDistribution {
            p25: Some(80000.0),
            p50: Some(95000.0),
            p75: Some(120000.0),
            p90: Some(150000.0),
            currency: "USD".to_string(),
            year: Some(2023),
        },
        relocation: Some(Relocation {
            metros: vec![NamedShare {
                name: "Boston".to_string(),
                pct: 40.0,
            }],
            states: vec![NamedShare {
                name: "Massachusetts".to_string(),
                pct: 45.0,
            }],
        }),
        employers: None,
        titles: None,
    }
}

pub fn fixture_datasets(cohorts: Vec<Cohort>) -> Arc<Datasets> {
    Arc::new(Datasets::from_records(
        vec![school("harvard", Some("166027")), school("umich", None)],
        vec![
            major("cs", "Engineering & Technology"),
            major("economics", "Social Sciences"),
        ],
        vec![],
        vec![],
        cohorts,
    ))
}

pub fn fixture_service(cohorts: Vec<Cohort>) -> ReportService {
    ReportService::new(fixture_datasets(cohorts), RiskRuleConfig::default())
}

pub fn scenario(stage: Stage, school_id: &str, major_id: &str) -> ScenarioInput {
    ScenarioInput {
        stage,
        school_id: school_id.to_string(),
        major_id: major_id.to_string(),
        college_year: None,
        years_since_grad: None,
        intended_location: None,
        risk_tolerance: None,
        grad_school_interest: None,
    }
}
