//! Fallback career timeline templates, keyed by stage.
//!
//! Month offsets are relative to the graduation anchor (month 0); negative
//! offsets fall before graduation. Template values are fixed product data
//! and are reproduced exactly, including windows that extend past the
//! anchor.

use crate::models::{Cohort, Milestone, ScenarioInput, Stage};

/// Probability assumed when neither the category table nor the default
/// table knows a milestone type.
const FALLBACK_PCT: f64 = 50.0;

struct MilestoneTemplate {
    milestone_type: &'static str,
    start_month: i32,
    end_month: i32,
    label: &'static str,
    details: &'static str,
}

const HIGH_SCHOOL_MILESTONES: &[MilestoneTemplate] = &[
    MilestoneTemplate {
        milestone_type: "COLLEGE_APPS",
        start_month: -12,
        end_month: -6,
        label: "College Applications",
        details: "Submit applications to target schools",
    },
    MilestoneTemplate {
        milestone_type: "DECISIONS",
        start_month: -4,
        end_month: -2,
        label: "Receive Decisions",
        details: "Hear back from colleges and make final choice",
    },
    MilestoneTemplate {
        milestone_type: "GRADUATION",
        start_month: 0,
        end_month: 0,
        label: "High School Graduation",
        details: "Complete high school",
    },
    MilestoneTemplate {
        milestone_type: "COLLEGE_START",
        start_month: 3,
        end_month: 4,
        label: "Start College",
        details: "Begin freshman year at chosen university",
    },
];

const COLLEGE_MILESTONES: &[MilestoneTemplate] = &[
    MilestoneTemplate {
        milestone_type: "JOB_SEARCH_START",
        start_month: -6,
        end_month: -3,
        label: "Begin Job Search",
        details: "Start applying for internships and full-time roles",
    },
    MilestoneTemplate {
        milestone_type: "FIRST_OFFER",
        start_month: -4,
        end_month: 0,
        label: "Receive First Offer",
        details: "Receive offer(s) from target companies",
    },
    MilestoneTemplate {
        milestone_type: "GRADUATION",
        start_month: 0,
        end_month: 0,
        label: "College Graduation",
        details: "Complete undergraduate degree",
    },
    MilestoneTemplate {
        milestone_type: "START_EMPLOYMENT",
        start_month: 0,
        end_month: 3,
        label: "Start Full-time Role",
        details: "Begin first full-time position",
    },
    MilestoneTemplate {
        milestone_type: "FIRST_PROMOTION",
        start_month: 12,
        end_month: 24,
        label: "First Promotion",
        details: "Receive title change or level bump",
    },
    MilestoneTemplate {
        milestone_type: "FIRST_JOB_CHANGE",
        start_month: 18,
        end_month: 36,
        label: "First Job Change",
        details: "Move to new role or company for growth",
    },
    MilestoneTemplate {
        milestone_type: "SENIOR_ROLE",
        start_month: 36,
        end_month: 60,
        label: "Reach Senior Level",
        details: "Achieve senior or staff-level position",
    },
];

const POST_GRAD_MILESTONES: &[MilestoneTemplate] = &[
    MilestoneTemplate {
        milestone_type: "NEXT_PROMOTION",
        start_month: 6,
        end_month: 18,
        label: "Next Promotion",
        details: "Progress to next level in career",
    },
    MilestoneTemplate {
        milestone_type: "JOB_CHANGE",
        start_month: 12,
        end_month: 24,
        label: "Career Move",
        details: "Consider new opportunities for growth",
    },
    MilestoneTemplate {
        milestone_type: "LEADERSHIP",
        start_month: 24,
        end_month: 48,
        label: "Leadership Role",
        details: "Move into management or technical leadership",
    },
    MilestoneTemplate {
        milestone_type: "GRAD_SCHOOL",
        start_month: 24,
        end_month: 60,
        label: "Graduate School (Optional)",
        details: "Consider MBA or specialized master's degree",
    },
];

const ENGINEERING_PROBS: &[(&str, f64)] = &[
    ("JOB_SEARCH_START", 85.0),
    ("FIRST_OFFER", 78.0),
    ("START_EMPLOYMENT", 72.0),
    ("FIRST_PROMOTION", 50.0),
    ("FIRST_JOB_CHANGE", 60.0),
    ("SENIOR_ROLE", 40.0),
];

const BUSINESS_PROBS: &[(&str, f64)] = &[
    ("JOB_SEARCH_START", 80.0),
    ("FIRST_OFFER", 70.0),
    ("START_EMPLOYMENT", 65.0),
    ("FIRST_PROMOTION", 45.0),
    ("FIRST_JOB_CHANGE", 55.0),
    ("SENIOR_ROLE", 30.0),
];

const DEFAULT_PROBS: &[(&str, f64)] = &[
    ("JOB_SEARCH_START", 75.0),
    ("FIRST_OFFER", 60.0),
    ("START_EMPLOYMENT", 55.0),
    ("FIRST_PROMOTION", 40.0),
    ("FIRST_JOB_CHANGE", 50.0),
    ("SENIOR_ROLE", 25.0),
    ("COLLEGE_APPS", 95.0),
    ("DECISIONS", 90.0),
    ("GRADUATION", 100.0),
    ("COLLEGE_START", 85.0),
    ("NEXT_PROMOTION", 45.0),
    ("JOB_CHANGE", 50.0),
    ("LEADERSHIP", 25.0),
    ("GRAD_SCHOOL", 20.0),
];

fn category_probs(major_category: Option<&str>) -> Option<&'static [(&'static str, f64)]> {
    match major_category {
        Some("Engineering & Technology") => Some(ENGINEERING_PROBS),
        Some("Business") => Some(BUSINESS_PROBS),
        _ => None,
    }
}

fn lookup(table: &[(&str, f64)], milestone_type: &str) -> Option<f64> {
    table
        .iter()
        .find(|(key, _)| *key == milestone_type)
        .map(|(_, pct)| *pct)
}

/// Generate the fallback milestone timeline for a scenario.
///
/// The stage selects a fixed ordered template; each milestone's probability
/// comes from the major-category table, then the default table, then
/// [`FALLBACK_PCT`]. For POST_GRAD scenarios with `yearsSinceGrad` set,
/// every window shifts backward by twelve months per year, re-anchoring
/// the timeline to "now" instead of graduation. Output is sorted ascending
/// by start month.
///
/// The cohort argument is currently unused: it reserves the seam where
/// cohort-specific timelines will plug in.
pub fn generate_fallback_timeline(
    scenario: &ScenarioInput,
    _cohort: Option<&Cohort>,
    major_category: Option<&str>,
) -> Vec<Milestone> {
    let templates = match scenario.stage {
        Stage::HighSchool => HIGH_SCHOOL_MILESTONES,
        Stage::College => COLLEGE_MILESTONES,
        Stage::PostGrad => POST_GRAD_MILESTONES,
    };

    let probs = category_probs(major_category);

    let offset = match (scenario.stage, scenario.years_since_grad) {
        (Stage::PostGrad, Some(years)) => years as i32 * 12,
        _ => 0,
    };

    let mut milestones: Vec<Milestone> = templates
        .iter()
        .map(|template| {
            let pct = probs
                .and_then(|table| lookup(table, template.milestone_type))
                .or_else(|| lookup(DEFAULT_PROBS, template.milestone_type))
                .unwrap_or(FALLBACK_PCT);
            Milestone {
                milestone_type: template.milestone_type.to_string(),
                start_month: template.start_month - offset,
                end_month: template.end_month - offset,
                pct,
                label: template.label.to_string(),
                details: Some(template.details.to_string()),
            }
        })
        .collect();

    milestones.sort_by_key(|m| m.start_month);
    milestones
}
