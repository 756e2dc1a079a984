//! Timeline service: resolves the scenario's major category and delegates
//! to the fallback rule.

use chrono::{Datelike, NaiveDate};

use crate::data::MajorsRepository;
use crate::models::{Cohort, Milestone, ScenarioInput};
use crate::rules;

/// Generate timeline milestones for a scenario.
///
/// Looks up the scenario major's category for better probability defaults,
/// then delegates to [`rules::generate_fallback_timeline`]. Cohort-specific
/// timelines will replace the fallback once cohort timeline data exists.
pub fn generate_timeline(
    scenario: &ScenarioInput,
    cohort: Option<&Cohort>,
    majors: &MajorsRepository,
) -> Vec<Milestone> {
    let major_category = majors.get_by_id(&scenario.major_id).map(|m| m.category.as_str());
    rules::generate_fallback_timeline(scenario, cohort, major_category)
}

/// Re-anchor a timeline from the graduation anchor to a caller-supplied
/// reference date, using whole-month arithmetic.
pub fn shift_to_reference_date(
    milestones: &[Milestone],
    graduation: NaiveDate,
    now: NaiveDate,
) -> Vec<Milestone> {
    let months_until_grad = (graduation.year() - now.year()) * 12
        + (graduation.month() as i32 - now.month() as i32);
    milestones
        .iter()
        .map(|m| Milestone {
            start_month: m.start_month + months_until_grad,
            end_month: m.end_month + months_until_grad,
            ..m.clone()
        })
        .collect()
}
