//! Advisory risk flags derived from a scenario and its matched cohort.

use crate::models::{Cohort, RiskFlag, RiskLevel, RiskTolerance, ScenarioInput, Stage};

use super::config::RiskRuleConfig;

/// Sample sizes below this always draw a representativeness warning.
const SMALL_SAMPLE: u64 = 100;
/// Sample sizes below this draw an extra note for high-risk-tolerance users.
const HIGH_TOLERANCE_SAMPLE: u64 = 500;
/// A p90 - p25 spread beyond this flags negotiation-sensitive salaries.
const WIDE_SALARY_SPREAD: f64 = 100_000.0;

/// Generate advisory flags for a scenario against its matched cohort.
///
/// Pure: identical inputs always yield an identical, identically-ordered
/// list. Each check appends at most one flag; the output order is the
/// append order of the checks, not severity order.
pub fn generate_risk_flags(
    scenario: &ScenarioInput,
    cohort: Option<&Cohort>,
    config: &RiskRuleConfig,
) -> Vec<RiskFlag> {
    let mut flags = Vec::new();

    // Location-based cost-of-living note.
    if let Some(location) = &scenario.intended_location {
        let is_high_col = config
            .high_col_metros
            .iter()
            .any(|metro| contains_ci(location, metro));
        if is_high_col {
            flags.push(info(format!(
                "{location} has high cost of living - consider real wage vs nominal salary"
            )));
        }
    }

    // Salary data availability.
    if let Some(cohort) = cohort {
        if cohort.salary.p50.is_none() {
            flags.push(warn(
                "Limited salary data available for this combination - estimates may be less accurate",
            ));
        }
    }

    // Sample size.
    if let Some(cohort) = cohort {
        if cohort.sample_size < SMALL_SAMPLE {
            flags.push(warn(format!(
                "Small sample size ({}) - results may not be representative",
                cohort.sample_size
            )));
        }
    }

    // High risk tolerance against thin data.
    if scenario.risk_tolerance == Some(RiskTolerance::High) {
        if let Some(cohort) = cohort {
            if cohort.sample_size < HIGH_TOLERANCE_SAMPLE {
                flags.push(info(
                    "High risk tolerance noted - consider that outcomes have wider variance",
                ));
            }
        }
    }

    // Grad school interest.
    if scenario.grad_school_interest == Some(true) {
        flags.push(info(
            "Graduate school can delay earnings but increase long-term potential - ROI varies by field",
        ));
    }

    // Stage-specific notes.
    if scenario.stage == Stage::HighSchool {
        flags.push(info(
            "Early planning is valuable - outcomes will depend heavily on college choice and major",
        ));
    }

    if scenario.stage == Stage::PostGrad && scenario.years_since_grad == Some(0) {
        flags.push(info(
            "Recent graduates may see significant variation in first-year outcomes",
        ));
    }

    // Volatile-industry note based on the cohort's top employers.
    if let Some(employers) = cohort.and_then(|c| c.employers.as_ref()) {
        let has_volatile = employers.iter().any(|employer| {
            config
                .volatile_industries
                .iter()
                .any(|industry| contains_ci(&employer.name, industry))
        });
        if has_volatile {
            flags.push(info(
                "Tech industry has cyclical hiring patterns - timing matters for job search",
            ));
        }
    }

    // Wide salary spread.
    if let Some(cohort) = cohort {
        if let (Some(p90), Some(p25)) = (cohort.salary.p90, cohort.salary.p25) {
            if p90 - p25 > WIDE_SALARY_SPREAD {
                flags.push(warn(
                    "Starting salary varies significantly by company tier and negotiation",
                ));
            }
        }
    }

    // Intended location diverges from where the cohort actually lands.
    if let (Some(intended), Some(cohort)) = (&scenario.intended_location, cohort) {
        if let Some(top_metro) = cohort
            .relocation
            .as_ref()
            .and_then(|r| r.metros.first())
        {
            let matches_top =
                contains_ci(&top_metro.name, intended) || contains_ci(intended, &top_metro.name);
            if !matches_top {
                flags.push(info(format!(
                    "Most graduates relocate to {} - your intended location may have fewer opportunities in this field",
                    top_metro.name
                )));
            }
        }
    }

    flags
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn info(message: impl Into<String>) -> RiskFlag {
    RiskFlag {
        level: RiskLevel::Info,
        message: message.into(),
    }
}

fn warn(message: impl Into<String>) -> RiskFlag {
    RiskFlag {
        level: RiskLevel::Warn,
        message: message.into(),
    }
}
