//! Read-only accessor over the cohort dataset, including the
//! school-and-major matcher with its ordered fallback chain.

use std::collections::HashMap;

use crate::models::{Cohort, Major, School};

/// Wildcard value a cohort may carry on either axis to stand in for any
/// school or any major.
pub const WILDCARD: &str = "default";

/// Repository for cohort outcome records.
///
/// At construction it derives a slug-to-external-code translation table
/// from the school and major datasets (school slug -> IPEDS unitid, major
/// slug -> CIP code). Both request identifiers and cohort identifiers pass
/// through the same table before comparison, so a caller may address a
/// cohort by slug or by code interchangeably. Identifiers without a
/// mapping are compared as-is.
#[derive(Debug)]
pub struct CohortsRepository {
    cohorts: Vec<Cohort>,
    school_codes: HashMap<String, String>,
    major_codes: HashMap<String, String>,
}

impl CohortsRepository {
    pub fn new(cohorts: Vec<Cohort>, schools: &[School], majors: &[Major]) -> Self {
        let school_codes = schools
            .iter()
            .filter_map(|s| s.unitid.as_ref().map(|code| (s.id.clone(), code.clone())))
            .collect();
        let major_codes = majors
            .iter()
            .filter_map(|m| m.cip_code.as_ref().map(|code| (m.id.clone(), code.clone())))
            .collect();
        Self {
            cohorts,
            school_codes,
            major_codes,
        }
    }

    pub fn all(&self) -> &[Cohort] {
        &self.cohorts
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Cohort> {
        self.cohorts.iter().find(|c| c.id == id)
    }

    pub fn get_by_school(&self, school_id: &str) -> Vec<&Cohort> {
        let school = self.school_code(school_id);
        self.cohorts
            .iter()
            .filter(|c| self.school_code(&c.school_id) == school)
            .collect()
    }

    pub fn get_by_major(&self, major_id: &str) -> Vec<&Cohort> {
        let major = self.major_code(major_id);
        self.cohorts
            .iter()
            .filter(|c| self.major_code(&c.major_id) == major)
            .collect()
    }

    /// Resolve a (school, major) pair to the best-available cohort.
    ///
    /// Ordered fallback, first match in dataset order wins:
    /// 1. school and major both match;
    /// 2. school matches, any major;
    /// 3. major matches, any school;
    /// 4. first cohort with a non-null median salary.
    ///
    /// A total miss is not an error: the caller substitutes defaults.
    pub fn find_by_school_and_major(&self, school_id: &str, major_id: &str) -> Option<&Cohort> {
        let school = self.school_code(school_id);
        let major = self.major_code(major_id);

        if let Some(exact) = self.cohorts.iter().find(|c| {
            self.school_code(&c.school_id) == school && self.major_code(&c.major_id) == major
        }) {
            return Some(exact);
        }

        if let Some(school_match) = self
            .cohorts
            .iter()
            .find(|c| self.school_code(&c.school_id) == school)
        {
            return Some(school_match);
        }

        if let Some(major_match) = self
            .cohorts
            .iter()
            .find(|c| self.major_code(&c.major_id) == major)
        {
            return Some(major_match);
        }

        self.cohorts.iter().find(|c| c.salary.p50.is_some())
    }

    fn school_code<'a>(&'a self, id: &'a str) -> &'a str {
        translate(&self.school_codes, id)
    }

    fn major_code<'a>(&'a self, id: &'a str) -> &'a str {
        translate(&self.major_codes, id)
    }
}

/// The wildcard never translates; unmapped identifiers pass through raw.
fn translate<'a>(codes: &'a HashMap<String, String>, id: &'a str) -> &'a str {
    if id == WILDCARD {
        return id;
    }
    codes.get(id).map(String::as_str).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SalaryDistribution, SchoolType};

    fn school(id: &str, unitid: Option<&str>) -> School {
        School {
            id: id.to_string(),
            unitid: unitid.map(str::to_string),
            name: id.to_string(),
            city: None,
            state: "MA".to_string(),
            school_type: SchoolType::Private,
            tier: None,
        }
    }

    fn major(id: &str, cip: Option<&str>) -> Major {
        Major {
            id: id.to_string(),
            name: id.to_string(),
            category: "Other".to_string(),
            cip_code: cip.map(str::to_string),
        }
    }

    fn cohort(id: &str, school_id: &str, major_id: &str, p50: Option<f64>) -> Cohort {
        Cohort {
            id: id.to_string(),
            school_id: school_id.to_string(),
            major_id: major_id.to_string(),
            grad_year_range: "2018-2022".to_string(),
            sample_size: 100,
            paths: None,
            salary: SalaryDistribution {
                p50,
                ..SalaryDistribution::unavailable()
            },
            relocation: None,
            employers: None,
            titles: None,
        }
    }

    fn repo(cohorts: Vec<Cohort>) -> CohortsRepository {
        CohortsRepository::new(
            cohorts,
            &[school("harvard", Some("166027")), school("umich", None)],
            &[major("cs", Some("11.0701")), major("econ", None)],
        )
    }

    #[test]
    fn test_exact_match_wins() {
        let repo = repo(vec![
            cohort("both", "harvard", "cs", Some(95000.0)),
            cohort("school-only", "harvard", WILDCARD, Some(80000.0)),
        ]);
        assert_eq!(repo.find_by_school_and_major("harvard", "cs").unwrap().id, "both");
    }

    #[test]
    fn test_school_fallback_any_major() {
        let repo = repo(vec![
            cohort("other-major", "harvard", "econ", Some(70000.0)),
            cohort("major-only", WILDCARD, "cs", Some(90000.0)),
        ]);
        // No (harvard, cs) cohort: the school-axis match beats the major-axis one.
        let hit = repo.find_by_school_and_major("harvard", "cs").unwrap();
        assert_eq!(hit.id, "other-major");
    }

    #[test]
    fn test_major_fallback_any_school() {
        let repo = repo(vec![
            cohort("umich-econ", "umich", "econ", Some(60000.0)),
            cohort("any-cs", WILDCARD, "cs", Some(90000.0)),
        ]);
        let hit = repo.find_by_school_and_major("harvard", "cs").unwrap();
        assert_eq!(hit.id, "any-cs");
    }

    #[test]
    fn test_final_fallback_first_nonnull_median() {
        let repo = repo(vec![
            cohort("no-salary", "umich", "econ", None),
            cohort("with-salary", "umich", WILDCARD, Some(55000.0)),
        ]);
        let hit = repo.find_by_school_and_major("harvard", "cs").unwrap();
        assert_eq!(hit.id, "with-salary");
    }

    #[test]
    fn test_total_miss_returns_none() {
        let repo = repo(vec![cohort("no-salary", "umich", "econ", None)]);
        assert!(repo.find_by_school_and_major("harvard", "cs").is_none());
    }

    #[test]
    fn test_code_and_slug_address_same_cohort() {
        // Cohort keyed by external codes; requests by slug must still hit it.
        let repo = repo(vec![cohort("coded", "166027", "11.0701", Some(95000.0))]);
        assert_eq!(repo.find_by_school_and_major("harvard", "cs").unwrap().id, "coded");
        assert_eq!(
            repo.find_by_school_and_major("166027", "11.0701").unwrap().id,
            "coded"
        );
    }

    #[test]
    fn test_unmapped_identifier_used_raw() {
        let repo = repo(vec![cohort("raw", "unlisted-school", "cs", Some(50000.0))]);
        let hit = repo.find_by_school_and_major("unlisted-school", "cs").unwrap();
        assert_eq!(hit.id, "raw");
    }

    #[test]
    fn test_wildcard_never_translated() {
        // A school slugged "default" would otherwise be ambiguous; the
        // wildcard must compare literally.
        let repo = repo(vec![cohort("wild", WILDCARD, WILDCARD, Some(50000.0))]);
        let hit = repo.find_by_school_and_major("harvard", "cs").unwrap();
        assert_eq!(hit.id, "wild");
    }

    #[test]
    fn test_get_by_school_matches_through_codes() {
        let repo = repo(vec![
            cohort("a", "harvard", "cs", None),
            cohort("b", "166027", "econ", None),
            cohort("c", "umich", "cs", None),
        ]);
        let hits = repo.get_by_school("harvard");
        assert_eq!(hits.len(), 2);
    }
}
