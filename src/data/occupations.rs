//! Read-only accessor over the occupation outlook and salary datasets.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{Occupation, OccupationSalary};

/// Repository for occupation records plus a salary lookup keyed by SOC code.
#[derive(Debug)]
pub struct OccupationsRepository {
    occupations: Vec<Occupation>,
    salaries: HashMap<String, OccupationSalary>,
}

impl OccupationsRepository {
    pub fn new(occupations: Vec<Occupation>, salaries: Vec<OccupationSalary>) -> Self {
        let salaries = salaries.into_iter().map(|s| (s.code.clone(), s)).collect();
        Self {
            occupations,
            salaries,
        }
    }

    pub fn all(&self) -> &[Occupation] {
        &self.occupations
    }

    pub fn get_by_code(&self, code: &str) -> Option<&Occupation> {
        self.occupations.iter().find(|o| o.code == code)
    }

    /// Case-insensitive partial match on the occupation title.
    pub fn search_by_title(&self, query: &str) -> Vec<&Occupation> {
        let query = query.to_lowercase();
        self.occupations
            .iter()
            .filter(|o| o.title.to_lowercase().contains(&query))
            .collect()
    }

    /// Case-insensitive partial match on the typical education string.
    pub fn get_by_education(&self, education: &str) -> Vec<&Occupation> {
        let education = education.to_lowercase();
        self.occupations
            .iter()
            .filter(|o| o.education.to_lowercase().contains(&education))
            .collect()
    }

    /// Occupations with known growth, descending by projected growth.
    pub fn top_growing(&self, limit: usize) -> Vec<&Occupation> {
        let mut hits: Vec<&Occupation> = self
            .occupations
            .iter()
            .filter(|o| o.growth_pct.is_some())
            .collect();
        hits.sort_by(|a, b| {
            b.growth_pct
                .partial_cmp(&a.growth_pct)
                .unwrap_or(Ordering::Equal)
        });
        hits.truncate(limit);
        hits
    }

    /// Occupations with known wages, descending by median wage.
    pub fn highest_paying(&self, limit: usize) -> Vec<&Occupation> {
        let mut hits: Vec<&Occupation> = self
            .occupations
            .iter()
            .filter(|o| o.median_wage.is_some())
            .collect();
        hits.sort_by(|a, b| {
            b.median_wage
                .partial_cmp(&a.median_wage)
                .unwrap_or(Ordering::Equal)
        });
        hits.truncate(limit);
        hits
    }

    pub fn salary_by_code(&self, code: &str) -> Option<&OccupationSalary> {
        self.salaries.get(code)
    }

    pub fn all_salaries(&self) -> Vec<&OccupationSalary> {
        self.salaries.values().collect()
    }
}
