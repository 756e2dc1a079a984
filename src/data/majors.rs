//! Read-only accessor over the major dataset.

use std::collections::BTreeSet;

use crate::models::Major;

/// Repository for field-of-study records.
#[derive(Debug)]
pub struct MajorsRepository {
    majors: Vec<Major>,
}

impl MajorsRepository {
    pub fn new(majors: Vec<Major>) -> Self {
        Self { majors }
    }

    pub fn all(&self) -> &[Major] {
        &self.majors
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Major> {
        self.majors.iter().find(|m| m.id == id)
    }

    /// Case-insensitive partial match on the major name.
    pub fn search_by_name(&self, query: &str) -> Vec<&Major> {
        let query = query.to_lowercase();
        self.majors
            .iter()
            .filter(|m| m.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn get_by_category(&self, category: &str) -> Vec<&Major> {
        self.majors
            .iter()
            .filter(|m| m.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// All distinct categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.majors
            .iter()
            .map(|m| m.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
