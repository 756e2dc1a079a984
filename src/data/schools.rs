//! Read-only accessor over the school dataset.

use crate::models::{School, SchoolTier};

/// Repository for school records. Filterable snapshots of an immutable list.
#[derive(Debug)]
pub struct SchoolsRepository {
    schools: Vec<School>,
}

impl SchoolsRepository {
    pub fn new(schools: Vec<School>) -> Self {
        Self { schools }
    }

    pub fn all(&self) -> &[School] {
        &self.schools
    }

    pub fn get_by_id(&self, id: &str) -> Option<&School> {
        self.schools.iter().find(|s| s.id == id)
    }

    /// Case-insensitive partial match on the school name.
    pub fn search_by_name(&self, query: &str) -> Vec<&School> {
        let query = query.to_lowercase();
        self.schools
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn get_by_state(&self, state: &str) -> Vec<&School> {
        self.schools
            .iter()
            .filter(|s| s.state.eq_ignore_ascii_case(state))
            .collect()
    }

    pub fn get_by_tier(&self, tier: SchoolTier) -> Vec<&School> {
        self.schools
            .iter()
            .filter(|s| s.tier == Some(tier))
            .collect()
    }
}
