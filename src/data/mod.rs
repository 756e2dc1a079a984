//! Immutable in-memory datasets and read-only repository accessors.
//!
//! All seed data is parsed once at startup into [`Datasets`], which is then
//! shared by `Arc` handle across the service and HTTP layers. There are no
//! process-wide singletons and no writes after construction, so concurrent
//! reads need no locking.

pub mod cohorts;
pub mod majors;
pub mod occupations;
pub mod schools;

pub use cohorts::CohortsRepository;
pub use majors::MajorsRepository;
pub use occupations::OccupationsRepository;
pub use schools::SchoolsRepository;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Cohort, Major, Occupation, OccupationSalary, School};

/// Result type for dataset loading.
pub type DataResult<T> = Result<T, DataError>;

/// Errors raised while loading seed datasets. These can only occur at
/// startup; once [`Datasets`] is constructed, no data operation fails.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset file {file}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {file} at {path}")]
    Parse {
        file: String,
        /// Serde path to the offending element, e.g. `[3].salary.p50`.
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

const SCHOOLS_FILE: &str = "schools.json";
const MAJORS_FILE: &str = "majors.json";
const COHORTS_FILE: &str = "cohorts.json";
const OCCUPATIONS_FILE: &str = "occupations.json";
const SALARIES_FILE: &str = "salary_by_occupation.json";

/// The four read-only repositories, bundled for dependency injection.
#[derive(Debug)]
pub struct Datasets {
    pub schools: SchoolsRepository,
    pub majors: MajorsRepository,
    pub occupations: OccupationsRepository,
    pub cohorts: CohortsRepository,
}

impl Datasets {
    /// Build datasets from already-parsed records. The cohort matcher's
    /// slug-to-code translation table is derived from the school and major
    /// records here, so this is the single construction path.
    pub fn from_records(
        schools: Vec<School>,
        majors: Vec<Major>,
        occupations: Vec<Occupation>,
        salaries: Vec<OccupationSalary>,
        cohorts: Vec<Cohort>,
    ) -> Self {
        let cohorts = CohortsRepository::new(cohorts, &schools, &majors);
        Self {
            schools: SchoolsRepository::new(schools),
            majors: MajorsRepository::new(majors),
            occupations: OccupationsRepository::new(occupations, salaries),
            cohorts,
        }
    }

    /// Load all five seed files from a directory.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> DataResult<Self> {
        let dir = dir.as_ref();
        Ok(Self::from_records(
            read_json_file(dir, SCHOOLS_FILE)?,
            read_json_file(dir, MAJORS_FILE)?,
            read_json_file(dir, OCCUPATIONS_FILE)?,
            read_json_file(dir, SALARIES_FILE)?,
            read_json_file(dir, COHORTS_FILE)?,
        ))
    }

    /// Parse the seed data compiled into the binary. Lets the server run
    /// without any external files.
    pub fn builtin() -> DataResult<Self> {
        Ok(Self::from_records(
            parse_json(SCHOOLS_FILE, include_str!("../../data/schools.json"))?,
            parse_json(MAJORS_FILE, include_str!("../../data/majors.json"))?,
            parse_json(
                OCCUPATIONS_FILE,
                include_str!("../../data/occupations.json"),
            )?,
            parse_json(
                SALARIES_FILE,
                include_str!("../../data/salary_by_occupation.json"),
            )?,
            parse_json(COHORTS_FILE, include_str!("../../data/cohorts.json"))?,
        ))
    }
}

fn read_json_file<T: DeserializeOwned>(dir: &Path, file: &str) -> DataResult<T> {
    let path = dir.join(file);
    let raw = fs::read_to_string(&path).map_err(|source| DataError::Io {
        file: path.display().to_string(),
        source,
    })?;
    parse_json(file, &raw)
}

/// Deserialize with `serde_path_to_error` so parse failures name the
/// offending element instead of just a line/column.
fn parse_json<T: DeserializeOwned>(file: &str, raw: &str) -> DataResult<T> {
    let de = &mut serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize(de).map_err(|err| DataError::Parse {
        file: file.to_string(),
        path: err.path().to_string(),
        source: err.into_inner(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_datasets_parse() {
        let datasets = Datasets::builtin().expect("builtin seed data must parse");
        assert!(!datasets.schools.all().is_empty());
        assert!(!datasets.majors.all().is_empty());
        assert!(!datasets.occupations.all().is_empty());
        assert!(!datasets.cohorts.all().is_empty());
    }

    #[test]
    fn test_builtin_percentages_within_range() {
        let datasets = Datasets::builtin().unwrap();
        for cohort in datasets.cohorts.all() {
            for path in cohort.paths.iter().flatten() {
                assert!((0.0..=100.0).contains(&path.pct), "path pct out of range");
            }
            for share in cohort.employers.iter().flatten() {
                assert!((0.0..=100.0).contains(&share.pct));
            }
            if let Some(relocation) = &cohort.relocation {
                for metro in &relocation.metros {
                    assert!((0.0..=100.0).contains(&metro.pct));
                }
            }
        }
    }

    #[test]
    fn test_parse_error_carries_path() {
        let raw = r#"[{"id":"x","name":"X","category":"Other","cipCode":42}]"#;
        let err = parse_json::<Vec<crate::models::Major>>("majors.json", raw).unwrap_err();
        match err {
            DataError::Parse { file, path, .. } => {
                assert_eq!(file, "majors.json");
                assert!(path.contains("cipCode"), "path was {path}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_missing_dir_is_io_error() {
        let err = Datasets::load_from_dir("/nonexistent/seed/dir").unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
