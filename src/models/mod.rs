//! Domain types shared across the repository, rule, service, and HTTP layers.
//!
//! All types serialize with `camelCase` field names and SCREAMING_SNAKE_CASE
//! enum variants to match the JSON wire format consumed by the frontend.

pub mod occupation;
pub mod report;
pub mod scenario;

pub use occupation::{Occupation, OccupationSalary};
pub use report::{
    Cohort, CohortMeta, Milestone, NamedShare, PathShare, Relocation, ReportOutput, RiskFlag,
    RiskLevel, SalaryDistribution, Snapshot,
};
pub use scenario::{
    CollegeYear, Major, RiskTolerance, ScenarioInput, School, SchoolTier, SchoolType, Stage,
};
