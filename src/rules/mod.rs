//! Pure rule modules: advisory risk flags and the fallback career timeline.
//!
//! Rules never touch repositories or perform I/O; callers resolve whatever
//! context a rule needs (cohort, major category, keyword config) and pass
//! it in, so every rule is testable in isolation.

pub mod config;
pub mod risk_flags;
pub mod timeline;

pub use config::RiskRuleConfig;
pub use risk_flags::generate_risk_flags;
pub use timeline::generate_fallback_timeline;
