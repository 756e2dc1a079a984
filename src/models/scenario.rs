//! Scenario input and the school/major reference records it points into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user's current educational stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    HighSchool,
    College,
    PostGrad,
}

/// College year for current students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollegeYear {
    Freshman,
    Sophomore,
    Junior,
    Senior,
}

/// Self-reported risk tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

/// A user's self-described situation, supplied per report request.
///
/// Transient: validated at the HTTP boundary (see
/// [`crate::services::validation`]) and echoed back in the report output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInput {
    pub stage: Stage,
    pub school_id: String,
    pub major_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college_year: Option<CollegeYear>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_since_grad: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intended_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<RiskTolerance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grad_school_interest: Option<bool>,
}

/// Institutional control of a school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchoolType {
    Public,
    Private,
    ForProfit,
    Community,
}

/// Rough selectivity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchoolTier {
    Elite,
    Selective,
    Competitive,
    Accessible,
}

impl FromStr for SchoolTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ELITE" => Ok(SchoolTier::Elite),
            "SELECTIVE" => Ok(SchoolTier::Selective),
            "COMPETITIVE" => Ok(SchoolTier::Competitive),
            "ACCESSIBLE" => Ok(SchoolTier::Accessible),
            _ => Err(UnknownTier(s.to_string())),
        }
    }
}

/// Error returned when a tier query parameter does not name a known tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown tier '{}', expected ELITE, SELECTIVE, COMPETITIVE, or ACCESSIBLE",
            self.0
        )
    }
}

impl std::error::Error for UnknownTier {}

/// A school record, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: String,
    /// IPEDS institution code, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unitid: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub state: String,
    #[serde(rename = "type")]
    pub school_type: SchoolType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<SchoolTier>,
}

/// A field-of-study record, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Major {
    pub id: String,
    pub name: String,
    pub category: String,
    /// CIP classification code, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cip_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_wire_format() {
        assert_eq!(
            serde_json::to_string(&Stage::HighSchool).unwrap(),
            "\"HIGH_SCHOOL\""
        );
        let stage: Stage = serde_json::from_str("\"POST_GRAD\"").unwrap();
        assert_eq!(stage, Stage::PostGrad);
    }

    #[test]
    fn test_scenario_camel_case_round_trip() {
        let raw = r#"{
            "stage": "COLLEGE",
            "schoolId": "harvard",
            "majorId": "cs",
            "yearsSinceGrad": 2,
            "gradSchoolInterest": true
        }"#;
        let scenario: ScenarioInput = serde_json::from_str(raw).unwrap();
        assert_eq!(scenario.school_id, "harvard");
        assert_eq!(scenario.years_since_grad, Some(2));
        assert_eq!(scenario.grad_school_interest, Some(true));
        assert!(scenario.college_year.is_none());

        let json = serde_json::to_value(&scenario).unwrap();
        assert_eq!(json["majorId"], "cs");
        // Absent optionals stay off the wire.
        assert!(json.get("intendedLocation").is_none());
    }

    #[test]
    fn test_school_type_field_rename() {
        let raw = r#"{"id":"berkeley","name":"UC Berkeley","state":"CA","type":"PUBLIC"}"#;
        let school: School = serde_json::from_str(raw).unwrap();
        assert_eq!(school.school_type, SchoolType::Public);
        assert!(school.tier.is_none());
    }

    #[test]
    fn test_tier_from_str() {
        assert_eq!("elite".parse::<SchoolTier>().unwrap(), SchoolTier::Elite);
        assert_eq!(
            "SELECTIVE".parse::<SchoolTier>().unwrap(),
            SchoolTier::Selective
        );
        assert!("ivy".parse::<SchoolTier>().is_err());
    }
}
