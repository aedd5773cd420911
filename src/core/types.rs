//! Core type definitions used throughout the codebase

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique identifier for an employee record
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Coarse severity tag attached to every absence case
///
/// Ordinal values are relied upon by the risk sort in the results view:
/// High (3) sorts before Medium (2) before Low (1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

    pub fn ordinal(self) -> u8 {
        match self {
            RiskLevel::High => 3,
            RiskLevel::Medium => 2,
            RiskLevel::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(RiskLevel::High),
            "medium" => Ok(RiskLevel::Medium),
            "low" => Ok(RiskLevel::Low),
            other => Err(format!("unknown risk level '{}'", other)),
        }
    }
}

/// Departments the query language knows how to filter on
///
/// `ALL` is in keyword priority order: when a query mentions several
/// departments only the first one listed here is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Production,
    Engineering,
    Sales,
    Hr,
    Finance,
    Marketing,
    Operations,
    It,
}

impl Department {
    pub const ALL: [Department; 8] = [
        Department::Production,
        Department::Engineering,
        Department::Sales,
        Department::Hr,
        Department::Finance,
        Department::Marketing,
        Department::Operations,
        Department::It,
    ];

    /// Canonical name as stored on employee records (case-sensitive)
    pub fn name(self) -> &'static str {
        match self {
            Department::Production => "Production",
            Department::Engineering => "Engineering",
            Department::Sales => "Sales",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Marketing => "Marketing",
            Department::Operations => "Operations",
            Department::It => "IT",
        }
    }

    /// Lower-case keyword that selects this department in a query
    pub fn keyword(self) -> &'static str {
        match self {
            Department::Production => "production",
            Department::Engineering => "engineering",
            Department::Sales => "sales",
            Department::Hr => "hr",
            Department::Finance => "finance",
            Department::Marketing => "marketing",
            Department::Operations => "operations",
            Department::It => "it",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_ordinal_ordering() {
        assert!(RiskLevel::High.ordinal() > RiskLevel::Medium.ordinal());
        assert!(RiskLevel::Medium.ordinal() > RiskLevel::Low.ordinal());
    }

    #[test]
    fn test_risk_level_parse() {
        assert_eq!("HIGH".parse::<RiskLevel>(), Ok(RiskLevel::High));
        assert_eq!(" medium ".parse::<RiskLevel>(), Ok(RiskLevel::Medium));
        assert!("severe".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_risk_level_serialization() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn test_department_names_are_case_sensitive() {
        assert_eq!(Department::from_name("HR"), Some(Department::Hr));
        assert_eq!(Department::from_name("hr"), None);
        assert_eq!(Department::It.keyword(), "it");
    }

    #[test]
    fn test_employee_id_display() {
        let id = EmployeeId::from("7");
        assert_eq!(id.to_string(), "7");
        assert_eq!(id.as_str(), "7");
    }
}
