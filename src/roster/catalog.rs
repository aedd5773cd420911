//! The roster - the fixed set of employee records a session works against
//!
//! A roster is built once (the built-in sample or a TOML file) and is never
//! mutated afterwards. Every query starts from the full roster.

use crate::core::error::{CaseyError, Result};
use crate::core::types::{EmployeeId, RiskLevel};
use crate::roster::employee::EmployeeRecord;
use ahash::AHashSet;
use serde::Deserialize;
use std::path::Path;

/// Immutable, ordered collection of employee records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    employees: Vec<EmployeeRecord>,
}

impl Roster {
    /// Build a roster, rejecting duplicate ids
    pub fn new(employees: Vec<EmployeeRecord>) -> Result<Self> {
        let mut seen = AHashSet::with_capacity(employees.len());
        for employee in &employees {
            if !seen.insert(employee.id.clone()) {
                return Err(CaseyError::InvalidRecord {
                    id: employee.id.to_string(),
                    reason: "duplicate id".into(),
                });
            }
        }
        Ok(Self { employees })
    }

    /// The built-in sample roster used by the dashboard prototype
    pub fn sample() -> Self {
        Self {
            employees: sample_employees(),
        }
    }

    /// All records in original order
    pub fn all(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    /// All records as borrowed references, the shape every filter works on
    pub fn refs(&self) -> Vec<&EmployeeRecord> {
        self.employees.iter().collect()
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&EmployeeRecord> {
        self.employees.iter().find(|e| &e.id == id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Load a roster from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CaseyError::RosterError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let roster = Self::parse_toml(&content)?;
        tracing::info!("Loaded {} employees from {}", roster.len(), path.display());
        Ok(roster)
    }

    /// The roster file if one is given, otherwise the built-in sample
    pub fn from_path_or_sample(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_toml(path),
            None => Ok(Self::sample()),
        }
    }

    /// Parse a roster from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let toml_data: TomlRoster = toml::from_str(content)?;

        let employees = toml_data
            .employees
            .into_iter()
            .map(TomlEmployee::into_record)
            .collect::<Result<Vec<_>>>()?;

        Self::new(employees)
    }
}

/// TOML representation of a roster file
#[derive(Debug, Deserialize)]
struct TomlRoster {
    #[serde(default)]
    employees: Vec<TomlEmployee>,
}

/// TOML representation of a single employee
///
/// Numeric and enumerated fields are read loosely and validated in
/// `into_record` so a bad row names the offending id.
#[derive(Debug, Deserialize)]
struct TomlEmployee {
    id: String,
    name: String,
    department: String,
    days_absent: i64,
    risk_level: String,
    #[serde(default)]
    last_contact: String,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    start_date: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    manager: String,
    #[serde(default)]
    is_my_team: bool,
}

impl TomlEmployee {
    fn into_record(self) -> Result<EmployeeRecord> {
        if self.id.trim().is_empty() {
            return Err(CaseyError::InvalidRecord {
                id: self.id,
                reason: "id must not be empty".into(),
            });
        }

        let days_absent = u32::try_from(self.days_absent).map_err(|_| CaseyError::InvalidRecord {
            id: self.id.clone(),
            reason: format!("days_absent must be non-negative, got {}", self.days_absent),
        })?;

        let risk_level: RiskLevel =
            self.risk_level
                .parse()
                .map_err(|reason| CaseyError::InvalidRecord {
                    id: self.id.clone(),
                    reason,
                })?;

        Ok(EmployeeRecord {
            id: EmployeeId::new(self.id),
            name: self.name,
            department: self.department,
            days_absent,
            risk_level,
            last_contact: self.last_contact,
            reason: self.reason,
            start_date: self.start_date,
            email: self.email,
            manager: self.manager,
            is_my_team: self.is_my_team,
        })
    }
}

fn sample_employees() -> Vec<EmployeeRecord> {
    use RiskLevel::{High, Low, Medium};

    vec![
        // Absent up to 3 days
        EmployeeRecord::new("1", "Sarah Mitchell", "Production", 2, Low)
            .with_last_contact("2 hours ago")
            .with_reason("Sick leave")
            .with_start_date("2025-01-15")
            .with_email("sarah.mitchell@company.com")
            .with_manager("Alex Johnson")
            .on_my_team(),
        EmployeeRecord::new("2", "John Davis", "Engineering", 1, Low)
            .with_last_contact("4 hours ago")
            .with_reason("Doctor appointment")
            .with_start_date("2025-01-16")
            .with_email("john.davis@company.com")
            .with_manager("Alex Johnson")
            .on_my_team(),
        EmployeeRecord::new("3", "Emma Wilson", "Marketing", 3, Low)
            .with_last_contact("1 day ago")
            .with_reason("Personal day")
            .with_start_date("2025-01-14")
            .with_email("emma.wilson@company.com")
            .with_manager("Lisa Chen"),
        // Up to a week
        EmployeeRecord::new("4", "Michael Brown", "Finance", 5, Medium)
            .with_last_contact("2 days ago")
            .with_reason("Flu symptoms")
            .with_start_date("2025-01-12")
            .with_email("michael.brown@company.com")
            .with_manager("Robert Kim"),
        EmployeeRecord::new("5", "Lisa Wang", "HR", 7, Medium)
            .with_last_contact("1 day ago")
            .with_reason("Family emergency")
            .with_start_date("2025-01-10")
            .with_email("lisa.wang@company.com")
            .with_manager("Jennifer Lee")
            .on_my_team(),
        EmployeeRecord::new("6", "David Chen", "Operations", 6, Medium)
            .with_last_contact("3 hours ago")
            .with_reason("Medical procedure")
            .with_start_date("2025-01-11")
            .with_email("david.chen@company.com")
            .with_manager("Alex Johnson")
            .on_my_team(),
        // Up to a month
        EmployeeRecord::new("7", "Maria Rodriguez", "Sales", 15, High)
            .with_last_contact("5 days ago")
            .with_reason("Extended medical leave")
            .with_start_date("2025-01-02")
            .with_email("maria.rodriguez@company.com")
            .with_manager("Tom Wilson"),
        EmployeeRecord::new("8", "Alex Thompson", "Production", 22, High)
            .with_last_contact("1 week ago")
            .with_reason("Surgery recovery")
            .with_start_date("2024-12-26")
            .with_email("alex.thompson@company.com")
            .with_manager("Sarah Davis"),
        EmployeeRecord::new("9", "Jennifer Lee", "IT", 12, Medium)
            .with_last_contact("2 days ago")
            .with_reason("Stress leave")
            .with_start_date("2025-01-05")
            .with_email("jennifer.lee@company.com")
            .with_manager("Michael Park"),
        EmployeeRecord::new("10", "Robert Kim", "Engineering", 18, High)
            .with_last_contact("4 days ago")
            .with_reason("Mental health leave")
            .with_start_date("2024-12-30")
            .with_email("robert.kim@company.com")
            .with_manager("Alex Johnson")
            .on_my_team(),
        EmployeeRecord::new("11", "Amanda Foster", "Marketing", 9, Medium)
            .with_last_contact("1 day ago")
            .with_reason("Maternity leave prep")
            .with_start_date("2025-01-08")
            .with_email("amanda.foster@company.com")
            .with_manager("Lisa Chen"),
        EmployeeRecord::new("12", "Carlos Mendez", "Sales", 4, Low)
            .with_last_contact("6 hours ago")
            .with_reason("Vacation")
            .with_start_date("2025-01-13")
            .with_email("carlos.mendez@company.com")
            .with_manager("Tom Wilson"),
        EmployeeRecord::new("13", "Rachel Green", "Finance", 11, Medium)
            .with_last_contact("3 days ago")
            .with_reason("Bereavement leave")
            .with_start_date("2025-01-06")
            .with_email("rachel.green@company.com")
            .with_manager("Robert Kim"),
        EmployeeRecord::new("14", "Kevin Park", "Operations", 25, High)
            .with_last_contact("1 week ago")
            .with_reason("Long-term disability")
            .with_start_date("2024-12-23")
            .with_email("kevin.park@company.com")
            .with_manager("Jennifer Lee"),
        EmployeeRecord::new("15", "Sophie Turner", "HR", 8, Medium)
            .with_last_contact("12 hours ago")
            .with_reason("Training course")
            .with_start_date("2025-01-09")
            .with_email("sophie.turner@company.com")
            .with_manager("Jennifer Lee")
            .on_my_team(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_roster_shape() {
        let roster = Roster::sample();
        assert_eq!(roster.len(), 15);
        assert_eq!(roster.all()[0].name, "Sarah Mitchell");
        assert_eq!(roster.all()[14].id.as_str(), "15");
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let roster = Roster::sample();
        assert!(Roster::new(roster.all().to_vec()).is_ok());
    }

    #[test]
    fn test_get_by_id() {
        let roster = Roster::sample();
        let kevin = roster.get(&EmployeeId::from("14")).unwrap();
        assert_eq!(kevin.name, "Kevin Park");
        assert!(roster.get(&EmployeeId::from("99")).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let a = EmployeeRecord::new("1", "A", "Sales", 1, RiskLevel::Low);
        let b = EmployeeRecord::new("1", "B", "Sales", 2, RiskLevel::Low);
        let result = Roster::new(vec![a, b]);
        assert!(matches!(result, Err(CaseyError::InvalidRecord { .. })));
    }

    #[test]
    fn test_parse_toml_roster() {
        let toml_str = r#"
[[employees]]
id = "a1"
name = "Pat Doe"
department = "Finance"
days_absent = 4
risk_level = "Medium"
is_my_team = true

[[employees]]
id = "a2"
name = "Sam Roe"
department = "IT"
days_absent = 0
risk_level = "low"
reason = "Jury duty"
"#;
        let roster = Roster::parse_toml(toml_str).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.all()[0].risk_level, RiskLevel::Medium);
        assert!(roster.all()[0].is_my_team);
        assert_eq!(roster.all()[1].reason.as_deref(), Some("Jury duty"));
        assert!(!roster.all()[1].is_my_team);
    }

    #[test]
    fn test_negative_days_rejected() {
        let toml_str = r#"
[[employees]]
id = "x"
name = "Neg"
department = "Sales"
days_absent = -1
risk_level = "low"
"#;
        let err = Roster::parse_toml(toml_str).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_unknown_risk_rejected() {
        let toml_str = r#"
[[employees]]
id = "x"
name = "Odd"
department = "Sales"
days_absent = 1
risk_level = "critical"
"#;
        let err = Roster::parse_toml(toml_str).unwrap_err();
        assert!(matches!(err, CaseyError::InvalidRecord { ref id, .. } if id == "x"));
    }
}
