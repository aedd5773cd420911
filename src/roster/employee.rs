//! Employee absence records

use crate::core::types::{EmployeeId, RiskLevel};
use serde::{Deserialize, Serialize};

/// One employee's absence case as shown on the dashboard
///
/// Only `days_absent`, `risk_level`, `department` and `is_my_team` take part
/// in filtering; the remaining fields are display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    pub days_absent: u32,
    pub risk_level: RiskLevel,
    pub last_contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub start_date: String,
    pub email: String,
    pub manager: String,
    #[serde(default)]
    pub is_my_team: bool,
}

impl EmployeeRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        days_absent: u32,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            id: EmployeeId::new(id),
            name: name.into(),
            department: department.into(),
            days_absent,
            risk_level,
            last_contact: String::new(),
            reason: None,
            start_date: String::new(),
            email: String::new(),
            manager: String::new(),
            is_my_team: false,
        }
    }

    pub fn with_last_contact(mut self, last_contact: impl Into<String>) -> Self {
        self.last_contact = last_contact.into();
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = start_date.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_manager(mut self, manager: impl Into<String>) -> Self {
        self.manager = manager.into();
        self
    }

    pub fn on_my_team(mut self) -> Self {
        self.is_my_team = true;
        self
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk_level == RiskLevel::High
    }
}
