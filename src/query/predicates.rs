//! Filter predicates over employee records
//!
//! Every predicate is a pure test on one record. Applying a predicate is a
//! stable filter: surviving records keep their original relative order.

use crate::core::types::{Department, RiskLevel};
use crate::roster::employee::EmployeeRecord;

/// A named criterion an employee either meets or does not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// `days_absent <= n` (inclusive, so windows overlap)
    AbsentAtMost(u32),
    /// `lo <= days_absent <= hi`
    AbsentBetween(u32, u32),
    /// Direct reports of the viewing manager
    MyTeam,
    /// Exact risk level
    Risk(RiskLevel),
    /// Risk level is any of the listed ones
    RiskIn(&'static [RiskLevel]),
    /// Exact, case-sensitive department name
    Department(Department),
}

impl Predicate {
    pub const LAST_3_DAYS: Predicate = Predicate::AbsentAtMost(3);
    pub const LAST_7_DAYS: Predicate = Predicate::AbsentAtMost(7);
    pub const LAST_30_DAYS: Predicate = Predicate::AbsentAtMost(30);
    pub const URGENT_ONLY: Predicate = Predicate::Risk(RiskLevel::High);
    pub const NEEDS_APPROVAL: Predicate =
        Predicate::RiskIn(&[RiskLevel::Medium, RiskLevel::High]);
    pub const FOLLOW_UP_WINDOW: Predicate = Predicate::AbsentBetween(5, 15);

    pub fn matches(&self, employee: &EmployeeRecord) -> bool {
        match *self {
            Predicate::AbsentAtMost(days) => employee.days_absent <= days,
            Predicate::AbsentBetween(lo, hi) => {
                employee.days_absent >= lo && employee.days_absent <= hi
            }
            Predicate::MyTeam => employee.is_my_team,
            Predicate::Risk(level) => employee.risk_level == level,
            Predicate::RiskIn(levels) => levels.contains(&employee.risk_level),
            Predicate::Department(department) => employee.department == department.name(),
        }
    }

    /// Keep the records that match, preserving order
    pub fn apply<'a, I>(&self, employees: I) -> Vec<&'a EmployeeRecord>
    where
        I: IntoIterator<Item = &'a EmployeeRecord>,
    {
        employees.into_iter().filter(|e| self.matches(e)).collect()
    }

    pub fn count<'a, I>(&self, employees: I) -> usize
    where
        I: IntoIterator<Item = &'a EmployeeRecord>,
    {
        employees.into_iter().filter(|e| self.matches(e)).count()
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::AbsentAtMost(days) => write!(f, "days absent <= {}", days),
            Predicate::AbsentBetween(lo, hi) => write!(f, "{} <= days absent <= {}", lo, hi),
            Predicate::MyTeam => write!(f, "on my team"),
            Predicate::Risk(level) => write!(f, "risk = {}", level),
            Predicate::RiskIn(levels) => {
                let names: Vec<&str> = levels.iter().map(|l| l.as_str()).collect();
                write!(f, "risk in [{}]", names.join(", "))
            }
            Predicate::Department(department) => write!(f, "department = {}", department),
        }
    }
}
