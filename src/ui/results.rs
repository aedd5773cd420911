//! Results panel: risk post-filter, sort, breakdown and detail view
//!
//! None of this changes what the query processor returned; it only decides
//! how much of it is shown and in which order. Counts in the header always
//! refer to the unfiltered query result.

use crate::core::types::{EmployeeId, RiskLevel};
use crate::query::{process_query, query_summary};
use crate::roster::{EmployeeRecord, Roster};
use serde::Serialize;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Name,
    #[default]
    DaysAbsent,
    RiskLevel,
    Department,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::DaysAbsent => "Days Absent",
            SortKey::RiskLevel => "Risk Level",
            SortKey::Department => "Department",
        }
    }

    fn compare(self, a: &EmployeeRecord, b: &EmployeeRecord) -> Ordering {
        match self {
            SortKey::Name => text_order(&a.name, &b.name),
            SortKey::DaysAbsent => b.days_absent.cmp(&a.days_absent),
            SortKey::RiskLevel => b.risk_level.ordinal().cmp(&a.risk_level.ordinal()),
            SortKey::Department => text_order(&a.department, &b.department),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "days" | "daysabsent" | "days-absent" => Ok(SortKey::DaysAbsent),
            "risk" | "risklevel" | "risk-level" => Ok(SortKey::RiskLevel),
            "department" | "dept" => Ok(SortKey::Department),
            other => Err(format!("unknown sort key '{}'", other)),
        }
    }
}

/// Case-insensitive text order, ties broken by the raw text
fn text_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiskFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl RiskFilter {
    pub fn level(self) -> Option<RiskLevel> {
        match self {
            RiskFilter::All => None,
            RiskFilter::High => Some(RiskLevel::High),
            RiskFilter::Medium => Some(RiskLevel::Medium),
            RiskFilter::Low => Some(RiskLevel::Low),
        }
    }

    pub fn matches(self, employee: &EmployeeRecord) -> bool {
        self.level().map_or(true, |level| employee.risk_level == level)
    }
}

impl FromStr for RiskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(RiskFilter::All),
            other => other.parse::<RiskLevel>().map(|level| match level {
                RiskLevel::High => RiskFilter::High,
                RiskLevel::Medium => RiskFilter::Medium,
                RiskLevel::Low => RiskFilter::Low,
            }),
        }
    }
}

/// Display settings of the results panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsView {
    pub sort: SortKey,
    pub risk_filter: RiskFilter,
    pub selected: Option<EmployeeId>,
}

impl ResultsView {
    /// Risk post-filter followed by a stable sort
    pub fn apply<'a>(&self, results: &[&'a EmployeeRecord]) -> Vec<&'a EmployeeRecord> {
        let mut shown: Vec<&EmployeeRecord> = results
            .iter()
            .copied()
            .filter(|e| self.risk_filter.matches(e))
            .collect();
        shown.sort_by(|a, b| self.sort.compare(a, b));
        shown
    }
}

/// Risk counts over an unfiltered query result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskBreakdown {
    pub fn of(results: &[&EmployeeRecord]) -> Self {
        let mut breakdown = Self::default();
        for employee in results {
            match employee.risk_level {
                RiskLevel::High => breakdown.high += 1,
                RiskLevel::Medium => breakdown.medium += 1,
                RiskLevel::Low => breakdown.low += 1,
            }
        }
        breakdown
    }
}

pub fn showing_label(shown: usize, total: usize) -> String {
    format!("Showing {} of {} results", shown, total)
}

pub const BULK_ACTIONS: &[&str] = &[
    "Email All",
    "Generate Report",
    "Schedule Follow-ups",
    "Export Data",
];

pub const DETAIL_ACTIONS: &[&str] = &["Send Email", "Schedule Call", "Update Status", "View History"];

/// Guidance shown in the detail view for a selected employee
pub fn advisories(employee: &EmployeeRecord, extended_absence_days: u32) -> Vec<&'static str> {
    let mut notes = Vec::new();
    if employee.is_high_risk() {
        notes.push("Extended absence requires immediate attention and follow-up.");
    }
    if employee.days_absent >= extended_absence_days {
        notes.push("Consider disability assessment or return-to-work planning.");
    }
    notes
}

/// Everything the results panel shows for one query
#[derive(Debug, Clone)]
pub struct ResultsPanel<'a> {
    pub query: String,
    pub summary: String,
    pub breakdown: RiskBreakdown,
    /// Query-processor result count, before the risk post-filter
    pub total: usize,
    /// Rows after the risk post-filter and sort
    pub rows: Vec<&'a EmployeeRecord>,
    pub selected: Option<&'a EmployeeRecord>,
}

impl<'a> ResultsPanel<'a> {
    pub fn build(roster: &'a Roster, query: &str, view: &ResultsView) -> Self {
        let all_results = process_query(roster, query);
        let rows = view.apply(&all_results);
        let selected = view
            .selected
            .as_ref()
            .and_then(|id| all_results.iter().copied().find(|e| &e.id == id));

        Self {
            query: query.to_string(),
            summary: query_summary(query, &all_results),
            breakdown: RiskBreakdown::of(&all_results),
            total: all_results.len(),
            rows,
            selected,
        }
    }

    pub fn showing(&self) -> String {
        showing_label(self.rows.len(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(records: &[&EmployeeRecord]) -> Vec<String> {
        records.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn test_default_sort_is_days_descending() {
        let roster = Roster::sample();
        let panel = ResultsPanel::build(&roster, "my team", &ResultsView::default());
        let days: Vec<u32> = panel.rows.iter().map(|e| e.days_absent).collect();
        assert_eq!(days, [18, 8, 7, 6, 2, 1]);
    }

    #[test]
    fn test_sort_by_name() {
        let roster = Roster::sample();
        let view = ResultsView {
            sort: SortKey::Name,
            ..Default::default()
        };
        let panel = ResultsPanel::build(&roster, "my team", &view);
        assert_eq!(
            names(&panel.rows),
            ["David Chen", "John Davis", "Lisa Wang", "Robert Kim", "Sarah Mitchell", "Sophie Turner"]
        );
    }

    #[test]
    fn test_risk_sort_is_stable() {
        let roster = Roster::sample();
        let view = ResultsView {
            sort: SortKey::RiskLevel,
            ..Default::default()
        };
        let panel = ResultsPanel::build(&roster, "my team", &view);
        let ids: Vec<&str> = panel.rows.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["10", "5", "6", "15", "1", "2"]);
    }

    #[test]
    fn test_risk_filter_keeps_total() {
        let roster = Roster::sample();
        let view = ResultsView {
            risk_filter: RiskFilter::Medium,
            ..Default::default()
        };
        let panel = ResultsPanel::build(&roster, "my team", &view);
        assert_eq!(panel.rows.len(), 3);
        assert_eq!(panel.total, 6);
        assert_eq!(panel.showing(), "Showing 3 of 6 results");
        assert_eq!(
            panel.breakdown,
            RiskBreakdown {
                high: 1,
                medium: 3,
                low: 2
            }
        );
        assert_eq!(panel.summary, "Found 6 team members with absences, 1 high-risk");
    }

    #[test]
    fn test_selected_employee_resolves_from_query_results() {
        let roster = Roster::sample();
        let view = ResultsView {
            selected: Some(EmployeeId::from("10")),
            risk_filter: RiskFilter::Low,
            ..Default::default()
        };
        let panel = ResultsPanel::build(&roster, "my team", &view);
        assert_eq!(panel.selected.map(|e| e.name.as_str()), Some("Robert Kim"));

        let outside = ResultsView {
            selected: Some(EmployeeId::from("7")),
            ..Default::default()
        };
        assert!(ResultsPanel::build(&roster, "my team", &outside).selected.is_none());
    }

    #[test]
    fn test_advisories() {
        let roster = Roster::sample();
        let kevin = roster.get(&EmployeeId::from("14")).unwrap();
        assert_eq!(advisories(kevin, 20).len(), 2);
        let maria = roster.get(&EmployeeId::from("7")).unwrap();
        assert_eq!(
            advisories(maria, 20),
            ["Extended absence requires immediate attention and follow-up."]
        );
        let sarah = roster.get(&EmployeeId::from("1")).unwrap();
        assert!(advisories(sarah, 20).is_empty());
    }

    #[test]
    fn test_parse_sort_and_filter() {
        assert_eq!("Days".parse::<SortKey>(), Ok(SortKey::DaysAbsent));
        assert_eq!("dept".parse::<SortKey>(), Ok(SortKey::Department));
        assert!("age".parse::<SortKey>().is_err());
        assert_eq!("ALL".parse::<RiskFilter>(), Ok(RiskFilter::All));
        assert_eq!("high".parse::<RiskFilter>(), Ok(RiskFilter::High));
        assert!("none".parse::<RiskFilter>().is_err());
    }
}
