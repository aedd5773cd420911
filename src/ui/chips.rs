//! Chips, frequent actions and quick buttons with live counts
//!
//! Counts are taken against the full roster, independent of whatever query
//! is currently showing.

use crate::core::types::Department;
use crate::query::predicates::Predicate;
use crate::roster::Roster;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipKind {
    Timeframe,
    Scope,
    Filter,
    Department,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipVariant {
    Default,
    Urgent,
    Filter,
}

/// A quick-filter chip under the search line
///
/// Chips with a query run it directly. Chips without one append their label
/// to the search line so several can be combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub label: &'static str,
    pub kind: ChipKind,
    pub count: usize,
    pub query: Option<&'static str>,
}

impl Chip {
    pub fn variant(&self) -> ChipVariant {
        match self.kind {
            ChipKind::Timeframe => ChipVariant::Filter,
            ChipKind::Filter => ChipVariant::Urgent,
            ChipKind::Scope | ChipKind::Department => ChipVariant::Default,
        }
    }
}

/// A frequent action with its live count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub count: usize,
    pub query: &'static str,
}

impl FrequentAction {
    /// Actions with a backlog above this are flagged urgent
    pub const URGENT_ABOVE: usize = 5;

    pub fn variant(&self) -> ChipVariant {
        if self.count > Self::URGENT_ABOVE {
            ChipVariant::Urgent
        } else {
            ChipVariant::Default
        }
    }
}

pub const REPORT_QUERY: &str = "generate absence report";
pub const URGENT_QUERY: &str = "show absent employees urgent only";

/// The two buttons above the search line
pub const QUICK_BUTTONS: &[(&str, &str)] =
    &[("Report", REPORT_QUERY), ("Urgent cases", URGENT_QUERY)];

/// Index of the quick button whose label starts with `word`, ignoring case
pub fn quick_button(word: &str) -> Option<usize> {
    let word = word.to_lowercase();
    QUICK_BUTTONS
        .iter()
        .position(|(label, _)| label.to_lowercase().starts_with(&word))
}

pub fn frequent_actions(roster: &Roster) -> Vec<FrequentAction> {
    let employees = roster.all();
    vec![
        FrequentAction {
            label: "Review new cases",
            icon: "[new]",
            count: Predicate::LAST_7_DAYS.count(employees),
            query: "review new cases",
        },
        FrequentAction {
            label: "Check high risk",
            icon: "[!]",
            count: Predicate::URGENT_ONLY.count(employees),
            query: "show absent employees high risk",
        },
        FrequentAction {
            label: "Pending approvals",
            icon: "[ok]",
            count: Predicate::NEEDS_APPROVAL.count(employees),
            query: "pending approvals",
        },
        FrequentAction {
            label: "Today's follow-ups",
            icon: "[cal]",
            count: Predicate::FOLLOW_UP_WINDOW.count(employees),
            query: "follow-ups",
        },
    ]
}

pub fn contextual_chips(roster: &Roster) -> Vec<Chip> {
    let employees = roster.all();
    let department_chip = |label: &'static str, department: Department, query: &'static str| Chip {
        label,
        kind: ChipKind::Department,
        count: Predicate::Department(department).count(employees),
        query: Some(query),
    };

    vec![
        Chip {
            label: "last 3 days",
            kind: ChipKind::Timeframe,
            count: Predicate::LAST_3_DAYS.count(employees),
            query: Some("show absent employees last 3 days"),
        },
        Chip {
            label: "last 7 days",
            kind: ChipKind::Timeframe,
            count: Predicate::LAST_7_DAYS.count(employees),
            query: Some("show absent employees last 7 days"),
        },
        Chip {
            label: "last 30 days",
            kind: ChipKind::Timeframe,
            count: Predicate::LAST_30_DAYS.count(employees),
            query: Some("show absent employees last 30 days"),
        },
        Chip {
            label: "my team",
            kind: ChipKind::Scope,
            count: Predicate::MyTeam.count(employees),
            query: Some("show absent employees my team"),
        },
        Chip {
            label: "urgent only",
            kind: ChipKind::Filter,
            count: Predicate::URGENT_ONLY.count(employees),
            query: Some(URGENT_QUERY),
        },
        department_chip(
            "production",
            Department::Production,
            "show absent employees production",
        ),
        department_chip(
            "engineering",
            Department::Engineering,
            "show absent employees engineering",
        ),
        department_chip("sales", Department::Sales, "show absent employees sales"),
    ]
}
