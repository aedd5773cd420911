//! Home tab overview: greeting, summary cards and department tiles

use crate::core::config::CaseyConfig;
use crate::core::types::{Department, RiskLevel};
use crate::query::predicates::Predicate;
use crate::roster::{EmployeeRecord, Roster};
use ahash::AHashMap;

/// Departments with a tile on the home tab
pub const OVERVIEW_DEPARTMENTS: [Department; 3] = [
    Department::Production,
    Department::Engineering,
    Department::Sales,
];

/// One preview line inside a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    pub name: String,
    pub detail: String,
    pub risk: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewCard {
    pub title: &'static str,
    pub badge: String,
    pub rows: Vec<CardRow>,
    pub button: &'static str,
    pub query: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentTile {
    pub department: Department,
    pub absent: usize,
    pub high_risk: usize,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeOverview {
    pub greeting: String,
    pub subline: &'static str,
    pub cards: Vec<OverviewCard>,
    pub departments: Vec<DepartmentTile>,
}

impl HomeOverview {
    pub fn build(roster: &Roster, config: &CaseyConfig) -> Self {
        let employees = roster.all();
        let preview = config.card_preview_len;

        let high = Predicate::URGENT_ONLY.apply(employees);
        let recent = Predicate::LAST_7_DAYS.apply(employees);
        let team = Predicate::MyTeam.apply(employees);

        let cards = vec![
            OverviewCard {
                title: "High Priority",
                badge: format!("{} cases", high.len()),
                rows: rows(&high, preview, |e| format!("{} days absent", e.days_absent)),
                button: "View all high priority",
                query: "show absent employees urgent only",
            },
            OverviewCard {
                title: "Recent Activity",
                badge: format!("{} new", recent.len()),
                rows: rows(&recent, preview, |e| e.department.clone()),
                button: "View recent cases",
                query: "show absent employees last 7 days",
            },
            OverviewCard {
                title: "My Team",
                badge: format!("{} members", team.len()),
                rows: rows(&team, preview, |e| format!("{} days", e.days_absent)),
                button: "View team status",
                query: "show absent employees my team",
            },
        ];

        Self {
            greeting: format!("Good morning, {}", config.viewer_name),
            subline: "How can Casey help you today?",
            cards,
            departments: department_tiles(employees),
        }
    }

    /// Tile for a department given by name or keyword, ignoring case
    pub fn tile(&self, name: &str) -> Option<&DepartmentTile> {
        let name = name.trim().to_lowercase();
        self.departments
            .iter()
            .find(|t| t.department.keyword() == name || t.department.name().to_lowercase() == name)
    }
}

fn rows(
    records: &[&EmployeeRecord],
    limit: usize,
    detail: impl Fn(&EmployeeRecord) -> String,
) -> Vec<CardRow> {
    records
        .iter()
        .take(limit)
        .map(|e| CardRow {
            name: e.name.clone(),
            detail: detail(e),
            risk: e.risk_level,
        })
        .collect()
}

/// Absent and high-risk counts per overview department
pub fn department_tiles(employees: &[EmployeeRecord]) -> Vec<DepartmentTile> {
    let mut totals: AHashMap<Department, (usize, usize)> = AHashMap::new();
    for employee in employees {
        let Some(department) = OVERVIEW_DEPARTMENTS
            .iter()
            .copied()
            .find(|d| Predicate::Department(*d).matches(employee))
        else {
            continue;
        };
        let entry = totals.entry(department).or_default();
        entry.0 += 1;
        if employee.is_high_risk() {
            entry.1 += 1;
        }
    }

    OVERVIEW_DEPARTMENTS
        .iter()
        .map(|&department| {
            let (absent, high_risk) = totals.get(&department).copied().unwrap_or_default();
            DepartmentTile {
                department,
                absent,
                high_risk,
                query: format!("show absent employees {}", department.keyword()),
            }
        })
        .collect()
}
