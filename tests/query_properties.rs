//! Property tests for the query processor

use casey::core::types::RiskLevel;
use casey::query::process_query;
use casey::roster::{EmployeeRecord, Roster};
use proptest::prelude::*;

const DEPARTMENTS: &[&str] = &[
    "Production",
    "Engineering",
    "Sales",
    "HR",
    "Finance",
    "Marketing",
    "Operations",
    "IT",
];

const FRAGMENTS: &[&str] = &[
    "show absent employees",
    "last 3 days",
    "last 7 days",
    "last 30 days",
    "my team",
    "urgent",
    "high risk",
    "production",
    "sales",
    "review new cases",
    "pending approvals",
    "follow-ups",
    "please",
];

fn risk() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::Low),
        Just(RiskLevel::Medium),
        Just(RiskLevel::High)
    ]
}

fn roster() -> impl Strategy<Value = Roster> {
    prop::collection::vec(
        (0u32..60, risk(), prop::sample::select(DEPARTMENTS), any::<bool>()),
        0..25,
    )
    .prop_map(|rows| {
        let employees = rows
            .into_iter()
            .enumerate()
            .map(|(i, (days, risk, dept, team))| {
                let record =
                    EmployeeRecord::new(i.to_string(), format!("Employee {}", i), dept, days, risk);
                if team {
                    record.on_my_team()
                } else {
                    record
                }
            })
            .collect();
        Roster::new(employees).unwrap()
    })
}

fn query() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..4).prop_map(|parts| parts.join(" "))
}

/// Position of each result in the roster, to check order preservation
fn positions(roster: &Roster, results: &[&EmployeeRecord]) -> Vec<usize> {
    results
        .iter()
        .map(|r| roster.all().iter().position(|e| e.id == r.id).unwrap())
        .collect()
}

proptest! {
    #[test]
    fn prop_results_are_ordered_subset(roster in roster(), query in query()) {
        let results = process_query(&roster, &query);
        prop_assert!(results.len() <= roster.len());
        let pos = positions(&roster, &results);
        prop_assert!(pos.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_processing_is_idempotent(roster in roster(), query in query()) {
        prop_assert_eq!(process_query(&roster, &query), process_query(&roster, &query));
    }

    #[test]
    fn prop_keyword_guarantees(roster in roster(), query in query()) {
        let lower = query.to_lowercase();
        let results = process_query(&roster, &query);

        if lower.contains("3 days") {
            prop_assert!(results.iter().all(|e| e.days_absent <= 3));
        }
        if lower.contains("my team") {
            prop_assert!(results.iter().all(|e| e.is_my_team));
        }
        if lower.contains("urgent") || lower.contains("high risk") {
            prop_assert!(results.iter().all(|e| e.risk_level == RiskLevel::High));
        }
        if lower.contains("new cases") {
            prop_assert!(results.len() <= 5);
        }
        if lower.contains("approvals") {
            prop_assert!(results.len() <= 7);
        }
    }

    #[test]
    fn prop_unknown_words_keep_everything(roster in roster()) {
        let results = process_query(&roster, "please show me");
        prop_assert_eq!(results.len(), roster.len());
    }
}
