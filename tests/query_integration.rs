//! Query pipeline integration tests against the built-in roster

use casey::core::types::RiskLevel;
use casey::query::{plan_query, process_query, query_summary, Predicate};
use casey::roster::{EmployeeRecord, Roster};

fn ids(records: &[&EmployeeRecord]) -> Vec<String> {
    records.iter().map(|e| e.id.to_string()).collect()
}

#[test]
fn test_unrecognised_query_returns_full_roster_in_order() {
    let roster = Roster::sample();
    let results = process_query(&roster, "who is out?");
    assert_eq!(results.len(), 15);
    let expected: Vec<String> = (1..=15).map(|i| i.to_string()).collect();
    assert_eq!(ids(&results), expected);
    assert!(plan_query("who is out?").is_unfiltered());
}

#[test]
fn test_last_3_days() {
    let roster = Roster::sample();
    let results = process_query(&roster, "show absent employees last 3 days");
    assert_eq!(ids(&results), ["1", "2", "3"]);
    assert!(results.iter().all(|e| e.days_absent <= 3));
}

#[test]
fn test_last_7_days_is_superset_of_last_3() {
    let roster = Roster::sample();
    let week = process_query(&roster, "show absent employees last 7 days");
    let three = process_query(&roster, "show absent employees last 3 days");
    assert_eq!(ids(&week), ["1", "2", "3", "4", "5", "6", "12"]);
    for e in &three {
        assert!(week.iter().any(|w| w.id == e.id));
    }
}

#[test]
fn test_urgent_only_returns_every_high_risk_record() {
    let roster = Roster::sample();
    let results = process_query(&roster, "show absent employees urgent only");
    assert_eq!(ids(&results), ["7", "8", "10", "14"]);
    assert!(results.iter().all(|e| e.risk_level == RiskLevel::High));
}

#[test]
fn test_action_previews() {
    let roster = Roster::sample();

    let new_cases = process_query(&roster, "review new cases");
    assert_eq!(ids(&new_cases), ["1", "2", "3", "4", "5"]);

    let approvals = process_query(&roster, "pending approvals");
    assert_eq!(approvals.len(), 7);
    assert!(approvals.iter().all(|e| e.risk_level != RiskLevel::Low));

    let follow_ups = process_query(&roster, "follow-ups");
    assert_eq!(ids(&follow_ups), ["4", "5", "6", "7", "9"]);
}

#[test]
fn test_filters_compose() {
    let roster = Roster::sample();
    assert_eq!(ids(&process_query(&roster, "my team engineering")), ["2", "10"]);
    assert_eq!(ids(&process_query(&roster, "last 7 days production")), ["1"]);
    assert_eq!(ids(&process_query(&roster, "urgent cases in production")), ["8"]);
    assert!(process_query(&roster, "my team urgent last 3 days").is_empty());
}

#[test]
fn test_only_first_department_applies() {
    let roster = Roster::sample();
    let results = process_query(&roster, "sales and finance");
    assert_eq!(ids(&results), ["7", "12"]);
    assert_eq!(plan_query("sales and finance").step_names(), ["sales"]);
}

#[test]
fn test_processing_is_idempotent() {
    let roster = Roster::sample();
    for query in ["my team", "pending approvals", "last 30 days", "nothing"] {
        assert_eq!(process_query(&roster, query), process_query(&roster, query));
    }
}

#[test]
fn test_summaries_match_results() {
    let roster = Roster::sample();

    let query = "show absent employees last 7 days";
    let results = process_query(&roster, query);
    assert_eq!(
        query_summary(query, &results),
        "Found 7 employees absent in the last 7 days"
    );

    let query = "show absent employees last 30 days";
    let results = process_query(&roster, query);
    assert_eq!(
        query_summary(query, &results),
        "Found 15 employees absent in the last 30 days, 4 high-risk"
    );

    let query = "generate absence report";
    let results = process_query(&roster, query);
    assert_eq!(
        query_summary(query, &results),
        "Absence management report - 15 total cases"
    );
}

#[test]
fn test_predicates_agree_with_processor() {
    let roster = Roster::sample();
    let direct = Predicate::MyTeam.apply(roster.all());
    assert_eq!(direct, process_query(&roster, "my team"));
    assert_eq!(Predicate::URGENT_ONLY.count(roster.all()), 4);
}

#[test]
fn test_custom_roster_from_toml() {
    let roster = Roster::parse_toml(
        r#"
[[employees]]
id = "a1"
name = "Ada"
department = "Engineering"
days_absent = 2
risk_level = "high"
is_my_team = true

[[employees]]
id = "b2"
name = "Bo"
department = "Sales"
days_absent = 40
risk_level = "low"
"#,
    )
    .unwrap();

    assert_eq!(ids(&process_query(&roster, "last 30 days")), ["a1"]);
    assert_eq!(ids(&process_query(&roster, "my team urgent")), ["a1"]);
    assert_eq!(ids(&process_query(&roster, "sales")), ["b2"]);
}
