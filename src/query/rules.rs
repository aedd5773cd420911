//! The keyword rule table
//!
//! Queries are not parsed; they are scanned for trigger phrases. The table
//! below is the whole query language. Groups run top to bottom and each one
//! narrows the working set left by the groups above it. Inside a
//! `FirstMatch` group only the first rule whose trigger appears is applied;
//! inside an `EveryMatch` group every rule whose trigger appears is applied,
//! in table order.
//!
//! Matching is plain substring containment on the lower-cased query, so
//! "three" triggers the `hr` department rule and "with" triggers `it`.

use crate::core::types::Department;
use crate::query::predicates::Predicate;

// Trigger phrases, shared with the summary generator so the header always
// describes the filter that actually ran.
pub const LAST_3_DAYS: &[&str] = &["last 3 days", "3 days"];
pub const LAST_7_DAYS: &[&str] = &["last 7 days", "7 days", "week"];
pub const LAST_30_DAYS: &[&str] = &["last 30 days", "30 days", "month"];
pub const MY_TEAM: &[&str] = &["my team"];
pub const URGENT: &[&str] = &["urgent", "high risk"];
pub const NEW_CASES: &[&str] = &["review new cases", "new cases"];
pub const APPROVALS: &[&str] = &["pending approvals", "approvals"];
pub const FOLLOW_UPS: &[&str] = &["follow-ups", "followups"];
pub const REPORT: &[&str] = &["report"];

/// Records kept by the "new cases" preview
pub const NEW_CASES_PREVIEW: usize = 5;
/// Records kept by the "approvals" preview
pub const APPROVALS_PREVIEW: usize = 7;
/// Records kept by the "follow-ups" preview
pub const FOLLOW_UPS_PREVIEW: usize = 5;

/// What a rule does to the working set when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Keep matching records
    Filter(Predicate),
    /// Keep matching records, then only the first `limit` of them
    Preview { predicate: Predicate, limit: usize },
}

/// A single keyword-triggered rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub action: RuleAction,
}

impl KeywordRule {
    /// Whether any trigger phrase occurs in an already lower-cased query
    pub fn is_triggered_by(&self, lower_query: &str) -> bool {
        mentions(lower_query, self.triggers)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Apply only the first triggered rule
    FirstMatch,
    /// Apply every triggered rule in order
    EveryMatch,
}

/// An ordered block of rules evaluated as one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleGroup {
    pub name: &'static str,
    pub selection: Selection,
    pub rules: &'static [KeywordRule],
}

/// Whether any of `triggers` occurs in an already lower-cased query
pub fn mentions(lower_query: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|t| lower_query.contains(t))
}

const fn department_rule(name: &'static str, department: Department) -> KeywordRule {
    KeywordRule {
        name,
        triggers: department_triggers(department),
        action: RuleAction::Filter(Predicate::Department(department)),
    }
}

const fn department_triggers(department: Department) -> &'static [&'static str] {
    match department {
        Department::Production => &["production"],
        Department::Engineering => &["engineering"],
        Department::Sales => &["sales"],
        Department::Hr => &["hr"],
        Department::Finance => &["finance"],
        Department::Marketing => &["marketing"],
        Department::Operations => &["operations"],
        Department::It => &["it"],
    }
}

/// The full query language, in evaluation order
pub const QUERY_RULES: &[RuleGroup] = &[
    RuleGroup {
        name: "recency",
        selection: Selection::FirstMatch,
        rules: &[
            KeywordRule {
                name: "last 3 days",
                triggers: LAST_3_DAYS,
                action: RuleAction::Filter(Predicate::LAST_3_DAYS),
            },
            KeywordRule {
                name: "last 7 days",
                triggers: LAST_7_DAYS,
                action: RuleAction::Filter(Predicate::LAST_7_DAYS),
            },
            KeywordRule {
                name: "last 30 days",
                triggers: LAST_30_DAYS,
                action: RuleAction::Filter(Predicate::LAST_30_DAYS),
            },
        ],
    },
    RuleGroup {
        name: "team",
        selection: Selection::FirstMatch,
        rules: &[KeywordRule {
            name: "my team",
            triggers: MY_TEAM,
            action: RuleAction::Filter(Predicate::MyTeam),
        }],
    },
    RuleGroup {
        name: "urgency",
        selection: Selection::FirstMatch,
        rules: &[KeywordRule {
            name: "urgent",
            triggers: URGENT,
            action: RuleAction::Filter(Predicate::URGENT_ONLY),
        }],
    },
    RuleGroup {
        name: "department",
        selection: Selection::FirstMatch,
        rules: &[
            department_rule("production", Department::Production),
            department_rule("engineering", Department::Engineering),
            department_rule("sales", Department::Sales),
            department_rule("hr", Department::Hr),
            department_rule("finance", Department::Finance),
            department_rule("marketing", Department::Marketing),
            department_rule("operations", Department::Operations),
            department_rule("it", Department::It),
        ],
    },
    RuleGroup {
        name: "actions",
        selection: Selection::EveryMatch,
        rules: &[
            KeywordRule {
                name: "new cases",
                triggers: NEW_CASES,
                action: RuleAction::Preview {
                    predicate: Predicate::LAST_7_DAYS,
                    limit: NEW_CASES_PREVIEW,
                },
            },
            KeywordRule {
                name: "pending approvals",
                triggers: APPROVALS,
                action: RuleAction::Preview {
                    predicate: Predicate::NEEDS_APPROVAL,
                    limit: APPROVALS_PREVIEW,
                },
            },
            KeywordRule {
                name: "follow-ups",
                triggers: FOLLOW_UPS,
                action: RuleAction::Preview {
                    predicate: Predicate::FOLLOW_UP_WINDOW,
                    limit: FOLLOW_UPS_PREVIEW,
                },
            },
        ],
    },
];
