//! Query processing - free text to a filtered slice of the roster
//!
//! Query text -> plan_query -> QueryPlan -> execute(roster) -> Vec<&EmployeeRecord>

use crate::query::rules::{KeywordRule, RuleAction, Selection, QUERY_RULES};
use crate::roster::{EmployeeRecord, Roster};

/// The rules a query triggered, in the order they will be applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPlan {
    pub steps: Vec<&'static KeywordRule>,
}

impl QueryPlan {
    /// True when no keyword matched and the full roster will be returned
    pub fn is_unfiltered(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|r| r.name).collect()
    }

    /// Run the plan against the full roster
    pub fn execute<'a>(&self, roster: &'a Roster) -> Vec<&'a EmployeeRecord> {
        let mut results = roster.refs();

        for rule in &self.steps {
            results = match rule.action {
                RuleAction::Filter(predicate) => predicate.apply(results),
                RuleAction::Preview { predicate, limit } => {
                    let mut kept = predicate.apply(results);
                    kept.truncate(limit);
                    kept
                }
            };
        }

        results
    }
}

/// Resolve the rule table against a query
pub fn plan_query(query: &str) -> QueryPlan {
    let lower_query = query.to_lowercase();
    let mut steps = Vec::new();

    for group in QUERY_RULES {
        let mut fired = group.rules.iter().filter(|r| r.is_triggered_by(&lower_query));
        match group.selection {
            Selection::FirstMatch => steps.extend(fired.next()),
            Selection::EveryMatch => steps.extend(fired),
        }
    }

    QueryPlan { steps }
}

/// Filter the roster by the keywords in `query`
///
/// Total over all inputs: a query with no recognised keyword returns the
/// whole roster in original order.
pub fn process_query<'a>(roster: &'a Roster, query: &str) -> Vec<&'a EmployeeRecord> {
    let plan = plan_query(query);
    let results = plan.execute(roster);

    tracing::debug!(
        query,
        steps = ?plan.step_names(),
        matched = results.len(),
        "processed query"
    );

    results
}
