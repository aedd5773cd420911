//! Query pipeline
//!
//! Free text -> keyword rule table -> QueryPlan -> filtered roster -> summary.
//! Everything here is synchronous and free of shared state.

pub mod predicates;
pub mod processor;
pub mod rules;
pub mod summary;

pub use predicates::Predicate;
pub use processor::{plan_query, process_query, QueryPlan};
pub use rules::{KeywordRule, RuleAction, RuleGroup, Selection, QUERY_RULES};
pub use summary::{query_summary, summary_template, SummaryTemplate};
