//! One-line summaries of processed queries
//!
//! Reuses the trigger phrases from `query::rules` in the same precedence so
//! the header shown above a result list agrees with how it was filtered.

use crate::query::rules::{
    mentions, APPROVALS, FOLLOW_UPS, LAST_30_DAYS, LAST_3_DAYS, LAST_7_DAYS, MY_TEAM, NEW_CASES,
    REPORT, URGENT,
};
use crate::roster::EmployeeRecord;

/// Sentence shape chosen for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryTemplate {
    AbsentWithin(u32),
    TeamMembers,
    HighRiskCases,
    NewCases,
    PendingApprovals,
    FollowUps,
    Report,
    Generic,
}

const SUMMARY_RULES: &[(&[&str], SummaryTemplate)] = &[
    (LAST_3_DAYS, SummaryTemplate::AbsentWithin(3)),
    (LAST_7_DAYS, SummaryTemplate::AbsentWithin(7)),
    (LAST_30_DAYS, SummaryTemplate::AbsentWithin(30)),
    (MY_TEAM, SummaryTemplate::TeamMembers),
    (URGENT, SummaryTemplate::HighRiskCases),
    (NEW_CASES, SummaryTemplate::NewCases),
    (APPROVALS, SummaryTemplate::PendingApprovals),
    (FOLLOW_UPS, SummaryTemplate::FollowUps),
    (REPORT, SummaryTemplate::Report),
];

/// Pick the template for a query; first matching trigger wins
pub fn summary_template(query: &str) -> SummaryTemplate {
    let lower_query = query.to_lowercase();
    SUMMARY_RULES
        .iter()
        .find(|(triggers, _)| mentions(&lower_query, triggers))
        .map(|(_, template)| *template)
        .unwrap_or(SummaryTemplate::Generic)
}

/// Describe `results`, the list `query` produced
pub fn query_summary(query: &str, results: &[&EmployeeRecord]) -> String {
    let count = results.len();
    let high_risk = results.iter().filter(|e| e.is_high_risk()).count();

    match summary_template(query) {
        SummaryTemplate::AbsentWithin(days) => format!(
            "Found {} employees absent in the last {} days{}",
            count,
            days,
            high_risk_suffix(high_risk)
        ),
        SummaryTemplate::TeamMembers => format!(
            "Found {} team members with absences{}",
            count,
            high_risk_suffix(high_risk)
        ),
        SummaryTemplate::HighRiskCases => format!(
            "Found {} high-risk absence cases requiring immediate attention",
            count
        ),
        SummaryTemplate::NewCases => format!("{} new absence cases submitted for review", count),
        SummaryTemplate::PendingApprovals => {
            format!("{} absence cases pending manager approval", count)
        }
        SummaryTemplate::FollowUps => format!("{} employees requiring follow-up contact", count),
        SummaryTemplate::Report => format!("Absence management report - {} total cases", count),
        SummaryTemplate::Generic => format!("Found {} results for \"{}\"", count, query),
    }
}

fn high_risk_suffix(high_risk: usize) -> String {
    if high_risk > 0 {
        format!(", {} high-risk", high_risk)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RiskLevel;

    fn sample(levels: &[RiskLevel]) -> Vec<EmployeeRecord> {
        levels
            .iter()
            .enumerate()
            .map(|(i, level)| EmployeeRecord::new(i.to_string(), "E", "Sales", 1, *level))
            .collect()
    }

    #[test]
    fn test_recency_summary_with_and_without_high_risk() {
        let calm = sample(&[RiskLevel::Low, RiskLevel::Medium]);
        let calm_refs: Vec<&EmployeeRecord> = calm.iter().collect();
        assert_eq!(
            query_summary("show absent employees last 7 days", &calm_refs),
            "Found 2 employees absent in the last 7 days"
        );

        let risky = sample(&[RiskLevel::High, RiskLevel::Low, RiskLevel::High]);
        let risky_refs: Vec<&EmployeeRecord> = risky.iter().collect();
        assert_eq!(
            query_summary("show absent employees last 7 days", &risky_refs),
            "Found 3 employees absent in the last 7 days, 2 high-risk"
        );
    }

    #[test]
    fn test_template_precedence() {
        assert_eq!(
            summary_template("my team last 30 days"),
            SummaryTemplate::AbsentWithin(30)
        );
        assert_eq!(summary_template("urgent on my team"), SummaryTemplate::TeamMembers);
        assert_eq!(
            summary_template("urgent new cases"),
            SummaryTemplate::HighRiskCases
        );
        assert_eq!(summary_template("approvals follow-ups"), SummaryTemplate::PendingApprovals);
        assert_eq!(summary_template("generate absence report"), SummaryTemplate::Report);
        assert_eq!(summary_template("production"), SummaryTemplate::Generic);
    }

    #[test]
    fn test_generic_summary_quotes_query_as_typed() {
        let summary = query_summary("Who Is Out?", &[]);
        assert_eq!(summary, "Found 0 results for \"Who Is Out?\"");
    }

    #[test]
    fn test_action_summaries() {
        let records = sample(&[RiskLevel::Medium; 4]);
        let refs: Vec<&EmployeeRecord> = records.iter().collect();
        assert_eq!(
            query_summary("review new cases", &refs),
            "4 new absence cases submitted for review"
        );
        assert_eq!(
            query_summary("pending approvals", &refs),
            "4 absence cases pending manager approval"
        );
        assert_eq!(
            query_summary("follow-ups", &refs),
            "4 employees requiring follow-up contact"
        );
        assert_eq!(
            query_summary("high risk", &refs),
            "Found 4 high-risk absence cases requiring immediate attention"
        );
    }
}
