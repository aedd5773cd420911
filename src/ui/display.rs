//! Plain-terminal rendering of the dashboard
//!
//! Every renderer returns a `String` so the REPL and the query binary share
//! the same layout. Risk levels are coloured with crossterm.

use crate::activity::{
    activity_feed, human_needed, urgent_count, ActivitySummary, DAILY_INSIGHT, MONITORED_CASES,
};
use crate::core::types::RiskLevel;
use crate::roster::EmployeeRecord;
use crate::ui::autocomplete::AutocompleteOption;
use crate::ui::chips::{Chip, ChipVariant, FrequentAction, QUICK_BUTTONS};
use crate::ui::overview::HomeOverview;
use crate::ui::results::{advisories, ResultsPanel, BULK_ACTIONS, DETAIL_ACTIONS};
use crossterm::style::{StyledContent, Stylize};
use std::fmt::Write;

pub fn risk_badge(level: RiskLevel) -> StyledContent<&'static str> {
    match level {
        RiskLevel::High => level.as_str().red().bold(),
        RiskLevel::Medium => level.as_str().yellow(),
        RiskLevel::Low => level.as_str().green(),
    }
}

fn chip_label(label: &str, count: usize, variant: ChipVariant, active: bool) -> String {
    let text = format!("{} ({})", label, count);
    let text = if active { format!("*{}", text) } else { text };
    match variant {
        ChipVariant::Urgent => text.red().to_string(),
        ChipVariant::Filter => text.cyan().to_string(),
        ChipVariant::Default => text,
    }
}

pub fn render_overview(overview: &HomeOverview) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", overview.greeting.as_str().bold());
    let _ = writeln!(out, "{}", overview.subline);
    let _ = writeln!(out);

    for (i, card) in overview.cards.iter().enumerate() {
        let _ = writeln!(out, "{} [{}]", card.title.bold(), card.badge);
        for row in &card.rows {
            let _ = writeln!(out, "  {} - {} ({})", row.name, row.detail, risk_badge(row.risk));
        }
        let _ = writeln!(out, "  -> {} (/card {})", card.button.cyan(), i + 1);
    }
    let _ = writeln!(out);

    for tile in &overview.departments {
        let _ = write!(out, "{}: {} absent", tile.department.name(), tile.absent);
        if tile.high_risk > 0 {
            let _ = write!(out, ", {}", format!("{} high risk", tile.high_risk).red());
        }
        let _ = writeln!(out, " (/dept {})", tile.department.keyword());
    }
    out
}

/// First word of a quick button label, which is also its REPL command
fn quick_command(label: &str) -> String {
    label
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

pub fn render_shortcuts(
    actions: &[FrequentAction],
    chips: &[Chip],
    active_filters: &[String],
) -> String {
    let mut out = String::new();
    let buttons: Vec<String> = QUICK_BUTTONS
        .iter()
        .map(|(label, _)| format!("{} (/{})", label, quick_command(label)))
        .collect();
    let _ = writeln!(out, "Quick: {}", buttons.join(" | "));

    let _ = writeln!(out, "Actions:");
    for (i, action) in actions.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} {}",
            i + 1,
            action.icon,
            chip_label(action.label, action.count, action.variant(), false)
        );
    }

    let _ = writeln!(out, "Chips:");
    for (i, chip) in chips.iter().enumerate() {
        let active = active_filters.iter().any(|f| f == chip.label);
        let _ = writeln!(
            out,
            "  {}. {}",
            i + 1,
            chip_label(chip.label, chip.count, chip.variant(), active)
        );
    }

    if !active_filters.is_empty() {
        let _ = writeln!(out, "Active filters: {}", active_filters.join(", "));
    }
    out
}

pub fn render_suggestions(options: &[&AutocompleteOption], selected: Option<usize>) -> String {
    let mut out = String::new();
    if options.is_empty() {
        let _ = writeln!(out, "No suggestions");
        return out;
    }
    for (i, option) in options.iter().enumerate() {
        let marker = if selected == Some(i) { ">" } else { " " };
        let _ = writeln!(
            out,
            "{} {}. {} - {}",
            marker,
            i + 1,
            option.text,
            option.description.dark_grey()
        );
    }
    out
}

pub fn render_results(panel: &ResultsPanel<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", panel.summary.as_str().bold());
    let _ = writeln!(
        out,
        "{} | high {} | medium {} | low {}",
        panel.showing(),
        panel.breakdown.high,
        panel.breakdown.medium,
        panel.breakdown.low
    );

    if panel.rows.is_empty() {
        let _ = writeln!(out, "No employees found matching your criteria.");
    }
    for employee in &panel.rows {
        let team = if employee.is_my_team { " [team]" } else { "" };
        let _ = writeln!(
            out,
            "  #{:<3} {:<18} {:<12} {:>3} days  {}{}",
            employee.id,
            employee.name,
            employee.department,
            employee.days_absent,
            risk_badge(employee.risk_level),
            team
        );
    }
    let _ = writeln!(out, "Bulk actions: {}", BULK_ACTIONS.join(" | "));
    out
}

pub fn render_detail(employee: &EmployeeRecord, extended_absence_days: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}) - {}",
        employee.name.as_str().bold(),
        employee.department,
        risk_badge(employee.risk_level)
    );
    let _ = writeln!(out, "  Days absent:  {}", employee.days_absent);
    if let Some(reason) = &employee.reason {
        let _ = writeln!(out, "  Reason:       {}", reason);
    }
    let _ = writeln!(out, "  Last contact: {}", employee.last_contact);
    for (label, value) in [
        ("Since:       ", &employee.start_date),
        ("Email:       ", &employee.email),
        ("Manager:     ", &employee.manager),
    ] {
        if !value.is_empty() {
            let _ = writeln!(out, "  {} {}", label, value);
        }
    }
    for note in advisories(employee, extended_absence_days) {
        let _ = writeln!(out, "  ! {}", note.yellow());
    }
    let _ = writeln!(out, "  Actions: {}", DETAIL_ACTIONS.join(" | "));
    out
}

pub fn render_casey_work() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Casey is actively monitoring {} cases", MONITORED_CASES);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "Casey's Recent Work".bold());
    for activity in activity_feed() {
        let _ = writeln!(
            out,
            "  [{}] {} - {} ({})",
            activity.status.as_str().green(),
            activity.action,
            activity.impact,
            activity.timestamp
        );
    }
    let summary = ActivitySummary::default();
    let _ = writeln!(
        out,
        "  {} cases processed | {} messages sent | {} escalations",
        summary.cases_processed, summary.messages_sent, summary.escalations
    );
    let _ = writeln!(out);

    let queue = human_needed();
    let _ = writeln!(
        out,
        "{} ({} urgent)",
        "Needs Your Input".bold(),
        urgent_count(queue)
    );
    for item in queue {
        let _ = writeln!(out, "  [{}] {}", risk_badge(item.priority), item.case);
        let _ = writeln!(out, "      {}", item.reason);
        let _ = writeln!(out, "      -> {}", item.suggested_action);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Casey's Daily Insights".bold());
    let _ = writeln!(out, "  {}", DAILY_INSIGHT);
    out
}
