//! Search-line suggestions

/// A canned query offered while typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutocompleteOption {
    pub text: &'static str,
    pub description: &'static str,
}

const fn option(text: &'static str, description: &'static str) -> AutocompleteOption {
    AutocompleteOption { text, description }
}

pub const AUTOCOMPLETE_OPTIONS: &[AutocompleteOption] = &[
    option("show absent employees last 3 days", "View employees absent in the last 3 days"),
    option("show absent employees last 7 days", "View employees absent in the last week"),
    option("show absent employees last 30 days", "View employees absent in the last month"),
    option("show absent employees my team", "View absences in your direct team"),
    option(
        "show absent employees high risk",
        "Display high-risk absence cases requiring attention",
    ),
    option("show absent employees by department", "Group absence data by department"),
    option("show absent employees production", "View absences in Production department"),
    option("show absent employees engineering", "View absences in Engineering department"),
    option("show absent employees urgent only", "Show only urgent/high-risk cases"),
    option("review new cases", "Cases submitted in the last 7 days"),
    option("pending approvals", "Cases awaiting manager approval"),
    option("follow-ups", "Employees requiring follow-up contact"),
];

/// Options whose text contains `input`, ignoring case
///
/// Empty input suggests nothing. Whitespace is significant: the input is
/// matched as typed.
pub fn suggestions(input: &str) -> Vec<&'static AutocompleteOption> {
    if input.is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    AUTOCOMPLETE_OPTIONS
        .iter()
        .filter(|o| o.text.to_lowercase().contains(&needle))
        .collect()
}
