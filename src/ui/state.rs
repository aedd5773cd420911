//! Dashboard state and its update function
//!
//! `update` is pure: it takes the current state and one action and returns
//! the next state plus the side effects the driver has to run. The only side
//! effect is the processing pause, so the driver owns every timer.

use crate::core::types::EmployeeId;
use crate::ui::autocomplete::{suggestions, AutocompleteOption};
use crate::ui::chips::Chip;
use crate::ui::processing::{ProcessingKind, Ticket};
use crate::ui::results::{ResultsView, RiskFilter, SortKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    CaseyWork,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Processing {
        ticket: Ticket,
        kind: ProcessingKind,
    },
    ShowingResults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutocompleteState {
    pub visible: bool,
    pub selected: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    pub tab: Tab,
    /// Text in the search line
    pub input: String,
    /// Query whose results are pending or shown
    pub current_query: String,
    pub phase: Phase,
    /// Labels of chips combined into the search line
    pub active_filters: Vec<String>,
    pub autocomplete: AutocompleteState,
    pub view: ResultsView,
    next_ticket: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.phase, Phase::Processing { .. })
    }

    pub fn pending_ticket(&self) -> Option<Ticket> {
        match self.phase {
            Phase::Processing { ticket, .. } => Some(ticket),
            _ => None,
        }
    }

    pub fn shows_results(&self) -> bool {
        self.phase == Phase::ShowingResults
    }

    /// Home cards are shown while nothing is typed and nothing is pending
    pub fn shows_overview(&self) -> bool {
        !self.is_processing() && self.input.is_empty()
    }

    /// Suggestions currently on screen
    pub fn visible_suggestions(&self) -> Vec<&'static AutocompleteOption> {
        if self.autocomplete.visible {
            suggestions(&self.input)
        } else {
            Vec::new()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectTab(Tab),
    EditInput(String),
    Submit,
    QuickAction(String),
    ChipClicked(Chip),
    AutocompleteNext,
    AutocompletePrevious,
    AutocompleteDismiss,
    AutocompleteAccept(usize),
    ProcessingFinished(Ticket),
    CancelProcessing,
    CloseResults,
    ClearFilters,
    SetSort(SortKey),
    SetRiskFilter(RiskFilter),
    SelectEmployee(EmployeeId),
    DeselectEmployee,
}

/// Work the driver performs after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    StartProcessing { ticket: Ticket, kind: ProcessingKind },
    CancelProcessing { ticket: Ticket },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: DashboardState,
    pub effects: Vec<Effect>,
}

pub fn update(state: &DashboardState, action: Action) -> Transition {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match action {
        Action::SelectTab(tab) => next.tab = tab,

        Action::EditInput(text) => {
            next.autocomplete = AutocompleteState {
                visible: !suggestions(&text).is_empty(),
                selected: None,
            };
            next.input = text;
        }

        Action::Submit => {
            let highlighted = next
                .autocomplete
                .selected
                .and_then(|i| next.visible_suggestions().get(i).copied());
            if let Some(option) = highlighted {
                next.input = option.text.to_string();
                next.autocomplete = AutocompleteState::default();
            } else {
                let query = next.input.trim().to_string();
                if !query.is_empty() {
                    start_processing(&mut next, query, ProcessingKind::Submit, &mut effects);
                }
            }
        }

        Action::QuickAction(query) => {
            start_processing(&mut next, query, ProcessingKind::QuickAction, &mut effects);
        }

        Action::ChipClicked(chip) => match chip.query {
            Some(query) => {
                start_processing(
                    &mut next,
                    query.to_string(),
                    ProcessingKind::QuickAction,
                    &mut effects,
                );
            }
            None => {
                next.input = if next.input.trim().is_empty() {
                    format!("show absent employees {}", chip.label)
                } else {
                    format!("{} {}", next.input, chip.label)
                };
                if let Some(pos) = next.active_filters.iter().position(|f| f == chip.label) {
                    next.active_filters.remove(pos);
                } else {
                    next.active_filters.push(chip.label.to_string());
                }
            }
        },

        Action::AutocompleteNext => {
            let count = next.visible_suggestions().len();
            if count > 0 {
                next.autocomplete.selected = Some(match next.autocomplete.selected {
                    Some(i) => (i + 1).min(count - 1),
                    None => 0,
                });
            }
        }

        Action::AutocompletePrevious => {
            next.autocomplete.selected = match next.autocomplete.selected {
                Some(i) if i > 0 => Some(i - 1),
                _ => None,
            };
        }

        Action::AutocompleteDismiss => next.autocomplete = AutocompleteState::default(),

        Action::AutocompleteAccept(index) => {
            if let Some(option) = next.visible_suggestions().get(index).copied() {
                next.input = option.text.to_string();
                next.autocomplete = AutocompleteState::default();
            }
        }

        Action::ProcessingFinished(ticket) => {
            if next.pending_ticket() == Some(ticket) {
                next.phase = Phase::ShowingResults;
                next.view.selected = None;
            } else {
                tracing::debug!("Ignoring stale processing ticket {}", ticket);
            }
        }

        Action::CancelProcessing => {
            if let Some(ticket) = next.pending_ticket() {
                effects.push(Effect::CancelProcessing { ticket });
                next.phase = Phase::Idle;
            }
        }

        Action::CloseResults => {
            if let Some(ticket) = next.pending_ticket() {
                effects.push(Effect::CancelProcessing { ticket });
            }
            next.phase = Phase::Idle;
            next.input.clear();
            next.current_query.clear();
            next.active_filters.clear();
            next.autocomplete = AutocompleteState::default();
            next.view.selected = None;
        }

        Action::ClearFilters => next.active_filters.clear(),
        Action::SetSort(sort) => next.view.sort = sort,
        Action::SetRiskFilter(filter) => next.view.risk_filter = filter,
        Action::SelectEmployee(id) => next.view.selected = Some(id),
        Action::DeselectEmployee => next.view.selected = None,
    }

    Transition {
        state: next,
        effects,
    }
}

fn start_processing(
    state: &mut DashboardState,
    query: String,
    kind: ProcessingKind,
    effects: &mut Vec<Effect>,
) {
    if let Some(previous) = state.pending_ticket() {
        effects.push(Effect::CancelProcessing { ticket: previous });
    }
    let ticket = Ticket(state.next_ticket);
    state.next_ticket += 1;
    state.phase = Phase::Processing { ticket, kind };
    state.current_query = query;
    state.autocomplete = AutocompleteState::default();
    effects.push(Effect::StartProcessing { ticket, kind });
}
