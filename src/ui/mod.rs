//! Dashboard front-end: state, panels and terminal rendering

pub mod autocomplete;
pub mod chips;
pub mod display;
pub mod input;
pub mod overview;
pub mod processing;
pub mod results;
pub mod state;

pub use autocomplete::{suggestions, AutocompleteOption, AUTOCOMPLETE_OPTIONS};
pub use chips::{contextual_chips, frequent_actions, Chip, ChipKind, FrequentAction};
pub use input::ReplCommand;
pub use overview::HomeOverview;
pub use processing::{ProcessingKind, ProcessingOutcome, ProcessingTask, Ticket};
pub use results::{ResultsPanel, ResultsView, RiskFilter, SortKey};
pub use state::{update, Action, DashboardState, Effect, Phase, Tab, Transition};
