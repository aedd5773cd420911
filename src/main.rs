//! Casey - Entry Point
//!
//! Terminal version of the absence dashboard. Free text is handed to the
//! query processor; slash commands drive chips, the results view and tabs.
//! Ctrl-C while Casey is thinking cancels the pending query; at the prompt it
//! exits like `/quit`.

use casey::core::config::{self, CaseyConfig};
use casey::core::error::Result;
use casey::roster::Roster;
use casey::ui::chips::{contextual_chips, frequent_actions, QUICK_BUTTONS};
use casey::ui::display::{
    render_casey_work, render_detail, render_overview, render_results, render_shortcuts,
    render_suggestions,
};
use casey::ui::input::{read_prompt, Prompt, ReplCommand, HELP};
use casey::ui::overview::HomeOverview;
use casey::ui::processing::{ProcessingOutcome, ProcessingTask};
use casey::ui::results::ResultsPanel;
use casey::ui::state::{update, Action, DashboardState, Effect, Tab};

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

/// Casey - absence management assistant
#[derive(Parser, Debug)]
#[command(name = "casey")]
#[command(about = "Ask Casey about employee absences from the terminal")]
struct Args {
    /// Config file (TOML); falls back to $CASEY_CONFIG, then defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Roster file (TOML); overrides roster_path from the config
    #[arg(long)]
    roster: Option<PathBuf>,
}

/// Owns the pending processing pause and applies reducer effects
struct Driver {
    rt: Runtime,
    state: DashboardState,
    pending: Option<ProcessingTask>,
    stdin: Lines<BufReader<Stdin>>,
}

impl Driver {
    fn dispatch(&mut self, action: Action) {
        let transition = update(&self.state, action);
        self.state = transition.state;
        for effect in transition.effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::StartProcessing { ticket, kind } => {
                if let Some(previous) = self.pending.take() {
                    previous.cancel();
                }
                let _guard = self.rt.enter();
                let delay = kind.delay(config::config());
                self.pending = Some(ProcessingTask::spawn(ticket, delay));
            }
            Effect::CancelProcessing { ticket } => {
                if let Some(task) = self.pending.take() {
                    if task.ticket() == ticket {
                        task.cancel();
                    } else {
                        self.pending = Some(task);
                    }
                }
            }
        }
    }

    /// Next prompt line, or `Interrupted` on Ctrl-C
    fn prompt(&mut self) -> Result<Prompt> {
        let stdin = &mut self.stdin;
        self.rt
            .block_on(read_prompt(stdin, tokio::signal::ctrl_c()))
            .map_err(Into::into)
    }

    /// Block until the pending pause ends or Ctrl-C cancels it
    fn settle(&mut self) {
        let Some(task) = self.pending.take() else {
            return;
        };
        println!("Casey is thinking... (Ctrl-C to cancel)");
        let outcome = self.rt.block_on(wait_or_interrupt(task));
        match outcome {
            ProcessingOutcome::Completed(ticket) => self.dispatch(Action::ProcessingFinished(ticket)),
            ProcessingOutcome::Cancelled(_) => {
                println!("Cancelled.");
                self.dispatch(Action::CancelProcessing);
            }
        }
    }
}

async fn wait_or_interrupt(task: ProcessingTask) -> ProcessingOutcome {
    let ticket = task.ticket();
    let abort = task.abort_handle();
    tokio::select! {
        outcome = task.wait() => outcome,
        _ = tokio::signal::ctrl_c() => {
            abort.abort();
            ProcessingOutcome::Cancelled(ticket)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let cfg = CaseyConfig::resolve(args.config.as_deref())?;
    init_tracing(&cfg.log_filter);
    tracing::info!("Casey starting...");

    let roster_path = args.roster.or_else(|| cfg.roster_path.clone());
    if config::set_config(cfg).is_err() {
        tracing::warn!("Config was already initialised; keeping the existing one");
    }
    let roster = Roster::from_path_or_sample(roster_path.as_deref())?;
    tracing::info!("Roster has {} employees", roster.len());

    let mut driver = Driver {
        rt: Runtime::new()?,
        state: DashboardState::new(),
        pending: None,
        stdin: BufReader::new(tokio::io::stdin()).lines(),
    };

    println!("\n=== CASEY ===");
    println!("Absence management assistant. Type /help for commands.");
    println!();
    render(&driver.state, &roster);

    loop {
        print!("> ");
        io::stdout().flush()?;

        let line = match driver.prompt()? {
            Prompt::Line(line) => line,
            Prompt::Eof => break,
            Prompt::Interrupted => {
                println!();
                break;
            }
        };

        let command = match ReplCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            ReplCommand::Quit => break,
            ReplCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            ReplCommand::Suggest(text) => {
                driver.dispatch(Action::EditInput(text));
                print!(
                    "{}",
                    render_suggestions(
                        &driver.state.visible_suggestions(),
                        driver.state.autocomplete.selected
                    )
                );
                continue;
            }
            ReplCommand::Pick(index) => {
                if index >= driver.state.visible_suggestions().len() {
                    println!("No suggestion {}. Use /suggest TEXT first.", index + 1);
                    continue;
                }
                driver.dispatch(Action::AutocompleteAccept(index));
                driver.dispatch(Action::Submit);
            }
            ReplCommand::Query(text) => {
                driver.dispatch(Action::EditInput(text));
                driver.dispatch(Action::Submit);
            }
            ReplCommand::Chip(index) => match contextual_chips(&roster).into_iter().nth(index) {
                Some(chip) => driver.dispatch(Action::ChipClicked(chip)),
                None => {
                    println!("No chip {}", index + 1);
                    continue;
                }
            },
            ReplCommand::FrequentAction(index) => {
                match frequent_actions(&roster).into_iter().nth(index) {
                    Some(action) => driver.dispatch(Action::QuickAction(action.query.to_string())),
                    None => {
                        println!("No action {}", index + 1);
                        continue;
                    }
                }
            }
            ReplCommand::QuickButton(index) => match QUICK_BUTTONS.get(index) {
                Some((_, query)) => driver.dispatch(Action::QuickAction(query.to_string())),
                None => continue,
            },
            ReplCommand::Card(index) => {
                let overview = HomeOverview::build(&roster, config::config());
                match overview.cards.get(index) {
                    Some(card) => driver.dispatch(Action::QuickAction(card.query.to_string())),
                    None => {
                        println!("No card {}", index + 1);
                        continue;
                    }
                }
            }
            ReplCommand::Department(name) => {
                let overview = HomeOverview::build(&roster, config::config());
                match overview.tile(&name) {
                    Some(tile) => driver.dispatch(Action::QuickAction(tile.query.clone())),
                    None => {
                        println!("No department tile for '{}'", name);
                        continue;
                    }
                }
            }
            ReplCommand::Tab(tab) => driver.dispatch(Action::SelectTab(tab)),
            ReplCommand::Sort(key) => driver.dispatch(Action::SetSort(key)),
            ReplCommand::Risk(filter) => driver.dispatch(Action::SetRiskFilter(filter)),
            ReplCommand::Open(id) => {
                if !driver.state.shows_results() {
                    println!("Run a query first.");
                    continue;
                }
                driver.dispatch(Action::SelectEmployee(id));
            }
            ReplCommand::Back => driver.dispatch(Action::DeselectEmployee),
            ReplCommand::Close => driver.dispatch(Action::CloseResults),
            ReplCommand::ClearFilters => driver.dispatch(Action::ClearFilters),
        }

        driver.settle();
        render(&driver.state, &roster);
    }

    println!("\nGoodbye!");
    // A stdin read may still be parked on the blocking pool after Ctrl-C
    driver.rt.shutdown_background();
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Print whatever the dashboard currently shows
fn render(state: &DashboardState, roster: &Roster) {
    let cfg = config::config();
    println!();

    if state.shows_results() {
        let panel = ResultsPanel::build(roster, &state.current_query, &state.view);
        print!("{}", render_results(&panel));
        match (&state.view.selected, panel.selected) {
            (_, Some(employee)) => {
                println!();
                print!("{}", render_detail(employee, cfg.extended_absence_days));
            }
            (Some(id), None) => println!("Employee {} is not in these results.", id),
            (None, None) => {}
        }
        println!("(/close to return, /sort KEY, /risk LEVEL, /open ID)");
        return;
    }

    match state.tab {
        Tab::CaseyWork => print!("{}", render_casey_work()),
        Tab::Home => {
            if state.shows_overview() {
                print!("{}", render_overview(&HomeOverview::build(roster, cfg)));
                println!();
            } else if !state.input.is_empty() {
                println!("Search: {}", state.input);
            }
            print!(
                "{}",
                render_shortcuts(
                    &frequent_actions(roster),
                    &contextual_chips(roster),
                    &state.active_filters
                )
            );
        }
    }
}
