//! REPL line parsing
//!
//! Anything not starting with `/` is a free-text query. Slash commands map to
//! dashboard actions; numbered arguments are 1-based as printed on screen.

use crate::core::error::{CaseyError, Result};
use crate::core::types::EmployeeId;
use crate::ui::chips::quick_button;
use crate::ui::results::{RiskFilter, SortKey};
use crate::ui::state::Tab;
use std::future::Future;
use tokio::io::{AsyncBufRead, Lines};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Query(String),
    Chip(usize),
    FrequentAction(usize),
    /// Index into `QUICK_BUTTONS`
    QuickButton(usize),
    /// Home overview card button
    Card(usize),
    /// Home overview department tile, by name
    Department(String),
    Tab(Tab),
    Sort(SortKey),
    Risk(RiskFilter),
    Open(EmployeeId),
    Back,
    Close,
    ClearFilters,
    Suggest(String),
    Pick(usize),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  <any text>       - Ask Casey (e.g. \"show absent employees my team\")
  /chip N          - Run contextual chip N
  /action N        - Run frequent action N
  /report          - Generate absence report
  /urgent          - Show urgent cases
  /card N          - Open home card N (1 high priority, 2 recent, 3 my team)
  /dept NAME       - Open a department tile (production, engineering, sales)
  /tab home|casey  - Switch tab
  /sort KEY        - Sort results by name, days, risk or department
  /risk LEVEL      - Show all, high, medium or low risk results
  /open ID         - Show details for an employee
  /back            - Close the employee details
  /close           - Close results and clear the search line
  /clear           - Clear active filters
  /suggest TEXT    - List suggestions for TEXT
  /pick N          - Use suggestion N
  /help            - Show this help
  /quit            - Exit (Ctrl-C or EOF at the prompt also exits)
Ctrl-C while Casey is thinking cancels the query and keeps the session.";

impl ReplCommand {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let Some(rest) = line.strip_prefix('/') else {
            return Ok(Some(ReplCommand::Query(line.to_string())));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        let command = match name.to_lowercase().as_str() {
            "chip" => ReplCommand::Chip(position(name, arg)?),
            "action" => ReplCommand::FrequentAction(position(name, arg)?),
            "report" | "urgent" => match quick_button(name) {
                Some(index) => ReplCommand::QuickButton(index),
                None => return Err(CaseyError::UnknownCommand(format!("/{}", name))),
            },
            "card" => ReplCommand::Card(position(name, arg)?),
            "dept" | "department" => {
                if arg.is_empty() {
                    return Err(usage("dept", "NAME"));
                }
                ReplCommand::Department(arg.to_lowercase())
            }
            "tab" => ReplCommand::Tab(match arg.to_lowercase().as_str() {
                "home" => Tab::Home,
                "casey" | "work" => Tab::CaseyWork,
                _ => return Err(usage("tab", "home|casey")),
            }),
            "sort" => ReplCommand::Sort(arg.parse().map_err(CaseyError::UnknownCommand)?),
            "risk" => ReplCommand::Risk(arg.parse().map_err(CaseyError::UnknownCommand)?),
            "open" => {
                if arg.is_empty() {
                    return Err(usage("open", "ID"));
                }
                ReplCommand::Open(EmployeeId::new(arg))
            }
            "back" => ReplCommand::Back,
            "close" => ReplCommand::Close,
            "clear" => ReplCommand::ClearFilters,
            "suggest" => ReplCommand::Suggest(arg.to_string()),
            "pick" => ReplCommand::Pick(position(name, arg)?),
            "help" | "h" => ReplCommand::Help,
            "quit" | "q" | "exit" => ReplCommand::Quit,
            _ => return Err(CaseyError::UnknownCommand(format!("/{}", name))),
        };
        Ok(Some(command))
    }
}

/// 1-based position argument converted to a 0-based index
fn position(command: &str, arg: &str) -> Result<usize> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(usage(command, "N")),
    }
}

fn usage(command: &str, args: &str) -> CaseyError {
    CaseyError::UnknownCommand(format!("usage: /{} {}", command, args))
}

/// What the prompt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Line(String),
    Eof,
    Interrupted,
}

/// Wait for the next input line unless `interrupt` resolves first
///
/// `Lines::next_line` is cancel safe, so a line typed after an interrupt is
/// not lost if the reader is used again.
pub async fn read_prompt<R, F>(lines: &mut Lines<R>, interrupt: F) -> std::io::Result<Prompt>
where
    R: AsyncBufRead + Unpin,
    F: Future,
{
    tokio::select! {
        line = lines.next_line() => Ok(line?.map_or(Prompt::Eof, Prompt::Line)),
        _ = interrupt => Ok(Prompt::Interrupted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ReplCommand {
        ReplCommand::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_free_text_is_query() {
        assert_eq!(
            parse("  show absent employees my team "),
            ReplCommand::Query("show absent employees my team".into())
        );
        assert!(ReplCommand::parse("   ").unwrap().is_none());
    }

    #[test]
    fn test_positions_are_one_based() {
        assert_eq!(parse("/chip 1"), ReplCommand::Chip(0));
        assert_eq!(parse("/action 4"), ReplCommand::FrequentAction(3));
        assert_eq!(parse("/pick 2"), ReplCommand::Pick(1));
        assert!(ReplCommand::parse("/chip 0").is_err());
        assert!(ReplCommand::parse("/chip").is_err());
    }

    #[test]
    fn test_overview_commands() {
        assert_eq!(parse("/card 2"), ReplCommand::Card(1));
        assert!(ReplCommand::parse("/card").is_err());
        assert_eq!(
            parse("/dept Sales"),
            ReplCommand::Department("sales".into())
        );
        assert!(ReplCommand::parse("/dept").is_err());
    }

    #[test]
    fn test_quick_buttons_resolve_by_label() {
        use crate::ui::chips::{QUICK_BUTTONS, REPORT_QUERY, URGENT_QUERY};

        let ReplCommand::QuickButton(report) = parse("/report") else {
            panic!("expected a quick button");
        };
        assert_eq!(QUICK_BUTTONS[report].1, REPORT_QUERY);
        let ReplCommand::QuickButton(urgent) = parse("/URGENT") else {
            panic!("expected a quick button");
        };
        assert_eq!(QUICK_BUTTONS[urgent].1, URGENT_QUERY);
    }

    #[test]
    fn test_help_mentions_ctrl_c_at_prompt() {
        assert!(HELP.contains("Ctrl-C or EOF at the prompt also exits"));
    }

    #[tokio::test]
    async fn test_prompt_reads_lines_then_eof() {
        use tokio::io::AsyncBufReadExt;

        let mut lines = tokio::io::BufReader::new(&b"/card 1\n"[..]).lines();
        let first = read_prompt(&mut lines, std::future::pending::<()>()).await.unwrap();
        assert_eq!(first, Prompt::Line("/card 1".into()));
        let second = read_prompt(&mut lines, std::future::pending::<()>()).await.unwrap();
        assert_eq!(second, Prompt::Eof);
    }

    #[tokio::test]
    async fn test_interrupt_wins_over_idle_prompt() {
        use tokio::io::{AsyncBufReadExt, AsyncWriteExt};

        let (reader, mut writer) = tokio::io::duplex(64);
        let mut lines = tokio::io::BufReader::new(reader).lines();
        let outcome = read_prompt(&mut lines, std::future::ready(())).await.unwrap();
        assert_eq!(outcome, Prompt::Interrupted);

        writer.write_all(b"/quit\n").await.unwrap();
        let next = read_prompt(&mut lines, std::future::pending::<()>()).await.unwrap();
        assert_eq!(next, Prompt::Line("/quit".into()));
    }

    #[test]
    fn test_view_commands() {
        assert_eq!(parse("/sort risk"), ReplCommand::Sort(SortKey::RiskLevel));
        assert_eq!(parse("/risk high"), ReplCommand::Risk(RiskFilter::High));
        assert_eq!(parse("/tab casey"), ReplCommand::Tab(Tab::CaseyWork));
        assert_eq!(parse("/open 14"), ReplCommand::Open(EmployeeId::from("14")));
        assert_eq!(parse("/Quit"), ReplCommand::Quit);
    }

    #[test]
    fn test_unknown_command_errors() {
        let err = ReplCommand::parse("/frobnicate").unwrap_err();
        assert!(matches!(err, CaseyError::UnknownCommand(ref c) if c == "/frobnicate"));
        assert!(ReplCommand::parse("/sort age").is_err());
        assert!(ReplCommand::parse("/tab elsewhere").is_err());
        assert!(ReplCommand::parse("/open").is_err());
    }

    #[test]
    fn test_suggest_keeps_argument() {
        assert_eq!(parse("/suggest last 7"), ReplCommand::Suggest("last 7".into()));
    }
}
