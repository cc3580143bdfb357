//! Interactive benefit application wizard
//!
//! Prints the current screen with its numbered actions and reads one choice
//! per line. Progress is not saved; quitting or closing stdin ends the run.

use std::io::{self, BufRead, Write};

use crate::audit::AuditLogger;
use crate::config::{paths::DogwoodPaths, settings::Settings};
use crate::display::wizard::{action_label, format_wizard_screen};
use crate::error::DogwoodResult;
use crate::models::{BenefitStep, WizardAction};
use crate::services::WizardSession;

/// A line of user input, interpreted against the offered actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardChoice {
    Action(WizardAction),
    Quit,
    Invalid,
}

/// Interpret a line of input
///
/// Accepts the number shown next to an action, or a keyword: `next`, `back`,
/// `submit`, `restart`, `edit <step>` (first letters work too), and `quit`.
/// Anything not currently offered is `Invalid`.
pub fn parse_choice(input: &str, offered: &[WizardAction]) -> WizardChoice {
    let input = input.trim().to_lowercase();
    let mut words = input.split_whitespace();

    let action = match (words.next(), words.next()) {
        (Some("q" | "quit" | "exit"), None) => return WizardChoice::Quit,
        (Some(word), None) if word.chars().all(|c| c.is_ascii_digit()) => word
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| offered.get(i).copied()),
        (Some("n" | "next"), None) => Some(WizardAction::Next),
        (Some("b" | "back" | "previous"), None) => Some(WizardAction::Back),
        (Some("s" | "submit"), None) => Some(WizardAction::Submit),
        (Some("r" | "restart"), None) => Some(WizardAction::Restart),
        (Some("e" | "edit"), Some(step)) => step.parse().ok().map(WizardAction::Edit),
        _ => None,
    };

    match action {
        Some(action) if offered.contains(&action) => WizardChoice::Action(action),
        _ => WizardChoice::Invalid,
    }
}

/// Drive a session from `input`, writing screens to `output`
pub fn run_wizard<R: BufRead, W: Write>(
    session: &mut WizardSession,
    mut input: R,
    mut output: W,
) -> DogwoodResult<()> {
    writeln!(output, "Benefit Application (session {})", session.id())?;

    loop {
        writeln!(output)?;
        write!(
            output,
            "{}",
            format_wizard_screen(session.controller(), session.confirmation())
        )?;

        let offered = session.controller().available_actions();
        writeln!(output)?;
        for (i, action) in offered.iter().enumerate() {
            writeln!(output, "  {}) {}", i + 1, action_label::<BenefitStep>(action))?;
        }
        writeln!(output, "  q) Quit")?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match parse_choice(&line, &offered) {
            WizardChoice::Action(action) => {
                session.apply(action)?;
            }
            WizardChoice::Quit => {
                if !session.controller().is_complete() {
                    writeln!(output, "Application not submitted; progress discarded.")?;
                }
                return Ok(());
            }
            WizardChoice::Invalid => {
                writeln!(output, "Please choose one of the listed options.")?;
            }
        }
    }
}

/// Handle `dogwood wizard`
pub fn handle_wizard_command(paths: &DogwoodPaths, settings: &Settings) -> DogwoodResult<()> {
    let logger = if settings.audit_enabled {
        paths.ensure_directories()?;
        Some(AuditLogger::new(paths.audit_log()))
    } else {
        None
    };

    let mut session: WizardSession = WizardSession::start(logger)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_wizard(&mut session, stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use WizardAction::*;

    #[test]
    fn test_parse_by_number() {
        let offered = [Back, Next];
        assert_eq!(parse_choice("2\n", &offered), WizardChoice::Action(Next));
        assert_eq!(parse_choice("0", &offered), WizardChoice::Invalid);
        assert_eq!(parse_choice("3", &offered), WizardChoice::Invalid);
    }

    #[test]
    fn test_parse_keywords() {
        let offered = [Back, Edit(1), Edit(2), Edit(3), Submit];
        assert_eq!(parse_choice("Edit 2", &offered), WizardChoice::Action(Edit(2)));
        assert_eq!(parse_choice("s", &offered), WizardChoice::Action(Submit));
        assert_eq!(parse_choice("next", &offered), WizardChoice::Invalid);
        assert_eq!(parse_choice("e 4", &offered), WizardChoice::Invalid);
        assert_eq!(parse_choice(" quit ", &offered), WizardChoice::Quit);
    }

    #[test]
    fn test_run_to_confirmation() {
        let mut session: WizardSession = WizardSession::start(None).unwrap();
        let input = "next\nnext\nnext\nedit 1\nn\nn\nn\nsubmit\nq\n";
        let mut output = Vec::new();

        run_wizard(&mut session, input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(session.current(), BenefitStep::Confirmation);
        assert!(text.contains("Confirmation Number: VA-"));
        assert!(text.contains("Start New Application"));
        assert!(!text.contains("progress discarded"));
    }

    #[test]
    fn test_eof_ends_run() {
        let mut session: WizardSession = WizardSession::start(None).unwrap();
        let mut output = Vec::new();

        run_wizard(&mut session, "n\nbogus\n".as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(session.controller().current_step(), 2);
        assert!(text.contains("Please choose one of the listed options."));
    }
}
