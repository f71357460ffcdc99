use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use roster_core::{Action, FormField, RosterView, StudentApi, StudentId, ToastId};

use super::CommandResult;
use super::helpers;
use crate::color;
use crate::views;

const HELP: &str = "\
Commands:
  load                  Fetch the student list
  add                   Open the add dialog
  edit <id>             Open the edit dialog for a student
  delete <id>           Ask to delete a student
  set <field> <value>   Fill a form field (name, age, email, city)
  submit                Submit the open add/edit dialog
  cancel                Close the open dialog
  confirm               Confirm the pending delete
  dismiss <toast-id>    Remove a notification
  help                  Show this help
  quit                  Leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Run(Action),
    /// Closes whichever dialog is open.
    Cancel,
    Help,
    Quit,
}

pub(crate) fn handle_shell_command(api_url: Option<&str>) -> CommandResult {
    info!(event = "cli.shell_started");

    let mut view = helpers::build_view(api_url)?;
    let stdin = BufReader::new(tokio::io::stdin());
    helpers::runtime()?.block_on(run_shell(&mut view, stdin))?;

    info!(event = "cli.shell_completed");
    Ok(())
}

/// Read commands until `quit` or end of input, re-rendering after each.
///
/// While waiting for input, an expiring toast also re-renders the view.
/// Failed operations only produce toasts; the loop keeps going.
async fn run_shell<A, R>(view: &mut RosterView<A>, input: R) -> std::io::Result<()>
where
    A: StudentApi,
    R: AsyncBufRead + Unpin,
{
    println!("{HELP}");
    let mut lines = input.lines();

    loop {
        print!("roster> ");
        std::io::stdout().flush()?;

        // `next_line` is cancel safe, so a partial line survives an expiry.
        let line = tokio::select! {
            line = lines.next_line() => line?,
            id = view.next_expired() => {
                debug!(event = "cli.shell.toast_expired", id = %id);
                println!();
                print!("{}", views::render(&view.snapshot()));
                continue;
            }
        };
        let Some(line) = line else {
            break;
        };

        match parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(ShellCommand::Help)) => {
                println!("{HELP}");
                continue;
            }
            Ok(Some(ShellCommand::Cancel)) => {
                let action = if view.state().modal().is_confirm() {
                    Action::CloseConfirm
                } else {
                    Action::CloseModals
                };
                view.dispatch(action).await;
            }
            Ok(Some(ShellCommand::Run(action))) => view.dispatch(action).await,
            Err(message) => {
                warn!(event = "cli.shell.parse_failed", line = %line, error = %message);
                eprintln!("{}", color::error(&message));
                continue;
            }
        }

        print!("{}", views::render(&view.snapshot()));
    }

    Ok(())
}

/// Parse one input line. Blank lines yield `None`.
fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    let command = match word {
        "load" => ShellCommand::Run(Action::Load),
        "add" => ShellCommand::Run(Action::OpenAdd),
        "edit" => ShellCommand::Run(Action::OpenEdit {
            id: required_id(rest, "edit <id>")?,
        }),
        "delete" => ShellCommand::Run(Action::OpenConfirm {
            id: required_id(rest, "delete <id>")?,
        }),
        "set" => {
            let (key, value) = match rest.split_once(char::is_whitespace) {
                Some((key, value)) => (key, value.trim_start()),
                None => (rest, ""),
            };
            if key.is_empty() {
                return Err("Usage: set <field> <value>".to_string());
            }
            let field: FormField = key.parse()?;
            ShellCommand::Run(Action::SetField {
                field,
                value: value.to_string(),
            })
        }
        "submit" => ShellCommand::Run(Action::Submit),
        "cancel" => ShellCommand::Cancel,
        "confirm" => ShellCommand::Run(Action::ConfirmDelete),
        "dismiss" => {
            let id = rest
                .trim_start_matches('#')
                .parse::<u64>()
                .map_err(|_| "Usage: dismiss <toast-id> (a number)".to_string())?;
            ShellCommand::Run(Action::DismissToast {
                id: ToastId::new(id),
            })
        }
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("Unknown command '{other}'. Type 'help' for commands.")),
    };

    Ok(Some(command))
}

fn required_id(rest: &str, usage: &str) -> Result<StudentId, String> {
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        return Err(format!("Usage: {usage}"));
    }
    Ok(StudentId::from(rest))
}
