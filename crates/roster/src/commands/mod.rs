use clap::ArgMatches;
use tracing::{error, info};

mod add;
mod completions;
mod delete;
mod edit;
mod helpers;
mod list;
mod shell;

pub(crate) type CommandResult = Result<(), Box<dyn std::error::Error>>;

pub fn run_command(matches: &ArgMatches) -> CommandResult {
    info!(
        event = "cli.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );

    let api_url = matches.get_one::<String>("api-url").map(String::as_str);

    match matches.subcommand() {
        Some(("list", _)) => list::handle_list_command(api_url),
        Some(("add", sub_matches)) => add::handle_add_command(sub_matches, api_url),
        Some(("edit", sub_matches)) => edit::handle_edit_command(sub_matches, api_url),
        Some(("delete", sub_matches)) => delete::handle_delete_command(sub_matches, api_url),
        Some(("shell", _)) => shell::handle_shell_command(api_url),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
