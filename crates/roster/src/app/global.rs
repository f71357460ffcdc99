use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("roster")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage a remote student roster")
        .long_about("roster lists, adds, edits, and deletes student records held by a REST collection. Every operation reports its outcome as a short-lived notification; `roster shell` keeps the roster open for interactive editing.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Base URL of the student collection (overrides config and ROSTER_API_URL)")
                .value_name("URL")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}
