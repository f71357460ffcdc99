mod global;
mod misc;
mod students;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(students::list_command())
        .subcommand(students::add_command())
        .subcommand(students::edit_command())
        .subcommand(students::delete_command())
        .subcommand(misc::shell_command())
        .subcommand(misc::completions_command())
}
