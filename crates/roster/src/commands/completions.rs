use clap::ArgMatches;
use clap_complete::Shell;
use tracing::info;

use super::CommandResult;

pub(crate) fn handle_completions_command(matches: &ArgMatches) -> CommandResult {
    let shell = *matches
        .get_one::<Shell>("shell")
        .ok_or("Shell argument is required")?;

    info!(event = "cli.completions_started", shell = %shell);

    let mut cmd = crate::app::build_cli();
    clap_complete::generate(shell, &mut cmd, "roster", &mut std::io::stdout());
    Ok(())
}
