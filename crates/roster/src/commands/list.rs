use tracing::info;

use super::CommandResult;
use super::helpers;

pub(crate) fn handle_list_command(api_url: Option<&str>) -> CommandResult {
    info!(event = "cli.list_started");

    let mut view = helpers::build_view(api_url)?;
    helpers::runtime()?.block_on(view.list());

    helpers::finish(&view, "list")
}
