use clap::ArgMatches;
use tracing::info;

use roster_core::{Action, RosterView, StudentApi, StudentId};

use super::CommandResult;
use super::helpers;

pub(crate) fn handle_delete_command(
    matches: &ArgMatches,
    api_url: Option<&str>,
) -> CommandResult {
    let id = matches
        .get_one::<String>("id")
        .ok_or("Id argument is required")?;
    let id = StudentId::from(id.as_str());

    info!(event = "cli.delete_started", id = %id);

    let mut view = helpers::build_view(api_url)?;
    helpers::runtime()?.block_on(delete_student(&mut view, id));

    helpers::finish(&view, "delete")
}

/// Confirm a delete of `id` in one step; the command line argument is the
/// confirmation.
pub(crate) async fn delete_student<A: StudentApi>(view: &mut RosterView<A>, id: StudentId) {
    view.dispatch(Action::OpenConfirm { id }).await;
    view.dispatch(Action::ConfirmDelete).await;
}
