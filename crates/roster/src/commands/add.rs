use clap::ArgMatches;
use tracing::info;

use roster_core::{FormField, RosterView, StudentApi};

use super::CommandResult;
use super::helpers;

pub(crate) fn handle_add_command(matches: &ArgMatches, api_url: Option<&str>) -> CommandResult {
    let fields = helpers::field_values(matches);
    info!(event = "cli.add_started", field_count = fields.len());

    let mut view = helpers::build_view(api_url)?;
    helpers::runtime()?.block_on(add_student(&mut view, fields));

    helpers::finish(&view, "add")
}

/// Open the add dialog, fill it, and submit.
pub(crate) async fn add_student<A: StudentApi>(
    view: &mut RosterView<A>,
    fields: Vec<(FormField, String)>,
) {
    view.open_add();
    for (field, value) in fields {
        view.set_field(field, value);
    }
    view.submit().await;
}
