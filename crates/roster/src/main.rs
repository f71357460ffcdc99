use roster_core::init_logging;

mod app;
pub(crate) mod color;
mod commands;
mod views;

fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Handle --no-color before any output
    if matches.get_flag("no-color") {
        color::set_no_color();
    }

    let verbose = matches.get_flag("verbose");
    init_logging(!verbose);

    if let Err(e) = commands::run_command(&matches) {
        // Toasts and error lines were already printed by the command handler.
        drop(e);
        std::process::exit(1);
    }
}
