use clap::ArgMatches;
use tracing::{error, info, warn};

use roster_config::RosterConfig;
use roster_core::{
    FormField, HttpStudentApi, RosterError, RosterSnapshot, RosterView, StudentApi, ToastKind,
};

use super::CommandResult;
use crate::color;
use crate::views;

/// Load configuration with warning on errors.
///
/// Falls back to defaults (plus the environment override) if a config file
/// is broken, and tells the user on stderr.
pub fn load_config_with_warning() -> RosterConfig {
    match RosterConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{}",
                color::error(&format!(
                    "Warning: Could not load config: {}. Using defaults.\n\
                     Tip: Check ~/.roster/config.toml and ./.roster/config.toml for syntax errors.",
                    e
                ))
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            let mut config = RosterConfig::default();
            roster_config::apply_env_overrides(&mut config);
            config
        }
    }
}

/// Build a view over the HTTP collection. `api_url` wins over every
/// configured source.
pub fn build_view(
    api_url: Option<&str>,
) -> Result<RosterView<HttpStudentApi>, Box<dyn std::error::Error>> {
    let mut config = load_config_with_warning();
    if let Some(url) = api_url {
        config.api.base_url = Some(url.to_string());
    }

    if let Err(e) = config.validate() {
        eprintln!("{}", color::error(&format!("❌ {}", e)));
        error!(
            event = "cli.config.invalid",
            error = %e,
            error_code = e.error_code()
        );
        return Err(e.into());
    }

    let api = match HttpStudentApi::from_config(&config.api) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("{}", color::error(&format!("❌ {}", e)));
            error!(
                event = "cli.api.build_failed",
                error = %e,
                error_code = e.error_code()
            );
            return Err(e.into());
        }
    };

    info!(
        event = "cli.view.build_completed",
        base_url = %api.base_url(),
        ttl_ms = config.notifications.ttl().as_millis() as u64
    );
    Ok(RosterView::new(api, config.notifications.ttl()))
}

pub fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Form values given on the command line, in display order.
pub fn field_values(matches: &ArgMatches) -> Vec<(FormField, String)> {
    FormField::ALL
        .into_iter()
        .filter_map(|field| {
            matches
                .get_one::<String>(field.key())
                .map(|value| (field, value.clone()))
        })
        .collect()
}

/// True when the last operation did not happen (error or warning toast).
pub fn operation_failed(snapshot: &RosterSnapshot) -> bool {
    snapshot
        .toasts
        .iter()
        .any(|t| matches!(t.kind, ToastKind::Error | ToastKind::Warning))
}

/// Print the outcome of a one-shot command and map it to the exit status.
///
/// The refreshed list is printed only on success.
pub fn finish<A: StudentApi>(view: &RosterView<A>, command: &'static str) -> CommandResult {
    let snapshot = view.snapshot();

    if operation_failed(&snapshot) {
        print!("{}", views::render_toasts(&snapshot.toasts));
        warn!(event = "cli.command_failed", command = command);
        return Err(format!("{command} failed").into());
    }

    print!("{}", views::render_list(&snapshot));
    print!("{}", views::render_toasts(&snapshot.toasts));
    info!(event = "cli.command_completed", command = command);
    Ok(())
}
