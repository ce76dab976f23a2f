use crate::app::cli::{help_text, parse_cli_verb, CliVerb};
use crate::config::{
    default_state_root, load_global_settings, suggestion_api_key, ConfigError, Settings,
    API_KEY_ENV,
};
use crate::shared::EventLog;
use crate::wizard::state::{format_interval, INTERVAL_OPTIONS};

pub mod suggest;
pub mod verify;
pub mod wizard;

pub(crate) struct CliContext {
    pub(crate) settings: Settings,
    pub(crate) log: EventLog,
    pub(crate) api_key: Option<String>,
}

pub(crate) fn map_config_err(err: ConfigError) -> String {
    err.to_string()
}

/// Loads settings, opens the event log and reports a missing suggestion
/// credential exactly once per process.
pub(crate) fn load_cli_context() -> Result<CliContext, String> {
    let log = match default_state_root() {
        Ok(root) => EventLog::from_state_root(&root),
        Err(_) => EventLog::disabled(),
    };
    let settings = match load_global_settings() {
        Ok(settings) => settings,
        Err(ConfigError::HomeDirectoryUnavailable) => Settings::default(),
        Err(err) => return Err(map_config_err(err)),
    };
    let api_key = suggestion_api_key();
    if api_key.is_none() {
        log.warn(
            "suggestions.credential_missing",
            &format!("{API_KEY_ENV} is not set; role suggestions are disabled"),
        );
    }
    Ok(CliContext {
        settings,
        log,
        api_key,
    })
}

pub fn run_cli(args: Vec<String>) -> Result<String, String> {
    let verb = args
        .first()
        .map(|arg| parse_cli_verb(arg))
        .unwrap_or(CliVerb::Wizard);
    let rest = if args.is_empty() { &args[..] } else { &args[1..] };

    match verb {
        CliVerb::Help => Ok(help_text()),
        CliVerb::Intervals => Ok(cmd_intervals()),
        CliVerb::Wizard => wizard::cmd_wizard(&load_cli_context()?),
        CliVerb::Verify => verify::cmd_verify(rest, &load_cli_context()?),
        CliVerb::Suggest => suggest::cmd_suggest(rest, &load_cli_context()?),
        CliVerb::Unknown => Err(format!("unknown command `{}`\n\n{}", args[0], help_text())),
    }
}

fn cmd_intervals() -> String {
    INTERVAL_OPTIONS
        .iter()
        .map(|option| {
            format!(
                "{:>5}  {:<8}  {}",
                option.minutes,
                option.label,
                format_interval(option.minutes)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
