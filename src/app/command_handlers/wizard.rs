use super::CliContext;
use crate::shared::ManualClock;
use crate::tui::{is_interactive_terminal, run_scripted, run_wizard_tui, WizardExit, WizardSession};
use crate::wizard::navigation::{parse_scripted_wizard_keys, SCRIPT_KEYS_ENV};
use crossterm::event::KeyEvent;

fn load_scripted_wizard_keys() -> Result<Option<Vec<KeyEvent>>, String> {
    let Ok(raw) = std::env::var(SCRIPT_KEYS_ENV) else {
        return Ok(None);
    };
    parse_scripted_wizard_keys(&raw).map(Some)
}

pub(crate) fn cmd_wizard(ctx: &CliContext) -> Result<String, String> {
    let mut session = WizardSession::new(&ctx.settings, ctx.log.clone());
    let exit = if let Some(keys) = load_scripted_wizard_keys()? {
        run_scripted(&mut session, keys, &ManualClock::new(0))
    } else if is_interactive_terminal() {
        run_wizard_tui(&mut session).map_err(|err| {
            ctx.log.error("wizard.terminal_failed", &err);
            err
        })?
    } else {
        return Err(format!(
            "wizard requires an interactive terminal; set {SCRIPT_KEYS_ENV} to run it headless"
        ));
    };
    ctx.log
        .info("wizard.exit", &format!("exit={} step={}", exit.as_str(), session.step()));
    Ok(summarize_session(&session, exit))
}

pub(crate) fn summarize_session(session: &WizardSession, exit: WizardExit) -> String {
    let state = session.controller().state();
    let handle = state
        .handle
        .as_ref()
        .map(|handle| handle.as_str().to_string())
        .unwrap_or_else(|| "<none>".to_string());
    [
        format!("wizard_exit={}", exit.as_str()),
        format!("step={}", state.step),
        format!("handle={handle}"),
        format!("interval_minutes={}", state.interval.minutes()),
        format!("interval={}", state.interval),
        format!("roles={}", state.roles.len()),
        format!("activations={}", session.completed_activations()),
    ]
    .join("\n")
}
