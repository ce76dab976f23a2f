use super::CliContext;
use crate::shared::{Clock, ManualClock};
use crate::suggestions::{GenerativeSuggestionClient, SuggestionSource, ThreadedSuggestionDispatcher};
use crate::wizard::role_entry::RoleEntryForm;
use crate::wizard::state::RoleList;
use std::sync::Arc;
use std::time::Duration;

/// Runs one lookup through the same debounce and staleness path the role
/// entry form uses, then prints what the form would display.
pub(crate) fn cmd_suggest(args: &[String], ctx: &CliContext) -> Result<String, String> {
    let role = args.join(" ");
    if role.trim().is_empty() {
        return Err("usage: roleping suggest <role>".to_string());
    }
    let settings = &ctx.settings.suggestions;
    let client = GenerativeSuggestionClient::new(settings, ctx.api_key.clone(), ctx.log.clone());
    let mut lines = vec![format!("role={}", role.trim())];
    if !client.has_credential() {
        lines.push("credential=missing".to_string());
    }

    let source: Arc<dyn SuggestionSource> = Arc::new(client);
    let mut dispatcher = ThreadedSuggestionDispatcher::new(source);
    let clock = ManualClock::new(0);
    let mut form = RoleEntryForm::new(
        RoleList::predefined(),
        settings.debounce_ms,
        settings.min_query_chars,
    );
    form.set_input(&role, clock.now_ms());
    if let Some(deadline) = form.next_deadline() {
        clock.set(deadline);
        if form.tick(clock.now_ms(), &mut dispatcher).is_some() {
            let wait = Duration::from_millis(settings.timeout_ms.saturating_add(1_000));
            if let Some(reply) = dispatcher.recv_timeout(wait) {
                form.accept(reply);
            }
        }
    } else {
        lines.push(format!("min_query_chars={}", settings.min_query_chars));
    }

    lines.push(format!("suggestions={}", form.suggestions().len()));
    lines.extend(
        form.suggestions()
            .iter()
            .map(|suggestion| format!("suggestion={suggestion}")),
    );
    Ok(lines.join("\n"))
}
