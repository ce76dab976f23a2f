use super::CliContext;
use crate::verification::{verify_blocking, FAILURE_REMEDIATION};
use crate::wizard::state::Handle;
use std::time::Duration;

pub(crate) fn cmd_verify(args: &[String], ctx: &CliContext) -> Result<String, String> {
    let raw = args.join(" ");
    let handle = Handle::normalize(&raw).ok_or_else(|| "usage: roleping verify <handle>".to_string())?;
    let outcome = verify_blocking(
        handle.as_str(),
        Duration::from_millis(ctx.settings.verification.delay_ms),
    );
    let mut lines = vec![format!("handle={handle}")];
    if outcome.success {
        ctx.log.info("verification.succeeded", handle.as_str());
        lines.push("verification=ok".to_string());
        lines.push(format!(
            "next=message {} to receive real alerts",
            ctx.settings.delivery.bot_url
        ));
    } else {
        ctx.log.info("verification.failed", &outcome.message);
        lines.push("verification=failed".to_string());
        lines.push(format!("message={}", outcome.message));
        lines.push(format!(
            "remediation={FAILURE_REMEDIATION} Message {} and try again.",
            ctx.settings.delivery.bot_url
        ));
    }
    Ok(lines.join("\n"))
}
