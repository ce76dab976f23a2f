//! Simulated delivery-channel check. Nothing is contacted: the outcome is a
//! pure function of the handle, released after a fixed delay.

use std::thread;
use std::time::Duration;

pub const VERIFICATION_DELAY_MS: u64 = 1500;
pub const MIN_HANDLE_CHARS: usize = 6;

pub const INVALID_HANDLE_MESSAGE: &str = "This username appears to be invalid. Please check for typos and ensure it's at least 5 characters long.";
pub const NOT_MESSAGED_MESSAGE: &str = "This simulates that you haven't messaged the bot yet. Please start a conversation with the bot to receive alerts.";
pub const FAILURE_REMEDIATION: &str = "The most common issue is not messaging the bot first.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub success: bool,
    pub message: String,
}

impl VerificationOutcome {
    fn success() -> Self {
        Self {
            success: true,
            message: String::new(),
        }
    }

    fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

pub fn check_handle(handle: &str) -> VerificationOutcome {
    let lower = handle.to_lowercase();
    if lower.contains("invalid") || handle.chars().count() < MIN_HANDLE_CHARS {
        return VerificationOutcome::failure(INVALID_HANDLE_MESSAGE);
    }
    if lower.contains("nomessage") {
        return VerificationOutcome::failure(NOT_MESSAGED_MESSAGE);
    }
    VerificationOutcome::success()
}

pub fn verify_blocking(handle: &str, delay: Duration) -> VerificationOutcome {
    thread::sleep(delay);
    check_handle(handle)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationStatus {
    Idle,
    Pending,
    Success,
    Failure(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    #[error("a verification check is already pending")]
    AlreadyPending,
}

#[derive(Debug, Clone)]
struct InFlight {
    handle: String,
    due_at_ms: u64,
}

/// Timer-driven wrapper around [`check_handle`]: at most one check in flight,
/// resolved by `poll` once its deadline passes.
#[derive(Debug, Clone)]
pub struct VerificationProbe {
    delay_ms: u64,
    status: VerificationStatus,
    in_flight: Option<InFlight>,
}

impl VerificationProbe {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            status: VerificationStatus::Idle,
            in_flight: None,
        }
    }

    pub fn status(&self) -> &VerificationStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.in_flight.as_ref().map(|pending| pending.due_at_ms)
    }

    pub fn start(&mut self, handle: &str, now_ms: u64) -> Result<(), VerificationError> {
        if self.in_flight.is_some() {
            return Err(VerificationError::AlreadyPending);
        }
        self.in_flight = Some(InFlight {
            handle: handle.to_string(),
            due_at_ms: now_ms.saturating_add(self.delay_ms),
        });
        self.status = VerificationStatus::Pending;
        Ok(())
    }

    pub fn poll(&mut self, now_ms: u64) -> Option<VerificationOutcome> {
        let due = self.in_flight.as_ref()?.due_at_ms;
        if now_ms < due {
            return None;
        }
        let pending = self.in_flight.take()?;
        let outcome = check_handle(&pending.handle);
        self.status = if outcome.success {
            VerificationStatus::Success
        } else {
            VerificationStatus::Failure(outcome.message.clone())
        };
        Some(outcome)
    }
}

impl Default for VerificationProbe {
    fn default() -> Self {
        Self::new(VERIFICATION_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_handles_fail_before_nomessage_rule() {
        assert_eq!(check_handle("@bob").message, INVALID_HANDLE_MESSAGE);
        // five characters including the marker is still too short
        assert!(!check_handle("@nomx").success);
        assert!(check_handle("@abcde").success);
    }

    #[test]
    fn invalid_rule_is_case_insensitive() {
        let outcome = check_handle("@SomeInvalidName");
        assert!(!outcome.success);
        assert!(outcome.message.contains("appears to be invalid"));
    }

    #[test]
    fn probe_resolves_only_after_delay() {
        let mut probe = VerificationProbe::new(1500);
        probe.start("@validuser", 1_000).expect("start");
        assert_eq!(probe.poll(2_499), None);
        assert_eq!(probe.status(), &VerificationStatus::Pending);
        let outcome = probe.poll(2_500).expect("resolved");
        assert!(outcome.success);
        assert_eq!(probe.status(), &VerificationStatus::Success);
        assert_eq!(probe.poll(9_000), None);
    }
}
