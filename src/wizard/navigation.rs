use super::state::WizardStep;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub const SCRIPT_KEYS_ENV: &str = "ROLEPING_WIZARD_SCRIPT_KEYS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Input(char),
    Erase,
    MovePrev,
    MoveNext,
    Submit,
    Back,
    Edit,
    Test,
    Reset,
    Quit,
    Cancel,
}

/// Footer hint for a step. Enter is only advertised on the handle step once
/// the typed text would be accepted.
pub fn step_hint_text(step: WizardStep, can_submit: bool) -> &'static str {
    match step {
        WizardStep::Handle if can_submit => "Type your username | Enter next | Esc cancel",
        WizardStep::Handle => "Type your username | Esc cancel",
        WizardStep::Interval => "Left/Right choose | Enter next | Esc back",
        WizardStep::Confirm => "t test notification | e edit | Enter activate",
        WizardStep::Activating => "Activating... | Ctrl-C cancel",
        WizardStep::Done => "Enter/r new configuration | q quit",
    }
}

pub fn wizard_action_from_key(step: WizardStep, key: KeyEvent) -> Option<WizardAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(WizardAction::Cancel);
    }
    let is_enter = matches!(
        key.code,
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r')
    );
    match step {
        WizardStep::Handle => match key.code {
            _ if is_enter => Some(WizardAction::Submit),
            KeyCode::Backspace => Some(WizardAction::Erase),
            KeyCode::Esc => Some(WizardAction::Cancel),
            KeyCode::Char(ch) if !ch.is_control() => Some(WizardAction::Input(ch)),
            _ => None,
        },
        WizardStep::Interval => match key.code {
            _ if is_enter => Some(WizardAction::Submit),
            KeyCode::Left | KeyCode::Up => Some(WizardAction::MovePrev),
            KeyCode::Right | KeyCode::Down => Some(WizardAction::MoveNext),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(WizardAction::Back),
            _ => None,
        },
        WizardStep::Confirm => match key.code {
            _ if is_enter => Some(WizardAction::Submit),
            KeyCode::Char('t') => Some(WizardAction::Test),
            KeyCode::Char('e') | KeyCode::Esc => Some(WizardAction::Edit),
            _ => None,
        },
        WizardStep::Activating => None,
        WizardStep::Done => match key.code {
            _ if is_enter => Some(WizardAction::Reset),
            KeyCode::Char('r') => Some(WizardAction::Reset),
            KeyCode::Char('q') | KeyCode::Esc => Some(WizardAction::Quit),
            _ => None,
        },
    }
}

/// Parses a comma separated key script, e.g. `text:alice,enter,right,enter`.
pub fn parse_scripted_wizard_keys(raw: &str) -> Result<Vec<KeyEvent>, String> {
    let mut keys = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Some(text) = token.strip_prefix("text:") {
            keys.extend(
                text.chars()
                    .map(|ch| KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)),
            );
            continue;
        }
        let normalized = token.to_ascii_lowercase();
        let key = match normalized.as_str() {
            "up" => KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            "down" => KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            "left" => KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            "right" => KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            "enter" => KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            "esc" => KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            "backspace" => KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            "ctrl-c" => KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            "b" | "e" | "q" | "r" | "t" => {
                let ch = normalized.chars().next().unwrap_or('q');
                KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)
            }
            other => {
                return Err(format!(
                    "invalid {SCRIPT_KEYS_ENV} token `{other}`; valid tokens: up,down,left,right,enter,esc,backspace,ctrl-c,b,e,q,r,t,text:<chars>"
                ));
            }
        };
        keys.push(key);
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_characters_are_input_only_on_handle_step() {
        let key = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        assert_eq!(
            wizard_action_from_key(WizardStep::Handle, key),
            Some(WizardAction::Input('t'))
        );
        assert_eq!(
            wizard_action_from_key(WizardStep::Confirm, key),
            Some(WizardAction::Test)
        );
        assert_eq!(wizard_action_from_key(WizardStep::Activating, key), None);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(wizard_action_from_key(WizardStep::Handle, key), None);
    }

    #[test]
    fn text_token_expands_to_characters() {
        let keys = parse_scripted_wizard_keys("text:al, enter").expect("parse");
        assert_eq!(keys.len(), 3);
        assert_eq!(keys[0].code, KeyCode::Char('a'));
        assert_eq!(keys[2].code, KeyCode::Enter);
        assert!(parse_scripted_wizard_keys("enter,warp").is_err());
    }

    #[test]
    fn handle_hint_offers_enter_only_when_submittable() {
        assert!(!step_hint_text(WizardStep::Handle, false).contains("Enter"));
        assert!(step_hint_text(WizardStep::Handle, true).contains("Enter next"));
        assert_eq!(
            step_hint_text(WizardStep::Interval, false),
            step_hint_text(WizardStep::Interval, true)
        );
    }
}
