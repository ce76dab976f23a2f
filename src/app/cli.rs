#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliVerb {
    Wizard,
    Verify,
    Suggest,
    Intervals,
    Help,
    Unknown,
}

pub fn parse_cli_verb(input: &str) -> CliVerb {
    match input {
        "wizard" => CliVerb::Wizard,
        "verify" => CliVerb::Verify,
        "suggest" => CliVerb::Suggest,
        "intervals" => CliVerb::Intervals,
        "help" | "--help" | "-h" => CliVerb::Help,
        _ => CliVerb::Unknown,
    }
}

pub fn cli_help_lines() -> Vec<String> {
    vec![
        "Commands:".to_string(),
        "  wizard                               Run the notifier configuration wizard (default)"
            .to_string(),
        "  verify <handle>                      Simulate a delivery-channel check for a handle"
            .to_string(),
        "  suggest <role>                       Ask the suggestion service for related roles"
            .to_string(),
        "  intervals                            List the selectable update intervals".to_string(),
        "  help                                 Show this help".to_string(),
        String::new(),
        "Environment:".to_string(),
        "  ROLEPING_API_KEY                     Credential for role suggestions (falls back to API_KEY)"
            .to_string(),
        "  ROLEPING_SUGGEST_API_BASE            Override the suggestion endpoint base URL"
            .to_string(),
        "  ROLEPING_WIZARD_SCRIPT_KEYS          Run the wizard headless with scripted keys"
            .to_string(),
    ]
}

pub(crate) fn help_text() -> String {
    cli_help_lines().join("\n")
}
