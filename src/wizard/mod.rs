pub mod controller;
pub mod forms;
pub mod navigation;
pub mod progress;
pub mod role_entry;
pub mod screens;
pub mod state;

pub use controller::{WizardCommand, WizardController, WizardNavError, WizardTransition};
pub use forms::{FormOutcome, HandleForm, IntervalForm, ReviewForm};
pub use navigation::{
    parse_scripted_wizard_keys, wizard_action_from_key, WizardAction, SCRIPT_KEYS_ENV,
};
pub use progress::{
    ActivationSequencer, ActivationTask, SequencerEvent, TaskState, ACTIVATION_FINAL_DELAY_MS,
    ACTIVATION_TASKS,
};
pub use role_entry::{RoleEntryForm, MIN_QUERY_CHARS, SUGGESTION_DEBOUNCE_MS};
pub use state::{
    format_interval, Handle, IntervalMinutes, RoleList, WizardState, WizardStep,
    INTERVAL_OPTIONS, PREDEFINED_ROLES,
};
