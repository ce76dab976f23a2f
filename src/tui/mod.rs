pub mod session;
pub mod terminal;

pub use session::{run_scripted, settle_timers, WizardExit, WizardSession};
pub use terminal::{is_interactive_terminal, run_wizard_tui};
