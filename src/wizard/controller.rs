use super::state::{Handle, IntervalMinutes, RoleList, WizardState, WizardStep};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardCommand {
    SubmitHandle(Handle),
    SubmitInterval(IntervalMinutes),
    Back,
    Edit,
    Confirm,
    Complete,
    Reset,
}

impl WizardCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardCommand::SubmitHandle(_) => "submit_handle",
            WizardCommand::SubmitInterval(_) => "submit_interval",
            WizardCommand::Back => "back",
            WizardCommand::Edit => "edit",
            WizardCommand::Confirm => "confirm",
            WizardCommand::Complete => "complete",
            WizardCommand::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardTransition {
    pub from: WizardStep,
    pub to: WizardStep,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardNavError {
    #[error("invalid wizard transition: step={step} command={command}")]
    InvalidTransition {
        step: WizardStep,
        command: &'static str,
    },
}

/// Sole owner of the wizard state. Submitted values are stored as given; the
/// step forms are responsible for validating them.
#[derive(Debug, Clone, Default)]
pub struct WizardController {
    state: WizardState,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roles(roles: RoleList) -> Self {
        Self {
            state: WizardState::initial(roles),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> WizardStep {
        self.state.step
    }

    pub fn apply(&mut self, command: WizardCommand) -> Result<WizardTransition, WizardNavError> {
        let from = self.state.step;
        let to = match (from, command) {
            (WizardStep::Handle, WizardCommand::SubmitHandle(handle)) => {
                self.state.handle = Some(handle);
                WizardStep::Interval
            }
            (WizardStep::Interval, WizardCommand::SubmitInterval(interval)) => {
                self.state.interval = interval;
                WizardStep::Confirm
            }
            (WizardStep::Interval, WizardCommand::Back) => WizardStep::Handle,
            (WizardStep::Confirm, WizardCommand::Edit) => WizardStep::Handle,
            (WizardStep::Confirm, WizardCommand::Confirm) => WizardStep::Activating,
            (WizardStep::Activating, WizardCommand::Complete) => WizardStep::Done,
            (WizardStep::Done, WizardCommand::Reset) => {
                // Roles are intentionally left as they are.
                self.state.handle = None;
                self.state.interval = IntervalMinutes::default();
                WizardStep::Handle
            }
            (step, command) => {
                return Err(WizardNavError::InvalidTransition {
                    step,
                    command: command.as_str(),
                })
            }
        };
        self.state.step = to;
        Ok(WizardTransition { from, to })
    }

    pub fn submit_handle(&mut self, handle: Handle) -> Result<WizardTransition, WizardNavError> {
        self.apply(WizardCommand::SubmitHandle(handle))
    }

    pub fn submit_interval(
        &mut self,
        interval: IntervalMinutes,
    ) -> Result<WizardTransition, WizardNavError> {
        self.apply(WizardCommand::SubmitInterval(interval))
    }

    pub fn back(&mut self) -> Result<WizardTransition, WizardNavError> {
        self.apply(WizardCommand::Back)
    }

    pub fn edit(&mut self) -> Result<WizardTransition, WizardNavError> {
        self.apply(WizardCommand::Edit)
    }

    pub fn confirm(&mut self) -> Result<WizardTransition, WizardNavError> {
        self.apply(WizardCommand::Confirm)
    }

    pub fn complete(&mut self) -> Result<WizardTransition, WizardNavError> {
        self.apply(WizardCommand::Complete)
    }

    pub fn reset(&mut self) -> Result<WizardTransition, WizardNavError> {
        self.apply(WizardCommand::Reset)
    }
}
