use super::forms::{HandleForm, IntervalForm, ReviewForm};
use super::navigation::step_hint_text;
use super::progress::{ActivationSequencer, TaskState};
use super::state::{format_interval, WizardState, WizardStep, ALL_WIZARD_STEPS, INTERVAL_OPTIONS};
use crate::verification::{VerificationStatus, FAILURE_REMEDIATION};
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::Terminal;

pub const APP_TITLE: &str = "Bio/AI/Clinical Job Notifier";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEmphasis {
    Normal,
    Heading,
    Selected,
    Success,
    Failure,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLine {
    pub text: String,
    pub emphasis: LineEmphasis,
}

fn line(text: impl Into<String>, emphasis: LineEmphasis) -> ScreenLine {
    ScreenLine {
        text: text.into(),
        emphasis,
    }
}

pub struct ScreenContext<'a> {
    pub state: &'a WizardState,
    pub handle_form: &'a HandleForm,
    pub interval_form: &'a IntervalForm,
    pub review: Option<&'a ReviewForm>,
    pub sequencer: &'a ActivationSequencer,
    pub status_text: &'a str,
    pub bot_url: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardViewModel {
    pub step_line: String,
    pub lines: Vec<ScreenLine>,
    pub hint_text: String,
    pub status_text: String,
}

impl WizardViewModel {
    pub fn contains_text(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.text.contains(needle))
    }
}

fn step_title(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Handle => "Delivery handle",
        WizardStep::Interval => "Update frequency",
        WizardStep::Confirm => "Review",
        WizardStep::Activating => "Activation",
        WizardStep::Done => "Done",
    }
}

pub fn project_wizard_view_model(ctx: &ScreenContext<'_>) -> WizardViewModel {
    let step = ctx.state.step;
    let lines = match step {
        WizardStep::Handle => handle_lines(ctx),
        WizardStep::Interval => interval_lines(ctx),
        WizardStep::Confirm => review_lines(ctx),
        WizardStep::Activating => activation_lines(ctx.sequencer),
        WizardStep::Done => done_lines(ctx),
    };
    WizardViewModel {
        step_line: format!(
            "Step {} of {}: {}",
            step.ordinal() + 1,
            ALL_WIZARD_STEPS.len(),
            step_title(step)
        ),
        lines,
        hint_text: step_hint_text(step, ctx.handle_form.can_submit()).to_string(),
        status_text: ctx.status_text.to_string(),
    }
}

fn handle_lines(ctx: &ScreenContext<'_>) -> Vec<ScreenLine> {
    vec![
        line("Your messaging username", LineEmphasis::Heading),
        line(
            "We'll send notifications for the pre-configured job roles to this account.",
            LineEmphasis::Muted,
        ),
        line(
            format!("@{}_", ctx.handle_form.text()),
            LineEmphasis::Selected,
        ),
        line(String::new(), LineEmphasis::Normal),
        line(
            format!(
                "Important: start a conversation with the bot first: {}",
                ctx.bot_url
            ),
            LineEmphasis::Normal,
        ),
    ]
}

fn interval_lines(ctx: &ScreenContext<'_>) -> Vec<ScreenLine> {
    let mut lines = vec![
        line("How often do you want to receive job updates?", LineEmphasis::Heading),
        line(String::new(), LineEmphasis::Normal),
    ];
    let selected = ctx.interval_form.selected();
    for (idx, option) in INTERVAL_OPTIONS.iter().enumerate() {
        if selected == Some(idx) {
            lines.push(line(format!("> {}", option.label), LineEmphasis::Selected));
        } else {
            lines.push(line(format!("  {}", option.label), LineEmphasis::Normal));
        }
    }
    if selected.is_none() {
        lines.push(line(
            format!("Current: {}", ctx.interval_form.value()),
            LineEmphasis::Muted,
        ));
    }
    lines
}

fn review_lines(ctx: &ScreenContext<'_>) -> Vec<ScreenLine> {
    let mut lines = vec![line("Job roles to track:", LineEmphasis::Heading)];
    lines.extend(
        ctx.state
            .roles
            .iter()
            .map(|role| line(format!("  - {role}"), LineEmphasis::Normal)),
    );
    lines.push(line("Delivery channel:", LineEmphasis::Heading));
    lines.push(line(
        format!(
            "  {}",
            ctx.state
                .handle
                .as_ref()
                .map(|handle| handle.as_str())
                .unwrap_or("<none>")
        ),
        LineEmphasis::Normal,
    ));
    lines.push(line("Update frequency:", LineEmphasis::Heading));
    lines.push(line(
        format!("  {}", format_interval(ctx.state.interval.minutes())),
        LineEmphasis::Normal,
    ));
    lines.push(line(String::new(), LineEmphasis::Normal));

    let status = ctx
        .review
        .map(ReviewForm::verification)
        .unwrap_or(&VerificationStatus::Idle);
    match status {
        VerificationStatus::Idle => lines.push(line(
            "Press t to run a test notification simulation.",
            LineEmphasis::Muted,
        )),
        VerificationStatus::Pending => lines.push(line("Simulating...", LineEmphasis::Selected)),
        VerificationStatus::Success => {
            lines.push(line("Test Simulation Successful!", LineEmphasis::Success));
            lines.push(line(
                format!(
                    "This confirms the setup flow works. To receive real alerts, message our bot: {}",
                    ctx.bot_url
                ),
                LineEmphasis::Normal,
            ));
        }
        VerificationStatus::Failure(message) => {
            lines.push(line("Test Simulation Failed!", LineEmphasis::Failure));
            lines.push(line(
                format!(
                    "{message} {FAILURE_REMEDIATION} Message the bot at {}, then try the test again.",
                    ctx.bot_url
                ),
                LineEmphasis::Normal,
            ));
        }
    }
    lines.push(line(
        "You will receive updates for posts related to these roles.",
        LineEmphasis::Muted,
    ));
    lines
}

fn activation_lines(sequencer: &ActivationSequencer) -> Vec<ScreenLine> {
    let mut lines = vec![
        line("Activating Your Notifier", LineEmphasis::Heading),
        line("Please wait while we set everything up...", LineEmphasis::Muted),
        line(String::new(), LineEmphasis::Normal),
    ];
    for (idx, task) in sequencer.tasks().iter().enumerate() {
        let rendered = match sequencer.task_state(idx) {
            TaskState::Completed => line(format!("[x] {}", task.label), LineEmphasis::Muted),
            TaskState::Running => line(format!("[~] {}", task.label), LineEmphasis::Selected),
            TaskState::Waiting => line(format!("[ ] {}", task.label), LineEmphasis::Normal),
        };
        lines.push(rendered);
    }
    lines
}

fn done_lines(ctx: &ScreenContext<'_>) -> Vec<ScreenLine> {
    let target = ctx
        .state
        .handle
        .as_ref()
        .map(|handle| handle.as_str().to_string())
        .unwrap_or_else(|| "your account".to_string());
    vec![
        line("Configuration Complete!", LineEmphasis::Success),
        line(
            format!("Your job notifier is now active. You will start receiving updates at {target}."),
            LineEmphasis::Normal,
        ),
        line(String::new(), LineEmphasis::Normal),
        line("Press Enter to start a new configuration.", LineEmphasis::Muted),
    ]
}

fn emphasis_style(emphasis: LineEmphasis) -> Style {
    match emphasis {
        LineEmphasis::Normal => Style::default(),
        LineEmphasis::Heading => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        LineEmphasis::Selected => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LineEmphasis::Success => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LineEmphasis::Failure => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        LineEmphasis::Muted => Style::default().fg(Color::DarkGray),
    }
}

pub fn draw_wizard_screen<B: Backend>(
    terminal: &mut Terminal<B>,
    view: &WizardViewModel,
) -> Result<(), String> {
    terminal
        .draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(4),
                    Constraint::Min(8),
                    Constraint::Length(4),
                ])
                .split(frame.area());

            let header = Paragraph::new(vec![
                Line::from(Span::styled(
                    APP_TITLE,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(view.step_line.clone()),
            ])
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(header, chunks[0]);

            let body_lines: Vec<Line> = view
                .lines
                .iter()
                .map(|row| Line::from(Span::styled(row.text.clone(), emphasis_style(row.emphasis))))
                .collect();
            let body = Paragraph::new(body_lines)
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .padding(Padding::horizontal(1)),
                );
            frame.render_widget(body, chunks[1]);

            let footer = Paragraph::new(vec![
                Line::from(view.hint_text.clone()),
                Line::from(format!("Status: {}", view.status_text)),
            ])
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(footer, chunks[2]);
        })
        .map_err(|e| format!("failed to draw wizard screen: {e}"))?;
    Ok(())
}
