use super::session::{WizardExit, WizardSession};
use crate::shared::{Clock, SystemClock};
use crate::wizard::screens::draw_wizard_screen;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, IsTerminal};
use std::time::Duration;

pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn is_interactive_terminal() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

pub fn run_wizard_tui(session: &mut WizardSession) -> Result<WizardExit, String> {
    let mut stdout = io::stdout();
    enable_raw_mode().map_err(|e| format!("failed to enable raw mode: {e}"))?;
    execute!(stdout, EnterAlternateScreen, Hide)
        .map_err(|e| format!("failed to enter wizard screen: {e}"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("failed to create wizard terminal: {e}"))?;
    let result = run_wizard_tui_loop(session, &mut terminal, &SystemClock::new());
    disable_raw_mode().map_err(|e| format!("failed to disable raw mode: {e}"))?;
    execute!(terminal.backend_mut(), Show, LeaveAlternateScreen)
        .map_err(|e| format!("failed to leave wizard screen: {e}"))?;
    result
}

fn run_wizard_tui_loop(
    session: &mut WizardSession,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    clock: &SystemClock,
) -> Result<WizardExit, String> {
    loop {
        session.tick(clock.now_ms());
        draw_wizard_screen(terminal, &session.view_model())?;
        if !event::poll(TICK_INTERVAL).map_err(|e| format!("failed to poll wizard input: {e}"))? {
            continue;
        }
        let ev = event::read().map_err(|e| format!("failed to read wizard input: {e}"))?;
        let Event::Key(key) = ev else {
            continue;
        };
        if let Some(exit) = session.handle_key(key, clock.now_ms()) {
            return Ok(exit);
        }
    }
}
