use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app_core::{AppCore, TracingObserver};
use crate::config::Settings;
use crate::input::KeyEvent;
use crate::log_buffer::LogBuffer;
use crate::logging::init_logging_with_buffer;
use crate::state::AppState;
use crate::ui::screens::Screen;
use atm_core::Account;

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        let log_buffer = LogBuffer::new(self.settings.log_buffer_size);
        let logging = init_logging_with_buffer(log_buffer.clone())?;

        tracing::info!("atm starting, logging to {}", logging.log_path.display());

        let account = Account::with_balance(self.settings.opening_balance)
            .context("Invalid opening balance")?;
        let state = AppState::with_account(account, &self.settings.currency_symbol);
        let mut core = AppCore::with_state(state, TracingObserver);

        let mut terminal = self.init()?;
        let result = self.event_loop(&mut terminal, &mut core, &log_buffer).await;

        tracing::info!("Cleaning up application");
        self.exit(terminal)?;

        result
    }

    async fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
        core: &mut AppCore<TracingObserver>,
        log_buffer: &LogBuffer,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        tracing::info!("Entering main event loop");

        loop {
            core.set_log_entry_count(log_buffer.len());

            terminal.draw(|f| {
                crate::ui::render_app(f, core.state(), log_buffer);
            })?;

            match event_stream.next().await {
                Some(Ok(Event::Key(key))) if matches!(key.kind, KeyEventKind::Press) => {
                    // Don't log when on logs screen to avoid feedback loop
                    if !matches!(core.state().current_screen(), Screen::Logs(_)) {
                        tracing::debug!("Key press: {:?}", key);
                    }
                    core.handle_key(KeyEvent::from(key));
                }
                Some(Ok(_)) => {
                    // Resize and other events just trigger a redraw
                }
                Some(Err(e)) => {
                    tracing::error!("Terminal event error: {}", e);
                    return Err(e.into());
                }
                None => {
                    tracing::warn!("Terminal event stream closed");
                    break;
                }
            }

            if core.should_quit() {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}
