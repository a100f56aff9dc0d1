//! TUI event loop.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::store::CampaignStore;
use crate::ui::{install_panic_hook, Dashboard, TerminalGuard};

pub struct App {
    config: Config,
    store: CampaignStore,
    dashboard: Dashboard,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let store = CampaignStore::load(&config)?;
        Ok(Self {
            config,
            store,
            dashboard: Dashboard::new(),
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        install_panic_hook();
        let _guard = TerminalGuard::enter()?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        self.refresh_data();

        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);

        while !self.should_quit {
            terminal.draw(|f| self.dashboard.render(f))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.dashboard.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.dashboard.select_next(),
            KeyCode::Right | KeyCode::Tab => self.dashboard.next_tab(),
            KeyCode::Left | KeyCode::BackTab => self.dashboard.prev_tab(),
            KeyCode::Char('s') => self.advance_selected()?,
            KeyCode::Char('r') => {
                self.store = CampaignStore::load(&self.config)?;
                self.refresh_data();
            }
            _ => {}
        }
        Ok(())
    }

    /// Advance the selected campaign one status along the happy path.
    fn advance_selected(&mut self) -> Result<()> {
        let Some(id) = self.dashboard.selected_campaign().map(|c| c.id) else {
            return Ok(());
        };
        let status = self.store.advance(id)?;
        tracing::info!(%id, %status, "Campaign advanced");
        // update_campaigns keeps the selection and re-derives the default tab
        // for the new stage
        self.refresh_data();
        Ok(())
    }

    fn refresh_data(&mut self) {
        self.dashboard.recent_count = self
            .store
            .recently_updated(self.config.ui.history_hours)
            .len();
        self.dashboard
            .update_campaigns(self.store.campaigns.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_campaigns;
    use tempfile::TempDir;

    #[test]
    fn test_refresh_counts_recent_updates() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.data = temp_dir.path().to_string_lossy().to_string();

        let mut app = App::new(config).unwrap();
        seed_campaigns(&mut app.store, false).unwrap();
        app.refresh_data();

        assert_eq!(app.dashboard.campaign_count, app.store.len());
        // Freshly seeded campaigns all fall inside the history window
        assert_eq!(app.dashboard.recent_count, app.store.len());
    }

    #[test]
    fn test_refresh_respects_history_window() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.data = temp_dir.path().to_string_lossy().to_string();

        let mut app = App::new(config).unwrap();
        app.store
            .create("캠페인".to_string(), "브랜드".to_string(), None, None)
            .unwrap();
        // Backdate the record past the window
        app.store.campaigns[0].updated_at = chrono::Utc::now() - chrono::Duration::hours(48);
        app.refresh_data();

        assert_eq!(app.dashboard.campaign_count, 1);
        assert_eq!(app.dashboard.recent_count, 0);
    }
}
