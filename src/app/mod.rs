use std::cell::RefCell;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::prelude::*;

use crate::config::Config;
use crate::data::AppData;
use crate::data::storage::{DataStore, FileStore, StoreError};
use crate::keys::{map_key, KeyAction};
use crate::pane::{Bounds, LifecyclePhase, Pane, PaneMode};
use crate::ui::{NotesMode, NotesPane, StatusMode, StatusPane, COMPACT_WIDTH, MIN_HEIGHT};

/// Owns the panes and drives them: positions each pane, sets its mode, and
/// draws it once per frame.
pub struct App<'a> {
    data: &'a RefCell<AppData>,
    notes: NotesPane<'a>,
    status: StatusPane<'a>,
    running: bool,
}

impl<'a> App<'a> {
    pub fn new(data: &'a RefCell<AppData>, config: &Config) -> Self {
        let mut notes = NotesPane::new(data);
        notes.update_mode(&config.initial_mode);
        let mut status = StatusPane::new(data);
        status.update_mode(StatusMode::Full.name());

        Self {
            data,
            notes,
            status,
            running: true,
        }
    }

    /// Run the main TUI event loop.
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        tick_rate: Duration,
    ) -> anyhow::Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        while self.running {
            terminal.draw(|frame| self.draw(frame.buffer_mut()))?;

            if event::poll(tick_rate)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Draw one frame into `buf`.
    pub fn draw(&mut self, buf: &mut Buffer) {
        let area = *buf.area();
        let (notes_bounds, status_bounds) = layout(area);

        let status_mode = if area.width < COMPACT_WIDTH {
            StatusMode::Compact
        } else {
            StatusMode::Full
        };
        self.status.update_mode(status_mode.name());

        self.notes.update_dimensions(
            notes_bounds.x,
            notes_bounds.y,
            notes_bounds.width,
            notes_bounds.height,
        );
        self.status.update_dimensions(
            status_bounds.x,
            status_bounds.y,
            status_bounds.width,
            status_bounds.height,
        );

        for pane in self.panes_mut() {
            pane.draw_pane(buf);
            debug_assert_eq!(pane.base().phase(), LifecyclePhase::Idle);
        }
    }

    fn panes_mut(&mut self) -> [&mut dyn Pane<'a>; 2] {
        [&mut self.notes, &mut self.status]
    }

    fn editing(&self) -> bool {
        self.notes.notes_mode() == NotesMode::Edit
    }

    fn set_notes_mode(&mut self, mode: NotesMode) {
        tracing::debug!(mode = mode.name(), "notes mode");
        self.notes.update_mode(mode.name());
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = map_key(key, self.editing()) {
            self.handle_key_action(action);
        }
    }

    /// Apply a mapped key action to the shared data and pane modes.
    fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Up => self.data.borrow_mut().select_previous(),
            KeyAction::Down => self.data.borrow_mut().select_next(),
            KeyAction::ToggleMode => {
                let next = match self.notes.notes_mode() {
                    NotesMode::View => NotesMode::Edit,
                    NotesMode::Edit => NotesMode::View,
                };
                self.set_notes_mode(next);
            }
            KeyAction::NewNote => {
                self.data.borrow_mut().add_note();
                self.set_notes_mode(NotesMode::Edit);
            }
            KeyAction::Input(c) => {
                if self.editing() {
                    self.data.borrow_mut().push_char(c);
                }
            }
            KeyAction::Backspace => {
                if self.editing() {
                    self.data.borrow_mut().pop_char();
                }
            }
            KeyAction::Cancel => {
                self.data.borrow_mut().clear_status();
                if self.editing() {
                    self.set_notes_mode(NotesMode::View);
                }
            }
            KeyAction::Quit => {
                self.running = false;
            }
        }
    }
}

/// Fixed split: notes take everything above a one-row status bar. When the
/// area is too short for both, the status bar gets zero bounds and draws
/// nothing.
fn layout(area: Rect) -> (Bounds, Bounds) {
    let x = f32::from(area.x);
    let y = f32::from(area.y);
    let width = f32::from(area.width);
    let height = f32::from(area.height);

    if area.height < MIN_HEIGHT {
        return (Bounds::new(x, y, width, height), Bounds::default());
    }
    (
        Bounds::new(x, y, width, height - 1.0),
        Bounds::new(x, y + height - 1.0, width, 1.0),
    )
}

/// Load the shared data, starting fresh when nothing is saved or the saved
/// file is unreadable.
///
/// The flag is false when saving on exit would overwrite an unreadable file
/// that could not be backed up first.
fn load_data(store: &dyn DataStore, config: &Config) -> (AppData, bool) {
    let e = match store.load() {
        Ok(Some(data)) => return (data, true),
        Ok(None) => return (AppData::new(config.title.clone()), true),
        Err(e) => e,
    };

    tracing::warn!("failed to load app data: {}", e);
    let mut data = AppData::new(config.title.clone());
    match store.backup() {
        Ok(Some(path)) => {
            data.set_status(format!(
                "Failed to load notes ({}), copy kept at {}",
                e,
                path.display()
            ));
            (data, true)
        }
        Ok(None) => {
            data.set_status(format!("Failed to load notes: {}", e));
            (data, true)
        }
        Err(backup_err) => {
            tracing::warn!("failed to back up app data: {}", backup_err);
            data.set_status(format!("Failed to load notes: {}; not saving", e));
            (data, false)
        }
    }
}

fn save_data(store: &dyn DataStore, data: &RefCell<AppData>) -> Result<(), StoreError> {
    let mut data = data.borrow_mut();
    data.saved_at = Some(Utc::now());
    store.save(&data)?;
    tracing::info!(notes = data.notes.len(), "app data saved");
    Ok(())
}

/// Set up terminal, run the TUI app, and restore terminal on exit.
pub fn run(config: Config, config_dir: PathBuf) -> anyhow::Result<()> {
    let store = FileStore::new(&config_dir);
    let (data, can_save) = load_data(&store, &config);
    let data = RefCell::new(data);

    crossterm::terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(&data, &config);
    let result = app.run(&mut terminal, Duration::from_millis(config.tick_rate_ms));

    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen
    )?;

    if can_save {
        save_data(&store, &data)?;
    } else {
        tracing::warn!("skipping save to keep the unreadable data file");
    }
    result
}
