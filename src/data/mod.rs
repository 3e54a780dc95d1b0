pub mod storage;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Application data shared by every pane.
///
/// One instance lives for the whole session, wrapped in a `RefCell` owned by
/// the caller of `app::run`. Panes hold a borrowed reference to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    pub title: String,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub selected: usize,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,

    /// Transient one-line message for the status bar.
    #[serde(skip)]
    pub status: Option<String>,
}

impl AppData {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            notes: Vec::new(),
            selected: 0,
            saved_at: None,
            status: None,
        }
    }

    pub fn select_next(&mut self) {
        if self.notes.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.notes.len();
    }

    pub fn select_previous(&mut self) {
        if self.notes.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.notes.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Append an empty note and select it.
    pub fn add_note(&mut self) {
        self.notes.push(String::new());
        self.selected = self.notes.len() - 1;
    }

    /// Append a character to the selected note, creating one if none exist.
    pub fn push_char(&mut self, c: char) {
        if self.notes.is_empty() {
            self.add_note();
        }
        self.clamp_selection();
        self.notes[self.selected].push(c);
    }

    pub fn pop_char(&mut self) {
        self.clamp_selection();
        if let Some(note) = self.notes.get_mut(self.selected) {
            note.pop();
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Keep `selected` in range after loading or removing notes.
    pub fn clamp_selection(&mut self) {
        if !self.notes.is_empty() && self.selected >= self.notes.len() {
            self.selected = self.notes.len() - 1;
        }
    }
}
