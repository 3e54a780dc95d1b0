use std::cell::RefCell;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::data::AppData;
use crate::pane::{Pane, PaneBase, PaneMode};

/// Behavior of the notes pane. Unknown mode names render as `View`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotesMode {
    #[default]
    View,
    Edit,
}

impl PaneMode for NotesMode {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "view" => Some(NotesMode::View),
            "edit" => Some(NotesMode::Edit),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            NotesMode::View => "view",
            NotesMode::Edit => "edit",
        }
    }
}

/// Per-frame geometry, resolved in `start_pane` and dropped in `finish_pane`.
#[derive(Debug, Clone, Copy)]
struct NotesFrame {
    area: Rect,
    inner: Rect,
    mode: NotesMode,
}

/// Bordered list of the shared notes, with a cursor on the selected note in
/// edit mode.
pub struct NotesPane<'a> {
    base: PaneBase<'a>,
    frame: Option<NotesFrame>,
}

impl<'a> NotesPane<'a> {
    pub fn new(app_data: &'a RefCell<AppData>) -> Self {
        Self {
            base: PaneBase::new(app_data),
            frame: None,
        }
    }

    pub fn notes_mode(&self) -> NotesMode {
        NotesMode::parse_or_default(self.base.mode())
    }
}

impl<'a> Pane<'a> for NotesPane<'a> {
    fn base(&self) -> &PaneBase<'a> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PaneBase<'a> {
        &mut self.base
    }

    fn start_pane(&mut self, buf: &mut Buffer) {
        if self.base.bounds().is_empty() {
            return;
        }
        let area = self.base.area_in(buf);
        if area.is_empty() {
            return;
        }

        let mode = self.notes_mode();
        let title = match self.base.app_data().try_borrow() {
            Ok(data) => format!(" {} ", data.title),
            Err(_) => String::new(),
        };
        let border = match mode {
            NotesMode::View => Style::default(),
            NotesMode::Edit => Style::default().fg(Color::Yellow),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title);
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);

        self.frame = Some(NotesFrame { area, inner, mode });
    }

    fn draw(&mut self, buf: &mut Buffer) {
        let Some(frame) = self.frame else {
            return;
        };
        if frame.inner.is_empty() {
            return;
        }
        let Ok(data) = self.base.app_data().try_borrow() else {
            tracing::warn!("app data is mutably borrowed, skipping notes content");
            return;
        };

        if data.notes.is_empty() {
            let hint = Line::from(Span::styled(
                "No notes yet. Press n to add one.",
                Style::default().add_modifier(Modifier::DIM),
            ));
            Paragraph::new(hint).render(frame.inner, buf);
            return;
        }

        let items: Vec<ListItem<'_>> = data
            .notes
            .iter()
            .enumerate()
            .map(|(i, note)| {
                if frame.mode == NotesMode::Edit && i == data.selected {
                    ListItem::new(format!("{}\u{258f}", note))
                } else {
                    ListItem::new(note.as_str())
                }
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("\u{25b8} ");
        let mut state = ListState::default();
        state.select(Some(data.selected));
        StatefulWidget::render(list, frame.inner, buf, &mut state);
    }

    fn finish_pane(&mut self, buf: &mut Buffer) {
        let Some(frame) = self.frame.take() else {
            return;
        };

        // Mode badge on the bottom border, right-aligned
        let badge = format!(" {} ", frame.mode.name().to_uppercase());
        let width = badge.len() as u16;
        if frame.area.height < 2 || frame.area.width < width + 2 {
            return;
        }
        let style = match frame.mode {
            NotesMode::View => Style::default().add_modifier(Modifier::DIM),
            NotesMode::Edit => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        };
        buf.set_string(
            frame.area.right() - width - 1,
            frame.area.bottom() - 1,
            badge,
            style,
        );
    }
}
