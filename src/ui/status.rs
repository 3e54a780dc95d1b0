use std::cell::RefCell;

use ratatui::prelude::*;

use crate::data::AppData;
use crate::keys::KeyAction;
use crate::pane::{Pane, PaneBase, PaneMode};

/// How much the status bar shows. Unknown mode names render as `Full`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusMode {
    #[default]
    Full,
    Compact,
}

impl PaneMode for StatusMode {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "full" => Some(StatusMode::Full),
            "compact" => Some(StatusMode::Compact),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            StatusMode::Full => "full",
            StatusMode::Compact => "compact",
        }
    }
}

/// Key hints shown in full mode.
const HINTS: &[(KeyAction, &str)] = &[
    (KeyAction::ToggleMode, "Mode"),
    (KeyAction::NewNote, "New"),
    (KeyAction::Cancel, "Back"),
    (KeyAction::Quit, "Quit"),
];

/// Single-row bar: title, note position, and either the status message or
/// the key hints.
pub struct StatusPane<'a> {
    base: PaneBase<'a>,
    area: Option<Rect>,
}

impl<'a> StatusPane<'a> {
    pub fn new(app_data: &'a RefCell<AppData>) -> Self {
        Self {
            base: PaneBase::new(app_data),
            area: None,
        }
    }
}

impl<'a> Pane<'a> for StatusPane<'a> {
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
        buf.set_style(area, Style::default().bg(Color::Black).fg(Color::Gray));
        self.area = Some(area);
    }

    fn draw(&mut self, buf: &mut Buffer) {
        let Some(area) = self.area else {
            return;
        };
        let Ok(data) = self.base.app_data().try_borrow() else {
            tracing::warn!("app data is mutably borrowed, skipping status content");
            return;
        };
        let mode = StatusMode::parse_or_default(self.base.mode());

        let mut spans = vec![Span::styled(
            format!(" {} ", data.title),
            Style::default().add_modifier(Modifier::BOLD),
        )];

        if mode == StatusMode::Full {
            let position = if data.notes.is_empty() {
                "no notes".to_string()
            } else {
                format!("note {}/{}", data.selected + 1, data.notes.len())
            };
            spans.push(Span::styled(
                position,
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        if let Some(status) = &data.status {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                status.clone(),
                Style::default().fg(Color::Yellow),
            ));
        } else if mode == StatusMode::Full {
            for (action, desc) in HINTS {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    action.key_label(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(":"));
                spans.push(Span::raw(*desc));
            }
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }

    fn finish_pane(&mut self, _buf: &mut Buffer) {
        self.area = None;
    }
}
