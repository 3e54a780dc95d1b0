//! The pane contract: externally positioned, mode-aware drawable regions.
//!
//! A pane is driven by its container once per frame. The container may call
//! [`Pane::update_dimensions`] and [`Pane::update_mode`] any number of times,
//! then calls [`Pane::draw_pane`] exactly once. The default `draw_pane` runs
//! `start_pane`, `draw` and `finish_pane` in that order.

pub mod mode;

pub use mode::PaneMode;

use std::cell::RefCell;

use ratatui::prelude::*;

use crate::data::AppData;

/// Screen-space bounds of a pane, in window-relative units.
///
/// Values are stored exactly as given. Nothing here clamps or validates
/// against the window; that is the container's job.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when there is nothing to draw into (zero, negative or NaN size).
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Convert to terminal cells. Fractions truncate; negative and NaN
    /// values become zero, oversized values saturate at `u16::MAX`.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            to_cells(self.x),
            to_cells(self.y),
            to_cells(self.width),
            to_cells(self.height),
        )
    }
}

fn to_cells(v: f32) -> u16 {
    // float -> int `as` casts saturate and map NaN to 0
    v as u16
}

/// Where a pane is within its per-frame render lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LifecyclePhase {
    #[default]
    Idle,
    Starting,
    Drawing,
    Finishing,
}

impl std::fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecyclePhase::Idle => write!(f, "idle"),
            LifecyclePhase::Starting => write!(f, "starting"),
            LifecyclePhase::Drawing => write!(f, "drawing"),
            LifecyclePhase::Finishing => write!(f, "finishing"),
        }
    }
}

/// State shared by every pane: bounds, mode, lifecycle phase and a borrowed
/// handle to the application data.
///
/// There is no `Default`: a pane cannot exist without the shared state, and
/// the `'a` lifetime keeps the pane from outliving it.
#[derive(Debug)]
pub struct PaneBase<'a> {
    bounds: Bounds,
    mode: String,
    phase: LifecyclePhase,
    app_data: &'a RefCell<AppData>,
}

impl<'a> PaneBase<'a> {
    pub fn new(app_data: &'a RefCell<AppData>) -> Self {
        Self {
            bounds: Bounds::default(),
            mode: String::new(),
            phase: LifecyclePhase::Idle,
            app_data,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub fn app_data(&self) -> &'a RefCell<AppData> {
        self.app_data
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn set_mode(&mut self, mode: impl Into<String>) {
        self.mode = mode.into();
    }

    /// The pane's bounds in cells, clipped to the buffer.
    pub fn area_in(&self, buf: &Buffer) -> Rect {
        self.bounds.to_rect().intersection(*buf.area())
    }

    fn enter(&mut self, phase: LifecyclePhase) {
        tracing::trace!(%phase, mode = %self.mode, "pane lifecycle");
        self.phase = phase;
    }
}

/// A drawable region driven by a container, one `draw_pane` per frame.
///
/// Implementors supply [`Pane::draw`] and access to their [`PaneBase`]; the
/// setup and teardown hooks default to no-ops. Anything `start_pane` changes
/// in shared rendering state must be restored by `finish_pane`, so panes can
/// be drawn in any order.
///
/// None of these methods fail. Fallible work inside a hook is handled by the
/// implementor and must not touch bounds or mode.
pub trait Pane<'a> {
    fn base(&self) -> &PaneBase<'a>;
    fn base_mut(&mut self) -> &mut PaneBase<'a>;

    /// Overwrite the bounds. No clamping; negative sizes are kept as given.
    fn update_dimensions(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.base_mut().set_bounds(Bounds::new(x, y, width, height));
    }

    /// Replace the mode name. Unknown names are accepted.
    fn update_mode(&mut self, mode: &str) {
        self.base_mut().set_mode(mode);
    }

    fn bounds(&self) -> Bounds {
        self.base().bounds()
    }

    fn mode<'s>(&'s self) -> &'s str
    where
        'a: 's,
    {
        self.base().mode()
    }

    /// Render one frame: setup, content, teardown.
    fn draw_pane(&mut self, buf: &mut Buffer) {
        self.base_mut().enter(LifecyclePhase::Starting);
        self.start_pane(buf);
        self.base_mut().enter(LifecyclePhase::Drawing);
        self.draw(buf);
        self.base_mut().enter(LifecyclePhase::Finishing);
        self.finish_pane(buf);
        self.base_mut().enter(LifecyclePhase::Idle);
    }

    fn start_pane(&mut self, _buf: &mut Buffer) {}

    fn draw(&mut self, buf: &mut Buffer);

    fn finish_pane(&mut self, _buf: &mut Buffer) {}
}
