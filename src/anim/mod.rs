//! Feedback animation: the edit sheet slide and the cell burst.
//!
//! The animator is driven by the host clock (`now_ms`) and by editor
//! [`Effect`]s. Completions come back out of [`Animator::tick`] as
//! [`AnimEvent`]s; the host routes `SheetHidden` to the editor so session
//! teardown happens only after the sheet is out of view.

pub mod burst;
pub mod sheet;

pub use burst::{Burst, BurstFrame};
pub use sheet::{Sheet, SheetEvent};

use crate::editor::Effect;
use crate::model::{AnimationConfig, CellKey};

/// Animation completion, fed back to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimEvent {
    SheetShown,
    SheetHidden,
    BurstFinished { cell: CellKey },
}

#[derive(Debug, Clone)]
pub struct Animator {
    sheet: Sheet,
    burst: Option<Burst>,
    burst_ms: u64,
    keyboard_height: f32,
    note_focus: bool,
}

impl Animator {
    pub fn new(config: &AnimationConfig) -> Self {
        Animator {
            sheet: Sheet::new(config),
            burst: None,
            burst_ms: config.burst_ms,
            keyboard_height: 0.0,
            note_focus: false,
        }
    }

    /// React to an editor transition
    pub fn apply(&mut self, effect: Effect, now_ms: u64) {
        match effect {
            Effect::ShowSheet => self.sheet.show(now_ms),
            Effect::HideSheet => self.sheet.hide(now_ms),
            Effect::Burst { cell, glyph } => {
                self.burst = Some(Burst::new(cell, glyph, now_ms, self.burst_ms));
            }
            Effect::NoteFocus(focused) => self.note_focus = focused,
        }
    }

    pub fn apply_all(&mut self, effects: impl IntoIterator<Item = Effect>, now_ms: u64) {
        for effect in effects {
            self.apply(effect, now_ms);
        }
    }

    /// Advance both animations to `now_ms` and collect completions
    pub fn tick(&mut self, now_ms: u64) -> Vec<AnimEvent> {
        let mut events = Vec::new();
        match self.sheet.tick(now_ms) {
            Some(SheetEvent::Shown) => events.push(AnimEvent::SheetShown),
            Some(SheetEvent::Hidden) => events.push(AnimEvent::SheetHidden),
            None => {}
        }
        if let Some(burst) = &self.burst
            && burst.is_finished(now_ms)
        {
            events.push(AnimEvent::BurstFinished { cell: burst.cell });
            self.burst = None;
        }
        for ev in &events {
            tracing::trace!(event = ?ev, now_ms, "animation complete");
        }
        events
    }

    /// Host keyboard height signal (0 when hidden)
    pub fn set_keyboard_height(&mut self, height: f32) {
        self.keyboard_height = height.max(0.0);
    }

    /// Lift applied to the sheet: the keyboard height while a note is
    /// being edited, otherwise nothing
    pub fn keyboard_bias(&self) -> f32 {
        if self.note_focus {
            self.keyboard_height
        } else {
            0.0
        }
    }

    pub fn sheet_progress(&self) -> f32 {
        self.sheet.progress()
    }

    /// Sheet displacement below its resting place, for a sheet `height` tall
    pub fn sheet_offset(&self, height: f32) -> f32 {
        self.sheet.offset(height, self.keyboard_bias())
    }

    /// Current burst frame for `cell`, if one is playing there
    pub fn burst_at(&self, cell: CellKey, now_ms: u64) -> Option<BurstFrame> {
        self.burst
            .as_ref()
            .filter(|b| b.cell == cell)
            .and_then(|b| b.frame(now_ms))
    }

    pub fn is_animating(&self) -> bool {
        self.sheet.is_moving() || self.burst.is_some()
    }
}
