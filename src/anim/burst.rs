use crate::model::CellKey;

/// Scale reached at the end of a burst (starts at 1.0)
pub const BURST_MAX_SCALE: f32 = 2.0;

/// One frame of a burst: how big and how opaque the glyph is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstFrame {
    pub glyph: &'static str,
    pub scale: f32,
    pub opacity: f32,
}

/// A one-shot scale-up and fade-out of a mood glyph over a cell
#[derive(Debug, Clone, PartialEq)]
pub struct Burst {
    pub cell: CellKey,
    pub glyph: &'static str,
    start_ms: u64,
    duration_ms: u64,
}

impl Burst {
    pub fn new(cell: CellKey, glyph: &'static str, start_ms: u64, duration_ms: u64) -> Self {
        Burst {
            cell,
            glyph,
            start_ms,
            duration_ms: duration_ms.max(1),
        }
    }

    /// Fraction of the burst elapsed, clamped to 0..=1
    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f32 / self.duration_ms as f32).min(1.0)
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Frame at `now_ms`, `None` once the burst has played out
    pub fn frame(&self, now_ms: u64) -> Option<BurstFrame> {
        if self.is_finished(now_ms) {
            return None;
        }
        let t = self.progress(now_ms);
        Some(BurstFrame {
            glyph: self.glyph,
            scale: 1.0 + (BURST_MAX_SCALE - 1.0) * t,
            opacity: 1.0 - t,
        })
    }
}
