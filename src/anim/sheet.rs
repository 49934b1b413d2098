use crate::model::AnimationConfig;

/// Spring integration step ceiling, in ms
const MAX_STEP_MS: u64 = 4;
/// Longest gap integrated in one tick; anything beyond is treated as this
const MAX_TICK_MS: u64 = 1000;
const SETTLE_DISTANCE: f32 = 0.001;
const SETTLE_VELOCITY: f32 = 0.01;

/// Upper bounds that keep the fixed-step integration stable. Past these a
/// single step overshoots further than it corrects and progress diverges.
pub const MAX_SPRING_DAMPING: f32 = 2000.0 / MAX_STEP_MS as f32;
pub const MAX_SPRING_STIFFNESS: f32 = MAX_SPRING_DAMPING * MAX_SPRING_DAMPING;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Idle,
    /// Spring toward fully shown. Velocity is in progress units per second.
    Showing { velocity: f32, last_ms: u64 },
    /// Fixed-duration ease-out from `from` down to hidden
    Hiding { from: f32, start_ms: u64 },
}

/// Completion reported by [`Sheet::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetEvent {
    Shown,
    Hidden,
}

/// Position of the edit sheet. `progress` runs from 0.0 (hidden below the
/// viewport) to 1.0 (fully shown).
#[derive(Debug, Clone)]
pub struct Sheet {
    progress: f32,
    motion: Motion,
    stiffness: f32,
    damping: f32,
    hide_ms: u64,
}

impl Sheet {
    pub fn new(config: &AnimationConfig) -> Self {
        Sheet {
            progress: 0.0,
            motion: Motion::Idle,
            stiffness: config.spring_stiffness,
            damping: config.spring_damping,
            hide_ms: config.sheet_hide_ms,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_moving(&self) -> bool {
        self.motion != Motion::Idle
    }

    pub fn is_hiding(&self) -> bool {
        matches!(self.motion, Motion::Hiding { .. })
    }

    /// Start (or keep) springing toward shown, from wherever the sheet is.
    /// A hide in progress is abandoned without reporting completion.
    pub fn show(&mut self, now_ms: u64) {
        let velocity = match self.motion {
            Motion::Showing { velocity, .. } => velocity,
            _ => 0.0,
        };
        self.motion = Motion::Showing {
            velocity,
            last_ms: now_ms,
        };
    }

    /// Start the fixed-duration close from the current position.
    pub fn hide(&mut self, now_ms: u64) {
        self.motion = Motion::Hiding {
            from: self.progress,
            start_ms: now_ms,
        };
    }

    /// Advance to `now_ms`. Returns the completion that happened, if any.
    pub fn tick(&mut self, now_ms: u64) -> Option<SheetEvent> {
        match self.motion {
            Motion::Idle => None,
            Motion::Showing { velocity, last_ms } => {
                let elapsed = now_ms.saturating_sub(last_ms).min(MAX_TICK_MS);
                let (progress, velocity) = self.integrate(self.progress, velocity, elapsed);
                self.progress = progress;
                if (1.0 - progress).abs() < SETTLE_DISTANCE && velocity.abs() < SETTLE_VELOCITY {
                    self.progress = 1.0;
                    self.motion = Motion::Idle;
                    Some(SheetEvent::Shown)
                } else {
                    self.motion = Motion::Showing {
                        velocity,
                        last_ms: now_ms,
                    };
                    None
                }
            }
            Motion::Hiding { from, start_ms } => {
                let elapsed = now_ms.saturating_sub(start_ms);
                if elapsed >= self.hide_ms {
                    self.progress = 0.0;
                    self.motion = Motion::Idle;
                    Some(SheetEvent::Hidden)
                } else {
                    let t = elapsed as f32 / self.hide_ms as f32;
                    self.progress = from * (1.0 - ease_out_cubic(t));
                    None
                }
            }
        }
    }

    /// Rows (or any unit) the sheet sits below its resting position.
    /// `lift` raises it further, e.g. above an on-screen keyboard.
    pub fn offset(&self, height: f32, lift: f32) -> f32 {
        (1.0 - self.progress) * height - lift
    }

    fn integrate(&self, mut x: f32, mut v: f32, elapsed_ms: u64) -> (f32, f32) {
        let mut remaining = elapsed_ms;
        while remaining > 0 {
            let step = remaining.min(MAX_STEP_MS);
            let dt = step as f32 / 1000.0;
            let accel = self.stiffness * (1.0 - x) - self.damping * v;
            v += accel * dt;
            x += v * dt;
            remaining -= step;
        }
        (x, v)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}
