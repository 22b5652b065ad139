//! Fade module - looping opacity animation
//!
//! A [`FadeLoop`] plays a sequence of [`FadeTo`] steps forever. Each step
//! interpolates linearly from whatever opacity it started at to its target,
//! so the first pass starts from the initial opacity and later passes start
//! from the last step's target.

use arrayvec::ArrayVec;

use crate::types::{FADE_DOWN_MS, FADE_HIGH, FADE_LOW, FADE_UP_MS};

/// Maximum number of steps in one loop.
pub const MAX_FADE_STEPS: usize = 4;

/// Fade to `target` opacity over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeTo {
    pub target: u8,
    pub duration_ms: u32,
}

impl FadeTo {
    pub const fn new(target: u8, duration_ms: u32) -> Self {
        Self {
            target,
            duration_ms,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FadeLoop {
    steps: ArrayVec<FadeTo, MAX_FADE_STEPS>,
    step: usize,
    elapsed_ms: u32,
    from: u8,
    opacity: u8,
}

impl FadeLoop {
    /// Build a loop from up to [`MAX_FADE_STEPS`] steps; extra steps are dropped.
    pub fn new(initial: u8, steps: &[FadeTo]) -> Self {
        let steps: ArrayVec<FadeTo, MAX_FADE_STEPS> =
            steps.iter().copied().take(MAX_FADE_STEPS).collect();
        Self {
            steps,
            step: 0,
            elapsed_ms: 0,
            from: initial,
            opacity: initial,
        }
    }

    /// The highlight pulse: down to 64 over 2s, back up to 192 over 1s.
    pub fn pulse() -> Self {
        Self::new(
            255,
            &[
                FadeTo::new(FADE_LOW, FADE_DOWN_MS),
                FadeTo::new(FADE_HIGH, FADE_UP_MS),
            ],
        )
    }

    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    /// Advance the animation by `dt_ms` and return the new opacity.
    ///
    /// Time left over at the end of a step carries into the next one, and
    /// whole cycles inside a long `dt_ms` are skipped without changing phase.
    pub fn advance(&mut self, dt_ms: u32) -> u8 {
        let Some(last) = self.steps.last().copied() else {
            return self.opacity;
        };

        let cycle_ms: u64 = self.steps.iter().map(|s| u64::from(s.duration_ms)).sum();
        if cycle_ms == 0 {
            self.step = 0;
            self.elapsed_ms = 0;
            self.from = last.target;
            self.opacity = last.target;
            return self.opacity;
        }

        let mut remaining = u64::from(dt_ms);
        let mut wrapped = false;
        loop {
            let step = self.steps[self.step];
            let left = u64::from(step.duration_ms - self.elapsed_ms);
            if remaining < left {
                // remaining < left <= u32::MAX
                self.elapsed_ms += remaining as u32;
                self.opacity = lerp(self.from, step.target, self.elapsed_ms, step.duration_ms);
                return self.opacity;
            }

            remaining -= left;
            self.opacity = step.target;
            self.from = step.target;
            self.elapsed_ms = 0;
            self.step = (self.step + 1) % self.steps.len();

            // At a step boundary a full cycle brings the loop back to the
            // same state, so only the remainder matters.
            if !wrapped {
                remaining %= cycle_ms;
                wrapped = true;
            }
            if remaining == 0 {
                return self.opacity;
            }
        }
    }
}

fn lerp(from: u8, to: u8, elapsed: u32, duration: u32) -> u8 {
    if duration == 0 {
        return to;
    }
    let from = from as i64;
    let to = to as i64;
    let v = from + (to - from) * elapsed as i64 / duration as i64;
    v.clamp(0, 255) as u8
}
