//! Scripted circle→rectangle derivation sequencer.
//!
//! Purpose
//! - Replay a fixed timeline on one trigger: hide the circle, partition it,
//!   interleave the rows with their outline colors, interlock them into the
//!   exact rectangle, then show the rectangle alone and finally side by side
//!   with the circle.
//! - Stay correct under re-trigger and reset: every queued step carries the
//!   generation it was scheduled under and is dropped unapplied if a reset
//!   has bumped the counter since.
//!
//! The owner injects time (`tick(now)` with any monotonic clock, `next_due`
//! for the next deadline); the sequencer never reads a wall clock, so runs
//! are deterministic.

mod types;

pub use types::{LayoutMode, Phase, Script};
use types::{Scheduled, StepEffect};

use std::time::Duration;

use crate::layout::{arrange_exact_rectangle, arrange_interleaved_outlined};
use crate::sector::{partition_circle, SceneCfg, Sector};

/// One page's derivation state: the sector set, the visibility flags, and the
/// queue of pending scripted steps.
#[derive(Clone, Debug)]
pub struct Timeline {
    cfg: SceneCfg,
    script: Script,
    count: usize,
    generation: u64,
    queue: Vec<Scheduled>,
    phase: Phase,
    layout_mode: LayoutMode,
    sectors: Vec<Sector>,
    show_circle: bool,
    show_rectangle_only: bool,
    show_side_by_side: bool,
    animating: bool,
}

impl Timeline {
    /// Timeline over `count` sectors (128 in the reference flow).
    pub fn new(count: usize, cfg: SceneCfg) -> Self {
        Self::with_script(count, cfg, Script::default())
    }

    pub fn with_script(count: usize, cfg: SceneCfg, script: Script) -> Self {
        Self {
            cfg,
            script,
            count,
            generation: 0,
            queue: Vec::new(),
            phase: Phase::Idle,
            layout_mode: LayoutMode::Circle,
            sectors: Vec::new(),
            show_circle: true,
            show_rectangle_only: false,
            show_side_by_side: false,
            animating: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn show_circle(&self) -> bool {
        self.show_circle
    }

    pub fn show_rectangle_only(&self) -> bool {
        self.show_rectangle_only
    }

    pub fn show_side_by_side(&self) -> bool {
        self.show_side_by_side
    }

    /// Current run generation. Bumped by `trigger` and `reset`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start the scripted run. A no-op while a run is already animating, so
    /// overlapping timelines cannot exist.
    pub fn trigger(&mut self, now: Duration) {
        if self.animating {
            return;
        }
        self.generation += 1;
        self.animating = true;
        self.show_rectangle_only = false;
        let s = self.script;
        self.schedule(now + s.hide_circle, StepEffect::HideCircle);
        self.schedule(now + s.partition, StepEffect::Partition);
        self.schedule(now + s.interleave, StepEffect::Interleave);
        self.schedule(now + s.interlock, StepEffect::Interlock);
        self.schedule(now + s.rectangle_only, StepEffect::RectangleOnly);
        self.schedule(now + s.side_by_side, StepEffect::SideBySide);
        self.schedule(now + s.done, StepEffect::Done);
        // The zero-offset step lands with the trigger itself.
        self.tick(now);
    }

    /// Force the state back to the idle circle. Works at any time; every step
    /// still in flight is stranded on the old generation and will be dropped.
    pub fn reset(&mut self, now: Duration) {
        self.generation += 1;
        self.phase = Phase::Idle;
        self.layout_mode = LayoutMode::Circle;
        self.sectors.clear();
        self.show_circle = true;
        self.show_rectangle_only = false;
        self.show_side_by_side = false;
        self.animating = true;
        self.schedule(now + self.script.reset_settle, StepEffect::ResetSettled);
    }

    /// Apply every step due at or before `now`, earliest first. Stale steps
    /// (scheduled under an older generation) are discarded, never applied.
    /// Returns the number of steps applied.
    pub fn tick(&mut self, now: Duration) -> usize {
        let mut applied = 0;
        loop {
            let next = self
                .queue
                .iter()
                .enumerate()
                .filter(|(_, s)| s.due <= now)
                .min_by_key(|(_, s)| s.due)
                .map(|(i, _)| i);
            let Some(i) = next else { break };
            let step = self.queue.remove(i);
            if step.generation == self.generation {
                self.apply(step.effect);
                applied += 1;
            }
        }
        applied
    }

    /// Earliest deadline still able to fire, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue
            .iter()
            .filter(|s| s.generation == self.generation)
            .map(|s| s.due)
            .min()
    }

    fn schedule(&mut self, due: Duration, effect: StepEffect) {
        self.queue.push(Scheduled {
            due,
            generation: self.generation,
            effect,
        });
    }

    fn apply(&mut self, effect: StepEffect) {
        match effect {
            StepEffect::HideCircle => {
                self.show_circle = false;
                self.phase = Phase::Partitioning;
            }
            StepEffect::Partition => {
                self.sectors = partition_circle(self.count, &self.cfg);
                self.layout_mode = LayoutMode::Circle;
            }
            StepEffect::Interleave => {
                let fresh = partition_circle(self.count, &self.cfg);
                self.sectors = arrange_interleaved_outlined(&fresh, &self.cfg);
                self.layout_mode = LayoutMode::Rectangle;
                self.phase = Phase::Interleaving;
            }
            StepEffect::Interlock => {
                // Keep the row coloring from the previous step; rebuild it if
                // the set emptied in between.
                if self.sectors.is_empty() {
                    let fresh = partition_circle(self.count, &self.cfg);
                    self.sectors = arrange_interleaved_outlined(&fresh, &self.cfg);
                }
                self.sectors = arrange_exact_rectangle(&self.sectors, &self.cfg);
                self.layout_mode = LayoutMode::Rectangle;
                self.phase = Phase::Interlocking;
            }
            StepEffect::RectangleOnly => {
                self.show_rectangle_only = true;
                self.show_circle = false;
                self.show_side_by_side = false;
                self.sectors.clear();
                self.phase = Phase::RectangleOnly;
            }
            StepEffect::SideBySide => {
                self.show_side_by_side = true;
                self.show_circle = true;
                self.show_rectangle_only = true;
                self.phase = Phase::SideBySide;
            }
            StepEffect::Done => {
                self.animating = false;
                self.phase = Phase::Idle;
            }
            StepEffect::ResetSettled => {
                self.animating = false;
            }
        }
    }
}
