//! Data types for the derivation timeline.
//!
//! Kept small and explicit so the driver in `mod.rs` is easy to read.

use std::time::Duration;

/// Which representation the page should render the sector set in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Circle,
    Rectangle,
}

/// Where the scripted derivation currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Partitioning,
    Interleaving,
    Interlocking,
    RectangleOnly,
    SideBySide,
}

/// Step offsets relative to trigger time.
///
/// Defaults follow the reference flow; they are configuration, not geometry,
/// so products can retune the pacing.
#[derive(Clone, Copy, Debug)]
pub struct Script {
    pub hide_circle: Duration,
    pub partition: Duration,
    pub interleave: Duration,
    pub interlock: Duration,
    pub rectangle_only: Duration,
    pub side_by_side: Duration,
    pub done: Duration,
    /// Settle delay after `reset` before `is_animating` clears.
    pub reset_settle: Duration,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            hide_circle: Duration::ZERO,
            partition: Duration::from_millis(800),
            interleave: Duration::from_millis(1500),
            interlock: Duration::from_millis(2500),
            rectangle_only: Duration::from_millis(3500),
            side_by_side: Duration::from_millis(5500),
            done: Duration::from_millis(6000),
            reset_settle: Duration::from_millis(2000),
        }
    }
}

/// Effect a scheduled step applies: one layout call and/or flag flips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StepEffect {
    HideCircle,
    Partition,
    Interleave,
    Interlock,
    RectangleOnly,
    SideBySide,
    Done,
    ResetSettled,
}

/// A step waiting to fire. It is applied only if `generation` still matches
/// the timeline's current generation at fire time; otherwise it is dropped.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Scheduled {
    pub due: Duration,
    pub generation: u64,
    pub effect: StepEffect,
}
