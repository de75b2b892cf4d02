//! Per-sector pointer interactions: drag deltas and discrete rotation.
//!
//! Click vs double-click is resolved with a debounce window instead of a UI
//! framework's event-detail counting: the first click arms a pending small
//! turn; a second click on the same sector inside the window cancels it and
//! applies the quarter turn instead. No collision or snapping logic.

use std::f64::consts::{FRAC_PI_2, PI};
use std::time::Duration;

use crate::sector::{Sector, SectorId};
use crate::Vec2;

/// Rotation applied by a plain click (10°).
pub const CLICK_TURN: f64 = PI / 18.0;
/// Rotation applied by a double click (90°).
pub const DOUBLE_CLICK_TURN: f64 = FRAC_PI_2;
/// Default click/double-click discrimination window.
pub const CLICK_WINDOW: Duration = Duration::from_millis(275);

/// Move one sector by a pointer delta, leaving the rest untouched.
/// Returns false when the id is unknown.
pub fn drag_by(sectors: &mut [Sector], id: SectorId, delta: Vec2<f64>) -> bool {
    match sectors.iter_mut().find(|s| s.id == id) {
        Some(s) => {
            s.pos += delta;
            true
        }
        None => false,
    }
}

/// Rotate one sector in place. Returns false when the id is unknown.
pub fn rotate_by(sectors: &mut [Sector], id: SectorId, radians: f64) -> bool {
    match sectors.iter_mut().find(|s| s.id == id) {
        Some(s) => {
            s.rotation += radians;
            true
        }
        None => false,
    }
}

/// Debounced click-to-rotate resolver.
///
/// Owns no sector data; it only decides which turn a click stream produces.
/// Pending clicks on different sectors are independent.
#[derive(Clone, Debug)]
pub struct ClickRotator {
    window: Duration,
    pending: Vec<(SectorId, Duration)>,
}

impl Default for ClickRotator {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickRotator {
    pub fn new() -> Self {
        Self::with_window(CLICK_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            pending: Vec::new(),
        }
    }

    /// Record a click on `id` at `now`.
    ///
    /// Returns the turn to apply immediately (a completed double click), or
    /// `None` when the click is armed pending the window. Two clicks farther
    /// apart than the window stay two single clicks.
    pub fn click(&mut self, id: SectorId, now: Duration) -> Option<f64> {
        if let Some(i) = self
            .pending
            .iter()
            .position(|&(pid, t0)| pid == id && now.saturating_sub(t0) <= self.window)
        {
            self.pending.remove(i);
            return Some(DOUBLE_CLICK_TURN);
        }
        self.pending.push((id, now));
        None
    }

    /// Emit the single-click turns whose windows expired by `now`.
    pub fn poll(&mut self, now: Duration) -> Vec<(SectorId, f64)> {
        let window = self.window;
        let mut fired = Vec::new();
        self.pending.retain(|&(id, t0)| {
            if now.saturating_sub(t0) > window {
                fired.push((id, CLICK_TURN));
                false
            } else {
                true
            }
        });
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sector::{partition_circle, SceneCfg};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn drag_moves_only_the_target() {
        let cfg = SceneCfg::default();
        let mut sectors = partition_circle(4, &cfg);
        assert!(drag_by(&mut sectors, SectorId(2), Vec2::new(10.0, -5.0)));
        assert_eq!(sectors[2].pos, cfg.center + Vec2::new(10.0, -5.0));
        for i in [0usize, 1, 3] {
            assert_eq!(sectors[i].pos, cfg.center);
        }
        assert!(!drag_by(&mut sectors, SectorId(99), Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn rotate_steps_accumulate() {
        let cfg = SceneCfg::default();
        let mut sectors = partition_circle(4, &cfg);
        let base = sectors[1].rotation;
        assert!(rotate_by(&mut sectors, SectorId(1), CLICK_TURN));
        assert!(rotate_by(&mut sectors, SectorId(1), DOUBLE_CLICK_TURN));
        let expected = base + CLICK_TURN + DOUBLE_CLICK_TURN;
        assert!((sectors[1].rotation - expected).abs() < 1e-12);
    }

    #[test]
    fn double_click_cancels_the_pending_single() {
        let mut r = ClickRotator::new();
        assert_eq!(r.click(SectorId(0), ms(0)), None);
        assert_eq!(r.click(SectorId(0), ms(200)), Some(DOUBLE_CLICK_TURN));
        // Nothing left to fire: the single was consumed by the double.
        assert!(r.poll(ms(10_000)).is_empty());
    }

    #[test]
    fn slow_clicks_are_two_singles() {
        let mut r = ClickRotator::new();
        assert_eq!(r.click(SectorId(0), ms(0)), None);
        let first = r.poll(ms(300));
        assert_eq!(first, vec![(SectorId(0), CLICK_TURN)]);
        assert_eq!(r.click(SectorId(0), ms(400)), None);
        let second = r.poll(ms(700));
        assert_eq!(second, vec![(SectorId(0), CLICK_TURN)]);
    }

    #[test]
    fn pending_clicks_per_sector_are_independent() {
        let mut r = ClickRotator::new();
        assert_eq!(r.click(SectorId(0), ms(0)), None);
        assert_eq!(r.click(SectorId(1), ms(50)), None);
        // Completing a double on one sector leaves the other pending.
        assert_eq!(r.click(SectorId(1), ms(100)), Some(DOUBLE_CLICK_TURN));
        let fired = r.poll(ms(1000));
        assert_eq!(fired, vec![(SectorId(0), CLICK_TURN)]);
    }
}
