//! Interleaved two-row arrangements (the approximate rectangle).
//!
//! Even-indexed sectors sit on an upper row pointing up, odd-indexed sectors
//! on a lower row rotated a half-turn so they point down into the gaps. Rows
//! are `radius/2` above and below the scene center, spaced horizontally by
//! the sectors' arc length so same-row neighbors visually abut.

use std::f64::consts::PI;

use crate::sector::{SceneCfg, Sector};
use crate::Vec2;

/// Fill colors used when recoloring by circumference half, and the row
/// stroke colors of the outlined variant.
pub(crate) const LEFT_HALF: &str = "#ef4444";
pub(crate) const RIGHT_HALF: &str = "#3b82f6";
const OUTLINED_FILL: &str = "white";

/// Row-spacing policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fit {
    /// Space sectors by their true arc length.
    TrueScale,
    /// Clamp spacing so the total row width stays within
    /// `SceneCfg::fit_width`. Sacrifices true-scale spacing for display fit.
    Screen,
}

enum Recolor {
    Keep,
    ByHalf,
    RowOutline,
}

/// Interleaved rows, original per-sector colors preserved.
pub fn arrange_interleaved(sectors: &[Sector], cfg: &SceneCfg, fit: Fit) -> Vec<Sector> {
    arrange_rows(sectors, cfg, fit, Recolor::Keep)
}

/// Interleaved rows, fill reassigned by horizontal half: left half red,
/// right half blue, emphasizing the two halves of the circumference.
pub fn arrange_interleaved_recolored(sectors: &[Sector], cfg: &SceneCfg, fit: Fit) -> Vec<Sector> {
    arrange_rows(sectors, cfg, fit, Recolor::ByHalf)
}

/// Interleaved rows at true scale, fill white and stroke by row (upper red,
/// lower blue). This is the coloring pass the derivation timeline runs
/// before interlocking.
pub fn arrange_interleaved_outlined(sectors: &[Sector], cfg: &SceneCfg) -> Vec<Sector> {
    arrange_rows(sectors, cfg, Fit::TrueScale, Recolor::RowOutline)
}

fn spacing(count: usize, angle: f64, cfg: &SceneCfg, fit: Fit) -> f64 {
    let arc = cfg.radius * angle;
    match fit {
        Fit::TrueScale => arc,
        // A single sector divides by zero into +inf; the clamp never binds.
        Fit::Screen => arc.min(cfg.fit_width / (count as f64 - 1.0)),
    }
}

fn arrange_rows(sectors: &[Sector], cfg: &SceneCfg, fit: Fit, recolor: Recolor) -> Vec<Sector> {
    let count = sectors.len();
    if count == 0 {
        return Vec::new();
    }
    let step = spacing(count, sectors[0].angle, cfg, fit);
    let total = step * (count as f64 - 1.0);
    let x0 = cfg.center.x - total / 2.0;
    let upper_y = cfg.center.y - cfg.radius / 2.0;
    let lower_y = cfg.center.y + cfg.radius / 2.0;

    sectors
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let upper = i % 2 == 0;
            let x = x0 + step * i as f64;
            let mut out = s.clone();
            out.pos = Vec2::new(x, if upper { upper_y } else { lower_y });
            out.rotation = if upper { 0.0 } else { PI };
            match recolor {
                Recolor::Keep => {}
                Recolor::ByHalf => {
                    out.color = if x - x0 < total / 2.0 {
                        LEFT_HALF
                    } else {
                        RIGHT_HALF
                    };
                }
                Recolor::RowOutline => {
                    out.color = OUTLINED_FILL;
                    out.stroke = Some(if upper { LEFT_HALF } else { RIGHT_HALF });
                }
            }
            out
        })
        .collect()
}
