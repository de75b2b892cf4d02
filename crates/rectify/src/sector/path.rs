//! Canonical wedge outline as drawing commands.
//!
//! The path depends only on the wedge angle and the radius, never on
//! placement: world positioning is an external translate + rotate, which is
//! what lets an animation interpolate transforms without touching the path.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt::Write;

use crate::Vec2;

use super::types::Sector;

/// One drawing command of a closed wedge outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2<f64>),
    LineTo(Vec2<f64>),
    /// Circular arc to `to`. Flags follow the SVG arc command; `sweep = true`
    /// is clockwise in y-down coordinates.
    Arc {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Vec2<f64>,
    },
    Close,
}

/// Closed wedge outline in the sector's local frame: apex at the origin,
/// bisector pointing up.
///
/// `large_arc` is set from a half-turn (π) upward, so degenerate one- and
/// two-sector partitions still render their full arcs.
pub fn sector_path(sector: &Sector, radius: f64) -> Vec<PathCmd> {
    let half = sector.angle / 2.0;
    let start = -FRAC_PI_2 - half;
    let end = -FRAC_PI_2 + half;
    vec![
        PathCmd::MoveTo(Vec2::new(0.0, 0.0)),
        PathCmd::LineTo(Vec2::new(radius * start.cos(), radius * start.sin())),
        PathCmd::Arc {
            radius,
            large_arc: sector.angle >= PI,
            sweep: true,
            to: Vec2::new(radius * end.cos(), radius * end.sin()),
        },
        PathCmd::Close,
    ]
}

/// SVG path-data (`d` attribute) serialization of a command list.
pub fn svg_path_data(cmds: &[PathCmd]) -> String {
    let mut d = String::new();
    for cmd in cmds {
        if !d.is_empty() {
            d.push(' ');
        }
        match *cmd {
            PathCmd::MoveTo(p) => {
                let _ = write!(d, "M {:.3} {:.3}", p.x, p.y);
            }
            PathCmd::LineTo(p) => {
                let _ = write!(d, "L {:.3} {:.3}", p.x, p.y);
            }
            PathCmd::Arc {
                radius,
                large_arc,
                sweep,
                to,
            } => {
                let _ = write!(
                    d,
                    "A {radius:.3} {radius:.3} 0 {} {} {:.3} {:.3}",
                    large_arc as u8, sweep as u8, to.x, to.y
                );
            }
            PathCmd::Close => d.push('Z'),
        }
    }
    d
}
