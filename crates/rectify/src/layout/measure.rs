//! Bounding measurement of a sector set.

use crate::sector::Sector;

/// Axis-aligned width/height of a sector set, derived on demand.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

/// Extent spanned by the sectors' placement origins; zero for an empty set.
///
/// Origins, not rendered outlines: once rows are aligned the origins are
/// representative of extent, which is all the on-screen labels need.
pub fn measure(sectors: &[Sector]) -> Extent {
    let mut iter = sectors.iter();
    let first = match iter.next() {
        Some(s) => s,
        None => return Extent::default(),
    };
    let (mut min_x, mut max_x) = (first.pos.x, first.pos.x);
    let (mut min_y, mut max_y) = (first.pos.y, first.pos.y);
    for s in iter {
        min_x = min_x.min(s.pos.x);
        max_x = max_x.max(s.pos.x);
        min_y = min_y.min(s.pos.y);
        max_y = max_y.max(s.pos.y);
    }
    Extent {
        width: max_x - min_x,
        height: max_y - min_y,
    }
}
