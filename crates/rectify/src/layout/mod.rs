//! Layout engine: rectangle-like arrangements of a partitioned circle.
//!
//! Purpose
//! - Re-place sectors (translate/rotate only) under two policies: the
//!   approximate interleaved rows shown while exploring, and the exact
//!   interlocking rectangle (width π·r, height r) that closes the area
//!   derivation.
//! - Derive the bounding measurement the page labels with.
//!
//! Recoloring is a product behavior, not a rendering detail, so each color
//! policy is its own named function rather than a flag on one entry point.

mod measure;
mod rectangle;
mod rows;
pub mod scatter;

pub use measure::{measure, Extent};
pub use rectangle::arrange_exact_rectangle;
pub use rows::{
    arrange_interleaved, arrange_interleaved_outlined, arrange_interleaved_recolored, Fit,
};

#[cfg(test)]
mod tests;
