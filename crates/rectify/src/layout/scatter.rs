//! Reproducible scatter for the explore stage (free arrangement).
//!
//! Purpose
//! - Give the headless core a deterministic "spread the pieces around the
//!   table" arrangement: each sector is thrown to a uniform polar offset
//!   from the scene center, with optional rotation jitter.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so a demo or test can replay any draw exactly.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sector::{SceneCfg, Sector};
use crate::Vec2;

/// Scatter configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    /// Maximum radial offset from the scene center. Clamped to >= 0.
    pub spread: f64,
    /// Rotation jitter as a fraction of a full turn. Clamped to [0, 1].
    pub rotation_jitter: f64,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            spread: 180.0,
            rotation_jitter: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Scatter the sectors around the scene center.
///
/// Pure given the token: the same `(cfg, tok, scene)` always yields the same
/// placements. Angular fields and colors are untouched.
pub fn scatter(
    sectors: &[Sector],
    cfg: ScatterCfg,
    tok: ReplayToken,
    scene: &SceneCfg,
) -> Vec<Sector> {
    let mut rng = tok.to_std_rng();
    let spread = cfg.spread.max(0.0);
    let jitter = cfg.rotation_jitter.clamp(0.0, 1.0);
    sectors
        .iter()
        .map(|s| {
            let th = rng.gen::<f64>() * TAU;
            let r = rng.gen::<f64>() * spread;
            let spin = (rng.gen::<f64>() * 2.0 - 1.0) * jitter * TAU;
            let mut out = s.clone();
            out.pos = scene.center + Vec2::new(th.cos() * r, th.sin() * r);
            out.rotation = s.rotation + spin;
            out
        })
        .collect()
}
