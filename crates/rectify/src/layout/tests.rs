use std::f64::consts::PI;

use super::*;
use crate::sector::{partition_circle, SceneCfg};

#[test]
fn interleave_alternates_rows() {
    let cfg = SceneCfg::default();
    let sectors = partition_circle(8, &cfg);
    let out = arrange_interleaved(&sectors, &cfg, Fit::TrueScale);
    assert_eq!(out.len(), 8);

    let upper_y = cfg.center.y - cfg.radius / 2.0;
    let lower_y = cfg.center.y + cfg.radius / 2.0;
    let upper: Vec<_> = out.iter().filter(|s| s.pos.y == upper_y).collect();
    let lower: Vec<_> = out.iter().filter(|s| s.pos.y == lower_y).collect();
    assert_eq!(upper.len(), 4);
    assert_eq!(lower.len(), 4);
    // Rows are exactly one radius apart, symmetric about the center.
    assert!((lower_y - upper_y - cfg.radius).abs() < 1e-12);

    for (i, s) in out.iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!(s.pos.y, upper_y);
            assert_eq!(s.rotation, 0.0);
        } else {
            assert_eq!(s.pos.y, lower_y);
            assert_eq!(s.rotation, PI);
        }
        // Identity policy keeps the partition colors.
        assert_eq!(s.color, sectors[i].color);
    }

    // Neighbors abut at arc-length spacing; the slots sum to the
    // circumference.
    let arc = cfg.radius * sectors[0].angle;
    for w in out.windows(2) {
        assert!((w[1].pos.x - w[0].pos.x - arc).abs() < 1e-9);
    }
    assert!((arc * 8.0 - crate::circumference(cfg.radius)).abs() < 1e-9);
}

#[test]
fn interleave_is_pure() {
    let cfg = SceneCfg::default();
    let sectors = partition_circle(16, &cfg);
    let a = arrange_interleaved(&sectors, &cfg, Fit::TrueScale);
    let b = arrange_interleaved(&sectors, &cfg, Fit::TrueScale);
    assert_eq!(a, b);
}

#[test]
fn recolored_splits_by_horizontal_half() {
    let cfg = SceneCfg::default();
    let sectors = partition_circle(4, &cfg);
    let out = arrange_interleaved_recolored(&sectors, &cfg, Fit::TrueScale);

    // Quarter wedges: spacing is 150 · π/2 ≈ 235.6.
    let spacing = cfg.radius * PI / 2.0;
    assert!((out[1].pos.x - out[0].pos.x - spacing).abs() < 1e-9);

    // Left half red, right half blue; rows still alternate two up, two down.
    assert_eq!(out[0].color, "#ef4444");
    assert_eq!(out[1].color, "#ef4444");
    assert_eq!(out[2].color, "#3b82f6");
    assert_eq!(out[3].color, "#3b82f6");
    assert_eq!(out.iter().filter(|s| s.rotation == 0.0).count(), 2);
    assert_eq!(out.iter().filter(|s| s.rotation == PI).count(), 2);
}

#[test]
fn outlined_strokes_by_row() {
    let cfg = SceneCfg::default();
    let sectors = partition_circle(8, &cfg);
    let out = arrange_interleaved_outlined(&sectors, &cfg);
    for (i, s) in out.iter().enumerate() {
        assert_eq!(s.color, "white");
        let expected = if i % 2 == 0 { "#ef4444" } else { "#3b82f6" };
        assert_eq!(s.stroke, Some(expected));
    }
}

#[test]
fn screen_fit_clamps_total_width() {
    let cfg = SceneCfg::default();
    let sectors = partition_circle(8, &cfg);
    // True scale exceeds the budget at this count (arc ≈ 117.8 per slot).
    let free = measure(&arrange_interleaved(&sectors, &cfg, Fit::TrueScale));
    assert!(free.width > cfg.fit_width);
    let fit = measure(&arrange_interleaved(&sectors, &cfg, Fit::Screen));
    assert!((fit.width - cfg.fit_width).abs() < 1e-9);

    // A low count is unaffected by the clamp (two half wedges: arc ≈ 471,
    // budget-per-gap 700).
    let few = partition_circle(2, &cfg);
    let a = arrange_interleaved(&few, &cfg, Fit::TrueScale);
    let b = arrange_interleaved(&few, &cfg, Fit::Screen);
    assert_eq!(a, b);
}

#[test]
fn exact_rectangle_dimensions() {
    let cfg = SceneCfg::default();
    let sectors = partition_circle(128, &cfg);
    let colored = arrange_interleaved_outlined(&sectors, &cfg);
    let out = arrange_exact_rectangle(&colored, &cfg);
    let ext = measure(&out);

    // Height is exactly the radius; width converges to π·r from below,
    // short by exactly one slot (the origins span count−1 slots).
    let target = PI * cfg.radius;
    let slot = target / 128.0;
    assert!((ext.height - cfg.radius).abs() < 1e-12);
    assert!((ext.width - target).abs() < 2.0 * slot);

    // Odd wedges sit on the midpoints between even slots.
    assert!((out[1].pos.x - out[0].pos.x - slot).abs() < 1e-9);
    assert!((out[2].pos.x - out[0].pos.x - 2.0 * slot).abs() < 1e-9);

    // Colors and strokes from the coloring pass survive.
    for (c, o) in colored.iter().zip(&out) {
        assert_eq!(c.color, o.color);
        assert_eq!(c.stroke, o.stroke);
    }

    // The rectangle closes the derivation: (π·r) × r is the circle's area.
    assert!((target * cfg.radius - crate::circle_area(cfg.radius)).abs() < 1e-9);
}

#[test]
fn exact_rectangle_backfills_strokes() {
    let cfg = SceneCfg::default();
    let out = arrange_exact_rectangle(&partition_circle(4, &cfg), &cfg);
    assert_eq!(out[0].stroke, Some("#ef4444"));
    assert_eq!(out[1].stroke, Some("#3b82f6"));
}

#[test]
fn measure_edge_cases() {
    assert_eq!(measure(&[]), Extent::default());

    let cfg = SceneCfg::default();
    // All sectors at the circle center: zero extent.
    let stacked = partition_circle(8, &cfg);
    let ext = measure(&stacked);
    assert_eq!(ext.width, 0.0);
    assert_eq!(ext.height, 0.0);

    let spread = arrange_interleaved(&stacked, &cfg, Fit::TrueScale);
    let ext = measure(&spread);
    assert!(ext.width > 0.0);
    assert!((ext.height - cfg.radius).abs() < 1e-12);
}

#[test]
fn layouts_tolerate_empty_input() {
    let cfg = SceneCfg::default();
    assert!(arrange_interleaved(&[], &cfg, Fit::TrueScale).is_empty());
    assert!(arrange_interleaved_recolored(&[], &cfg, Fit::Screen).is_empty());
    assert!(arrange_interleaved_outlined(&[], &cfg).is_empty());
    assert!(arrange_exact_rectangle(&[], &cfg).is_empty());
}
