//! Deterministic walkthrough of the derivation timeline.
//!
//! Purpose
//! - Show the scripted circle→rectangle run end to end without a UI: drive
//!   the timeline by its own deadlines and print each observable state.
//! - Double as a quick sanity probe that the interlocked width approaches
//!   π·r while the height stays r.

use std::time::Duration;

use rectify::layout::measure;
use rectify::sector::SceneCfg;
use rectify::timeline::Timeline;

fn main() {
    let cfg = SceneCfg::default();
    let mut tl = Timeline::new(128, cfg);
    tl.trigger(Duration::ZERO);
    println!("t_ms=0 phase={:?} sectors={}", tl.phase(), tl.sectors().len());

    while let Some(due) = tl.next_due() {
        tl.tick(due);
        let ext = measure(tl.sectors());
        println!(
            "t_ms={} phase={:?} mode={:?} sectors={} width={:.1} height={:.1} circle={} rect_only={} side_by_side={}",
            due.as_millis(),
            tl.phase(),
            tl.layout_mode(),
            tl.sectors().len(),
            ext.width,
            ext.height,
            tl.show_circle(),
            tl.show_rectangle_only(),
            tl.show_side_by_side(),
        );
    }

    println!(
        "target width=π·r={:.1} height=r={:.1}",
        std::f64::consts::PI * cfg.radius,
        cfg.radius
    );
}
