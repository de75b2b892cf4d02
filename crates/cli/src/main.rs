use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

use rectify::layout::scatter::{scatter, ReplayToken, ScatterCfg};
use rectify::layout::{
    arrange_exact_rectangle, arrange_interleaved, arrange_interleaved_outlined,
    arrange_interleaved_recolored, measure, Fit,
};
use rectify::sector::{partition_circle, SceneCfg, Sector};
use rectify::timeline::Timeline;

mod provenance;
mod svg;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Headless driver for the circle-area derivation core")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Partition the circle and write the sector set as JSON
    Partition {
        #[arg(long, default_value_t = 8)]
        count: usize,
        #[arg(long)]
        out: String,
    },
    /// Arrange a partition and write sectors plus measurement as JSON
    Layout {
        #[arg(long, default_value_t = 8)]
        count: usize,
        #[arg(long, value_enum, default_value_t = Mode::Circle)]
        mode: Mode,
        /// Clamp interleave spacing to the screen budget
        #[arg(long)]
        fit: bool,
        /// Replay seed for the scatter mode
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: String,
    },
    /// Render an arrangement as a standalone SVG document
    Figure {
        #[arg(long, default_value_t = 8)]
        count: usize,
        #[arg(long, value_enum, default_value_t = Mode::Circle)]
        mode: Mode,
        #[arg(long)]
        fit: bool,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: String,
    },
    /// Replay the derivation timeline and write one JSON line per step
    Animate {
        #[arg(long, default_value_t = 128)]
        count: usize,
        #[arg(long)]
        out: String,
    },
    /// Print a provenance JSON block
    Report,
}

/// Arrangement applied to the partition before output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Sectors reassembled into the circle
    Circle,
    /// Interleaved rows, partition colors kept
    Interleaved,
    /// Interleaved rows, recolored by circumference half
    Recolored,
    /// Interleaved rows, white fill with row strokes
    Outlined,
    /// Exact interlocking rectangle (after the outline pass)
    Rectangle,
    /// Reproducible free arrangement around the center
    Scatter,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mode::Circle => "circle",
            Mode::Interleaved => "interleaved",
            Mode::Recolored => "recolored",
            Mode::Outlined => "outlined",
            Mode::Rectangle => "rectangle",
            Mode::Scatter => "scatter",
        })
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Partition { count, out } => partition(count, out),
        Action::Layout {
            count,
            mode,
            fit,
            seed,
            out,
        } => layout(count, mode, fit, seed, out),
        Action::Figure {
            count,
            mode,
            fit,
            seed,
            out,
        } => figure(count, mode, fit, seed, out),
        Action::Animate { count, out } => animate(count, out),
        Action::Report => report(),
    }
}

/// JSON row for one sector.
#[derive(Serialize)]
struct SectorRow {
    id: usize,
    angle: f64,
    start_angle: f64,
    end_angle: f64,
    color: &'static str,
    stroke: Option<&'static str>,
    x: f64,
    y: f64,
    rotation: f64,
}

impl From<&Sector> for SectorRow {
    fn from(s: &Sector) -> Self {
        Self {
            id: s.id.0,
            angle: s.angle,
            start_angle: s.start_angle,
            end_angle: s.end_angle,
            color: s.color,
            stroke: s.stroke,
            x: s.pos.x,
            y: s.pos.y,
            rotation: s.rotation,
        }
    }
}

/// One observable timeline state in the animate output.
#[derive(Serialize)]
struct StepSnapshot {
    t_ms: u128,
    phase: String,
    layout_mode: String,
    sectors: usize,
    width: f64,
    height: f64,
    show_circle: bool,
    show_rectangle_only: bool,
    show_side_by_side: bool,
    is_animating: bool,
}

impl StepSnapshot {
    fn capture(t: Duration, tl: &Timeline) -> Self {
        let ext = measure(tl.sectors());
        Self {
            t_ms: t.as_millis(),
            phase: format!("{:?}", tl.phase()),
            layout_mode: format!("{:?}", tl.layout_mode()),
            sectors: tl.sectors().len(),
            width: ext.width,
            height: ext.height,
            show_circle: tl.show_circle(),
            show_rectangle_only: tl.show_rectangle_only(),
            show_side_by_side: tl.show_side_by_side(),
            is_animating: tl.is_animating(),
        }
    }
}

fn build_sectors(count: usize, mode: Mode, fit: bool, seed: u64, cfg: &SceneCfg) -> Vec<Sector> {
    let base = partition_circle(count, cfg);
    let fit = if fit { Fit::Screen } else { Fit::TrueScale };
    match mode {
        Mode::Circle => base,
        Mode::Interleaved => arrange_interleaved(&base, cfg, fit),
        Mode::Recolored => arrange_interleaved_recolored(&base, cfg, fit),
        Mode::Outlined => arrange_interleaved_outlined(&base, cfg),
        Mode::Rectangle => {
            let outlined = arrange_interleaved_outlined(&base, cfg);
            arrange_exact_rectangle(&outlined, cfg)
        }
        Mode::Scatter => scatter(
            &base,
            ScatterCfg::default(),
            ReplayToken { seed, index: 0 },
            cfg,
        ),
    }
}

fn write_artifact(out: &str, bytes: &[u8]) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, bytes).with_context(|| format!("writing {out}"))
}

fn partition(count: usize, out: String) -> Result<()> {
    tracing::info!(count, out, "partition");
    let cfg = SceneCfg::default();
    let rows: Vec<SectorRow> = partition_circle(count, &cfg).iter().map(Into::into).collect();
    write_artifact(&out, &serde_json::to_vec_pretty(&rows)?)?;
    provenance::write_sidecar(&out, serde_json::json!({ "count": count }))?;
    Ok(())
}

fn layout(count: usize, mode: Mode, fit: bool, seed: u64, out: String) -> Result<()> {
    tracing::info!(count, mode = ?mode, fit, seed, out, "layout");
    let cfg = SceneCfg::default();
    let sectors = build_sectors(count, mode, fit, seed, &cfg);
    let ext = measure(&sectors);
    tracing::info!(width = ext.width, height = ext.height, "measured");
    let rows: Vec<SectorRow> = sectors.iter().map(Into::into).collect();
    let doc = serde_json::json!({
        "count": count,
        "mode": mode.to_string(),
        "measurement": { "width": ext.width, "height": ext.height },
        "sectors": rows,
    });
    write_artifact(&out, &serde_json::to_vec_pretty(&doc)?)?;
    provenance::write_sidecar(
        &out,
        serde_json::json!({ "count": count, "mode": mode.to_string(), "fit": fit, "seed": seed }),
    )?;
    Ok(())
}

fn figure(count: usize, mode: Mode, fit: bool, seed: u64, out: String) -> Result<()> {
    tracing::info!(count, mode = ?mode, fit, seed, out, "figure");
    let cfg = SceneCfg::default();
    let sectors = build_sectors(count, mode, fit, seed, &cfg);
    let doc = svg::render(&sectors, &cfg);
    write_artifact(&out, doc.as_bytes())?;
    provenance::write_sidecar(
        &out,
        serde_json::json!({ "count": count, "mode": mode.to_string(), "fit": fit, "seed": seed }),
    )?;
    Ok(())
}

fn animate(count: usize, out: String) -> Result<()> {
    tracing::info!(count, out, "animate");
    let cfg = SceneCfg::default();
    let mut tl = Timeline::new(count, cfg);
    tl.trigger(Duration::ZERO);

    let mut lines = Vec::new();
    lines.push(serde_json::to_string(&StepSnapshot::capture(
        Duration::ZERO,
        &tl,
    ))?);
    // Drive the run by its own deadlines; no wall clock involved.
    while let Some(due) = tl.next_due() {
        tl.tick(due);
        lines.push(serde_json::to_string(&StepSnapshot::capture(due, &tl))?);
    }
    lines.push(String::new());
    write_artifact(&out, lines.join("\n").as_bytes())?;
    provenance::write_sidecar(&out, serde_json::json!({ "count": count }))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "tool_version": rectify::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
