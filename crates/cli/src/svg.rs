//! Standalone SVG rendering of a sector arrangement.
//!
//! Mirrors how the page draws: one `<path>` per sector with the canonical
//! wedge outline, positioned by a translate + rotate transform. The viewBox
//! matches the reference page (800×600).

use std::fmt::Write;

use rectify::sector::{sector_path, svg_path_data, SceneCfg, Sector};

const DEFAULT_STROKE: &str = "#333";

pub fn render(sectors: &[Sector], cfg: &SceneCfg) -> String {
    let mut out = String::from(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 800 600\">\n",
    );
    for s in sectors {
        let d = svg_path_data(&sector_path(s, cfg.radius));
        let stroke = s.stroke.unwrap_or(DEFAULT_STROKE);
        let _ = writeln!(
            out,
            "  <path d=\"{d}\" fill=\"{}\" stroke=\"{stroke}\" stroke-width=\"2\" \
             transform=\"translate({:.3} {:.3}) rotate({:.3})\"/>",
            s.color,
            s.pos.x,
            s.pos.y,
            s.rotation.to_degrees(),
        );
    }
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rectify::sector::partition_circle;

    #[test]
    fn one_path_per_sector() {
        let cfg = SceneCfg::default();
        let sectors = partition_circle(8, &cfg);
        let doc = render(&sectors, &cfg);
        assert_eq!(doc.matches("<path ").count(), 8);
        assert!(doc.starts_with("<svg "));
        assert!(doc.ends_with("</svg>\n"));
        // Sector 2 of 8 is rotated two wedge widths: 90°.
        assert!(doc.contains("rotate(90.000)"));
    }

    #[test]
    fn empty_arrangement_is_an_empty_document() {
        let cfg = SceneCfg::default();
        let doc = render(&[], &cfg);
        assert!(!doc.contains("<path"));
    }
}
