//! Plain-text rendering of reports.

use astro_core::report::{AspectView, NatalReport, PositionView, SkippedView, TransitReport};
use std::fmt::Write;

pub fn natal_text(report: &NatalReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Natal chart (JD {:.5})", report.julian_day);
    write_positions(&mut out, &report.positions);
    write_aspects(&mut out, "Aspects", &report.aspects);
    write_skipped(&mut out, &report.skipped);
    out
}

pub fn transit_text(report: &TransitReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Natal positions");
    write_positions(&mut out, &report.natal_positions);
    let _ = writeln!(out, "\nTransits at {}", report.calculation_time.to_rfc3339());
    write_positions(&mut out, &report.transit_positions);
    write_aspects(&mut out, "Transit aspects", &report.aspects);
    write_skipped(&mut out, &report.skipped);
    out
}

fn write_positions(out: &mut String, positions: &[PositionView]) {
    for p in positions {
        let _ = writeln!(
            out,
            "  {:<16} {:<20} {:>12}  house {:>2} {}",
            p.body, p.zodiac_position, p.formatted_longitude, p.house, p.retrograde
        );
    }
}

fn write_aspects(out: &mut String, title: &str, aspects: &[AspectView]) {
    let _ = writeln!(out, "\n{} ({})", title, aspects.len());
    for a in aspects {
        let _ = writeln!(out, "  {} (orb {:.2}°)", a.description, a.aspect.orb);
    }
}

fn write_skipped(out: &mut String, skipped: &[SkippedView]) {
    if skipped.is_empty() {
        return;
    }
    let _ = writeln!(out, "\nNot calculated");
    for s in skipped {
        let _ = writeln!(out, "  {} ({:?}): {}", s.body, s.chart, s.reason);
    }
}
