//! Human-readable report formatting.

use asset_palette_core::ColorStat;
use asset_palette_scan::{AnalysisResult, SurveyReport};
use std::fmt::Write;

/// Detailed stats are printed for this many of the top colors.
const DETAILED_STATS: usize = 5;

fn hsv_line(stat: &ColorStat) -> String {
    let (h, s, v) = stat.hsv;
    format!("{h:.1}, {s:.1}%, {v:.1}%")
}

/// One block per image: name, then each color with its category and HSV.
pub fn survey_text(reports: &[SurveyReport]) -> String {
    let mut out = String::from("Key Image Analysis:\n\n");
    for report in reports {
        if let Some(err) = &report.error {
            let _ = writeln!(out, "Error processing {}: {err}", report.path.display());
        }
        let _ = writeln!(out, "{}:", report.name);
        for stat in &report.colors {
            let _ = writeln!(out, "  {} - {} (HSV: {})", stat.hex, stat.category, hsv_line(stat));
        }
        out.push('\n');
    }
    out
}

fn bucket(out: &mut String, title: &str, stats: &[ColorStat]) {
    let _ = writeln!(out, "\n{title}:");
    for stat in stats {
        let _ = writeln!(out, "  {} - {}", stat.hex, stat.category);
    }
}

/// Ranked colors, the three buckets, then detail for the first few colors.
pub fn assets_text(result: &AnalysisResult) -> String {
    let mut out = String::from("Color Analysis Results:\n\nMost Common Colors:\n");
    for color in &result.most_common_colors {
        let _ = writeln!(out, "  {color}");
    }
    bucket(&mut out, "Primary Colors", &result.primary_colors);
    bucket(&mut out, "Accent Colors", &result.accent_colors);
    bucket(&mut out, "Background Colors", &result.background_colors);

    out.push_str("\nDetailed Color Stats:\n");
    for (i, stat) in result.color_stats.iter().take(DETAILED_STATS).enumerate() {
        let (r, g, b) = stat.rgb;
        let _ = writeln!(out, "Color {}:", i + 1);
        let _ = writeln!(out, "  Hex: {}", stat.hex);
        let _ = writeln!(out, "  RGB: ({r}, {g}, {b})");
        let _ = writeln!(out, "  HSV: ({})", hsv_line(stat));
        let _ = writeln!(out, "  Category: {}", stat.category);
        let _ = writeln!(out, "  Dark: {}", stat.is_dark);
        let _ = writeln!(out, "  Vibrant: {}", stat.is_vibrant);
        out.push('\n');
    }
    out
}
