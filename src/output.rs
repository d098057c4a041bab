//! CLI output formatting.
//!
//! Every format leads with a 1-based, zero-padded position and the format's
//! display name, followed by indented context lines. Each command has a
//! `format_*` function (returns `Vec<String>`) for testability and a
//! `print_*` wrapper that writes to stdout.
//!
//! ```text
//! 001 FB/IG Square (1080×1080)
//!     id: fb-ig-square
//! 002 IG Story/TikTok (1080×1920)
//!     id: ig-story
//! ```
//!
//! ```text
//! Source 2000×1000 → 1 format
//! 001 IG Story/TikTok (1080×1920)
//!     draw 3840.00×1920.00 at (-1380.00, 0.00)
//!     fit: crop left/right
//! ```

use crate::catalog::FormatCatalog;
use crate::generate::GenerateEvent;
use crate::imaging::{CompositeParams, Fit};
use crate::types::AdFormat;
use std::path::PathBuf;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `001 IG Story/TikTok (1080×1920)`
fn format_header(index: usize, format: &AdFormat) -> String {
    format!(
        "{} {} ({}×{})",
        format_index(index),
        format.name,
        format.width,
        format.height
    )
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Human-readable byte size: `512 B`, `12.3 KB`, `1.4 MB`.
fn format_bytes(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}

fn describe_fit(fit: Fit) -> &'static str {
    match fit {
        Fit::Exact => "exact",
        Fit::CropSides => "crop left/right",
        Fit::CropTopBottom => "crop top/bottom",
        Fit::PillarBox => "white bands left/right",
        Fit::LetterBox => "white bands top/bottom",
    }
}

// ============================================================================
// formats
// ============================================================================

/// Format the catalog as a numbered list.
pub fn format_catalog(catalog: &FormatCatalog) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, format) in catalog.iter().enumerate() {
        lines.push(format_header(i + 1, format));
        lines.push(format!("{}id: {}", indent(1), format.id));
    }
    lines
}

/// The catalog as pretty-printed JSON, for scripting.
pub fn format_catalog_json(catalog: &FormatCatalog) -> serde_json::Result<String> {
    let formats: Vec<&AdFormat> = catalog.iter().collect();
    serde_json::to_string_pretty(&formats)
}

pub fn print_catalog(catalog: &FormatCatalog) {
    for line in format_catalog(catalog) {
        println!("{}", line);
    }
}

// ============================================================================
// plan
// ============================================================================

/// Format planned placements for each format.
pub fn format_plan(source: (u32, u32), plans: &[(AdFormat, CompositeParams)]) -> Vec<String> {
    let mut lines = vec![format!(
        "Source {}×{} → {}",
        source.0,
        source.1,
        plural(plans.len(), "format")
    )];
    for (i, (format, params)) in plans.iter().enumerate() {
        let p = params.placement;
        lines.push(format_header(i + 1, format));
        lines.push(format!(
            "{}draw {:.2}×{:.2} at ({:.2}, {:.2})",
            indent(1),
            p.draw_width,
            p.draw_height,
            p.offset_x,
            p.offset_y
        ));
        lines.push(format!("{}fit: {}", indent(1), describe_fit(p.fit())));
    }
    lines
}

pub fn print_plan(source: (u32, u32), plans: &[(AdFormat, CompositeParams)]) {
    for line in format_plan(source, plans) {
        println!("{}", line);
    }
}

// ============================================================================
// generate
// ============================================================================

/// Format a single generation progress event.
pub fn format_generate_event(event: &GenerateEvent) -> Vec<String> {
    match event {
        GenerateEvent::Started { source, formats } => vec![format!(
            "Rendering {}×{} source into {}",
            source.0,
            source.1,
            plural(*formats, "format")
        )],
        GenerateEvent::Rendered {
            index,
            format,
            bytes,
        } => vec![
            format_header(*index, format),
            format!("{}png: {}", indent(1), format_bytes(*bytes)),
        ],
        GenerateEvent::Finished { count } => {
            vec![format!("Rendered {}", plural(*count, "format"))]
        }
    }
}

/// Format the list of files written by an export.
pub fn format_saved(paths: &[PathBuf]) -> Vec<String> {
    let mut lines = vec![format!("Saved {}", plural(paths.len(), "file"))];
    for path in paths {
        lines.push(format!("{}{}", indent(1), path.display()));
    }
    lines
}

pub fn print_saved(paths: &[PathBuf]) {
    for line in format_saved(paths) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::{Compression, plan_composite};

    #[test]
    fn catalog_lists_formats_in_order() {
        let lines = format_catalog(&FormatCatalog::stock());
        assert_eq!(
            lines,
            vec![
                "001 FB/IG Square (1080×1080)",
                "    id: fb-ig-square",
                "002 IG Story/TikTok (1080×1920)",
                "    id: ig-story",
                "003 LinkedIn Banner (1200×628)",
                "    id: linkedin-banner",
            ]
        );
    }

    #[test]
    fn catalog_json_lists_all_fields() {
        let json = format_catalog_json(&FormatCatalog::stock()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1]["id"], "ig-story");
        assert_eq!(entries[1]["width"], 1080);
        assert_eq!(entries[1]["height"], 1920);
    }

    #[test]
    fn plan_shows_geometry_and_fit() {
        let story = AdFormat::new("ig-story", "IG Story/TikTok", 1080, 1920);
        let params = plan_composite((2000, 1000), (1080, 1920), Compression::Default).unwrap();
        let lines = format_plan((2000, 1000), &[(story, params)]);
        assert_eq!(
            lines,
            vec![
                "Source 2000×1000 → 1 format",
                "001 IG Story/TikTok (1080×1920)",
                "    draw 3840.00×1920.00 at (-1380.00, 0.00)",
                "    fit: crop left/right",
            ]
        );
    }

    #[test]
    fn plan_exact_fit() {
        let square = AdFormat::new("fb-ig-square", "FB/IG Square", 1080, 1080);
        let params = plan_composite((500, 500), (1080, 1080), Compression::Default).unwrap();
        let lines = format_plan((500, 500), &[(square, params)]);
        assert_eq!(lines[3], "    fit: exact");
    }

    #[test]
    fn generate_started_event() {
        let event = GenerateEvent::Started {
            source: (800, 600),
            formats: 2,
        };
        assert_eq!(
            format_generate_event(&event),
            vec!["Rendering 800×600 source into 2 formats"]
        );
    }

    #[test]
    fn generate_rendered_event() {
        let event = GenerateEvent::Rendered {
            index: 2,
            format: AdFormat::new("ig-story", "IG Story/TikTok", 1080, 1920),
            bytes: 12_800,
        };
        assert_eq!(
            format_generate_event(&event),
            vec!["002 IG Story/TikTok (1080×1920)", "    png: 12.5 KB"]
        );
    }

    #[test]
    fn generate_finished_event_singular() {
        let event = GenerateEvent::Finished { count: 1 };
        assert_eq!(format_generate_event(&event), vec!["Rendered 1 format"]);
    }

    #[test]
    fn byte_sizes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024 / 2), "1.5 MB");
    }

    #[test]
    fn saved_lists_paths() {
        let paths = vec![PathBuf::from("ads/ad-ig-story.png")];
        assert_eq!(
            format_saved(&paths),
            vec!["Saved 1 file", "    ads/ad-ig-story.png"]
        );
    }
}
