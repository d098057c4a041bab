//! Pure calculation functions for composite placement.
//!
//! All functions here are pure and testable without any I/O or images.

/// Where a scaled source lands on the output canvas.
///
/// Values are kept as `f64` with no rounding: the compositor samples against
/// these exact edges. Offsets may be negative, in which case the scaled
/// source overhangs the canvas on that axis and only the centered slice is
/// visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub draw_width: f64,
    pub draw_height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// How the scaled source relates to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Same aspect ratio: the source covers the canvas exactly.
    Exact,
    /// Source overhangs left and right; the center column is shown.
    CropSides,
    /// Source overhangs top and bottom; the center row is shown.
    CropTopBottom,
    /// Source is narrower than the canvas; white bands left and right.
    PillarBox,
    /// Source is shorter than the canvas; white bands top and bottom.
    LetterBox,
}

/// Offsets smaller than this are rounding noise, not a visible shift.
const OFFSET_EPSILON: f64 = 1e-9;

impl Placement {
    pub fn fit(&self) -> Fit {
        if self.offset_x < -OFFSET_EPSILON {
            Fit::CropSides
        } else if self.offset_y < -OFFSET_EPSILON {
            Fit::CropTopBottom
        } else if self.offset_x > OFFSET_EPSILON {
            Fit::PillarBox
        } else if self.offset_y > OFFSET_EPSILON {
            Fit::LetterBox
        } else {
            Fit::Exact
        }
    }
}

/// Calculate the placement of a source inside a target canvas.
///
/// The relatively wider side is matched to the target height and centered
/// horizontally; otherwise the width is matched and the source centered
/// vertically. Aspect ratios are compared unrounded.
///
/// # Arguments
/// * `source` - Source image dimensions (width, height), both non-zero
/// * `target` - Canvas dimensions (width, height), both non-zero
///
/// # Examples
/// ```
/// # use ad_resizer::imaging::calculate_placement;
/// // 2:1 source into a 9:16 story: height matches, sides overhang
/// let p = calculate_placement((2000, 1000), (1080, 1920));
/// assert_eq!(p.draw_height, 1920.0);
/// assert_eq!(p.offset_y, 0.0);
/// assert!((p.draw_width - 3840.0).abs() < 1e-9);
/// assert!((p.offset_x + 1380.0).abs() < 1e-9);
/// ```
pub fn calculate_placement(source: (u32, u32), target: (u32, u32)) -> Placement {
    let (src_w, src_h) = (source.0 as f64, source.1 as f64);
    let (tgt_w, tgt_h) = (target.0 as f64, target.1 as f64);

    let src_aspect = src_w / src_h;
    let tgt_aspect = tgt_w / tgt_h;

    if src_aspect > tgt_aspect {
        // Source is wider: height matches
        let draw_height = tgt_h;
        let draw_width = src_w * (tgt_h / src_h);
        Placement {
            draw_width,
            draw_height,
            offset_x: (tgt_w - draw_width) / 2.0,
            offset_y: 0.0,
        }
    } else {
        // Source is taller or equal: width matches
        let draw_width = tgt_w;
        let draw_height = src_h * (tgt_w / src_w);
        Placement {
            draw_width,
            draw_height,
            offset_x: 0.0,
            offset_y: (tgt_h - draw_height) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn wide_source_into_story_crops_sides() {
        // 2000x1000 (2:1) → 1080x1920 (9:16)
        // 2.0 > 0.5625 so height matches: 1920, width = 2000 * 1.92 = 3840
        let p = calculate_placement((2000, 1000), (1080, 1920));
        assert_close(p.draw_height, 1920.0);
        assert_close(p.draw_width, 3840.0);
        assert_close(p.offset_x, -1380.0);
        assert_eq!(p.offset_y, 0.0);
        assert_eq!(p.fit(), Fit::CropSides);
    }

    #[test]
    fn tall_source_into_banner_crops_top_bottom() {
        // 1000x1000 → 1200x628: 1.0 < 1.91 so width matches, height = 1200
        let p = calculate_placement((1000, 1000), (1200, 628));
        assert_close(p.draw_width, 1200.0);
        assert_close(p.draw_height, 1200.0);
        assert_eq!(p.offset_x, 0.0);
        assert_close(p.offset_y, -286.0);
        assert_eq!(p.fit(), Fit::CropTopBottom);
    }

    #[test]
    fn same_aspect_ratio_is_exact() {
        // 2160x2160 → 1080x1080
        let p = calculate_placement((2160, 2160), (1080, 1080));
        assert_close(p.draw_width, 1080.0);
        assert_close(p.draw_height, 1080.0);
        assert_eq!(p.offset_x, 0.0);
        assert_eq!(p.offset_y, 0.0);
        assert_eq!(p.fit(), Fit::Exact);
    }

    #[test]
    fn same_aspect_ratio_upscale_is_exact() {
        // 9x16 → 1080x1920
        let p = calculate_placement((9, 16), (1080, 1920));
        assert_close(p.draw_width, 1080.0);
        assert_close(p.draw_height, 1920.0);
        assert_eq!(p.offset_x, 0.0);
        assert_close(p.offset_y, 0.0);
    }

    #[test]
    fn wider_source_never_shifts_vertically() {
        for (source, target) in [
            ((3000, 1000), (1080, 1080)),
            ((1921, 1080), (1080, 1920)),
            ((4000, 2000), (1200, 628)),
        ] {
            let p = calculate_placement(source, target);
            assert_eq!(p.offset_y, 0.0, "{source:?} → {target:?}");
            assert!(p.offset_x < 0.0, "{source:?} → {target:?}");
            assert_close(p.draw_height, target.1 as f64);
        }
    }

    #[test]
    fn taller_source_never_shifts_horizontally() {
        for (source, target) in [
            ((1000, 3000), (1080, 1080)),
            ((1080, 1080), (1200, 628)),
            ((500, 2000), (1080, 1920)),
        ] {
            let p = calculate_placement(source, target);
            assert_eq!(p.offset_x, 0.0, "{source:?} → {target:?}");
            assert!(p.offset_y < 0.0, "{source:?} → {target:?}");
            assert_close(p.draw_width, target.0 as f64);
        }
    }

    #[test]
    fn scaled_source_always_covers_canvas() {
        for source in [(1, 1), (1, 500), (500, 1), (1234, 987), (640, 480)] {
            for target in [(1080, 1080), (1080, 1920), (1200, 628)] {
                let p = calculate_placement(source, target);
                assert!(p.draw_width >= target.0 as f64 - 1e-9);
                assert!(p.draw_height >= target.1 as f64 - 1e-9);
                // Centered: the overhang is split evenly
                assert_close(2.0 * p.offset_x + p.draw_width, target.0 as f64);
                assert_close(2.0 * p.offset_y + p.draw_height, target.1 as f64);
            }
        }
    }

    #[test]
    fn fit_classifies_positive_offsets_as_bands() {
        let pillar = Placement {
            draw_width: 50.0,
            draw_height: 100.0,
            offset_x: 25.0,
            offset_y: 0.0,
        };
        assert_eq!(pillar.fit(), Fit::PillarBox);

        let letter = Placement {
            draw_width: 100.0,
            draw_height: 50.0,
            offset_x: 0.0,
            offset_y: 25.0,
        };
        assert_eq!(letter.fit(), Fit::LetterBox);
    }

    #[test]
    fn fit_ignores_rounding_noise() {
        let p = Placement {
            draw_width: 1080.0,
            draw_height: 1080.0000000000002,
            offset_x: 0.0,
            offset_y: -1e-13,
        };
        assert_eq!(p.fit(), Fit::Exact);
    }
}
