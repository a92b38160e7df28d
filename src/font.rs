use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::canvas::Canvas;
use crate::config::Color;
use crate::error::FontError;

// ============================================================================
// LABEL FONT
// ============================================================================

/// Font used for the numerals and word labels.
///
/// Either a scalable TrueType/OpenType font loaded from disk, or the built-in
/// 5x7 bitmap font scaled up by an integer factor. Text may span several
/// lines separated by `\n`; each line is centred horizontally.
pub struct LabelFont {
    face: FontFace,
    line_spacing: i32,
}

enum FontFace {
    Scalable { font: Font<'static>, scale: Scale },
    Builtin { pixel_size: i32 },
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.face {
            FontFace::Scalable { scale, .. } => format!("Scalable({})", scale.y),
            FontFace::Builtin { pixel_size } => format!("Builtin(x{})", pixel_size),
        };
        f.debug_struct("LabelFont")
            .field("face", &kind)
            .field("line_spacing", &self.line_spacing)
            .finish()
    }
}

const GLYPH_WIDTH: i32 = 5;
const GLYPH_HEIGHT: i32 = 7;
const DEFAULT_LINE_SPACING: i32 = 4;

impl LabelFont {
    pub fn load(path: &str, size: f32) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_string(),
            source,
        })?;
        let font = Font::try_from_vec(data).ok_or_else(|| FontError::Parse {
            path: path.to_string(),
        })?;
        Ok(Self {
            face: FontFace::Scalable {
                font,
                scale: Scale::uniform(size),
            },
            line_spacing: DEFAULT_LINE_SPACING,
        })
    }

    /// Loads `path`, or falls back to the built-in font if it cannot be used.
    pub fn load_or_builtin(path: &str, size: f32) -> Self {
        match Self::load(path, size) {
            Ok(font) => {
                tracing::debug!(path, size, "loaded label font");
                font
            }
            Err(err) => {
                tracing::warn!("{}; using built-in font", err);
                Self::builtin(size)
            }
        }
    }

    pub fn builtin(size: f32) -> Self {
        let pixel_size = ((size / GLYPH_HEIGHT as f32).round() as i32).max(1);
        Self {
            face: FontFace::Builtin { pixel_size },
            line_spacing: DEFAULT_LINE_SPACING,
        }
    }

    pub fn with_line_spacing(mut self, line_spacing: i32) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.face, FontFace::Builtin { .. })
    }

    /// Pixel width and height of the bounding box of `text`.
    pub fn measure(&self, text: &str) -> (i32, i32) {
        let lines: Vec<&str> = text.split('\n').collect();
        let width = lines
            .iter()
            .map(|line| self.line_width(line))
            .max()
            .unwrap_or(0);
        let count = lines.len() as i32;
        let height = count * self.line_height() + (count - 1) * self.line_spacing;
        (width, height)
    }

    /// Draws `text` centred on `center`.
    pub fn draw(&self, canvas: &mut Canvas, center: (i32, i32), text: &str, color: Color) {
        let (_, height) = self.measure(text);
        let mut top = center.1 - height / 2;
        for line in text.split('\n') {
            let left = center.0 - self.line_width(line) / 2;
            match &self.face {
                FontFace::Scalable { font, scale } => {
                    draw_scalable_line(canvas, font, *scale, left, top, line, color)
                }
                FontFace::Builtin { pixel_size } => {
                    draw_builtin_line(canvas, *pixel_size, left, top, line, color)
                }
            }
            top += self.line_height() + self.line_spacing;
        }
    }

    fn line_height(&self) -> i32 {
        match &self.face {
            FontFace::Scalable { font, scale } => {
                let v_metrics = font.v_metrics(*scale);
                (v_metrics.ascent - v_metrics.descent).ceil() as i32
            }
            FontFace::Builtin { pixel_size } => GLYPH_HEIGHT * pixel_size,
        }
    }

    fn line_width(&self, line: &str) -> i32 {
        match &self.face {
            FontFace::Scalable { font, scale } => {
                let glyphs = layout_line(font, *scale, line);
                let (min_x, max_x) = horizontal_extent(&glyphs);
                if min_x < max_x {
                    max_x - min_x
                } else {
                    0
                }
            }
            FontFace::Builtin { pixel_size } => {
                let chars = line.chars().count() as i32;
                if chars == 0 {
                    0
                } else {
                    (chars * (GLYPH_WIDTH + 1) - 1) * pixel_size
                }
            }
        }
    }
}

// ============================================================================
// SCALABLE GLYPHS
// ============================================================================

fn layout_line(font: &Font<'static>, scale: Scale, line: &str) -> Vec<PositionedGlyph<'static>> {
    let v_metrics = font.v_metrics(scale);
    font.layout(line, scale, point(0.0, v_metrics.ascent)).collect()
}

fn horizontal_extent(glyphs: &[PositionedGlyph]) -> (i32, i32) {
    glyphs
        .iter()
        .filter_map(|g| g.pixel_bounding_box())
        .fold((i32::MAX, i32::MIN), |(min_x, max_x), bb| {
            (min_x.min(bb.min.x), max_x.max(bb.max.x))
        })
}

fn draw_scalable_line(
    canvas: &mut Canvas,
    font: &Font<'static>,
    scale: Scale,
    left: i32,
    top: i32,
    line: &str,
    color: Color,
) {
    let glyphs = layout_line(font, scale, line);
    let (min_x, _) = horizontal_extent(&glyphs);
    for glyph in &glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let px = left + gx as i32 + bb.min.x - min_x;
                let py = top + gy as i32 + bb.min.y;
                canvas.blend(px, py, color, v);
            });
        }
    }
}

// ============================================================================
// BUILT-IN BITMAP GLYPHS
// ============================================================================

fn draw_builtin_line(
    canvas: &mut Canvas,
    pixel_size: i32,
    left: i32,
    top: i32,
    line: &str,
    color: Color,
) {
    for (i, c) in line.chars().enumerate() {
        let Some(rows) = builtin_glyph(c) else {
            continue;
        };
        let glyph_left = left + i as i32 * (GLYPH_WIDTH + 1) * pixel_size;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let x0 = glyph_left + col * pixel_size;
                let y0 = top + row as i32 * pixel_size;
                for dy in 0..pixel_size {
                    for dx in 0..pixel_size {
                        canvas.blend(x0 + dx, y0 + dy, color, 1.0);
                    }
                }
            }
        }
    }
}

/// 5x7 rows, most significant of the low five bits is the leftmost column.
fn builtin_glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'a' => [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
        'b' => [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110],
        'c' => [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110],
        'd' => [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111],
        'e' => [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'f' => [0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000],
        'g' => [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        'h' => [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'i' => [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        'j' => [0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100],
        'k' => [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010],
        'l' => [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'm' => [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001],
        'n' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'o' => [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'p' => [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000],
        'q' => [0b00000, 0b00000, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001],
        'r' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
        's' => [0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110],
        't' => [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110],
        'u' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101],
        'v' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'w' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010],
        'x' => [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
        'y' => [0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        'z' => [0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        ' ' => [0; 7],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let err = LabelFont::load("/definitely/not/here.ttf", 20.0).unwrap_err();
        assert!(matches!(err, FontError::Io { .. }));
    }

    #[test]
    fn fallback_yields_builtin() {
        let font = LabelFont::load_or_builtin("/definitely/not/here.ttf", 20.0);
        assert!(font.is_builtin());
    }

    #[test]
    fn builtin_scale_never_drops_below_one() {
        let font = LabelFont::builtin(1.0);
        assert_eq!(font.measure("8"), (5, 7));
    }

    #[test]
    fn builtin_measures_lines() {
        let font = LabelFont::builtin(14.0);
        // two glyphs of 5 columns with one column gap, doubled
        assert_eq!(font.measure("12"), (22, 14));
        assert_eq!(font.measure("12\ntwelve"), (70, 14 + 4 + 14));
        assert_eq!(font.with_line_spacing(0).measure("1\n1"), (10, 28));
    }

    #[test]
    fn every_label_character_has_a_glyph() {
        for c in "0123456789abcdefghijklmnopqrstuvwxyz- ".chars() {
            assert!(builtin_glyph(c).is_some(), "missing glyph for {:?}", c);
        }
        assert!(builtin_glyph('?').is_none());
    }

    #[test]
    fn builtin_draws_centred_text() {
        let mut canvas = Canvas::new(40, 40, Color::WHITE);
        let font = LabelFont::builtin(7.0);
        font.draw(&mut canvas, (20, 20), "1", Color::BLACK);
        // The stem of "1" is the middle column.
        assert_eq!(canvas.pixel(20, 19), Some(Color::BLACK));
        assert_eq!(canvas.pixel(5, 5), Some(Color::WHITE));
    }

    #[test]
    fn scalable_text_is_centred_on_its_point() {
        let path = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";
        if !std::path::Path::new(path).exists() {
            return;
        }
        let font = LabelFont::load(path, 40.0).unwrap();
        assert!(!font.is_builtin());

        let mut canvas = Canvas::new(200, 200, Color::WHITE);
        font.draw(&mut canvas, (100, 100), "8", Color::BLACK);

        let (mut min_x, mut max_x, mut min_y, mut max_y) = (usize::MAX, 0, usize::MAX, 0);
        for y in 0..200 {
            for x in 0..200 {
                if canvas.pixel(x, y) != Some(Color::WHITE) {
                    min_x = min_x.min(x);
                    max_x = max_x.max(x);
                    min_y = min_y.min(y);
                    max_y = max_y.max(y);
                }
            }
        }
        assert!(min_x <= max_x, "nothing was drawn");

        let ink_width = (max_x - min_x + 1) as i32;
        let ink_height = (max_y - min_y + 1) as i32;
        let (width, height) = font.measure("8");
        assert!((ink_width - width).abs() <= 1, "ink {} vs measured {}", ink_width, width);
        assert!(ink_height <= height);

        let center_x = (min_x + max_x) as f64 / 2.0;
        let center_y = (min_y + max_y) as f64 / 2.0;
        assert!((center_x - 100.0).abs() <= 2.0, "ink centred at x {}", center_x);
        assert!((center_y - 100.0).abs() <= 3.0, "ink centred at y {}", center_y);
    }
}
