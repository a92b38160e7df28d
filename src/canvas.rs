use crate::config::Color;

// ============================================================================
// CANVAS
// ============================================================================

/// Owned RGBA8 raster, row-major, 4 bytes per pixel.
///
/// The layout matches a `pixels` frame so a finished canvas can be copied
/// straight into a window surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    frame: Vec<u8>,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        let mut canvas = Self {
            frame: vec![0; width * height * 4],
            width,
            height,
        };
        canvas.clear(background);
        canvas
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    pub fn into_frame(self) -> Vec<u8> {
        self.frame
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        Some(Color::new(
            self.frame[idx],
            self.frame[idx + 1],
            self.frame[idx + 2],
        ))
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    /// Alpha-blends `color` over the pixel at (x, y). Out-of-bounds writes are
    /// dropped.
    pub(crate) fn blend(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let a = alpha.clamp(0.0, 1.0);
        let src = [color.r as f32, color.g as f32, color.b as f32];
        for (channel, src) in src.iter().enumerate() {
            let dst = self.frame[idx + channel] as f32;
            self.frame[idx + channel] = (src * a + dst * (1.0 - a)).round() as u8;
        }
        self.frame[idx + 3] = 0xff;
    }

    // ========================================================================
    // DRAWING PRIMITIVES
    // ========================================================================

    /// Anti-aliased line with round caps.
    pub fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), thickness: f32, color: Color) {
        let (x0, y0) = (from.0 as f32, from.1 as f32);
        let (x1, y1) = (to.0 as f32, to.1 as f32);
        let pad = thickness.ceil() as i32 + 1;
        let min_x = x0.min(x1).floor() as i32 - pad;
        let max_x = x0.max(x1).ceil() as i32 + pad;
        let min_y = y0.min(y1).floor() as i32 - pad;
        let max_y = y0.max(y1).ceil() as i32 + pad;
        let dx = x1 - x0;
        let dy = y1 - y0;
        let len_sq = dx * dx + dy * dy;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 - x0;
                let py = y as f32 - y0;
                let t = if len_sq > 0.0 {
                    ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let lx = x0 + t * dx;
                let ly = y0 + t * dy;
                let dist = ((lx - x as f32).powi(2) + (ly - y as f32).powi(2)).sqrt();
                let aa = (1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
                if aa > 0.01 {
                    self.blend(x, y, color, aa);
                }
            }
        }
    }

    /// Circle outline of the given stroke width, drawn inward from `radius`.
    pub fn stroke_ellipse(&mut self, center: (i32, i32), radius: i32, width: f32, color: Color) {
        let (cx, cy) = center;
        let outer = radius as f64;
        let inner = (radius as f64 - width as f64).max(0.0);
        let reach = radius + 1;
        for y in -reach..=reach {
            for x in -reach..=reach {
                let dist = ((x * x + y * y) as f64).sqrt();
                let aa = if dist > outer {
                    1.0 - (dist - outer).min(1.0)
                } else if dist < inner {
                    1.0 - (inner - dist).min(1.0)
                } else {
                    1.0
                };
                if aa > 0.0 {
                    self.blend(cx + x, cy + y, color, aa as f32);
                }
            }
        }
    }

    /// Solid disc.
    pub fn fill_ellipse(&mut self, center: (i32, i32), radius: i32, color: Color) {
        let (cx, cy) = center;
        for y in -radius - 1..=radius + 1 {
            for x in -radius - 1..=radius + 1 {
                let dist = ((x * x + y * y) as f64).sqrt();
                let aa = if dist > radius as f64 {
                    1.0 - (dist - radius as f64).min(1.0)
                } else {
                    1.0
                };
                if aa > 0.0 {
                    self.blend(cx + x, cy + y, color, aa as f32);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_filled_with_background() {
        let canvas = Canvas::new(8, 4, Color::new(1, 2, 3));
        assert_eq!(canvas.frame().len(), 8 * 4 * 4);
        assert_eq!(canvas.pixel(7, 3), Some(Color::new(1, 2, 3)));
        assert_eq!(canvas.pixel(8, 0), None);
        assert!(canvas.frame().chunks_exact(4).all(|px| px[3] == 0xff));
        assert_eq!(canvas.into_frame().len(), 8 * 4 * 4);
    }

    #[test]
    fn blend_ignores_out_of_bounds() {
        let mut canvas = Canvas::new(4, 4, Color::WHITE);
        canvas.blend(-1, 0, Color::BLACK, 1.0);
        canvas.blend(0, 4, Color::BLACK, 1.0);
        assert!(canvas.frame().iter().all(|&b| b == 0xff));
    }

    #[test]
    fn blend_mixes_half_alpha() {
        let mut canvas = Canvas::new(1, 1, Color::WHITE);
        canvas.blend(0, 0, Color::BLACK, 0.5);
        assert_eq!(canvas.pixel(0, 0), Some(Color::new(128, 128, 128)));
    }

    #[test]
    fn line_covers_its_midpoint() {
        let mut canvas = Canvas::new(50, 50, Color::WHITE);
        canvas.draw_line((5.0, 25.0), (45.0, 25.0), 4.0, Color::RED);
        assert_eq!(canvas.pixel(25, 25), Some(Color::RED));
        assert_eq!(canvas.pixel(25, 5), Some(Color::WHITE));
    }

    #[test]
    fn degenerate_line_draws_a_dot() {
        let mut canvas = Canvas::new(10, 10, Color::WHITE);
        canvas.draw_line((5.0, 5.0), (5.0, 5.0), 3.0, Color::BLACK);
        assert_eq!(canvas.pixel(5, 5), Some(Color::BLACK));
    }

    #[test]
    fn stroked_circle_leaves_center_untouched() {
        let mut canvas = Canvas::new(100, 100, Color::WHITE);
        canvas.stroke_ellipse((50, 50), 30, 5.0, Color::BLACK);
        assert_eq!(canvas.pixel(50, 50), Some(Color::WHITE));
        assert_eq!(canvas.pixel(50 + 28, 50), Some(Color::BLACK));
        assert_eq!(canvas.pixel(50, 50 - 28), Some(Color::BLACK));
        assert_eq!(canvas.pixel(50 + 35, 50), Some(Color::WHITE));
    }

    #[test]
    fn filled_disc_covers_center() {
        let mut canvas = Canvas::new(40, 40, Color::WHITE);
        canvas.fill_ellipse((20, 20), 10, Color::BLACK);
        assert_eq!(canvas.pixel(20, 20), Some(Color::BLACK));
        assert_eq!(canvas.pixel(27, 20), Some(Color::BLACK));
        assert_eq!(canvas.pixel(35, 20), Some(Color::WHITE));
    }
}
