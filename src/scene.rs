use crate::canvas::Canvas;
use crate::config::Color;
use crate::font::LabelFont;

// ============================================================================
// RETAINED MODE ABSTRACTIONS
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    /// Stroked circle, drawn inward from `radius`.
    Ring {
        center: (i32, i32),
        radius: i32,
        width: f32,
        color: Color,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        width: f32,
        color: Color,
    },
    /// Text centred on `center`, possibly multi-line.
    Text {
        center: (f64, f64),
        text: String,
        color: Color,
    },
    Disc {
        center: (i32, i32),
        radius: i32,
        color: Color,
    },
}

/// Ordered draw list for one frame.
#[derive(Clone, Debug)]
pub struct Scene {
    width: usize,
    height: usize,
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Every text command, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Rasterizes the scene onto a fresh canvas of the scene's size.
    pub fn rasterize(&self, font: &LabelFont) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height, Color::WHITE);
        self.render(&mut canvas, font);
        canvas
    }

    pub fn render(&self, canvas: &mut Canvas, font: &LabelFont) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => {
                    canvas.clear(*color);
                }
                DrawCommand::Ring {
                    center,
                    radius,
                    width,
                    color,
                } => {
                    canvas.stroke_ellipse(*center, *radius, *width, *color);
                }
                DrawCommand::Line {
                    from,
                    to,
                    width,
                    color,
                } => {
                    canvas.draw_line(*from, *to, *width, *color);
                }
                DrawCommand::Text {
                    center,
                    text,
                    color,
                } => {
                    let center = (center.0.round() as i32, center.1.round() as i32);
                    font.draw(canvas, center, text, *color);
                }
                DrawCommand::Disc {
                    center,
                    radius,
                    color,
                } => {
                    canvas.fill_ellipse(*center, *radius, *color);
                }
            }
        }
    }
}
