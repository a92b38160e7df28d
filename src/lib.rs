// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod canvas;
pub mod config;
pub mod error;
pub mod face;
pub mod font;
pub mod logger;
pub mod scene;
pub mod speller;
pub mod time;

// External crate imports
use pixels::{Pixels, SurfaceTexture};

// Standard library imports
use std::time::{Duration, Instant};

// Window management imports
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

pub use canvas::Canvas;
pub use config::{ClockConfig, Color, LabelOrder};
pub use error::{ClockError, FontError, Result, SpellError};
pub use face::{ClockLayout, HandAngles, Label};
pub use font::LabelFont;
pub use scene::{DrawCommand, Scene};
pub use speller::words;
pub use time::{ClockTime, FixedClock, SystemClock, TimeSource};

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// A configured clock face.
///
/// Label tables are spelled once at construction; each render only lays out
/// and rasterizes. The current time comes from the attached [`TimeSource`]
/// (local wall-clock time unless replaced).
pub struct ClockFace {
    config: ClockConfig,
    layout: ClockLayout,
    time_source: Box<dyn TimeSource>,
}

impl std::fmt::Debug for ClockFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockFace")
            .field("config", &self.config)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl ClockFace {
    pub fn new(config: ClockConfig) -> Result<Self> {
        if config.size <= config.margin.saturating_mul(2) {
            return Err(ClockError::InvalidSize(config.size, config.margin));
        }
        if !(config.font_size_ratio.is_finite() && config.font_size_ratio > 0.0) {
            return Err(ClockError::InvalidFontRatio(config.font_size_ratio));
        }
        if !(config.max_framerate.is_finite() && config.max_framerate > 0.0) {
            return Err(ClockError::InvalidFramerate(config.max_framerate));
        }
        let layout = ClockLayout::new(config.label_order)?;
        Ok(Self {
            config,
            layout,
            time_source: Box::new(SystemClock),
        })
    }

    pub fn with_time_source(mut self, time_source: impl TimeSource + 'static) -> Self {
        self.time_source = Box::new(time_source);
        self
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn layout(&self) -> &ClockLayout {
        &self.layout
    }

    /// Hand angles for `time`, or for the time source's current time.
    pub fn hand_angles(&self, time: Option<ClockTime>) -> HandAngles {
        self.layout.hand_angles(self.resolve_time(time))
    }

    pub fn scene(&self, time: Option<ClockTime>) -> Scene {
        face::build_scene(&self.config, &self.layout, self.resolve_time(time))
    }

    /// Renders the face at `time`, or at the time source's current time.
    ///
    /// The label font is loaded from `font_path` on every call; a missing or
    /// unreadable font falls back to the built-in bitmap font.
    pub fn render(&self, time: Option<ClockTime>) -> Canvas {
        let font = self.load_font();
        self.render_with_font(time, &font)
    }

    pub fn render_with_font(&self, time: Option<ClockTime>, font: &LabelFont) -> Canvas {
        let started = Instant::now();
        let canvas = self.scene(time).rasterize(font);
        tracing::debug!(
            size = self.config.size,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "rendered clock face"
        );
        canvas
    }

    pub fn load_font(&self) -> LabelFont {
        LabelFont::load_or_builtin(&self.config.font_path, self.config.font_size())
            .with_line_spacing(self.config.line_spacing)
    }

    fn resolve_time(&self, time: Option<ClockTime>) -> ClockTime {
        time.unwrap_or_else(|| self.time_source.now())
    }

    /// Opens a window and keeps the face in step with the time source until
    /// the window is closed.
    pub fn show(&self) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let side = self.config.size;

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.window_title)
            .with_inner_size(LogicalSize::new(side as f64, side as f64))
            .with_resizable(false)
            .build(&event_loop)?;

        let window = std::sync::Arc::new(window);
        let window_clone = window.clone();
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(side, side, surface_texture)?;

        let font = self.load_font();
        let frame_duration = Duration::from_secs_f64(1.0 / self.config.max_framerate);
        let mut last_frame = Instant::now();
        tracing::info!(side, title = %self.config.window_title, "opening clock window");

        event_loop.run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::WaitUntil(last_frame + frame_duration));
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                            tracing::warn!("failed to resize surface: {}", err);
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        let canvas = self.render_with_font(None, &font);
                        pixels.frame_mut().copy_from_slice(canvas.frame());
                        if let Err(err) = pixels.render() {
                            tracing::error!("failed to present frame: {}", err);
                            window_target.exit();
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    if last_frame.elapsed() >= frame_duration {
                        window_clone.request_redraw();
                        last_frame = Instant::now();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> ClockConfig {
        ClockConfig::builder()
            .size(120)
            .font_size_ratio(12.0)
            .font_path("/nonexistent/wordclock-test.ttf")
            .build()
    }

    #[test]
    fn rejects_degenerate_sizes() {
        let config = ClockConfig::builder().size(40).build();
        assert!(matches!(
            ClockFace::new(config),
            Err(ClockError::InvalidSize(40, 20))
        ));
    }

    #[test]
    fn huge_margin_does_not_overflow() {
        let config = ClockConfig::builder().margin(u32::MAX).build();
        assert!(matches!(
            ClockFace::new(config),
            Err(ClockError::InvalidSize(400, u32::MAX))
        ));
    }

    #[test]
    fn rejects_bad_framerate() {
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = ClockConfig::builder().max_framerate(rate).build();
            assert!(matches!(
                ClockFace::new(config),
                Err(ClockError::InvalidFramerate(_))
            ));
        }
    }

    #[test]
    fn keeps_the_config_it_was_built_with() {
        let face = ClockFace::new(small_config()).unwrap();
        assert_eq!(face.config().size, 120);
        assert_eq!(face.config().font_size(), 10.0);
    }

    #[test]
    fn rejects_bad_font_ratio() {
        for ratio in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            let config = ClockConfig::builder().font_size_ratio(ratio).build();
            assert!(matches!(
                ClockFace::new(config),
                Err(ClockError::InvalidFontRatio(_))
            ));
        }
    }

    #[test]
    fn omitted_time_comes_from_the_time_source() {
        let time = ClockTime::new(3, 0, 0).unwrap();
        let face = ClockFace::new(small_config())
            .unwrap()
            .with_time_source(FixedClock(time));
        assert_eq!(face.hand_angles(None), face.hand_angles(Some(time)));
        assert_eq!(face.render(None), face.render(Some(time)));
    }

    #[test]
    fn explicit_time_overrides_the_time_source() {
        let face = ClockFace::new(small_config())
            .unwrap()
            .with_time_source(FixedClock(ClockTime::new(3, 0, 0).unwrap()));
        let other = ClockTime::new(9, 30, 15).unwrap();
        assert_ne!(face.hand_angles(None), face.hand_angles(Some(other)));
    }

    #[test]
    fn render_fills_the_requested_square() {
        let face = ClockFace::new(small_config()).unwrap();
        let canvas = face.render(Some(ClockTime::new(12, 0, 0).unwrap()));
        assert_eq!((canvas.width(), canvas.height()), (120, 120));
        assert_eq!(canvas.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(canvas.pixel(60, 60), Some(Color::BLACK));
    }
}
