use bon::Builder;

// ============================================================================
// COLOR CONFIGURATION
// ============================================================================

/// Color representation for clock face elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const RED: Color = Color::new(0xff, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// ============================================================================
// CLOCK CONFIGURATION
// ============================================================================

/// Order in which hour numerals are laid out around the face.
///
/// `Alphabetical` walks the numerals in the lexicographic order of their
/// English names ("eight", "eleven", "five", ...). The hands follow the same
/// order so they always point at the numeral for the current time.
/// `Numeric` is the conventional face with 12 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelOrder {
    #[default]
    Alphabetical,
    Numeric,
}

#[derive(Debug, Clone, Builder)]
pub struct ClockConfig {
    /// Side of the square canvas in pixels.
    #[builder(default = 400)]
    pub size: u32,
    /// Label font size is `size / font_size_ratio`.
    #[builder(default = 1.0)]
    pub font_size_ratio: f32,
    /// Print the English word under each hour numeral.
    #[builder(default = false)]
    pub text_too: bool,
    #[builder(into, default = "arial.ttf".to_string())]
    pub font_path: String,
    #[builder(default)]
    pub label_order: LabelOrder,

    // Dial geometry
    #[builder(default = 20)]
    pub margin: u32,
    #[builder(default = 5.0)]
    pub outline_width: f32,
    #[builder(default = 0.85)]
    pub label_radius_factor: f64,
    #[builder(default = 4)]
    pub line_spacing: i32,

    // Tick configuration
    #[builder(default = 0.92)]
    pub major_tick_inner_factor: f64,
    #[builder(default = 0.96)]
    pub minor_tick_inner_factor: f64,
    #[builder(default = 2.0)]
    pub tick_width: f32,

    // Hand configuration
    #[builder(default = 0.5)]
    pub hour_hand_length: f64,
    #[builder(default = 0.75)]
    pub minute_hand_length: f64,
    #[builder(default = 0.9)]
    pub second_hand_length: f64,
    #[builder(default = 8.0)]
    pub hour_hand_width: f32,
    #[builder(default = 5.0)]
    pub minute_hand_width: f32,
    #[builder(default = 2.0)]
    pub second_hand_width: f32,
    #[builder(default = 10)]
    pub center_dot_radius: i32,

    // Colors
    #[builder(default = Color::WHITE)]
    pub background_color: Color,
    #[builder(default = Color::BLACK)]
    pub dial_color: Color,
    #[builder(default = Color::BLACK)]
    pub text_color: Color,
    #[builder(default = Color::BLACK)]
    pub hand_color: Color,
    #[builder(default = Color::RED)]
    pub second_hand_color: Color,

    // Window configuration
    #[builder(into, default = "Word Clock".to_string())]
    pub window_title: String,
    #[builder(default = 1.0)]
    pub max_framerate: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ClockConfig {
    pub fn font_size(&self) -> f32 {
        self.size as f32 / self.font_size_ratio
    }
}
