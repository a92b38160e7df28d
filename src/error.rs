use thiserror::Error;

/// Failures of the number speller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpellError {
    #[error("{0} is beyond the million tier (largest spellable value is 999999999)")]
    OutOfRange(u64),
}

/// Failures while acquiring a scalable label font.
///
/// These never escape a render: `LabelFont::load_or_builtin` swaps in the
/// built-in bitmap font instead.
#[derive(Error, Debug)]
pub enum FontError {
    #[error("Failed to read font file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Font file {path} is not a TrueType/OpenType font")]
    Parse { path: String },
}

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("Canvas size {0} is too small (must exceed twice the {1}px margin)")]
    InvalidSize(u32, u32),

    #[error("Font size ratio must be a positive finite number, got {0}")]
    InvalidFontRatio(f32),

    #[error("Maximum framerate must be a positive finite number, got {0}")]
    InvalidFramerate(f64),

    #[error("Invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    #[error("Could not parse time {0:?} (expected HH:MM or HH:MM:SS)")]
    TimeFormat(String),

    #[error("Label spelling failed: {0}")]
    Spell(#[from] SpellError),
}

pub type Result<T> = std::result::Result<T, ClockError>;
