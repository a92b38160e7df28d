use clap::Parser;
use wordclock::{logger, ClockConfig, ClockFace, ClockTime, FixedClock, LabelOrder};

/// Analog clock whose numerals are laid out by their English names.
#[derive(Parser, Debug)]
#[command(name = "wordclock", version, about)]
struct Cli {
    /// Window side in pixels
    #[arg(long, default_value_t = 400)]
    size: u32,

    /// Show a fixed time (HH:MM or HH:MM:SS) instead of the local time
    #[arg(long)]
    time: Option<ClockTime>,

    /// TrueType/OpenType font for the labels
    #[arg(long, default_value = "arial.ttf")]
    font: String,

    /// Label font size is the window size divided by this
    #[arg(long, default_value_t = 10.0)]
    font_size_ratio: f32,

    /// Print each hour's English name under its numeral
    #[arg(long)]
    text_too: bool,

    /// Lay the numerals out 1..12 instead of alphabetically
    #[arg(long)]
    numeric_order: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);
    tracing::debug!("CLI args: {:?}", cli);

    let config = ClockConfig::builder()
        .size(cli.size)
        .font_path(cli.font)
        .font_size_ratio(cli.font_size_ratio)
        .text_too(cli.text_too)
        .label_order(if cli.numeric_order {
            LabelOrder::Numeric
        } else {
            LabelOrder::Alphabetical
        })
        .build();

    let face = match ClockFace::new(config) {
        Ok(face) => face,
        Err(err) => {
            tracing::error!("invalid clock configuration: {}", err);
            return Err(err.into());
        }
    };
    let face = match cli.time {
        Some(time) => face.with_time_source(FixedClock(time)),
        None => face,
    };

    face.show()
}
