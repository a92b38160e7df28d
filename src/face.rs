// ============================================================================
// CLOCK FACE GEOMETRY
// ============================================================================

// Hour numerals are walked in the order of their label table. Alphabetical
// order puts "eight" where a normal clock has 12; the hands are routed
// through the same table so they land on the right numeral.

use std::f64::consts::PI;
use std::ops::RangeInclusive;

use crate::config::{ClockConfig, LabelOrder};
use crate::error::SpellError;
use crate::scene::{DrawCommand, Scene};
use crate::speller::words;
use crate::time::ClockTime;

pub const HOURS: RangeInclusive<u32> = 1..=12;
pub const MINUTES: RangeInclusive<u32> = 1..=60;

/// A dial value and its English name. Ordering compares the word first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Label {
    pub word: String,
    pub value: u32,
}

/// Spells every value in `values` and sorts the result per `order`.
pub fn label_table(
    values: RangeInclusive<u32>,
    order: LabelOrder,
) -> Result<Vec<Label>, SpellError> {
    let mut labels = values
        .map(|value| {
            Ok(Label {
                word: words(value as u64)?,
                value,
            })
        })
        .collect::<Result<Vec<_>, SpellError>>()?;
    let top = labels.iter().map(|label| label.value).max().unwrap_or(1);
    match order {
        LabelOrder::Alphabetical => labels.sort(),
        // the top value (12, 60) takes the 12 o'clock slot
        LabelOrder::Numeric => labels.sort_by_key(|label| label.value % top),
    }
    Ok(labels)
}

/// Maps a dial value back to its position in a label table.
///
/// Value 0 resolves to the same slot as the largest value, so hour 0 reads as
/// 12 and minute 0 as 60.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialIndex {
    slots: Vec<usize>,
}

impl DialIndex {
    pub fn new(labels: &[Label]) -> Self {
        let max = labels.iter().map(|label| label.value).max().unwrap_or(0) as usize;
        let mut slots = vec![0; max + 1];
        for (position, label) in labels.iter().enumerate() {
            slots[label.value as usize] = position;
        }
        slots[0] = slots[max];
        Self { slots }
    }

    pub fn position(&self, value: u32) -> usize {
        self.slots[value as usize % self.slots.len()]
    }
}

/// Hand directions in radians, measured clockwise from 3 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

/// Angle of the hour numeral at `position` in the hour table.
pub fn hour_angle(position: usize) -> f64 {
    PI / 6.0 * (position as f64 - 3.0)
}

/// Angle of the minute slot at `position`; position 0 is 12 o'clock.
pub fn minute_angle(position: usize) -> f64 {
    PI / 30.0 * (position as f64 - 15.0)
}

#[derive(Debug, Clone)]
pub struct ClockLayout {
    hours: Vec<Label>,
    minutes: Vec<Label>,
    hour_index: DialIndex,
    minute_index: DialIndex,
}

impl ClockLayout {
    pub fn new(order: LabelOrder) -> Result<Self, SpellError> {
        let hours = label_table(HOURS, order)?;
        let minutes = label_table(MINUTES, order)?;
        let hour_index = DialIndex::new(&hours);
        let minute_index = DialIndex::new(&minutes);
        Ok(Self {
            hours,
            minutes,
            hour_index,
            minute_index,
        })
    }

    pub fn hours(&self) -> &[Label] {
        &self.hours
    }

    pub fn minutes(&self) -> &[Label] {
        &self.minutes
    }

    pub fn hour_position(&self, hour: u32) -> usize {
        self.hour_index.position(hour % 12)
    }

    /// Seconds share this table.
    pub fn minute_position(&self, minute: u32) -> usize {
        self.minute_index.position(minute)
    }

    pub fn hand_angles(&self, time: ClockTime) -> HandAngles {
        HandAngles {
            hour: hour_angle(self.hour_position(time.hour())),
            minute: minute_angle(self.minute_position(time.minute())),
            second: minute_angle(self.minute_position(time.second())),
        }
    }
}

// ============================================================================
// SCENE CONSTRUCTION
// ============================================================================

/// Text printed at an hour position.
pub fn hour_label_text(label: &Label, text_too: bool) -> String {
    if text_too {
        format!("{}\n{}", label.value, label.word)
    } else {
        format!("{}", label.value)
    }
}

fn polar(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
    (
        center.0 + radius * angle.cos(),
        center.1 + radius * angle.sin(),
    )
}

/// Builds the draw list for one frame: background, rim, numerals, minute
/// ticks, hands and the centre cap, in that order.
pub fn build_scene(config: &ClockConfig, layout: &ClockLayout, time: ClockTime) -> Scene {
    let size = config.size as i32;
    let center = (size / 2, size / 2);
    let radius = size / 2 - config.margin as i32;
    let origin = (center.0 as f64, center.1 as f64);
    let r = radius as f64;

    let mut scene = Scene::new(config.size as usize, config.size as usize);
    scene.add_command(DrawCommand::Clear(config.background_color));
    scene.add_command(DrawCommand::Ring {
        center,
        radius,
        width: config.outline_width,
        color: config.dial_color,
    });

    for (position, label) in layout.hours().iter().enumerate() {
        scene.add_command(DrawCommand::Text {
            center: polar(origin, r * config.label_radius_factor, hour_angle(position)),
            text: hour_label_text(label, config.text_too),
            color: config.text_color,
        });
    }

    for minute in 0..60 {
        let angle = minute_angle(minute);
        let inner_factor = if minute % 5 == 0 {
            config.major_tick_inner_factor
        } else {
            config.minor_tick_inner_factor
        };
        scene.add_command(DrawCommand::Line {
            from: polar(origin, r * inner_factor, angle),
            to: polar(origin, r, angle),
            width: config.tick_width,
            color: config.dial_color,
        });
    }

    let angles = layout.hand_angles(time);
    for (angle, length, width, color) in [
        (
            angles.hour,
            config.hour_hand_length,
            config.hour_hand_width,
            config.hand_color,
        ),
        (
            angles.minute,
            config.minute_hand_length,
            config.minute_hand_width,
            config.hand_color,
        ),
        (
            angles.second,
            config.second_hand_length,
            config.second_hand_width,
            config.second_hand_color,
        ),
    ] {
        scene.add_command(DrawCommand::Line {
            from: origin,
            to: polar(origin, r * length, angle),
            width,
            color,
        });
    }

    scene.add_command(DrawCommand::Disc {
        center,
        radius: config.center_dot_radius,
        color: config.hand_color,
    });

    tracing::debug!(
        commands = scene.commands().len(),
        hour = time.hour(),
        minute = time.minute(),
        second = time.second(),
        "built clock scene"
    );
    scene
}
