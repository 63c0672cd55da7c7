use embedded_graphics::{
    mono_font::{iso_8859_1::FONT_5X8, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Point, Size},
    text::{Baseline, Text},
    Drawable,
};

use primitives::draw_progress_bar;

pub mod primitives;
pub mod startup;

pub use startup::StartupAnimation;

/// One telemetry readout, produced per cycle and discarded after rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub cpu_pct: f32,
    pub mem_pct: f32,
    /// Fahrenheit. `None` when the thermal zone could not be read.
    pub temp_f: Option<f32>,
}

const BAR_SIZE: Size = Size::new(100, 10);
const PCT_MAX: f32 = 100.0;

const CPU_LABEL: Point = Point::new(0, 0);
const CPU_BAR: Point = Point::new(0, 12);
const CPU_PCT: Point = Point::new(105, 12);
const MEM_LABEL: Point = Point::new(0, 26);
const MEM_BAR: Point = Point::new(0, 38);
const MEM_PCT: Point = Point::new(105, 38);
const TEMP_ROW: Point = Point::new(0, 52);
const FAN_ROW: Point = Point::new(80, 52);

/// Composes one monitoring frame for a 128x64 panel: CPU and memory rows
/// with bars and rounded percentages, then the temperature row. The fan
/// readout rides on the temperature row and is omitted when there is no
/// reading.
pub fn draw_status<D>(target: &mut D, sample: &Sample, fan_on: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);

    Text::with_baseline("CPU", CPU_LABEL, style, Baseline::Top).draw(target)?;
    draw_progress_bar(target, CPU_BAR, BAR_SIZE, sample.cpu_pct, PCT_MAX)?;
    Text::with_baseline(&pct_label(sample.cpu_pct), CPU_PCT, style, Baseline::Top).draw(target)?;

    Text::with_baseline("MEM", MEM_LABEL, style, Baseline::Top).draw(target)?;
    draw_progress_bar(target, MEM_BAR, BAR_SIZE, sample.mem_pct, PCT_MAX)?;
    Text::with_baseline(&pct_label(sample.mem_pct), MEM_PCT, style, Baseline::Top).draw(target)?;

    Text::with_baseline(&temp_label(sample.temp_f), TEMP_ROW, style, Baseline::Top).draw(target)?;
    if sample.temp_f.is_some() {
        Text::with_baseline(fan_label(fan_on), FAN_ROW, style, Baseline::Top).draw(target)?;
    }

    Ok(())
}

fn pct_label(pct: f32) -> String {
    format!("{pct:.0}%")
}

fn temp_label(temp_f: Option<f32>) -> String {
    match temp_f {
        Some(temp) => format!("TEMP: {temp:.0}°F"),
        None => "TEMP: N/A".to_string(),
    }
}

fn fan_label(fan_on: bool) -> &'static str {
    if fan_on {
        "FAN: ON"
    } else {
        "FAN: OFF"
    }
}
