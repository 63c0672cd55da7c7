use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context};
use embedded_hal::digital::OutputPin;
use linux_embedded_hal::gpio_cdev::{Chip, LineRequestFlags};
use linux_embedded_hal::CdevPin;

/// Claims a GPIO line as an output, initially low, through the character
/// device.
pub fn claim_output(chip_path: &Path, line: u32, consumer: &str) -> anyhow::Result<CdevPin> {
    let mut chip = Chip::new(chip_path)
        .with_context(|| format!("opening GPIO chip {}", chip_path.display()))?;
    let handle = chip
        .get_line(line)
        .with_context(|| format!("looking up GPIO line {line}"))?
        .request(LineRequestFlags::OUTPUT, 0, consumer)
        .with_context(|| format!("claiming GPIO line {line} for {consumer}"))?;
    CdevPin::new(handle).with_context(|| format!("wrapping GPIO line {line}"))
}

/// Holds the display's power-rail transistor high for the process lifetime.
pub struct DisplayPower {
    _pin: CdevPin,
}

impl DisplayPower {
    /// Raises the rail, then blocks until the panel has had time to come up.
    /// The controller only accepts I2C traffic once powered.
    pub fn engage(mut pin: CdevPin, settle: Duration) -> anyhow::Result<Self> {
        pin.set_high()
            .map_err(|e| anyhow!("raising display power rail: {e:?}"))?;
        thread::sleep(settle);
        Ok(Self { _pin: pin })
    }
}
