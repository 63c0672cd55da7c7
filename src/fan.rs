use anyhow::anyhow;
use embedded_hal::digital::OutputPin;

/// ON iff a reading is present and strictly above the threshold. An absent
/// reading always means OFF.
pub fn fan_target(temp_f: Option<f32>, on_above_f: f32) -> bool {
    matches!(temp_f, Some(temp) if temp > on_above_f)
}

/// Binary fan actuator behind a GPIO transistor. The pin is rewritten on
/// every update, whether or not the state changed.
pub struct Fan<P: OutputPin> {
    pin: P,
    on_above_f: f32,
    on: bool,
}

impl<P: OutputPin> Fan<P> {
    /// Starts with the fan off.
    pub fn new(mut pin: P, on_above_f: f32) -> anyhow::Result<Self> {
        pin.set_low()
            .map_err(|e| anyhow!("driving fan pin low: {e:?}"))?;
        Ok(Self {
            pin,
            on_above_f,
            on: false,
        })
    }

    /// Applies the threshold rule for this cycle's reading and returns the
    /// state the pin was left in.
    pub fn update(&mut self, temp_f: Option<f32>) -> anyhow::Result<bool> {
        let on = fan_target(temp_f, self.on_above_f);
        if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
        .map_err(|e| anyhow!("switching fan pin: {e:?}"))?;

        if on != self.on {
            log::info!("fan {}", if on { "on" } else { "off" });
        }
        self.on = on;
        Ok(on)
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
