use std::path::PathBuf;
use std::time::Duration;

/// Fixed wiring and timing of the monitor rig. Built once in `main` and
/// handed to the parts that need it.
#[derive(Clone, Debug)]
pub struct Config {
    /// GPIO character device carrying both output lines.
    pub gpio_chip: PathBuf,
    /// Fan transistor gate.
    pub fan_pin: u32,
    /// Display power-rail transistor gate.
    pub display_power_pin: u32,
    /// Wait after raising the display rail before any I2C traffic.
    pub power_settle: Duration,
    pub i2c_bus: PathBuf,
    pub display_address: u8,
    pub thermal_zone: PathBuf,
    /// Fan switches on strictly above this temperature, in Fahrenheit.
    pub fan_on_above_f: f32,
    /// Blocking window for the CPU load measurement.
    pub cpu_sample_window: Duration,
    /// Idle time between cycles, on top of the CPU sample window.
    pub refresh_interval: Duration,
    pub startup_frames: u32,
    pub startup_frame_time: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gpio_chip: "/dev/gpiochip0".into(),
            fan_pin: 17,
            display_power_pin: 18,
            power_settle: Duration::from_secs(5),
            i2c_bus: "/dev/i2c-1".into(),
            display_address: 0x3C,
            thermal_zone: "/sys/class/thermal/thermal_zone0/temp".into(),
            fan_on_above_f: 100.0,
            cpu_sample_window: Duration::from_secs(1),
            refresh_interval: Duration::from_secs(2),
            startup_frames: 60,
            // Aim for 30 FPS.
            startup_frame_time: Duration::from_secs_f64(1.0 / 30.0),
        }
    }
}
