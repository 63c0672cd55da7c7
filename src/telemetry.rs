use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use sysinfo::System;
use sysmonitor_graphics::Sample;

pub struct Sampler {
    system: System,
    thermal_zone: PathBuf,
    cpu_sample_window: Duration,
}

impl Sampler {
    pub fn new(thermal_zone: PathBuf, cpu_sample_window: Duration) -> Self {
        Self {
            system: System::new(),
            thermal_zone,
            cpu_sample_window,
        }
    }

    /// Takes one readout. Blocks for the CPU sample window: load is the
    /// delta between two counter snapshots, so the window sets how much
    /// activity one reading averages over.
    pub fn sample(&mut self) -> Sample {
        Sample {
            cpu_pct: self.sample_cpu(),
            mem_pct: self.sample_memory(),
            temp_f: read_thermal_zone_f(&self.thermal_zone),
        }
    }

    fn sample_cpu(&mut self) -> f32 {
        self.system.refresh_cpu_usage();
        thread::sleep(self.cpu_sample_window);
        self.system.refresh_cpu_usage();
        self.system.global_cpu_info().cpu_usage()
    }

    fn sample_memory(&mut self) -> f32 {
        self.system.refresh_memory();
        memory_percent(self.system.total_memory(), self.system.available_memory())
    }
}

fn memory_percent(total: u64, available: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    total.saturating_sub(available) as f32 / total as f32 * 100.0
}

/// Reads a sysfs thermal zone (millidegrees Celsius as text) and converts it
/// to Fahrenheit. Every failure collapses to `None`: a monitor without a
/// temperature still reports CPU and memory.
pub fn read_thermal_zone_f(path: &Path) -> Option<f32> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            log::debug!("thermal zone unreadable: {err}");
            return None;
        }
    };
    let millidegrees: f32 = match raw.trim().parse() {
        Ok(value) => value,
        Err(err) => {
            log::debug!("thermal zone garbled: {err}");
            return None;
        }
    };
    let celsius = millidegrees / 1000.0;
    Some(celsius * 9.0 / 5.0 + 32.0)
}
