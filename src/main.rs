use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Context;

use crate::config::Config;
use crate::fan::Fan;
use crate::monitor::App;
use crate::screen::ScreenBuilder;
use crate::telemetry::Sampler;

mod config;
mod fan;
mod gpio;
mod monitor;
mod screen;
mod telemetry;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let shutdown = Arc::new(AtomicBool::new(false));
    for signal in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
        signal_hook::flag::register(signal, shutdown.clone())
            .with_context(|| format!("registering handler for signal {signal}"))?;
    }

    let config = Config::default();
    log::info!("starting: {config:?}");

    // The fan sits on GPIO 17, the display's power transistor on GPIO 18.
    // Both switch low-side; the fan starts off and the display rail needs
    // its settle time before the controller answers on I2C.
    let fan_pin = gpio::claim_output(&config.gpio_chip, config.fan_pin, "sysmonitor-fan")?;
    let fan = Fan::new(fan_pin, config.fan_on_above_f)?;

    let power_pin = gpio::claim_output(
        &config.gpio_chip,
        config.display_power_pin,
        "sysmonitor-oled",
    )?;
    log::info!("display rail up, settling for {:?}", config.power_settle);
    let _display_power = gpio::DisplayPower::engage(power_pin, config.power_settle)?;

    let screen = ScreenBuilder {
        i2c_bus: config.i2c_bus.clone(),
        address: config.display_address,
    }
    .build()?;

    let sampler = Sampler::new(config.thermal_zone.clone(), config.cpu_sample_window);

    let app = App {
        config,
        sampler,
        fan,
        screen,
    };
    monitor::run(app, &shutdown)?;

    println!("Program stopped by user");
    Ok(())
}
