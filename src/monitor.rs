use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::anyhow;
use embedded_hal::digital::OutputPin;
use sysmonitor_graphics::{draw_status, StartupAnimation};

use crate::config::Config;
use crate::fan::Fan;
use crate::screen::Screen;
use crate::telemetry::Sampler;

/// How often the idle sleep rechecks the shutdown flag.
const SHUTDOWN_POLL: Duration = Duration::from_millis(50);

pub struct App<P: OutputPin> {
    pub config: Config,
    pub sampler: Sampler,
    pub fan: Fan<P>,
    pub screen: Screen,
}

/// Runs the startup animation once, then monitors until the shutdown flag
/// is raised. Returns `Ok` on shutdown; hardware failures bubble out.
pub fn run<P: OutputPin>(mut app: App<P>, shutdown: &AtomicBool) -> anyhow::Result<()> {
    startup(&mut app, shutdown)?;
    log::info!(
        "monitoring every {:?} + {:?} sample window",
        app.config.refresh_interval,
        app.config.cpu_sample_window
    );
    monitor(&mut app, shutdown)
}

fn startup(app: &mut App<impl OutputPin>, shutdown: &AtomicBool) -> anyhow::Result<()> {
    let animation = StartupAnimation::new(app.config.startup_frames);
    for frame in 0..animation.total_frames() {
        if shutdown.load(Ordering::Relaxed) {
            return Ok(());
        }
        let mut canvas = app.screen.begin_frame();
        animation
            .render(&mut canvas, frame)
            .map_err(|e| anyhow!("drawing startup frame {frame}: {e:?}"))?;
        canvas.commit()?;
        thread::sleep(app.config.startup_frame_time);
    }
    Ok(())
}

fn monitor(app: &mut App<impl OutputPin>, shutdown: &AtomicBool) -> anyhow::Result<()> {
    while !shutdown.load(Ordering::Relaxed) {
        // Strictly sample, then decide, then render.
        let sample = app.sampler.sample();
        app.fan.update(sample.temp_f)?;
        let fan_on = app.fan.is_on();
        log::debug!(
            "cpu {:.1}% mem {:.1}% temp {:?} fan {fan_on}",
            sample.cpu_pct,
            sample.mem_pct,
            sample.temp_f
        );

        // The sample window blocks; skip the dead frame if shutdown was
        // requested while it ran.
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        let mut frame = app.screen.begin_frame();
        draw_status(&mut frame, &sample, fan_on)
            .map_err(|e| anyhow!("drawing status frame: {e:?}"))?;
        frame.commit()?;

        idle(app.config.refresh_interval, shutdown);
    }
    Ok(())
}

/// Sleeps in short ticks so an interrupt cuts the idle period instead of
/// waiting out the full interval.
fn idle(total: Duration, shutdown: &AtomicBool) {
    let mut remaining = total;
    while !remaining.is_zero() && !shutdown.load(Ordering::Relaxed) {
        let tick = remaining.min(SHUTDOWN_POLL);
        thread::sleep(tick);
        remaining -= tick;
    }
}
