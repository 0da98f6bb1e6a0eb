//! Fixed-step frame loop driving an rgb-chain scene
//!
//! The scene fades in, pulses `DEMO_LOOPS` times (two parallel tracks per
//! pulse) and fades out, logging every lifecycle step.
//!
//! Environment:
//! - `TARGET_FPS` - simulated frame rate (default 60)
//! - `DEMO_LOOPS` - number of pulses (default 3)
//! - `DEMO_REALTIME` - sleep between frames when set

use std::thread;
use std::time::Duration;

use rgb_chain::prelude::*;
use tracing::info;

/// Upper bound on simulated time before the demo gives up.
const MAX_SECONDS: f32 = 120.0;

/// Give `id` a fixed duration and log its start and end.
fn timed(
    controller: &mut Controller,
    id: EventId,
    name: &'static str,
    seconds: f32,
) -> ChainResult<()> {
    controller.on_start(id, move |controller, _| {
        info!(tick = controller.tick(), "{name} started");
    })?;
    controller.on_update(id, move |_, _, args| args.accumulated() >= seconds)?;
    controller.on_end(id, move |controller, event| {
        let elapsed = controller.elapsed(event).unwrap_or_default();
        info!(tick = controller.tick(), elapsed, "{name} ended");
    })?;
    Ok(())
}

fn build_scene(controller: &mut Controller, loops: u32) -> ChainResult<EventId> {
    let scene = controller.create();

    let fade_in = controller.init(scene)?;
    timed(controller, fade_in, "fade in", 0.5)?;

    let pulses = controller.extend(fade_in)?;
    let outro = controller.repeat_with(pulses, loops, |controller, body| {
        let glow = controller.compound(body)?;
        timed(controller, glow, "glow", 0.25)?;
        let shake = controller.extend(glow)?;
        timed(controller, shake, "shake", 0.4)?;
        Ok(())
    })?;

    let fade_out = controller.sequence(outro)?;
    timed(controller, fade_out, "fade out", 0.5)?;

    Ok(scene)
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rgb_chain_demo=info".parse()?)
                .add_directive("rgb_chain=debug".parse()?),
        )
        .init();

    let target_fps: f32 = std::env::var("TARGET_FPS")
        .ok()
        .and_then(|fps| fps.parse().ok())
        .filter(|fps: &f32| *fps > 0.0)
        .unwrap_or(60.0);

    let loops: u32 = std::env::var("DEMO_LOOPS")
        .ok()
        .and_then(|loops| loops.parse().ok())
        .unwrap_or(3);

    let realtime = std::env::var_os("DEMO_REALTIME").is_some();

    info!(target_fps, loops, realtime, "Starting rgb-chain demo");

    let mut controller = Controller::new();
    let scene = build_scene(&mut controller, loops)?;
    controller.start(scene)?;

    let frame_time = 1.0 / target_fps;
    let max_frames = (MAX_SECONDS * target_fps) as u64;

    while controller.is_running(scene) {
        if controller.tick() >= max_frames {
            eyre::bail!("scene still running after {MAX_SECONDS} seconds");
        }
        controller.update(frame_time);
        if realtime {
            thread::sleep(Duration::from_secs_f32(frame_time));
        }
    }

    info!(
        ticks = controller.tick(),
        events = controller.len(),
        "Scene finished"
    );
    Ok(())
}
