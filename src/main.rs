//! Cloudveil demo entry point
//!
//! Runs the reveal timeline headlessly against a simulated clock, then
//! dumps the paint instructions for both curtains as JSON.

use glam::Vec2;

use cloudveil::render::curtain_height;
use cloudveil::{Curtain, CurtainRenderer, Phase, RevealConfig, RevealMachine};

fn main() -> serde_json::Result<()> {
    env_logger::init();

    let viewport = Vec2::new(390.0, 844.0);
    let config = RevealConfig::default();
    log::info!("cloudveil demo starting, config: {config:?}");

    let mut machine = RevealMachine::new(config);
    machine.set_viewport(viewport);
    machine.start(0.0);

    // Poll at 60 Hz, tapping as soon as the machine waits for one
    let mut t = 0.0;
    let mut tapped = false;
    while machine.phase() != Phase::Revealed {
        machine.advance(t);
        if !tapped && machine.phase() == Phase::AwaitTap {
            log::info!("tap at t={t:.2}");
            machine.on_tap(t);
            tapped = true;
        }
        t += 1.0 / 60.0;
    }
    let state = machine.state();
    log::info!(
        "revealed at t={t:.2}, offsets top {:.1} / bottom {:.1}",
        state.offsets.top,
        state.offsets.bottom
    );

    let container = Vec2::new(viewport.x, curtain_height(viewport.y));
    let mut renderer = CurtainRenderer::new(container);
    for curtain in [Curtain::Top, Curtain::Bottom] {
        let paint = renderer.render(curtain, false);
        println!("{}", serde_json::to_string_pretty(&paint)?);
    }

    Ok(())
}
