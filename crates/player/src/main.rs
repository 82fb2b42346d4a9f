//! Hudkit Player - drives the debug readout for a few frames.

use hudkit_player::application::hud::{render_frame, PlayerHud};
use hudkit_player::{create_display_target, logging, DebugReadout, RunnerConfig};

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    tracing::info!("Starting Hudkit Player");

    let config = RunnerConfig::from_env()?;
    tracing::debug!(frames = config.frames, "Loaded runner config");

    let mut target = create_display_target(&config.readout)?;
    let mut readout = DebugReadout::with_config(config.readout);

    let mut rng = rand::thread_rng();
    let mut hud = PlayerHud::spawn(&mut rng);
    tracing::info!(name = %hud.name, "Spawned local player");

    for frame in 0..config.frames {
        hud.advance_to(frame);
        render_frame(&mut readout, frame, &hud);
        readout.show_readout(target.as_mut());
    }

    Ok(())
}
