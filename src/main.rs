//! Gonk entry point
//!
//! Headless native driver: generates a system, runs it at a fixed rate and
//! prints the final state as JSON for an external renderer.
//!
//! Usage: `gonk [config.json]`. `GONK_SEED` and `GONK_SECONDS` override the
//! seed and simulated duration.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use gonk::sim::{FixedStep, SolarSystem};
    use gonk::{Roster, SimConfig};

    env_logger::init();
    log::info!("Gonk (native) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            SimConfig::load(&path).with_context(|| format!("loading config {path}"))?
        }
        None => SimConfig::default(),
    };

    let seed = env_or("GONK_SEED", 42u64)?;
    let seconds = env_or("GONK_SECONDS", 10.0f64)?;

    let roster = Roster::new("RagingDave", 0);
    let mut system =
        SolarSystem::from_seed(config, roster, seed).context("generating solar system")?;
    log::info!("System initialized with seed: {}", seed);

    // Feed the clock as a 60 FPS renderer would
    let frame_dt = 1.0 / 60.0;
    let frames = (seconds / frame_dt).round() as u64;
    let mut clock = FixedStep::default();
    for frame in 0..frames {
        clock.advance(&mut system, frame_dt);
        if frame % 60 == 59 {
            log::debug!(
                "t={:.1}s ships={} objects={}",
                system.elapsed,
                system.total_ships(),
                system.object_count()
            );
        }
    }

    log::info!(
        "Ran {} ticks ({:.1}s, {:.2} step pending): {} ships stationed, {} pooled",
        system.time_ticks,
        system.elapsed,
        clock.alpha(),
        system.total_ships(),
        system.pool().free_count()
    );

    let json =
        serde_json::to_string_pretty(&system.snapshot()).context("serializing snapshot")?;
    println!("{json}");
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    use anyhow::Context;
    match std::env::var(key) {
        Ok(raw) => raw.parse().with_context(|| format!("parsing {key}={raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No wasm driver; the library is consumed by a renderer directly
}
