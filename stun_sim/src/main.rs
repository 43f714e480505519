//! stun_sim - Run a scripted stun engagement
//!
//! Usage: `stun_sim <scenario.toml> [constants.toml]`
//!
//! Set `RUST_LOG=stun_core=debug` to see every evaluation.

mod scenario;

use anyhow::{bail, Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scenario::Scenario;
use std::path::PathBuf;
use stun_core::config::{load_stun_constants, load_toml};
use stun_core::{default_constants, StunCalculator, StunSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(scenario_path) = args.next().map(PathBuf::from) else {
        bail!("usage: stun_sim <scenario.toml> [constants.toml]");
    };

    let constants = match args.next() {
        Some(path) => load_stun_constants(PathBuf::from(&path).as_path())
            .with_context(|| format!("loading constants from {}", path))?,
        None => default_constants(),
    };

    let scenario: Scenario = load_toml(&scenario_path)
        .with_context(|| format!("loading scenario from {}", scenario_path.display()))?;

    let calculator = StunCalculator::new(constants).context("invalid stun constants")?;
    run(&scenario, calculator)
}

fn run(scenario: &Scenario, calculator: StunCalculator) -> Result<()> {
    let mut session = StunSession::new(calculator);
    let mut rng = ChaCha8Rng::seed_from_u64(scenario.seed);

    for target in &scenario.targets {
        let meter = session
            .register_target(target.id.clone(), target.max_life, target.resolved_modifiers())
            .with_context(|| format!("registering target {}", target.id))?;
        info!(
            target_id = %target.id,
            max_life = target.max_life,
            max_buildup = meter.max_buildup(),
            "target ready"
        );
    }

    for (index, planned) in scenario.hits.iter().enumerate() {
        for id in session.tick(scenario.seconds_between_hits) {
            println!("       {} recovered from heavy stun", id);
        }

        let result = session
            .resolve_hit_with_rng(&planned.target, &planned.hit, &mut rng)
            .with_context(|| format!("resolving hit {} on {}", index + 1, planned.target))?;
        println!("[{:>3}] {}: {}", index + 1, planned.target, result.summary());
    }

    for id in session.target_ids() {
        if let Some(meter) = session.meter(id) {
            println!(
                "{}: {:.1}% buildup, {:?}, {} hits",
                id,
                meter.buildup_percentage(),
                meter.state(),
                meter.hits_received()
            );
        }
    }

    Ok(())
}
