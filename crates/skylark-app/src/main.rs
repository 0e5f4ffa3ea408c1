use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use skylark_app::control::Controller;
use skylark_app::hud::{format_hud, HudLogSink};
use skylark_app::script::FlightScript;
use skylark_app::settings::{FlightModelPreset, FlightModelSettings, Settings};

/// Arcade flight simulation core, driven by a scripted take-off.
#[derive(Parser, Debug)]
#[clap(name = "skylark", version)]
struct Args {
    /// TOML settings file.
    #[clap(long)]
    config: Option<PathBuf>,

    /// Number of ticks to run.
    #[clap(long, default_value_t = 600)]
    ticks: u64,

    /// Override the RNG seed.
    #[clap(long)]
    seed: Option<u64>,

    /// Thrust-and-drag flight model only.
    #[clap(long)]
    baseline: bool,

    /// Run on the game-loop thread in wall-clock time instead of headless.
    #[clap(long)]
    realtime: bool,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if args.baseline {
        settings.flight_model = FlightModelSettings::from_preset(FlightModelPreset::Baseline);
    }

    let config = settings.sim_config();
    let bindings = settings.key_bindings();
    let script = FlightScript::takeoff();
    let mut hud = HudLogSink::new(settings.hud_interval_ticks);

    let last = if args.realtime {
        let controller = Controller::new(config, bindings);
        controller.start(Box::new(hud))?;
        controller.play(&script, args.ticks)?;
        let last = controller.latest_snapshot()?;
        controller.stop()?;
        last
    } else {
        script.run_headless(config, &bindings, args.ticks, &mut hud)
    };

    if let Some(snap) = &last {
        if let Some(instruments) = &snap.instruments {
            info!("final: {}", format_hud(instruments, snap.camera_mode));
        }
    }
    Ok(())
}
