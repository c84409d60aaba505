use plsim::{ScenarioConfig, Simulation};
use plsim::run_2d;
use plsim::{bench_step, bench_step_curve, run_headless};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Particle life: typed particles with asymmetric attraction on a torus")]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run this many steps without opening a window
    #[arg(long)]
    headless: Option<u64>,

    /// Time single steps over a range of particle counts and print CSV
    #[arg(long)]
    bench: bool,

    /// With --bench: sweep n = 200..=6000 instead of a few sizes
    #[arg(long, requires = "bench")]
    curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        env_logger::init();
        if args.curve {
            bench_step_curve()?;
        } else {
            bench_step()?;
        }
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;

    match args.headless {
        Some(steps) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
            let mut sim = Simulation::build_simulation(&scenario_cfg)?;
            run_headless(&mut sim, steps)?;
        }
        None => {
            // Bevy installs its own logger for the viewer
            let sim = Simulation::build_simulation(&scenario_cfg)?;
            run_2d(sim, scenario_cfg.viewer);
        }
    }

    Ok(())
}
