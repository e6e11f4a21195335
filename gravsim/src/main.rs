use gravsim::{Printer, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "solar.yaml")]
    file_name: String,

    /// Print the population's names and exit without stepping
    #[arg(long)]
    print: bool,

    /// Step this many times instead of running to t_end
    #[arg(long)]
    steps: Option<u64>,

    /// Log every top-level body's position every N steps (0 = never)
    #[arg(long, default_value_t = 0)]
    report_every: u64,
}

// scenario files live next to the manifest, under scenarios/
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let scenario_cfg = ScenarioConfig::from_reader(BufReader::new(file))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.print {
        println!("{}", Printer::print(&scenario.registry));
        return Ok(());
    }

    let n = args.steps.unwrap_or_else(|| scenario.parameters.step_count());
    let report_every = args.report_every;
    scenario.run_steps(n, |registry| {
        if report_every > 0 && registry.steps() % report_every == 0 {
            for b in registry {
                info!("t = {:.0} s  {:<8} x = ({:.6e}, {:.6e})",
                    registry.time(), b.name(), b.position().x, b.position().y);
            }
        }
    })?;

    println!("after {} steps (t = {} s):", scenario.registry.steps(), scenario.registry.time());
    for b in &scenario.registry {
        let (x, v) = (b.position(), b.velocity());
        println!("{:<8} x = ({:.6e}, {:.6e})  v = ({:.6e}, {:.6e})", b.name(), x.x, x.y, v.x, v.y);
    }

    Ok(())
}
