//! Run a scenario through the tick loop.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use cultivation_content::{CharacterLoader, ContentFactory, Scenario};
use cultivation_core::{Resolver, effective_maximums, effective_stats};
use tracing::info;

use crate::config::SimConfig;
use crate::simulation::{SimReport, Simulation};

/// Simulate a character over time, replaying a scripted scenario
#[derive(Debug, Parser)]
pub struct Run {
    /// Character sheet name under `characters/` (without .ron)
    #[arg(short, long, default_value = "lin_feng")]
    character: String,

    /// Scenario name under `scenarios/` (without .ron); omit to just regenerate
    #[arg(short, long)]
    scenario: Option<String>,

    /// Seconds of game time per tick (overrides SIM_TICK_SECONDS)
    #[arg(long, value_name = "SECONDS")]
    tick_seconds: Option<f64>,

    /// Number of ticks (overrides SIM_TICKS)
    #[arg(short = 'n', long)]
    ticks: Option<u64>,

    /// Content data directory (overrides SIM_DATA_DIR)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// Save the final character (RON) to this path
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// Final state and a line per tick
    Summary,
    /// Full JSON report
    Json,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        let config =
            SimConfig::from_env().with_overrides(self.tick_seconds, self.ticks, self.data_dir);
        info!(
            data_dir = %config.data_dir.display(),
            tick_seconds = config.tick_seconds,
            ticks = config.ticks,
            "starting simulation"
        );

        let factory = ContentFactory::new(&config.data_dir);
        let engine_config = factory.load_config()?;
        let catalog = factory.load_effects()?;
        let character = factory
            .load_character(&self.character, &engine_config)
            .with_context(|| format!("Failed to load character '{}'", self.character))?;
        let scenario = match &self.scenario {
            Some(name) => factory
                .load_scenario(name, &catalog)
                .with_context(|| format!("Failed to load scenario '{}'", name))?,
            None => Scenario::default(),
        };

        let resolver = Resolver::new(engine_config);
        let report = Simulation::new(resolver, &catalog, &scenario).run(character, &config)?;

        match self.format {
            OutputFormat::Summary => print_summary(&report),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }

        if let Some(path) = &self.save {
            CharacterLoader::save(path, &report.final_state)?;
            info!(path = %path.display(), "saved final character");
        }
        Ok(())
    }
}

fn print_summary(report: &SimReport) {
    for tick in &report.ticks {
        let effects: Vec<String> = tick
            .effects
            .iter()
            .map(|badge| {
                if badge.stacks > 1 {
                    format!("{} x{} ({})", badge.name, badge.stacks, badge.remaining_label)
                } else {
                    format!("{} ({})", badge.name, badge.remaining_label)
                }
            })
            .collect();
        println!(
            "{:>4} t={:>7.1}s  HP {:>7.1}/{:<6}  Qi {:>7.1}/{:<6}  SP {:>6.1}/{:<5}  {}  {}",
            tick.tick,
            tick.time,
            tick.health,
            tick.max_health,
            tick.qi,
            tick.max_qi,
            tick.stamina,
            tick.max_stamina,
            style(tick.rates).dim(),
            effects.join(", ")
        );
    }

    let c = &report.final_state;
    let stats = effective_stats(c);
    let maxima = effective_maximums(c);
    println!();
    println!(
        "{} {} ({}, progress {:.1}{})",
        style("Final:").bold(),
        style(&c.name).cyan(),
        c.realm(),
        c.cultivation.progress,
        if c.cultivation.breakthrough_ready {
            ", ready to break through"
        } else {
            ""
        }
    );
    println!(
        "  HP {:.1}/{} (shown {})  Qi {:.1}/{} (shown {})  SP {:.1}/{} (shown {})  karma {}",
        c.resources.health,
        c.resources.max_health,
        maxima.max_health,
        c.resources.qi,
        c.resources.max_qi,
        maxima.max_qi,
        c.resources.stamina,
        c.resources.max_stamina,
        maxima.max_stamina,
        c.karma
    );
    println!(
        "  STR {}  AGI {}  INT {}  CHA {}  LUK {}  CUL {}",
        stats.strength,
        stats.agility,
        stats.intelligence,
        stats.charisma,
        stats.luck,
        stats.cultivation
    );
    if !c.is_alive() {
        println!("  {}", style("Fallen.").red().bold());
    }
}
