//! List the effect catalog.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use cultivation_content::ContentFactory;
use cultivation_core::format_remaining_time;

use crate::config::SimConfig;

/// List every effect in the content catalog
#[derive(Debug, Parser)]
pub struct ListEffects {
    /// Content data directory (overrides SIM_DATA_DIR)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl ListEffects {
    pub fn execute(self) -> Result<()> {
        let config = SimConfig::from_env().with_overrides(None, None, self.data_dir);
        let catalog = ContentFactory::new(&config.data_dir).load_effects()?;

        println!(
            "{} ({} entries)",
            style("Effect catalog").bold(),
            catalog.len()
        );
        for (id, effect) in catalog.iter() {
            let stacking = if effect.stackable { "stackable" } else { "replaces" };
            println!(
                "  {:<28} {:<26} {:<13} {:>9}  key={} {}",
                style(id).cyan(),
                effect.name,
                effect.kind,
                format_remaining_time(effect.duration),
                effect.key,
                style(stacking).dim()
            );
        }
        Ok(())
    }
}
