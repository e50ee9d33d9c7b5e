//! TOML run file: `[sim]`, `[model]` and `[population]` tables, each
//! optional and each field defaulted.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use bg_agent::PopulationParams;
use bg_behavior::ModelParams;
use bg_core::SimConfig;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunFile {
    pub sim:        SimConfig,
    pub model:      ModelParams,
    pub population: PopulationParams,
}

impl RunFile {
    pub fn load(file: &Path) -> Result<Self> {
        let text = fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
        let run: RunFile = toml::from_str(&text).with_context(|| format!("failed to parse {file:?}"))?;
        Ok(run)
    }

    pub fn validate(&self) -> Result<()> {
        self.sim.validate().context("invalid [sim] table")?;
        self.model.validate().context("invalid [model] table")?;
        self.population.validate().context("invalid [population] table")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bg_agent::ContributorOccupancy;

    use super::RunFile;

    #[test]
    fn sample_run_file_parses() {
        let run: RunFile = toml::from_str(include_str!("../run.toml")).unwrap();
        run.validate().unwrap();
        assert_eq!(run.sim.width, 30);
        assert_eq!(run.model.contributor_occupancy, ContributorOccupancy::Remove);
        assert_eq!(run.population.innovator_willingness, (0.6, 0.9));
    }

    #[test]
    fn missing_tables_take_defaults() {
        let run: RunFile = toml::from_str("[model]\ntariff_shift = 0.02\n").unwrap();
        assert_eq!(run.sim, bg_core::SimConfig::default());
        assert_eq!(run.model.tariff_shift, 0.02);
        assert_eq!(run.model.contribute_threshold, 0.7);
    }

    #[test]
    fn unknown_tables_rejected() {
        assert!(toml::from_str::<RunFile>("[output]\ndir = \"x\"\n").is_err());
    }
}
