//! Scenario file loading
//!
//! A scenario is a serialized `SimulationConfig`. YAML is the default; files
//! ending in `.json` are read as JSON.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{WrapErr, eyre};
use lifeplan_core::SimulationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Yaml,
    Json,
}

impl ScenarioFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ScenarioFormat::Json,
            _ => ScenarioFormat::Yaml,
        }
    }
}

pub fn parse_scenario(text: &str, format: ScenarioFormat) -> color_eyre::Result<SimulationConfig> {
    match format {
        ScenarioFormat::Yaml => {
            serde_saphyr::from_str(text).map_err(|e| eyre!("invalid YAML scenario: {e}"))
        }
        ScenarioFormat::Json => serde_json::from_str(text).wrap_err("invalid JSON scenario"),
    }
}

/// Read and parse the scenario at `path`.
pub fn load_scenario(path: &Path) -> color_eyre::Result<SimulationConfig> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("reading scenario {}", path.display()))?;
    let format = ScenarioFormat::from_path(path);
    let config = parse_scenario(&text, format)
        .wrap_err_with(|| format!("loading scenario {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        ?format,
        incomes = config.incomes.len(),
        life_events = config.life_events.len(),
        "scenario loaded"
    );
    Ok(config)
}
