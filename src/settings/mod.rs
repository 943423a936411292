/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of centrifuge-check.
 *
 * centrifuge-check is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * centrifuge-check is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with centrifuge-check. If not, see <https://www.gnu.org/licenses/>.
 */

use config::{Config, ConfigError, Environment, File, FileFormat};
use config::builder::{ConfigBuilder, DefaultState};
use serde::{Deserialize, Serialize};
use tracing::warn;

use sedimentation::Medium;
use validation::{RunConditions, Tolerances};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json"
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Written to the working directory, replacing any previous run's log
    pub log_file: String
}

impl OutputSettings {
    pub const DEFAULT_LOG_FILE: &'static str = "centrifuge_check.log";
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            format: OutputFormat::default(),
            log_file: OutputSettings::DEFAULT_LOG_FILE.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    pub medium: Medium,
    pub run: RunConditions,
    pub table2_tolerances: Tolerances,
    pub table3_tolerances: Tolerances,
    pub output: OutputSettings
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            medium: Medium::default(),
            run: RunConditions::default(),
            table2_tolerances: Tolerances::table2_default(),
            table3_tolerances: Tolerances::table3_default(),
            output: OutputSettings::default()
        }
    }
}

impl GlobalSettings {
    const CONFIG_FILENAME: &'static str = "centrifuge-check-conf";
    const ENV_PREFIX: &'static str = "CENTRIFUGE";

    /// Compiled defaults, then `centrifuge-check-conf.toml` if present, then
    /// `CENTRIFUGE_<SECTION>__<KEY>` environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let builder = GlobalSettings::with_defaults(Config::builder())?;
        return match builder
            .add_source(File::with_name(GlobalSettings::CONFIG_FILENAME).required(false))
            .add_source(Environment::with_prefix(GlobalSettings::ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true))
            .build()
            .and_then(|settings| settings.try_deserialize::<GlobalSettings>()) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                // runs before the log file exists, so tell the console too
                eprintln!("Failed to load settings. Falling back to defaults. {}", e.to_string());
                warn!("Failed to load settings. Falling back to defaults. {}", e.to_string());
                GlobalSettings::with_defaults(Config::builder())?.build()?.try_deserialize()
            }
        }
    }

    pub fn from_toml_str(toml_data: &str) -> Result<Self, ConfigError> {
        GlobalSettings::with_defaults(Config::builder())?
            .add_source(File::from_str(toml_data, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(&self)
    }

    fn with_defaults(builder: ConfigBuilder<DefaultState>) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = GlobalSettings::default();
        let builder = builder
            .set_default("medium.gravity_cm_s2", defaults.medium.gravity_cm_s2)?
            .set_default("medium.particle_density", defaults.medium.particle_density)?
            .set_default("medium.medium_density", defaults.medium.medium_density)?
            .set_default("medium.viscosity_cp", defaults.medium.viscosity_cp)?
            .set_default("run.rcf", defaults.run.rcf)?
            .set_default("run.table2_spin_minutes", defaults.run.table2_spin_minutes)?
            .set_default("run.reference_rotor", defaults.run.reference_rotor)?
            .set_default("run.reference_minutes", defaults.run.reference_minutes)?
            .set_default("output.format", defaults.output.format.as_str())?
            .set_default("output.log_file", defaults.output.log_file)?;
        let builder = set_tolerance_defaults(builder, "table2_tolerances", &defaults.table2_tolerances)?;
        set_tolerance_defaults(builder, "table3_tolerances", &defaults.table3_tolerances)
    }
}

fn set_tolerance_defaults(builder: ConfigBuilder<DefaultState>,
                          section: &str,
                          tolerances: &Tolerances) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default(format!("{}.cutoff_nm", section), tolerances.cutoff_nm)?
        .set_default(format!("{}.pelleting_points", section), tolerances.pelleting_points)?
        .set_default(format!("{}.k_relative", section), tolerances.k_relative)?
        .set_default(format!("{}.time_minutes", section), tolerances.time_minutes)
}

#[cfg(test)]
mod tests {
    use crate::settings::{GlobalSettings, OutputFormat};

    #[test]
    fn empty_file_gives_defaults() {
        let settings = GlobalSettings::from_toml_str("").unwrap();
        assert_eq!(settings, GlobalSettings::default());
        assert_eq!(settings.run.reference_rotor, "MLS-50");
        assert_eq!(settings.table3_tolerances.cutoff_nm, 8.0);
        assert_eq!(settings.output.log_file, "centrifuge_check.log");
    }

    #[test]
    fn file_overrides_individual_keys() {
        let settings = GlobalSettings::from_toml_str(r#"
            [run]
            reference_rotor = "SW28"
            rcf = 20000

            [medium]
            viscosity_cp = 1.0

            [table3_tolerances]
            k_relative = 0.1

            [output]
            format = "json"
        "#).unwrap();
        assert_eq!(settings.run.reference_rotor, "SW28");
        assert_eq!(settings.run.rcf, 20_000.0);
        assert_eq!(settings.run.reference_minutes, 30.0);
        assert_eq!(settings.medium.viscosity_cp, 1.0);
        assert_eq!(settings.medium.particle_density, 1.15);
        assert_eq!(settings.table3_tolerances.k_relative, 0.1);
        assert_eq!(settings.table3_tolerances.cutoff_nm, 8.0);
        assert_eq!(settings.table2_tolerances.k_relative, 0.06);
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(settings.output.log_file, "centrifuge_check.log");
    }

    #[test]
    fn log_file_can_be_renamed() {
        let settings = GlobalSettings::from_toml_str(r#"
            [output]
            log_file = "spin.log"
        "#).unwrap();
        assert_eq!(settings.output.log_file, "spin.log");
        assert_eq!(settings.output.format, OutputFormat::Text);
    }

    #[test]
    fn toml_round_trip() {
        let mut settings = GlobalSettings::default();
        settings.run.table2_spin_minutes = 45.0;
        settings.output.format = OutputFormat::Json;
        let encoded = settings.to_toml_string().unwrap();
        assert_eq!(GlobalSettings::from_toml_str(&encoded).unwrap(), settings);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(GlobalSettings::from_toml_str("[medium\nviscosity_cp = ").is_err());
        assert!(GlobalSettings::from_toml_str("[medium]\nviscosity_cp = \"thick\"").is_err());
    }
}
