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

mod report;
mod settings;

use std::env;
use std::process::ExitCode;
use tracing::{debug, error, info};

use validation::{ReferenceData, ValidationError, ValidationHarness};
use crate::settings::{GlobalSettings, OutputFormat};

const EXIT_MISMATCH: u8 = 1;
const EXIT_FATAL: u8 = 2;

#[derive(thiserror::Error, Debug)]
pub enum CheckError {
    #[error("settings error. `{0}`")]
    Settings(#[from] config::ConfigError),
    #[error("validation could not run. `{0}`")]
    Validation(#[from] ValidationError),
    #[error("failed to encode report. `{0}`")]
    Encoding(#[from] serde_json::Error)
}

fn init_logging(log_file: &str) {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, log_file);
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }
}

/// Returns whether every check passed
fn run(settings: &GlobalSettings) -> Result<bool, CheckError> {
    match settings.to_toml_string() {
        Ok(encoded) => debug!("Effective settings:\n{}", encoded),
        Err(e) => debug!("Couldn't encode effective settings. {}", e.to_string())
    }

    let reference = ReferenceData::livshts_2015();
    let validation_report = ValidationHarness::new(&reference, &settings.medium, &settings.run)
        .with_tolerances(settings.table2_tolerances, settings.table3_tolerances)
        .run()?;

    match settings.output.format {
        OutputFormat::Text => println!("{}", report::render_text(&validation_report)),
        OutputFormat::Json => println!("{}", report::render_json(&validation_report)?)
    }
    Ok(validation_report.all_pass())
}

fn main() -> ExitCode {
    // settings come first since they name the log file
    let settings = match GlobalSettings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", CheckError::from(e).to_string());
            return ExitCode::from(EXIT_FATAL);
        }
    };
    init_logging(&settings.output.log_file);
    match run(&settings) {
        Ok(true) => {
            info!("All validations passed");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            info!("Some validations failed");
            ExitCode::from(EXIT_MISMATCH)
        }
        Err(e) => {
            error!("{}", e.to_string());
            eprintln!("{}", e.to_string());
            ExitCode::from(EXIT_FATAL)
        }
    }
}
