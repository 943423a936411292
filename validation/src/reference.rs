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

//! Rotor geometry and expected results from Livshts et al., Sci. Rep. 5, 17319 (2015).
//!
//! Table 1 supplies the rotor geometry. Table 2 lists cut-off diameters and
//! pelleting at 30 min and 10,000 x g. Table 3 rescales each rotor's spin time by
//! its K-factor relative to the MLS-50.

use sedimentation::RotorSpec;

/// Particle diameters (nm) the tables report pelleting percentages for
pub const PROBE_DIAMETERS_NM: [f64; 4] = [150.0, 120.0, 100.0, 70.0];

#[derive(Debug, Clone, PartialEq)]
pub struct Table2Row {
    pub rotor: String,
    pub cutoff_nm: f64,
    /// One entry per [`PROBE_DIAMETERS_NM`]
    pub pelleting_percent: [f64; 4]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table3Row {
    pub rotor: String,
    pub k_factor: f64,
    pub time_minutes: f64,
    pub cutoff_nm: f64,
    /// One entry per [`PROBE_DIAMETERS_NM`]
    pub pelleting_percent: [f64; 4]
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub rotors: Vec<RotorSpec>,
    pub table2: Vec<Table2Row>,
    pub table3: Vec<Table3Row>
}

fn table2_row(rotor: &str, cutoff_nm: f64, pelleting_percent: [f64; 4]) -> Table2Row {
    Table2Row { rotor: rotor.to_string(), cutoff_nm, pelleting_percent }
}

fn table3_row(rotor: &str, k_factor: f64, time_minutes: f64, cutoff_nm: f64, pelleting_percent: [f64; 4]) -> Table3Row {
    Table3Row { rotor: rotor.to_string(), k_factor, time_minutes, cutoff_nm, pelleting_percent }
}

impl ReferenceData {
    pub fn livshts_2015() -> ReferenceData {
        ReferenceData {
            rotors: vec![
                RotorSpec::swinging_bucket("SW 40Ti", 66.7, 158.8, 112.8),
                RotorSpec::swinging_bucket("SW28", 75.3, 161.0, 118.2),
                RotorSpec::swinging_bucket("MLS-50", 47.5, 95.8, 71.7),
                RotorSpec::fixed_angle("Type 45 Ti", 35.9, 103.8, 69.9, 24.0, 38.0),
                RotorSpec::fixed_angle("Type 60 Ti", 36.9, 89.9, 63.4, 23.5, 25.0),
                RotorSpec::fixed_angle("Type 70 Ti", 39.5, 91.9, 65.7, 23.0, 25.0),
                RotorSpec::fixed_angle("F-45-24-15", 54.0, 82.0, 68.0, 45.0, 11.0),
                RotorSpec::fixed_angle("TLA 110", 26.0, 48.5, 37.3, 28.0, 13.0),
            ],
            table2: vec![
                table2_row("SW 40Ti", 321.0, [30.0, 20.0, 14.0, 7.0]),
                table2_row("SW28", 308.0, [31.0, 21.0, 15.0, 7.0]),
                table2_row("MLS-50", 230.0, [51.0, 34.0, 25.0, 12.0]),
                table2_row("Type 45 Ti", 210.0, [62.0, 41.0, 29.0, 14.0]),
                table2_row("Type 60 Ti", 170.0, [88.0, 61.0, 43.0, 22.0]),
                table2_row("Type 70 Ti", 169.0, [88.0, 62.0, 43.0, 22.0]),
                table2_row("F-45-24-15", 128.0, [100.0, 95.0, 73.0, 38.0]),
                table2_row("TLA 110", 125.0, [100.0, 98.0, 76.0, 40.0]),
            ],
            table3: vec![
                table3_row("SW 40Ti", 2774.6, 58.0, 231.0, [53.0, 36.0, 26.0, 13.0]),
                table3_row("SW28", 2547.2, 54.0, 229.0, [52.0, 35.0, 25.0, 13.0]),
                table3_row("MLS-50", 1426.0, 30.0, 230.0, [51.0, 34.0, 25.0, 12.0]),
                table3_row("Type 45 Ti", 2103.9, 44.0, 173.0, [86.0, 59.0, 42.0, 21.0]),
                table3_row("Type 60 Ti", 1601.0, 34.0, 159.0, [96.0, 68.0, 49.0, 24.0]),
                table3_row("Type 70 Ti", 1573.8, 33.0, 161.0, [94.0, 67.0, 48.0, 24.0]),
                table3_row("F-45-24-15", 765.9, 16.0, 175.0, [84.0, 57.0, 41.0, 20.0]),
                table3_row("TLA 110", 658.9, 14.0, 182.0, [79.0, 53.0, 38.0, 19.0]),
            ]
        }
    }

    pub fn table2_row(&self, rotor: &str) -> Option<&Table2Row> {
        self.table2.iter().find(|r| r.rotor == rotor)
    }
}
