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

//! Acceptable disagreement between computed values and rounded published data.
//!
//! None of these come from the physics. They reflect how coarsely the reference
//! tables are rounded, so every band is a setting rather than a constant.

use serde::{Deserialize, Serialize};
use utils::numeric::{round_to_int, within_absolute, within_relative};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    /// Absolute band on the rounded cut-off diameter (nm)
    pub cutoff_nm: f64,
    /// Absolute band on the rounded pelleting percentage
    pub pelleting_points: f64,
    /// Strict relative band on the K-factor
    pub k_relative: f64,
    /// Absolute band on the rounded equivalent spin time (min)
    pub time_minutes: f64
}

impl Tolerances {
    pub fn table2_default() -> Tolerances {
        Tolerances {
            cutoff_nm: 5.0,
            pelleting_points: 5.0,
            k_relative: 0.06,
            time_minutes: 2.0
        }
    }

    /// The K-scaled table is published with coarser cut-off diameters
    pub fn table3_default() -> Tolerances {
        Tolerances {
            cutoff_nm: 8.0,
            ..Tolerances::table2_default()
        }
    }

    pub fn cutoff_matches(&self, computed_nm: f64, expected_nm: f64) -> bool {
        within_absolute(round_to_int(computed_nm) as f64, expected_nm, self.cutoff_nm)
    }

    pub fn pelleting_matches(&self, computed_percent: f64, expected_percent: f64) -> bool {
        within_absolute(round_to_int(computed_percent) as f64, expected_percent, self.pelleting_points)
    }

    pub fn k_factor_matches(&self, computed: f64, expected: f64) -> bool {
        within_relative(computed, expected, self.k_relative)
    }

    pub fn time_matches(&self, computed_minutes: f64, expected_minutes: f64) -> bool {
        within_absolute(round_to_int(computed_minutes) as f64, expected_minutes, self.time_minutes)
    }
}
