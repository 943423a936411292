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

use serde::{Deserialize, Serialize};
use utils::units::centipoise_to_poise;

/// The suspension being spun, plus the reference gravity used to turn a
/// relative centrifugal force into an angular velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Medium {
    /// cm/s²
    pub gravity_cm_s2: f64,
    /// g/cm³
    pub particle_density: f64,
    /// g/cm³
    pub medium_density: f64,
    /// centipoise
    pub viscosity_cp: f64
}

impl Medium {
    pub const DEFAULT_GRAVITY_CM_S2: f64 = 980.0;
    pub const DEFAULT_PARTICLE_DENSITY: f64 = 1.15;
    pub const DEFAULT_MEDIUM_DENSITY: f64 = 1.0;
    pub const DEFAULT_VISCOSITY_CP: f64 = 1.55;

    pub fn new(gravity_cm_s2: f64, particle_density: f64, medium_density: f64, viscosity_cp: f64) -> Medium {
        Medium { gravity_cm_s2, particle_density, medium_density, viscosity_cp }
    }

    pub fn density_difference(&self) -> f64 {
        self.particle_density - self.medium_density
    }

    pub fn viscosity_poise(&self) -> f64 {
        centipoise_to_poise(self.viscosity_cp)
    }
}

impl Default for Medium {
    fn default() -> Self {
        Medium::new(Medium::DEFAULT_GRAVITY_CM_S2,
                    Medium::DEFAULT_PARTICLE_DENSITY,
                    Medium::DEFAULT_MEDIUM_DENSITY,
                    Medium::DEFAULT_VISCOSITY_CP)
    }
}
