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
use sedimentation::Medium;

use crate::error::ValidationError;

/// Spin settings shared by every rotor in a validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConditions {
    /// Target relative centrifugal force (x g) at the rotor midpoint
    pub rcf: f64,
    pub table2_spin_minutes: f64,
    /// Rotor whose K-factor the other rotors' spin times are scaled against
    pub reference_rotor: String,
    pub reference_minutes: f64
}

impl RunConditions {
    pub const DEFAULT_RCF: f64 = 10_000.0;
    pub const DEFAULT_TABLE2_SPIN_MINUTES: f64 = 30.0;
    pub const DEFAULT_REFERENCE_ROTOR: &'static str = "MLS-50";
    pub const DEFAULT_REFERENCE_MINUTES: f64 = 30.0;

    pub fn check(&self) -> Result<(), ValidationError> {
        require_positive("rcf", self.rcf)?;
        require_positive("table2_spin_minutes", self.table2_spin_minutes)?;
        require_positive("reference_minutes", self.reference_minutes)
    }
}

/// Particles have to be denser than the medium or nothing ever pellets
pub fn check_medium(medium: &Medium) -> Result<(), ValidationError> {
    require_positive("gravity_cm_s2", medium.gravity_cm_s2)?;
    require_positive("particle_density", medium.particle_density)?;
    require_positive("medium_density", medium.medium_density)?;
    require_positive("viscosity_cp", medium.viscosity_cp)?;
    require_positive("density_difference", medium.density_difference())
}

fn require_positive(name: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    Err(ValidationError::InvalidCondition(name.to_string(), value))
}

impl Default for RunConditions {
    fn default() -> Self {
        RunConditions {
            rcf: RunConditions::DEFAULT_RCF,
            table2_spin_minutes: RunConditions::DEFAULT_TABLE2_SPIN_MINUTES,
            reference_rotor: RunConditions::DEFAULT_REFERENCE_ROTOR.to_string(),
            reference_minutes: RunConditions::DEFAULT_REFERENCE_MINUTES
        }
    }
}

#[cfg(test)]
mod tests {
    use sedimentation::Medium;
    use crate::conditions::check_medium;
    use crate::{RunConditions, ValidationError};

    #[test]
    fn default_conditions_are_valid() {
        assert_eq!(RunConditions::default().check(), Ok(()));
        assert_eq!(check_medium(&Medium::default()), Ok(()));
    }

    #[test]
    fn non_positive_conditions_rejected() {
        let conditions = RunConditions { rcf: 0.0, ..RunConditions::default() };
        assert_eq!(conditions.check(), Err(ValidationError::InvalidCondition("rcf".to_string(), 0.0)));
        let conditions = RunConditions { reference_minutes: -5.0, ..RunConditions::default() };
        assert_eq!(conditions.check(), Err(ValidationError::InvalidCondition("reference_minutes".to_string(), -5.0)));
        let conditions = RunConditions { table2_spin_minutes: f64::INFINITY, ..RunConditions::default() };
        assert!(matches!(conditions.check(), Err(ValidationError::InvalidCondition(name, _)) if name == "table2_spin_minutes"));
    }

    #[test]
    fn medium_checks() {
        assert_eq!(check_medium(&Medium::new(980.0, 1.15, 1.0, 0.0)),
                   Err(ValidationError::InvalidCondition("viscosity_cp".to_string(), 0.0)));
        assert!(matches!(check_medium(&Medium::new(980.0, 1.0, 1.2, 1.55)),
                         Err(ValidationError::InvalidCondition(name, _)) if name == "density_difference"));
        assert!(matches!(check_medium(&Medium::new(f64::NAN, 1.15, 1.0, 1.55)),
                         Err(ValidationError::InvalidCondition(name, _)) if name == "gravity_cm_s2"));
    }
}
