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

use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utils::units::{mm_to_cm, omega_squared_from_rcf, rpm_from_omega_squared};

use crate::error::GeometryError;
use crate::physics;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    SwingingBucket,
    FixedAngle {
        angle_deg: f64,
        diameter_mm: f64
    }
}

/// Raw rotor data as published by the manufacturer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotorSpec {
    pub name: String,
    pub rmin_mm: f64,
    pub rmax_mm: f64,
    pub rav_mm: f64,
    pub geometry: Geometry
}

impl RotorSpec {
    pub fn swinging_bucket(name: &str, rmin_mm: f64, rmax_mm: f64, rav_mm: f64) -> RotorSpec {
        RotorSpec {
            name: name.to_string(),
            rmin_mm,
            rmax_mm,
            rav_mm,
            geometry: Geometry::SwingingBucket
        }
    }

    pub fn fixed_angle(name: &str,
                       rmin_mm: f64,
                       rmax_mm: f64,
                       rav_mm: f64,
                       angle_deg: f64,
                       diameter_mm: f64) -> RotorSpec {
        RotorSpec {
            name: name.to_string(),
            rmin_mm,
            rmax_mm,
            rav_mm,
            geometry: Geometry::FixedAngle { angle_deg, diameter_mm }
        }
    }

    fn check_physical_dimensions(&self) -> Result<(), GeometryError> {
        let mut dimensions = vec![self.rmin_mm, self.rmax_mm, self.rav_mm];
        if let Geometry::FixedAngle { angle_deg, diameter_mm } = self.geometry {
            dimensions.push(angle_deg);
            dimensions.push(diameter_mm);
        }
        if dimensions.iter().any(|d| !d.is_finite()) {
            return Err(GeometryError::NonFinite(self.name.clone()));
        }
        if self.rmin_mm <= 0.0 || self.rmax_mm <= self.rmin_mm {
            return Err(GeometryError::InvalidRadii(self.name.clone(), self.rmin_mm, self.rmax_mm));
        }
        if self.rav_mm <= 0.0 {
            return Err(GeometryError::InvalidAverageRadius(self.name.clone(), self.rav_mm));
        }
        if let Geometry::FixedAngle { angle_deg, diameter_mm } = self.geometry {
            if angle_deg <= 0.0 || angle_deg >= 90.0 {
                return Err(GeometryError::InvalidAngle(self.name.clone(), angle_deg));
            }
            if diameter_mm <= 0.0 {
                return Err(GeometryError::InvalidDiameter(self.name.clone(), diameter_mm));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum RotorKind {
    SwingingBucket,
    FixedAngle
}

impl RotorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RotorKind::SwingingBucket => "SW (Swinging Bucket)",
            RotorKind::FixedAngle => "FA (Fixed Angle)"
        }
    }
}

impl Display for RotorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rotor normalised for the sedimentation equations.
///
/// Two radius pairs are kept. The effective pair is the radial interval a particle
/// has to cross and feeds the cut-off diameter and swinging-bucket pelleting. The
/// actual pair is the physical geometry and only feeds the K-factor.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotor {
    name: String,
    kind: RotorKind,
    rmin_mm: f64,
    rmax_mm: f64,
    rmin_actual_mm: f64,
    rmax_actual_mm: f64,
    rav_mm: f64,
    sedimentation_path_mm: f64
}

impl Rotor {
    pub fn build(spec: &RotorSpec) -> Result<Rotor, GeometryError> {
        spec.check_physical_dimensions()?;
        let rotor = match spec.geometry {
            Geometry::SwingingBucket => Rotor {
                name: spec.name.clone(),
                kind: RotorKind::SwingingBucket,
                rmin_mm: spec.rmin_mm,
                rmax_mm: spec.rmax_mm,
                rmin_actual_mm: spec.rmin_mm,
                rmax_actual_mm: spec.rmax_mm,
                rav_mm: spec.rav_mm,
                sedimentation_path_mm: spec.rmax_mm - spec.rmin_mm
            },
            Geometry::FixedAngle { angle_deg, diameter_mm } => {
                // The tilted tube is treated as a straight radial path of the same
                // length centred on the tube's physical midpoint
                let sedimentation_path_mm = diameter_mm / angle_deg.to_radians().cos();
                let rav_mm = (spec.rmin_mm + spec.rmax_mm) / 2.0;
                let rmin_mm = rav_mm - sedimentation_path_mm / 2.0;
                if rmin_mm <= 0.0 {
                    return Err(GeometryError::PathReachesAxis(spec.name.clone(), sedimentation_path_mm));
                }
                Rotor {
                    name: spec.name.clone(),
                    kind: RotorKind::FixedAngle,
                    rmin_mm,
                    rmax_mm: rav_mm + sedimentation_path_mm / 2.0,
                    rmin_actual_mm: spec.rmin_mm,
                    rmax_actual_mm: spec.rmax_mm,
                    rav_mm,
                    sedimentation_path_mm
                }
            }
        };
        debug!("Built {} rotor {}. effective {:.2}-{:.2} mm, actual {:.2}-{:.2} mm, path {:.2} mm",
               rotor.kind, rotor.name, rotor.rmin_mm, rotor.rmax_mm,
               rotor.rmin_actual_mm, rotor.rmax_actual_mm, rotor.sedimentation_path_mm);
        Ok(rotor)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RotorKind {
        self.kind
    }

    pub fn rmin_mm(&self) -> f64 {
        self.rmin_mm
    }

    pub fn rmax_mm(&self) -> f64 {
        self.rmax_mm
    }

    pub fn rmin_actual_mm(&self) -> f64 {
        self.rmin_actual_mm
    }

    pub fn rmax_actual_mm(&self) -> f64 {
        self.rmax_actual_mm
    }

    pub fn rav_mm(&self) -> f64 {
        self.rav_mm
    }

    pub fn sedimentation_path_mm(&self) -> f64 {
        self.sedimentation_path_mm
    }

    /// Midpoint of the effective radial interval. Equal to the physical mean
    /// radius for both rotor kinds.
    pub fn radial_midpoint_mm(&self) -> f64 {
        (self.rmin_mm + self.rmax_mm) / 2.0
    }

    pub fn omega_squared_for_rcf(&self, rcf: f64, gravity_cm_s2: f64) -> f64 {
        omega_squared_from_rcf(rcf, mm_to_cm(self.radial_midpoint_mm()), gravity_cm_s2)
    }

    pub fn rpm_for_rcf(&self, rcf: f64, gravity_cm_s2: f64) -> f64 {
        rpm_from_omega_squared(self.omega_squared_for_rcf(rcf, gravity_cm_s2))
    }

    /// Always evaluated on the physical radii
    pub fn k_factor(&self, omega_squared: f64) -> f64 {
        physics::k_factor(self.rmin_actual_mm, self.rmax_actual_mm, omega_squared)
    }
}
