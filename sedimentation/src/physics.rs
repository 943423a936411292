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

//! Closed-form Stokes sedimentation in a centrifugal field.
//!
//! Units follow the published rotor tables: radii in mm, particle diameters in nm,
//! times in seconds and ω² in rad²/s². Everything is converted to CGS internally.

use std::f64::consts::FRAC_2_PI;
use utils::numeric::clamp_fraction;
use utils::units::{cm_to_nm, mm_to_cm, nm_to_cm, SECONDS_PER_HOUR};

use crate::medium::Medium;
use crate::rotor::{Rotor, RotorKind};

const SVEDBERG_SECONDS: f64 = 1e-13;

/// Terminal sedimentation velocity per unit centrifugal acceleration (s)
pub fn sedimentation_coefficient(medium: &Medium, diameter_nm: f64) -> f64 {
    let diameter_cm = nm_to_cm(diameter_nm);
    diameter_cm.powi(2) * medium.density_difference() / (18.0 * medium.viscosity_poise())
}

pub fn sedimentation_coefficient_svedberg(medium: &Medium, diameter_nm: f64) -> f64 {
    sedimentation_coefficient(medium, diameter_nm) / SVEDBERG_SECONDS
}

/// Pelleting efficiency of a rotor. Smaller is faster.
///
/// Callers must pass the physical radii; [`Rotor::k_factor`] does this.
pub fn k_factor(rmin_mm: f64, rmax_mm: f64, omega_squared: f64) -> f64 {
    let ln_ratio = (mm_to_cm(rmax_mm) / mm_to_cm(rmin_mm)).ln();
    ln_ratio / SVEDBERG_SECONDS / (SECONDS_PER_HOUR * omega_squared)
}

/// Hours needed to clear particles of `s_svedberg` with a rotor of factor `k`
pub fn pelleting_time_hours(k: f64, s_svedberg: f64) -> f64 {
    k / s_svedberg
}

/// Spin time on a rotor of `k_rotor` that matches `t_reference` on a rotor of `k_reference`
pub fn equivalent_time(t_reference: f64, k_rotor: f64, k_reference: f64) -> f64 {
    t_reference * k_rotor / k_reference
}

/// Smallest particle diameter (nm) that crosses the whole radial interval in `t_sec`
pub fn cutoff_diameter(medium: &Medium, t_sec: f64, omega_squared: f64, rmin_mm: f64, rmax_mm: f64) -> f64 {
    let ln_ratio = (mm_to_cm(rmax_mm) / mm_to_cm(rmin_mm)).ln();
    let diameter_cm = (18.0 * medium.viscosity_poise() * ln_ratio
        / (medium.density_difference() * omega_squared * t_sec)).sqrt();
    cm_to_nm(diameter_cm)
}

/// Fraction pelleted from a uniform suspension in a radially aligned tube
pub fn pelleting_fraction_swing(medium: &Medium,
                                diameter_nm: f64,
                                t_sec: f64,
                                omega_squared: f64,
                                rmin_mm: f64,
                                rmax_mm: f64) -> f64 {
    let s = sedimentation_coefficient(medium, diameter_nm);
    let rmin_cm = mm_to_cm(rmin_mm);
    let rmax_cm = mm_to_cm(rmax_mm);
    let boundary_cm = rmax_cm * (-s * omega_squared * t_sec).exp();
    if boundary_cm <= rmin_cm {
        return 1.0;
    }
    clamp_fraction((rmax_cm - boundary_cm) / (rmax_cm - rmin_cm))
}

/// Fraction pelleted in a tilted tube, from the area of the tube's elliptical
/// cross-section swept by the sedimenting boundary
pub fn pelleting_fraction_fixed_angle(medium: &Medium,
                                      diameter_nm: f64,
                                      t_sec: f64,
                                      omega_squared: f64,
                                      rav_mm: f64,
                                      sedimentation_path_mm: f64) -> f64 {
    let s = sedimentation_coefficient(medium, diameter_nm);
    let xi = s * omega_squared * mm_to_cm(rav_mm) * t_sec / mm_to_cm(sedimentation_path_mm);
    if xi >= 1.0 {
        return 1.0;
    }
    if xi <= 0.0 {
        return 0.0;
    }
    clamp_fraction(FRAC_2_PI * (xi.asin() + xi * (1.0 - xi * xi).sqrt()))
}

pub fn pelleting_fraction(medium: &Medium, diameter_nm: f64, t_sec: f64, omega_squared: f64, rotor: &Rotor) -> f64 {
    match rotor.kind() {
        RotorKind::SwingingBucket => pelleting_fraction_swing(medium,
                                                              diameter_nm,
                                                              t_sec,
                                                              omega_squared,
                                                              rotor.rmin_mm(),
                                                              rotor.rmax_mm()),
        RotorKind::FixedAngle => pelleting_fraction_fixed_angle(medium,
                                                                diameter_nm,
                                                                t_sec,
                                                                omega_squared,
                                                                rotor.rav_mm(),
                                                                rotor.sedimentation_path_mm())
    }
}
