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

pub const MM_PER_CM: f64 = 10.0;
pub const CM_PER_NM: f64 = 1e-7;
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const POISE_PER_CENTIPOISE: f64 = 1e-2;

pub fn mm_to_cm(length_mm: f64) -> f64 {
    length_mm / MM_PER_CM
}

pub fn nm_to_cm(length_nm: f64) -> f64 {
    length_nm * CM_PER_NM
}

pub fn cm_to_nm(length_cm: f64) -> f64 {
    length_cm / CM_PER_NM
}

pub fn minutes_to_seconds(minutes: f64) -> f64 {
    minutes * SECONDS_PER_MINUTE
}

pub fn centipoise_to_poise(viscosity_cp: f64) -> f64 {
    viscosity_cp * POISE_PER_CENTIPOISE
}

/// Angular velocity squared (rad²/s²) that produces `rcf` times `gravity_cm_s2`
/// at `radius_cm` from the rotor axis.
pub fn omega_squared_from_rcf(rcf: f64, radius_cm: f64, gravity_cm_s2: f64) -> f64 {
    rcf * gravity_cm_s2 / radius_cm
}

pub fn rpm_from_omega_squared(omega_squared: f64) -> f64 {
    (omega_squared.sqrt() * SECONDS_PER_MINUTE) / (2.0 * std::f64::consts::PI)
}

#[cfg(test)]
mod tests {
    use crate::units::*;

    #[test]
    fn length_conversions() {
        assert_eq!(mm_to_cm(158.8), 15.88);
        assert_eq!(mm_to_cm(0.0), 0.0);
        assert!((nm_to_cm(150.0) - 1.5e-5).abs() < 1e-18);
        assert!((cm_to_nm(nm_to_cm(321.0)) - 321.0).abs() < 1e-9);
    }

    #[test]
    fn time_conversions() {
        assert_eq!(minutes_to_seconds(30.0), 1800.0);
        assert_eq!(minutes_to_seconds(58.0), 3480.0);
    }

    #[test]
    fn viscosity_conversion() {
        assert!((centipoise_to_poise(1.55) - 0.0155).abs() < 1e-15);
        assert!((centipoise_to_poise(1.0) - 0.01).abs() < 1e-15);
    }

    #[test]
    fn rcf_omega_conversions() {
        // 10,000 x g at the MLS-50 radial midpoint
        let omega_sq = omega_squared_from_rcf(10_000.0, 7.165, 980.0);
        assert!((omega_sq - 1_367_759.944).abs() < 1e-2);
        // doubling the radius halves omega squared for the same force
        assert!((omega_squared_from_rcf(10_000.0, 14.33, 980.0) * 2.0 - omega_sq).abs() < 1e-6);
    }

    #[test]
    fn rpm_conversions() {
        // one revolution per second is 60 rpm
        let omega_sq = 4.0 * std::f64::consts::PI * std::f64::consts::PI;
        assert!((rpm_from_omega_squared(omega_sq) - 60.0).abs() < 1e-9);
        assert_eq!(rpm_from_omega_squared(0.0), 0.0);
    }
}
