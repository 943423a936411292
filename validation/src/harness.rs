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

use tracing::{debug, info, warn};
use sedimentation::{
    cutoff_diameter,
    equivalent_time,
    pelleting_fraction,
    pelleting_time_hours,
    sedimentation_coefficient_svedberg,
    Medium,
    Rotor,
    RotorKind
};
use utils::numeric::fraction_to_percentage;
use utils::units::minutes_to_seconds;

use crate::conditions::{check_medium, RunConditions};
use crate::error::ValidationError;
use crate::reference::{ReferenceData, PROBE_DIAMETERS_NM};
use crate::report::{Check, ReferenceK, RowReport, TableReport, ValidationReport};
use crate::tolerance::Tolerances;

pub const CUTOFF_LABEL: &str = "d*";
pub const K_FACTOR_LABEL: &str = "K";
pub const TIME_LABEL: &str = "tK";

pub fn pelleting_label(diameter_nm: f64) -> String {
    format!("{} nm", diameter_nm)
}

pub struct ValidationHarness<'a> {
    reference: &'a ReferenceData,
    medium: &'a Medium,
    conditions: &'a RunConditions,
    table2_tolerances: Tolerances,
    table3_tolerances: Tolerances
}

impl<'a> ValidationHarness<'a> {
    pub fn new(reference: &'a ReferenceData,
               medium: &'a Medium,
               conditions: &'a RunConditions) -> ValidationHarness<'a> {
        ValidationHarness {
            reference,
            medium,
            conditions,
            table2_tolerances: Tolerances::table2_default(),
            table3_tolerances: Tolerances::table3_default()
        }
    }

    pub fn with_tolerances(mut self, table2: Tolerances, table3: Tolerances) -> ValidationHarness<'a> {
        self.table2_tolerances = table2;
        self.table3_tolerances = table3;
        self
    }

    pub fn run(&self) -> Result<ValidationReport, ValidationError> {
        self.conditions.check()?;
        check_medium(self.medium)?;
        let rotors = self.build_rotors()?;
        let table2 = self.validate_table2(&rotors)?;
        let table3 = self.validate_table3(&rotors)?;
        info!("Validation complete. {}/{} checks passed", table2.passed() + table3.passed(), table2.total() + table3.total());
        Ok(ValidationReport { table2, table3 })
    }

    pub fn build_rotors(&self) -> Result<Vec<Rotor>, ValidationError> {
        let rotors = self.reference.rotors.iter()
            .map(Rotor::build)
            .collect::<Result<Vec<Rotor>, _>>()?;
        info!("Built {} rotors", rotors.len());
        Ok(rotors)
    }

    /// Cut-off diameter and pelleting at a fixed spin time, swinging-bucket rotors first
    pub fn validate_table2(&self, rotors: &[Rotor]) -> Result<TableReport, ValidationError> {
        let t_sec = minutes_to_seconds(self.conditions.table2_spin_minutes);
        let tolerances = &self.table2_tolerances;
        info!("Validating table 2 at {} min, {} x g", self.conditions.table2_spin_minutes, self.conditions.rcf);

        let mut rows = Vec::new();
        for kind in [RotorKind::SwingingBucket, RotorKind::FixedAngle] {
            for rotor in rotors.iter().filter(|r| r.kind() == kind) {
                let expected = self.reference.table2_row(rotor.name()).ok_or_else(|| {
                    ValidationError::MissingReference("table 2".to_string(), rotor.name().to_string())
                })?;
                let omega_squared = self.omega_squared(rotor);
                let d_star = cutoff_diameter(self.medium, t_sec, omega_squared, rotor.rmin_mm(), rotor.rmax_mm());

                let mut checks = vec![
                    Check::new(CUTOFF_LABEL, d_star, expected.cutoff_nm, tolerances.cutoff_matches(d_star, expected.cutoff_nm))
                ];
                checks.extend(self.pelleting_checks(rotor, t_sec, omega_squared, &expected.pelleting_percent, tolerances));
                rows.push(self.finish_row(rotor, checks));
            }
        }

        Ok(TableReport {
            title: format!("TABLE 2 VALIDATION - {} min, {} x g RCF (at Rav)",
                           self.conditions.table2_spin_minutes, self.conditions.rcf),
            reference: None,
            rows
        })
    }

    /// Spin time scaled per rotor so that K x t matches the reference rotor
    pub fn validate_table3(&self, rotors: &[Rotor]) -> Result<TableReport, ValidationError> {
        let reference_name = &self.conditions.reference_rotor;
        let reference_rotor = find_rotor(rotors, reference_name)?;
        let reference_k = reference_rotor.k_factor(self.omega_squared(reference_rotor));
        let tolerances = &self.table3_tolerances;
        info!("Validating table 3 against {} (K={:.1}, t={} min)", reference_name, reference_k, self.conditions.reference_minutes);

        let mut rows = Vec::new();
        for expected in &self.reference.table3 {
            let rotor = find_rotor(rotors, &expected.rotor)?;
            let omega_squared = self.omega_squared(rotor);
            let k = rotor.k_factor(omega_squared);
            let minutes = equivalent_time(self.conditions.reference_minutes, k, reference_k);
            for diameter in PROBE_DIAMETERS_NM {
                let s = sedimentation_coefficient_svedberg(self.medium, diameter);
                debug!("{} clears {} nm particles ({:.1} S) in {:.2} h", rotor.name(), diameter, s, pelleting_time_hours(k, s));
            }
            let t_sec = minutes_to_seconds(minutes);
            let d_star = cutoff_diameter(self.medium, t_sec, omega_squared, rotor.rmin_mm(), rotor.rmax_mm());

            let mut checks = vec![
                Check::new(K_FACTOR_LABEL, k, expected.k_factor, tolerances.k_factor_matches(k, expected.k_factor)),
                Check::new(TIME_LABEL, minutes, expected.time_minutes, tolerances.time_matches(minutes, expected.time_minutes)),
                Check::new(CUTOFF_LABEL, d_star, expected.cutoff_nm, tolerances.cutoff_matches(d_star, expected.cutoff_nm))
            ];
            checks.extend(self.pelleting_checks(rotor, t_sec, omega_squared, &expected.pelleting_percent, tolerances));
            rows.push(self.finish_row(rotor, checks));
        }

        Ok(TableReport {
            title: format!("TABLE 3 VALIDATION - K-Factor at {} x g", self.conditions.rcf),
            reference: Some(ReferenceK {
                rotor: reference_name.clone(),
                k_factor: reference_k,
                minutes: self.conditions.reference_minutes
            }),
            rows
        })
    }

    fn omega_squared(&self, rotor: &Rotor) -> f64 {
        let omega_squared = rotor.omega_squared_for_rcf(self.conditions.rcf, self.medium.gravity_cm_s2);
        debug!("{} spins at {:.0} rpm for {} x g", rotor.name(), rotor.rpm_for_rcf(self.conditions.rcf, self.medium.gravity_cm_s2), self.conditions.rcf);
        omega_squared
    }

    fn pelleting_checks(&self,
                        rotor: &Rotor,
                        t_sec: f64,
                        omega_squared: f64,
                        expected_percent: &[f64; 4],
                        tolerances: &Tolerances) -> Vec<Check> {
        PROBE_DIAMETERS_NM.iter().zip(expected_percent.iter()).map(|(&diameter, &expected)| {
            let percent = fraction_to_percentage(pelleting_fraction(self.medium, diameter, t_sec, omega_squared, rotor));
            Check::new(&pelleting_label(diameter), percent, expected, tolerances.pelleting_matches(percent, expected))
        }).collect()
    }

    fn finish_row(&self, rotor: &Rotor, checks: Vec<Check>) -> RowReport {
        for check in checks.iter().filter(|c| !c.passed) {
            warn!("{} {} out of tolerance. computed {:.2}, expected {}", rotor.name(), check.label, check.computed, check.expected);
        }
        RowReport {
            rotor: rotor.name().to_string(),
            kind: rotor.kind(),
            checks
        }
    }
}

fn find_rotor<'r>(rotors: &'r [Rotor], name: &str) -> Result<&'r Rotor, ValidationError> {
    rotors.iter()
        .find(|r| r.name() == name)
        .ok_or_else(|| ValidationError::UnknownRotor(name.to_string()))
}

#[cfg(test)]
mod tests {
    use sedimentation::{GeometryError, Medium, RotorKind, RotorSpec};
    use crate::{ReferenceData, RunConditions, Tolerances, ValidationError, ValidationHarness};
    use crate::harness::{pelleting_label, CUTOFF_LABEL, K_FACTOR_LABEL, TIME_LABEL};

    #[test]
    fn published_tables_pass() -> Result<(), ValidationError> {
        let reference = ReferenceData::livshts_2015();
        let medium = Medium::default();
        let conditions = RunConditions::default();
        let report = ValidationHarness::new(&reference, &medium, &conditions).run()?;

        assert_eq!(report.table2.total(), 40);
        assert_eq!(report.table2.passed(), 40);
        assert_eq!(report.table3.total(), 56);
        assert_eq!(report.table3.passed(), 56);
        assert_eq!(report.passed(), 96);
        assert!(report.all_pass());
        Ok(())
    }

    #[test]
    fn table2_groups_swinging_buckets_first() -> Result<(), ValidationError> {
        let reference = ReferenceData::livshts_2015();
        let medium = Medium::default();
        let conditions = RunConditions::default();
        let harness = ValidationHarness::new(&reference, &medium, &conditions);
        let table2 = harness.validate_table2(&harness.build_rotors()?)?;
        let kinds: Vec<RotorKind> = table2.rows.iter().map(|r| r.kind).collect();
        assert_eq!(&kinds[..3], &[RotorKind::SwingingBucket; 3]);
        assert_eq!(&kinds[3..], &[RotorKind::FixedAngle; 5]);
        Ok(())
    }

    #[test]
    fn sw_40ti_values() -> Result<(), ValidationError> {
        let reference = ReferenceData::livshts_2015();
        let medium = Medium::default();
        let conditions = RunConditions::default();
        let report = ValidationHarness::new(&reference, &medium, &conditions).run()?;

        let row = report.table2.row("SW 40Ti").ok_or(ValidationError::UnknownRotor("SW 40Ti".to_string()))?;
        let d_star = row.check(CUTOFF_LABEL).map(|c| c.computed).unwrap_or_default();
        assert!((d_star - 321.13).abs() < 0.01);
        let p150 = row.check(&pelleting_label(150.0)).map(|c| c.computed).unwrap_or_default();
        assert!((p150 - 29.73).abs() < 0.01);

        let row = report.table3.row("SW 40Ti").ok_or(ValidationError::UnknownRotor("SW 40Ti".to_string()))?;
        let k = row.check(K_FACTOR_LABEL).map(|c| c.computed).unwrap_or_default();
        assert!((k - 2772.22).abs() < 0.01);
        let minutes = row.check(TIME_LABEL).map(|c| c.computed).unwrap_or_default();
        assert!((minutes - 58.37).abs() < 0.01);
        Ok(())
    }

    #[test]
    fn reference_rotor_scales_to_itself() -> Result<(), ValidationError> {
        let reference = ReferenceData::livshts_2015();
        let medium = Medium::default();
        let conditions = RunConditions::default();
        let report = ValidationHarness::new(&reference, &medium, &conditions).run()?;

        let reference_k = report.table3.reference.as_ref().map(|r| r.k_factor).unwrap_or_default();
        assert!((reference_k - 1424.74).abs() < 0.01);
        let row = report.table3.row("MLS-50").ok_or(ValidationError::UnknownRotor("MLS-50".to_string()))?;
        let minutes = row.check(TIME_LABEL).map(|c| c.computed).unwrap_or_default();
        assert!((minutes - 30.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn tight_tolerances_fail() -> Result<(), ValidationError> {
        let reference = ReferenceData::livshts_2015();
        let medium = Medium::default();
        let conditions = RunConditions::default();
        let exact = Tolerances { cutoff_nm: 0.0, pelleting_points: 0.0, k_relative: 0.001, time_minutes: 0.0 };
        let report = ValidationHarness::new(&reference, &medium, &conditions)
            .with_tolerances(exact, exact)
            .run()?;

        assert!(!report.all_pass());
        assert!(!report.table2.all_pass());
        assert!(!report.table3.all_pass());
        // Type 45 Ti computes 213 nm against a published 210 nm
        let row = report.table2.row("Type 45 Ti").ok_or(ValidationError::UnknownRotor("Type 45 Ti".to_string()))?;
        assert_eq!(row.check(CUTOFF_LABEL).map(|c| c.passed), Some(false));
        // SW 40Ti matches exactly even with no slack
        let row = report.table2.row("SW 40Ti").ok_or(ValidationError::UnknownRotor("SW 40Ti".to_string()))?;
        assert!(row.all_pass());
        Ok(())
    }

    #[test]
    fn different_medium_changes_results() -> Result<(), ValidationError> {
        let reference = ReferenceData::livshts_2015();
        let medium = Medium::new(980.0, 1.15, 1.0, 3.0);
        let conditions = RunConditions::default();
        let report = ValidationHarness::new(&reference, &medium, &conditions).run()?;
        // K does not depend on the medium but everything else does
        let row = report.table3.row("SW 40Ti").ok_or(ValidationError::UnknownRotor("SW 40Ti".to_string()))?;
        assert_eq!(row.check(K_FACTOR_LABEL).map(|c| c.passed), Some(true));
        assert_eq!(row.check(CUTOFF_LABEL).map(|c| c.passed), Some(false));
        assert!(!report.all_pass());
        Ok(())
    }

    #[test]
    fn unknown_reference_rotor() -> Result<(), ValidationError> {
        let reference = ReferenceData::livshts_2015();
        let medium = Medium::default();
        let conditions = RunConditions { reference_rotor: "JA-25.50".to_string(), ..RunConditions::default() };
        let harness = ValidationHarness::new(&reference, &medium, &conditions);
        let result = harness.validate_table3(&harness.build_rotors()?);
        assert_eq!(result, Err(ValidationError::UnknownRotor("JA-25.50".to_string())));
        Ok(())
    }

    #[test]
    fn rotor_without_reference_row() {
        let mut reference = ReferenceData::livshts_2015();
        reference.rotors.push(RotorSpec::swinging_bucket("SW 55Ti", 60.9, 108.5, 84.7));
        let medium = Medium::default();
        let conditions = RunConditions::default();
        let result = ValidationHarness::new(&reference, &medium, &conditions).run();
        assert_eq!(result, Err(ValidationError::MissingReference("table 2".to_string(), "SW 55Ti".to_string())));
    }

    #[test]
    fn invalid_geometry_aborts_run() {
        let mut reference = ReferenceData::livshts_2015();
        reference.rotors[3] = RotorSpec::fixed_angle("Type 45 Ti", 35.9, 103.8, 69.9, 95.0, 38.0);
        let medium = Medium::default();
        let conditions = RunConditions::default();
        let result = ValidationHarness::new(&reference, &medium, &conditions).run();
        assert_eq!(result, Err(ValidationError::Geometry(GeometryError::InvalidAngle("Type 45 Ti".to_string(), 95.0))));
    }

    #[test]
    fn zero_rcf_aborts_run() {
        let reference = ReferenceData::livshts_2015();
        let medium = Medium::default();
        let conditions = RunConditions { rcf: 0.0, ..RunConditions::default() };
        let result = ValidationHarness::new(&reference, &medium, &conditions).run();
        assert_eq!(result, Err(ValidationError::InvalidCondition("rcf".to_string(), 0.0)));
    }

    #[test]
    fn buoyant_particles_abort_run() {
        let reference = ReferenceData::livshts_2015();
        let medium = Medium::new(980.0, 1.0, 1.2, 1.55);
        let conditions = RunConditions::default();
        let result = ValidationHarness::new(&reference, &medium, &conditions).run();
        assert!(matches!(result, Err(ValidationError::InvalidCondition(..))));
    }
}
