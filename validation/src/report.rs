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

use serde::Serialize;
use sedimentation::RotorKind;

/// One computed value compared against one published value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Check {
    pub label: String,
    pub computed: f64,
    pub expected: f64,
    pub passed: bool
}

impl Check {
    pub fn new(label: &str, computed: f64, expected: f64, passed: bool) -> Check {
        Check { label: label.to_string(), computed, expected, passed }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowReport {
    pub rotor: String,
    pub kind: RotorKind,
    pub checks: Vec<Check>
}

impl RowReport {
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn total(&self) -> usize {
        self.checks.len()
    }

    pub fn all_pass(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn check(&self, label: &str) -> Option<&Check> {
        self.checks.iter().find(|c| c.label == label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceK {
    pub rotor: String,
    pub k_factor: f64,
    pub minutes: f64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableReport {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<ReferenceK>,
    pub rows: Vec<RowReport>
}

impl TableReport {
    pub fn passed(&self) -> usize {
        self.rows.iter().map(RowReport::passed).sum()
    }

    pub fn total(&self) -> usize {
        self.rows.iter().map(RowReport::total).sum()
    }

    pub fn all_pass(&self) -> bool {
        self.rows.iter().all(RowReport::all_pass)
    }

    pub fn row(&self, rotor: &str) -> Option<&RowReport> {
        self.rows.iter().find(|r| r.rotor == rotor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub table2: TableReport,
    pub table3: TableReport
}

impl ValidationReport {
    pub fn passed(&self) -> usize {
        self.table2.passed() + self.table3.passed()
    }

    pub fn total(&self) -> usize {
        self.table2.total() + self.table3.total()
    }

    pub fn all_pass(&self) -> bool {
        self.table2.all_pass() && self.table3.all_pass()
    }
}

#[cfg(test)]
mod tests {
    use sedimentation::RotorKind;
    use crate::report::{Check, RowReport, TableReport, ValidationReport};

    fn row(rotor: &str, results: &[bool]) -> RowReport {
        RowReport {
            rotor: rotor.to_string(),
            kind: RotorKind::SwingingBucket,
            checks: results.iter().enumerate()
                .map(|(i, passed)| Check::new(&format!("check {}", i), 1.0, 1.0, *passed))
                .collect()
        }
    }

    #[test]
    fn counts_aggregate_upwards() {
        let table2 = TableReport {
            title: "t2".to_string(),
            reference: None,
            rows: vec![row("a", &[true, true]), row("b", &[true, false, true])]
        };
        let table3 = TableReport {
            title: "t3".to_string(),
            reference: None,
            rows: vec![row("a", &[true])]
        };
        assert_eq!(table2.passed(), 4);
        assert_eq!(table2.total(), 5);
        assert_eq!(table2.all_pass(), false);
        assert_eq!(table3.all_pass(), true);
        assert_eq!(table2.row("b").map(RowReport::all_pass), Some(false));
        assert_eq!(table2.row("b").and_then(|r| r.check("check 1")).map(|c| c.passed), Some(false));

        let report = ValidationReport { table2, table3 };
        assert_eq!(report.passed(), 5);
        assert_eq!(report.total(), 6);
        assert_eq!(report.all_pass(), false);
    }

    #[test]
    fn empty_table_passes() {
        let table = TableReport { title: "empty".to_string(), reference: None, rows: vec![] };
        assert_eq!(table.total(), 0);
        assert_eq!(table.all_pass(), true);
    }
}
