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

use itertools::Itertools;
use sedimentation::RotorKind;
use utils::numeric::round_to_int;
use validation::harness::{CUTOFF_LABEL, K_FACTOR_LABEL, TIME_LABEL};
use validation::{Check, RowReport, TableReport, ValidationReport};

const TABLE2_WIDTH: usize = 100;
const TABLE3_WIDTH: usize = 115;
const ROW_WIDTH: usize = 85;

fn sym(ok: bool) -> &'static str {
    if ok { "✓" } else { "✗" }
}

fn status(ok: bool) -> &'static str {
    if ok { "✅ PASS" } else { "❌ FAIL" }
}

fn format_check(check: &Check) -> String {
    match check.label.as_str() {
        K_FACTOR_LABEL => format!("{:7.1}/{:7.1}{}", check.computed, check.expected, sym(check.passed)),
        CUTOFF_LABEL => format!("{:4}/{:4}{}", round_to_int(check.computed), round_to_int(check.expected), sym(check.passed)),
        _ => format!("{:3}/{:3}{}", round_to_int(check.computed), round_to_int(check.expected), sym(check.passed))
    }
}

fn format_row(row: &RowReport) -> String {
    let cells = row.checks.iter().map(|c| format!("{:<13}", format_check(c))).join(" ");
    format!("{:<16} {} {}", row.rotor, cells, status(row.all_pass()))
}

fn format_header(row: &RowReport) -> String {
    let cells = row.checks.iter().map(|c| {
        let label = match c.label.as_str() {
            CUTOFF_LABEL | K_FACTOR_LABEL | TIME_LABEL => format!("{}(c/e)", c.label),
            other => format!("{}(c/e)", other.trim_end_matches(" nm"))
        };
        format!("{:<13}", label)
    }).join(" ");
    format!("{:<16} {} Status", "Rotor", cells)
}

fn render_table2(table: &TableReport) -> Vec<String> {
    let mut lines = vec!["=".repeat(TABLE2_WIDTH), table.title.clone(), "=".repeat(TABLE2_WIDTH)];
    for kind in [RotorKind::SwingingBucket, RotorKind::FixedAngle] {
        let rows = table.rows.iter().filter(|r| r.kind == kind).collect_vec();
        let Some(first) = rows.first() else {
            continue;
        };
        lines.push(String::new());
        lines.push(format!("--- {} Rotors ---", kind));
        lines.push(format_header(first));
        lines.push("-".repeat(ROW_WIDTH));
        lines.extend(rows.iter().map(|r| format_row(r)));
    }
    lines
}

fn render_table3(table: &TableReport) -> Vec<String> {
    let title = match &table.reference {
        Some(reference) => format!("{} (ref: {}, K={:.1}, t={} min)",
                                   table.title, reference.rotor, reference.k_factor, reference.minutes),
        None => table.title.clone()
    };
    let mut lines = vec![String::new(), "=".repeat(TABLE3_WIDTH), title, "=".repeat(TABLE3_WIDTH)];
    if let Some(first) = table.rows.first() {
        lines.push(String::new());
        lines.push(format_header(first));
        lines.push("-".repeat(TABLE3_WIDTH));
        lines.extend(table.rows.iter().map(format_row));
    }
    lines
}

fn render_summary(report: &ValidationReport) -> Vec<String> {
    let tick = |ok: bool| if ok { "✅" } else { "❌" };
    vec![
        String::new(),
        "=".repeat(TABLE2_WIDTH),
        format!("SUMMARY: {}/{} tests passed", report.passed(), report.total()),
        format!("  Table 2 (d*, pelleting):     {}/{} {}", report.table2.passed(), report.table2.total(), tick(report.table2.all_pass())),
        format!("  Table 3 (K-factor, timing):  {}/{} {}", report.table3.passed(), report.table3.total(), tick(report.table3.all_pass())),
        if report.all_pass() { "✅ ALL VALIDATIONS PASSED".to_string() } else { "❌ SOME VALIDATIONS FAILED".to_string() },
        "=".repeat(TABLE2_WIDTH),
    ]
}

pub fn render_text(report: &ValidationReport) -> String {
    render_table2(&report.table2).into_iter()
        .chain(render_table3(&report.table3))
        .chain(render_summary(report))
        .join("\n")
}

pub fn render_json(report: &ValidationReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
