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

/// Rounds half away from zero, so 72.5 becomes 73
pub fn round_to_int(val: f64) -> i64 {
    val.round() as i64
}

pub fn fraction_to_percentage(fraction: f64) -> f64 {
    fraction * 100.0
}

pub fn clamp_fraction(val: f64) -> f64 {
    val.clamp(0.0, 1.0)
}

pub fn within_absolute(computed: f64, expected: f64, tolerance: f64) -> bool {
    (computed - expected).abs() <= tolerance
}

/// Strict comparison; a zero `expected` never matches
pub fn within_relative(computed: f64, expected: f64, tolerance: f64) -> bool {
    if expected == 0.0 {
        return false;
    }
    ((computed - expected) / expected).abs() < tolerance
}
