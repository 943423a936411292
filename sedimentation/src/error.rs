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

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("rotor `{0}` has a non-finite dimension")]
    NonFinite(String),
    #[error("rotor `{0}` has invalid radii. rmin `{1}` mm, rmax `{2}` mm")]
    InvalidRadii(String, f64, f64),
    #[error("rotor `{0}` has invalid average radius `{1}` mm")]
    InvalidAverageRadius(String, f64),
    #[error("rotor `{0}` has invalid tube angle `{1}` degrees")]
    InvalidAngle(String, f64),
    #[error("rotor `{0}` has invalid tube diameter `{1}` mm")]
    InvalidDiameter(String, f64),
    #[error("rotor `{0}` sedimentation path of `{1}` mm reaches the rotor axis")]
    PathReachesAxis(String, f64)
}
