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

use sedimentation::GeometryError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("rotor geometry error. {0}")]
    Geometry(#[from] GeometryError),
    #[error("no `{0}` reference row for rotor `{1}`")]
    MissingReference(String, String),
    #[error("rotor `{0}` is not in the rotor list")]
    UnknownRotor(String),
    #[error("`{0}` must be positive and finite, got `{1}`")]
    InvalidCondition(String, f64)
}
