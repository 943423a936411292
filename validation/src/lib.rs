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

//! Cross-checks the sedimentation engine against published rotor tables.

pub mod conditions;
pub mod harness;
pub mod reference;
pub mod report;
pub mod tolerance;

mod error;

pub use conditions::RunConditions;
pub use error::ValidationError;
pub use harness::ValidationHarness;
pub use reference::ReferenceData;
pub use report::{Check, RowReport, TableReport, ValidationReport};
pub use tolerance::Tolerances;
