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

//! Sedimentation physics for swinging-bucket and fixed-angle centrifuge rotors.
//!
//! A [`RotorSpec`] is turned into a [`Rotor`] once, which carries both the physical
//! radii and the effective radial interval that the sedimentation equations use.
//! Every physics function takes the suspending [`Medium`] explicitly.

mod error;
mod medium;
pub mod physics;
pub mod rotor;

pub use error::GeometryError;
pub use medium::Medium;
pub use physics::{
    cutoff_diameter,
    equivalent_time,
    k_factor,
    pelleting_fraction,
    pelleting_fraction_fixed_angle,
    pelleting_fraction_swing,
    pelleting_time_hours,
    sedimentation_coefficient,
    sedimentation_coefficient_svedberg
};
pub use rotor::{Geometry, Rotor, RotorKind, RotorSpec};
