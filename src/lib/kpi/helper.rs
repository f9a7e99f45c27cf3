/*
 * Project::NovaFreeze, a cold chain excursion dashboard
 * Copyright (C) 2025 Athaariq A. Ramadhani <foss@athaariq.my.id>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
	let factor = 10f64.powi(decimals);
	(value * factor).round() / factor
}

/// Severity weighted spoilage, longer and hotter excursions compound
pub(super) fn units_for(duration: f64, max_deviation: f64) -> u64 {
	(duration * max_deviation * 2f64).ceil().max(0f64) as u64
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_round_to_two_decimals() {
		assert_eq!(round_to(100.0, 2), 100.0);
		assert_eq!(round_to(12.345_6, 2), 12.35);
		assert_eq!(round_to(0.8 * 37.5, 2), 30.0);
	}

	#[test]
	fn test_units_round_up() {
		assert_eq!(units_for(4.0, 1.0), 8);
		assert_eq!(units_for(3.1, 0.2), 2);
		assert_eq!(units_for(3.0, 0.0), 0);
	}
}
