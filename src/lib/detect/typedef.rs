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

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A qualifying excursion, created only by the detector
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
	pub start_time: DateTime<Utc>,
	pub end_time: DateTime<Utc>,
	/// In hours
	pub duration: f64,
	pub avg_temperature: f64,
	/// Peak excess over the threshold
	pub max_deviation: f64,
}

#[derive(Default, Debug)]
pub(super) enum ExcursionState {
	#[default]
	Normal,
	InExcursion {
		start: usize,
		temperatures: Vec<f64>,
	},
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataPoint {
	pub timestamp: DateTime<Utc>,
	pub temperature: f64,
	pub is_anomaly: bool,
}
