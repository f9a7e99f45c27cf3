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

use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KpiData {
	pub units_lost: u64,
	pub financial_loss: f64,
	pub compensation_amount: f64,
	pub total_anomalies: usize,
	/// Already formatted, e.g. "1.5°C"
	pub average_deviation: String,
}

impl Default for KpiData {
	fn default() -> Self {
		Self {
			units_lost: 0,
			financial_loss: 0.0,
			compensation_amount: 0.0,
			total_anomalies: 0,
			average_deviation: String::from("0°C"),
		}
	}
}

#[derive(Default, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
	pub critical_alerts: usize,
	pub total_duration_hours: f64,
	pub data_points: usize,
}
