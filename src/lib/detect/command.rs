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

use super::typedef::*;
use crate::config::DetectionConfig;
use crate::typedef::Reading;

/// Scans readings in input order and reports every excursion lasting at least the configured minimum
pub fn detect_anomalies(readings: &[Reading], config: &DetectionConfig) -> Vec<Anomaly> {
	let mut anomalies = Vec::new();
	let mut state = ExcursionState::Normal;

	for (index, reading) in readings.iter().enumerate() {
		let exceeds = reading.temperature > config.threshold;

		state = match (state, exceeds) {
			(ExcursionState::Normal, true) => ExcursionState::InExcursion {
				start: index,
				temperatures: vec![reading.temperature],
			},
			(
				ExcursionState::InExcursion {
					start,
					mut temperatures,
				},
				true,
			) => {
				temperatures.push(reading.temperature);
				ExcursionState::InExcursion {
					start,
					temperatures,
				}
			}
			(ExcursionState::InExcursion { start, temperatures }, false) => {
				anomalies.extend(close_excursion(
					&readings[start],
					reading,
					&temperatures,
					config,
				));
				ExcursionState::Normal
			}
			(ExcursionState::Normal, false) => ExcursionState::Normal,
		};
	}

	// Data ended mid-excursion, so it is measured up to its own last reading
	if let (ExcursionState::InExcursion { start, temperatures }, Some(last)) =
		(state, readings.last())
	{
		anomalies.extend(close_excursion(
			&readings[start],
			last,
			&temperatures,
			config,
		));
	}

	tracing::debug!(
		readings = readings.len(),
		anomalies = anomalies.len(),
		"anomaly detection finished"
	);

	anomalies
}

fn close_excursion(
	first: &Reading,
	end: &Reading,
	temperatures: &[f64],
	config: &DetectionConfig,
) -> Option<Anomaly> {
	let duration = (end.timestamp - first.timestamp).num_milliseconds() as f64 / 3_600_000f64;
	if duration < config.min_duration_hours || temperatures.is_empty() {
		return None;
	}

	let avg_temperature = temperatures.iter().sum::<f64>() / temperatures.len() as f64;
	let peak = temperatures.iter().cloned().fold(f64::MIN, f64::max);

	Some(Anomaly {
		start_time: first.timestamp,
		end_time: end.timestamp,
		duration,
		avg_temperature,
		max_deviation: peak - config.threshold,
	})
}

/// Flags every reading above the threshold for chart collaborators
pub fn to_chart_points(readings: &[Reading], threshold: f64) -> Vec<ChartDataPoint> {
	readings
		.iter()
		.map(|each| ChartDataPoint {
			timestamp: each.timestamp,
			temperature: each.temperature,
			is_anomaly: each.temperature > threshold,
		})
		.collect::<Vec<_>>()
}
