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

use chrono::{DateTime, Duration, Utc};

use crate::forecast::typedef::DemandForecastPoint;
use crate::typedef::Reading;

/// Evenly strided picks from `series`, never more than `target` and never out of order
pub fn downsample<T: Clone>(series: &[T], target: usize) -> Vec<T> {
	let interval = (series.len() / target.max(1)).max(1);

	series
		.iter()
		.step_by(interval)
		.take(target.min(series.len()))
		.cloned()
		.collect::<Vec<_>>()
}

/// Sampled readings are restamped one minute apart from `now` to mimic a live feed
pub fn sample_readings(readings: &[Reading], now: DateTime<Utc>, target: usize) -> Vec<Reading> {
	downsample(readings, target)
		.into_iter()
		.enumerate()
		.map(|(index, each)| Reading {
			timestamp: now + Duration::minutes(index as i64),
			..each
		})
		.collect::<Vec<_>>()
}

pub fn sample_forecast(points: &[DemandForecastPoint], target: usize) -> Vec<DemandForecastPoint> {
	downsample(points, target)
		.into_iter()
		.zip(1u32..)
		.map(|(each, day)| DemandForecastPoint { day, ..each })
		.collect::<Vec<_>>()
}
