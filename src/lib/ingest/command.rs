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
use rand::Rng;

use super::helper::*;
use super::typedef::*;
use crate::config::DashboardConfig;
use crate::error::FormatError;

const SAMPLE_HEADER: &'static str = "Timestamp,Temperature (°C),Status";
const SAMPLE_HOURS: i64 = 168;

/// Turns raw CSV text into readings, dropping malformed rows silently but counting them
pub fn parse_csv(text: &str, config: &DashboardConfig) -> Result<IngestReport, FormatError> {
	let mut reader = csv::ReaderBuilder::new()
		.has_headers(true)
		.flexible(true)
		.trim(csv::Trim::All)
		.from_reader(text.trim().as_bytes());

	let lookup = locate_columns(reader.headers()?)?;
	tracing::debug!(?lookup, "located temperature log columns");

	let mut report = IngestReport::default();
	for each in reader.records() {
		match each.ok().and_then(|row| parse_row(&row, &lookup)) {
			Some(reading) => report.readings.push(reading),
			None => report.dropped_rows += 1,
		}
	}

	if report.dropped_rows > 0 {
		tracing::warn!(dropped = report.dropped_rows, "skipped malformed rows");
	}

	if report.readings.is_empty() {
		return Err(FormatError::NoReadings);
	}

	let above = report
		.readings
		.iter()
		.filter(|each| each.temperature > config.detection.threshold)
		.count();
	tracing::info!(
		readings = report.readings.len(),
		above_threshold = above,
		"parsed temperature log"
	);

	Ok(report)
}

/// A week of hourly readings with one long and one short warm period
pub fn generate_sample_csv<R: Rng>(rng: &mut R, start: DateTime<Utc>) -> String {
	let mut csv = String::from(SAMPLE_HEADER);
	csv.push('\n');

	for hour in 0..SAMPLE_HOURS {
		let timestamp = start + Duration::hours(hour);

		let temperature = match hour {
			24..=30 => 9.0 + rng.random::<f64>() * 2.0,
			120..=125 => 8.5 + rng.random::<f64>() * 1.5,
			_ => 4.0 + rng.random::<f64>() * 2.0,
		};

		let status = if temperature > 8.0 { "ALERT" } else { "OK" };

		csv.push_str(&format!(
			"{},{:.1},{}\n",
			timestamp.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
			temperature,
			status
		));
	}

	csv
}

pub fn sample_start() -> DateTime<Utc> {
	DateTime::from_timestamp(1_717_200_000, 0).unwrap_or_default()
}
