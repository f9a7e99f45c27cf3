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

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use csv::StringRecord;
use parse_datetime::parse_datetime;
use strum::IntoEnumIterator;

use super::typedef::*;
use crate::error::FormatError;
use crate::typedef::Reading;

const DEFAULT_STATUS: &'static str = "OK";

const NAIVE_DATETIME_FORMATS: [&'static str; 4] = [
	"%Y-%m-%d %H:%M:%S",
	"%Y-%m-%dT%H:%M:%S",
	"%Y-%m-%dT%H:%M:%S%.f",
	"%Y-%m-%d %H:%M",
];

pub(super) fn locate_columns(headers: &StringRecord) -> Result<ColumnLookup, FormatError> {
	let lowered = headers
		.iter()
		.map(|each| each.to_lowercase())
		.collect::<Vec<_>>();

	let mut lookup = ColumnLookup::default();
	for role in ColumnRole::iter() {
		let position = lowered
			.iter()
			.position(|header| role.keywords().iter().any(|word| header.contains(word)));

		match (role, position) {
			(ColumnRole::Timestamp, Some(index)) => lookup.timestamp = index,
			(ColumnRole::Temperature, Some(index)) => lookup.temperature = index,
			(ColumnRole::Status, found) => lookup.status = found,
			(missing, None) => return Err(FormatError::MissingColumn(missing)),
		}
	}

	Ok(lookup)
}

/// Zone-less date-times are wall clock time of the local zone, a gap in that clock gives None
pub(super) fn assume_local(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
	match Local.from_local_datetime(&naive) {
		LocalResult::Single(found) => Some(found.with_timezone(&Utc)),
		LocalResult::Ambiguous(earliest, _latest) => Some(earliest.with_timezone(&Utc)),
		LocalResult::None => None,
	}
}

/// Accepts RFC 3339 first, then a few zone-less layouts, then anything `parse_datetime` understands.
/// A bare date is midnight UTC, every other zone-less value is local time.
pub(super) fn parse_timestamp(cell: &str) -> Option<DateTime<Utc>> {
	if cell.is_empty() {
		return None;
	}

	if let Ok(found) = DateTime::parse_from_rfc3339(cell) {
		return Some(found.with_timezone(&Utc));
	}

	if let Some(found) = NAIVE_DATETIME_FORMATS
		.iter()
		.find_map(|format| NaiveDateTime::parse_from_str(cell, format).ok())
	{
		return assume_local(found);
	}

	if let Ok(date) = NaiveDate::parse_from_str(cell, "%Y-%m-%d") {
		return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
	}

	let local: DateTime<Local> = parse_datetime(cell).ok()?.into();
	Some(local.with_timezone(&Utc))
}

/// Reads the leading number of a cell the way a lenient float parser would, so "5.5°C" gives 5.5
pub(super) fn parse_temperature(cell: &str) -> Option<f64> {
	if let Ok(value) = cell.parse::<f64>() {
		return value.is_finite().then_some(value);
	}

	let numeric_end = cell
		.char_indices()
		.take_while(|(_, each)| each.is_ascii_digit() || matches!(each, '+' | '-' | '.' | 'e' | 'E'))
		.last()
		.map(|(index, each)| index + each.len_utf8())?;

	(1..=numeric_end)
		.rev()
		.find_map(|end| cell[..end].parse::<f64>().ok())
		.filter(|value| value.is_finite())
}

pub(super) fn parse_row(row: &StringRecord, lookup: &ColumnLookup) -> Option<Reading> {
	if row.len() < lookup.min_fields() {
		return None;
	}

	let timestamp = parse_timestamp(row.get(lookup.timestamp)?)?;
	let temperature = parse_temperature(row.get(lookup.temperature)?)?;
	let status = lookup
		.status
		.and_then(|index| row.get(index))
		.unwrap_or(DEFAULT_STATUS)
		.to_string();

	Some(Reading {
		timestamp,
		temperature,
		status,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn test_locate_columns_is_case_insensitive() {
		let headers = StringRecord::from(vec!["Status", "Temperature (°C)", "TIMESTAMP"]);
		let lookup = locate_columns(&headers).unwrap();

		assert_eq!(lookup.timestamp, 2);
		assert_eq!(lookup.temperature, 1);
		assert_eq!(lookup.status, Some(0));
		assert_eq!(lookup.min_fields(), 3);
	}

	#[test]
	fn test_locate_columns_accepts_short_names() {
		let headers = StringRecord::from(vec!["time", "temp"]);
		let lookup = locate_columns(&headers).unwrap();

		assert_eq!(lookup.timestamp, 0);
		assert_eq!(lookup.temperature, 1);
		assert_eq!(lookup.status, None);
	}

	#[test]
	fn test_locate_columns_reports_missing_role() {
		let headers = StringRecord::from(vec!["timestamp", "humidity"]);
		assert!(matches!(
			locate_columns(&headers),
			Err(FormatError::MissingColumn(ColumnRole::Temperature))
		));

		let headers = StringRecord::from(vec!["date", "temperature"]);
		assert!(matches!(
			locate_columns(&headers),
			Err(FormatError::MissingColumn(ColumnRole::Timestamp))
		));

		let headers = StringRecord::from(vec!["status", "humidity"]);
		assert!(matches!(
			locate_columns(&headers),
			Err(FormatError::MissingColumn(ColumnRole::Timestamp))
		));
	}

	#[test]
	fn test_locate_columns_never_requires_status() {
		let headers = StringRecord::from(vec!["reading temp", "logged time", "site"]);
		let lookup = locate_columns(&headers).unwrap();

		assert_eq!(
			lookup,
			ColumnLookup {
				timestamp: 1,
				temperature: 0,
				status: None,
			}
		);
	}

	#[test]
	fn test_parse_timestamp_layouts() {
		let expected = Utc.with_ymd_and_hms(2024, 6, 1, 3, 0, 0).unwrap();
		let local = Local
			.with_ymd_and_hms(2024, 6, 1, 3, 0, 0)
			.earliest()
			.map(|found| found.with_timezone(&Utc));

		assert_eq!(parse_timestamp("2024-06-01T03:00:00Z"), Some(expected));
		assert_eq!(parse_timestamp("2024-06-01T05:00:00+02:00"), Some(expected));
		assert_eq!(parse_timestamp("2024-06-01 03:00:00"), local);
		assert_eq!(parse_timestamp("2024-06-01T03:00:00.000"), local);
		assert_eq!(
			parse_timestamp("2024-06-01"),
			Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())
		);
		assert_eq!(parse_timestamp(""), None);
	}

	#[test]
	fn test_zone_less_layouts_agree_with_lenient_parser() {
		for cell in ["2024-06-01 03:00:00", "2024-01-15 23:30:00"] {
			let lenient = parse_datetime(cell)
				.ok()
				.map(|found| DateTime::<Local>::from(found).with_timezone(&Utc));

			assert!(lenient.is_some(), "{} should be understood by parse_datetime", cell);
			assert_eq!(parse_timestamp(cell), lenient, "{} changed meaning", cell);
		}
	}

	#[test]
	fn test_parse_temperature_leniency() {
		assert_eq!(parse_temperature("4.5"), Some(4.5));
		assert_eq!(parse_temperature("-18"), Some(-18.0));
		assert_eq!(parse_temperature("5.5°C"), Some(5.5));
		assert_eq!(parse_temperature("abc"), None);
		assert_eq!(parse_temperature(""), None);
		assert_eq!(parse_temperature("NaN"), None);
	}
}
