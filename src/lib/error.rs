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

use std::{borrow::Cow, path::PathBuf};

use crate::ingest::typedef::ColumnRole;
use crate::typedef::ErrorInfo;

const ERROR_HEADER: &'static str = "Cannot Read Header";
const ERROR_INCOMPLETE: &'static str = "Data is Incomplete";
const ERROR_EMPTY: &'static str = "No Usable Readings";

/// Fatal ingestion failure, no partial result is ever returned alongside it
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
	#[error("CSV must contain Timestamp and Temperature columns, {0} column is missing")]
	MissingColumn(ColumnRole),

	#[error("there is no valid reading in this CSV file")]
	NoReadings,

	#[error("cannot read the header row: {0}")]
	Unreadable(#[from] csv::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("cannot read config file {path}: {source}")]
	Unreadable {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("malformed config: {0}")]
	Malformed(#[from] serde_json::Error),
}

impl From<&FormatError> for ErrorInfo {
	fn from(err: &FormatError) -> Self {
		let title = match err {
			FormatError::MissingColumn(_) => ERROR_INCOMPLETE,
			FormatError::NoReadings => ERROR_EMPTY,
			FormatError::Unreadable(_) => ERROR_HEADER,
		};

		ErrorInfo {
			title: Cow::Borrowed(title),
			message: err.to_string(),
		}
	}
}
