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
use strum_macros::{Display, EnumIter};

use crate::typedef::Reading;

/// Header roles recognised in a temperature log
#[derive(PartialEq, Eq, EnumIter, Display, Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
	Timestamp,
	Temperature,
	Status,
}

impl ColumnRole {
	/// Case-insensitive substrings a header must contain to take this role
	pub fn keywords(&self) -> &'static [&'static str] {
		match self {
			ColumnRole::Timestamp => &["timestamp", "time"],
			ColumnRole::Temperature => &["temperature", "temp"],
			ColumnRole::Status => &["status"],
		}
	}
}

#[derive(Default, PartialEq, Eq, Clone, Copy, Debug)]
pub struct ColumnLookup {
	pub timestamp: usize,
	pub temperature: usize,
	pub status: Option<usize>,
}

impl ColumnLookup {
	/// Shortest row that still carries both required fields
	pub fn min_fields(&self) -> usize {
		self.timestamp.max(self.temperature) + 1
	}
}

#[derive(Default, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
	pub readings: Vec<Reading>,
	pub dropped_rows: usize,
}
