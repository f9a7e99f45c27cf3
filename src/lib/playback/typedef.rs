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
use strum_macros::Display;

use crate::forecast::typedef::DemandForecastPoint;
use crate::typedef::Reading;

#[derive(Default, PartialEq, Eq, Serialize, Clone, Copy, Debug, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlaybackState {
	#[default]
	Idle,
	Playing,
	Paused,
}

#[derive(Default, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSnapshot {
	pub state: PlaybackState,
	pub cursor: usize,
	pub total: usize,
	/// Percentage of ticks already revealed
	pub progress: f64,
	pub readings: Vec<Reading>,
	pub forecast: Vec<DemandForecastPoint>,
}

impl PlaybackSnapshot {
	/// Charts follow the revealed prefix only while something is actually playing
	pub fn readings_for_chart<'a>(&'a self, full: &'a [Reading]) -> &'a [Reading] {
		match self.state {
			PlaybackState::Playing if !self.readings.is_empty() => &self.readings,
			_ => full,
		}
	}

	pub fn forecast_for_chart<'a>(&'a self, full: &'a [DemandForecastPoint]) -> &'a [DemandForecastPoint] {
		match self.state {
			PlaybackState::Playing if !self.forecast.is_empty() => &self.forecast,
			_ => full,
		}
	}
}

#[derive(Default, Debug)]
pub(super) struct Reel {
	pub state: PlaybackState,
	pub cursor: usize,
	pub sampled_readings: Vec<Reading>,
	pub sampled_forecast: Vec<DemandForecastPoint>,
	pub revealed_readings: Vec<Reading>,
	pub revealed_forecast: Vec<DemandForecastPoint>,
}

impl Reel {
	pub fn total(&self) -> usize {
		self.sampled_readings.len().max(self.sampled_forecast.len())
	}

	pub fn rewind(&mut self) {
		self.cursor = 0;
		self.revealed_readings.clear();
		self.revealed_forecast.clear();
	}

	/// Reveals one more point of each series, returns true once nothing is left to play
	pub fn advance(&mut self) -> bool {
		if self.state != PlaybackState::Playing {
			return true;
		}

		if let Some(found) = self.sampled_readings.get(self.cursor) {
			self.revealed_readings.push(found.clone());
		}
		if let Some(found) = self.sampled_forecast.get(self.cursor) {
			self.revealed_forecast.push(*found);
		}
		self.cursor += 1;

		if self.cursor >= self.total() {
			self.state = PlaybackState::Paused;
			return true;
		}

		false
	}

	pub fn snapshot(&self) -> PlaybackSnapshot {
		let total = self.total();
		let progress = match total {
			0 => 0f64,
			_ => self.cursor as f64 * 100f64 / total as f64,
		};

		PlaybackSnapshot {
			state: self.state,
			cursor: self.cursor,
			total,
			progress,
			readings: self.revealed_readings.clone(),
			forecast: self.revealed_forecast.clone(),
		}
	}
}
