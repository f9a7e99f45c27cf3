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
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use strum_macros::Display;

use crate::config::DashboardConfig;
use crate::detect::typedef::Anomaly;
use crate::forecast::typedef::DemandForecastPoint;
use crate::kpi::typedef::KpiData;

#[derive(Default, Serialize, Clone, Debug, PartialEq)]
pub struct ErrorInfo {
	pub title: Cow<'static, str>,
	pub message: String,
}

impl std::fmt::Display for ErrorInfo {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: {}", self.title, self.message)
	}
}

/// One temperature sample of the cold chain log
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
	pub timestamp: DateTime<Utc>,
	/// In °C
	pub temperature: f64,
	pub status: String,
}

#[derive(Default, PartialEq, Eq, Serialize, Clone, Copy, Debug, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IngestStatus {
	#[default]
	Idle,
	Processing,
	Loaded,
	Failed,
}

pub struct AppState {
	pub config: DashboardConfig,
	pub source_name: Option<String>,
	pub ingest_status: IngestStatus,
	pub readings: Vec<Reading>,
	pub dropped_rows: usize,
	pub anomalies: Vec<Anomaly>,
	pub kpis: KpiData,
	pub forecast: Vec<DemandForecastPoint>,
	pub alert_dismissed: bool,
	pub rng: StdRng,
}

impl AppState {
	pub fn new(config: DashboardConfig, rng: StdRng) -> Self {
		Self {
			config,
			source_name: None,
			ingest_status: IngestStatus::Idle,
			readings: Vec::new(),
			dropped_rows: 0,
			anomalies: Vec::new(),
			kpis: KpiData::default(),
			forecast: Vec::new(),
			alert_dismissed: false,
			rng,
		}
	}

	pub fn with_seed(config: DashboardConfig, seed: u64) -> Self {
		Self::new(config, StdRng::seed_from_u64(seed))
	}
}

impl Default for AppState {
	fn default() -> Self {
		Self::new(DashboardConfig::default(), StdRng::from_os_rng())
	}
}
