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

use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

use crate::error::ConfigError;

/// Environment variable naming a JSON file that overrides [`DashboardConfig`] defaults.
pub const CONFIG_ENV: &'static str = "COLD_CHAIN_CONFIG";

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectionConfig {
	/// Readings strictly above this temperature (°C) belong to an excursion
	pub threshold: f64,
	pub min_duration_hours: f64,
}

impl Default for DetectionConfig {
	fn default() -> Self {
		Self {
			threshold: 8.0,
			min_duration_hours: 3.0,
		}
	}
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct KpiConfig {
	/// Currency lost per spoiled unit
	pub loss_per_unit: f64,
	/// Share of the financial loss that is paid back as compensation
	pub compensation_rate: f64,
}

impl Default for KpiConfig {
	fn default() -> Self {
		Self {
			loss_per_unit: 12.50,
			compensation_rate: 0.8,
		}
	}
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ForecastConfig {
	pub horizon_days: u32,
	pub baseline_demand: f64,
	pub volatility: f64,
	pub seasonal_effect: f64,
	/// Width of the uniform noise band centred on zero
	pub noise_span: f64,
	pub confidence_decay: f64,
	pub min_confidence: f64,
}

impl Default for ForecastConfig {
	fn default() -> Self {
		Self {
			horizon_days: 20,
			baseline_demand: 1000.0,
			volatility: 100.0,
			seasonal_effect: 50.0,
			noise_span: 50.0,
			confidence_decay: 0.015,
			min_confidence: 0.6,
		}
	}
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaybackConfig {
	pub sample_size: usize,
	pub tick_millis: u64,
}

impl PlaybackConfig {
	pub fn tick(&self) -> Duration {
		Duration::from_millis(self.tick_millis.max(1))
	}
}

impl Default for PlaybackConfig {
	fn default() -> Self {
		Self {
			sample_size: 100,
			tick_millis: 100,
		}
	}
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
	pub detection: DetectionConfig,
	pub kpi: KpiConfig,
	pub forecast: ForecastConfig,
	pub playback: PlaybackConfig,
	pub report_title: String,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			detection: Default::default(),
			kpi: Default::default(),
			forecast: Default::default(),
			playback: Default::default(),
			report_title: String::from("NovaFreeze Cold Chain Report"),
		}
	}
}

impl DashboardConfig {
	pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(raw)?)
	}

	pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
		let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json(&raw)
	}

	/// Reads the file named by [`CONFIG_ENV`], or falls back to defaults when unset
	pub fn load() -> Result<Self, ConfigError> {
		match std::env::var_os(CONFIG_ENV) {
			Some(path) => Self::from_path(Path::new(&path)),
			None => Ok(Self::default()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_partial_json_keeps_defaults() {
		let config =
			DashboardConfig::from_json(r#"{ "detection": { "threshold": 6.5 } }"#).unwrap();

		assert_eq!(config.detection.threshold, 6.5);
		assert_eq!(config.detection.min_duration_hours, 3.0);
		assert_eq!(config.kpi, KpiConfig::default());
		assert_eq!(config.report_title, "NovaFreeze Cold Chain Report");
	}

	#[test]
	fn test_malformed_json_is_rejected() {
		assert!(matches!(
			DashboardConfig::from_json("{ detection"),
			Err(ConfigError::Malformed(_))
		));
	}

	#[test]
	fn test_tick_never_zero() {
		let playback = PlaybackConfig {
			tick_millis: 0,
			..Default::default()
		};
		assert_eq!(playback.tick(), Duration::from_millis(1));
	}
}
