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

use rand::Rng;

use super::typedef::*;
use crate::config::ForecastConfig;
use crate::kpi::helper::round_to;

// TODO: demand ignores the observed readings entirely, confirm whether excursion history
// should dampen the curve before wiring it in.

/// Synthetic demand curve, a pure function of the day index plus one bounded noise draw per day
pub fn generate_demand_forecast<R: Rng>(rng: &mut R, config: &ForecastConfig) -> Vec<DemandForecastPoint> {
	(1..=config.horizon_days)
		.map(|day| {
			let x = day as f64;
			let volatility = (x * 0.1).sin() * config.volatility;
			let seasonal_effect = (x * 0.05).cos() * config.seasonal_effect;
			let noise = (rng.random::<f64>() - 0.5) * config.noise_span;
			let demand = config.baseline_demand + volatility + seasonal_effect + noise;

			let confidence = (1f64 - x * config.confidence_decay).max(config.min_confidence);

			DemandForecastPoint {
				day,
				demand: demand.round().max(0f64) as u64,
				confidence: round_to(confidence, 2),
			}
		})
		.collect::<Vec<_>>()
}
