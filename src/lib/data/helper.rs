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

use std::{
	borrow::Cow,
	sync::{Mutex, MutexGuard},
};

use crate::detect::command::detect_anomalies;
use crate::forecast::command::generate_demand_forecast;
use crate::kpi::command::calculate_kpis;
use crate::typedef::{AppState, ErrorInfo};

pub(super) fn lock_state<'a>(
	state: &'a Mutex<AppState>,
	title: &'static str,
) -> Result<MutexGuard<'a, AppState>, ErrorInfo> {
	state.lock().map_err(|err| ErrorInfo {
		title: Cow::Borrowed(title),
		message: err.to_string(),
	})
}

/// Re-derives anomalies, KPIs and forecast from scratch after the readings changed
pub(super) fn recompute(state: &mut AppState) {
	let config = state.config.clone();

	state.anomalies = detect_anomalies(&state.readings, &config.detection);
	state.kpis = calculate_kpis(&state.anomalies, &config.kpi);
	state.forecast = generate_demand_forecast(&mut state.rng, &config.forecast);
	state.alert_dismissed = false;

	tracing::info!(
		readings = state.readings.len(),
		anomalies = state.anomalies.len(),
		units_lost = state.kpis.units_lost,
		"dashboard recomputed"
	);
}
