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

use super::helper::*;
use super::typedef::*;
use crate::config::KpiConfig;
use crate::detect::typedef::Anomaly;

/// Reduces anomalies into business impact, an empty slice yields zeroed KPIs
pub fn calculate_kpis(anomalies: &[Anomaly], config: &KpiConfig) -> KpiData {
	if anomalies.is_empty() {
		return KpiData::default();
	}

	let units_lost = anomalies
		.iter()
		.map(|each| units_for(each.duration, each.max_deviation))
		.sum::<u64>();

	let financial_loss = round_to(units_lost as f64 * config.loss_per_unit, 2);
	let compensation_amount = round_to(financial_loss * config.compensation_rate, 2);

	// Round ties away from zero before formatting
	let mean_deviation = round_to(
		anomalies.iter().map(|each| each.max_deviation).sum::<f64>() / anomalies.len() as f64,
		1,
	);

	KpiData {
		units_lost,
		financial_loss,
		compensation_amount,
		total_anomalies: anomalies.len(),
		average_deviation: format!("{:.1}°C", mean_deviation),
	}
}

pub fn summarize_alerts(anomalies: &[Anomaly], data_points: usize) -> AlertSummary {
	AlertSummary {
		critical_alerts: anomalies.len(),
		total_duration_hours: round_to(anomalies.iter().map(|each| each.duration).sum(), 1),
		data_points,
	}
}

/// The alert banner is only worth showing while there is something to warn about
pub fn should_show_alert(anomaly_count: usize, dismissed: bool) -> bool {
	anomaly_count > 0 && !dismissed
}
