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

use crate::detect::typedef::{Anomaly, ChartDataPoint};
use crate::forecast::typedef::DemandForecastPoint;
use crate::kpi::typedef::{AlertSummary, KpiData};
use crate::typedef::IngestStatus;

#[derive(Default, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DataInfo {
	pub name: String,
	pub reading_count: usize,
	pub dropped_rows: usize,
	pub anomaly_count: usize,
}

/// Everything the presentation side renders for the current data set
#[derive(Default, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
	pub name: Option<String>,
	pub status: IngestStatus,
	pub show_alert: bool,
	pub kpis: KpiData,
	pub alert_summary: AlertSummary,
	pub anomalies: Vec<Anomaly>,
	pub chart: Vec<ChartDataPoint>,
	pub forecast: Vec<DemandForecastPoint>,
}
