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
use std::{borrow::Cow, path::Path, sync::Mutex};

use super::helper::*;
use super::typedef::*;
use crate::detect::command::to_chart_points;
use crate::export::{command::*, typedef::ReportData};
use crate::ingest::command::{generate_sample_csv, parse_csv, sample_start};
use crate::kpi::command::{should_show_alert, summarize_alerts};
use crate::typedef::{AppState, ErrorInfo, IngestStatus};

const ERROR_EXTENSION: &'static str = "File Type Unsupported";
const ERROR_CONTENT: &'static str = "Failed to Read Content";
const ERROR_EXPORT: &'static str = "Cannot Export Summary";
const SAMPLE_NAME: &'static str = "sample-data.csv";

pub fn load_data(state: &Mutex<AppState>, source_path: &Path) -> Result<DataInfo, ErrorInfo> {
	let extension = source_path
		.extension()
		.and_then(|found| found.to_str())
		.map(|found| found.to_lowercase());

	if extension.as_deref() != Some("csv") {
		return Err(ErrorInfo {
			title: Cow::Borrowed(ERROR_EXTENSION),
			message: format!(
				"Only CSV files are supported, got \"{}\"",
				source_path.to_string_lossy()
			),
		});
	}

	let text = std::fs::read_to_string(source_path).map_err(|err| ErrorInfo {
		title: Cow::Borrowed(ERROR_CONTENT),
		message: err.to_string(),
	})?;

	let name = source_path
		.file_name()
		.and_then(|name| Some(name.to_str()?.to_string()))
		.unwrap_or(String::from("(unknown)"));

	load_text(state, name, &text)
}

/// Runs the whole pipeline on new CSV text, a failure keeps the previous data set intact
pub fn load_text(state: &Mutex<AppState>, name: String, text: &str) -> Result<DataInfo, ErrorInfo> {
	let mut guarded_state = lock_state(state, "State Inaccessible on Load Data")?;
	guarded_state.ingest_status = IngestStatus::Processing;

	let report = match parse_csv(text, &guarded_state.config) {
		Ok(ok) => ok,
		Err(err) => {
			tracing::error!(%err, name = %name, "cannot ingest temperature log");
			guarded_state.ingest_status = IngestStatus::Failed;
			return Err(ErrorInfo::from(&err));
		}
	};

	guarded_state.readings = report.readings;
	guarded_state.dropped_rows = report.dropped_rows;
	guarded_state.source_name = Some(name.clone());
	recompute(&mut guarded_state);
	guarded_state.ingest_status = IngestStatus::Loaded;

	Ok(DataInfo {
		name,
		reading_count: guarded_state.readings.len(),
		dropped_rows: guarded_state.dropped_rows,
		anomaly_count: guarded_state.anomalies.len(),
	})
}

pub fn load_sample(state: &Mutex<AppState>) -> Result<DataInfo, ErrorInfo> {
	let text = {
		let mut guarded_state = lock_state(state, "State Inaccessible on Sample Data")?;
		generate_sample_csv(&mut guarded_state.rng, sample_start())
	};

	load_text(state, String::from(SAMPLE_NAME), &text)
}

pub fn get_dashboard(state: &Mutex<AppState>) -> Result<DashboardView, ErrorInfo> {
	let guarded_state = lock_state(state, "State Inaccessible on Getting Dashboard")?;

	Ok(DashboardView {
		name: guarded_state.source_name.clone(),
		status: guarded_state.ingest_status,
		show_alert: should_show_alert(guarded_state.anomalies.len(), guarded_state.alert_dismissed),
		kpis: guarded_state.kpis.clone(),
		alert_summary: summarize_alerts(&guarded_state.anomalies, guarded_state.readings.len()),
		anomalies: guarded_state.anomalies.clone(),
		chart: to_chart_points(
			&guarded_state.readings,
			guarded_state.config.detection.threshold,
		),
		forecast: guarded_state.forecast.clone(),
	})
}

pub fn dismiss_alert(state: &Mutex<AppState>) -> Result<(), ErrorInfo> {
	let mut guarded_state = lock_state(state, "State Inaccessible on Dismissing Alert")?;
	guarded_state.alert_dismissed = true;
	Ok(())
}

pub fn export_summary(state: &Mutex<AppState>) -> Result<String, ErrorInfo> {
	let guarded_state = lock_state(state, "State Inaccessible on Export")?;

	kpi_summary_csv(&guarded_state.kpis).map_err(|err| ErrorInfo {
		title: Cow::Borrowed(ERROR_EXPORT),
		message: err.to_string(),
	})
}

pub fn export_report(state: &Mutex<AppState>, now: DateTime<Utc>) -> Result<ReportData, ErrorInfo> {
	let guarded_state = lock_state(state, "State Inaccessible on Export")?;

	Ok(build_report(
		&guarded_state.kpis,
		guarded_state.readings.len(),
		now,
		&guarded_state.config.report_title,
	))
}

/// Drops the loaded data but keeps the configuration
pub fn restart(state: &Mutex<AppState>) -> Result<(), ErrorInfo> {
	let mut guarded_state = lock_state(state, "State Inaccessible on Restart")?;
	let config = guarded_state.config.clone();
	let rng = guarded_state.rng.clone();
	*guarded_state = AppState::new(config, rng);
	Ok(())
}
