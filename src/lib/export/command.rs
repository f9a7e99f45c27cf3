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

use chrono::{DateTime, NaiveDate, Utc};

use super::typedef::*;
use crate::kpi::typedef::KpiData;

pub fn kpi_summary_rows(kpis: &KpiData) -> Vec<[String; 2]> {
	vec![
		[String::from("Units Lost"), kpis.units_lost.to_string()],
		[
			String::from("Financial Loss (CAD)"),
			format!("${:.2}", kpis.financial_loss),
		],
		[
			String::from("Compensation Amount"),
			format!("${:.2}", kpis.compensation_amount),
		],
		[
			String::from("Total Anomalies"),
			kpis.total_anomalies.to_string(),
		],
		[
			String::from("Average Deviation"),
			kpis.average_deviation.clone(),
		],
	]
}

/// `Metric,Value` table of the KPI record
pub fn kpi_summary_csv(kpis: &KpiData) -> Result<String, csv::Error> {
	let mut writer = csv::WriterBuilder::new()
		.terminator(csv::Terminator::Any(b'\n'))
		.from_writer(Vec::new());

	writer.write_record(["Metric", "Value"])?;
	for row in kpi_summary_rows(kpis) {
		writer.write_record(&row)?;
	}
	writer.flush()?;

	let bytes = writer
		.into_inner()
		.map_err(|err| csv::Error::from(err.into_error()))?;

	Ok(String::from_utf8_lossy(&bytes).trim_end().to_string())
}

pub fn build_report(
	kpis: &KpiData,
	data_point_count: usize,
	now: DateTime<Utc>,
	title: &str,
) -> ReportData {
	ReportData {
		title: title.to_string(),
		timestamp: now,
		kpis: kpis.clone(),
		data_point_count,
	}
}

pub fn export_file_name(date: NaiveDate) -> String {
	format!("novafreeze-report-{}.csv", date.format("%Y-%m-%d"))
}
