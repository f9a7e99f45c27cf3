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

use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use std::{path::PathBuf, sync::Mutex};
use tracing_subscriber::EnvFilter;

pub mod typedef;
use typedef::*;

pub mod config;
pub mod error;

pub mod data;
pub mod detect;
pub mod export;
pub mod forecast;
pub mod ingest;
pub mod kpi;
pub mod playback;

use config::DashboardConfig;
use data::command::*;
use playback::{command::Playback, typedef::PlaybackState};

const PLAYBACK_FLAG: &'static str = "--playback";

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init();
}

/// Loads the CSV named on the command line (or the built-in sample), prints the dashboard as JSON
/// and, with `--playback`, animates the downsampled series to completion.
pub fn run() {
	init_tracing();

	let config = match DashboardConfig::load() {
		Ok(ok) => ok,
		Err(err) => {
			tracing::warn!(%err, "falling back to default config");
			DashboardConfig::default()
		}
	};

	let args = std::env::args().skip(1).collect::<Vec<_>>();
	let wants_playback = args.iter().any(|each| each == PLAYBACK_FLAG);
	let source_path = args
		.iter()
		.find(|each| each.as_str() != PLAYBACK_FLAG)
		.map(PathBuf::from);

	let state = Mutex::new(AppState::new(config.clone(), StdRng::from_os_rng()));

	let loaded = match &source_path {
		Some(path) => load_data(&state, path),
		None => load_sample(&state),
	};

	if let Err(err) = loaded {
		tracing::error!(title = %err.title, "{}", err.message);
		std::process::exit(1);
	}

	let view = match get_dashboard(&state) {
		Ok(ok) => ok,
		Err(err) => {
			tracing::error!(title = %err.title, "{}", err.message);
			std::process::exit(1);
		}
	};

	match serde_json::to_string_pretty(&view) {
		Ok(json) => println!("{}", json),
		Err(err) => tracing::error!(%err, "cannot serialize dashboard"),
	}

	if !wants_playback {
		return;
	}

	let runtime = match tokio::runtime::Builder::new_current_thread().enable_time().build() {
		Ok(ok) => ok,
		Err(err) => {
			tracing::error!(%err, "cannot start playback runtime");
			return;
		}
	};

	runtime.block_on(async {
		let (readings, forecast) = match state.lock() {
			Ok(guarded_state) => (guarded_state.readings.clone(), guarded_state.forecast.clone()),
			Err(_) => return,
		};

		let mut playback = Playback::new(&readings, &forecast, &config.playback, Utc::now());
		playback.start();

		while playback.state() == PlaybackState::Playing {
			tokio::time::sleep(config.playback.tick()).await;
			let snapshot = playback.snapshot();
			tracing::info!(
				cursor = snapshot.cursor,
				total = snapshot.total,
				"revealed {:.0}%",
				snapshot.progress
			);
		}
	});
}
