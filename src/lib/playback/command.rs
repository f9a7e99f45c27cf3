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
use std::{
	sync::{Arc, Mutex, MutexGuard, PoisonError},
	time::Duration,
};
use tokio::{task::JoinHandle, time::Instant};

use super::helper::*;
use super::typedef::*;
use crate::config::PlaybackConfig;
use crate::forecast::typedef::DemandForecastPoint;
use crate::typedef::Reading;

/// Timer driven reveal of a downsampled reading and forecast series.
///
/// The ticker task is owned here, so stopping, resetting or dropping the controller
/// cancels any pending reveal. Starting requires a running tokio runtime.
pub struct Playback {
	reel: Arc<Mutex<Reel>>,
	tick: Duration,
	ticker: Option<JoinHandle<()>>,
}

impl Playback {
	pub fn new(
		readings: &[Reading],
		forecast: &[DemandForecastPoint],
		config: &PlaybackConfig,
		now: DateTime<Utc>,
	) -> Self {
		let reel = Reel {
			sampled_readings: sample_readings(readings, now, config.sample_size),
			sampled_forecast: sample_forecast(forecast, config.sample_size),
			..Default::default()
		};

		Self {
			reel: Arc::new(Mutex::new(reel)),
			tick: config.tick(),
			ticker: None,
		}
	}

	pub fn start(&mut self) {
		self.cancel_ticker();

		{
			let mut guarded_reel = self.lock_reel();
			guarded_reel.rewind();

			if guarded_reel.total() == 0 {
				guarded_reel.state = PlaybackState::Idle;
				tracing::debug!("nothing to play back");
				return;
			}

			guarded_reel.state = PlaybackState::Playing;
			tracing::info!(points = guarded_reel.total(), "playback started");
		}

		let reel = self.reel.clone();
		let tick = self.tick;
		self.ticker = Some(tokio::spawn(async move {
			let mut interval = tokio::time::interval_at(Instant::now() + tick, tick);

			loop {
				interval.tick().await;

				let finished = match reel.lock() {
					Ok(mut guarded_reel) => guarded_reel.advance(),
					Err(_) => true,
				};

				if finished {
					tracing::debug!("playback ticker finished");
					break;
				}
			}
		}));
	}

	/// Freezes the revealed prefix where it is
	pub fn stop(&mut self) {
		self.cancel_ticker();

		let mut guarded_reel = self.lock_reel();
		if guarded_reel.state == PlaybackState::Playing {
			guarded_reel.state = PlaybackState::Paused;
			tracing::info!(cursor = guarded_reel.cursor, "playback stopped");
		}
	}

	pub fn reset(&mut self) {
		self.cancel_ticker();

		let mut guarded_reel = self.lock_reel();
		guarded_reel.state = PlaybackState::Idle;
		guarded_reel.rewind();
		tracing::info!("playback reset");
	}

	pub fn snapshot(&self) -> PlaybackSnapshot {
		self.lock_reel().snapshot()
	}

	pub fn state(&self) -> PlaybackState {
		self.lock_reel().state
	}

	fn lock_reel(&self) -> MutexGuard<'_, Reel> {
		self.reel.lock().unwrap_or_else(PoisonError::into_inner)
	}

	fn cancel_ticker(&mut self) {
		if let Some(ticker) = self.ticker.take() {
			ticker.abort();
		}
	}
}

impl Drop for Playback {
	fn drop(&mut self) {
		self.cancel_ticker();
	}
}
