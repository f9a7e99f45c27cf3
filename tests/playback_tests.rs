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

//! Timer driven playback tests, run on a paused tokio clock

use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use cold_chain_dashboard_lib::{
	config::PlaybackConfig,
	forecast::typedef::DemandForecastPoint,
	playback::{command::Playback, typedef::PlaybackState},
	typedef::Reading,
};
use std::time::Duration;

fn now() -> DateTime<Utc> {
	Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap()
}

fn readings(count: usize) -> Vec<Reading> {
	let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
	(0..count)
		.map(|hour| Reading {
			timestamp: start + ChronoDuration::hours(hour as i64),
			temperature: 4.0,
			status: String::from("OK"),
		})
		.collect::<Vec<_>>()
}

fn forecast(count: u32) -> Vec<DemandForecastPoint> {
	(1..=count)
		.map(|day| DemandForecastPoint {
			day,
			demand: 1000,
			confidence: 0.9,
		})
		.collect::<Vec<_>>()
}

#[tokio::test(start_paused = true)]
async fn test_reveals_one_point_per_tick() {
	let mut playback = Playback::new(&readings(250), &forecast(20), &PlaybackConfig::default(), now());
	assert_eq!(playback.state(), PlaybackState::Idle);

	playback.start();
	assert_eq!(playback.state(), PlaybackState::Playing);

	tokio::time::sleep(Duration::from_millis(350)).await;

	let snapshot = playback.snapshot();
	assert_eq!(snapshot.cursor, 3);
	assert_eq!(snapshot.total, 100);
	assert_eq!(snapshot.readings.len(), 3);
	assert_eq!(snapshot.forecast.len(), 3);
	assert_eq!(snapshot.readings[2].timestamp, now() + ChronoDuration::minutes(2));
	assert_eq!(snapshot.progress, 3.0);
}

#[tokio::test(start_paused = true)]
async fn test_stop_freezes_revealed_prefix() {
	let mut playback = Playback::new(&readings(50), &forecast(20), &PlaybackConfig::default(), now());
	playback.start();

	tokio::time::sleep(Duration::from_millis(250)).await;
	playback.stop();
	assert_eq!(playback.state(), PlaybackState::Paused);

	tokio::time::sleep(Duration::from_millis(1_000)).await;
	let snapshot = playback.snapshot();
	assert_eq!(snapshot.cursor, 2);
	assert_eq!(snapshot.readings.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_reset_rewinds_and_start_begins_again() {
	let mut playback = Playback::new(&readings(50), &forecast(20), &PlaybackConfig::default(), now());
	playback.start();
	tokio::time::sleep(Duration::from_millis(450)).await;

	playback.reset();
	let snapshot = playback.snapshot();
	assert_eq!(snapshot.state, PlaybackState::Idle);
	assert_eq!(snapshot.cursor, 0);
	assert!(snapshot.readings.is_empty());
	assert!(snapshot.forecast.is_empty());

	tokio::time::sleep(Duration::from_millis(500)).await;
	assert_eq!(playback.snapshot().cursor, 0);

	playback.start();
	tokio::time::sleep(Duration::from_millis(150)).await;
	assert_eq!(playback.snapshot().cursor, 1);
}

#[tokio::test(start_paused = true)]
async fn test_playback_finishes_after_longest_series() {
	let full_readings = readings(30);
	let full_forecast = forecast(20);
	let mut playback = Playback::new(&full_readings, &full_forecast, &PlaybackConfig::default(), now());
	playback.start();

	tokio::time::sleep(Duration::from_millis(1_050)).await;
	let snapshot = playback.snapshot();
	assert_eq!(snapshot.readings_for_chart(&full_readings).len(), 10);

	tokio::time::sleep(Duration::from_millis(5_000)).await;
	let snapshot = playback.snapshot();
	assert_eq!(snapshot.state, PlaybackState::Paused);
	assert_eq!(snapshot.cursor, 30);
	assert_eq!(snapshot.readings.len(), 30);
	assert_eq!(snapshot.forecast.len(), 20);
	assert_eq!(snapshot.progress, 100.0);
	assert_eq!(snapshot.forecast_for_chart(&full_forecast).len(), 20);
	assert_eq!(snapshot.forecast.last().map(|each| each.day), Some(20));
}

#[tokio::test(start_paused = true)]
async fn test_empty_series_never_plays() {
	let mut playback = Playback::new(&[], &[], &PlaybackConfig::default(), now());
	playback.start();

	assert_eq!(playback.state(), PlaybackState::Idle);
	assert_eq!(playback.snapshot().progress, 0.0);
}

#[tokio::test(start_paused = true)]
async fn test_custom_tick_and_sample_size() {
	let config = PlaybackConfig {
		sample_size: 10,
		tick_millis: 20,
	};
	let mut playback = Playback::new(&readings(100), &forecast(5), &config, now());
	playback.start();

	tokio::time::sleep(Duration::from_millis(1_000)).await;
	let snapshot = playback.snapshot();
	assert_eq!(snapshot.total, 10);
	assert_eq!(snapshot.cursor, 10);
	assert_eq!(snapshot.forecast.len(), 5);
	assert_eq!(snapshot.readings[1].temperature, 4.0);
}
