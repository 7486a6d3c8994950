//! Clock source trait
//!
//! Supplies time and weather readings. Staleness and network failure
//! handling live behind this boundary; callers treat every value as
//! always available.

use crate::time::TimeSample;
use crate::weather::WeatherCondition;

/// Source of current time and weather
pub trait ClockSource {
    /// Current UTC time in seconds since the Unix epoch.
    fn current_time(&self) -> u64;

    /// Current temperature in integer degrees.
    fn current_temp(&self) -> i16;

    /// Forecast low for the day.
    fn low_temp(&self) -> i16;

    /// Forecast high for the day.
    fn high_temp(&self) -> i16;

    /// Current sky condition.
    fn condition(&self) -> WeatherCondition;

    /// Civil-time snapshot of `current_time`.
    fn sample(&self) -> TimeSample {
        TimeSample::from_epoch(self.current_time())
    }
}
