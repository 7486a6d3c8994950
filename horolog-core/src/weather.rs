//! Weather classification for display purposes

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sky condition as reported by the (external) weather poller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeatherCondition {
    #[default]
    Clear,
    Windy,
    Cloudy,
    PartlyCloudy,
    Rainy,
    Snowy,
}

/// Coarse temperature class for phrase rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeatherTemp {
    Cold,
    Cool,
    Warm,
    Hot,
}

impl WeatherTemp {
    /// Classify a temperature reading in degrees Fahrenheit.
    ///
    /// Thresholds: at or below 40 is Cold, 41-60 Cool, 61-80 Warm,
    /// anything above Hot.
    pub fn from_degrees(degrees: i16) -> Self {
        match degrees {
            d if d <= 40 => WeatherTemp::Cold,
            d if d <= 60 => WeatherTemp::Cool,
            d if d <= 80 => WeatherTemp::Warm,
            _ => WeatherTemp::Hot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_classes() {
        assert_eq!(WeatherTemp::from_degrees(-10), WeatherTemp::Cold);
        assert_eq!(WeatherTemp::from_degrees(40), WeatherTemp::Cold);
        assert_eq!(WeatherTemp::from_degrees(41), WeatherTemp::Cool);
        assert_eq!(WeatherTemp::from_degrees(60), WeatherTemp::Cool);
        assert_eq!(WeatherTemp::from_degrees(72), WeatherTemp::Warm);
        assert_eq!(WeatherTemp::from_degrees(81), WeatherTemp::Hot);
    }
}
