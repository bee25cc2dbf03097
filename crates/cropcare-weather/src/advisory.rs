//! Field advisories derived from a weather reading.
//!
//! Rules are checked in order and the first match wins. Rainfall thresholds
//! apply to the hourly rate, recovered from the monthly estimate carried by
//! [`WeatherReading`].

use cropcare_types::WeatherReading;

use crate::live::HOURLY_TO_MONTHLY;

/// Advisory for heavy rain (> 5 mm/h).
pub const HEAVY_RAIN: &str = "Heavy rainfall expected. Ensure proper field drainage to prevent waterlogging. Avoid pesticide/fertilizer application.";
/// Advisory for temperatures above 35 °C.
pub const HEAT: &str = "High temperature alert. Ensure adequate irrigation and provide shade for sensitive crops. Monitor for heat stress.";
/// Advisory for humidity above 80 %.
pub const HIGH_HUMIDITY: &str = "High humidity levels may promote fungal diseases. Improve air circulation and consider preventive fungicide application.";
/// Advisory for warm, dry conditions between 25 and 35 °C.
pub const FAVOURABLE: &str = "Favorable weather conditions. Good time for field operations, spraying, and harvesting activities.";
/// Advisory for temperatures below 15 °C.
pub const COLD: &str = "Cool weather conditions. Protect sensitive crops from cold stress and adjust irrigation schedule.";
/// Advisory when no other rule applies.
pub const MODERATE: &str = "Moderate weather conditions. Continue regular farming activities with standard precautions.";

/// Pick the advisory for `reading`.
pub fn advisory(reading: &WeatherReading) -> &'static str {
    let hourly_rain = reading.rainfall / HOURLY_TO_MONTHLY;

    if hourly_rain > 5.0 {
        HEAVY_RAIN
    } else if reading.temperature > 35.0 {
        HEAT
    } else if reading.humidity > 80.0 {
        HIGH_HUMIDITY
    } else if reading.temperature > 25.0 && reading.temperature < 35.0 {
        FAVOURABLE
    } else if reading.temperature < 15.0 {
        COLD
    } else {
        MODERATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temperature: f64, humidity: f64, rainfall: f64) -> WeatherReading {
        WeatherReading {
            temperature,
            humidity,
            rainfall,
        }
    }

    #[test]
    fn heavy_rain_takes_precedence() {
        // 6 mm/h
        assert_eq!(advisory(&reading(40.0, 90.0, 6.0 * 720.0)), HEAVY_RAIN);
    }

    #[test]
    fn heat_before_humidity() {
        assert_eq!(advisory(&reading(36.0, 90.0, 0.0)), HEAT);
        assert_eq!(advisory(&reading(30.0, 85.0, 0.0)), HIGH_HUMIDITY);
    }

    #[test]
    fn temperature_bands() {
        assert_eq!(advisory(&reading(30.0, 65.0, 150.0)), FAVOURABLE);
        assert_eq!(advisory(&reading(10.0, 65.0, 150.0)), COLD);
        // Mock reading at latitude 20 is exactly 25 °C: not favourable.
        assert_eq!(advisory(&reading(25.0, 65.0, 150.0)), MODERATE);
    }
}
