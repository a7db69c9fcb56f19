//! Unit conversions for values carried in a fix.

#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::Float;

/// Target unit for converting a speed given in knots.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnit {
    // metric
    KilometersPerSecond,
    MetersPerSecond,
    KilometersPerHour,
    MetersPerMinute,
    // imperial
    MilesPerSecond,
    MilesPerHour,
    FeetPerSecond,
    FeetPerMinute,
    // pace, for runners and joggers
    MinutesPerKilometer,
    SecondsPerKilometer,
    SecondsPer100Meters,
    MinutesPerMile,
    SecondsPerMile,
    SecondsPer100Yards,
    // nautical
    NauticalMilesPerHour,
}

impl SpeedUnit {
    const fn factor(self) -> f32 {
        match self {
            SpeedUnit::KilometersPerSecond => 0.000514,
            SpeedUnit::MetersPerSecond => 0.5144,
            SpeedUnit::KilometersPerHour => 1.852,
            SpeedUnit::MetersPerMinute => 30.87,
            SpeedUnit::MilesPerSecond => 0.0003197,
            SpeedUnit::MilesPerHour => 1.151,
            SpeedUnit::FeetPerSecond => 1.688,
            SpeedUnit::FeetPerMinute => 101.3,
            SpeedUnit::MinutesPerKilometer => 32.4,
            SpeedUnit::SecondsPerKilometer => 1944.0,
            SpeedUnit::SecondsPer100Meters => 194.4,
            SpeedUnit::MinutesPerMile => 52.14,
            SpeedUnit::SecondsPerMile => 3128.0,
            SpeedUnit::SecondsPer100Yards => 177.7,
            SpeedUnit::NauticalMilesPerHour => 1.0,
        }
    }
}

/// Scales a speed in knots to the requested unit.
pub fn convert_speed(knots: f32, unit: SpeedUnit) -> f32 {
    knots * unit.factor()
}

/// A float split into its integer part and scaled fractional digits.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatParts {
    /// Truncated integer part, sign included.
    pub integer: i32,
    /// `|fractional part| * 10^decimals`.
    pub fractional: i32,
}

/// Splits `value` for display without float formatting support.
///
/// `decimals` is clamped to 9 so the scaled fraction stays within range.
pub fn split_float(value: f32, decimals: u8) -> FloatParts {
    let decimals = decimals.min(9);
    let integer = value as i32;
    let scale = 10u32.pow(u32::from(decimals)) as f32;
    let fractional = ((value - integer as f32).abs() * scale) as i32;
    FloatParts {
        integer,
        fractional,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_convert_speed() {
        assert_relative_eq!(
            convert_speed(10.0, SpeedUnit::KilometersPerHour),
            18.52,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            convert_speed(100.0, SpeedUnit::MetersPerSecond),
            51.44,
            epsilon = 1e-5
        );
        assert_relative_eq!(convert_speed(2.5, SpeedUnit::NauticalMilesPerHour), 2.5);
        assert_relative_eq!(convert_speed(0.0, SpeedUnit::SecondsPerMile), 0.0);
    }

    #[test]
    fn test_split_float() {
        let parts = split_float(545.4, 1);
        assert_eq!(parts.integer, 545);
        assert_eq!(parts.fractional, 4);

        let parts = split_float(2.5, 2);
        assert_eq!(parts.integer, 2);
        assert_eq!(parts.fractional, 50);

        let parts = split_float(-15.25, 2);
        assert_eq!(parts.integer, -15);
        assert_eq!(parts.fractional, 25);
    }

    #[test]
    fn test_split_float_clamps_decimals() {
        let parts = split_float(0.5, 200);
        assert_eq!(parts.integer, 0);
        assert_eq!(parts.fractional, 500_000_000);
    }
}
