//! The aggregated fix record and the value types it carries.

use core::fmt;

use chrono::{NaiveDate, NaiveTime};
use heapless::Vec;

/// Capacity of the satellites-in-view descriptor table.
pub const MAX_SATS_IN_VIEW: usize = 24;

/// Number of active-satellite id slots carried by a `$GPGSA` sentence.
pub const MAX_ACTIVE_SATELLITES: usize = 12;

/// UTC time of the fix, split the way the receiver transmits it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Time {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub hundredths: u8,
}

impl Time {
    /// Converts to a [`NaiveTime`], or `None` for out-of-range components.
    pub fn to_naive(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_milli_opt(
            u32::from(self.hours),
            u32::from(self.minutes),
            u32::from(self.seconds),
            u32::from(self.hundredths) * 10,
        )
    }
}

/// UTC date of the fix with a two-digit year.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Date {
    pub day: u8,
    pub month: u8,
    pub year: u8,
}

impl Date {
    /// Converts to a [`NaiveDate`].
    ///
    /// Two-digit years are ambiguous; anything from 83 up is read as 19xx
    /// (NMEA 0183 was released in 1983), the rest as 20xx.
    pub fn to_naive(self) -> Option<NaiveDate> {
        let year = match i32::from(self.year) {
            y @ 83..=99 => 1900 + y,
            y => 2000 + y,
        };
        NaiveDate::from_ymd_opt(year, u32::from(self.month), u32::from(self.day))
    }
}

/// Fix quality as reported in `$GPGGA` field 6: 0 = invalid, 1 = GPS,
/// 2 = differential GPS. Anything else counts as invalid.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixType {
    #[default]
    Invalid,
    Gps,
    DGps,
}

impl FixType {
    #[inline]
    pub fn is_valid(self) -> bool {
        self != FixType::Invalid
    }
}

impl From<u8> for FixType {
    fn from(x: u8) -> Self {
        match x {
            1 => FixType::Gps,
            2 => FixType::DGps,
            _ => FixType::Invalid,
        }
    }
}

/// Fix dimensionality as reported in `$GPGSA` field 2.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixMode {
    #[default]
    NoFix,
    Fix2D,
    Fix3D,
}

impl From<u8> for FixMode {
    fn from(x: u8) -> Self {
        match x {
            2 => FixMode::Fix2D,
            3 => FixMode::Fix3D,
            _ => FixMode::NoFix,
        }
    }
}

/// One satellite-in-view descriptor from a `$GPGSV` sentence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Satellite {
    /// Satellite PRN number.
    pub prn: u8,
    /// Elevation in degrees, 0-90.
    pub elevation: u8,
    /// Azimuth in degrees to true north, 0-359.
    pub azimuth: u16,
    /// Signal-to-noise ratio in dB, 0 when not tracked.
    pub snr: u8,
}

impl fmt::Display for Satellite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: elv: {} ath: {} snr: {}",
            self.prn, self.elevation, self.azimuth, self.snr
        )
    }
}

/// A consolidated navigation fix.
///
/// The parser owns a private staging copy of this record and only writes
/// into the caller's instance when a full cycle of required fields has been
/// observed, so a published `Fix` is always internally consistent.
///
/// Values coalesce across sentences; a field keeps its previous contents
/// until the next sentence carrying it arrives.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Fix {
    /// Latitude in decimal degrees, south negative.
    pub latitude: f64,
    /// Longitude in decimal degrees, west negative.
    pub longitude: f64,
    /// MSL altitude in meters.
    pub altitude: f32,
    pub fix_type: FixType,
    /// Number of satellites used for the fix, 0-12.
    pub satellites_used: u8,
    pub time: Time,

    /// `true` when the receiver flagged the `$GPRMC` data as valid (`A`).
    pub valid: bool,
    /// Speed over ground in knots.
    pub speed_over_ground: f32,
    /// Course over ground in degrees, 0-360.
    pub true_course: f32,
    pub date: Date,

    pub fix_mode: FixMode,
    /// PRNs of the satellites used for the fix, zero for unused slots.
    pub satellite_ids: [u8; MAX_ACTIVE_SATELLITES],
    pub pdop: f32,
    pub hdop: f32,
    pub vdop: f32,

    /// Number of satellites currently in view.
    pub satellites_in_view: u8,
    /// Satellites-in-view descriptor table, assembled across the `$GPGSV`
    /// sentence group.
    pub sats_info: [Satellite; MAX_SATS_IN_VIEW],
}

impl Fix {
    /// The satellites currently in view, at most [`MAX_SATS_IN_VIEW`].
    pub fn satellites(&self) -> Vec<Satellite, MAX_SATS_IN_VIEW> {
        self.sats_info
            .iter()
            .take(usize::from(self.satellites_in_view).min(MAX_SATS_IN_VIEW))
            .copied()
            .collect()
    }

    /// Speed over ground converted with [`convert_speed`](crate::convert::convert_speed).
    pub fn speed(&self, unit: crate::convert::SpeedUnit) -> f32 {
        crate::convert::convert_speed(self.speed_over_ground, unit)
    }
}

impl fmt::Display for Fix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02} lat: {:.6} lon: {:.6} alt: {:.1} sats: {}",
            self.time.hours,
            self.time.minutes,
            self.time.seconds,
            self.latitude,
            self.longitude,
            self.altitude,
            self.satellites_used,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_naive() {
        let time = Time {
            hours: 12,
            minutes: 35,
            seconds: 19,
            hundredths: 50,
        };
        assert_eq!(
            time.to_naive().unwrap(),
            NaiveTime::from_hms_milli_opt(12, 35, 19, 500).unwrap()
        );
        let bogus = Time {
            hours: 25,
            ..Time::default()
        };
        assert_eq!(bogus.to_naive(), None);
    }

    #[test]
    fn test_date_year_window() {
        let date = Date {
            day: 19,
            month: 11,
            year: 94,
        };
        assert_eq!(
            date.to_naive().unwrap(),
            NaiveDate::from_ymd_opt(1994, 11, 19).unwrap()
        );
        let date = Date {
            day: 28,
            month: 5,
            year: 11,
        };
        assert_eq!(
            date.to_naive().unwrap(),
            NaiveDate::from_ymd_opt(2011, 5, 28).unwrap()
        );
    }

    #[test]
    fn test_fix_type_from_value() {
        assert_eq!(FixType::from(0), FixType::Invalid);
        assert_eq!(FixType::from(1), FixType::Gps);
        assert_eq!(FixType::from(2), FixType::DGps);
        assert_eq!(FixType::from(7), FixType::Invalid);
        assert!(FixType::Gps.is_valid());
        assert!(FixType::DGps.is_valid());
        assert!(!FixType::Invalid.is_valid());
    }

    #[test]
    fn test_satellites_accessor() {
        let mut fix = Fix::default();
        fix.satellites_in_view = 2;
        fix.sats_info[0].prn = 10;
        fix.sats_info[1].prn = 7;
        let sats = fix.satellites();
        assert_eq!(sats.len(), 2);
        assert_eq!(sats[0].prn, 10);
        assert_eq!(sats[1].prn, 7);
    }
}
