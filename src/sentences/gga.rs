//! GGA - Global Positioning System Fix Data
//!
//! ```text
//!         1         2       3 4        5 6 7  8   9   10 11  12 13  14
//!         |         |       | |        | | |  |   |   |  |   |  |   |
//! $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
//! ```
//!
//! Field Number:
//! 1. UTC of this position report
//! 2. Latitude, `ddmm.mmmm`
//! 3. N or S (hemisphere)
//! 4. Longitude, `dddmm.mmmm`
//! 5. E or W (hemisphere)
//! 6. GPS Quality Indicator: 0 = invalid, 1 = GPS, 2 = DGPS
//! 7. Number of satellites in use, 00-12
//! 8. Horizontal dilution of precision (ignored here, GSA carries it)
//! 9. Antenna altitude above mean sea level, meters

use crate::fix::{Fix, FixType};
use crate::sentences::utils::{scan_coordinate, scan_signed_fixed, scan_time, scan_uint};
use crate::sentences::{FieldFlag, FieldMask};

/// Field groups a complete cycle must observe from this family.
pub(crate) const REQUIRED_FIELDS: FieldMask = FieldMask::empty()
    .with(FieldFlag::Time)
    .with(FieldFlag::Latitude)
    .with(FieldFlag::NorthSouth)
    .with(FieldFlag::Longitude)
    .with(FieldFlag::EastWest)
    .with(FieldFlag::FixQuality)
    .with(FieldFlag::SatellitesUsed)
    .with(FieldFlag::Altitude);

/// Flag an empty field still accounts for.
pub(crate) fn empty_flag(index: u8) -> Option<FieldFlag> {
    match index {
        1 => Some(FieldFlag::Time),
        2 => Some(FieldFlag::Latitude),
        3 => Some(FieldFlag::NorthSouth),
        4 => Some(FieldFlag::Longitude),
        5 => Some(FieldFlag::EastWest),
        6 => Some(FieldFlag::FixQuality),
        7 => Some(FieldFlag::SatellitesUsed),
        9 => Some(FieldFlag::Altitude),
        _ => None,
    }
}

/// Decodes one non-empty GGA data field into the staging record.
pub(crate) fn decode(fix: &mut Fix, index: u8, field: &str) -> Option<FieldFlag> {
    match index {
        1 => {
            fix.time = scan_time(field);
            Some(FieldFlag::Time)
        }
        2 => {
            fix.latitude = scan_coordinate(field);
            Some(FieldFlag::Latitude)
        }
        3 => {
            if field.starts_with('S') {
                fix.latitude = -fix.latitude;
            }
            Some(FieldFlag::NorthSouth)
        }
        4 => {
            fix.longitude = scan_coordinate(field);
            Some(FieldFlag::Longitude)
        }
        5 => {
            if field.starts_with('W') {
                fix.longitude = -fix.longitude;
            }
            Some(FieldFlag::EastWest)
        }
        6 => {
            fix.fix_type = FixType::from(scan_uint(field).0 as u8);
            Some(FieldFlag::FixQuality)
        }
        7 => {
            fix.satellites_used = scan_uint(field).0 as u8;
            Some(FieldFlag::SatellitesUsed)
        }
        9 => {
            fix.altitude = scan_signed_fixed(field) as f32;
            Some(FieldFlag::Altitude)
        }
        _ => None,
    }
}
