//! RMC - Recommended Minimum Navigation Information
//!
//! ```text
//!         1         2 3       4 5        6 7   8   9    10 11
//!         |         | |       | |        | |   |   |    |  |
//! $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,ddmmyy,x.x,a*hh<CR><LF>
//! ```
//!
//! Only the status (2), speed over ground (7), course made good (8) and
//! date (9) fields are folded into the fix; position and time come from
//! GGA.

use crate::fix::Fix;
use crate::sentences::utils::{scan_date, scan_fixed};
use crate::sentences::{FieldFlag, FieldMask};

pub(crate) const REQUIRED_FIELDS: FieldMask = FieldMask::empty()
    .with(FieldFlag::Validity)
    .with(FieldFlag::Speed)
    .with(FieldFlag::Course)
    .with(FieldFlag::Date);

pub(crate) fn empty_flag(index: u8) -> Option<FieldFlag> {
    match index {
        2 => Some(FieldFlag::Validity),
        7 => Some(FieldFlag::Speed),
        8 => Some(FieldFlag::Course),
        9 => Some(FieldFlag::Date),
        _ => None,
    }
}

pub(crate) fn decode(fix: &mut Fix, index: u8, field: &str) -> Option<FieldFlag> {
    match index {
        2 => {
            fix.valid = field.starts_with('A');
            Some(FieldFlag::Validity)
        }
        7 => {
            fix.speed_over_ground = scan_fixed(field) as f32;
            Some(FieldFlag::Speed)
        }
        8 => {
            fix.true_course = scan_fixed(field) as f32;
            Some(FieldFlag::Course)
        }
        9 => {
            fix.date = scan_date(field);
            Some(FieldFlag::Date)
        }
        _ => None,
    }
}
