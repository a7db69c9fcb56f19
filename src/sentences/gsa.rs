//! GSA - GPS DOP and active satellites
//!
//! ```text
//!         1 2 3                        14 15  16  17  18
//!         | | |                         |  |   |   |   |
//! $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
//! ```
//!
//! Field 2 carries the fix dimensionality, fields 3-14 the ids of the
//! satellites used for the fix, fields 15-17 PDOP, HDOP and VDOP.

use crate::fix::{Fix, FixMode};
use crate::sentences::utils::{scan_fixed, scan_uint};
use crate::sentences::{FieldFlag, FieldMask};

pub(crate) const REQUIRED_FIELDS: FieldMask = FieldMask::empty()
    .with(FieldFlag::FixMode)
    .with(FieldFlag::SatelliteIds)
    .with(FieldFlag::Pdop)
    .with(FieldFlag::Hdop)
    .with(FieldFlag::Vdop);

pub(crate) fn empty_flag(index: u8) -> Option<FieldFlag> {
    match index {
        2 => Some(FieldFlag::FixMode),
        // trailing unused id slots are transmitted empty
        3..=14 => Some(FieldFlag::SatelliteIds),
        15 => Some(FieldFlag::Pdop),
        16 => Some(FieldFlag::Hdop),
        17 => Some(FieldFlag::Vdop),
        _ => None,
    }
}

/// Decodes one non-empty GSA data field.
///
/// `ids_seen` counts decoded id fields across the sentence; the
/// [`FieldFlag::SatelliteIds`] group completes when it reaches the
/// satellites-used count, which therefore relies on the GGA sentence of the
/// cycle having arrived first.
pub(crate) fn decode(fix: &mut Fix, ids_seen: &mut u8, index: u8, field: &str) -> Option<FieldFlag> {
    match index {
        2 => {
            fix.fix_mode = FixMode::from(scan_uint(field).0 as u8);
            Some(FieldFlag::FixMode)
        }
        3..=14 => {
            fix.satellite_ids[usize::from(index) - 3] = scan_uint(field).0 as u8;
            *ids_seen = ids_seen.wrapping_add(1);
            if *ids_seen == fix.satellites_used {
                *ids_seen = 0;
                Some(FieldFlag::SatelliteIds)
            } else {
                None
            }
        }
        15 => {
            fix.pdop = scan_fixed(field) as f32;
            Some(FieldFlag::Pdop)
        }
        16 => {
            fix.hdop = scan_fixed(field) as f32;
            Some(FieldFlag::Hdop)
        }
        17 => {
            fix.vdop = scan_fixed(field) as f32;
            Some(FieldFlag::Vdop)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_decode_mode_and_dops() {
        let mut fix = Fix::default();
        let mut ids_seen = 0;
        assert_eq!(
            decode(&mut fix, &mut ids_seen, 2, "3"),
            Some(FieldFlag::FixMode)
        );
        assert_eq!(
            decode(&mut fix, &mut ids_seen, 15, "1.72"),
            Some(FieldFlag::Pdop)
        );
        assert_eq!(
            decode(&mut fix, &mut ids_seen, 16, "1.03"),
            Some(FieldFlag::Hdop)
        );
        assert_eq!(
            decode(&mut fix, &mut ids_seen, 17, "1.38"),
            Some(FieldFlag::Vdop)
        );
        assert_eq!(fix.fix_mode, FixMode::Fix3D);
        assert_relative_eq!(fix.pdop, 1.72);
        assert_relative_eq!(fix.hdop, 1.03);
        assert_relative_eq!(fix.vdop, 1.38);
    }

    #[test]
    fn test_id_count_completion() {
        let mut fix = Fix::default();
        fix.satellites_used = 3;
        let mut ids_seen = 0;
        assert_eq!(decode(&mut fix, &mut ids_seen, 3, "10"), None);
        assert_eq!(decode(&mut fix, &mut ids_seen, 4, "07"), None);
        assert_eq!(
            decode(&mut fix, &mut ids_seen, 5, "05"),
            Some(FieldFlag::SatelliteIds)
        );
        assert_eq!(ids_seen, 0);
        assert_eq!(&fix.satellite_ids[..3], &[10, 7, 5]);
    }

    #[test]
    fn test_id_count_never_completes_without_sat_count() {
        // a GSA arriving before the cycle's GGA sees satellites_used == 0
        let mut fix = Fix::default();
        let mut ids_seen = 0;
        for index in 3..=14 {
            assert_eq!(decode(&mut fix, &mut ids_seen, index, "9"), None);
        }
        assert_eq!(ids_seen, 12);
    }
}
