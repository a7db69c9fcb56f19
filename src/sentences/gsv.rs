//! GSV - Satellites in view
//!
//! ```text
//!         1 2 3 4 5 6 7     n
//!         | | | | | | |     |
//! $--GSV,x,x,x,x,x,x,x,...*hh<CR><LF>
//! ```
//!
//! Field Number:
//! 1. total number of GSV sentences in this group
//! 2. sentence number, 1-9, of this GSV message within the current group
//! 3. total number of satellites in view
//! 4. satellite PRN number
//! 5. elevation in degrees (0-90)
//! 6. azimuth in degrees to true north (000-359)
//! 7. SNR in dB (00-99), empty when not tracking
//!
//! Fields 4-7 repeat for up to four satellites per sentence. The group is
//! reassembled into one descriptor table: the descriptor slot is
//! `(sentence number - 1) * 4 + slot in sentence`, and writes past the end
//! of the table are dropped rather than clamped.
//!
//! The whole table counts as observed at the `\n` terminating a GSV
//! sentence whose sentence number equals the announced total. A receiver
//! emitting the group out of order would never complete it; that mirrors
//! the sequential way real receivers transmit the group.

use crate::fix::{Fix, MAX_SATS_IN_VIEW};
use crate::sentences::utils::scan_uint;
use crate::sentences::{FieldFlag, FieldMask};

pub(crate) const REQUIRED_FIELDS: FieldMask = FieldMask::empty()
    .with(FieldFlag::SatellitesInView)
    .with(FieldFlag::SatelliteTable);

/// Position within the current GSV sentence group.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GsvState {
    /// Announced number of sentences in the group.
    pub(crate) total: u8,
    /// Sequence number of the sentence being parsed.
    pub(crate) current: u8,
}

impl GsvState {
    /// True at the line terminator of the last sentence of the group.
    pub(crate) fn group_done(self) -> bool {
        self.current == self.total
    }
}

pub(crate) fn empty_flag(index: u8) -> Option<FieldFlag> {
    match index {
        3 => Some(FieldFlag::SatellitesInView),
        _ => None,
    }
}

pub(crate) fn decode(
    fix: &mut Fix,
    state: &mut GsvState,
    index: u8,
    field: &str,
) -> Option<FieldFlag> {
    let value = scan_uint(field).0;
    match index {
        1 => {
            state.total = value as u8;
            None
        }
        2 => {
            state.current = value as u8;
            None
        }
        3 => {
            fix.satellites_in_view = value as u8;
            Some(FieldFlag::SatellitesInView)
        }
        4.. => {
            let data_index = usize::from(index - 4);
            let slot = usize::from(state.current.wrapping_sub(1)) * 4 + data_index / 4;
            if slot < MAX_SATS_IN_VIEW {
                let sat = &mut fix.sats_info[slot];
                match data_index % 4 {
                    0 => sat.prn = value as u8,
                    1 => sat.elevation = value as u8,
                    2 => sat.azimuth = value as u16,
                    _ => sat.snr = value as u8,
                }
            }
            None
        }
        _ => None,
    }
}
