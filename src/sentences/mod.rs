//! Field dispatch for the supported sentence families.

use core::fmt;

use crate::Error;

#[cfg(feature = "gga")]
pub(crate) mod gga;
#[cfg(feature = "gsa")]
pub(crate) mod gsa;
#[cfg(feature = "gsv")]
pub(crate) mod gsv;
#[cfg(feature = "rmc")]
pub(crate) mod rmc;

pub(crate) mod utils;

/// NMEA sentence families understood by the parser.
///
/// Everything else classifies as [`SentenceType::Unknown`] and is skipped
/// after the header field; its bytes still feed the checksum accumulator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SentenceType {
    GGA,
    RMC,
    GSA,
    GSV,
    #[default]
    Unknown,
}

impl SentenceType {
    /// Classifies a header field (`$` included) by its `$GPxxx` prefix.
    ///
    /// Only the GPS talker id is recognized.
    pub(crate) fn classify(header: &str) -> Self {
        if header.starts_with("$GPGGA") {
            SentenceType::GGA
        } else if header.starts_with("$GPRMC") {
            SentenceType::RMC
        } else if header.starts_with("$GPGSA") {
            SentenceType::GSA
        } else if header.starts_with("$GPGSV") {
            SentenceType::GSV
        } else {
            SentenceType::Unknown
        }
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SentenceType::GGA => "GGA",
            SentenceType::RMC => "RMC",
            SentenceType::GSA => "GSA",
            SentenceType::GSV => "GSV",
            SentenceType::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

/// One observed field group of the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldFlag {
    Time,
    Latitude,
    NorthSouth,
    Longitude,
    EastWest,
    FixQuality,
    SatellitesUsed,
    Altitude,

    Validity,
    Speed,
    Course,
    Date,

    FixMode,
    SatelliteIds,
    Pdop,
    Hdop,
    Vdop,

    SatellitesInView,
    SatelliteTable,
}

impl FieldFlag {
    pub(crate) const fn bit(self) -> u32 {
        1 << self as u32
    }
}

/// Set of [`FieldFlag`]s, compared against the required mask to decide when
/// a cycle is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct FieldMask {
    mask: u32,
}

impl FieldMask {
    pub(crate) const fn empty() -> Self {
        FieldMask { mask: 0 }
    }

    pub(crate) const fn with(self, flag: FieldFlag) -> Self {
        FieldMask {
            mask: self.mask | flag.bit(),
        }
    }

    pub(crate) const fn union(self, other: Self) -> Self {
        FieldMask {
            mask: self.mask | other.mask,
        }
    }

    pub(crate) fn insert(&mut self, flag: FieldFlag) {
        self.mask |= flag.bit();
    }

    pub(crate) fn clear(&mut self) {
        self.mask = 0;
    }

    pub(crate) fn contains_all(self, other: Self) -> bool {
        self.mask & other.mask == other.mask
    }

    pub(crate) fn is_empty(self) -> bool {
        self.mask == 0
    }
}

/// Required field groups of every compiled-in sentence family.
pub(crate) fn default_required() -> FieldMask {
    let mask = FieldMask::empty();
    #[cfg(feature = "gga")]
    let mask = mask.union(gga::REQUIRED_FIELDS);
    #[cfg(feature = "rmc")]
    let mask = mask.union(rmc::REQUIRED_FIELDS);
    #[cfg(feature = "gsa")]
    let mask = mask.union(gsa::REQUIRED_FIELDS);
    #[cfg(feature = "gsv")]
    let mask = mask.union(gsv::REQUIRED_FIELDS);
    mask
}

/// Required field groups of a single family, if it can gate a fix in this
/// build.
pub(crate) fn required_for(sentence: SentenceType) -> Result<FieldMask, Error> {
    match sentence {
        #[cfg(feature = "gga")]
        SentenceType::GGA => Ok(gga::REQUIRED_FIELDS),
        #[cfg(feature = "rmc")]
        SentenceType::RMC => Ok(rmc::REQUIRED_FIELDS),
        #[cfg(feature = "gsa")]
        SentenceType::GSA => Ok(gsa::REQUIRED_FIELDS),
        #[cfg(feature = "gsv")]
        SentenceType::GSV => Ok(gsv::REQUIRED_FIELDS),
        SentenceType::Unknown => Err(Error::Unsupported(SentenceType::Unknown)),
        #[allow(unreachable_patterns)]
        disabled => Err(Error::DisabledSentence(disabled)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(SentenceType::classify("$GPGGA"), SentenceType::GGA);
        assert_eq!(SentenceType::classify("$GPRMC"), SentenceType::RMC);
        assert_eq!(SentenceType::classify("$GPGSA"), SentenceType::GSA);
        assert_eq!(SentenceType::classify("$GPGSV"), SentenceType::GSV);
        // prefix match, not equality
        assert_eq!(SentenceType::classify("$GPGGAX"), SentenceType::GGA);
        // other talkers are not recognized
        assert_eq!(SentenceType::classify("$GNGGA"), SentenceType::Unknown);
        assert_eq!(SentenceType::classify("$GPVTG"), SentenceType::Unknown);
        assert_eq!(SentenceType::classify(""), SentenceType::Unknown);
    }

    #[test]
    fn test_mask_operations() {
        let mut mask = FieldMask::empty();
        assert!(mask.is_empty());
        mask.insert(FieldFlag::Time);
        mask.insert(FieldFlag::Latitude);
        let required = FieldMask::empty().with(FieldFlag::Time);
        assert!(mask.contains_all(required));
        assert!(!required.contains_all(mask));
        mask.clear();
        assert!(mask.is_empty());
    }

    #[test]
    fn test_required_for_unknown() {
        assert_eq!(
            required_for(SentenceType::Unknown),
            Err(Error::Unsupported(SentenceType::Unknown))
        );
    }
}
