//! The incremental fix parser.

use arrayvec::ArrayString;

use crate::{
    error::Error,
    fix::Fix,
    sentences::{self, utils, FieldMask, SentenceType},
    source::ByteSource,
};

#[cfg(feature = "gsv")]
use crate::sentences::{gsv::GsvState, FieldFlag};

/// Scratch capacity for one comma-delimited field. Longer fields keep
/// feeding the checksum but their excess bytes are dropped.
const FIELD_CAPACITY: usize = 15;

/// Result of polling the parser.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No complete cycle has been published since power-up.
    FirstDataWaiting,
    /// The snapshot still holds the previous publish.
    OldData,
    /// A complete cycle was just copied into the snapshot. Reported exactly
    /// once per cycle.
    NewData,
}

/// Incremental NMEA 0183 parser and fix aggregator.
///
/// The parser consumes one byte at a time, validates each sentence with its
/// checksum and merges decoded fields into a private staging [`Fix`]. Once
/// every required field group has been observed it copies the staging
/// record into the caller's snapshot in one assignment and reports
/// [`Status::NewData`].
///
/// Staging is deliberately not reset between sentences or cycles: values
/// coalesce, and only the observed-field bookkeeping is cycle-scoped.
///
/// # Examples
///
/// ```
/// use nmea_fix::{Fix, Parser, SentenceType, SliceSource, Status};
///
/// let mut parser = Parser::for_navigation(&[SentenceType::GGA]).unwrap();
/// let mut fix = Fix::default();
/// let mut port = SliceSource::new(
///     b"$GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76\r\n",
/// );
///
/// assert_eq!(parser.update(&mut port, &mut fix), Status::NewData);
/// assert_eq!(parser.update(&mut port, &mut fix), Status::OldData);
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    staging: Fix,
    field: ArrayString<FIELD_CAPACITY>,
    field_index: u8,
    sentence: SentenceType,
    checksum: u8,
    star_seen: bool,
    first_cycle: bool,
    /// Verified field groups of the current cycle.
    flags: FieldMask,
    /// Field groups observed in the sentence being parsed; merged into
    /// `flags` once the sentence checksums, discarded otherwise.
    pending: FieldMask,
    required: FieldMask,
    #[cfg(feature = "gsa")]
    ids_seen: u8,
    #[cfg(feature = "gsv")]
    gsv: GsvState,
}

impl Parser {
    /// Constructs a parser that requires a full cycle from every compiled-in
    /// sentence family before publishing.
    pub fn new() -> Self {
        Self::with_required(sentences::default_required())
    }

    /// Constructs a parser that publishes once the named sentence families
    /// have completed a cycle.
    ///
    /// Families left out keep decoding into the fix when their sentences
    /// happen to arrive; they just no longer gate publication.
    ///
    /// # Examples
    ///
    /// ```
    /// use nmea_fix::{Parser, SentenceType};
    ///
    /// let parser = Parser::for_navigation(&[SentenceType::GGA, SentenceType::RMC]).unwrap();
    /// ```
    pub fn for_navigation(required: &[SentenceType]) -> Result<Self, Error> {
        if required.is_empty() {
            return Err(Error::EmptyNavConfig);
        }
        let mut mask = FieldMask::empty();
        for sentence in required {
            mask = mask.union(sentences::required_for(*sentence)?);
        }
        Ok(Self::with_required(mask))
    }

    fn with_required(required: FieldMask) -> Self {
        debug_assert!(!required.is_empty());
        Parser {
            staging: Fix::default(),
            field: ArrayString::new(),
            field_index: 0,
            sentence: SentenceType::Unknown,
            checksum: 0,
            star_seen: false,
            first_cycle: true,
            flags: FieldMask::empty(),
            pending: FieldMask::empty(),
            required,
            #[cfg(feature = "gsa")]
            ids_seen: 0,
            #[cfg(feature = "gsv")]
            gsv: GsvState::default(),
        }
    }

    /// Drains all currently available bytes from `source`.
    ///
    /// Returns [`Status::NewData`] as soon as a cycle publishes, leaving any
    /// remaining bytes queued for the next call; otherwise drains the source
    /// completely and reports [`Status::OldData`] (or
    /// [`Status::FirstDataWaiting`] until the first publish). Runtime is
    /// bounded by the number of available bytes.
    pub fn update<S: ByteSource>(&mut self, source: &mut S, snapshot: &mut Fix) -> Status {
        while let Some(byte) = source.next_byte() {
            if self.feed(byte, snapshot) == Status::NewData {
                return Status::NewData;
            }
        }
        self.report()
    }

    /// Feeds a single byte through the sentence lexer.
    ///
    /// The snapshot is written only when this byte completes a cycle, in
    /// which case [`Status::NewData`] is returned.
    pub fn feed(&mut self, byte: u8, snapshot: &mut Fix) -> Status {
        if self.flags.contains_all(self.required) {
            // published on a previous byte; a new cycle starts here
            self.flags.clear();
        }
        match byte {
            b'$' => {
                self.star_seen = false;
                self.checksum = 0;
                self.field_index = 0;
                self.pending.clear();
                self.field.clear();
                let _ = self.field.try_push('$');
            }
            b',' => {
                self.checksum ^= byte;
                self.end_field();
            }
            b'*' => {
                self.star_seen = true;
                self.end_field();
            }
            b'\r' => {
                // the scratch buffer now holds the two checksum digits
                let mut nibbles = self.field.as_str().bytes();
                let received = utils::hex_value(nibbles.next().unwrap_or(0)) * 16
                    + utils::hex_value(nibbles.next().unwrap_or(0));
                if received == self.checksum {
                    self.flags = self.flags.union(self.pending);
                }
                self.pending.clear();
                self.field_index = 0;
                self.field.clear();
            }
            b'\n' => {
                self.field_index = 0;
                #[cfg(feature = "gsv")]
                if self.sentence == SentenceType::GSV && self.gsv.group_done() {
                    self.flags.insert(FieldFlag::SatelliteTable);
                }
            }
            _ => {
                if !self.star_seen {
                    self.checksum ^= byte;
                }
                let _ = self.field.try_push(byte as char);
            }
        }
        if self.flags.contains_all(self.required) {
            *snapshot = self.staging;
            self.first_cycle = false;
            return Status::NewData;
        }
        self.report()
    }

    fn report(&self) -> Status {
        if self.first_cycle {
            Status::FirstDataWaiting
        } else {
            Status::OldData
        }
    }

    fn end_field(&mut self) {
        self.dispatch();
        self.field_index = self.field_index.saturating_add(1);
        self.field.clear();
    }

    /// Routes the just-terminated field to its family decoder.
    ///
    /// An empty optional field still accounts for its field group (fix-less
    /// receivers transmit long runs of empty fields and the cycle must not
    /// stall on them), but the staging value is left untouched.
    fn dispatch(&mut self) {
        if self.field_index == 0 {
            self.sentence = SentenceType::classify(self.field.as_str());
            return;
        }
        if self.sentence == SentenceType::Unknown {
            return;
        }
        let flag = if self.field.is_empty() {
            match self.sentence {
                #[cfg(feature = "gga")]
                SentenceType::GGA => sentences::gga::empty_flag(self.field_index),
                #[cfg(feature = "rmc")]
                SentenceType::RMC => sentences::rmc::empty_flag(self.field_index),
                #[cfg(feature = "gsa")]
                SentenceType::GSA => sentences::gsa::empty_flag(self.field_index),
                #[cfg(feature = "gsv")]
                SentenceType::GSV => sentences::gsv::empty_flag(self.field_index),
                _ => None,
            }
        } else {
            let field = self.field.as_str();
            match self.sentence {
                #[cfg(feature = "gga")]
                SentenceType::GGA => sentences::gga::decode(&mut self.staging, self.field_index, field),
                #[cfg(feature = "rmc")]
                SentenceType::RMC => sentences::rmc::decode(&mut self.staging, self.field_index, field),
                #[cfg(feature = "gsa")]
                SentenceType::GSA => sentences::gsa::decode(
                    &mut self.staging,
                    &mut self.ids_seen,
                    self.field_index,
                    field,
                ),
                #[cfg(feature = "gsv")]
                SentenceType::GSV => sentences::gsv::decode(
                    &mut self.staging,
                    &mut self.gsv,
                    self.field_index,
                    field,
                ),
                _ => None,
            }
        };
        if let Some(flag) = flag {
            self.pending.insert(flag);
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "gga")]
    use quickcheck::{QuickCheck, TestResult};

    use super::*;
    use crate::source::SliceSource;

    fn sentence(body: &str) -> String {
        let checksum = body.as_bytes()[1..].iter().fold(0u8, |c, b| c ^ b);
        format!("{body}*{checksum:02X}\r\n")
    }

    fn drain(parser: &mut Parser, fix: &mut Fix, bytes: &[u8]) -> Status {
        let mut source = SliceSource::new(bytes);
        parser.update(&mut source, fix)
    }

    #[test]
    fn test_checksum_accumulation() {
        let mut parser = Parser::new();
        let mut fix = Fix::default();
        for byte in b"$GPGSA,A,3,10" {
            parser.feed(*byte, &mut fix);
        }
        assert_eq!(
            parser.checksum,
            b"GPGSA,A,3,10".iter().fold(0u8, |c, b| c ^ b)
        );
    }

    #[test]
    fn test_star_stops_checksum_accumulation() {
        let mut parser = Parser::new();
        let mut fix = Fix::default();
        for byte in b"$AB*47" {
            parser.feed(*byte, &mut fix);
        }
        assert_eq!(parser.checksum, b'A' ^ b'B');
    }

    #[cfg(feature = "gga")]
    #[test]
    fn test_flags_merge_at_verified_line_end() {
        let mut parser = Parser::new();
        let mut fix = Fix::default();
        let line = sentence("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,");
        drain(&mut parser, &mut fix, line.as_bytes());
        assert!(parser.flags.contains_all(sentences::gga::REQUIRED_FIELDS));
        assert!(parser.pending.is_empty());
    }

    #[cfg(feature = "gga")]
    #[test]
    fn test_flags_discarded_on_checksum_mismatch() {
        let mut parser = Parser::new();
        let mut fix = Fix::default();
        drain(
            &mut parser,
            &mut fix,
            b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*00\r\n",
        );
        assert!(parser.flags.is_empty());
        assert!(parser.pending.is_empty());
        // staging keeps the prefix-decoded values, the snapshot does not
        assert_ne!(parser.staging.latitude, 0.0);
        assert_eq!(fix.latitude, 0.0);
    }

    #[cfg(feature = "gga")]
    #[test]
    fn test_publish_then_flags_clear_on_next_byte() {
        let mut parser = Parser::for_navigation(&[SentenceType::GGA]).unwrap();
        let mut fix = Fix::default();
        let line = sentence("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,");
        assert_eq!(drain(&mut parser, &mut fix, line.as_bytes()), Status::NewData);
        assert!(parser.flags.contains_all(parser.required));
        parser.feed(b'\n', &mut fix);
        assert!(parser.flags.is_empty());
    }

    #[cfg(feature = "gga")]
    #[test]
    fn test_field_overflow_drops_bytes_but_keeps_checksum() {
        let mut parser = Parser::for_navigation(&[SentenceType::GGA]).unwrap();
        let mut fix = Fix::default();
        // the ignored hdop field is far longer than the scratch buffer
        let line = sentence(
            "$GPGGA,123519,4807.038,N,01131.000,E,1,08,00000000000000000000000.9,545.4,M,46.9,M,,",
        );
        assert_eq!(drain(&mut parser, &mut fix, line.as_bytes()), Status::NewData);
        assert_eq!(fix.satellites_used, 8);
    }

    #[test]
    fn test_unknown_sentences_are_skipped() {
        let mut parser = Parser::new();
        let mut fix = Fix::default();
        let line = sentence("$GPVTG,360.0,T,348.7,M,000.0,N,000.0,K");
        assert_eq!(
            drain(&mut parser, &mut fix, line.as_bytes()),
            Status::FirstDataWaiting
        );
        assert!(parser.flags.is_empty());
    }

    #[test]
    fn test_empty_nav_config() {
        assert_eq!(Parser::for_navigation(&[]).unwrap_err(), Error::EmptyNavConfig);
        assert_eq!(
            Parser::for_navigation(&[SentenceType::Unknown]).unwrap_err(),
            Error::Unsupported(SentenceType::Unknown)
        );
    }

    #[cfg(feature = "gga")]
    fn check_gga_lat_lon_roundtrip(lat: f64, lon: f64) -> TestResult {
        if !lat.is_finite() || !lon.is_finite() {
            return TestResult::discard();
        }
        let lat = lat % 90.0;
        let lon = lon % 180.0;
        let lat_min = (lat.abs() * 60.0) % 60.0;
        let lon_min = (lon.abs() * 60.0) % 60.0;
        let body = format!(
            "$GPGGA,092750.000,{lat_deg:02}{lat_min:09.6},{lat_dir},\
             {lon_deg:03}{lon_min:09.6},{lon_dir},1,8,1.03,61.7,M,55.2,M,,",
            lat_deg = lat.abs().floor() as u8,
            lon_deg = lon.abs().floor() as u8,
            lat_dir = if lat.is_sign_positive() { 'N' } else { 'S' },
            lon_dir = if lon.is_sign_positive() { 'E' } else { 'W' },
        );
        let mut parser = match Parser::for_navigation(&[SentenceType::GGA]) {
            Ok(parser) => parser,
            Err(_) => return TestResult::failed(),
        };
        let mut fix = Fix::default();
        if drain(&mut parser, &mut fix, sentence(&body).as_bytes()) != Status::NewData {
            return TestResult::failed();
        }
        const MAX_COOR_DIFF: f64 = 1e-7;
        TestResult::from_bool(
            (fix.latitude - lat).abs() < MAX_COOR_DIFF && (fix.longitude - lon).abs() < MAX_COOR_DIFF,
        )
    }

    #[cfg(feature = "gga")]
    #[test]
    fn test_parsing_lat_lon_roundtrip() {
        // explicit regression values in addition to the random sweep
        assert!(!check_gga_lat_lon_roundtrip(0., 57.89528).is_failure());
        assert!(!check_gga_lat_lon_roundtrip(0., -43.33031).is_failure());
        QuickCheck::new().quickcheck(check_gga_lat_lon_roundtrip as fn(f64, f64) -> TestResult);
    }
}
