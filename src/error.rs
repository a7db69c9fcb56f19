use core::fmt;

use crate::SentenceType;

/// Errors reported while configuring a [`Parser`](crate::Parser).
///
/// Parsing itself never fails; corrupt input is discarded by the checksum
/// check and the caller only ever observes the three-valued
/// [`Status`](crate::Status).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The provided navigation configuration was empty and thus invalid.
    EmptyNavConfig,
    /// The requested sentence family was excluded from this build.
    DisabledSentence(SentenceType),
    /// The sentence family cannot gate a fix.
    Unsupported(SentenceType),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyNavConfig => write!(
                f,
                "The provided navigation configuration was empty and thus invalid"
            ),
            Error::DisabledSentence(sentence) => write!(
                f,
                "Sentence family '{}' is not compiled into this build",
                sentence
            ),
            Error::Unsupported(sentence) => {
                write!(f, "Unsupported NMEA sentence '{}'", sentence)
            }
        }
    }
}

impl core::error::Error for Error {}
