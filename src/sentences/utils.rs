//! Field-level numeric decoders.
//!
//! NMEA fields are decoded by prefix: every decoder consumes what it
//! understands from the front of the field and ignores trailing garbage.
//! None of them signal errors; the sentence checksum is the authoritative
//! validator, so an ill-formed field simply contributes whatever prefix
//! parsed.

use nom::{
    character::complete::{char, digit0},
    sequence::preceded,
    IResult, Parser as _,
};

use crate::fix::{Date, Time};

/// Accumulates the leading decimal digits of `i`.
///
/// Returns the value, the number of digits consumed and the remaining
/// input. Overlong runs wrap, like the register they would land in.
pub(crate) fn scan_uint(i: &str) -> (u32, u32, &str) {
    let digits: IResult<&str, &str> = digit0(i);
    match digits {
        Ok((rest, digits)) => (fold_digits(digits), digits.len() as u32, rest),
        Err(_) => (0, 0, i),
    }
}

fn fold_digits(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0u32, |value, b| {
            value.wrapping_mul(10).wrapping_add(u32::from(b - b'0'))
        })
}

fn fraction(i: &str) -> IResult<&str, &str> {
    preceded(char('.'), digit0).parse(i)
}

fn pow10(n: u32) -> f64 {
    let mut value = 1.0;
    for _ in 0..n {
        value *= 10.0;
    }
    value
}

/// Decodes `integer[.fractional]` fields such as speeds, courses and DOPs.
pub(crate) fn scan_fixed(i: &str) -> f64 {
    let (int_part, _, rest) = scan_uint(i);
    let mut value = f64::from(int_part);
    if let Ok((_, digits)) = fraction(rest) {
        if !digits.is_empty() {
            value += f64::from(fold_digits(digits)) / pow10(digits.len() as u32);
        }
    }
    value
}

/// Like [`scan_fixed`] but honors a leading minus, as used by the altitude
/// field.
pub(crate) fn scan_signed_fixed(i: &str) -> f64 {
    match i.strip_prefix('-') {
        Some(rest) => -scan_fixed(rest),
        None => scan_fixed(i),
    }
}

/// Decodes the NMEA `ddmm.mmmm` (or `dddmm.mmmm`) degrees-minutes encoding
/// into decimal degrees.
///
/// The integer portion is `degrees * 100 + whole minutes`; the fraction is
/// fractional minutes. The hemisphere sign is applied by the caller once
/// the hemisphere field arrives.
pub(crate) fn scan_coordinate(i: &str) -> f64 {
    let (int_part, _, rest) = scan_uint(i);
    let mut degrees = f64::from(int_part / 100) + f64::from(int_part % 100) / 60.0;
    if let Ok((_, digits)) = fraction(rest) {
        if !digits.is_empty() {
            degrees += f64::from(fold_digits(digits)) / (pow10(digits.len() as u32) * 60.0);
        }
    }
    degrees
}

/// Decodes an `hhmmss.cc` UTC time-of-fix field.
pub(crate) fn scan_time(i: &str) -> Time {
    let (hms, _, rest) = scan_uint(i);
    let hundredths = match fraction(rest) {
        Ok((_, digits)) => fold_digits(digits),
        Err(_) => 0,
    };
    Time {
        hours: ((hms / 10000) % 100) as u8,
        minutes: ((hms / 100) % 100) as u8,
        seconds: (hms % 100) as u8,
        hundredths: hundredths as u8,
    }
}

/// Decodes a `ddmmyy` date-of-fix field.
pub(crate) fn scan_date(i: &str) -> Date {
    let (dmy, _, _) = scan_uint(i);
    Date {
        day: ((dmy / 10000) % 100) as u8,
        month: ((dmy / 100) % 100) as u8,
        year: (dmy % 100) as u8,
    }
}

/// Value of one checksum hex digit; anything else counts as zero.
pub(crate) fn hex_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'A'..=b'F' => byte - b'A' + 10,
        b'a'..=b'f' => byte - b'a' + 10,
        _ => 0,
    }
}
