//! An incremental, byte-at-a-time NMEA 0183 parser and fix aggregator.
//!
//! The parser consumes raw serial characters one at a time, validates every
//! sentence against its checksum and folds the fields of the supported
//! sentence families (`$GPGGA`, `$GPRMC`, `$GPGSA`, `$GPGSV`) into a single
//! consolidated [`Fix`]. Once every required field group has been observed
//! across a complete sentence cycle, the fix is published to the caller in
//! one atomic copy and [`Status::NewData`] is reported exactly once.
//!
//! No heap allocation takes place; the crate is usable on `no_std` targets
//! by disabling the default `std` feature.
//!
//! # Examples
//!
//! ```
//! use nmea_fix::{Fix, Parser, SentenceType, SliceSource, Status};
//!
//! let mut parser = Parser::for_navigation(&[SentenceType::GGA]).unwrap();
//! let mut fix = Fix::default();
//! let mut port = SliceSource::new(
//!     b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n",
//! );
//!
//! assert_eq!(parser.update(&mut port, &mut fix), Status::NewData);
//! assert_eq!(fix.satellites_used, 8);
//! assert!((fix.latitude - 48.1173).abs() < 1e-4);
//! ```
//!
//! Bytes normally arrive from a UART. Feed them through any type that
//! implements [`ByteSource`]; a `heapless::Deque` filled from the receive
//! interrupt works out of the box.
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(not(any(
    feature = "gga",
    feature = "rmc",
    feature = "gsa",
    feature = "gsv"
)))]
compile_error!("at least one sentence family feature must be enabled: `gga`, `rmc`, `gsa`, `gsv`");

mod error;
mod fix;
mod parser;
mod sentences;
mod source;

pub mod convert;
pub mod geodesy;

pub use error::Error;
pub use fix::{
    Date, Fix, FixMode, FixType, Satellite, Time, MAX_ACTIVE_SATELLITES, MAX_SATS_IN_VIEW,
};
pub use parser::{Parser, Status};
pub use sentences::SentenceType;
pub use source::{ByteSource, SliceSource};
