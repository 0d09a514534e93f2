//! Content line encoding for iCalendar-style text formats.
//!
//! Serializes a single structured property (name, value, and named
//! parameters) into the folded, escaped wire form of RFC 5545, with a
//! compatibility mode for vCalendar 1.0 producers. This crate is
//! encode-only: parsing and document-level assembly live elsewhere.

pub mod error;
pub mod rfc;

pub use error::{EncodeError, EncodeResult};
pub use rfc::ical::build::{fold_line, write_property};
pub use rfc::ical::core::{Parameters, Property};
