//! iCalendar core models (RFC 5545 §3.1, §3.2).
//!
//! These types represent a single property before serialization. They are
//! designed for:
//! - Deterministic serialization: parameter emission order is sorted, never
//!   map iteration order
//! - Case normalization at construction: names are case-insensitive on the
//!   wire, so they are canonicalized once, up front

mod parameter;
mod property;

pub use parameter::Parameters;
pub use property::{Property, names};
