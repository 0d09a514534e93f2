//! Wire-format implementations, grouped by RFC.

pub mod ical;
