//! iCalendar content line encoding (RFC 5545, vCalendar 1.0).

pub mod build;
pub mod core;

#[cfg(test)]
mod tests;
