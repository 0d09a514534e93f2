//! Integration-style tests for iCalendar content line encoding.
