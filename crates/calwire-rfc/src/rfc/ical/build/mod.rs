//! iCalendar serialization (RFC 5545).
//!
//! This module provides the encoding pipeline for one content line:
//! - Escape: content value escaping
//! - Fold: line folding at 75 characters
//! - Encode: full property serialization with sorted parameter order

mod encode;
mod escape;
mod fold;

pub use encode::write_property;
pub use fold::fold_line;
