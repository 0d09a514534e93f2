//! iCalendar property model (RFC 5545 §3.1, §3.8).

use std::io::Write;

use super::Parameters;
use crate::error::EncodeResult;
use crate::rfc::ical::build::write_property;

/// A single property, fully formed and ready for encoding.
///
/// The name is case-insensitive; it is stored lowercase and emitted
/// uppercase. The value is raw text, escaped at encode time. Encoding
/// reads the property without mutating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name, normalized to lowercase.
    name: String,
    /// Raw content value (not yet escaped).
    value: String,
    /// Named parameters.
    params: Parameters,
    /// Whether this property follows vCalendar 1.0 conventions.
    vcal10: bool,
}

impl Property {
    /// Creates a property with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            value: value.into(),
            params: Parameters::new(),
            vcal10: false,
        }
    }

    /// Creates a property with parameters.
    #[must_use]
    pub fn with_params(
        name: impl Into<String>,
        value: impl Into<String>,
        params: Parameters,
    ) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            value: value.into(),
            params,
            vcal10: false,
        }
    }

    /// Marks this property as following vCalendar 1.0 conventions.
    ///
    /// Legacy values are emitted verbatim (no escaping), and folding is
    /// suppressed for quoted-printable content.
    #[must_use]
    pub fn vcal10(mut self) -> Self {
        self.vcal10 = true;
        self
    }

    /// Returns the normalized (lowercase) property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw content value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the parameters.
    #[must_use]
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Returns whether this property follows vCalendar 1.0 conventions.
    #[must_use]
    pub fn is_vcal10(&self) -> bool {
        self.vcal10
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Sets a parameter, replacing any existing entry with the same name.
    pub fn set_param(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.params.insert(name, values);
    }

    /// Encodes this property to the sink as a folded content line.
    ///
    /// ## Errors
    ///
    /// Returns an error if a parameter value contains a double quote or
    /// if writing to the sink fails.
    pub fn write_to<W: Write>(&self, w: &mut W) -> EncodeResult<()> {
        write_property(self, w)
    }
}

/// Common property names as constants.
pub mod names {
    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const LOCATION: &str = "LOCATION";
    pub const RRULE: &str = "RRULE";
    pub const SUMMARY: &str = "SUMMARY";
    pub const UID: &str = "UID";
}
