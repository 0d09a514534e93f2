//! iCalendar property parameters (RFC 5545 §3.2).

use std::collections::HashMap;

/// The parameters attached to one property.
///
/// Parameter names are case-insensitive and normalized to uppercase at
/// insertion. A name may carry multiple values (e.g. `MEMBER`); the values
/// of one name keep their insertion order and are comma-joined on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: HashMap<String, Vec<String>>,
}

impl Parameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the values of a parameter, replacing any existing entry.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.entries.insert(name.into().to_ascii_uppercase(), values);
    }

    /// Appends one value to a parameter, creating the entry if absent.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(name.into().to_ascii_uppercase())
            .or_default()
            .push(value.into());
    }

    /// Returns the first value of a parameter, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values(name)?.first().map(String::as_str)
    }

    /// Returns all values of a parameter.
    #[must_use]
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.entries
            .get(&name.to_ascii_uppercase())
            .map(Vec::as_slice)
    }

    /// Returns parameter names in ascending lexicographic order.
    ///
    /// Emission order is part of the output contract: the underlying map
    /// has no stable iteration order, so ordering happens here, as its own
    /// observable stage.
    #[must_use]
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns whether no parameters are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of parameter names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<String>)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (N, Vec<String>)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (name, values) in iter {
            params.insert(name, values);
        }
        params
    }
}
