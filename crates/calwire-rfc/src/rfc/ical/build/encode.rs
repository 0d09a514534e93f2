//! Property serialization to the wire format.

use std::io::Write;

use super::escape::escape_value;
use super::fold::fold_line;
use crate::error::{EncodeError, EncodeResult};
use crate::rfc::ical::core::{Property, names};

/// Encodes one property as a folded, CRLF-terminated content line.
///
/// The logical line is assembled in a local buffer, folded, then written
/// to the sink, so the validation failure below normally reaches the
/// caller before any bytes hit the sink. Callers must not rely on that:
/// the contract permits partial output on error.
///
/// ## Errors
///
/// Returns [`EncodeError::InvalidParameterValue`] if a parameter value
/// contains a double quote (the format has no escape for it), and
/// [`EncodeError::Io`] if writing to the sink fails.
#[tracing::instrument(skip(prop, w), fields(name = prop.name()))]
pub fn write_property<W: Write>(prop: &Property, w: &mut W) -> EncodeResult<()> {
    let mut line = String::new();
    line.push_str(&prop.name().to_ascii_uppercase());

    // Emission order is sorted parameter names, never map iteration order.
    for name in prop.params().sorted_names() {
        let Some(values) = prop.params().values(name) else {
            continue;
        };
        // A name mapped to zero values contributes no output at all.
        if values.is_empty() {
            continue;
        }

        line.push(';');
        line.push_str(name);
        line.push('=');
        for (i, value) in values.iter().enumerate() {
            if value.contains('"') {
                return Err(EncodeError::InvalidParameterValue(value.clone()));
            }
            if i > 0 {
                line.push(',');
            }
            if value.contains([';', ',', ':']) {
                line.push('"');
                line.push_str(value);
                line.push('"');
            } else {
                line.push_str(value);
            }
        }
    }
    line.push(':');

    if prop.is_vcal10() {
        // vCal 1.0 values go out verbatim.
        line.push_str(prop.value());
    } else {
        let escape_separators = !prop.name().eq_ignore_ascii_case(names::RRULE);
        escape_value(prop.value(), escape_separators, &mut line);
    }

    // In old vCal, quoted-printable content has its own continuation
    // convention; interop is better served by not folding it at all.
    let fold =
        !(prop.is_vcal10() && prop.params().get("ENCODING") == Some("QUOTED-PRINTABLE"));

    if fold {
        w.write_all(fold_line(&line).as_bytes())?;
    } else {
        w.write_all(line.as_bytes())?;
    }
    w.write_all(b"\r\n")?;

    tracing::trace!(octets = line.len(), folded = fold, "Encoded property");
    Ok(())
}
