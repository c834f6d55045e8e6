//! TOML decoding into the normalized [`Document`] tree.

use crate::error::{Error, Result};
use crate::value::Document;

/// Parse TOML text into a [`Document`].
///
/// Key and element order follow the source. Inline tables and standard
/// tables both become [`Document::Mapping`]. Duplicate keys are rejected by
/// the parser and reported as [`Error::Decode`].
pub fn decode_str(input: &str) -> Result<Document> {
    let table: toml::Table = input
        .parse()
        .map_err(|e| Error::from_toml(e, input))?;
    Ok(Document::from(table))
}
