//! YAML encoding of a [`Document`](crate::value::Document).
//!
//! Emission goes through `serde_yaml`, which writes every non-empty mapping
//! and sequence in block style and quotes any scalar a YAML loader would
//! otherwise read differently. Empty collections come out as `{}` / `[]`.

use std::io::Write;

use crate::{Result, value::Document};

pub fn encode_document_to_string(value: &Document) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

pub fn encode_document_to_writer<W: Write>(writer: W, value: &Document) -> Result<()> {
    serde_yaml::to_writer(writer, value)?;
    Ok(())
}
