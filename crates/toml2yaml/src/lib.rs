#![doc = include_str!("../README.md")]

pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod value;

pub use crate::convert::{Conversion, Failure, Report, convert_dir, convert_file, is_candidate, target_path};
pub use crate::error::{Error, Position, Result};
pub use crate::options::{Options, SOURCE_EXTENSION, TARGET_EXTENSION};
pub use crate::value::{Document, Number};

use std::io::{Read, Write};

pub fn encode_to_string(value: &Document) -> Result<String> {
    crate::encode::encode_document_to_string(value)
}

pub fn encode_to_writer<W: Write>(writer: W, value: &Document) -> Result<()> {
    crate::encode::encode_document_to_writer(writer, value)
}

pub fn decode_from_str(s: &str) -> Result<Document> {
    crate::decode::decode_str(s)
}

pub fn decode_from_reader<R: Read>(mut reader: R) -> Result<Document> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    decode_from_str(&s)
}

/// TOML text in, block-style YAML text out.
pub fn convert_str(toml: &str) -> Result<String> {
    let doc = decode_from_str(toml)?;
    encode_to_string(&doc)
}
