use serde::ser::{SerializeMap, SerializeSeq};
use toml::value::Datetime;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl core::fmt::Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(num) => write!(f, "{:?}", num),
        }
    }
}

/// Normalized document tree.
///
/// Composite values are either an ordered [`Document::Mapping`] or a
/// [`Document::Sequence`]; there is no separate variant for tables that were
/// written inline in the source, so `p = { x = 1 }` and `[p]\nx = 1` produce
/// equal trees.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Datetime(Datetime),
    Sequence(Vec<Document>),
    Mapping(Vec<(String, Document)>),
}

impl Document {
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Document::Sequence(_) | Document::Mapping(_))
    }

    pub fn as_mapping(&self) -> Option<&[(String, Document)]> {
        match self {
            Document::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Document]> {
        match self {
            Document::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up `key` in a mapping. Returns `None` for non-mappings.
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl From<toml::Value> for Document {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Document::String(s),
            toml::Value::Integer(i) => Document::Number(Number::Integer(i)),
            toml::Value::Float(f) => Document::Number(Number::Float(f)),
            toml::Value::Boolean(b) => Document::Bool(b),
            toml::Value::Datetime(dt) => Document::Datetime(dt),
            toml::Value::Array(items) => {
                Document::Sequence(items.into_iter().map(Document::from).collect())
            }
            toml::Value::Table(table) => Document::from(table),
        }
    }
}

impl From<toml::Table> for Document {
    fn from(table: toml::Table) -> Self {
        Document::Mapping(
            table
                .into_iter()
                .map(|(k, v)| (k, Document::from(v)))
                .collect(),
        )
    }
}

/// Datetimes serialize as their RFC 3339 text.
impl serde::Serialize for Document {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Document::Null => serializer.serialize_unit(),
            Document::Bool(b) => serializer.serialize_bool(*b),
            Document::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Document::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Document::String(s) => serializer.serialize_str(s),
            Document::Datetime(dt) => serializer.collect_str(dt),
            Document::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Document::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}
