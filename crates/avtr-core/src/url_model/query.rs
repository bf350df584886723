//! Query values as stored on the builder.

use std::fmt;

use crate::color::Rgba;

/// A stored attribute value, already normalized, ready for encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Int(i64),
    Color(Rgba),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{n}"),
            QueryValue::Color(c) => write!(f, "{c}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Text(s.to_string())
    }
}

impl From<i64> for QueryValue {
    fn from(n: i64) -> Self {
        QueryValue::Int(n)
    }
}

impl From<Rgba> for QueryValue {
    fn from(c: Rgba) -> Self {
        QueryValue::Color(c)
    }
}
