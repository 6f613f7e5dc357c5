//! Dynamically typed parameter values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dynamically typed configuration value.
///
/// Parameter reflection hands values across component boundaries without
/// knowing their concrete types, so values are carried in this small enum
/// and converted back with the `as_*` accessors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean flag
    Bool(bool),
    /// Signed integer (also carries `usize` parameters)
    Int(i64),
    /// Floating point number
    Float(f64),
    /// String value (paths, metric names, ...)
    Str(String),
}

impl ParamValue {
    /// Name of the carried type, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Bool(_) => "bool",
            ParamValue::Int(_) => "int",
            ParamValue::Float(_) => "float",
            ParamValue::Str(_) => "str",
        }
    }

    /// Extract a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract a non-negative integer
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            ParamValue::Int(i) if *i >= 0 => Some(*i as usize),
            _ => None,
        }
    }

    /// Extract a float; integers widen
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            ParamValue::Float(f) => Some(*f as f32),
            ParamValue::Int(i) => Some(*i as f32),
            _ => None,
        }
    }

    /// Extract a float; integers widen
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Float(f) => Some(*f),
            ParamValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Extract a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<usize> for ParamValue {
    fn from(v: usize) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<f32> for ParamValue {
    fn from(v: f32) -> Self {
        ParamValue::Float(f64::from(v))
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_variant() {
        assert_eq!(ParamValue::Bool(true).as_bool(), Some(true));
        assert_eq!(ParamValue::Int(5).as_usize(), Some(5));
        assert_eq!(ParamValue::Int(-1).as_usize(), None);
        assert_eq!(ParamValue::Str("x".into()).as_str(), Some("x"));
        assert_eq!(ParamValue::Bool(true).as_usize(), None);
    }

    #[test]
    fn test_int_widens_to_float() {
        assert_eq!(ParamValue::Int(3).as_f32(), Some(3.0));
        assert_eq!(ParamValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(ParamValue::Str("3".into()).as_f32(), None);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(ParamValue::from(7usize), ParamValue::Int(7));
        assert_eq!(ParamValue::from(true), ParamValue::Bool(true));
        assert_eq!(ParamValue::from("abc"), ParamValue::Str("abc".to_string()));
        assert_eq!(ParamValue::from(0.5f64), ParamValue::Float(0.5));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(ParamValue::Int(0).type_name(), "int");
        assert_eq!(ParamValue::Float(0.0).type_name(), "float");
        assert_eq!(ParamValue::Bool(false).type_name(), "bool");
        assert_eq!(ParamValue::Str(String::new()).type_name(), "str");
    }

    #[test]
    fn test_display() {
        assert_eq!(ParamValue::Int(10).to_string(), "10");
        assert_eq!(ParamValue::Bool(true).to_string(), "true");
        assert_eq!(ParamValue::Str("a".into()).to_string(), "\"a\"");
    }
}
