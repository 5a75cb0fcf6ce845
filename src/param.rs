//! Parameter value storage types.

use serde::{Deserialize, Serialize};

/// Represents a sampled parameter value.
///
/// Stores the different parameter value types uniformly. Unlike an
/// optimizer's internal encoding, categorical values carry the chosen
/// string so the mirrored record stays human-readable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
#[allow(clippy::module_name_repetitions)]
pub enum ParamValue {
    /// An integer parameter value.
    ///
    /// Declared before `Float` so an integer JSON number deserializes
    /// back as `Int` instead of being absorbed by `f64`.
    Int(i64),
    /// A floating-point parameter value.
    Float(f64),
    /// A boolean parameter value.
    Bool(bool),
    /// A categorical parameter value, stored as the chosen string.
    Str(String),
}

impl ParamValue {
    /// Numeric projection used when charting parameter axes.
    ///
    /// Booleans map to 0/1. Categorical strings have no intrinsic number;
    /// chart code assigns them per-parameter category indices and this
    /// returns `None`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        #[allow(clippy::cast_precision_loss)]
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Int(v) => Some(*v as f64),
            ParamValue::Bool(v) => Some(f64::from(u8::from(*v))),
            ParamValue::Str(_) => None,
        }
    }
}

impl core::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Bool(v) => write!(f, "{v}"),
            ParamValue::Str(v) => f.write_str(v),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}
