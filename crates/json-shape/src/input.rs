//! Dynamic input values.
//!
//! A validator inspects arbitrary untyped data: anything `serde_json` can
//! parse, plus the absent (`undefined`) value that looking up a missing
//! object key produces. JSON itself cannot represent `undefined`, so it is
//! a first-class variant here, next to a borrowed [`serde_json::Value`].

use serde_json::{Map, Value};

/// A value under validation.
///
/// `Input` is a read-only view: validation never mutates or takes ownership
/// of the data it inspects. Public entry points accept `&Value` directly
/// through the `From` conversion.
///
/// The type predicates below are the single source of truth for every
/// runtime type test in the crate — both halves of the validator contract
/// call the same predicate, so a value cannot pass one and fail the other.
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    /// The absent value, e.g. a missing object key.
    Undefined,
    /// A present JSON value.
    Value(&'a Value),
}

impl<'a> From<&'a Value> for Input<'a> {
    fn from(value: &'a Value) -> Self {
        Input::Value(value)
    }
}

impl<'a> Input<'a> {
    pub fn is_undefined(self) -> bool {
        matches!(self, Input::Undefined)
    }

    /// Exactly the JSON `null` value. Distinct from [`is_undefined`](Self::is_undefined).
    pub fn is_null(self) -> bool {
        matches!(self, Input::Value(Value::Null))
    }

    pub fn is_string(self) -> bool {
        matches!(self, Input::Value(Value::String(_)))
    }

    pub fn is_number(self) -> bool {
        matches!(self, Input::Value(Value::Number(_)))
    }

    /// A number with no fractional part.
    ///
    /// `5`, `-3` and `5.0` are integers; `5.5` is not.
    pub fn is_integer(self) -> bool {
        match self {
            Input::Value(Value::Number(n)) => {
                n.is_i64()
                    || n.is_u64()
                    || n.as_f64().map(|f| f.fract() == 0.0).unwrap_or(false)
            }
            _ => false,
        }
    }

    pub fn is_boolean(self) -> bool {
        matches!(self, Input::Value(Value::Bool(_)))
    }

    pub fn as_str(self) -> Option<&'a str> {
        match self {
            Input::Value(v) => v.as_str(),
            Input::Undefined => None,
        }
    }

    pub fn as_array(self) -> Option<&'a Vec<Value>> {
        match self {
            Input::Value(v) => v.as_array(),
            Input::Undefined => None,
        }
    }

    pub fn as_object(self) -> Option<&'a Map<String, Value>> {
        match self {
            Input::Value(v) => v.as_object(),
            Input::Undefined => None,
        }
    }

    pub fn as_value(self) -> Option<&'a Value> {
        match self {
            Input::Value(v) => Some(v),
            Input::Undefined => None,
        }
    }
}
