//! Construction API — one factory per validator kind.
//!
//! Schemas read the way they are shaped:
//!
//! ```
//! use json_shape::{array_of, boolean, number, object, optional, string};
//!
//! let hero = object([
//!     ("name", string()),
//!     ("age", number()),
//!     ("cool", optional(boolean())),
//!     ("powers", array_of(string())),
//! ]);
//! # assert!(hero.is_valid(&serde_json::json!({
//! #     "name": "Superman", "age": 30, "powers": ["flight"]
//! # })));
//! ```

use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use crate::input::Input;
use crate::validator::{
    ArrValidator, ConValidator, CustomValidator, MapValidator, ObjValidator, OrValidator,
    PatValidator, Validator,
};

/// Accepts any string.
pub fn string() -> Validator {
    Validator::Str
}

/// Accepts any number, integer or not.
pub fn number() -> Validator {
    Validator::Num
}

/// Accepts numbers with no fractional part.
pub fn integer() -> Validator {
    Validator::Int
}

/// Accepts `true` and `false`.
pub fn boolean() -> Validator {
    Validator::Bool
}

/// Accepts the JSON `null` value and nothing else — not the absent value.
pub fn null() -> Validator {
    Validator::Null
}

/// Accepts only the absent value, i.e. a missing object key.
pub fn undefined() -> Validator {
    Validator::Undef
}

/// Accepts values equal to `value`.
///
/// Equality is structural; numbers compare numerically, so `exact(1)`
/// accepts `1.0`.
pub fn exact(value: impl Into<Value>) -> Validator {
    Validator::Con(ConValidator {
        value: value.into(),
    })
}

/// Accepts strings matched by `pattern`.
///
/// The match is a search, not a full match, unless the pattern is
/// anchored.
pub fn regex(pattern: Regex) -> Validator {
    Validator::Pat(PatValidator {
        pattern,
        message: None,
    })
}

/// Like [`regex`], but a failure reports `message` verbatim instead of the
/// generated diagnostic, whatever the input was.
pub fn regex_with_message(pattern: Regex, message: impl Into<String>) -> Validator {
    Validator::Pat(PatValidator {
        pattern,
        message: Some(message.into()),
    })
}

/// Accepts objects with exactly the given shape.
///
/// Every input key must appear in the shape, and every shape key's value
/// must satisfy its validator. A missing key is presented to its validator
/// as the absent value, which is what lets [`optional`] entries tolerate
/// omission. Shape order is kept: diagnostics come out in declaration
/// order.
pub fn object<K>(keys: impl IntoIterator<Item = (K, Validator)>) -> Validator
where
    K: Into<String>,
{
    Validator::Obj(ObjValidator {
        keys: keys
            .into_iter()
            .map(|(key, validator)| (key.into(), validator))
            .collect(),
    })
}

/// Accepts arrays whose every element satisfies `element`. The empty array
/// is accepted.
///
/// `element` must not be an [`optional`] validator: an array slot is always
/// present, and an omittable index would conflate "missing" with "present
/// but undefined", which arrays cannot express.
pub fn array_of(element: Validator) -> Validator {
    Validator::Arr(ArrValidator {
        element: Box::new(element),
    })
}

/// Accepts objects whose every value, under any key, satisfies `element`.
/// The empty object is accepted.
///
/// The same element constraint as [`array_of`] applies.
pub fn map_of(element: Validator) -> Validator {
    Validator::Map(MapValidator {
        element: Box::new(element),
    })
}

/// Accepts values that at least one alternative accepts.
///
/// A union needs two alternatives to mean anything, so the signature asks
/// for both; further ones go in `rest`:
///
/// ```
/// use json_shape::{exact, one_of};
///
/// let method = one_of(exact("GET"), exact("POST"), [exact("PUT")]);
/// assert!(method.is_valid(&serde_json::json!("PUT")));
/// ```
pub fn one_of(
    first: Validator,
    second: Validator,
    rest: impl IntoIterator<Item = Validator>,
) -> Validator {
    let mut alternatives = vec![first, second];
    alternatives.extend(rest);
    Validator::Or(OrValidator { alternatives })
}

/// Accepts what `validator` accepts, plus the JSON `null` value.
pub fn nullable(validator: Validator) -> Validator {
    one_of(validator, null(), [])
}

/// Accepts what `validator` accepts, plus the absent value.
pub fn optional(validator: Validator) -> Validator {
    one_of(validator, undefined(), [])
}

/// Wraps caller-supplied behavior as a validator.
///
/// The two functions carry the whole contract: `get_messages` must return
/// an empty vector exactly when `is_valid` returns `true`. The engine
/// trusts that and composes the result like any other validator, inside
/// [`object`], [`array_of`], [`one_of`] and the rest.
pub fn custom<V, M>(is_valid: V, get_messages: M) -> Validator
where
    V: for<'a> Fn(Input<'a>) -> bool + Send + Sync + 'static,
    M: for<'a> Fn(Input<'a>, &str) -> Vec<String> + Send + Sync + 'static,
{
    Validator::Custom(CustomValidator {
        is_valid: Arc::new(is_valid),
        get_messages: Arc::new(get_messages),
    })
}
