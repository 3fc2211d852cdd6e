//! The validator algebra.
//!
//! A schema is a tree of [`Validator`] nodes built once and never mutated
//! afterward; validation is a pure depth-first walk of that tree against
//! the input. Every node upholds the same contract:
//! [`is_valid`](Validator::is_valid) returns `true` exactly when
//! [`get_messages`](Validator::get_messages) returns no diagnostics.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use crate::error::ValidationError;
use crate::input::Input;
use crate::message;

/// Predicate half of a [`custom`](crate::custom) validator.
pub type IsValidFn = Arc<dyn for<'a> Fn(Input<'a>) -> bool + Send + Sync>;

/// Diagnostics half of a [`custom`](crate::custom) validator.
pub type MessagesFn = Arc<dyn for<'a> Fn(Input<'a>, &str) -> Vec<String> + Send + Sync>;

/// Exact-value primitive: matches one captured JSON value.
#[derive(Debug, Clone)]
pub struct ConValidator {
    pub value: Value,
}

/// Regex primitive: the input must be a string the pattern matches.
#[derive(Debug, Clone)]
pub struct PatValidator {
    pub pattern: Regex,
    /// Replaces the generated diagnostic verbatim when set.
    pub message: Option<String>,
}

/// Fixed-shape object combinator. Shape keys keep declaration order.
#[derive(Debug, Clone)]
pub struct ObjValidator {
    pub keys: Vec<(String, Validator)>,
}

/// Homogeneous array combinator.
#[derive(Debug, Clone)]
pub struct ArrValidator {
    pub element: Box<Validator>,
}

/// Object-values combinator: one element validator over every value,
/// whatever the keys are.
#[derive(Debug, Clone)]
pub struct MapValidator {
    pub element: Box<Validator>,
}

/// Union combinator over two or more alternatives.
#[derive(Debug, Clone)]
pub struct OrValidator {
    pub alternatives: Vec<Validator>,
}

/// Escape hatch wrapping caller-supplied predicate and message functions.
///
/// The contract that diagnostics are empty exactly when the predicate
/// holds is the caller's obligation; the engine does not verify it.
#[derive(Clone)]
pub struct CustomValidator {
    pub is_valid: IsValidFn,
    pub get_messages: MessagesFn,
}

impl fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomValidator").finish_non_exhaustive()
    }
}

/// A composed validation schema.
///
/// There is no separate "schema" entity: a schema is a validator,
/// recursively. Combinators own their children; nothing is mutated after
/// construction, so a tree can be shared freely across threads and reused
/// for any number of independent validation calls.
#[derive(Debug, Clone)]
pub enum Validator {
    /// Runtime string check.
    Str,
    /// Runtime number check.
    Num,
    /// Number with no fractional part.
    Int,
    /// Runtime boolean check.
    Bool,
    /// Exactly the JSON `null` value.
    Null,
    /// The absent value.
    Undef,
    /// Exact-value match.
    Con(ConValidator),
    /// Regex-matched string.
    Pat(PatValidator),
    /// Fixed-key object.
    Obj(ObjValidator),
    /// Homogeneous array.
    Arr(ArrValidator),
    /// Homogeneous object values under arbitrary keys.
    Map(MapValidator),
    /// Union of alternatives.
    Or(OrValidator),
    /// Caller-supplied behavior.
    Custom(CustomValidator),
}

impl Validator {
    /// Whether `input` conforms to this schema.
    ///
    /// Pure and side-effect free; short-circuits on the first violation.
    pub fn is_valid<'a>(&self, input: impl Into<Input<'a>>) -> bool {
        self.valid(input.into())
    }

    /// Diagnostics for `input`, labeled with `name`.
    ///
    /// Returns an empty vector exactly when [`is_valid`](Self::is_valid)
    /// returns `true`; otherwise one entry per violation, each locating
    /// the failure inside the value through the accumulated `name` path.
    pub fn get_messages<'a>(&self, input: impl Into<Input<'a>>, name: &str) -> Vec<String> {
        self.messages(input.into(), name)
    }

    /// Validate and surface the diagnostics as a `Result`.
    pub fn check<'a>(
        &self,
        input: impl Into<Input<'a>>,
        name: &str,
    ) -> Result<(), ValidationError> {
        let messages = self.messages(input.into(), name);
        if messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { messages })
        }
    }

    /// The kind tag of this node.
    pub fn kind(&self) -> &'static str {
        match self {
            Validator::Str => "string",
            Validator::Num => "number",
            Validator::Int => "integer",
            Validator::Bool => "boolean",
            Validator::Null => "null",
            Validator::Undef => "undefined",
            Validator::Con(_) => "exact",
            Validator::Pat(_) => "regex",
            Validator::Obj(_) => "object",
            Validator::Arr(_) => "array",
            Validator::Map(_) => "map",
            Validator::Or(_) => "one-of",
            Validator::Custom(_) => "custom",
        }
    }

    fn valid(&self, input: Input) -> bool {
        match self {
            Validator::Str => input.is_string(),
            Validator::Num => input.is_number(),
            Validator::Int => input.is_integer(),
            Validator::Bool => input.is_boolean(),
            Validator::Null => input.is_null(),
            Validator::Undef => input.is_undefined(),
            Validator::Con(v) => con_matches(v, input),
            Validator::Pat(v) => pat_matches(v, input),
            Validator::Obj(v) => valid_obj(v, input),
            Validator::Arr(v) => match input.as_array() {
                Some(arr) => arr.iter().all(|el| v.element.valid(Input::Value(el))),
                None => false,
            },
            Validator::Map(v) => match input.as_object() {
                Some(obj) => obj.values().all(|el| v.element.valid(Input::Value(el))),
                None => false,
            },
            Validator::Or(v) => v.alternatives.iter().any(|alt| alt.valid(input)),
            Validator::Custom(v) => (v.is_valid)(input),
        }
    }

    fn messages(&self, input: Input, name: &str) -> Vec<String> {
        match self {
            Validator::Str => primitive(input.is_string(), name, "is not a string"),
            Validator::Num => primitive(input.is_number(), name, "is not a number"),
            Validator::Int => primitive(input.is_integer(), name, "is not an integer"),
            Validator::Bool => primitive(input.is_boolean(), name, "is not a boolean"),
            Validator::Null => primitive(input.is_null(), name, "is not null"),
            Validator::Undef => primitive(input.is_undefined(), name, "is not undefined"),
            Validator::Con(v) => messages_con(v, input, name),
            Validator::Pat(v) => messages_pat(v, input, name),
            Validator::Obj(v) => messages_obj(v, input, name),
            Validator::Arr(v) => messages_arr(v, input, name),
            Validator::Map(v) => messages_map(v, input, name),
            Validator::Or(v) => messages_or(v, input, name),
            Validator::Custom(v) => (v.get_messages)(input, name),
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// One mismatch diagnostic when the predicate failed, nothing otherwise.
///
/// Both halves of the contract run the same predicate, so the reported
/// kind always agrees with the accepted kind.
fn primitive(ok: bool, name: &str, description: &str) -> Vec<String> {
    if ok {
        Vec::new()
    } else {
        vec![message::mismatch(name, description)]
    }
}

fn con_matches(v: &ConValidator, input: Input) -> bool {
    match input.as_value() {
        Some(value) => value_eq(value, &v.value),
        None => false,
    }
}

fn messages_con(v: &ConValidator, input: Input, name: &str) -> Vec<String> {
    if con_matches(v, input) {
        Vec::new()
    } else {
        vec![message::mismatch(name, &format!("is not exactly {}", v.value))]
    }
}

/// Value equality with numbers compared numerically: `1` and `1.0` are the
/// same JSON number even though they are stored differently.
fn value_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(a, b)| value_eq(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).map(|w| value_eq(v, w)).unwrap_or(false))
        }
        _ => a == b,
    }
}

fn pat_matches(v: &PatValidator, input: Input) -> bool {
    input
        .as_str()
        .map(|s| v.pattern.is_match(s))
        .unwrap_or(false)
}

fn messages_pat(v: &PatValidator, input: Input, name: &str) -> Vec<String> {
    if pat_matches(v, input) {
        return Vec::new();
    }
    match &v.message {
        Some(custom) => vec![custom.clone()],
        None => vec![message::mismatch(
            name,
            &format!("does not match the regular expression /{}/", v.pattern),
        )],
    }
}

fn valid_obj(v: &ObjValidator, input: Input) -> bool {
    let obj = match input.as_object() {
        Some(o) => o,
        None => return false,
    };
    if obj.keys().any(|key| !shape_has_key(v, key)) {
        return false;
    }
    v.keys.iter().all(|(key, child)| {
        let value = obj.get(key).map(Input::Value).unwrap_or(Input::Undefined);
        child.valid(value)
    })
}

fn messages_obj(v: &ObjValidator, input: Input, name: &str) -> Vec<String> {
    let obj = match input.as_object() {
        Some(o) => o,
        None => return vec![message::mismatch(name, "is not an object")],
    };
    let mut messages = Vec::new();
    // Unrecognized keys first, in input order; then shape keys in
    // declaration order.
    for key in obj.keys() {
        if !shape_has_key(v, key) {
            messages.push(message::unknown_property(name, key));
        }
    }
    for (key, child) in &v.keys {
        let value = obj.get(key).map(Input::Value).unwrap_or(Input::Undefined);
        for child_message in child.messages(value, key) {
            messages.push(message::prefixed(name, &child_message));
        }
    }
    messages
}

fn shape_has_key(v: &ObjValidator, key: &str) -> bool {
    v.keys.iter().any(|(k, _)| k == key)
}

fn messages_arr(v: &ArrValidator, input: Input, name: &str) -> Vec<String> {
    match input.as_array() {
        Some(arr) => messages_elements(&v.element, arr.iter(), name),
        None => vec![message::mismatch(name, "is not an array")],
    }
}

fn messages_map(v: &MapValidator, input: Input, name: &str) -> Vec<String> {
    match input.as_object() {
        Some(obj) => messages_elements(&v.element, obj.values(), name),
        None => vec![message::mismatch(name, "is not an object")],
    }
}

/// Element diagnostics shared by the array and map combinators: ascending
/// positions, each labeled `name[index]`.
fn messages_elements<'a>(
    element: &Validator,
    values: impl Iterator<Item = &'a Value>,
    name: &str,
) -> Vec<String> {
    let mut messages = Vec::new();
    for (index, value) in values.enumerate() {
        let element_name = message::indexed(name, index);
        messages.extend(element.messages(Input::Value(value), &element_name));
    }
    messages
}

fn messages_or(v: &OrValidator, input: Input, name: &str) -> Vec<String> {
    if v.alternatives.iter().any(|alt| alt.valid(input)) {
        return Vec::new();
    }
    let mut collected = Vec::new();
    for alternative in &v.alternatives {
        collected.extend(alternative.messages(input, name));
    }
    vec![message::union(name, &collected)]
}
