//! Build an [`ErrorNode`] tree from a JSON error object.
//!
//! The input follows the shape form libraries such as react-hook-form report:
//! every field maps to an object with `message`, `type`, `types` and `ref`
//! entries, field groups map to objects of fields, and array fields map to
//! arrays with `null` holes for valid rows. A group may carry its own error
//! next to its fields (`root` errors of array fields arrive as a child named
//! `root`).
//!
//! Reserved keys with an unexpected shape are taken to be field names and are
//! descended into, so an odd input degrades to "fewer errors found" and never
//! to a failure.

use crate::fields::FormFieldIndex;
use crate::node::{ErrorNode, Leaf};
use dom::Id;
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug)]
pub enum NormalizeError {
    Json(serde_json::Error),
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::Json(err) => write!(f, "invalid error tree JSON: {err}"),
        }
    }
}

impl std::error::Error for NormalizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NormalizeError::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for NormalizeError {
    fn from(err: serde_json::Error) -> Self {
        NormalizeError::Json(err)
    }
}

pub fn from_json_str(
    text: &str,
    fields: Option<&FormFieldIndex>,
) -> Result<ErrorNode, NormalizeError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(from_json(&value, fields))
}

/// Convert a JSON error value. Total: anything unrecognized becomes
/// [`ErrorNode::Absent`].
///
/// `fields` resolves `ref` entries given as a field name; numeric refs are
/// taken as raw element ids.
pub fn from_json(value: &Value, fields: Option<&FormFieldIndex>) -> ErrorNode {
    match value {
        Value::Object(map) => from_object(map, fields),
        Value::Array(items) => {
            let children = items
                .iter()
                .enumerate()
                .map(|(i, item)| (i.to_string(), from_json(item, fields)))
                .collect();
            assemble(Leaf::default(), children)
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => ErrorNode::Absent,
    }
}

fn from_object(map: &Map<String, Value>, fields: Option<&FormFieldIndex>) -> ErrorNode {
    let mut leaf = Leaf::default();
    let mut children = Vec::new();

    for (key, value) in map {
        let ambiguous = match (key.as_str(), value) {
            ("message", Value::String(message)) => {
                leaf.message = Some(message.clone());
                false
            }
            ("message", Value::Null) => false,
            ("ref", Value::Object(r)) if !r.get("name").is_some_and(Value::is_string) => true,
            ("ref", _) => {
                leaf.element = resolve_ref(value, fields);
                if leaf.element.is_none() && !value.is_null() {
                    log::debug!(target: "field_errors.normalize", "unresolved ref {value}");
                }
                false
            }
            ("type", Value::String(_) | Value::Number(_) | Value::Null) => false,
            ("types", Value::Object(types)) if is_validation_types(types) => false,
            ("types", Value::Null) => false,
            ("message" | "type" | "types", _) => true,
            _ => {
                children.push((key.clone(), from_json(value, fields)));
                false
            }
        };

        if ambiguous {
            log::debug!(
                target: "field_errors.normalize",
                "reserved key {key:?} has an unexpected shape, treating it as a field"
            );
            children.push((key.clone(), from_json(value, fields)));
        }
    }

    assemble(leaf, children)
}

fn assemble(leaf: Leaf, children: Vec<(String, ErrorNode)>) -> ErrorNode {
    match (leaf.is_empty(), children.is_empty()) {
        (true, true) => ErrorNode::Absent,
        (false, true) => ErrorNode::Leaf(leaf),
        (is_empty, false) => ErrorNode::Internal {
            own: (!is_empty).then_some(leaf),
            children,
        },
    }
}

fn resolve_ref(value: &Value, fields: Option<&FormFieldIndex>) -> Option<Id> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()).map(Id),
        Value::String(name) => fields?.get(name),
        Value::Object(r) => {
            let name = r.get("name").and_then(Value::as_str)?;
            fields?.get(name)
        }
        Value::Null | Value::Bool(_) | Value::Array(_) => None,
    }
}

/// `types` maps each failed rule to its message(s) or to `true`.
fn is_validation_types(types: &Map<String, Value>) -> bool {
    types.values().all(|v| match v {
        Value::Array(messages) => messages.iter().all(Value::is_string),
        Value::String(_) | Value::Bool(_) | Value::Null => true,
        Value::Number(_) | Value::Object(_) => false,
    })
}
