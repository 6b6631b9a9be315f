//! Schema resolution into representative example values.
//!
//! `resolve` turns a schema node into a concrete JSON value: objects resolve
//! each property, arrays resolve to a single representative element,
//! primitives use their `example` or a fixed per-type default. References are
//! walked through the document one segment at a time. The resolver never
//! fails hard: unresolvable references, cycles and malformed nodes all
//! degrade to null with a logged diagnostic, because the surrounding
//! documentation must still render for every other endpoint.

use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::document::ApiDocument;

/// A schema fragment describing the shape of a value, possibly by reference.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaNode {
    /// Reference to another document location (mutually exclusive with the
    /// concrete fields below).
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,
    /// Value kind: object, array, string, number, integer or boolean.
    /// Anything else (or absent) is treated as unknown.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Property schemas for object nodes, in declaration order.
    pub properties: Option<Map<String, Value>>,
    /// Element schema for array nodes.
    pub items: Option<Value>,
    /// Literal example overriding the per-type default.
    pub example: Option<Value>,
}

/// Resolve a schema node into an example value.
pub fn resolve(node: &SchemaNode, document: &ApiDocument) -> Value {
    resolve_node(node, document, &mut Vec::new())
}

/// Resolve a raw JSON schema fragment into an example value.
///
/// Fragments that do not decode as a schema node degrade to null.
pub fn resolve_value(schema: &Value, document: &ApiDocument) -> Value {
    resolve_raw(schema, document, &mut Vec::new())
}

fn resolve_raw(schema: &Value, document: &ApiDocument, visited: &mut Vec<String>) -> Value {
    match SchemaNode::deserialize(schema) {
        Ok(node) => resolve_node(&node, document, visited),
        Err(e) => {
            tracing::warn!("Malformed schema node: {e}");
            Value::Null
        }
    }
}

fn resolve_node(node: &SchemaNode, document: &ApiDocument, visited: &mut Vec<String>) -> Value {
    if let Some(ref_path) = &node.ref_path {
        return resolve_reference(ref_path, document, visited);
    }

    match node.kind.as_deref() {
        Some("object") => {
            let mut object = Map::new();
            if let Some(properties) = &node.properties {
                for (name, schema) in properties {
                    object.insert(name.clone(), resolve_raw(schema, document, visited));
                }
            }
            Value::Object(object)
        }
        Some("array") => match &node.items {
            Some(items) => Value::Array(vec![resolve_raw(items, document, visited)]),
            None => Value::Array(Vec::new()),
        },
        Some("string") => node.example.clone().unwrap_or_else(|| json!("string")),
        Some("number" | "integer") => node.example.clone().unwrap_or_else(|| json!(0)),
        Some("boolean") => node.example.clone().unwrap_or(Value::Bool(false)),
        _ => Value::Null,
    }
}

/// Expand a reference, guarding against cycles.
///
/// References currently being expanded sit on the `visited` stack; revisiting
/// one substitutes null instead of recursing, so a self-referential schema
/// terminates with a bounded partial structure.
fn resolve_reference(ref_path: &str, document: &ApiDocument, visited: &mut Vec<String>) -> Value {
    if visited.iter().any(|seen| seen == ref_path) {
        tracing::warn!("Cyclic schema reference {ref_path}, substituting null");
        return Value::Null;
    }
    let Some(target) = document.lookup(ref_path) else {
        tracing::warn!("Unable to resolve reference {ref_path}");
        return Value::Null;
    };
    visited.push(ref_path.to_string());
    let value = resolve_raw(target, document, visited);
    visited.pop();
    value
}
