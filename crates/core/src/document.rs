//! API description document structs for serde deserialization.
//!
//! This module defines the minimal subset of the API description that schema
//! resolution and sample generation need. Mapping order is significant
//! throughout (first content-type entry, first response with a body, path
//! iteration order for display), so order-sensitive mappings use
//! `serde_json::Map`, which preserves insertion order.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Root API description document.
///
/// Holds a typed view used for iteration plus the raw JSON tree used for
/// reference walking: a `$ref` may point at any slash-addressable location in
/// the document, not only a schema section.
#[derive(Debug, Clone)]
pub struct ApiDocument {
    /// Tag declarations, in declaration order.
    pub tags: Vec<Tag>,
    /// Endpoints, in declaration order.
    pub endpoints: Vec<Endpoint>,
    raw: Value,
}

/// A tag grouping endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    /// Tag name, also the key of the matching menu section.
    pub name: String,
}

/// One path together with its operations.
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Path string as declared (e.g. `/users/{id}`).
    pub path: String,
    /// (HTTP method, operation) pairs, in declaration order.
    pub operations: Vec<(String, Operation)>,
}

/// An API operation (one method on one path).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Tag names; the first one drives the menu lookup.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Short human-readable summary.
    pub summary: Option<String>,
    /// Security requirement objects, each mapping scheme name to scope list.
    #[serde(default)]
    pub security: Vec<Map<String, Value>>,
    /// Request body definition.
    pub request_body: Option<RequestBody>,
    /// Responses by status code, in declaration order.
    #[serde(default)]
    pub responses: Map<String, Value>,
}

/// A request body definition.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestBody {
    /// Content-type to media-object mapping.
    pub content: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default)]
    paths: Map<String, Value>,
}

impl ApiDocument {
    /// Parse an API description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let raw: Value = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse API description: {e}"))?;
        Self::from_value(raw)
    }

    /// Build a document from an already-parsed JSON tree.
    pub fn from_value(raw: Value) -> Result<Self, String> {
        let doc: RawDocument = serde_json::from_value(raw.clone())
            .map_err(|e| format!("Invalid API description: {e}"))?;

        let mut endpoints = Vec::with_capacity(doc.paths.len());
        for (path, methods) in &doc.paths {
            let Some(methods) = methods.as_object() else {
                return Err(format!("Invalid path item for {path}: expected an object"));
            };
            let mut operations = Vec::with_capacity(methods.len());
            for (method, op) in methods {
                let op: Operation = serde_json::from_value(op.clone())
                    .map_err(|e| format!("Invalid operation {method} {path}: {e}"))?;
                operations.push((method.clone(), op));
            }
            endpoints.push(Endpoint {
                path: path.clone(),
                operations,
            });
        }

        Ok(Self {
            tags: doc.tags,
            endpoints,
            raw,
        })
    }

    /// Walk the raw document along a slash-delimited reference path.
    ///
    /// A leading `#` and empty segments are skipped, so both
    /// `#/components/schemas/User` and `components/schemas/User` address the
    /// same node. Returns `None` as soon as a segment is absent.
    pub fn lookup(&self, ref_path: &str) -> Option<&Value> {
        let mut node = &self.raw;
        for segment in ref_path.trim_start_matches('#').split('/') {
            if segment.is_empty() {
                continue;
            }
            node = node.get(segment)?;
        }
        Some(node)
    }
}

impl Operation {
    /// Whether any security requirement asks for bearer-token auth.
    pub fn requires_bearer_auth(&self) -> bool {
        self.security.iter().any(|req| req.contains_key("bearerAuth"))
    }

    /// Schema of the first request-body content entry.
    ///
    /// `None` when the operation declares no body content; a content entry
    /// without a schema yields null, which resolves to a null body.
    pub fn request_schema(&self) -> Option<Value> {
        let content = self.request_body.as_ref()?.content.as_ref()?;
        let media = content.values().next()?;
        Some(media.get("schema").cloned().unwrap_or(Value::Null))
    }

    /// Schema of the first content entry of the first response carrying
    /// content, in declaration order.
    pub fn response_schema(&self) -> Option<Value> {
        let content = self
            .responses
            .values()
            .find_map(|r| r.get("content").and_then(Value::as_object))?;
        let media = content.values().next()?;
        Some(media.get("schema").cloned().unwrap_or(Value::Null))
    }
}
