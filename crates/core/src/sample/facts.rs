//! Derived facts shared by every profile emitter.
//!
//! Derivation happens once per endpoint-method pair; the emitters only
//! consume the result and never re-derive anything.

use serde_json::Value;

use crate::document::{ApiDocument, Operation};
use crate::resolve::resolve_value;

/// Facts derived from one operation, shared across all output profiles.
#[derive(Debug, Clone, Default)]
pub struct SampleFacts {
    /// Whether the operation requires a bearer token.
    pub needs_auth: bool,
    /// Request body example, serialized with 2-space indentation.
    pub request_body: Option<String>,
    /// Expected response body example, serialized with 2-space indentation.
    pub response_body: Option<String>,
}

impl SampleFacts {
    /// Derive the shared facts for one operation.
    pub fn derive(operation: &Operation, document: &ApiDocument) -> Self {
        Self {
            needs_auth: operation.requires_bearer_auth(),
            request_body: operation
                .request_schema()
                .map(|schema| serialize(&schema, document)),
            response_body: operation
                .response_schema()
                .map(|schema| serialize(&schema, document)),
        }
    }
}

fn serialize(schema: &Value, document: &ApiDocument) -> String {
    let value = resolve_value(schema, document);
    serde_json::to_string_pretty(&value).unwrap_or_else(|e| {
        tracing::warn!("Failed to serialize example value: {e}");
        "null".to_string()
    })
}
