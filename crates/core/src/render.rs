//! Endpoint iteration and assembly.
//!
//! Walks the API document in declaration order, joins each operation with its
//! menu metadata and produces one snippet per requested profile. This is the
//! boundary the display shell consumes; a single out-of-sync endpoint never
//! aborts the pass.

use crate::document::ApiDocument;
use crate::menu::{EndpointMeta, MenuDocument, anchor_id};
use crate::sample::{Profile, SampleFacts, SampleRequest, UNSUPPORTED_PROFILE};

/// One path section with all its method docs.
#[derive(Debug)]
pub struct EndpointSection {
    /// Path as declared.
    pub path: String,
    /// Anchor identifier derived from the path.
    pub anchor: String,
    /// Methods declared for the path, in declaration order.
    pub methods: Vec<MethodDoc>,
}

/// One method of one path, with display metadata and snippets.
#[derive(Debug)]
pub struct MethodDoc {
    /// HTTP method token, upper-cased for display.
    pub method: String,
    /// Operation summary from the API description.
    pub summary: Option<String>,
    /// Display metadata from the menu overlay, with fallback applied.
    pub meta: EndpointMeta,
    /// (profile identifier, snippet) pairs, in request order.
    pub samples: Vec<(String, String)>,
}

/// Walk every endpoint and method, generating snippets for `profiles`.
///
/// Facts are derived once per method and shared across profiles. Profile
/// identifiers without an emitter produce the unsupported-language marker,
/// matching [`crate::sample::generate_sample`].
pub fn render_document(
    api: &ApiDocument,
    menu: &MenuDocument,
    profiles: &[String],
) -> Vec<EndpointSection> {
    api.endpoints
        .iter()
        .map(|endpoint| {
            let methods = endpoint
                .operations
                .iter()
                .map(|(method, operation)| {
                    let tag = operation.tags.first().map_or("", String::as_str);
                    let meta = menu.endpoint_meta(tag, &endpoint.path);
                    let facts = SampleFacts::derive(operation, api);
                    let request = SampleRequest {
                        path: &endpoint.path,
                        method,
                        facts: &facts,
                    };
                    let samples = profiles
                        .iter()
                        .map(|id| {
                            let code = match Profile::parse(id) {
                                Some(profile) => profile.emit(&request),
                                None => {
                                    tracing::warn!("No emitter for output profile {id:?}");
                                    UNSUPPORTED_PROFILE.to_string()
                                }
                            };
                            (id.clone(), code)
                        })
                        .collect();
                    MethodDoc {
                        method: method.to_uppercase(),
                        summary: operation.summary.clone(),
                        meta,
                        samples,
                    }
                })
                .collect();
            EndpointSection {
                path: endpoint.path.clone(),
                anchor: anchor_id(&endpoint.path),
                methods,
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const API_JSON: &str = r##"{
  "tags": [{ "name": "Users" }],
  "paths": {
    "/users": {
      "get": {
        "tags": ["Users"],
        "summary": "List users",
        "responses": {}
      },
      "post": {
        "tags": ["Users"],
        "responses": {}
      }
    },
    "/health": {
      "get": { "tags": ["Ops"], "responses": {} }
    }
  }
}"##;

    const MENU_JSON: &str = r#"{
  "title": "Test API",
  "Users": [
    { "path": "/users", "name": "Users collection", "description": "CRUD for users." }
  ]
}"#;

    fn render(profiles: &[&str]) -> Vec<EndpointSection> {
        let api = ApiDocument::from_json(API_JSON).unwrap();
        let menu = MenuDocument::from_json(MENU_JSON).unwrap();
        let profiles: Vec<String> = profiles.iter().map(ToString::to_string).collect();
        render_document(&api, &menu, &profiles)
    }

    #[test]
    fn sections_follow_declaration_order() {
        let sections = render(&["javascript"]);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].path, "/users");
        assert_eq!(sections[0].anchor, "users");
        assert_eq!(sections[1].anchor, "health");

        let methods: Vec<_> = sections[0].methods.iter().map(|m| m.method.as_str()).collect();
        assert_eq!(methods, ["GET", "POST"]);
    }

    #[test]
    fn menu_metadata_joined_with_fallback() {
        let sections = render(&["javascript"]);

        let users_get = &sections[0].methods[0];
        assert_eq!(users_get.meta.name, "Users collection");
        assert_eq!(users_get.meta.description, "CRUD for users.");
        assert_eq!(users_get.summary.as_deref(), Some("List users"));

        // "/health" is tagged "Ops", which has no menu section.
        let health = &sections[1].methods[0];
        assert_eq!(health.meta.name, "/health");
        assert_eq!(health.meta.description, "");
    }

    #[test]
    fn one_sample_per_requested_profile() {
        let sections = render(&["javascript", "python", "kotlin"]);
        let samples = &sections[0].methods[0].samples;
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].0, "javascript");
        assert!(samples[0].1.contains("fetch(\"/users\""));
        assert!(samples[1].1.contains("import requests"));
        assert_eq!(samples[2].1, UNSUPPORTED_PROFILE);
    }
}
