//! Example-snippet generation across output-language profiles.
//!
//! The pipeline per endpoint-method pair is:
//! 1. Derive: operation -> [`SampleFacts`] (auth flag, request/response bodies)
//! 2. Emit: facts -> snippet text, one small formatter per profile
//!
//! Facts are derived once and shared across profiles; the emitters are pure
//! string builders. Unknown profile identifiers yield a placeholder marker
//! instead of an error so one bad request never aborts a rendering pass.

mod facts;
mod profiles;
mod text;

pub use facts::SampleFacts;

use crate::document::{ApiDocument, Operation};

/// Marker returned for a profile that has no emitter.
pub const UNSUPPORTED_PROFILE: &str = "// Language not supported.";

/// Output-language profiles with an emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Browser fetch API.
    JavaScript,
    /// Go with net/http.
    Go,
    /// PHP with cURL.
    Php,
    /// Java with java.net.http.
    Java,
    /// Ruby with Net::HTTP.
    Ruby,
    /// Python with requests.
    Python,
    /// C# with an async HttpClient.
    CSharp,
}

impl Profile {
    /// Every profile, in display order.
    pub const ALL: [Self; 7] = [
        Self::JavaScript,
        Self::Go,
        Self::Php,
        Self::Java,
        Self::Ruby,
        Self::Python,
        Self::CSharp,
    ];

    /// Profile identifier as requested by callers.
    pub const fn id(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Go => "go",
            Self::Php => "php",
            Self::Java => "java",
            Self::Ruby => "ruby",
            Self::Python => "python",
            Self::CSharp => "csharp",
        }
    }

    /// File extension used when snippets are written to disk.
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::JavaScript => "js",
            Self::Go => "go",
            Self::Php => "php",
            Self::Java => "java",
            Self::Ruby => "rb",
            Self::Python => "py",
            Self::CSharp => "cs",
        }
    }

    /// Parse a profile identifier.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Emit the snippet for one endpoint-method with pre-derived facts.
    pub fn emit(self, request: &SampleRequest<'_>) -> String {
        match self {
            Self::JavaScript => profiles::javascript::emit(request),
            Self::Go => profiles::go::emit(request),
            Self::Php => profiles::php::emit(request),
            Self::Java => profiles::java::emit(request),
            Self::Ruby => profiles::ruby::emit(request),
            Self::Python => profiles::python::emit(request),
            Self::CSharp => profiles::csharp::emit(request),
        }
    }
}

/// Inputs shared by every profile emitter.
#[derive(Debug)]
pub struct SampleRequest<'a> {
    /// Endpoint path used as the request target.
    pub path: &'a str,
    /// HTTP method as declared (case preserved).
    pub method: &'a str,
    /// Facts derived once from the operation.
    pub facts: &'a SampleFacts,
}

impl SampleRequest<'_> {
    /// Method token in the upper-case form most syntaxes expect.
    pub fn method_upper(&self) -> String {
        self.method.to_uppercase()
    }
}

/// Generate a snippet for one profile of one endpoint-method pair.
///
/// Unknown profile identifiers yield [`UNSUPPORTED_PROFILE`] instead of an
/// error.
pub fn generate_sample(
    profile: &str,
    path: &str,
    method: &str,
    operation: &Operation,
    document: &ApiDocument,
) -> String {
    let Some(profile) = Profile::parse(profile) else {
        tracing::warn!("No emitter for output profile {profile:?}");
        return UNSUPPORTED_PROFILE.to_string();
    };
    let facts = SampleFacts::derive(operation, document);
    profile.emit(&SampleRequest {
        path,
        method,
        facts: &facts,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const TEST_API_JSON: &str = r##"{
  "tags": [{ "name": "Users" }],
  "paths": {
    "/users": {
      "post": {
        "tags": ["Users"],
        "summary": "Create a user",
        "security": [{ "bearerAuth": [] }],
        "requestBody": {
          "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/NewUser" } }
          }
        },
        "responses": {
          "201": {
            "content": {
              "application/json": { "schema": { "$ref": "#/components/schemas/User" } }
            }
          }
        }
      }
    },
    "/users/{id}": {
      "get": {
        "tags": ["Users"],
        "responses": {
          "204": { "description": "No content" }
        }
      }
    },
    "/notes": {
      "post": {
        "tags": ["Users"],
        "requestBody": {
          "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/Note" } }
          }
        },
        "responses": {}
      }
    }
  },
  "components": {
    "schemas": {
      "NewUser": {
        "type": "object",
        "properties": {
          "name": { "type": "string", "example": "Ada" }
        }
      },
      "User": {
        "type": "object",
        "properties": {
          "id": { "type": "integer", "example": 7 },
          "name": { "type": "string" }
        }
      },
      "Note": {
        "type": "object",
        "properties": {
          "text": { "type": "string", "example": "say \"hi\" to `dev` first" }
        }
      }
    }
  }
}"##;

    fn api() -> ApiDocument {
        ApiDocument::from_json(TEST_API_JSON).unwrap()
    }

    fn operation<'a>(doc: &'a ApiDocument, path: &str, method: &str) -> &'a Operation {
        let endpoint = doc.endpoints.iter().find(|e| e.path == path).unwrap();
        let (_, op) = endpoint
            .operations
            .iter()
            .find(|(m, _)| m == method)
            .unwrap();
        op
    }

    #[test]
    fn secured_operation_emits_auth_in_every_profile() {
        let doc = api();
        let op = operation(&doc, "/users", "post");

        for profile in Profile::ALL {
            let code = generate_sample(profile.id(), "/users", "post", op, &doc);
            assert!(
                code.contains("Authorization"),
                "{}: missing Authorization header:\n{code}",
                profile.id()
            );
            assert!(
                code.contains("YOUR_AUTH_TOKEN"),
                "{}: missing token placeholder:\n{code}",
                profile.id()
            );
            assert!(
                code.contains("application/json"),
                "{}: missing JSON content type:\n{code}",
                profile.id()
            );
        }
    }

    #[test]
    fn plain_get_emits_no_auth_no_body_in_any_profile() {
        let doc = api();
        let op = operation(&doc, "/users/{id}", "get");

        for profile in Profile::ALL {
            let code = generate_sample(profile.id(), "/users/{id}", "get", op, &doc);
            assert!(
                !code.contains("YOUR_AUTH_TOKEN"),
                "{}: unexpected token declaration:\n{code}",
                profile.id()
            );
            assert!(
                !code.contains("Authorization"),
                "{}: unexpected auth header:\n{code}",
                profile.id()
            );
            assert!(
                !code.contains("application/json"),
                "{}: unexpected content type:\n{code}",
                profile.id()
            );
            assert!(
                !code.to_lowercase().contains("requestbody")
                    && !code.contains("request_body"),
                "{}: unexpected request body:\n{code}",
                profile.id()
            );
        }
    }

    #[test]
    fn response_body_round_trips_into_every_profile() {
        let doc = api();
        let op = operation(&doc, "/users", "post");
        let expected = "{\n  \"id\": 7,\n  \"name\": \"string\"\n}";

        let facts = SampleFacts::derive(op, &doc);
        assert_eq!(facts.response_body.as_deref(), Some(expected));

        for profile in Profile::ALL {
            let code = generate_sample(profile.id(), "/users", "post", op, &doc);
            assert!(
                code.contains("Expected response:"),
                "{}: missing response label:\n{code}",
                profile.id()
            );
            assert!(
                code.contains("\"id\": 7"),
                "{}: response body not embedded:\n{code}",
                profile.id()
            );
        }

        // Comment prefixing per profile, body lines verbatim after the prefix.
        let js = generate_sample("javascript", "/users", "post", op, &doc);
        assert!(js.contains("    //   \"id\": 7,"));
        let ruby = generate_sample("ruby", "/users", "post", op, &doc);
        assert!(ruby.contains("#   \"id\": 7,"));
    }

    #[test]
    fn method_tokens_follow_each_ecosystem() {
        let doc = api();
        let op = operation(&doc, "/users/{id}", "get");

        let js = generate_sample("javascript", "/users/{id}", "get", op, &doc);
        assert!(js.contains("method: \"GET\""));
        let go = generate_sample("go", "/users/{id}", "get", op, &doc);
        assert!(go.contains("http.NewRequest(\"GET\""));
        let php = generate_sample("php", "/users/{id}", "get", op, &doc);
        assert!(php.contains("CURLOPT_CUSTOMREQUEST => \"GET\""));
        let ruby = generate_sample("ruby", "/users/{id}", "get", op, &doc);
        assert!(ruby.contains("Net::HTTP::Get.new(uri)"));
        let python = generate_sample("python", "/users/{id}", "get", op, &doc);
        assert!(python.contains("requests.get(url"));
        let csharp = generate_sample("csharp", "/users/{id}", "get", op, &doc);
        assert!(csharp.contains("new HttpMethod(\"GET\")"));
    }

    #[test]
    fn body_literals_stay_well_formed_per_profile() {
        let doc = api();
        let op = operation(&doc, "/notes", "post");

        // The resolved body contains JSON-escaped quotes and a backtick.
        let facts = SampleFacts::derive(op, &doc);
        let body = facts.request_body.unwrap();
        assert!(body.contains(r#"say \"hi\" to `dev` first"#));

        // Go splices backticks out of the raw string.
        let go = generate_sample("go", "/notes", "post", op, &doc);
        assert!(go.contains("` + \"`\" + `"));

        // C# doubles quotes inside the verbatim string.
        let csharp = generate_sample("csharp", "/notes", "post", op, &doc);
        assert!(csharp.contains(r#"""text"""#));

        // Java folds the body onto one line with escaped quotes.
        let java = generate_sample("java", "/notes", "post", op, &doc);
        assert!(java.contains(r#"String requestBody = "{\n"#));
        assert!(java.contains(r#"\"text\""#));

        // PHP and Python escape backslashes inside single-quoted literals.
        let php = generate_sample("php", "/notes", "post", op, &doc);
        assert!(php.contains(r#"$requestBody = '{"#));
        assert!(php.contains(r#"\\"hi\\""#));
        let python = generate_sample("python", "/notes", "post", op, &doc);
        assert!(python.contains("request_body = '''{"));
    }

    #[test]
    fn unknown_profile_yields_marker() {
        let doc = api();
        let op = operation(&doc, "/users/{id}", "get");
        let code = generate_sample("kotlin", "/users/{id}", "get", op, &doc);
        assert_eq!(code, UNSUPPORTED_PROFILE);
    }

    #[test]
    fn profile_identifiers_round_trip() {
        for profile in Profile::ALL {
            assert_eq!(Profile::parse(profile.id()), Some(profile));
        }
        assert_eq!(Profile::parse("swift"), None);
        assert_eq!(Profile::JavaScript.file_extension(), "js");
        assert_eq!(Profile::Ruby.file_extension(), "rb");
    }

    #[test]
    fn facts_for_bodyless_operation_are_empty() {
        let doc = api();
        let op = operation(&doc, "/users/{id}", "get");
        let facts = SampleFacts::derive(op, &doc);
        assert!(!facts.needs_auth);
        assert!(facts.request_body.is_none());
        assert!(facts.response_body.is_none());
    }
}
