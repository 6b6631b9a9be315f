//! Browser-scripting profile: the fetch API.

use crate::sample::SampleRequest;
use crate::sample::text::{escape_double_quoted, response_comment};

pub(crate) fn emit(req: &SampleRequest<'_>) -> String {
    let facts = req.facts;
    let mut out = String::new();

    if facts.needs_auth {
        out.push_str("const token = \"YOUR_AUTH_TOKEN\";\n");
    }
    if let Some(body) = &facts.request_body {
        // The resolved body is valid JSON, which is a valid object literal.
        out.push_str(&format!("const requestBody = {body};\n"));
    }
    if facts.needs_auth || facts.request_body.is_some() {
        out.push('\n');
    }

    out.push_str(&format!(
        "fetch(\"{}\", {{\n",
        escape_double_quoted(req.path)
    ));
    out.push_str(&format!("  method: \"{}\",\n", req.method_upper()));
    if facts.request_body.is_some() {
        out.push_str("  body: JSON.stringify(requestBody),\n");
    }
    out.push_str("  headers: {\n");
    if facts.needs_auth {
        out.push_str("    \"Authorization\": `Bearer ${token}`,\n");
    }
    if facts.request_body.is_some() {
        out.push_str("    \"Content-Type\": \"application/json\",\n");
    }
    out.push_str("  },\n");
    out.push_str("})\n");
    out.push_str("  .then((response) => response.json())\n");
    out.push_str("  .then((data) => {\n");
    out.push_str("    console.log(\"Response:\", data);\n");
    if let Some(body) = &facts.response_body {
        out.push_str(&response_comment(body, "    // "));
        out.push('\n');
    }
    out.push_str("  })\n");
    out.push_str("  .catch((error) => console.error(\"Error:\", error));\n");

    out
}
