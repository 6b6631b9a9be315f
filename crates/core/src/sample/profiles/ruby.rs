//! Dynamically-typed object-oriented profile: Ruby with Net::HTTP.

use crate::sample::SampleRequest;
use crate::sample::text::{escape_double_quoted, escape_single_quoted, response_comment};

/// Net::HTTP request class name for a method token ("GET" -> "Get").
fn request_class(method: &str) -> String {
    let lower = method.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn emit(req: &SampleRequest<'_>) -> String {
    let facts = req.facts;
    let has_body = facts.request_body.is_some();
    let mut out = String::new();

    out.push_str("require \"net/http\"\n");
    out.push_str("require \"uri\"\n\n");
    if facts.needs_auth {
        out.push_str("token = \"YOUR_AUTH_TOKEN\"\n");
    }
    if let Some(body) = &facts.request_body {
        out.push_str(&format!("request_body = '{}'\n", escape_single_quoted(body)));
    }
    if facts.needs_auth || has_body {
        out.push('\n');
    }

    out.push_str(&format!(
        "uri = URI(\"{}\")\n",
        escape_double_quoted(req.path)
    ));
    out.push_str("http = Net::HTTP.new(uri.host, uri.port)\n");
    out.push_str("http.use_ssl = uri.scheme == \"https\"\n\n");

    out.push_str(&format!(
        "request = Net::HTTP::{}.new(uri)\n",
        request_class(req.method)
    ));
    if facts.needs_auth {
        out.push_str("request[\"Authorization\"] = \"Bearer #{token}\"\n");
    }
    if has_body {
        out.push_str("request[\"Content-Type\"] = \"application/json\"\n");
        out.push_str("request.body = request_body\n");
    }
    out.push('\n');
    out.push_str("response = http.request(request)\n");
    out.push_str("puts \"Response: #{response.body}\"\n");
    if let Some(body) = &facts.response_body {
        out.push_str(&response_comment(body, "# "));
        out.push('\n');
    }

    out
}
