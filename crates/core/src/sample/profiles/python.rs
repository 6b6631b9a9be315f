//! High-level-HTTP-library profile: Python with requests.

use crate::sample::SampleRequest;
use crate::sample::text::{escape_double_quoted, escape_single_quoted, response_comment};

pub(crate) fn emit(req: &SampleRequest<'_>) -> String {
    let facts = req.facts;
    let has_body = facts.request_body.is_some();
    let mut out = String::new();

    out.push_str("import requests\n\n");
    if facts.needs_auth {
        out.push_str("token = \"YOUR_AUTH_TOKEN\"\n");
    }
    if let Some(body) = &facts.request_body {
        // Triple-quoted so the indented body keeps its newlines.
        out.push_str(&format!(
            "request_body = '''{}'''\n",
            escape_single_quoted(body)
        ));
    }
    if facts.needs_auth || has_body {
        out.push('\n');
    }

    out.push_str(&format!(
        "url = \"{}\"\n",
        escape_double_quoted(req.path)
    ));
    if facts.needs_auth || has_body {
        out.push_str("headers = {\n");
        if facts.needs_auth {
            out.push_str("    \"Authorization\": f\"Bearer {token}\",\n");
        }
        if has_body {
            out.push_str("    \"Content-Type\": \"application/json\",\n");
        }
        out.push_str("}\n");
    } else {
        out.push_str("headers = {}\n");
    }
    out.push('\n');

    let data = if has_body { "data=request_body, " } else { "" };
    out.push_str(&format!(
        "response = requests.{}(url, {data}headers=headers)\n\n",
        req.method.to_lowercase()
    ));
    out.push_str("print(\"Response:\", response.text)\n");
    if let Some(body) = &facts.response_body {
        out.push_str(&response_comment(body, "# "));
        out.push('\n');
    }

    out
}
