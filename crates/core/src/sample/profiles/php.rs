//! Dynamically-typed scripting profile: PHP with cURL.

use crate::sample::SampleRequest;
use crate::sample::text::{escape_double_quoted, escape_single_quoted, response_comment};

pub(crate) fn emit(req: &SampleRequest<'_>) -> String {
    let facts = req.facts;
    let has_body = facts.request_body.is_some();
    let mut out = String::new();

    out.push_str("<?php\n\n");
    if facts.needs_auth {
        out.push_str("$token = \"YOUR_AUTH_TOKEN\";\n");
    }
    if let Some(body) = &facts.request_body {
        out.push_str(&format!("$requestBody = '{}';\n", escape_single_quoted(body)));
    }
    if facts.needs_auth || has_body {
        out.push('\n');
    }

    out.push_str("$curl = curl_init();\n\n");
    out.push_str("curl_setopt_array($curl, [\n");
    out.push_str(&format!(
        "  CURLOPT_URL => \"{}\",\n",
        escape_double_quoted(req.path)
    ));
    out.push_str("  CURLOPT_RETURNTRANSFER => true,\n");
    out.push_str("  CURLOPT_TIMEOUT => 30,\n");
    out.push_str(&format!(
        "  CURLOPT_CUSTOMREQUEST => \"{}\",\n",
        req.method_upper()
    ));
    if has_body {
        out.push_str("  CURLOPT_POSTFIELDS => $requestBody,\n");
    }
    if facts.needs_auth || has_body {
        out.push_str("  CURLOPT_HTTPHEADER => [\n");
        if facts.needs_auth {
            out.push_str("    \"Authorization: Bearer \" . $token,\n");
        }
        if has_body {
            out.push_str("    \"Content-Type: application/json\",\n");
        }
        out.push_str("  ],\n");
    }
    out.push_str("]);\n\n");

    out.push_str("$response = curl_exec($curl);\n");
    out.push_str("$err = curl_error($curl);\n\n");
    out.push_str("curl_close($curl);\n\n");
    out.push_str("if ($err) {\n");
    out.push_str("  echo \"cURL Error: \" . $err;\n");
    out.push_str("} else {\n");
    out.push_str("  echo \"Response:\\n\" . $response;\n");
    out.push_str("}\n");
    if let Some(body) = &facts.response_body {
        out.push_str(&response_comment(body, "// "));
        out.push('\n');
    }

    out
}
