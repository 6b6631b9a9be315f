//! Systems-language profile: Go with net/http.

use crate::sample::SampleRequest;
use crate::sample::text::{escape_double_quoted, go_raw_string, response_comment};

pub(crate) fn emit(req: &SampleRequest<'_>) -> String {
    let facts = req.facts;
    let has_body = facts.request_body.is_some();
    let mut out = String::new();

    out.push_str("package main\n\n");
    out.push_str("import (\n");
    if has_body {
        out.push_str("\t\"bytes\"\n");
    }
    out.push_str("\t\"fmt\"\n");
    out.push_str("\t\"io\"\n");
    out.push_str("\t\"net/http\"\n");
    out.push_str(")\n\n");

    out.push_str("func main() {\n");
    if facts.needs_auth {
        out.push_str("\ttoken := \"YOUR_AUTH_TOKEN\"\n");
    }
    if let Some(body) = &facts.request_body {
        out.push_str(&format!("\trequestBody := []byte({})\n", go_raw_string(body)));
    }
    if facts.needs_auth || has_body {
        out.push('\n');
    }

    let body_arg = if has_body {
        "bytes.NewBuffer(requestBody)"
    } else {
        "nil"
    };
    out.push_str(&format!(
        "\treq, _ := http.NewRequest(\"{}\", \"{}\", {body_arg})\n",
        req.method_upper(),
        escape_double_quoted(req.path)
    ));
    if facts.needs_auth {
        out.push_str("\treq.Header.Set(\"Authorization\", \"Bearer \"+token)\n");
    }
    if has_body {
        out.push_str("\treq.Header.Set(\"Content-Type\", \"application/json\")\n");
    }
    out.push('\n');
    out.push_str("\tclient := &http.Client{}\n");
    out.push_str("\tresp, err := client.Do(req)\n");
    out.push_str("\tif err != nil {\n");
    out.push_str("\t\tpanic(err)\n");
    out.push_str("\t}\n");
    out.push_str("\tdefer resp.Body.Close()\n\n");
    out.push_str("\tbody, _ := io.ReadAll(resp.Body)\n");
    out.push_str("\tfmt.Println(\"Response:\", string(body))\n");
    if let Some(body) = &facts.response_body {
        out.push_str(&response_comment(body, "\t// "));
        out.push('\n');
    }
    out.push_str("}\n");

    out
}
