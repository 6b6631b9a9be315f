//! Statically-typed managed profile: Java with java.net.http.

use crate::sample::SampleRequest;
use crate::sample::text::{escape_double_quoted, escape_one_line, response_comment};

pub(crate) fn emit(req: &SampleRequest<'_>) -> String {
    let facts = req.facts;
    let has_body = facts.request_body.is_some();
    let mut out = String::new();

    out.push_str("import java.net.URI;\n");
    out.push_str("import java.net.http.HttpClient;\n");
    out.push_str("import java.net.http.HttpRequest;\n");
    out.push_str("import java.net.http.HttpResponse;\n\n");

    out.push_str("public class ApiRequest {\n");
    out.push_str("    public static void main(String[] args) throws Exception {\n");
    if facts.needs_auth {
        out.push_str("        String token = \"YOUR_AUTH_TOKEN\";\n");
    }
    if let Some(body) = &facts.request_body {
        out.push_str(&format!(
            "        String requestBody = \"{}\";\n",
            escape_one_line(body)
        ));
    }
    if facts.needs_auth || has_body {
        out.push('\n');
    }

    out.push_str("        HttpClient client = HttpClient.newHttpClient();\n");
    out.push_str("        HttpRequest request = HttpRequest.newBuilder()\n");
    out.push_str(&format!(
        "            .uri(URI.create(\"{}\"))\n",
        escape_double_quoted(req.path)
    ));
    let publisher = if has_body {
        "HttpRequest.BodyPublishers.ofString(requestBody)"
    } else {
        "HttpRequest.BodyPublishers.noBody()"
    };
    out.push_str(&format!(
        "            .method(\"{}\", {publisher})\n",
        req.method_upper()
    ));
    if facts.needs_auth {
        out.push_str("            .header(\"Authorization\", \"Bearer \" + token)\n");
    }
    if has_body {
        out.push_str("            .header(\"Content-Type\", \"application/json\")\n");
    }
    out.push_str("            .build();\n\n");

    out.push_str(
        "        HttpResponse<String> response = client.send(request, HttpResponse.BodyHandlers.ofString());\n",
    );
    out.push_str("        System.out.println(\"Response: \" + response.body());\n");
    if let Some(body) = &facts.response_body {
        out.push_str(&response_comment(body, "        // "));
        out.push('\n');
    }
    out.push_str("    }\n");
    out.push_str("}\n");

    out
}
