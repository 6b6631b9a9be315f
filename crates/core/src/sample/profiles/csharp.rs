//! Managed async profile: C# with HttpClient.

use crate::sample::SampleRequest;
use crate::sample::text::{csharp_verbatim, escape_double_quoted, response_comment};

pub(crate) fn emit(req: &SampleRequest<'_>) -> String {
    let facts = req.facts;
    let has_body = facts.request_body.is_some();
    let mut out = String::new();

    out.push_str("using System;\n");
    out.push_str("using System.Net.Http;\n");
    if has_body {
        out.push_str("using System.Text;\n");
    }
    out.push_str("using System.Threading.Tasks;\n\n");

    out.push_str("class Program\n{\n");
    out.push_str("    static async Task Main()\n    {\n");
    if facts.needs_auth {
        out.push_str("        string token = \"YOUR_AUTH_TOKEN\";\n");
    }
    if let Some(body) = &facts.request_body {
        out.push_str(&format!(
            "        string requestBody = {};\n",
            csharp_verbatim(body)
        ));
    }
    if facts.needs_auth || has_body {
        out.push('\n');
    }

    out.push_str("        using var client = new HttpClient();\n");
    out.push_str(&format!(
        "        var request = new HttpRequestMessage(new HttpMethod(\"{}\"), \"{}\");\n",
        req.method_upper(),
        escape_double_quoted(req.path)
    ));
    if has_body {
        // The JSON content type travels with the content itself.
        out.push_str(
            "        request.Content = new StringContent(requestBody, Encoding.UTF8, \"application/json\");\n",
        );
    }
    if facts.needs_auth {
        out.push_str("        request.Headers.Add(\"Authorization\", $\"Bearer {token}\");\n");
    }
    out.push('\n');
    out.push_str("        HttpResponseMessage response = await client.SendAsync(request);\n");
    out.push_str(
        "        string responseBody = await response.Content.ReadAsStringAsync();\n",
    );
    out.push_str("        Console.WriteLine($\"Response: {responseBody}\");\n");
    if let Some(body) = &facts.response_body {
        out.push_str(&response_comment(body, "        // "));
        out.push('\n');
    }
    out.push_str("    }\n");
    out.push_str("}\n");

    out
}
