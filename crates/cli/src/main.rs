//! snipdoc - generate per-endpoint example code from an API description.
//!
//! Fetches the API description and the menu/navigation overlay, renders every
//! endpoint-method pair and emits one snippet per requested output profile,
//! either to stdout (grouped per endpoint) or as one file per snippet into an
//! output directory.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snipdoc_core::render::EndpointSection;
use snipdoc_core::sample::Profile;
use snipdoc_core::{MenuDocument, fetch_documents, render_document};

#[derive(Parser)]
#[command(
    name = "snipdoc",
    version,
    about = "Generate per-endpoint example code from an API description"
)]
struct Args {
    /// URL of the API description document
    #[arg(long)]
    api_url: String,

    /// URL of the menu/navigation overlay document
    #[arg(long)]
    menu_url: String,

    /// Comma-separated output profiles (defaults to all)
    #[arg(long, value_delimiter = ',')]
    profiles: Vec<String>,

    /// Write one file per snippet into this directory instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snipdoc=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), String> {
    let (api, menu) = fetch_documents(&args.api_url, &args.menu_url)
        .await
        .map_err(|e| e.to_string())?;

    let profiles = if args.profiles.is_empty() {
        Profile::ALL.iter().map(|p| p.id().to_string()).collect()
    } else {
        args.profiles
    };

    let sections = render_document(&api, &menu, &profiles);
    match &args.out {
        Some(dir) => write_sections(dir, &sections)?,
        None => print_sections(&menu, &sections),
    }
    Ok(())
}

fn print_sections(menu: &MenuDocument, sections: &[EndpointSection]) {
    if !menu.title.is_empty() {
        println!("# {}\n", menu.title);
    }
    for item in &menu.summary {
        println!("## {}\n{}\n", item.name, item.content);
    }
    for section in sections {
        let allowed: Vec<&str> = section.methods.iter().map(|m| m.method.as_str()).collect();
        println!("## {} (methods: {})\n", section.path, allowed.join(", "));
        for method in &section.methods {
            println!("### {} {} ({})", method.method, section.path, method.meta.name);
            if let Some(summary) = &method.summary {
                println!("{summary}");
            }
            if !method.meta.description.is_empty() {
                println!("{}", method.meta.description);
            }
            for (profile, code) in &method.samples {
                println!("\n--- {profile} ---");
                println!("{code}");
            }
            println!();
        }
    }
}

/// Write each snippet as `<anchor>.<method>.<ext>` under `dir`.
fn write_sections(dir: &Path, sections: &[EndpointSection]) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;
    for section in sections {
        for method in &section.methods {
            for (profile, code) in &method.samples {
                let ext = match Profile::parse(profile) {
                    Some(p) => p.file_extension(),
                    None => profile.as_str(),
                };
                let name = format!("{}.{}.{ext}", section.anchor, method.method.to_lowercase());
                let path = dir.join(name);
                std::fs::write(&path, code)
                    .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use snipdoc_core::ApiDocument;

    const API_JSON: &str = r#"{
  "tags": [{ "name": "Ops" }],
  "paths": {
    "/health/live": {
      "get": { "tags": ["Ops"], "responses": {} }
    }
  }
}"#;

    #[test]
    fn writes_one_file_per_snippet() {
        let api = ApiDocument::from_json(API_JSON).unwrap();
        let menu = MenuDocument::from_json(r#"{ "title": "Ops" }"#).unwrap();
        let profiles = vec!["javascript".to_string(), "python".to_string()];
        let sections = render_document(&api, &menu, &profiles);

        let dir = tempfile::tempdir().unwrap();
        write_sections(dir.path(), &sections).unwrap();

        let js = dir.path().join("health-live.get.js");
        let py = dir.path().join("health-live.get.py");
        assert!(js.exists(), "missing {}", js.display());
        assert!(py.exists(), "missing {}", py.display());

        let code = std::fs::read_to_string(js).unwrap();
        assert!(code.contains("fetch(\"/health/live\""));
    }

    #[test]
    fn unknown_profiles_fall_back_to_their_id_as_extension() {
        let api = ApiDocument::from_json(API_JSON).unwrap();
        let menu = MenuDocument::from_json(r#"{ "title": "Ops" }"#).unwrap();
        let profiles = vec!["kotlin".to_string()];
        let sections = render_document(&api, &menu, &profiles);

        let dir = tempfile::tempdir().unwrap();
        write_sections(dir.path(), &sections).unwrap();
        assert!(dir.path().join("health-live.get.kotlin").exists());
    }
}
