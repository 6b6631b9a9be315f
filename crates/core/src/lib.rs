//! Example-code generation for API documentation pages.
//!
//! This crate turns an API description document plus a navigation/description
//! overlay into per-endpoint example snippets. The pipeline is:
//! 1. Fetch: both documents loaded concurrently (`fetch`)
//! 2. Parse: JSON -> `ApiDocument` / `MenuDocument` (`document`, `menu`)
//! 3. Resolve: schema nodes -> representative example values (`resolve`)
//! 4. Generate: shared facts -> one snippet per output profile (`sample`)
//! 5. Assemble: endpoints joined with menu metadata (`render`)
//!
//! Resolution and generation are pure functions over the immutable documents;
//! anything unresolvable degrades to a null/placeholder value with a logged
//! diagnostic so the surrounding documentation still renders.

pub mod document;
pub mod fetch;
pub mod menu;
pub mod render;
pub mod resolve;
pub mod sample;

pub use document::ApiDocument;
pub use fetch::{LoadError, fetch_documents};
pub use menu::MenuDocument;
pub use render::render_document;
pub use resolve::{SchemaNode, resolve};
pub use sample::{Profile, generate_sample};
