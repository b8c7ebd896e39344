//! # marginalia-engine
//!
//! Turns plain-text pages written in a small markup dialect into static HTML.
//!
//! - **`parsing`**: the rendering core. Lines are classified, assembled into
//!   blocks and inline-formatted straight into HTML.
//! - **`html`**: escaping plus the page and index document renderers
//! - **`site`**: front matter, slugs, dates and the `build_site` pipeline
//! - **`io`**: filesystem helpers used by the pipeline

pub mod html;
pub mod io;
pub mod parsing;
pub mod site;

// Re-export key types for easier usage
pub use html::{IndexRenderer, PageRenderer};
pub use io::IoError;
pub use parsing::{ParseState, format_inline, render_content, render_to_string};
pub use site::{BuildError, BuildReport, Page, SiteLayout, build_site};
